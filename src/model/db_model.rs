use sqlx::{prelude::FromRow, types::Json};

use super::route::{Marker, Route};

#[derive(Debug, FromRow)]
pub struct RouteDb {
    pub id: i64,
    pub poly_lines: Json<Vec<Vec<f64>>>,
}

#[derive(Debug, FromRow)]
pub struct MarkerDb {
    pub lt: f64,
    pub ln: f64,
    pub kind: String,
    pub namee: Option<String>,
}

impl From<MarkerDb> for Marker {
    fn from(value: MarkerDb) -> Self {
        Marker {
            lt: value.lt,
            ln: value.ln,
            kind: value.kind,
            namee: value.namee,
        }
    }
}

impl RouteDb {
    /// Markers must already be ordered by their sequence.
    pub fn into_route(self, markers: Vec<MarkerDb>) -> Route {
        Route {
            id: self.id,
            marker_position: markers.into_iter().map(Marker::from).collect(),
            poly_lines: self.poly_lines.0,
        }
    }
}
