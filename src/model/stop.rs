use serde::Serialize;
use sqlx::prelude::FromRow;

use crate::geo::{GeoPoint, Positioned};

#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct BusStop {
    pub id: i64,
    pub lt: f64,
    pub ln: f64,
}

impl Positioned for BusStop {
    fn position(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.lt,
            longitude: self.ln,
        }
    }
}
