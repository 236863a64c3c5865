use serde::Serialize;
use sqlx::prelude::FromRow;

use crate::geo::GeoPoint;

/// A named point on the map. Names are unique.
#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct CheckPoint {
    pub id: i64,
    pub lt: f64,
    pub ln: f64,
    pub namee: String,
}

#[derive(Clone, Debug)]
pub struct NewCheckPoint {
    pub position: GeoPoint,
    pub namee: String,
}
