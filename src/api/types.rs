use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::CheckPoint;

/// Coordinates come in untyped: numbers, numeric strings or null.
#[derive(Debug, Deserialize)]
pub struct CoordinatesRequest {
    pub lt: Option<Value>,
    pub ln: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct AddCheckPointRequest {
    pub lt: Option<Value>,
    pub ln: Option<Value>,
    pub namee: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CheckCheckPointRequest {
    pub namee: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MarkerRequest {
    pub lt: Option<Value>,
    pub ln: Option<Value>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub namee: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddRouteRequest {
    #[serde(rename = "markerPosition", default)]
    pub marker_position: Vec<MarkerRequest>,
    /// Numbers or numeric strings, coerced like marker coordinates.
    #[serde(rename = "polyLines", default)]
    pub poly_lines: Vec<Vec<Value>>,
}

/// Query of `GET /route`. Kept as strings so bad numbers get our own error.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    pub s_lat: Option<String>,
    pub s_lon: Option<String>,
    pub d_lat: Option<String>,
    pub d_lon: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse<T> {
    pub message: String,
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

#[derive(Debug, Serialize)]
pub struct CheckPointExistsResponse {
    pub exists: bool,
    pub checkpoint: Option<CheckPoint>,
}
