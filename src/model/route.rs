use serde::Serialize;

/// Marker type of the waypoints that stand for a bus stop.
pub const BUS_STOP_KIND: &str = "busStop";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Marker {
    pub lt: f64,
    pub ln: f64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namee: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Route {
    pub id: i64,
    #[serde(rename = "markerPosition")]
    pub marker_position: Vec<Marker>,
    /// Raw line segments as drawn on the map. Inner sequences can have any length.
    #[serde(rename = "polyLines")]
    pub poly_lines: Vec<Vec<f64>>,
}

#[derive(Clone, Debug, Default)]
pub struct NewRoute {
    pub marker_position: Vec<Marker>,
    pub poly_lines: Vec<Vec<f64>>,
}
