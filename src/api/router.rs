use anyhow::Context;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{delete, get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::endpoints::*;
use crate::store::DocumentStore;

pub fn router<S: DocumentStore>(store: S) -> axum::Router {
    axum::Router::new()
        .route("/", get(hello))
        .route("/route", get(get_route::<S>))
        .route("/addroute", post(add_route::<S>))
        .route("/addbusstop", post(add_bus_stop::<S>))
        .route("/deletebus", delete(delete_bus_stop::<S>))
        .route("/addcheckpoint", post(add_checkpoint::<S>))
        .route("/checkbusstop", post(check_bus_stop::<S>))
        .route("/checkcheckpoint", post(check_checkpoint::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Lets the web client at `origin` call the API with credentials.
pub fn cors(origin: &str) -> anyhow::Result<CorsLayer> {
    let origin: HeaderValue = origin
        .parse()
        .with_context(|| format!("{origin} is not a valid CORS origin"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::PUT, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}
