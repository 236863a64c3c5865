use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use itertools::Itertools;
use serde_json::Value;
use tracing::info;

use super::error::ApiError;
use super::params;
use super::types::*;
use crate::lookup::{TripLookup, lookup_trip};
use crate::model::{BusStop, CheckPoint, Marker, NewCheckPoint, NewRoute, Route};
use crate::store::DocumentStore;

pub type Result<T> = std::result::Result<T, ApiError>;

const COORDINATES_REQUIRED: &str = "Latitude and longitude are required";
const CHECKPOINT_FIELDS_REQUIRED: &str = "Latitude, longitude, and name are required";

pub async fn hello() -> &'static str {
    "Hello, World!"
}

#[tracing::instrument(skip(store))]
pub async fn get_route<S: DocumentStore>(
    State(store): State<S>,
    Query(q): Query<RouteQuery>,
) -> Result<Json<TripLookup>> {
    let source = params::query_point("s_lat", q.s_lat.as_deref(), "s_lon", q.s_lon.as_deref())?;
    let destination =
        params::query_point("d_lat", q.d_lat.as_deref(), "d_lon", q.d_lon.as_deref())?;

    info!(?source, ?destination, "looking up route");

    let lookup = lookup_trip(&store, source, destination).await?;

    info!(matched_route = lookup.result.as_ref().map(|r| r.id), "route lookup done");

    Ok(Json(lookup))
}

#[tracing::instrument(skip_all, fields(markers = r.marker_position.len()))]
pub async fn add_route<S: DocumentStore>(
    State(store): State<S>,
    Json(r): Json<AddRouteRequest>,
) -> Result<(StatusCode, Json<CreatedResponse<Route>>)> {
    let marker_position = r
        .marker_position
        .into_iter()
        .enumerate()
        .map(|(i, m)| marker(i, m))
        .collect::<Result<Vec<_>>>()?;
    let poly_lines = poly_lines(r.poly_lines)?;

    let route = store
        .insert_route(NewRoute {
            marker_position,
            poly_lines,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Route added successfully".to_string(),
            data: route,
        }),
    ))
}

fn marker(index: usize, m: MarkerRequest) -> Result<Marker> {
    let missing = [
        ("lt", m.lt.is_none()),
        ("ln", m.ln.is_none()),
        ("type", m.kind.is_none()),
    ]
    .into_iter()
    .filter(|(_, missing)| *missing)
    .map(|(field, _)| field)
    .collect_vec();

    if !missing.is_empty() {
        return Err(ApiError::Validation(format!(
            "markerPosition[{index}] is missing {}",
            missing.join(", ")
        )));
    }

    let position = params::point(
        m.lt.as_ref(),
        m.ln.as_ref(),
        "marker coordinates are required",
    )?;

    Ok(Marker {
        lt: position.latitude,
        ln: position.longitude,
        kind: m.kind.unwrap_or_default(),
        namee: m.namee,
    })
}

fn poly_lines(lines: Vec<Vec<Value>>) -> Result<Vec<Vec<f64>>> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            line.iter()
                .enumerate()
                .map(|(j, v)| params::coordinate(&format!("polyLines[{i}][{j}]"), v))
                .collect::<Result<Vec<f64>>>()
        })
        .collect()
}

#[tracing::instrument(skip(store))]
pub async fn add_bus_stop<S: DocumentStore>(
    State(store): State<S>,
    Json(r): Json<CoordinatesRequest>,
) -> Result<(StatusCode, Json<CreatedResponse<BusStop>>)> {
    let point = params::point(r.lt.as_ref(), r.ln.as_ref(), COORDINATES_REQUIRED)?;

    if store.find_bus_stop(point).await?.is_some() {
        return Err(ApiError::Conflict("Bus stop already exists".to_string()));
    }

    // Someone else can insert the same stop between the check and the insert.
    let Some(stop) = store.insert_bus_stop(point).await? else {
        return Err(ApiError::Conflict("Bus stop already exists".to_string()));
    };

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Bus stop added successfully".to_string(),
            data: stop,
        }),
    ))
}

/// Succeeds whether or not a stop was there to delete.
#[tracing::instrument(skip(store))]
pub async fn delete_bus_stop<S: DocumentStore>(
    State(store): State<S>,
    Json(r): Json<CoordinatesRequest>,
) -> Result<Json<MessageResponse>> {
    let point = params::lookup_point(r.lt.as_ref(), r.ln.as_ref(), COORDINATES_REQUIRED)?;

    let deleted = store.delete_bus_stop(point).await?;
    info!(deleted = deleted.map(|s| s.id), "delete bus stop");

    Ok(Json(MessageResponse {
        message: "Bus stop deleted successfully".to_string(),
    }))
}

#[tracing::instrument(skip(store))]
pub async fn add_checkpoint<S: DocumentStore>(
    State(store): State<S>,
    Json(r): Json<AddCheckPointRequest>,
) -> Result<(StatusCode, Json<CreatedResponse<CheckPoint>>)> {
    let namee = r
        .namee
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ApiError::Validation(CHECKPOINT_FIELDS_REQUIRED.to_string()))?;
    let position = params::point(r.lt.as_ref(), r.ln.as_ref(), CHECKPOINT_FIELDS_REQUIRED)?;

    if store.find_checkpoint(&namee).await?.is_some() {
        return Err(ApiError::Conflict("Checkpoint already exists".to_string()));
    }

    let Some(checkpoint) = store
        .insert_checkpoint(NewCheckPoint { position, namee })
        .await?
    else {
        return Err(ApiError::Conflict("Checkpoint already exists".to_string()));
    };

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Checkpoint added successfully".to_string(),
            data: checkpoint,
        }),
    ))
}

#[tracing::instrument(skip(store))]
pub async fn check_bus_stop<S: DocumentStore>(
    State(store): State<S>,
    Json(r): Json<CoordinatesRequest>,
) -> Result<Json<ExistsResponse>> {
    let point = params::lookup_point(r.lt.as_ref(), r.ln.as_ref(), COORDINATES_REQUIRED)?;

    let exists = store.find_bus_stop(point).await?.is_some();

    Ok(Json(ExistsResponse { exists }))
}

#[tracing::instrument(skip(store))]
pub async fn check_checkpoint<S: DocumentStore>(
    State(store): State<S>,
    Json(r): Json<CheckCheckPointRequest>,
) -> Result<Json<CheckPointExistsResponse>> {
    let namee = r
        .namee
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ApiError::Validation("Checkpoint name is required".to_string()))?;

    let checkpoint = store.find_checkpoint(&namee).await?;

    Ok(Json(CheckPointExistsResponse {
        exists: checkpoint.is_some(),
        checkpoint,
    }))
}
