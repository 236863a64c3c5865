//! Resolves the stops closest to a trip's endpoints and a route serving the source stop.

use serde::Serialize;
use tracing::info;

use crate::geo::{self, GeoPoint, Positioned};
use crate::model::{BusStop, Route};
use crate::store::DocumentStore;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NearestStop {
    pub stop: BusStop,
    /// Kilometers from the requested point.
    pub distance: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TripLookup {
    /// A route with a bus stop marker at the source's closest stop.
    pub result: Option<Route>,
    #[serde(rename = "closestDestStop")]
    pub closest_dest_stop: NearestStop,
    #[serde(rename = "closestSourceStop")]
    pub closest_source_stop: NearestStop,
}

#[derive(thiserror::Error, Debug)]
pub enum LookupError {
    #[error("No bus stops found")]
    NoBusStops,

    #[error("error reading from the store")]
    Store(#[from] anyhow::Error),
}

/// Only the source side takes part in route matching; the destination stop is
/// resolved and returned as is.
#[tracing::instrument(err, skip(store))]
pub async fn lookup_trip<S: DocumentStore>(
    store: &S,
    source: GeoPoint,
    destination: GeoPoint,
) -> Result<TripLookup, LookupError> {
    let bus_stops = store.bus_stops().await?;

    let closest_source_stop = nearest_stop(source, &bus_stops)?;
    let closest_dest_stop = nearest_stop(destination, &bus_stops)?;

    info!(
        source_stop = closest_source_stop.stop.id,
        dest_stop = closest_dest_stop.stop.id,
        "resolved closest stops out of {}",
        bus_stops.len()
    );

    let result = store
        .find_route_with_bus_stop(closest_source_stop.stop.position())
        .await?;

    Ok(TripLookup {
        result,
        closest_dest_stop,
        closest_source_stop,
    })
}

fn nearest_stop(point: GeoPoint, bus_stops: &[BusStop]) -> Result<NearestStop, LookupError> {
    let nearest = geo::nearest(point, bus_stops).map_err(|_| LookupError::NoBusStops)?;

    Ok(NearestStop {
        stop: nearest.item.clone(),
        distance: nearest.distance,
    })
}
