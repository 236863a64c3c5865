use anyhow::Error;
use sqlx::query_as;
use sqlx::Pool;
use sqlx::Postgres;

use crate::geo::GeoPoint;
use crate::model::BusStop;

/// All bus stops in insertion order.
#[tracing::instrument(err, skip(pool))]
pub async fn get_bus_stops(pool: &Pool<Postgres>) -> Result<Vec<BusStop>, Error> {
    let stops = query_as("SELECT id, lt, ln FROM bus_stops ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(stops)
}

#[tracing::instrument(err, skip(pool))]
pub async fn find_bus_stop(
    point: GeoPoint,
    pool: &Pool<Postgres>,
) -> Result<Option<BusStop>, Error> {
    let stop = query_as(
        "SELECT id, lt, ln FROM bus_stops
        WHERE lt = $1 AND ln = $2
        ORDER BY id
        LIMIT 1",
    )
    .bind(point.latitude)
    .bind(point.longitude)
    .fetch_optional(pool)
    .await?;

    Ok(stop)
}

/// Returns the saved stop, or `None` when a stop with the same coordinates already exists.
#[tracing::instrument(err, skip(pool))]
pub async fn insert_bus_stop(
    point: GeoPoint,
    pool: &Pool<Postgres>,
) -> Result<Option<BusStop>, Error> {
    let stop = query_as(
        "INSERT INTO bus_stops (lt, ln) VALUES ($1, $2)
        ON CONFLICT ( lt, ln ) DO NOTHING
        RETURNING id, lt, ln",
    )
    .bind(point.latitude)
    .bind(point.longitude)
    .fetch_optional(pool)
    .await?;

    Ok(stop)
}

/// Deletes the first stop at the given coordinates, if there is one.
#[tracing::instrument(err, skip(pool))]
pub async fn delete_bus_stop(
    point: GeoPoint,
    pool: &Pool<Postgres>,
) -> Result<Option<BusStop>, Error> {
    let stop = query_as(
        "DELETE FROM bus_stops
        WHERE id = (
            SELECT id FROM bus_stops
            WHERE lt = $1 AND ln = $2
            ORDER BY id
            LIMIT 1
        )
        RETURNING id, lt, ln",
    )
    .bind(point.latitude)
    .bind(point.longitude)
    .fetch_optional(pool)
    .await?;

    Ok(stop)
}
