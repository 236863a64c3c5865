use anyhow::Error;
use sqlx::{Pool, Postgres, QueryBuilder, Transaction, query_as, query_scalar, types::Json};
use tracing::{Instrument, info_span};

use crate::geo::GeoPoint;
use crate::model::db_model::{MarkerDb, RouteDb};
use crate::model::{BUS_STOP_KIND, Marker, NewRoute, Route};

/// Postgres allows 65535 bind parameters per statement, each marker takes 6.
const MARKER_CHUNK_SIZE: usize = 1024;

/// Saves the route and its markers in a single transaction.
#[tracing::instrument(err, skip(route, pool), fields(markers = route.marker_position.len()))]
pub async fn insert_route(route: &NewRoute, pool: &Pool<Postgres>) -> Result<Route, Error> {
    let mut tx = pool.begin().await?;

    let id: i64 = query_scalar("INSERT INTO routes (poly_lines) VALUES ($1) RETURNING id")
        .bind(Json(&route.poly_lines))
        .fetch_one(&mut *tx)
        .instrument(info_span!("Inserting route"))
        .await?;

    insert_markers(id, &route.marker_position, &mut tx).await?;

    tx.commit().await?;

    Ok(Route {
        id,
        marker_position: route.marker_position.clone(),
        poly_lines: route.poly_lines.clone(),
    })
}

async fn insert_markers(
    route_id: i64,
    markers: &[Marker],
    tx: &mut Transaction<'_, Postgres>,
) -> Result<(), Error> {
    for (chunk_index, chunk) in markers.chunks(MARKER_CHUNK_SIZE).enumerate() {
        let mut query_builder = QueryBuilder::new(
            "INSERT INTO route_markers (
                route_id,
                sequence,
                lt,
                ln,
                kind,
                namee
            )",
        );

        query_builder.push_values(chunk.iter().enumerate(), |mut b, (i, marker)| {
            let sequence = (chunk_index * MARKER_CHUNK_SIZE + i) as i32;
            b.push_bind(route_id)
                .push_bind(sequence)
                .push_bind(marker.lt)
                .push_bind(marker.ln)
                .push_bind(&marker.kind)
                .push_bind(&marker.namee);
        });

        query_builder
            .build()
            .execute(&mut **tx)
            .instrument(info_span!("Inserting markers"))
            .await?;
    }

    Ok(())
}

/// First route, by insertion order, with a bus stop marker exactly at `point`.
#[tracing::instrument(err, skip(pool))]
pub async fn find_route_with_bus_stop(
    point: GeoPoint,
    pool: &Pool<Postgres>,
) -> Result<Option<Route>, Error> {
    let route: Option<RouteDb> = query_as(
        "SELECT r.id, r.poly_lines FROM routes r
        WHERE EXISTS (
            SELECT 1 FROM route_markers m
            WHERE m.route_id = r.id AND m.kind = $1 AND m.lt = $2 AND m.ln = $3
        )
        ORDER BY r.id
        LIMIT 1",
    )
    .bind(BUS_STOP_KIND)
    .bind(point.latitude)
    .bind(point.longitude)
    .fetch_optional(pool)
    .await?;

    let Some(route) = route else {
        return Ok(None);
    };

    let markers: Vec<MarkerDb> = query_as(
        "SELECT lt, ln, kind, namee FROM route_markers
        WHERE route_id = $1
        ORDER BY sequence",
    )
    .bind(route.id)
    .fetch_all(pool)
    .instrument(info_span!("Fetching markers", route_id = route.id))
    .await?;

    Ok(Some(route.into_route(markers)))
}
