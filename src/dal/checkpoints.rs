use anyhow::Error;
use sqlx::{Pool, Postgres, query_as};

use crate::model::{CheckPoint, NewCheckPoint};

#[tracing::instrument(err, skip(pool))]
pub async fn find_checkpoint(name: &str, pool: &Pool<Postgres>) -> Result<Option<CheckPoint>, Error> {
    let checkpoint = query_as("SELECT id, lt, ln, namee FROM checkpoints WHERE namee = $1")
        .bind(name)
        .fetch_optional(pool)
        .await?;

    Ok(checkpoint)
}

/// Returns `None` if a checkpoint with the same name is already saved.
#[tracing::instrument(err, skip(pool))]
pub async fn insert_checkpoint(
    checkpoint: &NewCheckPoint,
    pool: &Pool<Postgres>,
) -> Result<Option<CheckPoint>, Error> {
    let saved = query_as(
        "INSERT INTO checkpoints (lt, ln, namee) VALUES ($1, $2, $3)
        ON CONFLICT ( namee ) DO NOTHING
        RETURNING id, lt, ln, namee",
    )
    .bind(checkpoint.position.latitude)
    .bind(checkpoint.position.longitude)
    .bind(&checkpoint.namee)
    .fetch_optional(pool)
    .await?;

    Ok(saved)
}
