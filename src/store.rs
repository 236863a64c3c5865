//! The document store behind the HTTP handlers.

use anyhow::Error;
use sqlx::{Pool, Postgres};

use crate::dal;
use crate::geo::GeoPoint;
use crate::model::{BusStop, CheckPoint, NewCheckPoint, NewRoute, Route};

#[cfg(test)]
pub mod memory;

/// Stops, checkpoints and routes. Inserts are atomic insert-if-absent operations.
pub trait DocumentStore: Clone + Send + Sync + 'static {
    /// Every stop, in the store's native order.
    fn bus_stops(&self) -> impl Future<Output = Result<Vec<BusStop>, Error>> + Send;

    fn find_bus_stop(
        &self,
        point: GeoPoint,
    ) -> impl Future<Output = Result<Option<BusStop>, Error>> + Send;

    /// `None` if a stop with these coordinates already exists.
    fn insert_bus_stop(
        &self,
        point: GeoPoint,
    ) -> impl Future<Output = Result<Option<BusStop>, Error>> + Send;

    fn delete_bus_stop(
        &self,
        point: GeoPoint,
    ) -> impl Future<Output = Result<Option<BusStop>, Error>> + Send;

    fn find_checkpoint(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<CheckPoint>, Error>> + Send;

    /// `None` if the name is taken.
    fn insert_checkpoint(
        &self,
        checkpoint: NewCheckPoint,
    ) -> impl Future<Output = Result<Option<CheckPoint>, Error>> + Send;

    fn insert_route(&self, route: NewRoute) -> impl Future<Output = Result<Route, Error>> + Send;

    /// First route holding a `busStop` marker with exactly these coordinates.
    fn find_route_with_bus_stop(
        &self,
        point: GeoPoint,
    ) -> impl Future<Output = Result<Option<Route>, Error>> + Send;
}

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: Pool<Postgres>,
}

impl PgStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

impl DocumentStore for PgStore {
    async fn bus_stops(&self) -> Result<Vec<BusStop>, Error> {
        dal::get_bus_stops(&self.pool).await
    }

    async fn find_bus_stop(&self, point: GeoPoint) -> Result<Option<BusStop>, Error> {
        dal::find_bus_stop(point, &self.pool).await
    }

    async fn insert_bus_stop(&self, point: GeoPoint) -> Result<Option<BusStop>, Error> {
        dal::insert_bus_stop(point, &self.pool).await
    }

    async fn delete_bus_stop(&self, point: GeoPoint) -> Result<Option<BusStop>, Error> {
        dal::delete_bus_stop(point, &self.pool).await
    }

    async fn find_checkpoint(&self, name: &str) -> Result<Option<CheckPoint>, Error> {
        dal::find_checkpoint(name, &self.pool).await
    }

    async fn insert_checkpoint(&self, checkpoint: NewCheckPoint) -> Result<Option<CheckPoint>, Error> {
        dal::insert_checkpoint(&checkpoint, &self.pool).await
    }

    async fn insert_route(&self, route: NewRoute) -> Result<Route, Error> {
        dal::insert_route(&route, &self.pool).await
    }

    async fn find_route_with_bus_stop(&self, point: GeoPoint) -> Result<Option<Route>, Error> {
        dal::find_route_with_bus_stop(point, &self.pool).await
    }
}
