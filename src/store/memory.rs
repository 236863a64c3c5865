use std::sync::Arc;

use anyhow::Error;
use tokio::sync::Mutex;

use super::DocumentStore;
use crate::geo::GeoPoint;
use crate::model::{BUS_STOP_KIND, BusStop, CheckPoint, NewCheckPoint, NewRoute, Route};

#[derive(Default)]
struct Collections {
    next_id: i64,
    bus_stops: Vec<BusStop>,
    checkpoints: Vec<CheckPoint>,
    routes: Vec<Route>,
}

impl Collections {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Keeps everything in insertion order, like the Postgres store.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Collections>>,
}

impl MemoryStore {
    /// Seeds a stop without going through the duplicate check.
    pub async fn push_bus_stop(&self, lt: f64, ln: f64) -> BusStop {
        let mut collections = self.inner.lock().await;
        let stop = BusStop {
            id: collections.next_id(),
            lt,
            ln,
        };
        collections.bus_stops.push(stop.clone());
        stop
    }
}

fn at(stop: &BusStop, point: GeoPoint) -> bool {
    stop.lt == point.latitude && stop.ln == point.longitude
}

impl DocumentStore for MemoryStore {
    async fn bus_stops(&self) -> Result<Vec<BusStop>, Error> {
        Ok(self.inner.lock().await.bus_stops.clone())
    }

    async fn find_bus_stop(&self, point: GeoPoint) -> Result<Option<BusStop>, Error> {
        let collections = self.inner.lock().await;
        Ok(collections.bus_stops.iter().find(|s| at(s, point)).cloned())
    }

    async fn insert_bus_stop(&self, point: GeoPoint) -> Result<Option<BusStop>, Error> {
        let mut collections = self.inner.lock().await;
        if collections.bus_stops.iter().any(|s| at(s, point)) {
            return Ok(None);
        }

        let stop = BusStop {
            id: collections.next_id(),
            lt: point.latitude,
            ln: point.longitude,
        };
        collections.bus_stops.push(stop.clone());
        Ok(Some(stop))
    }

    async fn delete_bus_stop(&self, point: GeoPoint) -> Result<Option<BusStop>, Error> {
        let mut collections = self.inner.lock().await;
        let index = collections.bus_stops.iter().position(|s| at(s, point));
        Ok(index.map(|i| collections.bus_stops.remove(i)))
    }

    async fn find_checkpoint(&self, name: &str) -> Result<Option<CheckPoint>, Error> {
        let collections = self.inner.lock().await;
        Ok(collections
            .checkpoints
            .iter()
            .find(|c| c.namee == name)
            .cloned())
    }

    async fn insert_checkpoint(&self, checkpoint: NewCheckPoint) -> Result<Option<CheckPoint>, Error> {
        let mut collections = self.inner.lock().await;
        if collections.checkpoints.iter().any(|c| c.namee == checkpoint.namee) {
            return Ok(None);
        }

        let saved = CheckPoint {
            id: collections.next_id(),
            lt: checkpoint.position.latitude,
            ln: checkpoint.position.longitude,
            namee: checkpoint.namee,
        };
        collections.checkpoints.push(saved.clone());
        Ok(Some(saved))
    }

    async fn insert_route(&self, route: NewRoute) -> Result<Route, Error> {
        let mut collections = self.inner.lock().await;
        let saved = Route {
            id: collections.next_id(),
            marker_position: route.marker_position,
            poly_lines: route.poly_lines,
        };
        collections.routes.push(saved.clone());
        Ok(saved)
    }

    async fn find_route_with_bus_stop(&self, point: GeoPoint) -> Result<Option<Route>, Error> {
        let collections = self.inner.lock().await;
        Ok(collections
            .routes
            .iter()
            .find(|r| {
                r.marker_position
                    .iter()
                    .any(|m| m.kind == BUS_STOP_KIND && m.lt == point.latitude && m.ln == point.longitude)
            })
            .cloned())
    }
}
