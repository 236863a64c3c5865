//! HTTP surface of the service.

pub mod endpoints;
pub mod error;
pub mod params;
pub mod router;
pub mod types;

pub use router::{cors, router};
