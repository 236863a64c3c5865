pub mod checkpoints;
pub mod routes;
pub mod stops;

pub use checkpoints::*;
pub use routes::*;
pub use stops::*;
