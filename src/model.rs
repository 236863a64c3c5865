pub mod checkpoint;
pub mod db_model;
pub mod route;
pub mod stop;

pub use checkpoint::*;
pub use route::*;
pub use stop::*;
