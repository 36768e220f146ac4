//! Trust Scanner HTTP API
//! REST endpoints for contract trust analysis

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod types;

pub use handlers::AppState;
pub use routes::create_router;
pub use types::*;
