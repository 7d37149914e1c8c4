// API layer module (HTTP adapters over the repositories)

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod params;
pub mod routes;
pub mod state;

pub use errors::ApiError;
pub use routes::router;
pub use state::AppState;
