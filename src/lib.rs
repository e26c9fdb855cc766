pub mod app;
pub mod errors;
pub mod external;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use errors::AppError;
pub use state::AppState;
