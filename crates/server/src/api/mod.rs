pub mod catalog;
pub mod error;
pub mod handlers;
pub mod params;
pub mod routes;
pub mod search;
pub mod suggestions;

pub use error::{ApiError, ErrorResponse};
pub use routes::create_router;
