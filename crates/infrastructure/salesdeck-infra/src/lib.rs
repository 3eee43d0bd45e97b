pub mod api;
pub mod net;

// Re-exports for convenience
pub use api::{ApiClient, ApiError, ApiErrorKind, RegisterRequest};
pub use net::default_http_client;
