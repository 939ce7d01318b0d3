pub mod app;
pub mod domain;
pub mod error;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::product_service::ProductService;
pub use domain::product::{Product, ProductPayload};
pub use error::{AppError, ConnectionError};
pub use infra::config::{Config, DatabaseConfig, RetryPolicy};
pub use storage::ConnectionAcquirer;
