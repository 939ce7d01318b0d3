pub mod connection;
pub mod products;
pub mod schema;

pub use connection::{retry_connect, ConnectionAcquirer, ScopedConnection};
