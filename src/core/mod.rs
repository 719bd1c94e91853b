pub mod error;
pub mod network;

pub use error::QueryError;
pub use network::{Network, Registry};
