//! Wire records and error types shared across the crate.

pub mod error;
pub mod request;
pub mod response;

// Re-export commonly used types for convenience.
pub use error::*;
pub use request::*;
pub use response::*;
