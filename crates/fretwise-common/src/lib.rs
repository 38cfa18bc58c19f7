//! Common utilities and types for the Fretwise guitar-learning app

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{FretwiseError, Result};
pub use logging::{init_default_logging, init_dev_logging, init_logging, LoggingConfig};
