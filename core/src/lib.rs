//! Shared building blocks for quickopen: the candidate type, application
//! configuration, and workspace enumeration.

pub mod error;
pub mod types;
pub mod workspace;

pub use error::{Error, Result};
