//! Domain layer for the BetterS3TUI core.
//!
//! The only domain type shared across the rendering and search engines is the
//! error model; everything else lives next to the engine that owns it.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases

pub mod error;

pub use error::{BetterS3Error, Result};
