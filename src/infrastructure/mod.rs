//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module provides path utilities: where configuration and logs live,
//! and how user-supplied paths are expanded.

pub mod paths;

pub use paths::{config_dir, config_file, data_dir, expand_tilde, log_file};
