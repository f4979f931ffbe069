//! Configuration module for CheckHash
//!
//! Provides CLI arguments, server settings and defaults.

mod settings;

pub use settings::*;
