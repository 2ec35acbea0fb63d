//! Domain models for the Food Production Management Platform
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
