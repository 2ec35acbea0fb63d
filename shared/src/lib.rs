//! Shared types and models for the Food Production Management Platform
//!
//! This crate contains the domain models shared between the backend and any
//! other components of the system (reporting jobs, maintenance tools).

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
