//! Document store abstraction
//!
//! The platform persists schedules, audits and reference data in a generic
//! JSON document store reached over fetch-style HTTP calls. The trait keeps
//! the transport out of the services; tests and development run against the
//! in-memory backend.

mod http;
mod memory;

pub use http::HttpStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

use shared::{AuditRecord, Department, Recipe, Schedule, Staff};

/// Document store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Request(String),

    #[error("store returned status {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("store response could not be decoded: {0}")]
    Decode(String),

    #[error("{0}")]
    NotFound(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Fetch-style document store operations used by the production core.
///
/// Every call is an asynchronous suspension point; callers treat local state
/// as authoritative only after the corresponding call resolves.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn fetch_schedules(&self, department: Department) -> StoreResult<Vec<Schedule>>;

    /// Create the schedule when its id is empty, update it otherwise.
    /// Returns the stored document with its assigned id.
    async fn save_schedule(&self, department: Department, schedule: Schedule)
        -> StoreResult<Schedule>;

    async fn delete_schedule(&self, schedule_id: &str) -> StoreResult<()>;

    async fn fetch_audits(&self, department: Department) -> StoreResult<Vec<AuditRecord>>;

    /// Upsert an audit record by uid
    async fn save_audit(&self, audit: AuditRecord) -> StoreResult<AuditRecord>;

    async fn delete_audit(&self, audit_uid: &str) -> StoreResult<()>;

    async fn fetch_recipes(&self, department: Department) -> StoreResult<Vec<Recipe>>;

    async fn fetch_handlers(&self, department: Department) -> StoreResult<Vec<Staff>>;
}
