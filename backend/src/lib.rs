//! Food Production Management Platform - Backend
//!
//! Schedules recipe production runs for retail fresh-food departments,
//! tracks food handlers, and derives traceability audit records from
//! completed production.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod cache;
pub mod config;
pub mod error;
pub mod events;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use config::Config;

use cache::DepartmentCache;
use events::EventBus;
use services::{AuditBuilder, AuditMaintenance, ReferenceData, ScheduleService, SupplierCatalog};
use store::DocumentStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub reference: ReferenceData,
    pub catalog: SupplierCatalog,
    pub audit_builder: AuditBuilder,
    pub events: EventBus,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire application state from a store and configuration
    pub fn new(store: Arc<dyn DocumentStore>, config: Config) -> Self {
        let reference = ReferenceData::new(
            store.clone(),
            DepartmentCache::new(),
            DepartmentCache::new(),
        );
        let catalog = SupplierCatalog::new(config.catalog.dir.clone(), DepartmentCache::new());
        let audit_builder = AuditBuilder::new(&config.audit);
        Self {
            store,
            reference,
            catalog,
            audit_builder,
            events: EventBus::new(),
            config: Arc::new(config),
        }
    }

    pub fn schedule_service(&self) -> ScheduleService {
        ScheduleService::new(
            self.store.clone(),
            self.reference.clone(),
            self.catalog.clone(),
            self.audit_builder.clone(),
            self.events.clone(),
        )
    }

    pub fn audit_maintenance(&self) -> AuditMaintenance {
        AuditMaintenance::new(self.store.clone(), self.catalog.clone(), self.events.clone())
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Food Production Management Platform API v1.0"
}
