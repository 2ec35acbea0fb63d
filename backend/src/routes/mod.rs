//! Route definitions for the Food Production Management Platform

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Schedule management
        .nest("/schedules", schedule_routes())
        // Audit records
        .nest("/audits", audit_routes())
        // Calendar projection
        .route("/calendar", get(handlers::calendar_events))
        // Reference data
        .route("/recipes", get(handlers::list_recipes))
        .route("/handlers", get(handlers::list_handlers))
        .route("/reference/invalidate", post(handlers::invalidate_reference))
}

/// Schedule management routes
fn schedule_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_schedules))
        .route("/items", post(handlers::create_item))
        .route(
            "/:schedule_id/items/:item_id",
            put(handlers::edit_item),
        )
        .route(
            "/:schedule_id/items/:item_id/transition",
            post(handlers::transition_item),
        )
        .route(
            "/:schedule_id/items/:item_id/time",
            post(handlers::update_item_time),
        )
        .route("/:schedule_id", delete(handlers::delete_schedule))
}

/// Audit record routes
fn audit_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_audits))
        .route("/backfill-suppliers", post(handlers::backfill_suppliers))
        .route("/:audit_uid", delete(handlers::delete_audit))
}
