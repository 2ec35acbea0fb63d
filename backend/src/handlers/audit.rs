//! Audit record HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::handlers::DepartmentQuery;
use crate::AppState;

/// List all audit records for a department
pub async fn list_audits(
    State(state): State<AppState>,
    Query(query): Query<DepartmentQuery>,
) -> impl IntoResponse {
    let service = state.audit_maintenance();

    match service.list_audits(query.department()).await {
        Ok(audits) => (
            StatusCode::OK,
            Json(serde_json::json!({ "audits": audits })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete an audit record (administrative, tied to schedule deletion)
pub async fn delete_audit(
    State(state): State<AppState>,
    Query(query): Query<DepartmentQuery>,
    Path(audit_uid): Path<String>,
) -> impl IntoResponse {
    let service = state.audit_maintenance();

    match service.delete_audit(query.department(), &audit_uid).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

/// Re-resolve placeholder suppliers across a department's audits
pub async fn backfill_suppliers(
    State(state): State<AppState>,
    Query(query): Query<DepartmentQuery>,
) -> impl IntoResponse {
    let service = state.audit_maintenance();

    match service.backfill_suppliers(query.department()).await {
        Ok(updated) => (
            StatusCode::OK,
            Json(serde_json::json!({ "updated": updated })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
