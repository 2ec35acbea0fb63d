//! Reference data HTTP handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::handlers::DepartmentQuery;
use crate::AppState;

/// List a department's recipes
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(query): Query<DepartmentQuery>,
) -> impl IntoResponse {
    match state.reference.recipes(query.department()).await {
        Ok(recipes) => (
            StatusCode::OK,
            Json(serde_json::json!({ "recipes": recipes })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// List a department's food handlers
pub async fn list_handlers(
    State(state): State<AppState>,
    Query(query): Query<DepartmentQuery>,
) -> impl IntoResponse {
    match state.reference.handlers(query.department()).await {
        Ok(handlers) => (
            StatusCode::OK,
            Json(serde_json::json!({ "handlers": handlers })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Drop cached reference data for a department
pub async fn invalidate_reference(
    State(state): State<AppState>,
    Query(query): Query<DepartmentQuery>,
) -> impl IntoResponse {
    let department = query.department();
    state.reference.invalidate(department);
    state.catalog.invalidate(department);
    StatusCode::NO_CONTENT.into_response()
}
