//! Schedule management HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::handlers::DepartmentQuery;
use crate::services::schedule::{
    CreateItemInput, EditItemInput, TimeUpdateInput, TransitionInput,
};
use crate::AppState;

/// List all schedules for a department
pub async fn list_schedules(
    State(state): State<AppState>,
    Query(query): Query<DepartmentQuery>,
) -> impl IntoResponse {
    let service = state.schedule_service();

    match service.list_schedules(query.department()).await {
        Ok(schedules) => (
            StatusCode::OK,
            Json(serde_json::json!({ "schedules": schedules })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Schedule a new production run
pub async fn create_item(
    State(state): State<AppState>,
    Json(input): Json<CreateItemInput>,
) -> impl IntoResponse {
    let service = state.schedule_service();

    match service.create_item(input).await {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Edit a schedule item's fields
pub async fn edit_item(
    State(state): State<AppState>,
    Query(query): Query<DepartmentQuery>,
    Path((schedule_id, item_id)): Path<(String, String)>,
    Json(input): Json<EditItemInput>,
) -> impl IntoResponse {
    let service = state.schedule_service();

    match service
        .edit_item(query.department(), &schedule_id, &item_id, input)
        .await
    {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Transition a schedule item to a new status
pub async fn transition_item(
    State(state): State<AppState>,
    Query(query): Query<DepartmentQuery>,
    Path((schedule_id, item_id)): Path<(String, String)>,
    Json(input): Json<TransitionInput>,
) -> impl IntoResponse {
    let service = state.schedule_service();

    match service
        .transition(query.department(), &schedule_id, &item_id, input)
        .await
    {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Drag-and-drop rescheduling of a schedule item
pub async fn update_item_time(
    State(state): State<AppState>,
    Query(query): Query<DepartmentQuery>,
    Path((schedule_id, item_id)): Path<(String, String)>,
    Json(input): Json<TimeUpdateInput>,
) -> impl IntoResponse {
    let service = state.schedule_service();

    match service
        .update_item_time(query.department(), &schedule_id, &item_id, input)
        .await
    {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a schedule (administrative)
pub async fn delete_schedule(
    State(state): State<AppState>,
    Query(query): Query<DepartmentQuery>,
    Path(schedule_id): Path<String>,
) -> impl IntoResponse {
    let service = state.schedule_service();

    match service
        .delete_schedule(query.department(), &schedule_id)
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
