//! Calendar projection HTTP handler

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::handlers::DepartmentQuery;
use crate::services::calendar::project_events;
use crate::AppState;

/// Project calendar events from a department's current schedules
pub async fn calendar_events(
    State(state): State<AppState>,
    Query(query): Query<DepartmentQuery>,
) -> impl IntoResponse {
    let service = state.schedule_service();

    match service.list_schedules(query.department()).await {
        Ok(schedules) => {
            let events = project_events(&schedules);
            (StatusCode::OK, Json(serde_json::json!({ "events": events }))).into_response()
        }
        Err(e) => e.into_response(),
    }
}
