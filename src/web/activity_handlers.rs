// src/web/activity_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        activity::{ActivityItem, ActivityLogRequest, ActivityLogResponse, StudyHoursResponse},
        required,
    },
    services::activity_service,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};

// GET /api/activity/user/{user_id}
pub async fn user_activity(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<Vec<ActivityItem>>> {
    Ok(Json(activity_service::user_feed(&state.db_pool, user_id).await?))
}

// GET /api/activity/system
pub async fn system_activity(State(state): State<AppState>) -> AppResult<Json<Vec<ActivityItem>>> {
    Ok(Json(activity_service::system_feed(&state.db_pool).await?))
}

// GET /api/activity/study-hours/{user_id}
pub async fn study_hours(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<StudyHoursResponse>> {
    let study_hours = activity_service::study_hours(&state.db_pool, user_id).await?;
    Ok(Json(StudyHoursResponse { study_hours }))
}

// POST /api/activity/log
pub async fn log_activity(
    State(state): State<AppState>,
    Json(request): Json<ActivityLogRequest>,
) -> AppResult<Json<ActivityLogResponse>> {
    let (Some(kind), Some(message)) = (required(&request.r#type), required(&request.message)) else {
        return Err(AppError::bad_request(
            "Invalid activity log data. UserId, Type, and Message are required.",
        ));
    };
    if request.user_id <= 0 {
        return Err(AppError::bad_request(
            "Invalid activity log data. UserId, Type, and Message are required.",
        ));
    }

    activity_service::log_activity(
        &state.db_pool,
        request.user_id,
        kind,
        message,
        request.date.map(|d| d.naive_utc()),
    )
    .await?;

    Ok(Json(ActivityLogResponse {
        message: "Activity logged successfully".to_string(),
        success: true,
    }))
}
