// src/web/enrollment_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        enrollment::{
            EnrollRequest, Enrollment, EnrollmentWithCourse, EnrollmentWithUser,
            ProgressUpdateRequest,
        },
        MessageResponse,
    },
    services::enrollment_service,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};

// GET /api/enrollments
pub async fn list_enrollments(State(state): State<AppState>) -> AppResult<Json<Vec<EnrollmentWithCourse>>> {
    Ok(Json(enrollment_service::find_all_enrollments(&state.db_pool).await?))
}

// GET /api/enrollments/{id}
pub async fn get_enrollment(
    State(state): State<AppState>,
    Path(enrollment_id): Path<i64>,
) -> AppResult<Json<Enrollment>> {
    let enrollment = enrollment_service::find_enrollment_by_id(&state.db_pool, enrollment_id)
        .await?
        .ok_or(AppError::NotFound("Enrollment"))?;
    Ok(Json(enrollment))
}

// GET /api/enrollments/user/{user_id}
pub async fn list_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<Vec<EnrollmentWithCourse>>> {
    Ok(Json(enrollment_service::find_enrollments_by_user(&state.db_pool, user_id).await?))
}

// GET /api/enrollments/course/{course_id}
pub async fn list_by_course(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
) -> AppResult<Json<Vec<EnrollmentWithUser>>> {
    Ok(Json(enrollment_service::find_enrollments_by_course(&state.db_pool, course_id).await?))
}

// POST /api/enrollments
pub async fn enroll(
    State(state): State<AppState>,
    Json(request): Json<EnrollRequest>,
) -> AppResult<Json<MessageResponse>> {
    if request.user_id <= 0 || request.course_id <= 0 {
        return Err(AppError::bad_request("userId and courseId are required"));
    }
    let id = enrollment_service::enroll(&state.db_pool, request.user_id, request.course_id).await?;
    Ok(Json(MessageResponse::created("Enrolled successfully", id)))
}

// PUT /api/enrollments/progress
pub async fn update_progress(
    State(state): State<AppState>,
    Json(request): Json<ProgressUpdateRequest>,
) -> AppResult<Json<MessageResponse>> {
    if !(0..=100).contains(&request.progress) {
        return Err(AppError::bad_request("Progress must be between 0 and 100"));
    }
    enrollment_service::update_progress(
        &state.db_pool,
        request.user_id,
        request.course_id,
        request.progress,
    )
    .await?;
    Ok(Json(MessageResponse::new("Progress updated successfully")))
}

// DELETE /api/enrollments/{id} e /api/enrollments/by-id/{id}
pub async fn unenroll_by_id(
    State(state): State<AppState>,
    Path(enrollment_id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    enrollment_service::unenroll_by_id(&state.db_pool, enrollment_id).await?;
    Ok(Json(MessageResponse::new("Unenrolled successfully")))
}

// DELETE /api/enrollments/{user_id}/{course_id}
pub async fn unenroll_by_user_and_course(
    State(state): State<AppState>,
    Path((user_id, course_id)): Path<(i64, i64)>,
) -> AppResult<Json<MessageResponse>> {
    enrollment_service::unenroll(&state.db_pool, user_id, course_id).await?;
    Ok(Json(MessageResponse::new("Unenrolled successfully")))
}
