// src/web/course_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        course::{Course, CoursePayload, OwnerQuery},
        required, MessageResponse,
    },
    services::course_service::{self, CourseFields},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};

/// Valida o corpo do pedido e extrai os campos editáveis.
fn course_fields(payload: &CoursePayload) -> AppResult<CourseFields<'_>> {
    let title = required(&payload.title).ok_or_else(|| AppError::bad_request("Title is required"))?;
    if !payload.price.is_finite() || payload.price < 0.0 {
        return Err(AppError::bad_request("Price must be a non-negative number"));
    }
    Ok(CourseFields {
        title,
        description: payload.description.as_deref().unwrap_or(""),
        duration: payload.duration.as_deref().unwrap_or(""),
        price: payload.price,
        level: payload.level.as_deref().unwrap_or(""),
    })
}

// GET /api/courses
pub async fn list_courses(State(state): State<AppState>) -> AppResult<Json<Vec<Course>>> {
    Ok(Json(course_service::find_all_courses(&state.db_pool).await?))
}

// GET /api/courses/{id}
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
) -> AppResult<Json<Course>> {
    let course = course_service::find_course_by_id(&state.db_pool, course_id)
        .await?
        .ok_or(AppError::NotFound("Course"))?;
    Ok(Json(course))
}

// GET /api/courses/educator/{educator_id}
pub async fn list_courses_by_educator(
    State(state): State<AppState>,
    Path(educator_id): Path<i64>,
) -> AppResult<Json<Vec<Course>>> {
    Ok(Json(course_service::find_courses_by_educator(&state.db_pool, educator_id).await?))
}

// POST /api/courses
pub async fn create_course(
    State(state): State<AppState>,
    Json(payload): Json<CoursePayload>,
) -> AppResult<Json<MessageResponse>> {
    let fields = course_fields(&payload)?;
    let course_id = course_service::create_course(&state.db_pool, payload.educator_id, &fields).await?;
    Ok(Json(MessageResponse::created("Course created successfully", course_id)))
}

// PUT /api/courses/{id} (o educatorId do corpo tem de ser o dono)
pub async fn update_course(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
    Json(payload): Json<CoursePayload>,
) -> AppResult<Json<MessageResponse>> {
    let fields = course_fields(&payload)?;
    course_service::update_course(&state.db_pool, course_id, payload.educator_id, &fields).await?;
    Ok(Json(MessageResponse::new("Course updated successfully")))
}

// DELETE /api/courses/{id}?educatorId=...
pub async fn delete_course(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
    Query(owner): Query<OwnerQuery>,
) -> AppResult<Json<MessageResponse>> {
    let educator_id = owner
        .educator_id
        .ok_or_else(|| AppError::bad_request("educatorId is required"))?;
    course_service::delete_course(&state.db_pool, course_id, educator_id).await?;
    Ok(Json(MessageResponse::new("Course deleted successfully")))
}
