// src/web/user_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        required,
        user::{
            EmailExistsResponse, EmailQuery, RegisterRequest, UpdateProfileRequest,
            UpdateStatusRequest, UserResponse,
        },
        MessageResponse,
    },
    services::{auth_service, user_service},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};

// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = user_service::find_all_users(&state.db_pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// POST /api/users (criação pelo admin; pode aprovar logo)
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> AppResult<Json<MessageResponse>> {
    let user_id = auth_service::register(&state.db_pool, state.bcrypt_cost, &request, true).await?;
    Ok(Json(MessageResponse::created("User created successfully", user_id)))
}

// GET /api/users/check-email?email=...
pub async fn check_email(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> AppResult<Json<EmailExistsResponse>> {
    let email = required(&query.email).ok_or_else(|| AppError::bad_request("Email is required"))?;
    let exists = user_service::email_exists(&state.db_pool, email).await?;
    Ok(Json(EmailExistsResponse { exists }))
}

// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<UserResponse>> {
    let user = user_service::find_user_by_id(&state.db_pool, user_id)
        .await?
        .ok_or(AppError::NotFound("User"))?;
    Ok(Json(UserResponse::from(user)))
}

// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(request): Json<UpdateProfileRequest>,
) -> AppResult<Json<MessageResponse>> {
    user_service::update_profile(
        &state.db_pool,
        user_id,
        request.first_name.trim(),
        request.last_name.trim(),
        request.bio.as_deref().unwrap_or(""),
    )
    .await?;
    Ok(Json(MessageResponse::new("Profile updated successfully")))
}

// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    user_service::delete_user(&state.db_pool, user_id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}

// PUT|POST /api/users/{id}/approve e /api/users/approve/{id}
pub async fn approve_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    user_service::approve_educator(&state.db_pool, user_id).await?;
    Ok(Json(MessageResponse::new("User approved")))
}

// PUT /api/users/{id}/reject
pub async fn reject_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    user_service::reject_educator(&state.db_pool, user_id).await?;
    Ok(Json(MessageResponse::new("Educator application rejected")))
}

// PUT /api/users/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(request): Json<UpdateStatusRequest>,
) -> AppResult<Json<MessageResponse>> {
    user_service::set_active(&state.db_pool, user_id, request.is_active).await?;
    let message = if request.is_active { "User activated" } else { "User deactivated" };
    Ok(Json(MessageResponse::new(message)))
}

// POST /api/users/{id}/activate
pub async fn activate_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    user_service::set_active(&state.db_pool, user_id, true).await?;
    Ok(Json(MessageResponse::new("User activated")))
}
