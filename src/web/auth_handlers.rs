// src/web/auth_handlers.rs
use crate::{
    error::AppResult,
    models::{
        user::{LoginRequest, RegisterRequest, UserResponse},
        MessageResponse,
    },
    services::auth_service,
    state::AppState,
};
use axum::{extract::State, Json};

// POST /api/auth/register e POST /api/users/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> AppResult<Json<MessageResponse>> {
    let user_id = auth_service::register(&state.db_pool, state.bcrypt_cost, &request, false).await?;
    Ok(Json(MessageResponse::created("User registered successfully", user_id)))
}

// POST /api/auth/login
// Não há sessão nem token: o cliente guarda o utilizador devolvido.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = auth_service::login(&state.db_pool, &request.email, &request.password).await?;
    Ok(Json(UserResponse::from(user)))
}
