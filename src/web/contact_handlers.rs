// src/web/contact_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        contact::{ContactMessage, ContactRequest},
        required, MessageResponse,
    },
    services::contact_service,
    state::AppState,
};
use axum::{extract::State, Json};

// POST /api/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> AppResult<Json<MessageResponse>> {
    let (Some(name), Some(email), Some(subject), Some(message)) = (
        required(&request.name),
        required(&request.email),
        required(&request.subject),
        required(&request.message),
    ) else {
        return Err(AppError::bad_request("Name, email, subject and message are required"));
    };

    let id = contact_service::submit_message(&state.db_pool, name, email, subject, message).await?;
    Ok(Json(MessageResponse::created("Contact message submitted successfully.", id)))
}

// GET /api/contact
pub async fn list_contact_messages(State(state): State<AppState>) -> AppResult<Json<Vec<ContactMessage>>> {
    Ok(Json(contact_service::find_all_messages(&state.db_pool).await?))
}
