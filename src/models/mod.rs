// src/models/mod.rs
pub mod activity;
pub mod contact;
pub mod course;
pub mod enrollment;
pub mod quiz;
pub mod user;

use serde::Serialize;

/// Resposta simples devolvida pelas operações de escrita.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), id: None }
    }

    pub fn created(message: impl Into<String>, id: i64) -> Self {
        Self { message: message.into(), id: Some(id) }
    }
}

/// Campo de texto obrigatório: `None`, vazio ou só espaços conta como em falta.
pub fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
