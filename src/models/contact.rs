// src/models/contact.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub contact_message_id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submitted_at: NaiveDateTime,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    #[serde(alias = "Name")]
    pub name: Option<String>,
    #[serde(alias = "Email")]
    pub email: Option<String>,
    #[serde(alias = "Subject")]
    pub subject: Option<String>,
    #[serde(alias = "Message")]
    pub message: Option<String>,
}
