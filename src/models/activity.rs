// src/models/activity.rs
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Entrada do feed de atividade (sintetizada a partir de várias tabelas).
#[derive(Debug, Clone, FromRow, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    #[sqlx(rename = "activity_type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub date: NaiveDateTime,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyHoursResponse {
    pub study_hours: i64,
}

// Corpo de POST /api/activity/log
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityLogRequest {
    #[serde(alias = "UserId")]
    pub user_id: i64,
    #[serde(alias = "Type")]
    pub r#type: Option<String>,
    #[serde(alias = "Message")]
    pub message: Option<String>,
    // ISO 8601 com fuso (o que o `Date.toISOString()` do browser envia)
    #[serde(alias = "Date")]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct ActivityLogResponse {
    pub message: String,
    pub success: bool,
}
