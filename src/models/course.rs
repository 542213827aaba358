// src/models/course.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub course_id: i64,
    pub title: String,
    pub description: String,
    pub educator_id: i64,
    pub duration: String,
    pub price: f64,
    pub level: String,
    pub created_at: NaiveDateTime,
}

/// Corpo de POST e PUT /api/courses. No PUT o `educator_id` serve de verificação de dono.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoursePayload {
    #[serde(alias = "Title")]
    pub title: Option<String>,
    #[serde(alias = "Description")]
    pub description: Option<String>,
    #[serde(alias = "EducatorId")]
    pub educator_id: i64,
    #[serde(alias = "Duration")]
    pub duration: Option<String>,
    #[serde(alias = "Price")]
    pub price: f64,
    #[serde(alias = "Level")]
    pub level: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerQuery {
    #[serde(alias = "EducatorId", alias = "educatorid")]
    pub educator_id: Option<i64>,
}
