// src/models/enrollment.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub enrollment_id: i64,
    pub user_id: i64,
    pub course_id: i64,
    pub enrollment_date: NaiveDateTime,
    pub progress: i64,
}

/// Inscrição com o título e preço do curso (lista geral e lista por utilizador).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentWithCourse {
    pub enrollment_id: i64,
    pub user_id: i64,
    pub course_id: i64,
    pub enrollment_date: NaiveDateTime,
    pub progress: i64,
    pub course_title: String,
    pub course_price: f64,
}

/// Aluno inscrito num curso (vista do educador).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentWithUser {
    pub enrollment_id: i64,
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub enrollment_date: NaiveDateTime,
    pub progress: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnrollRequest {
    #[serde(alias = "UserId")]
    pub user_id: i64,
    #[serde(alias = "CourseId")]
    pub course_id: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressUpdateRequest {
    #[serde(alias = "UserId")]
    pub user_id: i64,
    #[serde(alias = "CourseId")]
    pub course_id: i64,
    #[serde(alias = "Progress")]
    pub progress: i64,
}
