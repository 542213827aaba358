// src/services/course_service.rs
use crate::{
    error::{AppError, AppResult},
    models::course::Course,
};
use chrono::Utc;
use sqlx::SqlitePool;

const COURSE_COLUMNS: &str =
    "course_id, title, description, educator_id, duration, price, level, created_at";

/// Campos editáveis de um curso, já validados.
#[derive(Debug)]
pub struct CourseFields<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub duration: &'a str,
    pub price: f64,
    pub level: &'a str,
}

pub async fn find_all_courses(db_pool: &SqlitePool) -> AppResult<Vec<Course>> {
    let courses = sqlx::query_as::<_, Course>(&format!(
        "SELECT {} FROM courses ORDER BY course_id ASC",
        COURSE_COLUMNS
    ))
    .fetch_all(db_pool)
    .await?;
    tracing::debug!("Encontrados {} cursos.", courses.len());
    Ok(courses)
}

pub async fn find_course_by_id(db_pool: &SqlitePool, course_id: i64) -> AppResult<Option<Course>> {
    let course = sqlx::query_as::<_, Course>(&format!(
        "SELECT {} FROM courses WHERE course_id = ?1",
        COURSE_COLUMNS
    ))
    .bind(course_id)
    .fetch_optional(db_pool)
    .await?;
    Ok(course)
}

pub async fn find_courses_by_educator(db_pool: &SqlitePool, educator_id: i64) -> AppResult<Vec<Course>> {
    let courses = sqlx::query_as::<_, Course>(&format!(
        "SELECT {} FROM courses WHERE educator_id = ?1 ORDER BY course_id ASC",
        COURSE_COLUMNS
    ))
    .bind(educator_id)
    .fetch_all(db_pool)
    .await?;
    Ok(courses)
}

pub async fn create_course(
    db_pool: &SqlitePool,
    educator_id: i64,
    fields: &CourseFields<'_>,
) -> AppResult<i64> {
    tracing::info!("Criando curso '{}' para educador {}", fields.title, educator_id);
    let course_id = sqlx::query(
        r#"
        INSERT INTO courses (title, description, educator_id, duration, price, level, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
    )
    .bind(fields.title)
    .bind(fields.description)
    .bind(educator_id)
    .bind(fields.duration)
    .bind(fields.price)
    .bind(fields.level)
    .bind(Utc::now().naive_utc())
    .execute(db_pool)
    .await?
    .last_insert_rowid();

    tracing::info!("✅ Curso {} criado.", course_id);
    Ok(course_id)
}

/// Atualiza o curso só se pertencer ao educador indicado. A verificação de dono
/// e a escrita são a mesma instrução, sem janela entre as duas.
pub async fn update_course(
    db_pool: &SqlitePool,
    course_id: i64,
    educator_id: i64,
    fields: &CourseFields<'_>,
) -> AppResult<()> {
    tracing::info!("Atualizando curso {} (educador {})", course_id, educator_id);
    let rows_affected = sqlx::query(
        r#"
        UPDATE courses
        SET title = ?1, description = ?2, duration = ?3, price = ?4, level = ?5
        WHERE course_id = ?6 AND educator_id = ?7
        "#,
    )
    .bind(fields.title)
    .bind(fields.description)
    .bind(fields.duration)
    .bind(fields.price)
    .bind(fields.level)
    .bind(course_id)
    .bind(educator_id)
    .execute(db_pool)
    .await?
    .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Curso {} não encontrado ou não pertence a {}.", course_id, educator_id);
        return Err(AppError::bad_request(
            "Course not found or you don't have permission to update it.",
        ));
    }
    Ok(())
}

/// Apaga o curso do educador. As inscrições e resultados ficam órfãos.
pub async fn delete_course(db_pool: &SqlitePool, course_id: i64, educator_id: i64) -> AppResult<()> {
    tracing::info!("Apagando curso {} (educador {})", course_id, educator_id);
    let rows_affected = sqlx::query("DELETE FROM courses WHERE course_id = ?1 AND educator_id = ?2")
        .bind(course_id)
        .bind(educator_id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Curso {} não encontrado ou não pertence a {}.", course_id, educator_id);
        return Err(AppError::bad_request(
            "Course not found or you don't have permission to delete it.",
        ));
    }
    Ok(())
}
