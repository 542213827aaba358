// src/services/enrollment_service.rs
use crate::{
    error::{AppError, AppResult},
    models::enrollment::{Enrollment, EnrollmentWithCourse, EnrollmentWithUser},
    services::user_service::expect_row,
};
use chrono::Utc;
use sqlx::SqlitePool;

// INNER JOIN: inscrições de cursos apagados não aparecem nesta vista
const WITH_COURSE_SELECT: &str = r#"
    SELECT e.enrollment_id, e.user_id, e.course_id, e.enrollment_date, e.progress,
           c.title AS course_title, c.price AS course_price
    FROM enrollments e
    INNER JOIN courses c ON e.course_id = c.course_id
"#;

pub async fn find_all_enrollments(db_pool: &SqlitePool) -> AppResult<Vec<EnrollmentWithCourse>> {
    let rows = sqlx::query_as::<_, EnrollmentWithCourse>(&format!(
        "{} ORDER BY e.enrollment_id ASC",
        WITH_COURSE_SELECT
    ))
    .fetch_all(db_pool)
    .await?;
    Ok(rows)
}

pub async fn find_enrollment_by_id(db_pool: &SqlitePool, enrollment_id: i64) -> AppResult<Option<Enrollment>> {
    let row = sqlx::query_as::<_, Enrollment>(
        r#"
        SELECT enrollment_id, user_id, course_id, enrollment_date, progress
        FROM enrollments WHERE enrollment_id = ?1
        "#,
    )
    .bind(enrollment_id)
    .fetch_optional(db_pool)
    .await?;
    Ok(row)
}

pub async fn find_enrollments_by_user(db_pool: &SqlitePool, user_id: i64) -> AppResult<Vec<EnrollmentWithCourse>> {
    let rows = sqlx::query_as::<_, EnrollmentWithCourse>(&format!(
        "{} WHERE e.user_id = ?1 ORDER BY e.enrollment_id ASC",
        WITH_COURSE_SELECT
    ))
    .bind(user_id)
    .fetch_all(db_pool)
    .await?;
    Ok(rows)
}

pub async fn find_enrollments_by_course(db_pool: &SqlitePool, course_id: i64) -> AppResult<Vec<EnrollmentWithUser>> {
    let rows = sqlx::query_as::<_, EnrollmentWithUser>(
        r#"
        SELECT e.enrollment_id, e.user_id, u.first_name, u.last_name, u.email,
               e.enrollment_date, e.progress
        FROM enrollments e
        INNER JOIN users u ON e.user_id = u.user_id
        WHERE e.course_id = ?1
        ORDER BY e.enrollment_id ASC
        "#,
    )
    .bind(course_id)
    .fetch_all(db_pool)
    .await?;
    Ok(rows)
}

pub async fn enroll(db_pool: &SqlitePool, user_id: i64, course_id: i64) -> AppResult<i64> {
    tracing::info!("Inscrevendo user {} no curso {}", user_id, course_id);

    let already: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM enrollments WHERE user_id = ?1 AND course_id = ?2)",
    )
    .bind(user_id)
    .bind(course_id)
    .fetch_one(db_pool)
    .await?;
    if already {
        tracing::warn!("User {} já inscrito no curso {}.", user_id, course_id);
        return Err(AppError::bad_request("Already enrolled"));
    }

    let result = sqlx::query(
        "INSERT INTO enrollments (user_id, course_id, enrollment_date, progress) VALUES (?1, ?2, ?3, 0)",
    )
    .bind(user_id)
    .bind(course_id)
    .bind(Utc::now().naive_utc())
    .execute(db_pool)
    .await;

    // Pedidos simultâneos passam ambos o EXISTS; o índice único decide.
    let result = match result {
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            tracing::warn!("User {} já inscrito no curso {} (corrida).", user_id, course_id);
            return Err(AppError::bad_request("Already enrolled"));
        }
        other => other?,
    };

    Ok(result.last_insert_rowid())
}

pub async fn update_progress(db_pool: &SqlitePool, user_id: i64, course_id: i64, progress: i64) -> AppResult<()> {
    tracing::debug!("Progresso user {} curso {} -> {}%", user_id, course_id, progress);
    let rows_affected = sqlx::query(
        "UPDATE enrollments SET progress = ?1 WHERE user_id = ?2 AND course_id = ?3",
    )
    .bind(progress)
    .bind(user_id)
    .bind(course_id)
    .execute(db_pool)
    .await?
    .rows_affected();

    expect_row(rows_affected, "Enrollment")
}

pub async fn unenroll_by_id(db_pool: &SqlitePool, enrollment_id: i64) -> AppResult<()> {
    tracing::info!("Cancelando inscrição {}", enrollment_id);
    let rows_affected = sqlx::query("DELETE FROM enrollments WHERE enrollment_id = ?1")
        .bind(enrollment_id)
        .execute(db_pool)
        .await?
        .rows_affected();

    expect_row(rows_affected, "Enrollment")
}

pub async fn unenroll(db_pool: &SqlitePool, user_id: i64, course_id: i64) -> AppResult<()> {
    tracing::info!("Cancelando inscrição do user {} no curso {}", user_id, course_id);
    let rows_affected = sqlx::query("DELETE FROM enrollments WHERE user_id = ?1 AND course_id = ?2")
        .bind(user_id)
        .bind(course_id)
        .execute(db_pool)
        .await?
        .rows_affected();

    expect_row(rows_affected, "Enrollment")
}
