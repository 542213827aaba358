// src/services/activity_service.rs
use crate::{error::AppResult, models::activity::ActivityItem};
use chrono::{Duration, NaiveDateTime, Utc};
use sqlx::SqlitePool;

/// Tamanho máximo dos feeds de atividade.
pub const FEED_LIMIT: usize = 10;
/// Janela (em dias) do feed de sistema.
pub const SYSTEM_WINDOW_DAYS: i64 = 7;
/// Quantas entradas de cada fonte entram no feed de sistema.
pub const SYSTEM_PER_SOURCE: i64 = 5;
/// Horas estimadas para completar um curso.
pub const HOURS_PER_COURSE: f64 = 20.0;

/// Junta as fontes, ordena da mais recente para a mais antiga e corta em `limit`.
pub fn merge_feed(sources: Vec<Vec<ActivityItem>>, limit: usize) -> Vec<ActivityItem> {
    let mut feed: Vec<ActivityItem> = sources.into_iter().flatten().collect();
    // sort_by é estável: em datas iguais mantém a ordem das fontes
    feed.sort_by(|a, b| b.date.cmp(&a.date));
    feed.truncate(limit);
    feed
}

/// Estimativa: 20 horas por curso, ponderadas pelo progresso médio.
pub fn estimate_study_hours(total_enrollments: i64, average_progress: Option<f64>) -> i64 {
    let average = average_progress.unwrap_or(0.0);
    (total_enrollments as f64 * HOURS_PER_COURSE * (average / 100.0)).floor() as i64
}

pub async fn user_feed(db_pool: &SqlitePool, user_id: i64) -> AppResult<Vec<ActivityItem>> {
    tracing::debug!("Montando feed de atividade do user {}", user_id);

    let enrollments = sqlx::query_as::<_, ActivityItem>(
        r#"
        SELECT 'enrollment' AS activity_type,
               'Enrolled in ' || c.title AS message,
               e.enrollment_date AS date
        FROM enrollments e
        INNER JOIN courses c ON e.course_id = c.course_id
        WHERE e.user_id = ?1
        "#,
    )
    .bind(user_id)
    .fetch_all(db_pool)
    .await?;

    let quizzes = sqlx::query_as::<_, ActivityItem>(
        r#"
        SELECT 'quiz' AS activity_type,
               'Completed ' || c.title || ' Quiz - Score: ' || qr.score || '%' AS message,
               qr.date AS date
        FROM quiz_results qr
        INNER JOIN courses c ON qr.course_id = c.course_id
        WHERE qr.user_id = ?1
        "#,
    )
    .bind(user_id)
    .fetch_all(db_pool)
    .await?;

    let logs = sqlx::query_as::<_, ActivityItem>(
        "SELECT type AS activity_type, message, date FROM activity_logs WHERE user_id = ?1",
    )
    .bind(user_id)
    .fetch_all(db_pool)
    .await?;

    Ok(merge_feed(vec![enrollments, quizzes, logs], FEED_LIMIT))
}

pub async fn system_feed(db_pool: &SqlitePool) -> AppResult<Vec<ActivityItem>> {
    let now = Utc::now().naive_utc();
    let since = now - Duration::days(SYSTEM_WINDOW_DAYS);
    tracing::debug!("Montando feed de sistema desde {}", since);

    let users = sqlx::query_as::<_, ActivityItem>(
        r#"
        SELECT 'user' AS activity_type,
               'New ' || user_type || ' account created: ' || email AS message,
               registration_date AS date
        FROM users
        WHERE registration_date >= ?1
        ORDER BY registration_date DESC
        LIMIT ?2
        "#,
    )
    .bind(since)
    .bind(SYSTEM_PER_SOURCE)
    .fetch_all(db_pool)
    .await?;

    let courses = sqlx::query_as::<_, ActivityItem>(
        r#"
        SELECT 'course' AS activity_type,
               'Course "' || title || '" was published' AS message,
               created_at AS date
        FROM courses
        WHERE created_at >= ?1
        ORDER BY created_at DESC
        LIMIT ?2
        "#,
    )
    .bind(since)
    .bind(SYSTEM_PER_SOURCE)
    .fetch_all(db_pool)
    .await?;

    let today_start = start_of_day(now);
    let enrollments_today: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM enrollments WHERE enrollment_date >= ?1")
            .bind(today_start)
            .fetch_one(db_pool)
            .await?;

    let mut summary = Vec::new();
    if enrollments_today > 0 {
        summary.push(ActivityItem {
            kind: "enrollment".to_string(),
            message: format!("{} new enrollments today", enrollments_today),
            date: today_start,
        });
    }

    Ok(merge_feed(vec![users, courses, summary], FEED_LIMIT))
}

pub async fn study_hours(db_pool: &SqlitePool, user_id: i64) -> AppResult<i64> {
    let (total, average): (i64, Option<f64>) = sqlx::query_as(
        "SELECT COUNT(enrollment_id), AVG(CAST(progress AS REAL)) FROM enrollments WHERE user_id = ?1",
    )
    .bind(user_id)
    .fetch_one(db_pool)
    .await?;

    let hours = estimate_study_hours(total, average);
    tracing::debug!("User {}: {} inscrições, média {:?}% -> {}h", user_id, total, average, hours);
    Ok(hours)
}

pub async fn log_activity(
    db_pool: &SqlitePool,
    user_id: i64,
    kind: &str,
    message: &str,
    date: Option<NaiveDateTime>,
) -> AppResult<i64> {
    let date = date.unwrap_or_else(|| Utc::now().naive_utc());
    let id = sqlx::query(
        "INSERT INTO activity_logs (user_id, type, message, date) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(user_id)
    .bind(kind)
    .bind(message)
    .bind(date)
    .execute(db_pool)
    .await?
    .last_insert_rowid();

    tracing::debug!("Atividade '{}' registada para user {}", kind, user_id);
    Ok(id)
}

fn start_of_day(moment: NaiveDateTime) -> NaiveDateTime {
    moment.date().and_hms_opt(0, 0, 0).unwrap_or(moment)
}
