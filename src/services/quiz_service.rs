// src/services/quiz_service.rs
use crate::{
    error::AppResult,
    models::quiz::{QuizQuestion, QuizQuestionRow, QuizResult},
    services::user_service::expect_row,
};
use chrono::Utc;
use sqlx::SqlitePool;

const RESULT_SELECT: &str = "SELECT quiz_result_id, user_id, course_id, score, date FROM quiz_results";

pub async fn save_result(db_pool: &SqlitePool, user_id: i64, course_id: i64, score: i64) -> AppResult<i64> {
    tracing::info!("Guardando resultado: user {} curso {} score {}", user_id, course_id, score);
    let id = sqlx::query(
        "INSERT INTO quiz_results (user_id, course_id, score, date) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(user_id)
    .bind(course_id)
    .bind(score)
    .bind(Utc::now().naive_utc())
    .execute(db_pool)
    .await?
    .last_insert_rowid();
    Ok(id)
}

pub async fn find_all_results(db_pool: &SqlitePool) -> AppResult<Vec<QuizResult>> {
    let rows = sqlx::query_as::<_, QuizResult>(&format!(
        "{} ORDER BY date DESC, quiz_result_id DESC",
        RESULT_SELECT
    ))
    .fetch_all(db_pool)
    .await?;
    Ok(rows)
}

pub async fn find_result_by_id(db_pool: &SqlitePool, quiz_result_id: i64) -> AppResult<Option<QuizResult>> {
    let row = sqlx::query_as::<_, QuizResult>(&format!("{} WHERE quiz_result_id = ?1", RESULT_SELECT))
        .bind(quiz_result_id)
        .fetch_optional(db_pool)
        .await?;
    Ok(row)
}

pub async fn find_results_by_user(db_pool: &SqlitePool, user_id: i64) -> AppResult<Vec<QuizResult>> {
    let rows = sqlx::query_as::<_, QuizResult>(&format!(
        "{} WHERE user_id = ?1 ORDER BY date DESC, quiz_result_id DESC",
        RESULT_SELECT
    ))
    .bind(user_id)
    .fetch_all(db_pool)
    .await?;
    Ok(rows)
}

pub async fn find_results_by_course(db_pool: &SqlitePool, course_id: i64) -> AppResult<Vec<QuizResult>> {
    let rows = sqlx::query_as::<_, QuizResult>(&format!(
        "{} WHERE course_id = ?1 ORDER BY date DESC, quiz_result_id DESC",
        RESULT_SELECT
    ))
    .bind(course_id)
    .fetch_all(db_pool)
    .await?;
    Ok(rows)
}

pub async fn update_score(db_pool: &SqlitePool, quiz_result_id: i64, score: i64) -> AppResult<()> {
    let rows_affected = sqlx::query("UPDATE quiz_results SET score = ?1 WHERE quiz_result_id = ?2")
        .bind(score)
        .bind(quiz_result_id)
        .execute(db_pool)
        .await?
        .rows_affected();
    expect_row(rows_affected, "Quiz result")
}

pub async fn delete_result(db_pool: &SqlitePool, quiz_result_id: i64) -> AppResult<()> {
    let rows_affected = sqlx::query("DELETE FROM quiz_results WHERE quiz_result_id = ?1")
        .bind(quiz_result_id)
        .execute(db_pool)
        .await?
        .rows_affected();
    expect_row(rows_affected, "Quiz result")
}

pub async fn find_questions_by_course(db_pool: &SqlitePool, course_id: i64) -> AppResult<Vec<QuizQuestion>> {
    let rows = sqlx::query_as::<_, QuizQuestionRow>(
        r#"
        SELECT question_id, course_id, question, option_a, option_b, option_c, option_d, correct_answer
        FROM quiz_questions
        WHERE course_id = ?1
        ORDER BY question_id
        "#,
    )
    .bind(course_id)
    .fetch_all(db_pool)
    .await?;
    Ok(rows.into_iter().map(QuizQuestion::from).collect())
}

pub async fn create_question(
    db_pool: &SqlitePool,
    course_id: i64,
    question: &str,
    options: &[String; 4],
    correct_answer: i64,
) -> AppResult<i64> {
    tracing::info!("Criando pergunta para o curso {}", course_id);
    let [a, b, c, d] = options;
    let id = sqlx::query(
        r#"
        INSERT INTO quiz_questions (course_id, question, option_a, option_b, option_c, option_d, correct_answer)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
    )
    .bind(course_id)
    .bind(question)
    .bind(a.as_str())
    .bind(b.as_str())
    .bind(c.as_str())
    .bind(d.as_str())
    .bind(correct_answer)
    .execute(db_pool)
    .await?
    .last_insert_rowid();
    Ok(id)
}
