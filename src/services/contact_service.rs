// src/services/contact_service.rs
use crate::{error::AppResult, models::contact::ContactMessage};
use chrono::Utc;
use sqlx::SqlitePool;

pub async fn submit_message(
    db_pool: &SqlitePool,
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
) -> AppResult<i64> {
    tracing::info!("Nova mensagem de contacto de {}", email);
    let id = sqlx::query(
        r#"
        INSERT INTO contact_messages (name, email, subject, message, submitted_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(subject)
    .bind(message)
    .bind(Utc::now().naive_utc())
    .execute(db_pool)
    .await?
    .last_insert_rowid();
    Ok(id)
}

pub async fn find_all_messages(db_pool: &SqlitePool) -> AppResult<Vec<ContactMessage>> {
    let messages = sqlx::query_as::<_, ContactMessage>(
        r#"
        SELECT contact_message_id, name, email, subject, message, submitted_at
        FROM contact_messages
        ORDER BY submitted_at DESC, contact_message_id DESC
        "#,
    )
    .fetch_all(db_pool)
    .await?;
    Ok(messages)
}
