// src/services/user_service.rs
use crate::{
    error::{AppError, AppResult},
    models::user::{User, UserType},
};
use chrono::Utc;
use sqlx::SqlitePool;

const USER_COLUMNS: &str = r#"
    user_id, first_name, last_name, email, password_hash, user_type,
    is_approved, is_active, registration_date, bio
"#;

/// Dados de um utilizador novo, já validados e com o hash calculado.
#[derive(Debug)]
pub struct NewUser<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub user_type: UserType,
    pub is_approved: bool,
    pub is_active: bool,
}

pub async fn find_user_by_id(db_pool: &SqlitePool, user_id: i64) -> AppResult<Option<User>> {
    tracing::debug!("Buscando utilizador por ID: {}", user_id);
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {} FROM users WHERE user_id = ?1",
        USER_COLUMNS
    ))
    .bind(user_id)
    .fetch_optional(db_pool)
    .await?;

    if user.is_none() {
        tracing::debug!("Utilizador {} não encontrado.", user_id);
    }
    Ok(user)
}

/// O email é comparado sem distinguir maiúsculas (coluna COLLATE NOCASE).
pub async fn find_user_by_email(db_pool: &SqlitePool, email: &str) -> AppResult<Option<User>> {
    tracing::debug!("Buscando utilizador por email: {}", email);
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {} FROM users WHERE email = ?1",
        USER_COLUMNS
    ))
    .bind(email.trim())
    .fetch_optional(db_pool)
    .await?;
    Ok(user)
}

pub async fn email_exists(db_pool: &SqlitePool, email: &str) -> AppResult<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?1)")
        .bind(email.trim())
        .fetch_one(db_pool)
        .await?;
    Ok(exists)
}

pub async fn find_all_users(db_pool: &SqlitePool) -> AppResult<Vec<User>> {
    tracing::debug!("Buscando todos os utilizadores...");
    let users = sqlx::query_as::<_, User>(&format!(
        "SELECT {} FROM users ORDER BY user_id ASC",
        USER_COLUMNS
    ))
    .fetch_all(db_pool)
    .await?;
    tracing::debug!("Encontrados {} utilizadores.", users.len());
    Ok(users)
}

pub async fn create_user(db_pool: &SqlitePool, new_user: &NewUser<'_>) -> AppResult<i64> {
    tracing::info!("Tentando criar utilizador: {}", new_user.email);

    let result = sqlx::query(
        r#"
        INSERT INTO users
            (first_name, last_name, email, password_hash, user_type, is_approved, is_active, registration_date)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
        "#,
    )
    .bind(new_user.first_name)
    .bind(new_user.last_name)
    .bind(new_user.email)
    .bind(new_user.password_hash)
    .bind(new_user.user_type.as_str())
    .bind(new_user.is_approved)
    .bind(new_user.is_active)
    .bind(Utc::now().naive_utc())
    .execute(db_pool)
    .await;

    // A verificação prévia do email pode perder uma corrida; o UNIQUE apanha o resto.
    let result = match result {
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            tracing::warn!("Falha ao criar user: email '{}' já existe.", new_user.email);
            return Err(AppError::EmailAlreadyExists);
        }
        other => other?,
    };

    let user_id = result.last_insert_rowid();
    tracing::info!("✅ Utilizador '{}' criado com ID {}.", new_user.email, user_id);
    Ok(user_id)
}

pub async fn update_profile(
    db_pool: &SqlitePool,
    user_id: i64,
    first_name: &str,
    last_name: &str,
    bio: &str,
) -> AppResult<()> {
    tracing::info!("Atualizando perfil do user: {}", user_id);
    let rows_affected = sqlx::query(
        "UPDATE users SET first_name = ?1, last_name = ?2, bio = ?3 WHERE user_id = ?4",
    )
    .bind(first_name)
    .bind(last_name)
    .bind(bio)
    .bind(user_id)
    .execute(db_pool)
    .await?
    .rows_affected();

    expect_row(rows_affected, "User")
}

/// Não apaga inscrições nem resultados do utilizador.
pub async fn delete_user(db_pool: &SqlitePool, user_id: i64) -> AppResult<()> {
    tracing::info!("Apagando utilizador: {}", user_id);
    let rows_affected = sqlx::query("DELETE FROM users WHERE user_id = ?1")
        .bind(user_id)
        .execute(db_pool)
        .await?
        .rows_affected();

    expect_row(rows_affected, "User")
}

/// Aprova um educador pendente (também o ativa). Outros tipos dão NotFound.
pub async fn approve_educator(db_pool: &SqlitePool, user_id: i64) -> AppResult<()> {
    tracing::info!("Aprovando educador: {}", user_id);
    let rows_affected = sqlx::query(
        "UPDATE users SET is_approved = 1, is_active = 1 WHERE user_id = ?1 AND user_type = 'educator'",
    )
    .bind(user_id)
    .execute(db_pool)
    .await?
    .rows_affected();

    expect_row(rows_affected, "Educator")
}

/// Recusa o pedido de educador: a conta continua, mas como estudante.
pub async fn reject_educator(db_pool: &SqlitePool, user_id: i64) -> AppResult<()> {
    tracing::info!("Recusando educador: {}", user_id);
    let rows_affected = sqlx::query(
        r#"
        UPDATE users SET user_type = 'student', is_approved = 1, is_active = 1
        WHERE user_id = ?1 AND user_type = 'educator'
        "#,
    )
    .bind(user_id)
    .execute(db_pool)
    .await?
    .rows_affected();

    expect_row(rows_affected, "Educator")
}

pub async fn set_active(db_pool: &SqlitePool, user_id: i64, is_active: bool) -> AppResult<()> {
    tracing::info!("Alterando estado do user {}: ativo={}", user_id, is_active);
    let rows_affected = sqlx::query("UPDATE users SET is_active = ?1 WHERE user_id = ?2")
        .bind(is_active)
        .bind(user_id)
        .execute(db_pool)
        .await?
        .rows_affected();

    expect_row(rows_affected, "User")
}

pub(crate) fn expect_row(rows_affected: u64, what: &'static str) -> AppResult<()> {
    if rows_affected == 0 {
        tracing::warn!("{}: nenhuma linha afetada.", what);
        Err(AppError::NotFound(what))
    } else {
        Ok(())
    }
}
