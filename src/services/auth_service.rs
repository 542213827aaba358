// src/services/auth_service.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        required,
        user::{RegisterRequest, User, UserType},
    },
    services::user_service::{self, NewUser},
};
use sqlx::SqlitePool;

/// Verifica se a senha fornecida corresponde ao hash guardado.
/// Um hash que o bcrypt não reconhece (ex.: SHA-256 antigo) conta como senha errada.
pub async fn verify_password(password: &str, stored_hash: &str) -> AppResult<bool> {
    let password = password.to_string();
    let stored_hash = stored_hash.to_string();
    let outcome = tokio::task::spawn_blocking(move || {
        tracing::debug!("Verificando hash bcrypt...");
        bcrypt::verify(&password, &stored_hash)
    })
    .await
    .map_err(|e| {
        tracing::error!("Erro na task spawn_blocking (verify_password): {:?}", e);
        AppError::InternalServerError
    })?;

    match outcome {
        Ok(matches) => Ok(matches),
        Err(e) => {
            tracing::warn!("Hash guardado inválido para bcrypt: {:?}", e);
            Ok(false)
        }
    }
}

/// Gera um hash bcrypt para uma senha.
pub async fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || {
        tracing::debug!("Gerando hash bcrypt (custo {})...", cost);
        bcrypt::hash(&password, cost)
    })
    .await
    .map_err(|e| {
        tracing::error!("Erro na task spawn_blocking (hash_password): {:?}", e);
        AppError::InternalServerError
    })?
    .map_err(|e| {
        tracing::error!("Erro bcrypt ao gerar hash: {:?}", e);
        AppError::PasswordHashingError
    })
}

/// Regista uma conta nova. Estudantes ficam aprovados e ativos; educadores e
/// admins ficam pendentes, a não ser que `allow_approval_override` deixe o
/// pedido escolher (criação pelo admin).
pub async fn register(
    db_pool: &SqlitePool,
    bcrypt_cost: u32,
    request: &RegisterRequest,
    allow_approval_override: bool,
) -> AppResult<i64> {
    let (Some(email), Some(password), Some(raw_type)) = (
        required(&request.email),
        request.password.as_deref().filter(|p| !p.is_empty()),
        required(&request.user_type),
    ) else {
        return Err(AppError::bad_request("Invalid input"));
    };

    let user_type: UserType = raw_type.parse().map_err(AppError::BadRequest)?;

    if user_service::email_exists(db_pool, email).await? {
        tracing::warn!("Registo recusado: email '{}' já existe.", email);
        return Err(AppError::EmailAlreadyExists);
    }

    let password_hash = hash_password(password, bcrypt_cost).await?;

    let is_approved = match request.is_approved {
        Some(flag) if allow_approval_override => flag,
        _ => user_type.auto_approved(),
    };

    let new_user = NewUser {
        first_name: request.first_name.as_deref().unwrap_or("").trim(),
        last_name: request.last_name.as_deref().unwrap_or("").trim(),
        email,
        password_hash: &password_hash,
        user_type,
        is_approved,
        is_active: is_approved,
    };
    user_service::create_user(db_pool, &new_user).await
}

/// Autentica por email e senha. Não há token: o utilizador devolvido é a "sessão".
pub async fn login(db_pool: &SqlitePool, email: &str, password: &str) -> AppResult<User> {
    tracing::info!("Tentativa de login para: {}", email);

    let Some(user) = user_service::find_user_by_email(db_pool, email).await? else {
        tracing::warn!("Utilizador não encontrado: {}", email);
        return Err(AppError::InvalidCredentials);
    };

    if !verify_password(password, &user.password_hash).await? {
        tracing::warn!("Senha incorreta para: {}", email);
        return Err(AppError::InvalidCredentials);
    }

    if !user.is_approved {
        tracing::warn!("Login recusado, conta por aprovar: {}", email);
        return Err(AppError::AccountNotApproved);
    }
    if !user.is_active {
        tracing::warn!("Login recusado, conta desativada: {}", email);
        return Err(AppError::AccountInactive);
    }

    tracing::info!("✅ Login bem-sucedido para: {} ({})", user.email, user.user_type);
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[tokio::test]
    async fn unparseable_hash_is_a_failed_verification() {
        let legacy = "XohImNooBHFR0OVvjcYpJ3NgPQ1qq73WKhHvch0VQtg=";
        assert!(!verify_password("password", legacy).await.unwrap());
        assert!(!verify_password("password", "").await.unwrap());
    }

    #[tokio::test]
    async fn login_with_legacy_hash_is_invalid_credentials() {
        let pool = db::create_memory_pool().await.unwrap();
        let new_user = NewUser {
            first_name: "Ana",
            last_name: "Silva",
            email: "ana@example.com",
            password_hash: "XohImNooBHFR0OVvjcYpJ3NgPQ1qq73WKhHvch0VQtg=",
            user_type: UserType::Student,
            is_approved: true,
            is_active: true,
        };
        user_service::create_user(&pool, &new_user).await.unwrap();

        let result = login(&pool, "ana@example.com", "password").await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn hash_then_verify() {
        let hash = hash_password("secret123", crate::config::MIN_BCRYPT_COST).await.unwrap();
        assert!(verify_password("secret123", &hash).await.unwrap());
        assert!(!verify_password("wrong", &hash).await.unwrap());
    }
}
