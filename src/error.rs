// src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro na base de dados: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Erro de migração da base de dados: {0}")]
    SqlxMigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro ao processar password")]
    PasswordHashingError,

    // Pedido inválido (campos em falta, valores fora do intervalo, sem permissão)
    #[error("Pedido inválido: {0}")]
    BadRequest(String),

    #[error("Não encontrado: {0}")]
    NotFound(&'static str),

    #[error("Email já registado")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Conta por aprovar")]
    AccountNotApproved,

    #[error("Conta desativada")]
    AccountInactive,

    #[error("Erro interno inesperado")]
    InternalServerError,
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_)
            | AppError::EmailAlreadyExists
            | AppError::InvalidCredentials
            | AppError::AccountNotApproved
            | AppError::AccountInactive => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::SqlxError(_)
            | AppError::SqlxMigrateError(_)
            | AppError::Config(_)
            | AppError::PasswordHashingError
            | AppError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Mensagem devolvida ao cliente. Os erros internos ficam só no log.
    fn client_message(&self) -> String {
        match self {
            AppError::SqlxError(_) | AppError::SqlxMigrateError(_) => {
                "Error accessing data.".to_string()
            }
            AppError::Config(_) => "Configuration error.".to_string(),
            AppError::PasswordHashingError => "Error processing credentials.".to_string(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::NotFound(what) => format!("{} not found", what),
            AppError::EmailAlreadyExists => "Email already exists.".to_string(),
            AppError::InvalidCredentials => "Invalid credentials".to_string(),
            AppError::AccountNotApproved => "Account not approved".to_string(),
            AppError::AccountInactive => "Account is deactivated".to_string(),
            AppError::InternalServerError => "An unexpected error occurred.".to_string(),
        }
    }
}

// Como converter AppError numa resposta HTTP
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Erro processado: {:?}", self);
        } else {
            tracing::debug!("Pedido rejeitado ({}): {}", status.as_u16(), self);
        }

        let body = Json(json!({ "error": self.client_message() }));
        (status, body).into_response()
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;
