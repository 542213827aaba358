// src/config.rs
use crate::error::{AppError, AppResult};
use std::{env, net::SocketAddr};

/// Limites de custo aceites pelo bcrypt.
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

/// Configuração lida das variáveis de ambiente (e do `.env`, via dotenvy).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub bcrypt_cost: u32,
    /// Origens permitidas pelo CORS. Vazio = qualquer origem.
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://elearn.db".to_string());

        let max_connections = parse_var("DATABASE_MAX_CONNECTIONS", 5u32)?;
        let bind_addr = parse_var("BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 3000)))?;
        let bcrypt_cost = check_bcrypt_cost(parse_var("BCRYPT_COST", bcrypt::DEFAULT_COST)?)?;

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| split_origins(&v))
            .unwrap_or_default();

        Ok(Self {
            database_url,
            max_connections,
            bind_addr,
            bcrypt_cost,
            cors_allowed_origins,
        })
    }
}

fn parse_var<T>(name: &str, default: T) -> AppResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{} inválida ('{}'): {}", name, raw, e))),
        _ => Ok(default),
    }
}

fn check_bcrypt_cost(cost: u32) -> AppResult<u32> {
    if (MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
        Ok(cost)
    } else {
        Err(AppError::Config(format!(
            "BCRYPT_COST deve estar entre {} e {}",
            MIN_BCRYPT_COST, MAX_BCRYPT_COST
        )))
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
