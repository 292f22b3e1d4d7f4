use dotenv::dotenv;
use std::env;
use std::str::FromStr;
use tracing::{info, warn};

const DEFAULT_JWT_SECRET: &str = "your-secret-key-change-in-production";

/// Limite massimo di validità dei token: 10 anni
const MAX_JWT_EXPIRATION_HOURS: i64 = 24 * 365 * 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub jwt_secret: String,
    pub server_host: String,
    pub server_port: u16,
    pub jwt_expiration_hours: i64,
    pub bcrypt_cost: u32,
    pub app_env: String,
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Costruisce la configurazione da una sorgente di variabili qualsiasi
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            warn!("JWT_SECRET not set, using default (not secure for production!)");
            DEFAULT_JWT_SECRET.to_string()
        });

        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let server_port = parse_var(
            &lookup,
            "SERVER_PORT",
            8000u16,
            "Invalid SERVER_PORT: must be a number between 0-65535",
        )?;

        let jwt_expiration_hours = parse_var(
            &lookup,
            "JWT_EXPIRATION_HOURS",
            24 * 7i64,
            "Invalid JWT_EXPIRATION_HOURS: must be a number of hours",
        )?;
        if !(1..=MAX_JWT_EXPIRATION_HOURS).contains(&jwt_expiration_hours) {
            return Err(format!(
                "Invalid JWT_EXPIRATION_HOURS: must be between 1 and {}",
                MAX_JWT_EXPIRATION_HOURS
            ));
        }

        let bcrypt_cost = parse_var(
            &lookup,
            "BCRYPT_COST",
            bcrypt::DEFAULT_COST,
            "Invalid BCRYPT_COST: must be a number",
        )?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err("Invalid BCRYPT_COST: must be between 4 and 31".to_string());
        }

        let app_env = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());

        Ok(Config {
            jwt_secret,
            server_host,
            server_port,
            jwt_expiration_hours,
            bcrypt_cost,
            app_env,
        })
    }

    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }

    /// Logga la configurazione (nascondendo i segreti)
    pub fn print_info(&self) {
        info!("Server Configuration:");
        info!("   Environment: {}", self.app_env);
        info!("   Server Address: {}:{}", self.server_host, self.server_port);
        info!("   Token Lifetime: {}h", self.jwt_expiration_hours);
        info!("   Bcrypt Cost: {}", self.bcrypt_cost);
        if self.uses_default_secret() {
            warn!("   JWT Secret: USING DEFAULT (INSECURE!)");
        } else {
            info!("   JWT Secret: custom secret configured");
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T, error: &str) -> Result<T, String>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|_| error.to_string()),
        None => Ok(default),
    }
}
