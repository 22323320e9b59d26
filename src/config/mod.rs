// src/config/mod.rs
// All tunables load from the environment (.env supported), with defaults

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Clone, Deserialize)]
pub struct CropGuardConfig {
    // ── Server Configuration
    pub host: String,
    pub port: u16,
    pub cors_origin: String,

    // ── Provider Configuration
    pub openai_base_url: String,
    pub openai_model: String,
    pub deepseek_base_url: String,
    pub deepseek_model: String,
    pub max_tokens: u32,
    pub temperature: f32,

    // ── Credential Store
    /// Override for the credentials file; empty means the default location
    /// under the user config dir.
    pub credentials_path: String,

    // ── Scan Classifier
    /// Fixed RNG seed for reproducible scan results; unset means OS entropy.
    pub scan_seed: Option<u64>,

    // ── Logging Configuration
    pub log_level: String,
}

fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            // Values may carry inline comments and stray whitespace
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl CropGuardConfig {
    pub fn from_env() -> Self {
        // Missing .env is fine; plain environment variables and defaults apply
        let _ = dotenvy::dotenv();

        Self {
            host: env_var_or("CROPGUARD_HOST", "0.0.0.0".to_string()),
            port: env_var_or("CROPGUARD_PORT", 3002),
            cors_origin: env_var_or("CROPGUARD_CORS_ORIGIN", "http://localhost:3000".to_string()),
            openai_base_url: env_var_or("OPENAI_BASE_URL", "https://api.openai.com".to_string()),
            openai_model: env_var_or("CROPGUARD_OPENAI_MODEL", "gpt-4o-mini".to_string()),
            deepseek_base_url: env_var_or(
                "DEEPSEEK_BASE_URL",
                "https://api.deepseek.com".to_string(),
            ),
            deepseek_model: env_var_or("CROPGUARD_DEEPSEEK_MODEL", "deepseek-chat".to_string()),
            max_tokens: env_var_or("CROPGUARD_MAX_TOKENS", 1000),
            temperature: env_var_or("CROPGUARD_TEMPERATURE", 0.7),
            credentials_path: env_var_or("CROPGUARD_CREDENTIALS_PATH", String::new()),
            scan_seed: std::env::var("CROPGUARD_SCAN_SEED")
                .ok()
                .and_then(|v| v.split('#').next().unwrap_or("").trim().parse().ok()),
            log_level: env_var_or("CROPGUARD_LOG_LEVEL", "info".to_string()),
        }
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<CropGuardConfig> = Lazy::new(CropGuardConfig::from_env);
