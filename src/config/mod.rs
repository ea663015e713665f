use crate::error::AppError;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub port: u16,
    pub openai: OpenAiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub api_base: String,
    pub image_model: String,
    pub edit_model: String,
    pub timeout_secs: u64,
}

impl ServiceConfig {
    pub fn load() -> Result<Self, AppError> {
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let port = get_env("APP_PORT", Some("8000"), is_prod)?
            .parse()
            .map_err(|e| AppError::ConfigError(anyhow::anyhow!("Invalid APP_PORT: {}", e)))?;

        Ok(ServiceConfig {
            port,
            openai: OpenAiConfig {
                // Empty in dev means the provider rejects calls as
                // not-configured instead of failing startup.
                api_key: get_env("OPENAI_API_KEY", Some(""), is_prod)?,
                api_base: get_env("OPENAI_API_BASE", Some("https://api.openai.com/v1"), is_prod)?,
                image_model: get_env("IMAGE_MODEL", Some("gpt-image-1"), is_prod)?,
                edit_model: get_env("IMAGE_EDIT_MODEL", Some("gpt-image-1"), is_prod)?,
                timeout_secs: get_env("PROVIDER_TIMEOUT_SECS", Some("120"), is_prod)?
                    .parse()
                    .map_err(|e| {
                        AppError::ConfigError(anyhow::anyhow!(
                            "Invalid PROVIDER_TIMEOUT_SECS: {}",
                            e
                        ))
                    })?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required in production but not set",
                    key
                ))))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required but not set",
                    key
                ))))
            }
        }
    }
}
