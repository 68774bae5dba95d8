//! Configuration management

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::constants::{
    ACCESS_TOKEN_COOKIE_SUFFIX, CODE_VERIFIER_COOKIE_SUFFIX, DEFAULT_APP_NAME,
    DEFAULT_AUTH_TIMEOUT_SECONDS, DEFAULT_COOKIE_MAX_AGE, DEFAULT_COOKIE_PREFIX,
    REFRESH_TOKEN_COOKIE_SUFFIX,
};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub supabase: SupabaseSettings,
    pub site: SiteSettings,
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub cookie: CookieSettings,
    #[serde(default)]
    pub routes: RouteSettings,
    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

/// Hosted auth service endpoint and its public (anon) key.
#[derive(Debug, Deserialize, Clone)]
pub struct SupabaseSettings {
    pub url: String,
    pub anon_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteSettings {
    /// Public origin of this site, used to build the auth callback target.
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthSettings {
    pub timeout_seconds: u64,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self { timeout_seconds: DEFAULT_AUTH_TIMEOUT_SECONDS }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SameSite {
    #[serde(alias = "Strict")]
    Strict,
    #[serde(alias = "Lax")]
    Lax,
    #[serde(alias = "None")]
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Attributes shared by every session cookie this site reads or writes.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CookieSettings {
    pub prefix: String,
    pub path: String,
    pub domain: Option<String>,
    pub secure: bool,
    pub same_site: SameSite,
    pub max_age_seconds: i64,
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_COOKIE_PREFIX.to_string(),
            path: "/".to_string(),
            domain: None,
            secure: true,
            same_site: SameSite::Lax,
            max_age_seconds: DEFAULT_COOKIE_MAX_AGE,
        }
    }
}

impl CookieSettings {
    pub fn access_token_name(&self) -> String {
        format!("{}-{}", self.prefix, ACCESS_TOKEN_COOKIE_SUFFIX)
    }

    pub fn refresh_token_name(&self) -> String {
        format!("{}-{}", self.prefix, REFRESH_TOKEN_COOKIE_SUFFIX)
    }

    pub fn code_verifier_name(&self) -> String {
        format!("{}-{}", self.prefix, CODE_VERIFIER_COOKIE_SUFFIX)
    }
}

/// One row of the route authorization table as written in config files.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RouteRuleSetting {
    pub pattern: String,
    pub role: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RouteSettings {
    /// Replaces the built-in table when non-empty.
    #[serde(default)]
    pub rules: Vec<RouteRuleSetting>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
    pub format: LogFormat,
    /// Daily rolling log files are written here when set.
    pub directory: Option<String>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Json,
            directory: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        Self::from_config(config)
    }

    /// Builder pre-seeded with the defaults every source layers on top of.
    pub fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, AppError> {
        Ok(Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 3000)?
            .set_default("app.name", DEFAULT_APP_NAME)?)
    }

    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let settings: AppConfig = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), AppError> {
        require_url("supabase.url", &self.supabase.url)?;
        require_url("site.url", &self.site.url)?;
        if self.supabase.anon_key.trim().is_empty() {
            return Err(AppError::InvalidSetting {
                key: "supabase.anon_key",
                reason: "value is required".to_string(),
            });
        }
        if self.cookie.prefix.trim().is_empty() {
            return Err(AppError::InvalidSetting {
                key: "cookie.prefix",
                reason: "value is required".to_string(),
            });
        }
        if self.cookie.same_site == SameSite::None && !self.cookie.secure {
            return Err(AppError::InvalidSetting {
                key: "cookie.same_site",
                reason: "SameSite=None requires cookie.secure = true".to_string(),
            });
        }
        Ok(())
    }
}

fn require_url(key: &'static str, value: &str) -> Result<(), AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::InvalidSetting { key, reason: "value is required".to_string() });
    }
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(AppError::InvalidSetting {
            key,
            reason: format!("expected an http(s) URL, got `{}`", value),
        });
    }
    Ok(())
}
