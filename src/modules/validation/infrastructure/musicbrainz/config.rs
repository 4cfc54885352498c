use crate::shared::errors::{AppError, AppResult};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://musicbrainz.org/ws/2";

/// Connection settings for the MusicBrainz web service.
///
/// MusicBrainz rejects anonymous clients, so the user agent must name the
/// application and a contact.
#[derive(Debug, Clone)]
pub struct MusicBrainzConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    /// Recordings requested per search
    pub result_limit: u32,
    /// Recordings scored below this are ignored
    pub min_score: u32,
}

impl MusicBrainzConfig {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: user_agent.into(),
            timeout: Duration::from_secs(10),
            result_limit: 10,
            min_score: 60,
        }
    }

    /// Read `APP_USERAGENT`, `APP_VERSION` and `CONTACT_EMAIL` (plus an
    /// optional `MUSICBRAINZ_BASE_URL`) after loading `.env`
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app = lookup("APP_USERAGENT")
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| {
                AppError::ValidationError(
                    "APP_USERAGENT environment variable not found".to_string(),
                )
            })?;
        let version = lookup("APP_VERSION").unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

        let user_agent = match lookup("CONTACT_EMAIL") {
            Some(contact) => format!("{}/{} ( {} )", app.trim(), version.trim(), contact.trim()),
            None => {
                log::warn!("CONTACT_EMAIL not set; MusicBrainz may throttle this client");
                format!("{}/{}", app.trim(), version.trim())
            }
        };

        let mut config = Self::new(user_agent);
        if let Some(base_url) = lookup("MUSICBRAINZ_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.user_agent.trim().is_empty() {
            return Err(AppError::ValidationError(
                "MusicBrainz user agent must not be empty".to_string(),
            ));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(AppError::ValidationError(format!(
                "Invalid MusicBrainz base URL: {}",
                self.base_url
            )));
        }
        if self.result_limit == 0 || self.result_limit > 100 {
            return Err(AppError::ValidationError(format!(
                "MusicBrainz result_limit must be between 1 and 100, got {}",
                self.result_limit
            )));
        }
        if self.min_score > 100 {
            return Err(AppError::ValidationError(format!(
                "MusicBrainz min_score must be at most 100, got {}",
                self.min_score
            )));
        }
        Ok(())
    }
}
