use crate::shared::errors::{AppError, AppResult};
use chrono::Duration;

/// Configuration for the moderation pipeline
///
/// Holds the repost window and the switches for the optional checks. The
/// MusicBrainz connection has its own config.
#[derive(Debug, Clone)]
pub struct ModerationConfig {
    /// How far back a repost counts, in days
    pub lookback_days: i64,

    /// Maximum history results inspected per repost search pass
    pub max_repost_results: usize,

    /// Ask the music oracle to rescue ambiguous title/link matches
    pub enable_typo_correction: bool,

    /// Flag posts whose author name appears in the artist
    pub enable_self_promotion_check: bool,

    /// Search the history for earlier posts of the same song
    pub enable_repost_check: bool,

    /// Report songs the music catalogue does not know
    pub enable_catalog_check: bool,
}

impl ModerationConfig {
    /// Creates a new configuration with production defaults
    pub fn new() -> Self {
        Self {
            // Six months
            lookback_days: 180,
            max_repost_results: 100,
            enable_typo_correction: true,
            enable_self_promotion_check: true,
            enable_repost_check: true,
            enable_catalog_check: true,
        }
    }

    /// Read `RIFFWARDEN_*` overrides on top of the defaults after loading `.env`
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(days) = lookup("RIFFWARDEN_LOOKBACK_DAYS") {
            config.lookback_days = parse_var("RIFFWARDEN_LOOKBACK_DAYS", &days)?;
        }
        if let Some(max) = lookup("RIFFWARDEN_MAX_REPOST_RESULTS") {
            config.max_repost_results = parse_var("RIFFWARDEN_MAX_REPOST_RESULTS", &max)?;
        }
        if let Some(flag) = lookup("RIFFWARDEN_TYPO_CORRECTION") {
            config.enable_typo_correction = parse_flag("RIFFWARDEN_TYPO_CORRECTION", &flag)?;
        }
        if let Some(flag) = lookup("RIFFWARDEN_SELF_PROMOTION_CHECK") {
            config.enable_self_promotion_check =
                parse_flag("RIFFWARDEN_SELF_PROMOTION_CHECK", &flag)?;
        }
        if let Some(flag) = lookup("RIFFWARDEN_REPOST_CHECK") {
            config.enable_repost_check = parse_flag("RIFFWARDEN_REPOST_CHECK", &flag)?;
        }
        if let Some(flag) = lookup("RIFFWARDEN_CATALOG_CHECK") {
            config.enable_catalog_check = parse_flag("RIFFWARDEN_CATALOG_CHECK", &flag)?;
        }

        config.validate().map_err(AppError::ValidationError)?;
        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.lookback_days <= 0 {
            return Err(format!(
                "lookback_days must be > 0, got {}",
                self.lookback_days
            ));
        }

        // chrono panics on durations this large
        if self.lookback_days > 36_500 {
            return Err(format!(
                "lookback_days must be at most 36500, got {}",
                self.lookback_days
            ));
        }

        if self.max_repost_results == 0 {
            return Err("max_repost_results must be > 0".to_string());
        }

        Ok(())
    }

    pub fn lookback(&self) -> Duration {
        Duration::days(self.lookback_days)
    }
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> AppResult<T> {
    value.trim().parse().map_err(|_| {
        AppError::ValidationError(format!("{} has an invalid value: {}", key, value))
    })
}

fn parse_flag(key: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::ValidationError(format!(
            "{} must be a boolean, got {}",
            key, value
        ))),
    }
}

/// Builder for ModerationConfig to make test setup easier
#[derive(Default)]
pub struct ModerationConfigBuilder {
    config: ModerationConfig,
}

impl ModerationConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ModerationConfig::new(),
        }
    }

    pub fn lookback_days(mut self, days: i64) -> Self {
        self.config.lookback_days = days;
        self
    }

    pub fn max_repost_results(mut self, max: usize) -> Self {
        self.config.max_repost_results = max;
        self
    }

    pub fn enable_typo_correction(mut self, enabled: bool) -> Self {
        self.config.enable_typo_correction = enabled;
        self
    }

    pub fn enable_self_promotion_check(mut self, enabled: bool) -> Self {
        self.config.enable_self_promotion_check = enabled;
        self
    }

    pub fn enable_repost_check(mut self, enabled: bool) -> Self {
        self.config.enable_repost_check = enabled;
        self
    }

    pub fn enable_catalog_check(mut self, enabled: bool) -> Self {
        self.config.enable_catalog_check = enabled;
        self
    }

    pub fn build(self) -> Result<ModerationConfig, String> {
        self.config.validate()?;
        Ok(self.config)
    }
}
