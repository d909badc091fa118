use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

const ENV_PREFIX: &str = "MATCHING_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read environment: {0}")]
    Env(#[from] envy::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Assembled from one `envy` pass per section.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub service: ServiceConfig,
    pub ranking: RankingConfig,
    pub jobs: JobConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    /// JSON array of profiles to seed the in-memory store with
    #[serde(default)]
    pub snapshot_path: Option<String>,
    /// Log dashboard and suggestions for this profile after startup
    #[serde(default)]
    pub requester_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RankingConfig {
    #[serde(default = "default_suggestion_min_score")]
    pub suggestion_min_score: u8,
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
    #[serde(default)]
    pub dashboard_min_score: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobConfig {
    #[serde(default = "default_refresh_batch_size")]
    pub refresh_batch_size: usize,
}

fn default_service_name() -> String {
    "matching-service".to_string()
}

fn default_suggestion_min_score() -> u8 {
    30
}

fn default_suggestion_limit() -> usize {
    5
}

fn default_refresh_batch_size() -> usize {
    100
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            snapshot_path: None,
            requester_id: None,
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            suggestion_min_score: default_suggestion_min_score(),
            suggestion_limit: default_suggestion_limit(),
            dashboard_min_score: 0,
        }
    }
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            refresh_batch_size: default_refresh_batch_size(),
        }
    }
}

impl Config {
    /// Read `MATCHING_*` variables, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Config {
            service: envy::prefixed(ENV_PREFIX).from_env()?,
            ranking: envy::prefixed(ENV_PREFIX).from_env()?,
            jobs: envy::prefixed(ENV_PREFIX).from_env()?,
        };
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ranking.suggestion_min_score > 100 {
            return Err(ConfigError::Invalid(format!(
                "suggestion_min_score must be <= 100, got {}",
                self.ranking.suggestion_min_score
            )));
        }
        if self.ranking.dashboard_min_score > 100 {
            return Err(ConfigError::Invalid(format!(
                "dashboard_min_score must be <= 100, got {}",
                self.ranking.dashboard_min_score
            )));
        }
        if self.ranking.suggestion_limit == 0 {
            return Err(ConfigError::Invalid(
                "suggestion_limit must be positive".to_string(),
            ));
        }
        if self.jobs.refresh_batch_size == 0 {
            return Err(ConfigError::Invalid(
                "refresh_batch_size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 6] = [
        "MATCHING_SERVICE_NAME",
        "MATCHING_SUGGESTION_MIN_SCORE",
        "MATCHING_SUGGESTION_LIMIT",
        "MATCHING_DASHBOARD_MIN_SCORE",
        "MATCHING_REFRESH_BATCH_SIZE",
        "MATCHING_REQUESTER_ID",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();

        assert_eq!(config.service.service_name, "matching-service");
        assert_eq!(config.ranking, RankingConfig::default());
        assert_eq!(config.ranking.suggestion_min_score, 30);
        assert_eq!(config.ranking.suggestion_limit, 5);
        assert_eq!(config.jobs.refresh_batch_size, 100);
        assert!(config.service.requester_id.is_none());
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        let requester = Uuid::new_v4();
        env::set_var("MATCHING_SUGGESTION_MIN_SCORE", "45");
        env::set_var("MATCHING_SUGGESTION_LIMIT", "10");
        env::set_var("MATCHING_REQUESTER_ID", requester.to_string());

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.ranking.suggestion_min_score, 45);
        assert_eq!(config.ranking.suggestion_limit, 10);
        assert_eq!(config.service.requester_id, Some(requester));
    }

    #[test]
    #[serial]
    fn test_rejects_bad_values() {
        clear_env();
        env::set_var("MATCHING_SUGGESTION_MIN_SCORE", "lots");
        assert!(matches!(Config::from_env(), Err(ConfigError::Env(_))));

        env::set_var("MATCHING_SUGGESTION_MIN_SCORE", "120");
        assert!(matches!(Config::from_env(), Err(ConfigError::Invalid(_))));
        clear_env();
    }
}
