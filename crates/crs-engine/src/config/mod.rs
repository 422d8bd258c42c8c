use std::env;
use std::fmt;

use chrono::NaiveDate;

use crate::scoring::ScoringConfig;

/// Distinguishes runtime behavior for different stages of deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the calculator.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub assessment: AssessmentConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let as_of = match env::var("CRS_AS_OF") {
            Ok(raw) if !raw.trim().is_empty() => Some(parse_as_of(&raw)?),
            _ => None,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            assessment: AssessmentConfig { as_of },
        })
    }
}

/// Controls for the scoring engine.
#[derive(Debug, Clone, Default)]
pub struct AssessmentConfig {
    /// Pinned assessment date; `None` means the caller's current date.
    pub as_of: Option<NaiveDate>,
}

impl AssessmentConfig {
    pub fn scoring_config(&self, today: NaiveDate) -> ScoringConfig {
        ScoringConfig::new(self.as_of.unwrap_or(today))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

pub fn parse_as_of(raw: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|source| {
        ConfigError::InvalidAsOfDate {
            value: raw.to_string(),
            source,
        }
    })
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidAsOfDate {
        value: String,
        source: chrono::ParseError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidAsOfDate { value, .. } => {
                write!(f, "CRS_AS_OF must be a YYYY-MM-DD date, got '{}'", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidAsOfDate { source, .. } => Some(source),
        }
    }
}
