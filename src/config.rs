use crate::error::ConfigError;
use crate::record::DEFAULT_NAMESPACE;
use crate::session::TransitionPolicy;
use std::env;
use std::path::PathBuf;

/// Engine configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct TriageConfig {
    pub history: HistoryConfig,
    pub logging: LoggingConfig,
    pub transition_policy: TransitionPolicy,
}

/// Where saved assessments are kept
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    pub dir: PathBuf,
    pub namespace: String,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl TriageConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let history = HistoryConfig {
            dir: PathBuf::from(
                env::var("TRIAGE_HISTORY_DIR").unwrap_or_else(|_| "./data".to_string()),
            ),
            namespace: env::var("TRIAGE_HISTORY_NAMESPACE")
                .unwrap_or_else(|_| DEFAULT_NAMESPACE.to_string()),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        let transition_policy = match env::var("TRIAGE_TRANSITION_POLICY") {
            Ok(value) => parse_policy(&value)?,
            Err(_) => TransitionPolicy::default(),
        };

        Ok(TriageConfig {
            history,
            logging,
            transition_policy,
        })
    }
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Pretty,
            },
            transition_policy: TransitionPolicy::default(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./data"),
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

fn parse_policy(value: &str) -> Result<TransitionPolicy, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "guarded" => Ok(TransitionPolicy::Guarded),
        "lenient" => Ok(TransitionPolicy::Lenient),
        _ => Err(ConfigError::InvalidValue {
            key: "TRIAGE_TRANSITION_POLICY",
            value: value.to_string(),
            message: "expected 'guarded' or 'lenient'",
        }),
    }
}
