//! Config environment variable tests
//!
//! Tests use #[serial] because they share process-wide environment variables.

use serial_test::serial;
use std::env;
use triage::config::{LogFormat, TriageConfig};
use triage::error::ConfigError;
use triage::session::TransitionPolicy;

const KEYS: [&str; 5] = [
    "TRIAGE_HISTORY_DIR",
    "TRIAGE_HISTORY_NAMESPACE",
    "TRIAGE_TRANSITION_POLICY",
    "LOG_LEVEL",
    "LOG_FORMAT",
];

fn clear_env() {
    for key in KEYS {
        // SAFETY: tests touching the environment are serialized
        unsafe { env::remove_var(key) };
    }
}

fn set_env(key: &str, value: &str) {
    // SAFETY: tests touching the environment are serialized
    unsafe { env::set_var(key, value) };
}

#[test]
#[serial]
fn test_config_defaults() {
    clear_env();

    let config = TriageConfig::from_env().unwrap();

    assert_eq!(config.history.dir.to_str().unwrap(), "./data");
    assert_eq!(config.history.namespace, "healthbridge_symptom_history");
    assert_eq!(config.transition_policy, TransitionPolicy::Guarded);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Pretty);
}

#[test]
#[serial]
fn test_config_overrides() {
    clear_env();
    set_env("TRIAGE_HISTORY_DIR", "/var/lib/triage");
    set_env("TRIAGE_HISTORY_NAMESPACE", "clinic_a_history");
    set_env("TRIAGE_TRANSITION_POLICY", "Lenient");
    set_env("LOG_LEVEL", "debug");
    set_env("LOG_FORMAT", "JSON");

    let config = TriageConfig::from_env().unwrap();

    assert_eq!(config.history.dir.to_str().unwrap(), "/var/lib/triage");
    assert_eq!(config.history.namespace, "clinic_a_history");
    assert_eq!(config.transition_policy, TransitionPolicy::Lenient);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);

    clear_env();
}

#[test]
#[serial]
fn test_config_rejects_unknown_policy() {
    clear_env();
    set_env("TRIAGE_TRANSITION_POLICY", "strict");

    let err = TriageConfig::from_env().unwrap_err();

    assert_eq!(
        err,
        ConfigError::InvalidValue {
            key: "TRIAGE_TRANSITION_POLICY",
            value: "strict".to_string(),
            message: "expected 'guarded' or 'lenient'",
        }
    );
    clear_env();
}

#[test]
#[serial]
fn test_default_matches_unset_environment() {
    clear_env();

    let from_env = TriageConfig::from_env().unwrap();
    let default = TriageConfig::default();

    assert_eq!(from_env.history.dir, default.history.dir);
    assert_eq!(from_env.history.namespace, default.history.namespace);
    assert_eq!(from_env.transition_policy, default.transition_policy);
}
