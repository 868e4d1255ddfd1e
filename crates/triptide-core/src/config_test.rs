use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "TRIPTIDE_ENV"));
}

#[test]
fn build_app_config_defaults_from_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.base_url, "http://127.0.0.1:5000");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(
        cfg.storage_path,
        std::path::PathBuf::from("./triptide_storage.json")
    );
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "triptide/0.1 (travel-discovery)");
    assert_eq!(cfg.max_retries, 0);
    assert_eq!(cfg.retry_backoff_base_ms, 500);
}

#[test]
fn base_url_trailing_slash_is_stripped() {
    let mut map = HashMap::new();
    map.insert("TRIPTIDE_BASE_URL", "https://triptide.example.com/");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.base_url, "https://triptide.example.com");
}

#[test]
fn base_url_without_scheme_is_rejected() {
    let mut map = HashMap::new();
    map.insert("TRIPTIDE_BASE_URL", "triptide.example.com");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TRIPTIDE_BASE_URL"),
        "expected InvalidEnvVar(TRIPTIDE_BASE_URL), got: {result:?}"
    );
}

#[test]
fn base_url_with_empty_host_is_rejected() {
    let mut map = HashMap::new();
    map.insert("TRIPTIDE_BASE_URL", "http://");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn request_timeout_secs_override() {
    let mut map = HashMap::new();
    map.insert("TRIPTIDE_REQUEST_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 5);
}

#[test]
fn request_timeout_secs_invalid() {
    let mut map = HashMap::new();
    map.insert("TRIPTIDE_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TRIPTIDE_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(TRIPTIDE_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn max_retries_override() {
    let mut map = HashMap::new();
    map.insert("TRIPTIDE_MAX_RETRIES", "2");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.max_retries, 2);
}

#[test]
fn max_retries_invalid() {
    let mut map = HashMap::new();
    map.insert("TRIPTIDE_MAX_RETRIES", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TRIPTIDE_MAX_RETRIES"),
        "expected InvalidEnvVar(TRIPTIDE_MAX_RETRIES), got: {result:?}"
    );
}

#[test]
fn retry_backoff_base_ms_invalid() {
    let mut map = HashMap::new();
    map.insert("TRIPTIDE_RETRY_BACKOFF_BASE_MS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TRIPTIDE_RETRY_BACKOFF_BASE_MS"),
        "expected InvalidEnvVar(TRIPTIDE_RETRY_BACKOFF_BASE_MS), got: {result:?}"
    );
}

#[test]
fn storage_path_and_user_agent_overrides() {
    let mut map = HashMap::new();
    map.insert("TRIPTIDE_STORAGE_PATH", "/tmp/tt.json");
    map.insert("TRIPTIDE_USER_AGENT", "custom-agent/2.0");
    map.insert("TRIPTIDE_ENV", "production");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.storage_path, std::path::PathBuf::from("/tmp/tt.json"));
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
    assert_eq!(cfg.env, Environment::Production);
}
