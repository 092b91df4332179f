//! Client configuration tests: environment overlay and YAML files

use gh_oauth::{ClientConfig, Credentials};
use serial_test::serial;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

fn clear_env() {
    unsafe {
        for name in [
            "GH_API_URL",
            "GH_CONNECT_TIMEOUT_SECS",
            "GH_TIMEOUT_SECS",
            "GH_USER",
            "GH_PASSWORD",
        ] {
            std::env::remove_var(name);
        }
    }
}

#[test]
#[serial]
fn test_from_env_without_overrides_is_default() {
    clear_env();
    assert_eq!(ClientConfig::from_env().unwrap(), ClientConfig::default());
}

#[test]
#[serial]
fn test_from_env_applies_overrides() {
    clear_env();
    unsafe {
        std::env::set_var("GH_API_URL", "https://ghe.example.com/api/v3");
        std::env::set_var("GH_CONNECT_TIMEOUT_SECS", "3");
        std::env::set_var("GH_TIMEOUT_SECS", "15");
    }

    let config = ClientConfig::from_env();
    clear_env();

    let config = config.unwrap();
    assert_eq!(config.api_url, "https://ghe.example.com/api/v3");
    assert_eq!(config.connect_timeout, Duration::from_secs(3));
    assert_eq!(config.timeout, Duration::from_secs(15));
}

#[test]
#[serial]
fn test_from_env_rejects_malformed_timeout() {
    clear_env();
    unsafe {
        std::env::set_var("GH_TIMEOUT_SECS", "soon");
    }

    let result = ClientConfig::from_env();
    clear_env();

    let err = result.unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("GH_TIMEOUT_SECS"));
}

#[test]
#[serial]
fn test_credentials_from_env() {
    clear_env();
    assert!(Credentials::from_env().unwrap_err().is_configuration());

    unsafe {
        std::env::set_var("GH_USER", "octocat");
    }
    let err = Credentials::from_env().unwrap_err();
    assert!(err.to_string().contains("GH_PASSWORD"));

    unsafe {
        std::env::set_var("GH_PASSWORD", "");
    }
    assert!(Credentials::from_env().is_err());

    unsafe {
        std::env::set_var("GH_PASSWORD", "secret");
    }
    let credentials = Credentials::from_env();
    clear_env();

    assert_eq!(credentials.unwrap().username(), "octocat");
}

#[test]
fn test_load_yaml_overrides_some_fields() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("gh-oauth.yaml");
    fs::write(
        &path,
        "api_url: https://ghe.example.com/api/v3\ntimeout_secs: 60\nuser_agent: release-bot\n",
    )
    .expect("Failed to write config");

    let config = ClientConfig::load(&path).unwrap();
    assert_eq!(config.api_url, "https://ghe.example.com/api/v3");
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.connect_timeout, Duration::from_secs(10));
    assert_eq!(config.user_agent, "release-bot");
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let err = ClientConfig::load(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, gh_oauth::Error::Io(_)));
}

#[test]
fn test_load_invalid_yaml_is_yaml_error() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "timeout_secs: [unclosed").expect("Failed to write config");

    let err = ClientConfig::load(&path).unwrap_err();
    assert!(matches!(err, gh_oauth::Error::Yaml(_)));
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("zero.yaml");
    fs::write(&path, "connect_timeout_secs: 0\n").expect("Failed to write config");

    let err = ClientConfig::load(&path).unwrap_err();
    assert!(err.is_configuration());
}
