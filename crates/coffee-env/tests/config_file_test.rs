//! Loading configuration documents from disk

use coffee_env::{ConfigFormat, ConfigurationError, EnvironmentConfig, ValidationMode};
use serial_test::serial;
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

const LOCAL_TOML: &str = r#"
production = false
apiServerUrl = "http://127.0.0.1:5000"

[auth0]
url = "dev-92ouxsny.us"
audience = "coffee"
clientId = "eNShERhGNp1pd0sibs6tvTweBUqgJh6z"
callbackURL = "https://127.0.0.1:8100"
"#;

fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_strict_parse_of_local_record() {
    let file = write_temp(".toml", LOCAL_TOML);
    let config = EnvironmentConfig::from_file(file.path()).unwrap();

    assert!(!config.is_production());
    assert!(config.check(ValidationMode::Structural).is_empty());
    assert!(config.validate_for_deployment().is_ok());
}

#[test]
fn test_strict_parse_rejects_partial_document() {
    let file = write_temp(".json", r#"{ "production": true }"#);
    let err = EnvironmentConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigurationError::Parse { .. }));
}

#[test]
fn test_strict_parse_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = EnvironmentConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigurationError::NotFound { .. }));
}

#[test]
fn test_json_and_toml_agree() {
    let toml_config = EnvironmentConfig::from_toml_str(LOCAL_TOML).unwrap();
    let json = toml_config.render(ConfigFormat::Json).unwrap();
    let file = write_temp(".json", &json);

    assert_eq!(EnvironmentConfig::from_file(file.path()).unwrap(), toml_config);
}

#[test]
#[serial]
fn test_layered_load_merges_partial_file() {
    let file = write_temp(
        ".toml",
        r#"
            production = true

            [auth0]
            callbackURL = "https://coffee.example"
        "#,
    );

    let config = EnvironmentConfig::load(Some(file.path())).unwrap();
    assert!(config.production);
    assert_eq!(config.auth0.callback_url, "https://coffee.example");
    assert_eq!(config.auth0.audience, EnvironmentConfig::default().auth0.audience);
}

#[test]
#[serial]
fn test_layered_load_validates() {
    let file = write_temp(".toml", r#"apiServerUrl = "127.0.0.1:5000""#);

    let err = EnvironmentConfig::load(Some(file.path())).unwrap_err();
    assert_eq!(err.issues().len(), 1);
    assert_eq!(err.issues()[0].field, "apiServerUrl");
}
