//! Tests for server configuration resolution priority
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate PORT or HOST are marked with #[serial]
//! to ensure they run sequentially, not in parallel.

use pipeline_common::config::{
    ConfigOverrides, ServerConfig, ServerConfigResolver, DEFAULT_PORT, HOST_ENV, PORT_ENV,
};
use pipeline_common::Error;
use serial_test::serial;
use std::env;
use std::io::Write;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};

fn clear_env() {
    env::remove_var(PORT_ENV);
    env::remove_var(HOST_ENV);
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Should create temp file");
    file.write_all(content.as_bytes())
        .expect("Should write config");
    file
}

/// Resolver whose default config file lives in `dir` (not the user's config dir)
fn isolated(overrides: ConfigOverrides, dir: &TempDir) -> ServerConfigResolver {
    ServerConfigResolver::new(overrides)
        .with_default_path(Some(dir.path().join("pipeline-demo").join("config.toml")))
}

fn write_default_config(dir: &TempDir, content: &str) {
    let config_dir = dir.path().join("pipeline-demo");
    std::fs::create_dir_all(&config_dir).expect("Should create config dir");
    std::fs::write(config_dir.join("config.toml"), content).expect("Should write config");
}

fn with_file(file: &NamedTempFile) -> ConfigOverrides {
    ConfigOverrides {
        config_file: Some(file.path().to_path_buf()),
        ..Default::default()
    }
}

#[test]
#[serial]
fn test_no_overrides_uses_defaults() {
    clear_env();
    let dir = TempDir::new().unwrap();

    let config = isolated(ConfigOverrides::default(), &dir).resolve().unwrap();

    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
#[serial]
fn test_env_port_overrides_default() {
    clear_env();
    let dir = TempDir::new().unwrap();
    env::set_var(PORT_ENV, "8081");

    let config = isolated(ConfigOverrides::default(), &dir).resolve().unwrap();
    assert_eq!(config.port, 8081);

    clear_env();
}

#[test]
#[serial]
fn test_env_host_overrides_default() {
    clear_env();
    let dir = TempDir::new().unwrap();
    env::set_var(HOST_ENV, "127.0.0.1");

    let config = isolated(ConfigOverrides::default(), &dir).resolve().unwrap();
    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(config.port, DEFAULT_PORT);

    clear_env();
}

#[test]
#[serial]
fn test_blank_env_is_ignored() {
    clear_env();
    let dir = TempDir::new().unwrap();
    env::set_var(PORT_ENV, "  ");

    let config = isolated(ConfigOverrides::default(), &dir).resolve().unwrap();
    assert_eq!(config.port, DEFAULT_PORT);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_env_port_is_config_error() {
    clear_env();
    let dir = TempDir::new().unwrap();
    env::set_var(PORT_ENV, "not-a-port");

    let err = isolated(ConfigOverrides::default(), &dir).resolve().unwrap_err();
    match err {
        Error::Config(msg) => assert!(msg.contains("PORT"), "unexpected message: {}", msg),
        other => panic!("expected Config error, got {:?}", other),
    }

    clear_env();
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    clear_env();
    let dir = TempDir::new().unwrap();
    env::set_var(PORT_ENV, "8081");

    let resolver = isolated(
        ConfigOverrides {
            port: Some(9000),
            ..Default::default()
        },
        &dir,
    );
    assert_eq!(resolver.resolve().unwrap().port, 9000);

    clear_env();
}

#[test]
#[serial]
fn test_toml_file_supplies_values() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let file = write_config("host = \"127.0.0.1\"\nport = 4100\n");

    let config = isolated(with_file(&file), &dir).resolve().unwrap();

    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(config.port, 4100);
}

#[test]
#[serial]
fn test_env_overrides_toml_file() {
    clear_env();
    let dir = TempDir::new().unwrap();
    env::set_var(PORT_ENV, "8082");
    let file = write_config("port = 4100\n");

    let config = isolated(with_file(&file), &dir).resolve().unwrap();
    assert_eq!(config.port, 8082);

    clear_env();
}

#[test]
#[serial]
fn test_partial_toml_falls_back_to_defaults() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let file = write_config("port = 4100\n");

    let config = isolated(with_file(&file), &dir).resolve().unwrap();
    assert_eq!(config.port, 4100);
    assert_eq!(config.host, ServerConfig::default().host);
}

#[test]
#[serial]
fn test_missing_explicit_config_file_is_error() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let resolver = isolated(
        ConfigOverrides {
            config_file: Some(PathBuf::from("/nonexistent/pipeline-demo/config.toml")),
            ..Default::default()
        },
        &dir,
    );

    assert!(matches!(resolver.resolve(), Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_malformed_config_file_is_parse_error() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let file = write_config("port = [not toml");

    let result = isolated(with_file(&file), &dir).resolve();
    assert!(matches!(result, Err(Error::TomlParse(_))));
}

#[test]
#[serial]
fn test_default_config_file_is_loaded() {
    clear_env();
    let dir = TempDir::new().unwrap();
    write_default_config(&dir, "host = \"127.0.0.1\"\nport = 5555\n");

    let config = isolated(ConfigOverrides::default(), &dir).resolve().unwrap();

    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(config.port, 5555);
}

#[test]
#[serial]
fn test_missing_default_config_file_is_ignored() {
    clear_env();
    let dir = TempDir::new().unwrap();

    let resolver = isolated(ConfigOverrides::default(), &dir);
    assert_eq!(resolver.resolve().unwrap(), ServerConfig::default());
}

#[test]
#[serial]
fn test_explicit_config_file_wins_over_default_file() {
    clear_env();
    let dir = TempDir::new().unwrap();
    write_default_config(&dir, "port = 5555\n");
    let file = write_config("port = 4100\n");

    let config = isolated(with_file(&file), &dir).resolve().unwrap();
    assert_eq!(config.port, 4100);
}

#[test]
#[serial]
fn test_env_overrides_default_config_file() {
    clear_env();
    env::set_var(PORT_ENV, "8083");
    let dir = TempDir::new().unwrap();
    write_default_config(&dir, "port = 5555\n");

    let config = isolated(ConfigOverrides::default(), &dir).resolve().unwrap();
    assert_eq!(config.port, 8083);

    clear_env();
}
