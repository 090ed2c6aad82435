//! Tests for environment detection and database path resolution
//!
//! Note: Uses serial_test to prevent ENV variable race conditions. Tests
//! that manipulate BISTRO_* or WEBSITE_HOSTNAME are marked with #[serial]
//! so they run sequentially, not in parallel.

use bistro_common::config::{resolve_database_path, Environment};
use serial_test::serial;
use std::env;
use std::path::{Path, PathBuf};

fn clear_env() {
    env::remove_var("BISTRO_ENV");
    env::remove_var("BISTRO_DATABASE");
    env::remove_var("WEBSITE_HOSTNAME");
}

#[test]
#[serial]
fn test_detect_development_by_default() {
    clear_env();

    assert_eq!(Environment::detect(), Environment::Development);
    assert_eq!(Environment::detect().as_str(), "development");
}

#[test]
#[serial]
fn test_detect_production_from_bistro_env() {
    clear_env();
    env::set_var("BISTRO_ENV", "production");

    assert_eq!(Environment::detect(), Environment::Production);

    clear_env();
}

#[test]
#[serial]
fn test_bistro_env_other_values_select_development() {
    clear_env();
    env::set_var("BISTRO_ENV", "staging");
    // WEBSITE_HOSTNAME set, but the explicit BISTRO_ENV wins
    env::set_var("WEBSITE_HOSTNAME", "bistro.example.net");

    assert_eq!(Environment::detect(), Environment::Development);

    clear_env();
}

#[test]
#[serial]
fn test_detect_production_from_website_hostname() {
    clear_env();
    env::set_var("WEBSITE_HOSTNAME", "bistro.example.net");

    assert_eq!(Environment::detect(), Environment::Production);

    clear_env();
}

#[test]
#[serial]
fn test_cli_argument_takes_precedence() {
    clear_env();
    env::set_var("BISTRO_DATABASE", "/tmp/bistro-from-env.db");

    let resolved =
        resolve_database_path(Some(Path::new("/tmp/bistro-from-cli.db")), Environment::Development)
            .unwrap();
    assert_eq!(resolved, PathBuf::from("/tmp/bistro-from-cli.db"));

    clear_env();
}

#[test]
#[serial]
fn test_env_var_used_when_no_cli_argument() {
    clear_env();
    env::set_var("BISTRO_DATABASE", "/tmp/bistro-from-env.db");

    let resolved = resolve_database_path(None, Environment::Development).unwrap();
    assert_eq!(resolved, PathBuf::from("/tmp/bistro-from-env.db"));

    clear_env();
}

#[test]
#[serial]
fn test_development_default_path() {
    clear_env();

    let resolved = resolve_database_path(None, Environment::Development).unwrap();
    assert_eq!(resolved, PathBuf::from("bistro.db"));
}

#[test]
#[serial]
fn test_production_default_path() {
    clear_env();

    let resolved = resolve_database_path(None, Environment::Production).unwrap();

    // Exact prefix is platform-dependent; the file always lands in a
    // bistro data directory
    assert!(resolved.ends_with("bistro/bistro.db"), "got {:?}", resolved);
}
