//! Backend settings read from the process environment.

use crate::env_guard::EnvVarGuard;
use rstest::rstest;
use taskboard::config::{
    BackendConfig, ConfigError, DATABASE_URL_VAR, DEFAULT_MAX_POOL_SIZE, MAX_POOL_SIZE_VAR,
};

#[rstest]
fn reads_url_and_default_pool_size() -> Result<(), eyre::Report> {
    let _guard = EnvVarGuard::set_many(&[
        (DATABASE_URL_VAR, Some("postgres://board@localhost/tasks")),
        (MAX_POOL_SIZE_VAR, None),
    ]);

    let config = BackendConfig::from_env()?;

    eyre::ensure!(config.database_url() == "postgres://board@localhost/tasks");
    eyre::ensure!(config.max_pool_size() == DEFAULT_MAX_POOL_SIZE);
    Ok(())
}

#[rstest]
fn missing_url_is_reported() {
    let _guard = EnvVarGuard::set_many(&[(DATABASE_URL_VAR, None), (MAX_POOL_SIZE_VAR, None)]);

    let result = BackendConfig::from_env();

    assert!(matches!(result, Err(ConfigError::Missing(DATABASE_URL_VAR))));
}

#[rstest]
fn unparsable_pool_size_is_reported() {
    let _guard = EnvVarGuard::set_many(&[
        (DATABASE_URL_VAR, Some("postgres://board@localhost/tasks")),
        (MAX_POOL_SIZE_VAR, Some("lots")),
    ]);

    let result = BackendConfig::from_env();

    assert!(matches!(result, Err(ConfigError::Invalid { .. })));
}
