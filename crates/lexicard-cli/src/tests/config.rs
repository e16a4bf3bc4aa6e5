// crates/lexicard-cli/src/tests/config.rs
// ============================================================================
// Module: CLI Config Tests
// Description: Unit tests for configuration loading and validation guards.
// Purpose: Ensure config input handling is strict and fail-closed.
// Dependencies: lexicard-cli config module
// ============================================================================

//! ## Overview
//! Validates config loading guards (path, size, encoding), defaulting, and
//! field validation for `lexicard.toml`.

use std::io::Write;
use std::path::Path;

use lexicard_catalog::DuplicatePolicy;
use tempfile::NamedTempFile;

use crate::config::ConfigError;
use crate::config::LexicardConfig;

type TestResult = Result<(), String>;

fn assert_invalid(result: Result<LexicardConfig, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config load".to_string()),
    }
}

fn write_config(content: &str) -> Result<NamedTempFile, String> {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(content.as_bytes()).map_err(|err| err.to_string())?;
    Ok(file)
}

#[test]
fn load_applies_defaults_for_missing_fields() -> TestResult {
    let file = write_config("")?;
    let config = LexicardConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    if config.catalog_dir != "i18n" {
        return Err(format!("unexpected catalog_dir: {}", config.catalog_dir));
    }
    if config.default_locale != "en" {
        return Err(format!("unexpected default_locale: {}", config.default_locale));
    }
    if config.policy() != DuplicatePolicy::Reject {
        return Err("default duplicate policy must be reject".to_string());
    }
    Ok(())
}

#[test]
fn load_accepts_last_write_wins_policy() -> TestResult {
    let file = write_config("duplicate_policy = \"last_write_wins\"\n")?;
    let config = LexicardConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    if config.policy() != DuplicatePolicy::LastWriteWins {
        return Err("configured policy was not applied".to_string());
    }
    Ok(())
}

#[test]
fn load_rejects_unknown_policy() -> TestResult {
    let file = write_config("duplicate_policy = \"first_write_wins\"\n")?;
    assert_invalid(LexicardConfig::load(Some(file.path())), "config parse error")
}

#[test]
fn load_rejects_empty_catalog_dir() -> TestResult {
    let file = write_config("catalog_dir = \"\"\n")?;
    assert_invalid(LexicardConfig::load(Some(file.path())), "catalog_dir must be non-empty")
}

#[test]
fn load_rejects_invalid_default_locale() -> TestResult {
    let file = write_config("default_locale = \"123\"\n")?;
    assert_invalid(LexicardConfig::load(Some(file.path())), "is not a valid locale")
}

#[test]
fn load_rejects_path_too_long() -> TestResult {
    let long_path = "a".repeat(5_000);
    let path = Path::new(&long_path);
    assert_invalid(LexicardConfig::load(Some(path)), "config path exceeds max length")
}

#[test]
fn load_rejects_non_utf8_file() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(&[0xFF, 0xFE, 0xFF]).map_err(|err| err.to_string())?;
    assert_invalid(LexicardConfig::load(Some(file.path())), "config file must be utf-8")
}

#[test]
fn locale_returns_canonical_default() -> TestResult {
    let file = write_config("default_locale = \"EN-us\"\n")?;
    let config = LexicardConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    let locale = config.locale().map_err(|err| err.to_string())?;
    if locale.as_str() != "en" {
        return Err(format!("expected canonical `en`, got {locale}"));
    }
    Ok(())
}
