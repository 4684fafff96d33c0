// src/config/credentials.rs
// DOCUMENTATION: API key file loading
// PURPOSE: Read the Google Maps API key from a local JSON key file

use crate::errors::ScrapeError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk layout of the key file: `{"API-KEY": "..."}`
#[derive(Debug, Deserialize)]
struct CredentialsFile {
    #[serde(rename = "API-KEY")]
    api_key: String,
}

/// Load the API key from a JSON key file
/// DOCUMENTATION: Called once at startup; a missing file, malformed JSON
/// or an empty key are all fatal configuration errors
pub fn load_api_key(path: &Path) -> Result<String, ScrapeError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        ScrapeError::ConfigError(format!("Cannot read key file {}: {}", path.display(), e))
    })?;

    let credentials: CredentialsFile = serde_json::from_str(&raw).map_err(|e| {
        ScrapeError::ConfigError(format!("Malformed key file {}: {}", path.display(), e))
    })?;

    let key = credentials.api_key.trim().to_string();
    if key.is_empty() {
        return Err(ScrapeError::ConfigError(format!(
            "Key file {} contains an empty API-KEY",
            path.display()
        )));
    }

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "places-scraper-{}-{}.json",
            name,
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_valid_key() {
        let path = write_temp("valid", r#"{"API-KEY": "  abc123  "}"#);
        assert_eq!(load_api_key(&path).unwrap(), "abc123");
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_malformed_key_file() {
        let path = write_temp("malformed", r#"{"key": "abc123"}"#);
        assert!(matches!(load_api_key(&path), Err(ScrapeError::ConfigError(_))));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_empty_key() {
        let path = write_temp("empty", r#"{"API-KEY": ""}"#);
        assert!(matches!(load_api_key(&path), Err(ScrapeError::ConfigError(_))));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("places-scraper-does-not-exist.json");
        assert!(matches!(load_api_key(&path), Err(ScrapeError::ConfigError(_))));
    }
}
