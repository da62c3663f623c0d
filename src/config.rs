use std::env;
use std::path::{Path, PathBuf};

use crate::error::{PollError, Result};

const EXPORT_DIR_VAR: &str = "POLL_EXPORT_DIR";
const DEFAULT_ANONYMOUS_VAR: &str = "POLL_DEFAULT_ANONYMOUS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory that relative export filenames are resolved against.
    pub export_dir: PathBuf,
    /// Answer used when the anonymity prompt is left blank. `None` keeps asking.
    pub default_anonymous: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("."),
            default_anonymous: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(dir) = lookup(EXPORT_DIR_VAR).filter(|dir| !dir.trim().is_empty()) {
            config.export_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup(DEFAULT_ANONYMOUS_VAR).filter(|raw| !raw.trim().is_empty()) {
            config.default_anonymous = Some(parse_bool(&raw).ok_or_else(|| {
                PollError::Config(format!("{} must be true or false, got '{}'", DEFAULT_ANONYMOUS_VAR, raw))
            })?);
        }

        Ok(config)
    }

    pub fn export_path(&self, filename: &str) -> PathBuf {
        let path = Path::new(filename);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.export_dir.join(path)
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Some(true),
        "false" | "0" | "no" | "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (EXPORT_DIR_VAR, "/tmp/polls"),
            (DEFAULT_ANONYMOUS_VAR, "No"),
        ]))
        .unwrap();
        assert_eq!(config.export_dir, PathBuf::from("/tmp/polls"));
        assert_eq!(config.default_anonymous, Some(false));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = Config::from_lookup(lookup_from(&[
            (EXPORT_DIR_VAR, ""),
            (DEFAULT_ANONYMOUS_VAR, "  "),
        ]))
        .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn rejects_malformed_bool() {
        let err = Config::from_lookup(lookup_from(&[(DEFAULT_ANONYMOUS_VAR, "maybe")])).unwrap_err();
        assert!(matches!(err, PollError::Config(_)));
    }

    #[test]
    fn relative_export_paths_use_export_dir() {
        let config = Config {
            export_dir: PathBuf::from("exports"),
            default_anonymous: None,
        };
        assert_eq!(config.export_path("lunch.csv"), PathBuf::from("exports/lunch.csv"));
    }
}
