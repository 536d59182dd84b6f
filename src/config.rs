use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

pub const DEMO_KEY: &str = "DEMO_KEY";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub timeout: Duration,
    pub temperature: f32,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: DEMO_KEY.into(),
            api_base: DEFAULT_API_BASE.into(),
            model: DEFAULT_MODEL.into(),
            timeout: Duration::from_secs(60),
            temperature: 0.4,
            port: 8080,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_key: lookup("GEMINI_API_KEY").filter(|k| !k.is_empty()).unwrap_or(defaults.api_key),
            api_base: lookup("GEMINI_API_BASE")
                .map(|b| b.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            model: lookup("GEMINI_MODEL").unwrap_or(defaults.model),
            timeout: parsed(&lookup, "GEMINI_TIMEOUT_SECS").map(Duration::from_secs).unwrap_or(defaults.timeout),
            temperature: parsed(&lookup, "GEMINI_TEMPERATURE").unwrap_or(defaults.temperature),
            port: parsed(&lookup, "PORT").unwrap_or(defaults.port),
        }
    }

    pub fn is_demo(&self) -> bool {
        self.api_key == DEMO_KEY
    }

    /// First few characters of the key, safe to log.
    pub fn key_preview(&self) -> &str {
        let end = self.api_key.char_indices().nth(6).map_or(self.api_key.len(), |(i, _)| i);
        &self.api_key[..end]
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("Ignoring unparsable {}={:?}, using default", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = config_from(&[]);
        assert!(config.is_demo());
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = config_from(&[
            ("GEMINI_API_KEY", "abcdefghijkl"),
            ("GEMINI_API_BASE", "http://localhost:9000/v1beta/"),
            ("GEMINI_MODEL", "gemini-1.5-pro"),
            ("GEMINI_TIMEOUT_SECS", "15"),
            ("PORT", "3000"),
        ]);
        assert!(!config.is_demo());
        assert_eq!(config.api_base, "http://localhost:9000/v1beta");
        assert_eq!(config.model, "gemini-1.5-pro");
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(config.port, 3000);
        assert_eq!(config.key_preview(), "abcdef");
    }

    #[test]
    fn bad_numbers_fall_back() {
        let config = config_from(&[("PORT", "eighty"), ("GEMINI_TIMEOUT_SECS", "-1")]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn empty_key_means_demo() {
        assert!(config_from(&[("GEMINI_API_KEY", "")]).is_demo());
    }
}
