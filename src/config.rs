use std::env;

use anyhow::{Context, Result};

use crate::source::wikipedia::DEFAULT_API_URL;

pub const DEFAULT_USER_AGENT: &str = "wordscope/0.1 (comparative text analysis)";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TOP_N: usize = 15;
pub const DEFAULT_BAR_WIDTH: usize = 40;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Command-line
/// flags take precedence over anything set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// MediaWiki API endpoint used by the Wikipedia fetcher
    pub wiki_api_url: String,
    /// User agent sent with every HTTP request (Wikimedia asks for a descriptive one)
    pub user_agent: String,
    /// Per-request HTTP timeout in seconds
    pub timeout_secs: u64,
    /// How many top words to show per corpus
    pub top_n: usize,
    /// Width in characters of the longest bar in the chart
    pub bar_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wiki_api_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            top_n: DEFAULT_TOP_N,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Every variable is optional. Numeric values that fail to parse are an
    /// error rather than silently falling back to the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            wiki_api_url: lookup("WORDSCOPE_WIKI_API_URL").unwrap_or(defaults.wiki_api_url),
            user_agent: lookup("WORDSCOPE_USER_AGENT").unwrap_or(defaults.user_agent),
            timeout_secs: parse_var(&lookup, "WORDSCOPE_TIMEOUT_SECS", defaults.timeout_secs)?,
            top_n: parse_var(&lookup, "WORDSCOPE_TOP_N", defaults.top_n)?,
            bar_width: parse_var(&lookup, "WORDSCOPE_BAR_WIDTH", defaults.bar_width)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the output meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            anyhow::bail!("WORDSCOPE_TOP_N must be at least 1");
        }
        if self.bar_width == 0 {
            anyhow::bail!("WORDSCOPE_BAR_WIDTH must be at least 1");
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("WORDSCOPE_TIMEOUT_SECS must be at least 1");
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} is not a valid number: {raw:?}")),
        None => Ok(default),
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
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.top_n, 15);
        assert_eq!(config.bar_width, 40);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("WORDSCOPE_TOP_N", "5"),
            ("WORDSCOPE_BAR_WIDTH", " 20 "),
            ("WORDSCOPE_WIKI_API_URL", "http://localhost:8080/w/api.php"),
        ]))
        .unwrap();
        assert_eq!(config.top_n, 5);
        assert_eq!(config.bar_width, 20);
        assert_eq!(config.wiki_api_url, "http://localhost:8080/w/api.php");
    }

    #[test]
    fn test_bad_number_is_error() {
        let err = Config::from_lookup(lookup_from(&[("WORDSCOPE_TOP_N", "lots")])).unwrap_err();
        assert!(err.to_string().contains("WORDSCOPE_TOP_N"));
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(Config::from_lookup(lookup_from(&[("WORDSCOPE_BAR_WIDTH", "0")])).is_err());
    }
}
