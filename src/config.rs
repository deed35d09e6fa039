use std::time::Duration;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backend base URL. `None` runs the page in demo mode.
    pub api_base: Option<String>,
    pub request_timeout: Duration,
}

impl Config {
    /// Reads `STYLIST_API_BASE` and `STYLIST_REQUEST_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base = lookup("STYLIST_API_BASE").map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let request_timeout = match lookup("STYLIST_REQUEST_TIMEOUT_SECS") {
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    tracing::warn!("Invalid STYLIST_REQUEST_TIMEOUT_SECS '{}', using {}s", raw, DEFAULT_REQUEST_TIMEOUT_SECS);
                    DEFAULT_REQUEST_TIMEOUT_SECS
                }
            },
        };
        Self { api_base, request_timeout: Duration::from_secs(request_timeout) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn empty_env_is_demo_mode() {
        assert_eq!(config(&[]), Config { api_base: None, request_timeout: Duration::from_secs(30) });
        assert_eq!(config(&[("STYLIST_API_BASE", "  ")]).api_base, None);
    }

    #[test]
    fn reads_backend_and_timeout() {
        let cfg = config(&[("STYLIST_API_BASE", "http://localhost:8000/api"), ("STYLIST_REQUEST_TIMEOUT_SECS", "5")]);
        assert_eq!(cfg.api_base.as_deref(), Some("http://localhost:8000/api"));
        assert_eq!(cfg.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn bad_timeout_falls_back() {
        assert_eq!(config(&[("STYLIST_REQUEST_TIMEOUT_SECS", "soon")]).request_timeout, Duration::from_secs(30));
        assert_eq!(config(&[("STYLIST_REQUEST_TIMEOUT_SECS", "0")]).request_timeout, Duration::from_secs(30));
    }
}
