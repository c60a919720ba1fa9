use cricbuzz_api::client::{ApiConfig, DEFAULT_RAPIDAPI_HOST};
use log::LevelFilter;
use std::str::FromStr;

pub const ENV_API_KEY: &str = "CRICTUI_RAPIDAPI_KEY";
pub const ENV_API_HOST: &str = "CRICTUI_RAPIDAPI_HOST";
pub const ENV_API_URL: &str = "CRICTUI_API_URL";
pub const ENV_LOG_LEVEL: &str = "CRICTUI_LOG_LEVEL";

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub full_screen: bool,
    pub log_level: LevelFilter,
    pub api: ApiConfig,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            full_screen: false,
            log_level: LevelFilter::Info,
            api: ApiConfig::default(),
        }
    }
}

impl AppSettings {
    pub fn load() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from a variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let key = get(ENV_API_KEY).unwrap_or_default();
        let host = get(ENV_API_HOST).unwrap_or_else(|| DEFAULT_RAPIDAPI_HOST.to_string());
        let mut api = ApiConfig::new(key, host);
        if let Some(url) = get(ENV_API_URL) {
            api = api.with_base_url(url);
        }

        let log_level = get(ENV_LOG_LEVEL)
            .and_then(|level| LevelFilter::from_str(&level).ok())
            .unwrap_or(LevelFilter::Info);

        Self { full_screen: false, log_level, api }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> AppSettings {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppSettings::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let s = settings(&[]);
        assert_eq!(s.api.key, "");
        assert_eq!(s.api.host, DEFAULT_RAPIDAPI_HOST);
        assert_eq!(s.api.base_url, format!("https://{DEFAULT_RAPIDAPI_HOST}"));
        assert_eq!(s.log_level, LevelFilter::Info);
        assert!(!s.full_screen);
    }

    #[test]
    fn reads_key_host_and_url_override() {
        let s = settings(&[
            (ENV_API_KEY, " abc123 "),
            (ENV_API_HOST, "mirror.p.rapidapi.com"),
            (ENV_API_URL, "http://127.0.0.1:8080/"),
        ]);
        assert_eq!(s.api.key, "abc123");
        assert_eq!(s.api.host, "mirror.p.rapidapi.com");
        assert_eq!(s.api.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn blank_host_falls_back_to_default() {
        let s = settings(&[(ENV_API_HOST, "   ")]);
        assert_eq!(s.api.host, DEFAULT_RAPIDAPI_HOST);
    }

    #[test]
    fn parses_log_level_and_ignores_garbage() {
        assert_eq!(settings(&[(ENV_LOG_LEVEL, "debug")]).log_level, LevelFilter::Debug);
        assert_eq!(settings(&[(ENV_LOG_LEVEL, "loud")]).log_level, LevelFilter::Info);
    }
}
