use std::env;
use std::time::Duration;

use crate::modules::integrations::{google_books, openlibrary};

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub profile: String,
    pub google_books_url: String,
    pub google_books_api_key: Option<String>,
    pub openlibrary_url: String,
    pub provider_timeout_secs: u64,
}

fn database_url_for(profile: &str) -> String {
    if profile == "default" {
        "sqlite://librarium.db?mode=rwc".to_string()
    } else {
        format!("sqlite://librarium_{}.db?mode=rwc", profile)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: database_url_for("default"),
            port: 8000,
            cors_allowed_origins: Vec::new(),
            profile: "default".to_string(),
            google_books_url: google_books::DEFAULT_BASE_URL.to_string(),
            google_books_api_key: None,
            openlibrary_url: openlibrary::DEFAULT_BASE_URL.to_string(),
            provider_timeout_secs: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let profile = env::var("PROFILE").unwrap_or_else(|_| "default".to_string());

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| database_url_for(&profile));

        Self {
            database_url,
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            profile,
            google_books_url: env::var("GOOGLE_BOOKS_URL").unwrap_or(defaults.google_books_url),
            google_books_api_key: env::var("GOOGLE_BOOKS_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            openlibrary_url: env::var("OPENLIBRARY_URL").unwrap_or(defaults.openlibrary_url),
            provider_timeout_secs: env::var("PROVIDER_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.provider_timeout_secs),
        }
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 8] = [
        "PROFILE",
        "DATABASE_URL",
        "PORT",
        "CORS_ALLOWED_ORIGINS",
        "GOOGLE_BOOKS_URL",
        "GOOGLE_BOOKS_API_KEY",
        "OPENLIBRARY_URL",
        "PROVIDER_TIMEOUT_SECS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env();

        assert_eq!(config.database_url, "sqlite://librarium.db?mode=rwc");
        assert_eq!(config.port, 8000);
        assert!(config.cors_allowed_origins.is_empty());
        assert_eq!(config.google_books_url, google_books::DEFAULT_BASE_URL);
        assert_eq!(config.google_books_api_key, None);
        assert_eq!(config.openlibrary_url, openlibrary::DEFAULT_BASE_URL);
        assert_eq!(config.provider_timeout(), Duration::from_secs(10));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        env::set_var("PROFILE", "work");
        env::set_var("PORT", "not-a-port");
        env::set_var("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test,");
        env::set_var("GOOGLE_BOOKS_API_KEY", "  ");
        env::set_var("PROVIDER_TIMEOUT_SECS", "3");

        let config = Config::from_env();
        clear_env();

        assert_eq!(config.profile, "work");
        assert_eq!(config.database_url, "sqlite://librarium_work.db?mode=rwc");
        assert_eq!(config.port, 8000);
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert_eq!(config.google_books_api_key, None);
        assert_eq!(config.provider_timeout_secs, 3);
    }
}
