// src/config.rs
use anyhow::{bail, Context};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Ten years. Longer lifetimes overflow cookie expiry arithmetic.
pub const MAX_COOKIE_MAX_AGE_DAYS: i64 = 3650;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub contact_email: String,
    pub static_dir: PathBuf,
    pub cookie_max_age_days: i64,
    pub page_cache_ttl_secs: u64,
    pub form_rate_limit: usize,
    pub form_rate_window_secs: u64,
    pub enable_hsts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            contact_email: "hello@jifunze.dev".to_string(),
            static_dir: PathBuf::from("static"),
            cookie_max_age_days: 365,
            page_cache_ttl_secs: 300,
            form_rate_limit: 20,
            form_rate_window_secs: 60,
            enable_hsts: false,
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {:?}", key, raw)),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let config = Self {
            host: env_or("HOST", defaults.host)?,
            port: env_or("PORT", defaults.port)?,
            contact_email: env_or("CONTACT_EMAIL", defaults.contact_email)?,
            static_dir: env_or("STATIC_DIR", defaults.static_dir)?,
            cookie_max_age_days: env_or("COOKIE_MAX_AGE_DAYS", defaults.cookie_max_age_days)?,
            page_cache_ttl_secs: env_or("PAGE_CACHE_TTL_SECS", defaults.page_cache_ttl_secs)?,
            form_rate_limit: env_or("FORM_RATE_LIMIT", defaults.form_rate_limit)?,
            form_rate_window_secs: env_or("FORM_RATE_WINDOW_SECS", defaults.form_rate_window_secs)?,
            enable_hsts: env_or("ENABLE_HSTS", defaults.enable_hsts)?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !validator::validate_email(self.contact_email.as_str()) {
            bail!("CONTACT_EMAIL is not a valid address: {}", self.contact_email);
        }
        if self.cookie_max_age_days <= 0 {
            bail!("COOKIE_MAX_AGE_DAYS must be positive");
        }
        if self.cookie_max_age_days > MAX_COOKIE_MAX_AGE_DAYS {
            bail!(
                "COOKIE_MAX_AGE_DAYS must be at most {}",
                MAX_COOKIE_MAX_AGE_DAYS
            );
        }
        Ok(())
    }

    pub fn server_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid server address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_cookie_lifetime_is_bounded() {
        let mut config = Config::default();
        config.cookie_max_age_days = 0;
        assert!(config.validate().is_err());

        config.cookie_max_age_days = MAX_COOKIE_MAX_AGE_DAYS;
        assert!(config.validate().is_ok());

        config.cookie_max_age_days = i64::MAX;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_contact_email_is_rejected() {
        let config = Config {
            contact_email: "not-an-address".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
