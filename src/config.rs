//! Configuration management for the egress IP checker

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Label prefixing all log lines
    pub service_name: String,

    /// Seconds of suspension between cycles
    pub check_interval: Duration,

    /// Address-echo endpoint returning the caller's IP as plain text
    pub ip_check_url: String,

    /// Per-request timeout
    pub request_timeout: Duration,

    /// Client-wide session timeout
    pub session_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "service-unknown".to_string(),
            check_interval: Duration::from_secs(60),
            ip_check_url: "https://ipv4.icanhazip.com".to_string(),
            request_timeout: Duration::from_secs(15),
            session_timeout: Duration::from_secs(20),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// Unset or unparsable values keep their defaults; validation of the
    /// final values is `validate`'s job.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(service_name) = lookup("SERVICE_NAME") {
            config.service_name = service_name;
        }

        if let Some(interval) = lookup("CHECK_INTERVAL_SECONDS") {
            if let Ok(seconds) = interval.parse::<u64>() {
                config.check_interval = Duration::from_secs(seconds);
            }
        }

        if let Some(url) = lookup("IP_CHECK_URL") {
            config.ip_check_url = url;
        }

        if let Some(timeout) = lookup("REQUEST_TIMEOUT_SECONDS") {
            if let Ok(seconds) = timeout.parse::<u64>() {
                config.request_timeout = Duration::from_secs(seconds);
            }
        }

        if let Some(timeout) = lookup("SESSION_TIMEOUT_SECONDS") {
            if let Ok(seconds) = timeout.parse::<u64>() {
                config.session_timeout = Duration::from_secs(seconds);
            }
        }

        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.service_name.is_empty() {
            return Err("service_name cannot be empty".to_string());
        }

        if self.check_interval.is_zero() {
            return Err("check_interval must be greater than 0".to_string());
        }

        if let Err(e) = Url::parse(&self.ip_check_url) {
            return Err(format!("ip_check_url is not a valid URL: {}", e));
        }

        if self.request_timeout.is_zero() {
            return Err("request_timeout must be greater than 0".to_string());
        }

        if self.session_timeout < self.request_timeout {
            return Err("session_timeout must not be shorter than request_timeout".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);

        assert_eq!(config.service_name, "service-unknown");
        assert_eq!(config.check_interval, Duration::from_secs(60));
        assert_eq!(config.ip_check_url, "https://ipv4.icanhazip.com");
        assert_eq!(config.request_timeout, Duration::from_secs(15));
        assert_eq!(config.session_timeout, Duration::from_secs(20));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_values_from_environment() {
        let config = Config::from_lookup(lookup_from(&[
            ("SERVICE_NAME", "svc-a"),
            ("CHECK_INTERVAL_SECONDS", "5"),
            ("IP_CHECK_URL", "https://api.ipify.org"),
        ]));

        assert_eq!(config.service_name, "svc-a");
        assert_eq!(config.check_interval, Duration::from_secs(5));
        assert_eq!(config.ip_check_url, "https://api.ipify.org");
    }

    #[test]
    fn test_unparsable_interval_keeps_default() {
        let config = Config::from_lookup(lookup_from(&[("CHECK_INTERVAL_SECONDS", "soon")]));

        assert_eq!(config.check_interval, Duration::from_secs(60));
    }

    #[test]
    fn test_validation_rejects_zero_interval() {
        let config = Config::from_lookup(lookup_from(&[("CHECK_INTERVAL_SECONDS", "0")]));

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_service_name() {
        let config = Config {
            service_name: String::new(),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_malformed_url() {
        let config = Config {
            ip_check_url: "not a url".to_string(),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_inverted_timeouts() {
        let config = Config {
            request_timeout: Duration::from_secs(30),
            session_timeout: Duration::from_secs(20),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }
}
