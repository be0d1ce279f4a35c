//! Session registry configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Idle expiry settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// Flights unchanged this long are deleted; 0 disables expiry.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    /// Seconds between expiry scans.
    #[serde(default = "default_reap_interval")]
    pub reap_interval_secs: u64,
}

impl RegistryConfig {
    /// Maximum idle time, or `None` when expiry is disabled.
    pub fn idle_timeout(&self) -> Option<Duration> {
        (self.idle_timeout_secs > 0).then(|| Duration::from_secs(self.idle_timeout_secs))
    }

    pub fn reap_interval(&self) -> Duration {
        Duration::from_secs(self.reap_interval_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.idle_timeout_secs > 0 && self.reap_interval_secs == 0 {
            return Err(ValidationError::InvalidReapInterval);
        }
        Ok(())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: default_idle_timeout(),
            reap_interval_secs: default_reap_interval(),
        }
    }
}

fn default_idle_timeout() -> u64 {
    // One day.
    86_400
}

fn default_reap_interval() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_timeout_disables_expiry() {
        let config = RegistryConfig {
            idle_timeout_secs: 0,
            reap_interval_secs: 0,
        };
        assert_eq!(config.idle_timeout(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn enabled_expiry_needs_an_interval() {
        let config = RegistryConfig {
            idle_timeout_secs: 60,
            reap_interval_secs: 0,
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidReapInterval));
    }

    #[test]
    fn defaults_enable_expiry() {
        let config = RegistryConfig::default();
        assert_eq!(config.idle_timeout(), Some(Duration::from_secs(86_400)));
        assert_eq!(config.reap_interval(), Duration::from_secs(60));
    }
}
