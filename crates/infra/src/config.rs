//! Configuration loading and representation.

use tracing::warn;

/// Customer service settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServiceConfig {
    /// How many times an update is re-run after losing a version race before
    /// the conflict is reported to the caller. `0` reports the first conflict.
    pub conflict_retries: u32,
}

impl ServiceConfig {
    pub const CONFLICT_RETRIES_ENV: &'static str = "KYC_CONFLICT_RETRIES";

    pub fn with_conflict_retries(mut self, retries: u32) -> Self {
        self.conflict_retries = retries;
        self
    }

    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`; unset or unparseable values keep their
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(Self::CONFLICT_RETRIES_ENV) {
            match raw.trim().parse::<u32>() {
                Ok(n) => config.conflict_retries = n,
                Err(e) => warn!(
                    value = %raw,
                    error = %e,
                    "ignoring invalid {}", Self::CONFLICT_RETRIES_ENV
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_retries() {
        assert_eq!(ServiceConfig::from_lookup(|_| None).conflict_retries, 0);
    }

    #[test]
    fn reads_retries_from_lookup() {
        let config = ServiceConfig::from_lookup(|name| {
            (name == ServiceConfig::CONFLICT_RETRIES_ENV).then(|| " 3 ".to_string())
        });
        assert_eq!(config.conflict_retries, 3);
    }

    #[test]
    fn invalid_value_keeps_default() {
        let config = ServiceConfig::from_lookup(|_| Some("many".to_string()));
        assert_eq!(config, ServiceConfig::default());
    }
}
