use std::net::SocketAddr;

use kyc_infra::ServiceConfig;

/// Server settings, read from the environment at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub service: ServiceConfig,
}

impl ApiConfig {
    pub const BIND_ADDR_ENV: &'static str = "KYC_BIND_ADDR";
    pub const DEFAULT_BIND_ADDR: &'static str = "0.0.0.0:8080";

    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let raw =
            lookup(Self::BIND_ADDR_ENV).unwrap_or_else(|| Self::DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid {}='{raw}': {e}", Self::BIND_ADDR_ENV))?;

        Ok(Self {
            bind_addr,
            service: ServiceConfig::from_lookup(&lookup),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = ApiConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.bind_addr.to_string(), ApiConfig::DEFAULT_BIND_ADDR);
        assert_eq!(config.service, ServiceConfig::default());
    }

    #[test]
    fn reads_bind_addr_and_service_settings() {
        let config = ApiConfig::from_lookup(|name| match name {
            ApiConfig::BIND_ADDR_ENV => Some("127.0.0.1:9000".to_string()),
            ServiceConfig::CONFLICT_RETRIES_ENV => Some("2".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.service.conflict_retries, 2);
    }

    #[test]
    fn invalid_bind_addr_is_an_error() {
        let err = ApiConfig::from_lookup(|_| Some("nowhere".to_string())).unwrap_err();
        assert!(err.to_string().contains(ApiConfig::BIND_ADDR_ENV));
    }
}
