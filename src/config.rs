//! Server configuration from environment variables

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{Result, SiteError};

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Directory served under `/logo` and `/image`
    pub assets_dir: PathBuf,
    pub page_cache_ttl: Duration,
    pub page_cache_capacity: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            assets_dir: PathBuf::from("public"),
            page_cache_ttl: Duration::from_secs(300),
            page_cache_capacity: 256,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: parse_var(&lookup, "HOST")?.unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
            assets_dir: lookup("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_dir),
            page_cache_ttl: parse_var(&lookup, "PAGE_CACHE_TTL_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.page_cache_ttl),
            page_cache_capacity: parse_var(&lookup, "PAGE_CACHE_CAPACITY")?
                .unwrap_or(defaults.page_cache_capacity),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|_| SiteError::Config {
            message: format!("{} has an invalid value: '{}'", key, raw),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = SiteConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.page_cache_ttl, Duration::from_secs(300));
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("ASSETS_DIR", "/srv/portfolio"),
            ("PAGE_CACHE_TTL_SECS", "0"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.assets_dir, PathBuf::from("/srv/portfolio"));
        assert_eq!(config.page_cache_ttl, Duration::ZERO);
    }

    #[test]
    fn test_bad_port_is_config_error() {
        let err = SiteConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, SiteError::Config { .. }));
        assert!(err.to_string().contains("PORT"));
    }
}
