//! Startup configuration for the draft services.
//!
//! Values are resolved once in `main` and passed into the servers, rather than read from the
//! process environment while handling requests.

use std::net::SocketAddr;

/// Environment variable overriding the generator service listen address.
pub const GENERATOR_ADDR_ENV: &str = "DRAFT_GENERATOR_ADDR";

/// Environment variable overriding the writer service listen address.
pub const WRITER_ADDR_ENV: &str = "DRAFT_WRITER_ADDR";

/// Default generator service listen address.
pub const DEFAULT_GENERATOR_ADDR: &str = "0.0.0.0:8080";

/// Default writer service listen address.
pub const DEFAULT_WRITER_ADDR: &str = "0.0.0.0:8081";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid listen address {value:?}: {source}")]
    InvalidListenAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Parse a listen address from an optional environment value.
///
/// If `value` is `None` or empty/whitespace, `default` is used.
pub fn listen_addr_from_env_value(
    value: Option<String>,
    default: &str,
) -> Result<SocketAddr, ConfigError> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string());

    value
        .parse()
        .map_err(|source| ConfigError::InvalidListenAddr { value, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listen_addr_defaults() {
        let addr = listen_addr_from_env_value(None, DEFAULT_GENERATOR_ADDR).unwrap();
        assert_eq!(addr.port(), 8080);

        let addr = listen_addr_from_env_value(Some("   ".into()), DEFAULT_WRITER_ADDR).unwrap();
        assert_eq!(addr.port(), 8081);
    }

    #[test]
    fn test_listen_addr_override() {
        let addr =
            listen_addr_from_env_value(Some(" 127.0.0.1:9000 ".into()), DEFAULT_WRITER_ADDR)
                .unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn test_listen_addr_invalid() {
        let err = listen_addr_from_env_value(Some("localhost".into()), DEFAULT_WRITER_ADDR)
            .unwrap_err();
        assert!(err.to_string().contains("\"localhost\""));
    }
}
