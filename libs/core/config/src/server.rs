use crate::{ConfigError, FromEnv, env_or_default, env_parse};
use std::net::Ipv4Addr;

/// Port the HTTP listener binds to when `PORT` is unset
pub const DEFAULT_PORT: u16 = 8080;

/// Listener settings for the HTTP server
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Bind address in `host:port` form, as accepted by `TcpListener::bind`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// `HOST` defaults to every interface, `PORT` to [`DEFAULT_PORT`].
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string()),
            port: env_parse("PORT", DEFAULT_PORT)?,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_vars_match_default() {
        temp_env::with_vars_unset(["HOST", "PORT"], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config, ServerConfig::default());
            assert_eq!(config.address(), "0.0.0.0:8080");
        });
    }

    #[test]
    fn test_host_and_port_overrides() {
        temp_env::with_vars([("HOST", Some("127.0.0.1")), ("PORT", Some("3000"))], || {
            assert_eq!(ServerConfig::from_env().unwrap().address(), "127.0.0.1:3000");
        });
    }

    #[test]
    fn test_rejected_ports() {
        for port in ["http", "-1", "65536"] {
            temp_env::with_var("PORT", Some(port), || {
                let err = ServerConfig::from_env().unwrap_err();
                assert!(
                    matches!(&err, ConfigError::ParseError { key, .. } if key == "PORT"),
                    "PORT={port} gave {err}"
                );
            });
        }
    }
}
