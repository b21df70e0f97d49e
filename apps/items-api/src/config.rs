use axum_helpers::{create_cors_layer, create_permissive_cors_layer, parse_allowed_origins};
use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_optional, server::ServerConfig};
use eyre::WrapErr;
use tower_http::cors::CorsLayer;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Comma-separated list of allowed origins (`CORS_ALLOWED_ORIGIN`)
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let cors_allowed_origin = env_optional("CORS_ALLOWED_ORIGIN");

        if environment.is_production() && cors_allowed_origin.is_none() {
            return Err(ConfigError::MissingEnvVar("CORS_ALLOWED_ORIGIN".to_string()).into());
        }

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            cors_allowed_origin,
        })
    }

    /// Build the CORS layer: explicit origins when configured, permissive otherwise.
    pub fn cors_layer(&self) -> eyre::Result<CorsLayer> {
        match &self.cors_allowed_origin {
            Some(origins) => {
                let origins = parse_allowed_origins(origins)
                    .wrap_err("Invalid CORS_ALLOWED_ORIGIN")?;
                Ok(create_cors_layer(origins))
            }
            None => {
                tracing::warn!("CORS_ALLOWED_ORIGIN not set, allowing any origin");
                Ok(create_permissive_cors_layer())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_without_cors_origin_is_permissive() {
        temp_env::with_vars(
            [
                ("APP_ENV", None::<&str>),
                ("CORS_ALLOWED_ORIGIN", None),
                ("PORT", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.environment, Environment::Development);
                assert_eq!(config.cors_allowed_origin, None);
                assert_eq!(config.app.name, "items_api");
                assert!(config.cors_layer().is_ok());
            },
        );
    }

    #[test]
    fn test_production_requires_cors_origin() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("CORS_ALLOWED_ORIGIN", None::<&str>),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(err.to_string().contains("CORS_ALLOWED_ORIGIN"));
            },
        );
    }

    #[test]
    fn test_production_with_cors_origins() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                (
                    "CORS_ALLOWED_ORIGIN",
                    Some("https://a.example.com, https://b.example.com"),
                ),
                ("PORT", Some("9090")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.environment.is_production());
                assert_eq!(config.server.port, 9090);
                assert!(config.cors_layer().is_ok());
            },
        );
    }

    #[test]
    fn test_invalid_port_is_reported() {
        temp_env::with_var("PORT", Some("eighty"), || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("PORT"));
        });
    }
}
