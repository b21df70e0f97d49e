use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, prelude::*};

/// Install the color-eyre report hook used for startup errors.
///
/// Reports show the error location but not the environment section.
/// A second call is a no-op.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Filter directives applied when `RUST_LOG` is not set.
///
/// Production keeps store mutations and request traces at info; development
/// also shows service spans and per-request debug output.
pub fn default_directives(environment: &Environment) -> &'static str {
    if environment.is_production() {
        "info,tower_http=info"
    } else {
        "debug,tower_http=debug"
    }
}

/// Install the global subscriber.
///
/// Development logs are pretty-printed, production logs are flattened JSON
/// lines. Both carry a [`tracing_error::ErrorLayer`] so span traces end up in
/// eyre reports. `RUST_LOG` overrides [`default_directives`].
///
/// Only the first call installs a subscriber; later calls log at debug and
/// return.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(environment)));

    let fmt_layer = if environment.is_production() {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(false)
            .flatten_event(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .pretty()
            .boxed()
    };

    let result = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .with(filter)
        .try_init();

    match result {
        Ok(()) => info!(environment = ?environment, "Tracing initialized"),
        Err(_) => debug!("Tracing already initialized"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_directives_are_quieter() {
        assert_eq!(
            default_directives(&Environment::Production),
            "info,tower_http=info"
        );
        assert!(default_directives(&Environment::Development).starts_with("debug"));
    }

    #[test]
    fn test_default_directives_parse() {
        for env in [Environment::Development, Environment::Production] {
            assert!(EnvFilter::try_new(default_directives(&env)).is_ok());
        }
    }

    #[test]
    fn test_repeated_init_is_harmless() {
        temp_env::with_var("RUST_LOG", Some("domain_items=trace"), || {
            init_tracing(&Environment::Production);
            init_tracing(&Environment::Development);
        });
    }
}
