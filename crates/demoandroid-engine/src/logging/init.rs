use std::sync::Once;

/// Filter used when neither the config nor `RUST_LOG` provides one.
///
/// GPU backends are chatty at `info`; keep them at `warn`.
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "demoandroid_engine=debug,wgpu_core=warn").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
            ..Self::default()
        }
    }

    /// Resolves the filter string: explicit config, then `RUST_LOG`, then the default.
    fn resolve_filter(&self, rust_log: Option<String>) -> String {
        self.env_filter
            .clone()
            .or(rust_log)
            .unwrap_or_else(|| DEFAULT_FILTER.to_string())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Idempotent; later calls are ignored. If another logger was installed first
/// (e.g. by a test harness), that one stays in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.resolve_filter(std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);

        if builder.try_init().is_ok() {
            log::debug!("logging initialized with filter '{filter}'");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins_over_env() {
        let cfg = LoggingConfig::with_filter("warn");
        assert_eq!(cfg.resolve_filter(Some("trace".into())), "warn");
    }

    #[test]
    fn env_filter_used_when_not_configured() {
        let cfg = LoggingConfig::default();
        assert_eq!(cfg.resolve_filter(Some("debug".into())), "debug");
    }

    #[test]
    fn falls_back_to_default() {
        let filter = LoggingConfig::default().resolve_filter(None);
        assert_eq!(filter, DEFAULT_FILTER);
    }

    #[test]
    fn repeated_init_is_harmless() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig::with_filter("error"));
    }
}
