//! Logging configuration for pipeguard.
//!
//! Check evaluation is instrumented with `tracing` spans; this module
//! provides a small setup helper for applications that want structured log
//! output without wiring `tracing-subscriber` themselves.

use tracing::Level;

/// Configuration for logging initialization.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Base log level for the application.
    pub level: Level,
    /// Log level for pipeguard's own spans and events.
    pub guard_level: Level,
    /// Whether to emit JSON-formatted output.
    pub json_format: bool,
    /// Custom environment filter, overriding the level fields.
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            guard_level: Level::INFO,
            json_format: false,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Creates a verbose configuration suitable for debugging check
    /// evaluation.
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            guard_level: Level::DEBUG,
            json_format: false,
            env_filter: None,
        }
    }

    /// Creates a JSON-formatted configuration for production pipelines.
    pub fn production() -> Self {
        Self {
            level: Level::WARN,
            guard_level: Level::INFO,
            json_format: true,
            env_filter: None,
        }
    }

    /// Sets whether to use JSON output format.
    pub fn with_json_format(mut self, enabled: bool) -> Self {
        self.json_format = enabled;
        self
    }

    /// Sets a custom environment filter.
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Builds the environment filter string.
    pub fn env_filter(&self) -> String {
        if let Some(ref filter) = self.env_filter {
            filter.clone()
        } else {
            format!(
                "{},pipeguard={}",
                self.level.as_str().to_lowercase(),
                self.guard_level.as_str().to_lowercase()
            )
        }
    }
}

/// Initializes logging for the current process.
///
/// The `RUST_LOG` environment variable takes precedence over the
/// configured levels when set.
///
/// # Examples
///
/// ```rust,no_run
/// use pipeguard::logging::{init_logging, LoggingConfig};
///
/// init_logging(LoggingConfig::default()).unwrap();
/// ```
pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.env_filter()));

    let fmt_layer = if config.json_format {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
