//! Tracing subscriber setup for the CLI

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Logging options taken from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Raise the default level from `warn` to `debug`
    pub verbose: bool,
    /// Emit JSON lines instead of human-readable text
    pub json_format: bool,
}

impl LoggingConfig {
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_json_format(mut self, json_format: bool) -> Self {
        self.json_format = json_format;
        self
    }

    /// Default filter directive, used when `RUST_LOG` is unset.
    pub fn env_filter(&self) -> &'static str {
        if self.verbose {
            "ruleforge=debug"
        } else {
            "ruleforge=warn"
        }
    }
}

/// Install the global subscriber. Logs go to stderr so reports on stdout stay
/// clean.
pub fn init_logging(config: LoggingConfig) -> crate::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.env_filter()));

    let fmt_layer = if config.json_format {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
