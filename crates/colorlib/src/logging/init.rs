use std::sync::Once;

/// Settings for the optional `env_logger` backend.
///
/// `env_filter` uses the `env_logger` directive syntax. `"colorlib=trace"`
/// shows every gradient insertion and replacement; `"colorlib=warn"` only
/// reports keyframes dropped for a NaN offset.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Config with an explicit filter, ignoring `RUST_LOG`.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
            ..Self::default()
        }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the `log` backend, for hosts that have none.
///
/// `colorlib` never installs a logger on its own. Tests, demos and small
/// tools call this so the crate's `trace!`/`warn!` output becomes visible
/// without pulling a logger setup of their own. An application that already
/// installed a backend keeps it; this call then does nothing.
///
/// Filter precedence: `config.env_filter`, then `RUST_LOG`, then `info`.
/// Only the first call in a process has an effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.write_style(config.write_style);

        if builder.try_init().is_ok() {
            log::debug!("colorlib: env_logger installed");
        }
    });
}
