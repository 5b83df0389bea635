//! Logging setup shared by controller binaries.
mod config;
mod error;
mod format;
mod init;
mod level;
mod timer;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use format::LoggerFormat;
pub use level::LoggerLevel;
pub use timer::UtcRfc3339;

/// Install the global tracing subscriber described by `cfg`.
///
/// Can succeed once per process; later calls return [`LoggerError::AlreadyInitialized`].
///
/// ```rust
/// use wlc_observe::{LoggerConfig, init_logger};
///
/// init_logger(&LoggerConfig::default()).expect("first init");
/// tracing::info!("logger ready");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => init::text(cfg),
        LoggerFormat::Json => init::json(cfg),
    }
}
