use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. SQL statements stay quiet unless asked for.
pub const DEFAULT_FILTER: &str = "info,tower_http=info,sea_orm=warn,sqlx=warn";

/// Shape of the lines the global subscriber writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single line per event.
    Compact,
    /// One JSON object per event, for log shippers.
    Json,
}

impl LogFormat {
    /// `json` in any case selects JSON; anything else, or no value, is compact.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

/// Install the process-wide tracing subscriber.
/// - Respects `RUST_LOG` if set, otherwise [`DEFAULT_FILTER`]
/// - Writes to stdout without targets
/// - A second call is a no-op
pub fn init_logging(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = fmt().with_env_filter(env_filter).with_target(false).with_writer(io::stdout);
    let _ = match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

/// Install the subscriber in the format named by `LOG_FORMAT`.
pub fn init_logging_from_env() {
    init_logging(LogFormat::from_setting(std::env::var("LOG_FORMAT").ok().as_deref()));
}
