//! Tracing/logging initialization.
//!
//! JSON lines by default so the platform log collector can index fields;
//! `LOG_FORMAT=pretty` switches to human-readable output for local runs.
//! Filtering follows `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,tower_http=info,sqlx=warn";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    /// Unknown values fall back to JSON.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "pretty" || v == "text" => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }
}

/// Initialize logging with the format from `LOG_FORMAT`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with(LogFormat::parse(std::env::var("LOG_FORMAT").ok().as_deref()));
}

pub fn init_with(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    let _ = match format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parsing() {
        assert_eq!(LogFormat::parse(None), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some("PRETTY")), LogFormat::Pretty);
        assert_eq!(LogFormat::parse(Some(" text ")), LogFormat::Pretty);
        assert_eq!(LogFormat::parse(Some("xml")), LogFormat::Json);
    }

    #[test]
    fn repeated_init_is_harmless() {
        init_with(LogFormat::Json);
        init_with(LogFormat::Pretty);
    }
}
