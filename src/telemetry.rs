//! Telemetry initialization (tracing/tracing-subscriber).
//!
//! Behavior:
//! - LOG_LEVEL controls the filter (e.g. "debug" or detailed directives like
//!   "info,translator=debug,progress=debug,badges=debug,tower_http=info").
//! - LOG_FORMAT selects "pretty" (default) or "json" structured logs.
//!
//! Learner free text is never logged; spans carry its length only.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str =
    "info,translator=debug,progress=debug,badges=debug,logic2code_backend=debug,tower_http=info,axum=info";

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_enables_every_service_target() {
        for target in ["translator", "progress", "badges", "logic2code_backend"] {
            let directive = format!("{}=debug", target);
            assert!(DEFAULT_FILTER.split(',').any(|d| d == directive), "missing {}", directive);
        }
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
