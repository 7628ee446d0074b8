//! Logging integration for the polyglot-rs library.
//!
//! Provides a helper for configuring [`tracing`]-based logging and for
//! creating per-resolution spans.

/// Sets up the global tracing subscriber.
///
/// `filter` is an env-filter directive string (e.g. "debug",
/// "polyglot_rs_translate=debug,info"). When `pretty` is true a
/// human-readable format with file/line locations is used; otherwise a
/// structured JSON format suitable for log aggregation.
///
/// Installation is best-effort: if a subscriber is already set (common in
/// tests), the call is a no-op.
pub fn setup_logging(filter: &str, pretty: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    if pretty {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for a single translation resolution.
///
/// Attach this span around a `resolve` call so all log entries emitted
/// during resolution carry the locale and message id.
///
/// # Examples
///
/// ```
/// use polyglot_rs_core::logging::resolve_span;
///
/// let span = resolve_span("en", "greeting");
/// let _guard = span.enter();
/// tracing::debug!("resolving");
/// ```
pub fn resolve_span(locale: &str, message_id: &str) -> tracing::Span {
    tracing::debug_span!("resolve", locale = locale, id = message_id)
}
