//! Telemetry helpers for applications embedding `step-plot`.
//!
//! Geometry builders emit `tracing` events (point counts, clip fragment
//! counts, dropped non-finite paths). Installing a subscriber is opt-in:
//! call `init_default_tracing` or wire your own subscriber and filters.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
