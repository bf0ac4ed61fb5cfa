use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber.
///
/// An explicit level from flags or the config file wins; otherwise `RUST_LOG`
/// is honoured, and failing both everything of ours logs at `info`.
pub fn setup_tracing(level: Option<&str>) {
    let default_filter = |base: &str| {
        EnvFilter::new(format!(
            "folio={base},\
             wgpu=warn,wgpu_core=warn,wgpu_hal=warn,naga=warn,\
             cosmic_text=warn,iced_wgpu=warn,reqwest=warn,hyper=warn,hyper_util=warn"
        ))
    };

    let filter = match level {
        // Full directives such as "folio=trace,reqwest=debug" are taken as-is
        Some(level) if level.contains('=') => EnvFilter::new(level),
        Some(level) => default_filter(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter("info")),
    };

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .try_init();
}
