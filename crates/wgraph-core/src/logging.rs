use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "dijkstra");
/// // Or with additional fields:
/// trace_time!(start, "dijkstra", vertices = graph.vertex_count());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:literal) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:literal $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Install the global subscriber, writing to stderr.
///
/// The filter comes from `RUST_LOG` if set, else `WGRAPH_LOG`, else the
/// flags: `log_level` wins over `verbose`, and the quiet default is `warn`.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let fallback = match log_level {
        Some(level) => directive_for(level),
        None if verbose => directive_for("debug"),
        None => directive_for("warn"),
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("WGRAPH_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    let registry = tracing_subscriber::registry().with(filter);
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_ansi(false);

    if log_json {
        // Span open and close events give per-algorithm timings
        registry
            .with(
                stderr_layer
                    .json()
                    .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE),
            )
            .try_init()?;
    } else {
        registry
            .with(stderr_layer.compact().with_target(false))
            .try_init()?;
    }

    Ok(())
}

/// Build the filter directive for a bare level or a full directive string
fn directive_for(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("wgraph={level},wgraph_core={level}")
    }
}
