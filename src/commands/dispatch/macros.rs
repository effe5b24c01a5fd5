//! Macros for command timing and logging

/// Trace an elapsed-time checkpoint at debug level
///
/// Usage:
/// ```ignore
/// trace_command!(ctx.start, "load_graph");
/// ```
macro_rules! trace_command {
    ($start:expr, $label:literal) => {
        ::tracing::debug!(elapsed = ?$start.elapsed(), $label);
    };
}

pub(crate) use trace_command;
