//! Instrumentation hooks for generator lifecycle events.
//!
//! Both macros compile to nothing unless the matching feature is enabled,
//! so call sites stay free of `cfg` noise.

/// Emit a `tracing` event at TRACE level.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    };
}

/// Bump a `metrics` counter labelled with the generator name.
macro_rules! count_event {
    ($metric:literal, $name:expr) => {
        #[cfg(feature = "metrics")]
        {
            metrics::counter!($metric, "generator" => $name.to_string()).increment(1);
        }
        #[cfg(not(feature = "metrics"))]
        {
            let _ = &$name;
        }
    };
}

pub(crate) use count_event;
pub(crate) use trace_event;
