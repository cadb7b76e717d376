//! Logging for the object store, the squirrel repository and the HTTP handlers.
//!
//! The `squirrel-server` binary turns on `logging` and installs a subscriber
//! from its `[logging]` config table. The `squirrels` CLI built with only
//! `cli` gets no-op macros and prints nothing beyond its own output.
//!
//! Fields follow one convention: `path` for the store file, `id` for a
//! record, `id_policy` or `policy` for the id scheme, `error` for a
//! displayed source error.
//!
//! ```rust,ignore
//! use crate::logging::{debug, info};
//!
//! info!(path = %path.display(), "created empty object store");
//! debug!(id = id, "squirrel not found");
//! ```

/// Per-call store detail: file already present, missing file read as
/// empty, record count after each load.
#[cfg(feature = "logging")]
macro_rules! log_trace {
    ($($arg:tt)*) => { tracing::trace!($($arg)*) }
}

#[cfg(not(feature = "logging"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

/// One line per repository mutation and per lookup that matched nothing.
/// Handlers also log bodies read as empty forms and unparsable id segments.
#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) }
}

#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// A store file created on open, a repository opened with its id policy.
#[cfg(feature = "logging")]
macro_rules! log_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) }
}

#[cfg(not(feature = "logging"))]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

// Count policy handing out an id that a surviving record already holds.
#[cfg(feature = "logging")]
macro_rules! log_warn {
    ($($arg:tt)*) => { tracing::warn!($($arg)*) }
}

#[cfg(not(feature = "logging"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// Undecodable store content, a poisoned repository lock, an exhausted id
/// space. Each is also returned as an error.
#[cfg(feature = "logging")]
macro_rules! log_error {
    ($($arg:tt)*) => { tracing::error!($($arg)*) }
}

#[cfg(not(feature = "logging"))]
macro_rules! log_error {
    ($($arg:tt)*) => {};
}

pub(crate) use log_debug as debug;
pub(crate) use log_error as error;
pub(crate) use log_info as info;
pub(crate) use log_trace as trace;
pub(crate) use log_warn as warn;
