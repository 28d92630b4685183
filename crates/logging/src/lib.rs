#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is a minimal leveled logger for single-threaded, synchronous
//! programs. One logger configuration exists per process: a module label, an
//! output backend, and a severity threshold that can be adjusted and restored
//! at runtime. Records carry their call site (file basename, line, function)
//! and are rendered through a fixed-size, reusable buffer so logging never
//! allocates per message on the console paths.
//!
//! # Design
//!
//! Two interchangeable implementations sit behind one surface, selected at
//! build time:
//!
//! - the default, runtime-configured logger with an explicit
//!   [`open`]/[`close`] lifecycle and console, syslog, writer, and (feature
//!   `tracing`) tracing backends;
//! - the `static-log` variant, whose module name, backend, and initial
//!   threshold are compile-time constants; its lifecycle calls are inert
//!   shims kept only so the surface stays additive across feature sets.
//!
//! # Invariants
//!
//! - Severity is always one of the eight [`Level`] variants; raw ordinals are
//!   sanitized at conversion boundaries, never inside the pipeline.
//! - A message is emitted iff its level is at least as severe as the current
//!   threshold.
//! - Rendering is bounded by [`MESSAGE_MAX_LEN`]: long messages truncate,
//!   they never overflow and are never dropped.
//! - Diagnostics always land somewhere: misconfiguration degrades to stderr
//!   fallbacks instead of failing.
//!
//! # Examples
//!
//! ```
//! use logging::{log, Backend, Level};
//!
//! logging::open(Backend::Stdout, Level::Warning, "svc");
//! log!(Level::Error, "lost {} heartbeats", 3); // emitted
//! log!(Level::Info, "routine detail");         // suppressed
//!
//! logging::set_level(Level::Debug);
//! log!(Level::Info, "visible while debugging");
//! logging::reset_level();
//!
//! logging::close();
//! ```

mod backend;
mod buffer;
mod level;
mod macros;
#[cfg(not(feature = "static-log"))]
mod runtime;
mod site;
#[cfg(feature = "static-log")]
mod static_config;
#[cfg(all(unix, not(feature = "static-log")))]
#[allow(unsafe_code)]
mod syslog;
#[cfg(all(feature = "tracing", not(feature = "static-log")))]
mod tracing_bridge;

pub use backend::{Backend, ParseBackendError};
pub use buffer::{MessageBuffer, MESSAGE_MAX_LEN};
pub use level::{Level, ParseLevelError};
pub use site::SourceSite;

#[cfg(not(feature = "static-log"))]
pub use runtime::{
    close, emit, is_open, open, open_writer, reset_level, set_level, DEFAULT_MODULE_NAME,
    MODULE_NAME_MAX_LEN,
};

#[cfg(feature = "static-log")]
pub use static_config::{
    close, emit, is_open, open, open_writer, reset_level, set_level, MODULE_NAME,
};
