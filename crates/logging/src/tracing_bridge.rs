//! crates/logging/src/tracing_bridge.rs
//! Bridges rendered log records into the tracing ecosystem.
//!
//! The bridge hands over the numeric severity, the module name as a tag, and
//! the already-rendered message; subscriber installation is left entirely to
//! the host application.

use crate::level::Level;
use crate::site::SourceSite;

/// Emits one rendered record as a tracing event.
///
/// The eight severity levels collapse onto tracing's four relevant levels;
/// the exact severity is preserved in the `severity` field so subscribers can
/// recover the full scale.
pub(crate) fn emit(level: Level, module: &str, site: &SourceSite, message: &str) {
    let severity = level.as_str();
    let file = site.basename();
    let line = site.line;
    let function = site.function;
    match level {
        Level::Emergency | Level::Alert | Level::Critical | Level::Error => {
            tracing::error!(target: "logging", severity, module, file, line, function, "{message}");
        }
        Level::Warning => {
            tracing::warn!(target: "logging", severity, module, file, line, function, "{message}");
        }
        Level::Notice | Level::Info => {
            tracing::info!(target: "logging", severity, module, file, line, function, "{message}");
        }
        Level::Debug => {
            tracing::debug!(target: "logging", severity, module, file, line, function, "{message}");
        }
    }
}
