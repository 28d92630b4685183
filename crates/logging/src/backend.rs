//! crates/logging/src/backend.rs
//! Output backend selectors and the fail-open name lookup.

use std::fmt;
use std::str::FromStr;

/// Output destination selector passed to [`open`](crate::open).
///
/// Exactly one backend is active per process at a time. Selecting a backend
/// that is unavailable on the current platform (for example syslog on a
/// non-Unix target) is not an error: `open` substitutes [`Backend::Stderr`]
/// and emits a warning, favoring availability of diagnostics over strict
/// configuration correctness.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Backend {
    /// Standard output stream.
    Stdout,
    /// Standard error stream.
    Stderr,
    /// The operating system's syslog facility.
    ///
    /// Opened with the module name as ident, console fallback, and the
    /// `LOCAL0` facility. Requires runtime configuration; the `static-log`
    /// build rejects it at compile time.
    Syslog,
    /// Delegates severity, module name, and the rendered message to the
    /// `tracing` ecosystem.
    #[cfg(feature = "tracing")]
    Tracing,
}

impl Backend {
    /// Returns the backend name as accepted by [`Backend::from_str`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
            Self::Syslog => "syslog",
            #[cfg(feature = "tracing")]
            Self::Tracing => "tracing",
        }
    }

    /// Parses a backend name, substituting [`Backend::Stderr`] with a warning
    /// on stderr for unrecognised names.
    ///
    /// This is the fail-open entry point for configuration surfaces (CLI
    /// flags, config files) where refusing to start over a typo would cost
    /// more than degraded log routing.
    #[must_use]
    pub fn from_name_or_fallback(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            eprintln!("warning: unknown log backend {name:?}; falling back to stderr");
            Self::Stderr
        })
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Backend`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unrecognised log backend")]
pub struct ParseBackendError(());

impl FromStr for Backend {
    type Err = ParseBackendError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "stdout" => Ok(Self::Stdout),
            "stderr" => Ok(Self::Stderr),
            "syslog" => Ok(Self::Syslog),
            #[cfg(feature = "tracing")]
            "tracing" => Ok(Self::Tracing),
            _ => Err(ParseBackendError(())),
        }
    }
}
