//! crates/logging/src/level.rs
//! Severity levels modeled after the syslog priority scale.

use std::fmt;
use std::str::FromStr;

/// Severity of a log message, ordered from most to least severe.
///
/// The discriminants mirror the syslog(3) priority scale: a lower ordinal
/// means a more severe message. [`Level::Debug`] is the least severe legal
/// value and is the substitute applied when an out-of-range ordinal is
/// sanitized at a conversion boundary.
///
/// # Examples
///
/// ```
/// use logging::Level;
///
/// assert!(Level::Error.ordinal() < Level::Warning.ordinal());
/// assert_eq!(Level::Critical.as_str(), "CRITICAL");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Level {
    /// System is unusable.
    Emergency = 0,
    /// Action must be taken immediately.
    Alert = 1,
    /// Critical conditions.
    Critical = 2,
    /// Error conditions.
    Error = 3,
    /// Warning conditions.
    Warning = 4,
    /// Normal but significant condition.
    Notice = 5,
    /// Informational messages.
    Info = 6,
    /// Debug-level messages.
    Debug = 7,
}

impl Level {
    /// Every level, ordered from most to least severe.
    pub const ALL: [Self; 8] = [
        Self::Emergency,
        Self::Alert,
        Self::Critical,
        Self::Error,
        Self::Warning,
        Self::Notice,
        Self::Info,
        Self::Debug,
    ];

    /// Returns the numeric ordinal of this level (0 = most severe).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the uppercase display name rendered inside brackets on each
    /// log line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emergency => "EMERGENCY",
            Self::Alert => "ALERT",
            Self::Critical => "CRITICAL",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Notice => "NOTICE",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }

    /// Converts a raw ordinal back into a level.
    ///
    /// Returns `None` for ordinals outside `0..=7`.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Emergency),
            1 => Some(Self::Alert),
            2 => Some(Self::Critical),
            3 => Some(Self::Error),
            4 => Some(Self::Warning),
            5 => Some(Self::Notice),
            6 => Some(Self::Info),
            7 => Some(Self::Debug),
            _ => None,
        }
    }

    /// Converts a raw ordinal, clamping out-of-range values to the least
    /// severe legal level.
    ///
    /// The second element reports whether clamping occurred so callers at the
    /// conversion boundary can emit a sanitization warning.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Level;
    ///
    /// assert_eq!(Level::sanitize(3), (Level::Error, false));
    /// assert_eq!(Level::sanitize(250), (Level::Debug, true));
    /// ```
    #[must_use]
    pub const fn sanitize(ordinal: u8) -> (Self, bool) {
        match Self::from_ordinal(ordinal) {
            Some(level) => (level, false),
            None => (Self::Debug, true),
        }
    }

    /// Reports whether a message at `message` severity passes a threshold of
    /// `self`.
    ///
    /// A threshold admits every message at least as severe as itself, so a
    /// `Warning` threshold allows `Error` but suppresses `Info`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Level;
    ///
    /// assert!(Level::Warning.allows(Level::Error));
    /// assert!(Level::Warning.allows(Level::Warning));
    /// assert!(!Level::Warning.allows(Level::Info));
    /// ```
    #[must_use]
    pub const fn allows(self, message: Self) -> bool {
        message.ordinal() <= self.ordinal()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Level`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unrecognised severity level")]
pub struct ParseLevelError(());

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Accepts case-insensitive level names and numeric ordinals (`"0"` to
    /// `"7"`).
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if let Ok(ordinal) = input.parse::<u8>() {
            return Self::from_ordinal(ordinal).ok_or(ParseLevelError(()));
        }
        match input.to_ascii_lowercase().as_str() {
            "emergency" | "emerg" => Ok(Self::Emergency),
            "alert" => Ok(Self::Alert),
            "critical" | "crit" => Ok(Self::Critical),
            "error" | "err" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "notice" => Ok(Self::Notice),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(ParseLevelError(())),
        }
    }
}
