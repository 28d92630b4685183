//! crates/logging/src/syslog.rs
//!
//! Syslog backend plumbing.
//!
//! Uses libc `openlog`/`syslog`/`closelog` directly rather than pulling in a
//! dedicated syslog crate, keeping the dependency graph minimal. The
//! connection is opened with the module name as ident, `LOG_CONS` so messages
//! fall back to the console when the log daemon is unreachable, and the fixed
//! `LOG_LOCAL0` facility.

use std::ffi::CString;

use crate::level::Level;

/// Ident used when the module name cannot be represented as a C string.
const FALLBACK_IDENT: &str = "logging";

/// Maps a severity level to the corresponding syslog(3) priority.
///
/// The ordinals already mirror the priority scale, but the mapping is spelled
/// out against the libc constants so a mismatch fails in tests rather than in
/// the field.
pub(crate) const fn priority(level: Level) -> libc::c_int {
    match level {
        Level::Emergency => libc::LOG_EMERG,
        Level::Alert => libc::LOG_ALERT,
        Level::Critical => libc::LOG_CRIT,
        Level::Error => libc::LOG_ERR,
        Level::Warning => libc::LOG_WARNING,
        Level::Notice => libc::LOG_NOTICE,
        Level::Info => libc::LOG_INFO,
        Level::Debug => libc::LOG_DEBUG,
    }
}

/// Open syslog connection tied to the logger lifecycle.
///
/// Construction calls `openlog(3)`; dropping the value calls `closelog(3)`,
/// so detaching the backend releases the handle without a separate teardown
/// path. The ident `CString` is stored in the connection because syslog keeps
/// the pointer for the lifetime of the connection.
#[derive(Debug)]
pub(crate) struct SyslogConnection {
    _ident: CString,
}

impl SyslogConnection {
    /// Opens the connection with `ident` as the syslog tag.
    pub(crate) fn open(ident: &str) -> Self {
        let ident = CString::new(ident).unwrap_or_else(|_| {
            CString::new(FALLBACK_IDENT).expect("fallback ident contains no NUL bytes")
        });

        // SAFETY: the ident pointer stays valid until closelog() runs because
        // the CString is owned by the connection and dropped afterwards.
        unsafe {
            libc::openlog(ident.as_ptr(), libc::LOG_CONS, libc::LOG_LOCAL0);
        }

        Self { _ident: ident }
    }

    /// Sends one rendered line at the given severity.
    pub(crate) fn send(&mut self, level: Level, line: &str) {
        // syslog(3) interprets `%` as a format specifier; routing the payload
        // through a fixed "%s" avoids format string injection.
        let Ok(c_line) = CString::new(line) else {
            return;
        };

        // SAFETY: both strings are valid NUL-terminated C strings and the
        // connection guarantees openlog has been called.
        unsafe {
            libc::syslog(priority(level), FORMAT.as_ptr().cast(), c_line.as_ptr());
        }
    }
}

impl Drop for SyslogConnection {
    fn drop(&mut self) {
        // SAFETY: closelog has no preconditions beyond a prior openlog, which
        // construction guarantees.
        unsafe {
            libc::closelog();
        }
    }
}

const FORMAT: &[u8] = b"%s\0";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priorities_match_libc_constants() {
        assert_eq!(priority(Level::Emergency), libc::LOG_EMERG);
        assert_eq!(priority(Level::Alert), libc::LOG_ALERT);
        assert_eq!(priority(Level::Critical), libc::LOG_CRIT);
        assert_eq!(priority(Level::Error), libc::LOG_ERR);
        assert_eq!(priority(Level::Warning), libc::LOG_WARNING);
        assert_eq!(priority(Level::Notice), libc::LOG_NOTICE);
        assert_eq!(priority(Level::Info), libc::LOG_INFO);
        assert_eq!(priority(Level::Debug), libc::LOG_DEBUG);
    }

    #[test]
    fn open_send_close_does_not_panic() {
        let mut connection = SyslogConnection::open("logging-tests");
        connection.send(Level::Debug, "syslog backend smoke test");
        drop(connection);
    }

    #[test]
    fn send_skips_lines_with_interior_nul() {
        let mut connection = SyslogConnection::open("logging-tests");
        connection.send(Level::Debug, "before\0after");
    }

    #[test]
    fn open_survives_idents_with_interior_nul() {
        let connection = SyslogConnection::open("bad\0ident");
        drop(connection);
    }
}
