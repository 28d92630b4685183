//! crates/logging/src/static_config.rs
//! Compile-time-fixed logger configuration (`static-log` feature).
//!
//! The module name, backend, and initial threshold are resolved at build time
//! from `CHKLOG_STATIC_MODULE`, `CHKLOG_STATIC_BACKEND`, and
//! `CHKLOG_STATIC_LEVEL`; the open/close lifecycle and the "not yet opened"
//! guard are inert here. Only console backends are representable; syslog
//! needs runtime setup, and asking for it fails the build through const
//! evaluation.
//!
//! The threshold itself stays adjustable at runtime via
//! [`set_level`]/[`reset_level`], exactly as in the runtime-configured build.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::io::{self, Write};

use crate::backend::Backend;
use crate::buffer::MessageBuffer;
use crate::level::Level;
use crate::site::SourceSite;

/// Module label compiled into every log line.
pub const MODULE_NAME: &str = match option_env!("CHKLOG_STATIC_MODULE") {
    Some(name) => name,
    None => "main",
};

const BACKEND: Backend = match option_env!("CHKLOG_STATIC_BACKEND") {
    Some(name) => parse_backend(name),
    None => Backend::Stdout,
};

const INIT_LEVEL: Level = match option_env!("CHKLOG_STATIC_LEVEL") {
    Some(name) => parse_level(name),
    None => Level::Debug,
};

thread_local! {
    static CURRENT: Cell<Level> = const { Cell::new(INIT_LEVEL) };
    static BUFFER: RefCell<MessageBuffer> = const { RefCell::new(MessageBuffer::new()) };
}

/// Inert stand-in for the runtime `open` operation.
///
/// The configuration is fixed at build time, so this logs one warning and
/// changes nothing. It exists so code written against the runtime-configured
/// build keeps compiling when the `static-log` feature is switched on.
pub fn open(_backend: Backend, _level: Level, _module_name: &str) {
    crate::log!(
        Level::Warning,
        "open() ignored: logger is statically configured"
    );
}

/// Inert stand-in for the runtime `open_writer` operation.
///
/// The writer is dropped; see [`open`].
pub fn open_writer<W>(_writer: W, _level: Level, _module_name: &str)
where
    W: Write + 'static,
{
    crate::log!(
        Level::Warning,
        "open_writer() ignored: logger is statically configured"
    );
}

/// Inert stand-in for the runtime `close` operation; a silent no-op.
pub fn close() {}

/// A backend is always bound in this build.
#[must_use]
pub fn is_open() -> bool {
    true
}

/// Replaces the current threshold.
pub fn set_level(level: Level) {
    CURRENT.with(|current| current.set(level));
}

/// Restores the threshold compiled into the build.
pub fn reset_level() {
    CURRENT.with(|current| current.set(INIT_LEVEL));
}

/// Renders and dispatches one record; the plumbing behind
/// [`log!`](crate::log).
///
/// The backend is bound at compile time, so unlike the runtime-configured
/// build there is no unopened state to guard against.
pub fn emit(level: Level, site: SourceSite, args: fmt::Arguments<'_>, format: &str) {
    if !CURRENT.with(|current| current.get()).allows(level) {
        return;
    }
    BUFFER.with(|buffer| {
        let mut buffer = buffer.borrow_mut();
        if buffer.render(args).is_err() {
            buffer.render_placeholder(format);
        }
        if buffer.is_empty() {
            return;
        }
        let message = buffer.as_str();
        // Const parsing only admits console targets; anything else would
        // have failed the build.
        match BACKEND {
            Backend::Stdout => {
                let _ = writeln!(
                    io::stdout().lock(),
                    "{}: [{}] {}:{}:{}: {}",
                    MODULE_NAME,
                    level,
                    site.basename(),
                    site.line,
                    site.function,
                    message
                );
            }
            _ => {
                let _ = writeln!(
                    io::stderr().lock(),
                    "{}: [{}] {}:{}:{}: {}",
                    MODULE_NAME,
                    level,
                    site.basename(),
                    site.line,
                    site.function,
                    message
                );
            }
        }
    });
}

const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn parse_backend(name: &str) -> Backend {
    let bytes = name.as_bytes();
    if bytes_eq(bytes, b"stdout") {
        Backend::Stdout
    } else if bytes_eq(bytes, b"stderr") {
        Backend::Stderr
    } else if bytes_eq(bytes, b"syslog") {
        panic!("the syslog backend requires runtime configuration; use the default build instead")
    } else {
        panic!("CHKLOG_STATIC_BACKEND must be \"stdout\" or \"stderr\"")
    }
}

const fn parse_level(name: &str) -> Level {
    let bytes = name.as_bytes();
    if bytes_eq(bytes, b"emergency") {
        Level::Emergency
    } else if bytes_eq(bytes, b"alert") {
        Level::Alert
    } else if bytes_eq(bytes, b"critical") {
        Level::Critical
    } else if bytes_eq(bytes, b"error") {
        Level::Error
    } else if bytes_eq(bytes, b"warning") {
        Level::Warning
    } else if bytes_eq(bytes, b"notice") {
        Level::Notice
    } else if bytes_eq(bytes, b"info") {
        Level::Info
    } else if bytes_eq(bytes, b"debug") {
        Level::Debug
    } else {
        panic!("CHKLOG_STATIC_LEVEL must be a lowercase severity level name")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_is_stdout_at_debug() {
        // Only holds when the build did not override the defaults, which is
        // the case for the test profile.
        assert_eq!(MODULE_NAME, "main");
        assert_eq!(BACKEND, Backend::Stdout);
        assert_eq!(INIT_LEVEL, Level::Debug);
    }

    #[test]
    fn set_and_reset_restore_the_compiled_threshold() {
        set_level(Level::Error);
        assert!(!CURRENT.with(|current| current.get()).allows(Level::Info));
        set_level(Level::Warning);
        reset_level();
        assert_eq!(CURRENT.with(|current| current.get()), INIT_LEVEL);
    }

    #[test]
    fn const_parsers_accept_the_console_targets() {
        assert_eq!(parse_backend("stdout"), Backend::Stdout);
        assert_eq!(parse_backend("stderr"), Backend::Stderr);
        assert_eq!(parse_level("warning"), Level::Warning);
        assert_eq!(parse_level("debug"), Level::Debug);
    }
}
