//! crates/logging/src/runtime.rs
//! Runtime-configured logger lifecycle and the render/dispatch pipeline.
//!
//! One logger configuration exists per process. State lives in thread-local
//! storage with no locking: the supported model is single-threaded,
//! synchronous use, matching the rest of the crate's contract. Multi-threaded
//! callers must provide their own serialization and accept that each thread
//! observes its own configuration.

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};

use crate::backend::Backend;
use crate::buffer::MessageBuffer;
use crate::level::Level;
use crate::site::SourceSite;
#[cfg(unix)]
use crate::syslog::SyslogConnection;

/// Module label used when `open` receives an empty name.
pub const DEFAULT_MODULE_NAME: &str = "unnamed module";

/// Maximum stored length of the module label, in bytes.
pub const MODULE_NAME_MAX_LEN: usize = 64;

thread_local! {
    static LOGGER: RefCell<Option<Logger>> = const { RefCell::new(None) };
}

/// Resolved dispatch target for rendered lines.
enum Sink {
    Stdout,
    Stderr,
    Writer(Box<dyn Write>),
    #[cfg(unix)]
    Syslog(SyslogConnection),
    #[cfg(feature = "tracing")]
    Tracing,
}

struct Logger {
    module: String,
    sink: Sink,
    level: Level,
    level_orig: Level,
    buffer: MessageBuffer,
}

impl Logger {
    /// Renders one record and hands it to the sink, applying the threshold
    /// test and the formatting-failure fallback.
    fn write(&mut self, level: Level, site: &SourceSite, args: fmt::Arguments<'_>, format: &str) {
        if !self.level.allows(level) {
            return;
        }
        if self.buffer.render(args).is_err() {
            self.buffer.render_placeholder(format);
        }
        if self.buffer.is_empty() {
            return;
        }
        self.dispatch(level, site);
    }

    fn dispatch(&mut self, level: Level, site: &SourceSite) {
        let message = self.buffer.as_str();
        match &mut self.sink {
            // Console write failures are swallowed: diagnostics are
            // best-effort and must never take the host program down.
            Sink::Stdout => {
                let _ = writeln!(
                    io::stdout().lock(),
                    "{}: [{}] {}:{}:{}: {}",
                    self.module,
                    level,
                    site.basename(),
                    site.line,
                    site.function,
                    message
                );
            }
            Sink::Stderr => {
                let _ = writeln!(
                    io::stderr().lock(),
                    "{}: [{}] {}:{}:{}: {}",
                    self.module,
                    level,
                    site.basename(),
                    site.line,
                    site.function,
                    message
                );
            }
            Sink::Writer(writer) => {
                let _ = writeln!(
                    writer,
                    "{}: [{}] {}:{}:{}: {}",
                    self.module,
                    level,
                    site.basename(),
                    site.line,
                    site.function,
                    message
                );
            }
            // Syslog receives the ident separately at open time, so the line
            // omits the module name.
            #[cfg(unix)]
            Sink::Syslog(connection) => {
                let line = format!(
                    "[{}] {}:{}:{}: {}",
                    level,
                    site.basename(),
                    site.line,
                    site.function,
                    message
                );
                connection.send(level, &line);
            }
            #[cfg(feature = "tracing")]
            Sink::Tracing => crate::tracing_bridge::emit(level, &self.module, site, message),
        }
    }
}

/// Opens the logger with the given backend, threshold, and module label.
///
/// Calling `open` while the logger is already open logs one warning through
/// the existing configuration and changes nothing. An empty module name is
/// replaced with [`DEFAULT_MODULE_NAME`]; longer names are truncated to
/// [`MODULE_NAME_MAX_LEN`] bytes. Backends unavailable on the current
/// platform fall back to [`Backend::Stderr`] with a warning rather than
/// failing.
pub fn open(backend: Backend, level: Level, module_name: &str) {
    // The guard runs before the backend is resolved: a second syslog open
    // would otherwise tear down the live connection when its guard dropped.
    if warn_already_open() {
        return;
    }
    let module = bounded_module_name(module_name);
    let sink = match backend {
        Backend::Stdout => Sink::Stdout,
        Backend::Stderr => Sink::Stderr,
        #[cfg(unix)]
        Backend::Syslog => Sink::Syslog(SyslogConnection::open(&module)),
        #[cfg(not(unix))]
        Backend::Syslog => {
            eprintln!("warning: syslog backend is unavailable on this platform; falling back to stderr");
            Sink::Stderr
        }
        #[cfg(feature = "tracing")]
        Backend::Tracing => Sink::Tracing,
    };
    install(sink, level, module);
}

/// Opens the logger over an arbitrary writer.
///
/// Useful for routing diagnostics into files or capture buffers; lifecycle
/// rules are identical to [`open`].
pub fn open_writer<W>(writer: W, level: Level, module_name: &str)
where
    W: Write + 'static,
{
    if warn_already_open() {
        return;
    }
    let module = bounded_module_name(module_name);
    install(Sink::Writer(Box::new(writer)), level, module);
}

/// Logs the double-open warning through the existing configuration.
///
/// Returns `true` when the logger was already open and the caller must back
/// off.
fn warn_already_open() -> bool {
    LOGGER.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(logger) = slot.as_mut() else {
            return false;
        };
        let existing = logger.module.clone();
        let site = crate::source_site!();
        logger.write(
            Level::Warning,
            &site,
            format_args!("open() called twice in same module, {existing}"),
            "open() called twice in same module, {existing}",
        );
        true
    })
}

fn install(sink: Sink, level: Level, module: String) {
    LOGGER.with(|slot| {
        *slot.borrow_mut() = Some(Logger {
            module,
            sink,
            level,
            level_orig: level,
            buffer: MessageBuffer::new(),
        });
    });
}

/// Closes the logger, detaching the backend and clearing all state.
///
/// Dropping the sink closes the syslog handle when that backend is active.
/// Closing an already-closed logger is a silent no-op.
pub fn close() {
    LOGGER.with(|slot| {
        slot.borrow_mut().take();
    });
}

/// Reports whether the logger is currently open.
#[must_use]
pub fn is_open() -> bool {
    LOGGER.with(|slot| slot.borrow().is_some())
}

/// Replaces the current threshold.
///
/// A no-op while the logger is closed.
pub fn set_level(level: Level) {
    LOGGER.with(|slot| {
        if let Some(logger) = slot.borrow_mut().as_mut() {
            logger.level = level;
        }
    });
}

/// Restores the threshold captured when the logger was opened.
pub fn reset_level() {
    LOGGER.with(|slot| {
        if let Some(logger) = slot.borrow_mut().as_mut() {
            logger.level = logger.level_orig;
        }
    });
}

/// Renders and dispatches one record; the plumbing behind
/// [`log!`](crate::log).
///
/// While the logger is closed this emits a fixed notice on stderr and does
/// nothing else, so misconfigured programs still leave a trace. `format` is
/// the original format string, kept for the formatting-failure placeholder.
pub fn emit(level: Level, site: SourceSite, args: fmt::Arguments<'_>, format: &str) {
    LOGGER.with(|slot| match slot.borrow_mut().as_mut() {
        Some(logger) => logger.write(level, &site, args, format),
        None => {
            eprintln!("error: logger used before open(); message dropped");
        }
    });
}

fn bounded_module_name(module_name: &str) -> String {
    if module_name.is_empty() {
        return DEFAULT_MODULE_NAME.to_string();
    }
    let mut cut = module_name.len().min(MODULE_NAME_MAX_LEN);
    while cut > 0 && !module_name.is_char_boundary(cut) {
        cut -= 1;
    }
    module_name[..cut].to_string()
}
