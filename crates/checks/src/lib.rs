#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `checks` fuses the work an error path usually does (test a condition,
//! log a message, record a status code, and leave the routine) into single
//! macro invocations, keeping the happy path free of error
//! plumbing. All logging goes through the [`logging`] crate; this crate adds
//! no state of its own.
//!
//! # Design
//!
//! The status variable is caller-owned: the macros assign it but never
//! allocate or manage it. Control transfer comes in two flavors:
//!
//! - [`check!`] returns early from the enclosing routine, which therefore
//!   must return the status type; destructors run on the way out, so RAII
//!   resources unwind exactly as a dedicated cleanup section would.
//! - [`check_to!`] breaks out of a caller-defined labeled block, giving a
//!   routine several distinct cleanup regions for staged resource
//!   acquisition. A missing label is a compile error.
//!
//! Condition-false invocations are complete no-ops: the status expression and
//! the message arguments are not evaluated.
//!
//! Every macro has a `debug_`-prefixed twin that expands to nothing, with
//! its arguments not even compiled, unless debug assertions are enabled.
//!
//! # Examples
//!
//! ```
//! use checks::{check, check_continue};
//! use logging::Level;
//!
//! const STATUS_NO_INPUT: i32 = 3;
//! const STATUS_PARTIAL: i32 = 23;
//!
//! fn transfer(inputs: &[&str], skipped: usize) -> i32 {
//!     let mut status = 0;
//!     check!(status, inputs.is_empty(), STATUS_NO_INPUT, Level::Error,
//!            "nothing to transfer");
//!     check_continue!(status, skipped > 0, STATUS_PARTIAL, Level::Warning,
//!                     "skipped {} entries", skipped);
//!     status
//! }
//!
//! assert_eq!(transfer(&[], 0), STATUS_NO_INPUT);
//! assert_eq!(transfer(&["a"], 2), STATUS_PARTIAL);
//! assert_eq!(transfer(&["a"], 0), 0);
//! ```

#[doc(hidden)]
pub use ::logging;

/// Checks an error condition; on failure logs, records the status, and
/// returns early.
///
/// When `cond` is true this logs the formatted message at `level`, assigns
/// `new_status` to the caller-owned `status` variable, and returns `status`
/// from the enclosing routine. The routine's return type must be the status
/// type; the compiler rejects call sites where that does not hold, which is
/// the point: a check with nowhere to deliver its status is a bug.
///
/// When `cond` is false nothing happens and none of the remaining arguments
/// are evaluated.
///
/// Note the polarity: the condition describes the *error* case, not the
/// invariant being asserted.
///
/// # Examples
///
/// ```
/// use checks::check;
/// use logging::Level;
///
/// fn parse_port(raw: &str) -> i32 {
///     let mut status = 0;
///     check!(status, raw.is_empty(), 1, Level::Error, "empty port argument");
///     status
/// }
///
/// assert_eq!(parse_port(""), 1);
/// assert_eq!(parse_port("873"), 0);
/// ```
#[macro_export]
macro_rules! check {
    ($status:ident, $cond:expr, $new:expr, $level:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        if $cond {
            $crate::logging::log!($level, $fmt $(, $arg)*);
            $status = $new;
            return $status;
        }
    };
}

/// [`check!`] with a caller-chosen recovery label instead of an early return.
///
/// On failure this logs, assigns `new_status`, then `break`s out of the
/// labeled block named at the call site. Nesting labeled blocks gives a
/// routine one cleanup region per acquisition stage, each unwinding only
/// what its stage acquired.
///
/// Release builds may flag labels whose only exits sit inside
/// `debug_check_to!` twins as unused; an `#[allow(unused_labels)]` on the
/// routine keeps those call sites tidy.
///
/// # Examples
///
/// ```
/// use checks::check_to;
/// use logging::Level;
///
/// fn staged(fail_late: bool) -> i32 {
///     let mut status = 0;
///     'ingest: {
///         check_to!('ingest, status, false, 10, Level::Error, "ingest failed");
///         'publish: {
///             check_to!('publish, status, fail_late, 20, Level::Error, "publish failed");
///             return status; // both stages succeeded
///         }
///         // publish-stage cleanup would run here
///     }
///     // ingest-stage cleanup would run here
///     status
/// }
///
/// assert_eq!(staged(true), 20);
/// assert_eq!(staged(false), 0);
/// ```
#[macro_export]
macro_rules! check_to {
    ($label:lifetime, $status:ident, $cond:expr, $new:expr, $level:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        if $cond {
            $crate::logging::log!($level, $fmt $(, $arg)*);
            $status = $new;
            break $label;
        }
    };
}

/// [`check!`] without the control transfer: log, record the status, carry on.
///
/// For conditions worth recording that do not abort the current routine,
/// such as per-item failures in a batch.
#[macro_export]
macro_rules! check_continue {
    ($status:ident, $cond:expr, $new:expr, $level:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        if $cond {
            $crate::logging::log!($level, $fmt $(, $arg)*);
            $status = $new;
        }
    };
}

/// Logs the message only when `cond` is true; no status, no control transfer.
///
/// The message arguments are not evaluated when the condition is false.
#[macro_export]
macro_rules! log_if {
    ($cond:expr, $level:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        if $cond {
            $crate::logging::log!($level, $fmt $(, $arg)*);
        }
    };
}

/// Runtime assertion that logs through the configured backend before acting.
///
/// When `cond` is false this emits two Emergency records, one naming the
/// failed condition verbatim and one with the caller's message, and then
/// panics, provided debug assertions are enabled. When they are disabled the
/// panic is skipped and one further Alert record notes that execution
/// continues despite the failed assertion; callers opting into that build
/// mode accept "logged but not enforced" semantics.
///
/// # Examples
///
/// ```
/// use checks::rt_assert;
///
/// let table_len = 8;
/// rt_assert!(table_len.is_power_of_two(), "lookup table must stay a power of two");
/// ```
#[macro_export]
macro_rules! rt_assert {
    ($cond:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        if !$cond {
            $crate::logging::log!(
                $crate::logging::Level::Emergency,
                "rt_assert!({}) failed!",
                ::core::stringify!($cond)
            );
            $crate::logging::log!($crate::logging::Level::Emergency, $fmt $(, $arg)*);
            if ::core::cfg!(debug_assertions) {
                ::core::panic!("assertion failed: {}", ::core::stringify!($cond));
            }
            $crate::logging::log!(
                $crate::logging::Level::Alert,
                "debug assertions are disabled, so continuing despite failed assertion"
            );
        }
    };
}

/// Compile-time assertion with no runtime footprint.
///
/// The condition must be evaluable in a const context; a false condition
/// fails the build. Usable both at item position and inside function bodies.
///
/// # Examples
///
/// ```
/// use checks::ct_assert;
///
/// ct_assert!(u32::BITS == 32);
///
/// fn f() {
///     ct_assert!(core::mem::size_of::<u64>() == 8);
/// }
/// ```
#[macro_export]
macro_rules! ct_assert {
    ($cond:expr $(,)?) => {
        const _: () = ::core::assert!($cond);
    };
}

/// Debug twin of [`check!`]; a complete no-op unless debug assertions are on.
#[macro_export]
macro_rules! debug_check {
    ($($args:tt)*) => {{
        #[cfg(debug_assertions)]
        {
            $crate::check!($($args)*);
        }
    }};
}

/// Debug twin of [`check_to!`]; a complete no-op unless debug assertions are
/// on.
#[macro_export]
macro_rules! debug_check_to {
    ($($args:tt)*) => {{
        #[cfg(debug_assertions)]
        {
            $crate::check_to!($($args)*);
        }
    }};
}

/// Debug twin of [`check_continue!`]; a complete no-op unless debug
/// assertions are on.
#[macro_export]
macro_rules! debug_check_continue {
    ($($args:tt)*) => {{
        #[cfg(debug_assertions)]
        {
            $crate::check_continue!($($args)*);
        }
    }};
}

/// Debug twin of [`log_if!`]; a complete no-op unless debug assertions are
/// on.
#[macro_export]
macro_rules! debug_log_if {
    ($($args:tt)*) => {{
        #[cfg(debug_assertions)]
        {
            $crate::log_if!($($args)*);
        }
    }};
}

/// Debug twin of [`rt_assert!`]; a complete no-op unless debug assertions
/// are on.
#[macro_export]
macro_rules! debug_rt_assert {
    ($($args:tt)*) => {{
        #[cfg(debug_assertions)]
        {
            $crate::rt_assert!($($args)*);
        }
    }};
}

/// Debug twin of [`ct_assert!`]; checked only when debug assertions are on.
#[macro_export]
macro_rules! debug_ct_assert {
    ($cond:expr $(,)?) => {
        #[cfg(debug_assertions)]
        const _: () = ::core::assert!($cond);
    };
}
