//! crates/logging/src/macros.rs
//! Call-site macros: message logging plus source-location capture.

/// Logs a formatted message at the given level.
///
/// The call site's file, line, and function are captured automatically and
/// attached to the record. Whether the message is emitted depends on the
/// current threshold; the format arguments are always evaluated, so guard
/// expensive arguments with [`Level::allows`](crate::Level::allows) or a
/// conditional wrapper when that matters.
///
/// # Examples
///
/// ```no_run
/// use logging::{log, Backend, Level};
///
/// logging::open(Backend::Stdout, Level::Info, "demo");
/// log!(Level::Info, "loaded {} rules", 3);
/// logging::close();
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::emit(
            $level,
            $crate::source_site!(),
            ::core::format_args!($fmt $(, $arg)*),
            $fmt,
        )
    };
}

/// Debug twin of [`log!`]: present only when debug assertions are enabled.
///
/// In release builds the expansion is empty and the arguments are not
/// compiled into the disabled path, so side-effecting argument expressions
/// never run there.
#[macro_export]
macro_rules! debug_log {
    ($($args:tt)*) => {{
        #[cfg(debug_assertions)]
        {
            $crate::log!($($args)*);
        }
    }};
}

/// Captures the current [`SourceSite`](crate::SourceSite).
///
/// Expands to a struct literal built from `file!()`, `line!()`, and
/// [`function_name!`](crate::function_name), making the triple available at
/// compile time.
#[macro_export]
macro_rules! source_site {
    () => {
        $crate::SourceSite {
            file: ::core::file!(),
            line: ::core::line!(),
            function: $crate::function_name!(),
        }
    };
}

/// Resolves to the short name of the enclosing function.
///
/// Works by asking the compiler for the type name of a local item and
/// trimming it down to the final path segment, the closest stable equivalent
/// of C's `__func__`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn anchor() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = type_name_of(anchor);
        let name = name.strip_suffix("::anchor").unwrap_or(name);
        name.rsplit("::").next().unwrap_or(name)
    }};
}
