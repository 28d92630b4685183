//! crates/logging/src/site.rs
//! Call-site metadata attached to every log record.

/// Source location of a logging call, captured at compile time by
/// [`source_site!`](crate::source_site).
///
/// The `file` field holds the path as reported by `file!()`; rendering strips
/// everything up to the last path separator so log lines show only the
/// basename.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SourceSite {
    /// Path of the source file containing the call.
    pub file: &'static str,
    /// Line number of the call.
    pub line: u32,
    /// Short name of the enclosing function.
    pub function: &'static str,
}

impl SourceSite {
    /// Returns the file name with any leading path components removed.
    ///
    /// Both `/` and `\` are treated as separators so lines render the same
    /// across platforms.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::SourceSite;
    ///
    /// let site = SourceSite { file: "crates/app/src/main.rs", line: 7, function: "run" };
    /// assert_eq!(site.basename(), "main.rs");
    /// ```
    #[must_use]
    pub fn basename(&self) -> &'static str {
        self.file.rsplit(['/', '\\']).next().unwrap_or(self.file)
    }
}
