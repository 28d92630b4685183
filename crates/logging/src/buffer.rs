//! crates/logging/src/buffer.rs
//! Bounded, reusable render buffer for formatted messages.

use std::fmt::{self, Write};

/// Maximum rendered length of a single log message, in bytes.
///
/// Messages longer than this are truncated at a character boundary; they are
/// never dropped and never overflow the buffer.
pub const MESSAGE_MAX_LEN: usize = 512;

/// Fixed-capacity message buffer reused across log calls.
///
/// The buffer lives for the duration of a logging session so repeated writes
/// avoid reallocating scratch storage. Writes past [`MESSAGE_MAX_LEN`]
/// truncate rather than error; the payload stays valid UTF-8 because
/// truncation only happens on character boundaries.
#[derive(Clone)]
pub struct MessageBuffer {
    bytes: [u8; MESSAGE_MAX_LEN],
    len: usize,
}

impl MessageBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0; MESSAGE_MAX_LEN],
            len: 0,
        }
    }

    /// Discards any rendered content.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Reports whether the last render produced no output.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the rendered message.
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }

    /// Renders `args` into the buffer, replacing any previous content.
    ///
    /// Truncation is not an error. `Err` is only returned when one of the
    /// formatting trait impls behind `args` itself reports failure; the
    /// buffer content is unspecified in that case and the caller is expected
    /// to fall back to [`render_placeholder`](Self::render_placeholder).
    pub fn render(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        self.clear();
        self.write_fmt(args)
    }

    /// Replaces the buffer content with the recognizable formatting-failure
    /// placeholder, preserving the original format string for forensics.
    pub fn render_placeholder(&mut self, format: &str) {
        self.clear();
        // Writing two plain strings cannot fail.
        let _ = self.write_str("(failed to format message) ");
        let _ = self.write_str(format);
    }
}

impl Default for MessageBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MessageBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageBuffer")
            .field("len", &self.len)
            .field("message", &self.as_str())
            .finish()
    }
}

impl Write for MessageBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let remaining = MESSAGE_MAX_LEN - self.len;
        let mut take = s.len().min(remaining);
        while take > 0 && !s.is_char_boundary(take) {
            take -= 1;
        }
        self.bytes[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Display;

    struct BrokenDisplay;

    impl Display for BrokenDisplay {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn renders_short_messages_verbatim() {
        let mut buffer = MessageBuffer::new();
        buffer
            .render(format_args!("copied {} files", 3))
            .expect("render succeeds");
        assert_eq!(buffer.as_str(), "copied 3 files");
    }

    #[test]
    fn reuse_replaces_previous_content() {
        let mut buffer = MessageBuffer::new();
        buffer.render(format_args!("first")).expect("render");
        buffer.render(format_args!("second")).expect("render");
        assert_eq!(buffer.as_str(), "second");
    }

    #[test]
    fn oversized_messages_truncate_instead_of_overflowing() {
        let mut buffer = MessageBuffer::new();
        let long = "x".repeat(MESSAGE_MAX_LEN * 2);
        buffer.render(format_args!("{long}")).expect("render");
        assert_eq!(buffer.as_str().len(), MESSAGE_MAX_LEN);
        assert!(buffer.as_str().chars().all(|c| c == 'x'));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let mut buffer = MessageBuffer::new();
        // 'é' is two bytes; an odd prefix length forces a boundary adjustment.
        let awkward = format!("{}é", "x".repeat(MESSAGE_MAX_LEN - 1));
        buffer.render(format_args!("{awkward}")).expect("render");
        assert_eq!(buffer.as_str().len(), MESSAGE_MAX_LEN - 1);
        assert!(std::str::from_utf8(buffer.as_str().as_bytes()).is_ok());
    }

    #[test]
    fn empty_render_is_reported_empty() {
        let mut buffer = MessageBuffer::new();
        buffer.render(format_args!("")).expect("render");
        assert!(buffer.is_empty());
    }

    #[test]
    fn broken_display_surfaces_the_error() {
        let mut buffer = MessageBuffer::new();
        assert!(buffer.render(format_args!("{BrokenDisplay}")).is_err());
    }

    #[test]
    fn placeholder_keeps_the_format_string() {
        let mut buffer = MessageBuffer::new();
        buffer.render_placeholder("device {} went away");
        assert_eq!(
            buffer.as_str(),
            "(failed to format message) device {} went away"
        );
    }
}
