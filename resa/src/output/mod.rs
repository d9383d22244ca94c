//! Report text production.
//!
//! All human-readable summaries are produced through [`ReportBuffer`], a
//! bounded text sink: output never exceeds the chosen capacity and is
//! always well-formed UTF-8, even when truncated mid-report.

pub mod reports;

use std::fmt;

/// A bounded text sink for report output.
///
/// Writing past the capacity silently truncates at the last `char`
/// boundary that fits and latches the [`truncated`](Self::truncated) flag;
/// later writes are ignored. The accumulated text is always valid UTF-8.
///
/// # Examples
///
/// ```
/// use std::fmt::Write as _;
/// use resa::ReportBuffer;
///
/// let mut buf = ReportBuffer::new(10);
/// let _ = write!(buf, "0123456789abcdef");
///
/// assert_eq!(buf.as_str(), "0123456789");
/// assert!(buf.truncated());
/// ```
#[derive(Debug, Clone)]
pub struct ReportBuffer {
    text: String,
    capacity: usize,
    truncated: bool,
}

impl ReportBuffer {
    /// Creates a buffer bounded to `capacity` bytes.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            text: String::new(),
            capacity,
            truncated: false,
        }
    }

    /// Returns the accumulated text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the buffer, returning the accumulated text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Returns the byte capacity of the buffer.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns whether the buffer holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns whether any output was dropped for lack of capacity.
    #[must_use]
    pub const fn truncated(&self) -> bool {
        self.truncated
    }
}

impl fmt::Write for ReportBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }
        let remaining = self.capacity - self.text.len();
        if s.len() <= remaining {
            self.text.push_str(s);
        } else {
            let mut cut = remaining;
            while cut > 0 && !s.is_char_boundary(cut) {
                cut -= 1;
            }
            self.text.push_str(&s[..cut]);
            self.truncated = true;
        }
        Ok(())
    }
}
