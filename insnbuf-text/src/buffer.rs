use crate::Error;

/// Common contract of the text storage strategies.
///
/// Every mutator reports how many bytes of the input were stored. Growable
/// buffers store everything or fail with [`Error::Allocation`], leaving the
/// previous content intact; bounded buffers never fail and silently drop
/// whatever does not fit.
pub trait TextBuffer {
    fn as_str(&self) -> &str;

    /// Maximum number of content bytes, `None` if unbounded.
    fn limit(&self) -> Option<usize>;

    fn set(&mut self, text: &str) -> Result<usize, Error>;

    /// Appends `text` without a separator.
    fn push(&mut self, text: &str) -> Result<usize, Error>;

    /// Appends `token`, preceded by `separator` unless the buffer is empty.
    /// Appending an empty token is a no-op.
    fn append(&mut self, separator: &str, token: &str) -> Result<usize, Error>;

    /// Truncates to empty; storage is kept.
    fn clear(&mut self);

    fn len(&self) -> usize {
        self.as_str().len()
    }

    fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

/// Largest index `<= max` that lies on a character boundary of `s`.
pub fn floor_char_boundary(s: &str, max: usize) -> usize {
    if s.len() <= max {
        return s.len();
    }

    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}
