use std::fmt;

use crate::{floor_char_boundary, Error, TextBuffer};

/// Text with a capacity chosen once at construction.
///
/// One byte of the capacity is reserved for a terminator, so at most
/// `capacity - 1` bytes of content are held. The storage is reserved up
/// front and content never grows past it, so no write reallocates.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct FixedText {
    inner: String,
    capacity: usize,
}

impl FixedText {
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        let mut inner = String::new();
        inner
            .try_reserve_exact(capacity)
            .map_err(|_| Error::allocation(capacity))?;
        Ok(Self { inner, capacity })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.content_limit() - self.inner.len()
    }

    fn content_limit(&self) -> usize {
        self.capacity.saturating_sub(1)
    }

    fn push_bounded(&mut self, text: &str) -> usize {
        let end = floor_char_boundary(text, self.remaining());

        #[cfg(feature = "extra-logging")]
        if end < text.len() {
            log::trace!(
                "truncating {} byte write to {} bytes (capacity {})",
                text.len(),
                end,
                self.capacity
            );
        }

        self.inner.push_str(&text[..end]);
        end
    }
}

impl TextBuffer for FixedText {
    fn as_str(&self) -> &str {
        &self.inner
    }

    fn limit(&self) -> Option<usize> {
        Some(self.content_limit())
    }

    fn set(&mut self, text: &str) -> Result<usize, Error> {
        self.inner.clear();
        Ok(self.push_bounded(text))
    }

    fn push(&mut self, text: &str) -> Result<usize, Error> {
        Ok(self.push_bounded(text))
    }

    fn append(&mut self, separator: &str, token: &str) -> Result<usize, Error> {
        if token.is_empty() {
            return Ok(0);
        }

        if self.inner.is_empty() {
            return Ok(self.push_bounded(token));
        }

        // a lone separator is never left behind
        let room = match self.remaining().checked_sub(separator.len()) {
            Some(room) => room,
            None => return Ok(0),
        };
        if floor_char_boundary(token, room) == 0 {
            return Ok(0);
        }

        self.inner.push_str(separator);
        Ok(separator.len() + self.push_bounded(token))
    }

    fn clear(&mut self) {
        self.inner.clear()
    }
}

impl fmt::Display for FixedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}
