use std::fmt;

use crate::{Error, TextBuffer};

/// Heap text sized to its content; every mutation reallocates to fit.
#[derive(Debug, Default, PartialEq, Eq, Hash)]
pub struct GrowableText(String);

impl GrowableText {
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Independently allocated copy of `text` with no spare capacity.
    pub fn copy_of(text: &str) -> Result<Self, Error> {
        let mut inner = String::new();
        inner
            .try_reserve_exact(text.len())
            .map_err(|_| Error::allocation(text.len()))?;
        inner.push_str(text);
        Ok(Self(inner))
    }

    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TextBuffer for GrowableText {
    fn as_str(&self) -> &str {
        &self.0
    }

    fn limit(&self) -> Option<usize> {
        None
    }

    fn set(&mut self, text: &str) -> Result<usize, Error> {
        *self = Self::copy_of(text)?;
        Ok(text.len())
    }

    fn push(&mut self, text: &str) -> Result<usize, Error> {
        self.0
            .try_reserve_exact(text.len())
            .map_err(|_| Error::allocation(text.len()))?;
        self.0.push_str(text);
        Ok(text.len())
    }

    fn append(&mut self, separator: &str, token: &str) -> Result<usize, Error> {
        if token.is_empty() {
            return Ok(0);
        }

        let separator = if self.0.is_empty() { "" } else { separator };
        let needed = separator.len() + token.len();

        self.0
            .try_reserve_exact(needed)
            .map_err(|_| Error::allocation(needed))?;
        self.0.push_str(separator);
        self.0.push_str(token);

        Ok(needed)
    }

    fn clear(&mut self) {
        self.0.clear()
    }
}

impl fmt::Display for GrowableText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
