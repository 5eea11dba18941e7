use std::fmt;

use crate::{Error, FixedText, GrowableText, TextBuffer};

/// Text field of an instruction or operand.
///
/// The storage strategy is picked by the constructor and cannot be changed
/// afterwards; every mutation dispatches to it.
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum Text {
    Growable(GrowableText),
    Fixed(FixedText),
}

impl Default for Text {
    fn default() -> Self {
        Self::growable()
    }
}

impl Text {
    pub fn growable() -> Self {
        Self::Growable(GrowableText::new())
    }

    pub fn fixed(capacity: usize) -> Result<Self, Error> {
        FixedText::with_capacity(capacity).map(Self::Fixed)
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    /// Capacity of a fixed buffer, including the terminator byte.
    pub fn capacity(&self) -> Option<usize> {
        if let Self::Fixed(text) = self {
            Some(text.capacity())
        } else {
            None
        }
    }

    /// Independently owned growable copy sized to the current content,
    /// whatever the strategy of `self`.
    pub fn snapshot(&self) -> Result<Text, Error> {
        GrowableText::copy_of(self.as_str()).map(Self::Growable)
    }

    fn inner(&self) -> &dyn TextBuffer {
        match self {
            Self::Growable(text) => text,
            Self::Fixed(text) => text,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn TextBuffer {
        match self {
            Self::Growable(text) => text,
            Self::Fixed(text) => text,
        }
    }
}

impl TextBuffer for Text {
    fn as_str(&self) -> &str {
        self.inner().as_str()
    }

    fn limit(&self) -> Option<usize> {
        self.inner().limit()
    }

    fn set(&mut self, text: &str) -> Result<usize, Error> {
        self.inner_mut().set(text)
    }

    fn push(&mut self, text: &str) -> Result<usize, Error> {
        self.inner_mut().push(text)
    }

    fn append(&mut self, separator: &str, token: &str) -> Result<usize, Error> {
        self.inner_mut().append(separator, token)
    }

    fn clear(&mut self) {
        self.inner_mut().clear()
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&'_ str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
