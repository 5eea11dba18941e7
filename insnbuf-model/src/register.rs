use std::fmt;

use arrayvec::ArrayString;

use insnbuf_meta::{FlagNames, RegisterFlags};
use insnbuf_text::{floor_char_boundary, Text, TextBuffer};

use crate::Error;

/// Size of a register name field, including its terminator byte.
pub const REG_NAME_SZ: usize = 16;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct Register {
    name: ArrayString<REG_NAME_SZ>,
    flags: RegisterFlags,
    id: u8,
    size: u8,
}

impl Register {
    /// Names longer than `REG_NAME_SZ - 1` bytes are truncated.
    pub fn new<N>(name: N, flags: RegisterFlags, id: u8, size: u8) -> Self
    where N: AsRef<str> {
        let name = name.as_ref();
        let end = floor_char_boundary(name, REG_NAME_SZ - 1);

        let mut bounded = ArrayString::new();
        bounded.push_str(&name[..end]);

        Self {
            name: bounded,
            flags,
            id,
            size,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn flags(&self) -> RegisterFlags {
        self.flags
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Appends the register classes to `buf`, separated by `delim`.
    pub fn flags_str(&self, buf: &mut Text, delim: &str) -> Result<usize, Error> {
        buf.push(&self.flags.join(delim))
            .map_err(Error::text("register flags string"))
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
