use bitflags::bitflags;

use insnbuf_meta::ShiftKind;
use insnbuf_text::{Text, TextBuffer};

use crate::{Error, Register};

/// A `segment:offset` address.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct AbsAddr {
    pub segment: Register,
    pub offset: u64,
}

impl AbsAddr {
    pub fn new(segment: Register, offset: u64) -> Self {
        Self { segment, offset }
    }
}

bitflags! {
    /// Elements present in an address expression.
    #[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct AddrExprElements: u8 {
        const BASE     = 0b0000_0001;
        const INDEX    = 0b0000_0010;
        const DISP     = 0b0000_0100;
        const DISP_U   = 0b0000_1000;
        const DISP_S   = 0b0001_0000;
        const DISP_ABS = 0b0010_0000;
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[derive(serde::Deserialize, serde::Serialize)]
pub enum Displacement {
    Unsigned(u64),
    Signed(i32),
    Absolute(AbsAddr),
}

/// An effective address: `segment:[base + index * scale + displacement]`.
///
/// Every part is optional. The element mask is derived from the parts that
/// are present, so at most one displacement form is ever valid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct AddrExpr {
    shift: ShiftKind,
    scale: i8,
    base: Option<Register>,
    index: Option<Register>,
    displacement: Option<Displacement>,
}

impl Default for AddrExpr {
    fn default() -> Self {
        Self {
            shift: ShiftKind::default(),
            scale: 1,
            base: None,
            index: None,
            displacement: None,
        }
    }
}

impl AddrExpr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(self, base: Register) -> Self {
        Self { base: Some(base), ..self }
    }

    pub fn with_index(self, index: Register, scale: i8) -> Self {
        Self { index: Some(index), scale, ..self }
    }

    pub fn with_shift(self, shift: ShiftKind) -> Self {
        Self { shift, ..self }
    }

    pub fn with_displacement(self, displacement: Displacement) -> Self {
        Self { displacement: Some(displacement), ..self }
    }

    pub fn elements(&self) -> AddrExprElements {
        let mut elements = AddrExprElements::empty();

        elements.set(AddrExprElements::BASE, self.base.is_some());
        elements.set(AddrExprElements::INDEX, self.index.is_some());

        match self.displacement {
            Some(Displacement::Unsigned(_)) => {
                elements |= AddrExprElements::DISP | AddrExprElements::DISP_U
            }
            Some(Displacement::Signed(_)) => {
                elements |= AddrExprElements::DISP | AddrExprElements::DISP_S
            }
            Some(Displacement::Absolute(_)) => {
                elements |= AddrExprElements::DISP | AddrExprElements::DISP_ABS
            }
            None => (),
        }

        elements
    }

    pub fn shift(&self) -> ShiftKind {
        self.shift
    }

    pub fn scale(&self) -> i8 {
        self.scale
    }

    pub fn base(&self) -> Option<&Register> {
        self.base.as_ref()
    }

    pub fn index(&self) -> Option<&Register> {
        self.index.as_ref()
    }

    pub fn displacement(&self) -> Option<&Displacement> {
        self.displacement.as_ref()
    }

    /// Appends the name of the shift operation to `buf`.
    pub fn shift_str(&self, buf: &mut Text) -> Result<usize, Error> {
        buf.push(self.shift.name())
            .map_err(Error::text("shift string"))
    }
}
