use insnbuf_meta::{FlagNames, OperandCategory, OperandFlags};
use insnbuf_text::{Text, TextBuffer};

use crate::{AbsAddr, AddrExpr, Error, Register};

/// Raw immediate bits; how they are read is up to the consumer (see the
/// `SIGNED` and `ADDRESS` operand flags).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Immediate(u64);

impl Immediate {
    pub fn from_unsigned(value: u64) -> Self {
        Self(value)
    }

    pub fn from_signed(value: i64) -> Self {
        Self(value as u64)
    }

    pub fn from_vma(vma: u64) -> Self {
        Self(vma)
    }

    pub fn unsigned(&self) -> u64 {
        self.0
    }

    pub fn signed(&self) -> i64 {
        self.0 as i64
    }

    pub fn vma(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum OperandValue {
    #[default]
    None,
    Register(Register),
    Expr(AddrExpr),
    Absolute(AbsAddr),
    Immediate(Immediate),
}

impl OperandValue {
    pub fn category(&self) -> OperandCategory {
        match self {
            Self::None => OperandCategory::Unknown,
            Self::Register(_) => OperandCategory::Register,
            Self::Expr(_) => OperandCategory::Expression,
            Self::Absolute(_) => OperandCategory::Absolute,
            Self::Immediate(_) => OperandCategory::Immediate,
        }
    }
}

/// A single instruction argument.
///
/// The textual form is held in a [`Text`] whose strategy is chosen by the
/// constructor: [`Operand::alloc`] owns growable text, while
/// [`Operand::alloc_fixed`] owns a bounded buffer meant to be overwritten
/// in place across a decode loop. [`Operand::dupe`] always yields growable
/// text. Operands are not `Clone`; copy one with `dupe`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Operand {
    ascii: Text,
    flags: OperandFlags,
    value: OperandValue,
    data_size: u8,
}

impl Operand {
    pub fn alloc() -> Self {
        Self::default()
    }

    pub fn alloc_fixed(ascii_sz: usize) -> Result<Self, Error> {
        let ascii = Text::fixed(ascii_sz).map_err(|e| {
            log::debug!("fixed operand allocation failed: {}", e);
            Error::text("operand ascii")(e)
        })?;

        Ok(Self {
            ascii,
            ..Default::default()
        })
    }

    pub fn dupe(&self) -> Result<Self, Error> {
        Ok(Self {
            ascii: self.ascii.snapshot().map_err(Error::text("operand ascii"))?,
            flags: self.flags,
            value: self.value,
            data_size: self.data_size,
        })
    }

    /// Resets everything but the text storage, which is truncated.
    pub fn clear(&mut self) {
        self.ascii.clear();
        self.flags = OperandFlags::empty();
        self.value = OperandValue::None;
        self.data_size = 0;
    }

    pub fn is_fixed_size(&self) -> bool {
        self.ascii.is_fixed()
    }

    pub fn ascii_sz(&self) -> Option<usize> {
        self.ascii.capacity()
    }

    pub fn ascii(&self) -> &str {
        self.ascii.as_str()
    }

    pub fn set_ascii(&mut self, ascii: &str) -> Result<(), Error> {
        self.ascii
            .set(ascii)
            .map_err(Error::text("operand ascii"))?;
        Ok(())
    }

    pub fn category(&self) -> OperandCategory {
        self.value.category()
    }

    pub fn flags(&self) -> OperandFlags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: OperandFlags) {
        self.flags = flags;
    }

    pub fn value(&self) -> &OperandValue {
        &self.value
    }

    pub fn set_value(&mut self, value: OperandValue) {
        self.value = value;
    }

    pub fn register(&self) -> Option<&Register> {
        if let OperandValue::Register(ref register) = self.value {
            Some(register)
        } else {
            None
        }
    }

    pub fn expr(&self) -> Option<&AddrExpr> {
        if let OperandValue::Expr(ref expr) = self.value {
            Some(expr)
        } else {
            None
        }
    }

    pub fn absolute(&self) -> Option<&AbsAddr> {
        if let OperandValue::Absolute(ref addr) = self.value {
            Some(addr)
        } else {
            None
        }
    }

    pub fn immediate(&self) -> Option<Immediate> {
        if let OperandValue::Immediate(imm) = self.value {
            Some(imm)
        } else {
            None
        }
    }

    pub fn data_size(&self) -> u8 {
        self.data_size
    }

    pub fn set_data_size(&mut self, data_size: u8) {
        self.data_size = data_size;
    }

    /// Appends the operand category name to `buf`.
    pub fn cat_str(&self, buf: &mut Text) -> Result<usize, Error> {
        buf.push(self.category().name())
            .map_err(Error::text("operand category string"))
    }

    /// Appends the operand flag names to `buf`, separated by `delim`.
    pub fn flags_str(&self, buf: &mut Text, delim: &str) -> Result<usize, Error> {
        buf.push(&self.flags.join(delim))
            .map_err(Error::text("operand flags string"))
    }
}

#[cfg(test)]
mod test {
    use insnbuf_meta::RegisterFlags;

    use super::*;

    #[test]
    fn test_alloc_is_zeroed() {
        let op = Operand::alloc();
        assert!(!op.is_fixed_size());
        assert_eq!(op.ascii_sz(), None);
        assert_eq!(op.ascii(), "");
        assert_eq!(op.category(), OperandCategory::Unknown);
        assert!(op.flags().is_empty());
        assert_eq!(op.data_size(), 0);
    }

    #[test]
    fn test_fixed_truncates() -> Result<(), Error> {
        let mut op = Operand::alloc_fixed(8)?;
        assert!(op.is_fixed_size());
        assert_eq!(op.ascii_sz(), Some(8));

        op.set_ascii("DWORD PTR [eax]")?;
        assert_eq!(op.ascii(), "DWORD P");

        op.set_ascii("eax")?;
        assert_eq!(op.ascii(), "eax");
        Ok(())
    }

    #[test]
    fn test_alloc_fixed_failure() {
        let err = Operand::alloc_fixed(usize::MAX).unwrap_err();
        assert!(err.is_allocation());
        assert_eq!(
            err,
            Error::Allocation {
                what: "operand ascii",
                requested: usize::MAX
            }
        );
    }

    #[test]
    fn test_growable_replaces() -> Result<(), Error> {
        let mut op = Operand::alloc();
        op.set_ascii("0x401000")?;
        op.set_ascii("QWORD PTR [rip+0x2f0e]")?;
        assert_eq!(op.ascii(), "QWORD PTR [rip+0x2f0e]");
        Ok(())
    }

    #[test]
    fn test_dupe_of_fixed_is_growable() -> Result<(), Error> {
        let eax = Register::new("eax", RegisterFlags::GENERAL, 0, 4);

        let mut op = Operand::alloc_fixed(16)?;
        op.set_ascii("eax")?;
        op.set_value(OperandValue::Register(eax));
        op.set_flags(OperandFlags::R | OperandFlags::W);
        op.set_data_size(4);

        let mut dup = op.dupe()?;
        assert!(!dup.is_fixed_size());
        assert_eq!(dup.ascii(), "eax");
        assert_eq!(dup.register(), Some(&eax));
        assert_eq!(dup.flags(), op.flags());
        assert_eq!(dup.data_size(), 4);
        assert_ne!(dup.ascii().as_ptr(), op.ascii().as_ptr());

        // the snapshot is not bounded by the source capacity
        dup.set_ascii("a text longer than sixteen bytes")?;
        op.clear();
        assert_eq!(dup.ascii(), "a text longer than sixteen bytes");
        assert_eq!(op.ascii(), "");
        assert_eq!(op.category(), OperandCategory::Unknown);
        assert!(op.is_fixed_size());
        Ok(())
    }

    #[test]
    fn test_immediate_views() {
        let mut op = Operand::alloc();
        op.set_value(OperandValue::Immediate(Immediate::from_signed(-1)));

        let imm = op.immediate().unwrap();
        assert_eq!(op.category(), OperandCategory::Immediate);
        assert_eq!(imm.signed(), -1);
        assert_eq!(imm.unsigned(), u64::MAX);
        assert!(op.register().is_none());
    }

    #[test]
    fn test_summary_strings() -> Result<(), Error> {
        let mut op = Operand::alloc();
        op.set_value(OperandValue::Expr(AddrExpr::new()));
        op.set_flags(OperandFlags::R | OperandFlags::ADDRESS);

        let mut buf = Text::growable();
        op.cat_str(&mut buf)?;
        buf.push(" / ").map_err(Error::text("test"))?;
        op.flags_str(&mut buf, ",")?;
        assert_eq!(buf, "address expression / read,address");
        Ok(())
    }
}
