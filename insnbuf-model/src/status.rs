use bitflags::bitflags;

bitflags! {
    /// Which decode stages have populated an instruction.
    ///
    /// Stages are independent bits rather than a linear progression; check
    /// the bits covering the fields you read. The empty set is the invalid,
    /// not-yet-decoded state.
    #[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct DecodeStatus: u8 {
        /// ascii, offset, vma, size and bytes
        const BASIC          = 0b0000_0001;
        /// mnemonic and prefixes
        const MNEMONIC       = 0b0000_0010;
        /// operand list and target/dest/src
        const OPERANDS       = 0b0000_0100;
        /// instruction category and flags
        const MNEMONIC_FLAGS = 0b0000_1000;
        /// operand categories and flags
        const OPERAND_FLAGS  = 0b0001_0000;
    }
}

impl DecodeStatus {
    pub const INVALID: Self = Self::empty();

    pub fn is_invalid(&self) -> bool {
        self.is_empty()
    }
}
