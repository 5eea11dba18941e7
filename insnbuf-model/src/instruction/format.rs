use std::fmt;

use itertools::Itertools;

use super::Instruction;

pub struct InstructionFormatter<'insn, 'b> {
    insn: &'insn Instruction<'b>,
}

impl<'insn, 'b> InstructionFormatter<'insn, 'b> {
    pub(super) fn new(insn: &'insn Instruction<'b>) -> Self {
        Self { insn }
    }
}

impl<'insn, 'b> fmt::Display for InstructionFormatter<'insn, 'b> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}:", self.insn.vma())?;

        let mnemonic = self.insn.mnemonic().unwrap_or_default();
        if mnemonic.is_empty() {
            // nothing parsed beyond the raw text
            if let Some(ascii) = self.insn.ascii().filter(|ascii| !ascii.is_empty()) {
                write!(f, " {}", ascii.trim())?;
            }
            return Ok(());
        }

        if let Some(prefixes) = self.insn.prefixes().filter(|prefixes| !prefixes.is_empty()) {
            write!(f, " {}", prefixes)?;
        }
        write!(f, " {}", mnemonic)?;

        let operands = self
            .insn
            .operands()
            .map(|operand| operand.ascii())
            .filter(|ascii| !ascii.is_empty())
            .join(", ");

        if !operands.is_empty() {
            write!(f, " {}", operands)?;
        }
        Ok(())
    }
}
