use thiserror::Error;

use crate::operand::Operand;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("could not allocate {requested} units for {what}")]
    Allocation { what: &'static str, requested: usize },
    #[error("operand #{index} is not one of the {count} decoded operands")]
    InvalidOperand { index: usize, count: usize },
}

impl Error {
    pub(crate) fn text(what: &'static str) -> impl FnOnce(insnbuf_text::Error) -> Self {
        move |e| Self::Allocation {
            what,
            requested: e.requested(),
        }
    }

    pub fn is_allocation(&self) -> bool {
        matches!(self, Self::Allocation { .. })
    }
}

/// An operand that could not be appended to an instruction. The operand is
/// handed back untouched.
#[derive(Debug, Error)]
#[error("operand not appended: {source}")]
pub struct AddOperandError {
    operand: Operand,
    source: Error,
}

impl AddOperandError {
    pub(crate) fn new(operand: Operand, source: Error) -> Self {
        Self { operand, source }
    }

    pub fn error(&self) -> &Error {
        &self.source
    }

    pub fn into_operand(self) -> Operand {
        self.operand
    }
}
