use std::fmt;

use smallvec::SmallVec;

use crate::Operand;

/// Operand storage of an instruction. Its length is the number of allocated
/// slots; a slot is `None` until an operand is placed in it.
pub type OperandSlots = SmallVec<[Option<Operand>; 4]>;

/// Position of an operand within its instruction.
///
/// References are plain indices, so growing the operand collection never
/// invalidates them; they are checked against the decoded operand count
/// when set and when resolved.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OperandRef(pub(crate) usize);

impl OperandRef {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for OperandRef {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for OperandRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
