pub use insnbuf_meta::{
    BitFlag, CflowFlag, FlagNames, InsnCategory, IoFlag, IsaSubset, OperandCategory,
    OperandFlags, RegisterFlags, ShiftKind, StackFlag,
};
pub use insnbuf_model::{
    AbsAddr, AddOperandError, AddrExpr, AddrExprElements, DecodeStatus, Displacement, Error,
    FixedLayout, Immediate, Instruction, Operand, OperandRef, OperandValue, Register,
    prefix_size,
};
pub use insnbuf_text::{Text, TextBuffer};
