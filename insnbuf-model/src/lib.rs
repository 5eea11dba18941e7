pub mod address;
pub use address::{AbsAddr, AddrExpr, AddrExprElements, Displacement};

pub mod error;
pub use error::{AddOperandError, Error};

pub mod instruction;
pub use instruction::{Instruction, InstructionFormatter, OperandRef, OperandSlots};

pub mod layout;
pub use layout::{prefix_size, FixedLayout};

pub mod operand;
pub use operand::{Immediate, Operand, OperandValue};

pub mod register;
pub use register::{Register, REG_NAME_SZ};

pub mod status;
pub use status::DecodeStatus;

pub use insnbuf_meta as meta;
pub use insnbuf_text as text;
