#[macro_use]
mod macros;

pub mod category;
pub use category::{BitFlag, CflowFlag, InsnCategory, IoFlag, IsaSubset, StackFlag};

pub mod error;
pub use error::Error;

pub mod flags;
pub use flags::FlagNames;

pub mod operand;
pub use operand::{OperandCategory, OperandFlags};

pub mod register;
pub use register::RegisterFlags;

pub mod shift;
pub use shift::ShiftKind;
