pub use insnbuf_meta as meta;
pub use insnbuf_model as model;
pub use insnbuf_text as text;

pub mod prelude;

pub use insnbuf_model::{DecodeStatus, FixedLayout, Instruction, Operand, OperandRef};
