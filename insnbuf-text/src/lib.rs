pub mod buffer;
pub use buffer::{floor_char_boundary, TextBuffer};

pub mod error;
pub use error::Error;

pub mod fixed;
pub use fixed::FixedText;

pub mod growable;
pub use growable::GrowableText;

pub mod text;
pub use text::Text;
