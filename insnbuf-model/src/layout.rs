/// Buffer sizes for a fixed-capacity instruction.
///
/// A decode loop builds one instruction from a layout and reuses it for
/// every instruction it decodes; text written past a capacity is truncated.
/// Missing fields take their default when deserialised.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct FixedLayout {
    /// capacity of the raw text and the comment
    pub ascii_sz: usize,
    /// capacity of the mnemonic; the prefix buffer is four times as large
    pub mnemonic_sz: usize,
    /// operands constructed up front
    pub num_operands: usize,
    /// text capacity of each pre-built operand
    pub op_ascii_sz: usize,
}

impl Default for FixedLayout {
    fn default() -> Self {
        Self {
            ascii_sz: 128,
            mnemonic_sz: 16,
            num_operands: 4,
            op_ascii_sz: 64,
        }
    }
}

impl FixedLayout {
    pub fn new(ascii_sz: usize, mnemonic_sz: usize, num_operands: usize, op_ascii_sz: usize) -> Self {
        Self {
            ascii_sz,
            mnemonic_sz,
            num_operands,
            op_ascii_sz,
        }
    }

    pub fn ascii_sz(self, ascii_sz: usize) -> Self {
        Self { ascii_sz, ..self }
    }

    pub fn mnemonic_sz(self, mnemonic_sz: usize) -> Self {
        Self { mnemonic_sz, ..self }
    }

    pub fn num_operands(self, num_operands: usize) -> Self {
        Self { num_operands, ..self }
    }

    pub fn op_ascii_sz(self, op_ascii_sz: usize) -> Self {
        Self { op_ascii_sz, ..self }
    }

    pub fn prefix_sz(&self) -> usize {
        prefix_size(self.mnemonic_sz)
    }
}

/// Capacity of the prefix buffer for a mnemonic capacity; room for several
/// space separated prefix tokens.
pub const fn prefix_size(mnemonic_sz: usize) -> usize {
    mnemonic_sz.saturating_mul(4)
}
