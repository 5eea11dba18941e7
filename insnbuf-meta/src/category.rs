use std::fmt;
use std::str::FromStr;

use unicase::UniCase;

use crate::Error;

named_tag! {
    #[derive(Default)]
    pub enum CflowFlag {
        #[default]
        None => "none",
        Call => "call",
        CallCc => "conditional call",
        Jmp => "jump",
        JmpCc => "conditional jump",
        Ret => "return",
    }
}

named_tag! {
    #[derive(Default)]
    pub enum StackFlag {
        #[default]
        None => "none",
        Push => "push",
        Pop => "pop",
        Frame => "enter frame",
        Unframe => "exit frame",
    }
}

named_tag! {
    #[derive(Default)]
    pub enum BitFlag {
        #[default]
        None => "none",
        And => "and",
        Or => "or",
        Xor => "xor",
        Not => "not",
        Lsl => "logical shift left",
        Lsr => "logical shift right",
        Asl => "arithmetic shift left",
        Asr => "arithmetic shift right",
        Rol => "rotate left",
        Ror => "rotate right",
        Rcl => "rotate carry left",
        Rcr => "rotate carry right",
    }
}

named_tag! {
    #[derive(Default)]
    pub enum IoFlag {
        #[default]
        None => "none",
        In => "input",
        Out => "output",
    }
}

named_tag! {
    /// Subset of the instruction set an opcode belongs to.
    #[derive(Default)]
    pub enum IsaSubset {
        #[default]
        General => "general purpose",
        Fpu => "fpu",
        Gpu => "gpu",
        Simd => "simd",
        Vm => "virtualization",
    }
}

/// Category of an instruction opcode.
///
/// Categories with instruction-specific flags carry them, so a flag can
/// only ever be read under the category it belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(serde::Deserialize, serde::Serialize)]
pub enum InsnCategory {
    #[default]
    Unknown,
    ControlFlow(CflowFlag),
    Stack(StackFlag),
    LoadStore,
    Test,
    Math,
    Bit(BitFlag),
    Io(IoFlag),
    Trap,
    Privileged,
    Nop,
}

impl InsnCategory {
    pub const ALL: &'static [InsnCategory] = &[
        Self::Unknown,
        Self::ControlFlow(CflowFlag::None),
        Self::Stack(StackFlag::None),
        Self::LoadStore,
        Self::Test,
        Self::Math,
        Self::Bit(BitFlag::None),
        Self::Io(IoFlag::None),
        Self::Trap,
        Self::Privileged,
        Self::Nop,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::ControlFlow(_) => "control-flow",
            Self::Stack(_) => "stack",
            Self::LoadStore => "load/store",
            Self::Test => "test",
            Self::Math => "mathematic",
            Self::Bit(_) => "bitwise",
            Self::Io(_) => "i/o",
            Self::Trap => "trap",
            Self::Privileged => "privileged",
            Self::Nop => "no-op",
        }
    }

    /// Name of the instruction-specific flag, if the category has one set.
    pub fn flag_name(&self) -> Option<&'static str> {
        match self {
            Self::ControlFlow(flag) if *flag != CflowFlag::None => Some(flag.name()),
            Self::Stack(flag) if *flag != StackFlag::None => Some(flag.name()),
            Self::Bit(flag) if *flag != BitFlag::None => Some(flag.name()),
            Self::Io(flag) if *flag != IoFlag::None => Some(flag.name()),
            _ => None,
        }
    }

    pub fn cflow(&self) -> Option<CflowFlag> {
        if let Self::ControlFlow(flag) = self {
            Some(*flag)
        } else {
            None
        }
    }

    pub fn is_control_flow(&self) -> bool {
        matches!(self, Self::ControlFlow(_))
    }
}

impl fmt::Display for InsnCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InsnCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = UniCase::new(s);
        Self::ALL
            .iter()
            .copied()
            .find(|category| UniCase::new(category.name()) == key)
            .ok_or_else(|| Error::UnknownTag {
                kind: "InsnCategory",
                name: s.to_owned(),
            })
    }
}
