use bitflags::bitflags;

use crate::FlagNames;

named_tag! {
    /// Kind of value an operand holds.
    #[derive(Default)]
    pub enum OperandCategory {
        #[default]
        Unknown => "unknown",
        Register => "register",
        Immediate => "immediate",
        Expression => "address expression",
        Absolute => "absolute address",
    }
}

bitflags! {
    #[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[derive(serde::Deserialize, serde::Serialize)]
    pub struct OperandFlags: u8 {
        const R        = 0b0000_0001;
        const W        = 0b0000_0010;
        const X        = 0b0000_0100;
        const SIGNED   = 0b0000_1000;
        const ADDRESS  = 0b0001_0000;
        const INDIRECT = 0b0010_0000;
    }
}

impl FlagNames for OperandFlags {
    const NAMES: &'static [(Self, &'static str)] = &[
        (Self::R, "read"),
        (Self::W, "write"),
        (Self::X, "execute"),
        (Self::SIGNED, "signed"),
        (Self::ADDRESS, "address"),
        (Self::INDIRECT, "indirect"),
    ];

    fn contains_flag(&self, flag: Self) -> bool {
        self.contains(flag)
    }
}
