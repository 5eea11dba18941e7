use bitflags::bitflags;

use crate::FlagNames;

bitflags! {
    /// Register class; a register may belong to several classes at once.
    #[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[derive(serde::Deserialize, serde::Serialize)]
    pub struct RegisterFlags: u16 {
        const GENERAL = 0b0000_0000_0000_0001;
        const FPU     = 0b0000_0000_0000_0010;
        const GPU     = 0b0000_0000_0000_0100;
        const SIMD    = 0b0000_0000_0000_1000;
        const TASK    = 0b0000_0000_0001_0000;
        const MEMORY  = 0b0000_0000_0010_0000;
        const DEBUG   = 0b0000_0000_0100_0000;
        const PC      = 0b0000_0000_1000_0000;
        const FLAGS   = 0b0000_0001_0000_0000;
        const STACK   = 0b0000_0010_0000_0000;
        const FRAME   = 0b0000_0100_0000_0000;
        const SEGMENT = 0b0000_1000_0000_0000;
        const ZERO    = 0b0001_0000_0000_0000;
        const IN      = 0b0010_0000_0000_0000;
        const OUT     = 0b0100_0000_0000_0000;
    }
}

impl FlagNames for RegisterFlags {
    const NAMES: &'static [(Self, &'static str)] = &[
        (Self::GENERAL, "general purpose"),
        (Self::FPU, "fpu"),
        (Self::GPU, "gpu"),
        (Self::SIMD, "simd"),
        (Self::TASK, "task mgt"),
        (Self::MEMORY, "memory mgt"),
        (Self::DEBUG, "debug"),
        (Self::PC, "pc"),
        (Self::FLAGS, "flags"),
        (Self::STACK, "stack pointer"),
        (Self::FRAME, "frame pointer"),
        (Self::SEGMENT, "segment"),
        (Self::ZERO, "zero"),
        (Self::IN, "argument in"),
        (Self::OUT, "argument out"),
    ];

    fn contains_flag(&self, flag: Self) -> bool {
        self.contains(flag)
    }
}
