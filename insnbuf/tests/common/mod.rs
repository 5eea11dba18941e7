#![allow(dead_code)]

use insnbuf::prelude::*;

pub fn init_logging() {
    env_logger::try_init().ok();
}

const REGS: [&str; 8] = ["eax", "ecx", "edx", "ebx", "esp", "ebp", "esi", "edi"];

fn fill_target(op: &mut Operand, target: u64) -> Result<(), Error> {
    op.set_ascii(&format!("{:#x}", target))?;
    op.set_value(OperandValue::Immediate(Immediate::from_vma(target)));
    op.set_flags(OperandFlags::X | OperandFlags::ADDRESS);
    op.set_data_size(4);
    Ok(())
}

fn push_target(insn: &mut Instruction, target: u64) -> Result<(), Error> {
    let index = match insn.next_avail_op() {
        Some(op) => {
            fill_target(op, target)?;
            insn.commit_next_op()
        }
        None => {
            let mut op = Operand::alloc();
            fill_target(&mut op, target)?;
            insn.add_operand(op).ok()
        }
    };

    if let Some(index) = index {
        insn.set_target(index)?;
    }
    Ok(())
}

fn push_register(insn: &mut Instruction, id: u8) -> Result<(), Error> {
    let name = REGS[id as usize];

    let mut op = Operand::alloc();
    op.set_ascii(name)?;
    op.set_value(OperandValue::Register(Register::new(
        name,
        RegisterFlags::GENERAL,
        id,
        4,
    )));
    op.set_flags(OperandFlags::R);
    op.set_data_size(4);

    if let Ok(index) = insn.add_operand(op) {
        insn.set_src(index)?;
    }
    Ok(())
}

/// Decodes one instruction of a tiny 32-bit x86 subset at `offset`, stage
/// by stage, through the mutation API. Returns the instruction size, or
/// `None` for bytes outside the subset.
pub fn decode_one<'b>(
    insn: &mut Instruction<'b>,
    bytes: &'b [u8],
    offset: usize,
    base: u64,
) -> Result<Option<usize>, Error> {
    insn.clear();

    let rest = &bytes[offset..];
    let vma = base + offset as u64;

    let (size, mnemonic, category) = match rest {
        [0x90, ..] => (1, "nop", InsnCategory::Nop),
        [0xc3, ..] => (1, "ret", InsnCategory::ControlFlow(CflowFlag::Ret)),
        [0x50..=0x57, ..] => (1, "push", InsnCategory::Stack(StackFlag::Push)),
        [0xeb, _, ..] => (2, "jmp", InsnCategory::ControlFlow(CflowFlag::Jmp)),
        [0x74, _, ..] => (2, "je", InsnCategory::ControlFlow(CflowFlag::JmpCc)),
        [0xe8, _, _, _, _, ..] => (5, "call", InsnCategory::ControlFlow(CflowFlag::Call)),
        _ => return Ok(None),
    };

    insn.set_offset(offset as u64);
    insn.set_vma(vma);
    insn.set_size(size as u64);
    insn.set_bytes(&rest[..size]);
    insn.mark(DecodeStatus::BASIC);

    insn.set_mnemonic(mnemonic)?;
    insn.mark(DecodeStatus::MNEMONIC);

    let next = vma + size as u64;
    match rest {
        [op @ 0x50..=0x57, ..] => push_register(insn, op - 0x50)?,
        [0xeb | 0x74, rel, ..] => push_target(insn, next.wrapping_add(*rel as i8 as u64))?,
        [0xe8, a, b, c, d, ..] => {
            let rel = i32::from_le_bytes([*a, *b, *c, *d]);
            push_target(insn, next.wrapping_add(rel as u64))?
        }
        _ => (),
    }
    insn.mark(DecodeStatus::OPERANDS);

    let line = insn.display().to_string();
    let ascii = line.split_once(": ").map(|(_, text)| text).unwrap_or_default();
    insn.set_ascii(ascii)?;

    insn.set_category(category);
    insn.mark(DecodeStatus::MNEMONIC_FLAGS);

    Ok(Some(size))
}

/// push ebp; nop; call +0; je -9; jmp +1; nop; ret
pub const CODE: &[u8] = &[
    0x55, 0x90, 0xe8, 0x00, 0x00, 0x00, 0x00, 0x74, 0xf7, 0xeb, 0x01, 0x90, 0xc3,
];

pub const BASE: u64 = 0x401000;
