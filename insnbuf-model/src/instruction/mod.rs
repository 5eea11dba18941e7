use std::iter;

use itertools::Itertools;

use insnbuf_meta::{CflowFlag, InsnCategory, IsaSubset};
use insnbuf_text::{GrowableText, Text, TextBuffer};

use crate::error::AddOperandError;
use crate::{DecodeStatus, Error, FixedLayout, Operand};

pub mod format;
pub use format::InstructionFormatter;

pub mod operands;
pub use operands::{OperandRef, OperandSlots};

/// A decoded instruction.
///
/// Which fields are meaningful depends on [`Instruction::status`]: the
/// decoder sets one bit per completed stage and readers must check the
/// bits covering the fields they use.
///
/// Two construction strategies exist. [`Instruction::alloc`] produces an
/// instruction whose text fields are allocated on first use and grow to
/// fit. [`Instruction::alloc_fixed`] pre-sizes every text field and
/// pre-builds its operands so that a decode loop can [`clear`] and refill
/// it without allocating; text that does not fit is truncated. Use
/// [`Instruction::dupe`] to keep a decoded instruction past the next reuse
/// of such a buffer.
///
/// `bytes` borrows the caller's input and is never copied.
///
/// [`clear`]: Instruction::clear
#[derive(Debug, Default)]
pub struct Instruction<'b> {
    status: DecodeStatus,
    ascii: Option<Text>,

    offset: u64,
    vma: u64,
    size: u64,
    bytes: &'b [u8],

    num_prefixes: usize,
    prefixes: Option<Text>,

    mnemonic: Option<Text>,
    category: InsnCategory,
    isa: IsaSubset,
    comment: Option<Text>,

    operands: OperandSlots,
    num_operands: usize,

    target: Option<OperandRef>,
    dest: Option<OperandRef>,
    src: Option<OperandRef>,

    layout: Option<FixedLayout>,
}

fn fixed_text(capacity: usize, what: &'static str) -> Result<Option<Text>, Error> {
    Text::fixed(capacity).map(Some).map_err(Error::text(what))
}

fn snapshot(field: &Option<Text>, what: &'static str) -> Result<Option<Text>, Error> {
    field
        .as_ref()
        .map(|text| text.snapshot().map_err(Error::text(what)))
        .transpose()
}

fn assign(field: &mut Option<Text>, text: &str) -> Result<usize, insnbuf_text::Error> {
    match field {
        Some(buf) => buf.set(text),
        None => {
            *field = Some(Text::Growable(GrowableText::copy_of(text)?));
            Ok(text.len())
        }
    }
}

fn append(field: &mut Option<Text>, separator: &str, token: &str) -> Result<usize, insnbuf_text::Error> {
    match field {
        Some(buf) => buf.append(separator, token),
        None if token.is_empty() => Ok(0),
        None => {
            *field = Some(Text::Growable(GrowableText::copy_of(token)?));
            Ok(token.len())
        }
    }
}

impl<'b> Instruction<'b> {
    /// Creates an instruction with `num_operands` empty operand slots.
    /// No text field is allocated.
    pub fn alloc(num_operands: usize) -> Result<Self, Error> {
        let mut operands = OperandSlots::new();
        operands
            .try_reserve_exact(num_operands)
            .map_err(|_| Error::Allocation {
                what: "operand slots",
                requested: num_operands,
            })?;
        operands.extend(iter::repeat_with(|| None).take(num_operands));

        Ok(Self {
            operands,
            ..Default::default()
        })
    }

    /// Creates an instruction for use as a reusable decode buffer.
    pub fn alloc_fixed(
        ascii_sz: usize,
        mnemonic_sz: usize,
        num_operands: usize,
        op_ascii_sz: usize,
    ) -> Result<Self, Error> {
        Self::alloc_fixed_with(&FixedLayout::new(
            ascii_sz,
            mnemonic_sz,
            num_operands,
            op_ascii_sz,
        ))
    }

    pub fn alloc_fixed_with(layout: &FixedLayout) -> Result<Self, Error> {
        Self::build_fixed(layout).map_err(|e| {
            log::debug!("fixed instruction allocation failed: {}", e);
            e
        })
    }

    fn build_fixed(layout: &FixedLayout) -> Result<Self, Error> {
        let mut insn = Self::alloc(layout.num_operands)?;

        insn.ascii = fixed_text(layout.ascii_sz, "instruction ascii")?;
        insn.prefixes = fixed_text(layout.prefix_sz(), "prefixes")?;
        insn.mnemonic = fixed_text(layout.mnemonic_sz, "mnemonic")?;
        insn.comment = fixed_text(layout.ascii_sz, "comment")?;

        for slot in insn.operands.iter_mut() {
            *slot = Some(Operand::alloc_fixed(layout.op_ascii_sz)?);
        }

        insn.layout = Some(*layout);
        Ok(insn)
    }

    /// Deep copy into independently owned, growable storage sized to the
    /// content of `self`.
    ///
    /// Only the decoded operands are copied, and `target`, `dest` and `src`
    /// refer to the copies. The byte slice is shared with `self`.
    pub fn dupe(&self) -> Result<Instruction<'b>, Error> {
        self.build_dupe().map_err(|e| {
            log::debug!("instruction duplication failed: {}", e);
            e
        })
    }

    fn build_dupe(&self) -> Result<Instruction<'b>, Error> {
        let mut dup = Self::alloc(self.num_operands)?;

        dup.status = self.status;
        dup.offset = self.offset;
        dup.vma = self.vma;
        dup.size = self.size;
        dup.bytes = self.bytes;
        dup.category = self.category;
        dup.isa = self.isa;

        dup.ascii = snapshot(&self.ascii, "instruction ascii")?;
        if self.prefixes.is_some() {
            dup.prefixes = snapshot(&self.prefixes, "prefixes")?;
            dup.num_prefixes = self.num_prefixes;
        }
        dup.mnemonic = snapshot(&self.mnemonic, "mnemonic")?;
        dup.comment = snapshot(&self.comment, "comment")?;

        for (slot, operand) in dup.operands.iter_mut().zip(self.operands()) {
            *slot = Some(operand.dupe()?);
            dup.num_operands += 1;
        }

        dup.target = dup.valid_ref(self.target);
        dup.dest = dup.valid_ref(self.dest);
        dup.src = dup.valid_ref(self.src);

        Ok(dup)
    }

    /// Returns the instruction to the not-yet-decoded state for reuse.
    ///
    /// Text is truncated, not released, and allocated operands stay in
    /// their slots.
    pub fn clear(&mut self) {
        #[cfg(feature = "extra-logging")]
        log::trace!("clearing instruction at {:#x}", self.vma);

        self.status = DecodeStatus::INVALID;

        for text in [
            &mut self.ascii,
            &mut self.prefixes,
            &mut self.mnemonic,
            &mut self.comment,
        ]
        .into_iter()
        .flatten()
        {
            text.clear();
        }

        self.num_prefixes = 0;
        self.num_operands = 0;
        self.category = InsnCategory::Unknown;
        self.isa = IsaSubset::General;

        self.target = None;
        self.dest = None;
        self.src = None;
    }

    pub fn status(&self) -> DecodeStatus {
        self.status
    }

    pub fn set_status(&mut self, status: DecodeStatus) {
        self.status = status;
    }

    /// Records the completion of one or more decode stages.
    pub fn mark(&mut self, stages: DecodeStatus) {
        self.status |= stages;
    }

    pub fn is_fixed_size(&self) -> bool {
        self.layout.is_some()
    }

    pub fn layout(&self) -> Option<&FixedLayout> {
        self.layout.as_ref()
    }

    pub fn ascii_sz(&self) -> Option<usize> {
        self.layout.map(|layout| layout.ascii_sz)
    }

    pub fn mnemonic_sz(&self) -> Option<usize> {
        self.layout.map(|layout| layout.mnemonic_sz)
    }

    pub fn ascii(&self) -> Option<&str> {
        self.ascii.as_ref().map(Text::as_str)
    }

    pub fn set_ascii(&mut self, ascii: &str) -> Result<(), Error> {
        assign(&mut self.ascii, ascii).map_err(Error::text("instruction ascii"))?;
        Ok(())
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: u64) {
        self.offset = offset;
    }

    pub fn vma(&self) -> u64 {
        self.vma
    }

    pub fn set_vma(&mut self, vma: u64) {
        self.vma = vma;
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn set_size(&mut self, size: u64) {
        self.size = size;
    }

    pub fn bytes(&self) -> &'b [u8] {
        self.bytes
    }

    pub fn set_bytes(&mut self, bytes: &'b [u8]) {
        self.bytes = bytes;
    }

    pub fn num_prefixes(&self) -> usize {
        self.num_prefixes
    }

    pub fn prefixes(&self) -> Option<&str> {
        self.prefixes.as_ref().map(Text::as_str)
    }

    /// Appends a prefix token, space separated, and counts it.
    ///
    /// A fixed instruction keeps what fits of the token; a token of which
    /// nothing could be stored is not counted.
    pub fn add_prefix(&mut self, prefix: &str) -> Result<(), Error> {
        let appended = append(&mut self.prefixes, " ", prefix).map_err(Error::text("prefixes"))?;
        if appended > 0 {
            self.num_prefixes += 1;
        }
        Ok(())
    }

    pub fn mnemonic(&self) -> Option<&str> {
        self.mnemonic.as_ref().map(Text::as_str)
    }

    pub fn set_mnemonic(&mut self, mnemonic: &str) -> Result<(), Error> {
        assign(&mut self.mnemonic, mnemonic).map_err(Error::text("mnemonic"))?;
        Ok(())
    }

    pub fn category(&self) -> InsnCategory {
        self.category
    }

    pub fn set_category(&mut self, category: InsnCategory) {
        self.category = category;
    }

    pub fn isa(&self) -> IsaSubset {
        self.isa
    }

    pub fn set_isa(&mut self, isa: IsaSubset) {
        self.isa = isa;
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_ref().map(Text::as_str)
    }

    /// Appends to the comment; entries are separated by `;`, or by a space
    /// in a fixed instruction.
    pub fn add_comment(&mut self, comment: &str) -> Result<(), Error> {
        let separator = if self.is_fixed_size() { " " } else { ";" };
        append(&mut self.comment, separator, comment).map_err(Error::text("comment"))?;
        Ok(())
    }

    pub fn num_operands(&self) -> usize {
        self.num_operands
    }

    pub fn alloc_operands(&self) -> usize {
        self.operands.len()
    }

    /// The decoded operands, in insertion order.
    pub fn operands(&self) -> impl Iterator<Item = &Operand> + '_ {
        self.operands[..self.num_operands].iter().flatten()
    }

    pub fn operand(&self, index: usize) -> Option<&Operand> {
        if index < self.num_operands {
            self.operands[index].as_ref()
        } else {
            None
        }
    }

    pub fn operand_mut(&mut self, index: usize) -> Option<&mut Operand> {
        if index < self.num_operands {
            self.operands[index].as_mut()
        } else {
            None
        }
    }

    /// Moves `operand` into the next free slot.
    ///
    /// Free slots are reused without allocating; an operand pre-built in
    /// the slot is released. With no free slot the collection grows by
    /// exactly one. If that fails the instruction is unchanged and the
    /// operand is returned inside the error.
    pub fn add_operand(&mut self, operand: Operand) -> Result<OperandRef, AddOperandError> {
        let index = self.num_operands;

        if index < self.operands.len() {
            #[cfg(feature = "extra-logging")]
            if self.operands[index].is_some() {
                log::trace!("replacing pre-built operand in slot {}", index);
            }

            self.operands[index] = Some(operand);
            self.num_operands += 1;
            return Ok(OperandRef(index));
        }

        if self.operands.try_reserve_exact(1).is_err() {
            log::debug!("could not grow operand slots beyond {}", self.operands.len());
            return Err(AddOperandError::new(
                operand,
                Error::Allocation {
                    what: "operand slots",
                    requested: self.operands.len() + 1,
                },
            ));
        }

        self.operands.push(Some(operand));
        self.num_operands += 1;

        Ok(OperandRef(index))
    }

    /// The pre-built operand of the next free slot, cleared for reuse, or
    /// `None` if that slot is empty or does not exist.
    ///
    /// Call [`Instruction::commit_next_op`] once it is filled in.
    pub fn next_avail_op(&mut self) -> Option<&mut Operand> {
        let operand = self.operands.get_mut(self.num_operands)?.as_mut()?;
        operand.clear();
        Some(operand)
    }

    /// Counts the operand of the next free slot as decoded.
    pub fn commit_next_op(&mut self) -> Option<OperandRef> {
        let index = self.num_operands;
        self.operands.get(index)?.as_ref()?;
        self.num_operands += 1;
        Some(OperandRef(index))
    }

    fn valid_ref(&self, operand: Option<OperandRef>) -> Option<OperandRef> {
        operand.filter(|operand| operand.index() < self.num_operands)
    }

    fn check_ref(&self, operand: OperandRef) -> Result<Option<OperandRef>, Error> {
        if operand.index() < self.num_operands {
            Ok(Some(operand))
        } else {
            Err(Error::InvalidOperand {
                index: operand.index(),
                count: self.num_operands,
            })
        }
    }

    /// The branch target operand.
    pub fn target(&self) -> Option<&Operand> {
        self.target.and_then(|operand| self.operand(operand.index()))
    }

    pub fn target_ref(&self) -> Option<OperandRef> {
        self.valid_ref(self.target)
    }

    pub fn set_target(&mut self, target: OperandRef) -> Result<(), Error> {
        self.target = self.check_ref(target)?;
        Ok(())
    }

    /// The destination operand.
    pub fn dest(&self) -> Option<&Operand> {
        self.dest.and_then(|operand| self.operand(operand.index()))
    }

    pub fn dest_ref(&self) -> Option<OperandRef> {
        self.valid_ref(self.dest)
    }

    pub fn set_dest(&mut self, dest: OperandRef) -> Result<(), Error> {
        self.dest = self.check_ref(dest)?;
        Ok(())
    }

    /// The source operand.
    pub fn src(&self) -> Option<&Operand> {
        self.src.and_then(|operand| self.operand(operand.index()))
    }

    pub fn src_ref(&self) -> Option<OperandRef> {
        self.valid_ref(self.src)
    }

    pub fn set_src(&mut self, src: OperandRef) -> Result<(), Error> {
        self.src = self.check_ref(src)?;
        Ok(())
    }

    /// True if the instruction has a branch target: every call and jump,
    /// conditional or not.
    ///
    /// Only meaningful once [`Instruction::has_branch_info`] holds; this is
    /// not checked.
    pub fn is_branch(&self) -> bool {
        matches!(
            self.category,
            InsnCategory::ControlFlow(
                CflowFlag::Call | CflowFlag::CallCc | CflowFlag::Jmp | CflowFlag::JmpCc
            )
        )
    }

    /// True unless execution never continues with the next instruction,
    /// i.e. for anything but an unconditional jump or a return. Without
    /// category information the answer is true.
    pub fn fallthrough(&self) -> bool {
        !matches!(
            self.category,
            InsnCategory::ControlFlow(CflowFlag::Ret | CflowFlag::Jmp)
        )
    }

    /// Whether the decoder has provided what [`Instruction::is_branch`]
    /// relies on.
    pub fn has_branch_info(&self) -> bool {
        self.status
            .contains(DecodeStatus::OPERANDS | DecodeStatus::MNEMONIC_FLAGS)
    }

    /// Appends the ISA subset name to `buf`.
    pub fn isa_str(&self, buf: &mut Text) -> Result<usize, Error> {
        buf.push(self.isa.name()).map_err(Error::text("isa string"))
    }

    /// Appends the category name to `buf`.
    pub fn cat_str(&self, buf: &mut Text) -> Result<usize, Error> {
        buf.push(self.category.name())
            .map_err(Error::text("category string"))
    }

    /// Appends the category specific flag names to `buf`, separated by
    /// `delim`; nothing if the category has none set.
    pub fn flags_str(&self, buf: &mut Text, delim: &str) -> Result<usize, Error> {
        buf.push(&self.category.flag_name().into_iter().join(delim))
            .map_err(Error::text("flags string"))
    }

    pub fn display<'insn>(&'insn self) -> InstructionFormatter<'insn, 'b> {
        InstructionFormatter::new(self)
    }
}
