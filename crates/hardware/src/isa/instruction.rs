//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions for 16-bit instruction words, the raw
//! `Decoded` field set, and the classified `Instruction` enum the executor
//! dispatches on.

use crate::common::Reg;

/// Bit shift for the opcode field (bits 12-15).
pub const OPCODE_SHIFT: u16 = 12;
/// Bit mask for the opcode field after shifting.
pub const OPCODE_MASK: u16 = 0xF;
/// Bit position of the immediate-mode flag.
pub const IMM_MODE_SHIFT: u16 = 11;
/// Bit shift for the destination register field (bits 8-10).
pub const RD_SHIFT: u16 = 8;
/// Bit shift for the first source register field (bits 5-7).
pub const RN_SHIFT: u16 = 5;
/// Bit mask for the mode field (bits 0-1).
pub const MODE_MASK: u16 = 0x3;
/// Bit mask for the 8-bit immediate (bits 0-7).
pub const IMM8_MASK: u16 = 0xFF;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the 4-bit opcode (bits 12-15).
    fn opcode(&self) -> u8;

    /// Extracts the immediate-mode flag (bit 11).
    fn immediate_mode(&self) -> bool;

    /// Extracts the destination register (bits 8-10).
    fn rd(&self) -> Reg;

    /// Extracts the first source register (bits 5-7).
    fn rn(&self) -> Reg;

    /// Extracts the second source register (bits 0-2).
    fn rm(&self) -> Reg;

    /// Extracts the 2-bit sub-operation selector (bits 0-1).
    fn mode_bits(&self) -> u8;

    /// Extracts the 8-bit immediate (bits 0-7).
    fn imm8(&self) -> u8;
}

impl InstructionBits for u16 {
    #[inline(always)]
    fn opcode(&self) -> u8 {
        ((self >> OPCODE_SHIFT) & OPCODE_MASK) as u8
    }

    #[inline(always)]
    fn immediate_mode(&self) -> bool {
        (self >> IMM_MODE_SHIFT) & 1 == 1
    }

    #[inline(always)]
    fn rd(&self) -> Reg {
        Reg::from_bits(self >> RD_SHIFT)
    }

    #[inline(always)]
    fn rn(&self) -> Reg {
        Reg::from_bits(self >> RN_SHIFT)
    }

    #[inline(always)]
    fn rm(&self) -> Reg {
        Reg::from_bits(*self)
    }

    #[inline(always)]
    fn mode_bits(&self) -> u8 {
        (self & MODE_MASK) as u8
    }

    #[inline(always)]
    fn imm8(&self) -> u8 {
        (self & IMM8_MASK) as u8
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// Fields overlap in the encoding (`rm`, `mode_bits` and `imm8` share the low
/// bits); which ones are meaningful depends on the opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// The raw instruction word.
    pub raw: u16,
    /// Operation selector (bits 12-15).
    pub opcode: u8,
    /// Register form (`false`) or immediate/special form (`true`).
    pub immediate_mode: bool,
    /// Destination register.
    pub rd: Reg,
    /// First source register.
    pub rn: Reg,
    /// Second source register.
    pub rm: Reg,
    /// Sub-operation selector.
    pub mode_bits: u8,
    /// 8-bit immediate or branch displacement.
    pub imm8: u8,
}

/// Two-operand ALU operations writing `rd` from `rn` and `rm`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// `rn + rm`, full arithmetic flags.
    Add,
    /// `rn - rm`, full arithmetic flags.
    Sub,
    /// `rn * rm` (low 16 bits), logic flags.
    Mul,
    /// `rn & rm`, logic flags.
    And,
    /// `rn | rm`, logic flags.
    Orr,
    /// `rn ^ rm`, logic flags.
    Xor,
}

/// Single-operand operations writing `rd` from `rn`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    /// Bitwise complement, logic flags.
    Not,
    /// Logical shift right by one, logic flags.
    Shr,
    /// Shift left by one, logic flags.
    Shl,
    /// Rotate right by one, flags unchanged.
    Ror,
    /// Rotate left by one, flags unchanged.
    Rol,
}

/// Branch conditions evaluated against the flags register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    /// Always taken (JMP).
    Always,
    /// Taken when `Z` is set (JEQ).
    Equal,
    /// Taken when `S` is set and `Z` is clear (JLT).
    LessThan,
    /// Taken when both `Z` and `S` are clear (JGT).
    GreaterThan,
}

/// A classified instruction, one variant per operation of the ISA.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Debug breakpoint; no state change.
    Nop,
    /// `R[rd] = R[rm]`.
    MovReg {
        /// Destination.
        rd: Reg,
        /// Source.
        rm: Reg,
    },
    /// `R[rd] = imm`.
    MovImm {
        /// Destination.
        rd: Reg,
        /// Zero-extended immediate.
        imm: u8,
    },
    /// `Data[R[rn]] = R[rd]` (low byte).
    Store {
        /// Register holding the value.
        rd: Reg,
        /// Register holding the address.
        rn: Reg,
    },
    /// `R[rn] = imm` (immediate form of STR).
    LoadImm {
        /// Destination.
        rn: Reg,
        /// Zero-extended immediate.
        imm: u8,
    },
    /// `R[rd] = Data[R[rm]]`.
    Load {
        /// Destination.
        rd: Reg,
        /// Register holding the address.
        rm: Reg,
    },
    /// Two-operand ALU operation.
    Alu {
        /// Operation.
        op: AluOp,
        /// Destination.
        rd: Reg,
        /// First operand.
        rn: Reg,
        /// Second operand.
        rm: Reg,
    },
    /// Single-operand ALU operation.
    Unary {
        /// Operation.
        op: UnaryOp,
        /// Destination.
        rd: Reg,
        /// Operand.
        rn: Reg,
    },
    /// Push `R[rn]` onto the hardware stack.
    Push {
        /// Source.
        rn: Reg,
    },
    /// Pop the top of the hardware stack into `R[rd]`.
    Pop {
        /// Destination.
        rd: Reg,
    },
    /// Set flags from `R[rn] - R[rm]` without writing a register.
    Cmp {
        /// First operand.
        rn: Reg,
        /// Second operand.
        rm: Reg,
    },
    /// Conditional PC-relative branch.
    Branch {
        /// Condition on the flags.
        cond: Condition,
        /// Unsigned displacement added to the advanced PC.
        offset: u8,
    },
    /// Stop execution.
    Halt,
    /// Any encoding without a defined meaning; executes as a no-op.
    Unknown(u16),
}
