//! Instruction Decoder.
//!
//! This module handles the decoding of 16-bit instruction words. Decoding is two
//! steps, both pure and total over all 65536 words:
//! 1. **Field extraction:** `decode` splits a word into a `Decoded` field set.
//! 2. **Classification:** `Instruction::from(Decoded)` maps the fields onto one
//!    variant per operation, with `Instruction::Unknown` for every other encoding.

use crate::isa::instruction::{
    AluOp, Condition, Decoded, Instruction, InstructionBits, UnaryOp,
};
use crate::isa::opcodes;

/// Decodes a 16-bit instruction word into its component fields.
///
/// # Arguments
///
/// * `word` - The raw instruction encoding.
///
/// # Returns
///
/// A `Decoded` struct carrying every field; which ones are meaningful depends on the opcode.
#[inline]
pub fn decode(word: u16) -> Decoded {
    Decoded {
        raw: word,
        opcode: word.opcode(),
        immediate_mode: word.immediate_mode(),
        rd: word.rd(),
        rn: word.rn(),
        rm: word.rm(),
        mode_bits: word.mode_bits(),
        imm8: word.imm8(),
    }
}

/// Decodes and classifies a 16-bit instruction word in one step.
#[inline]
pub fn decode_instruction(word: u16) -> Instruction {
    Instruction::from(decode(word))
}

impl Condition {
    /// Maps the 2-bit branch mode field onto a condition.
    pub const fn from_mode(mode: u8) -> Self {
        match mode & 0b11 {
            opcodes::COND_ALWAYS => Self::Always,
            opcodes::COND_EQ => Self::Equal,
            opcodes::COND_LT => Self::LessThan,
            _ => Self::GreaterThan,
        }
    }
}

impl From<Decoded> for Instruction {
    fn from(d: Decoded) -> Self {
        let alu = |op| Self::Alu {
            op,
            rd: d.rd,
            rn: d.rn,
            rm: d.rm,
        };
        let unary = |op| Self::Unary {
            op,
            rd: d.rd,
            rn: d.rn,
        };

        match d.opcode {
            opcodes::OP_SYSTEM if d.immediate_mode => Self::Branch {
                cond: Condition::from_mode(d.mode_bits),
                offset: d.imm8,
            },
            opcodes::OP_SYSTEM => match d.mode_bits {
                opcodes::MODE_NOP => Self::Nop,
                opcodes::MODE_PUSH => Self::Push { rn: d.rn },
                opcodes::MODE_POP => Self::Pop { rd: d.rd },
                _ => Self::Cmp { rn: d.rn, rm: d.rm },
            },
            opcodes::OP_MOV if d.immediate_mode => Self::MovImm {
                rd: d.rd,
                imm: d.imm8,
            },
            opcodes::OP_MOV => Self::MovReg { rd: d.rd, rm: d.rm },
            opcodes::OP_STR if d.immediate_mode => Self::LoadImm {
                rn: d.rn,
                imm: d.imm8,
            },
            opcodes::OP_STR => Self::Store { rd: d.rd, rn: d.rn },
            opcodes::OP_LDR => Self::Load { rd: d.rd, rm: d.rm },
            opcodes::OP_ADD => alu(AluOp::Add),
            opcodes::OP_SUB => alu(AluOp::Sub),
            opcodes::OP_MUL => alu(AluOp::Mul),
            opcodes::OP_AND => alu(AluOp::And),
            opcodes::OP_ORR => alu(AluOp::Orr),
            opcodes::OP_XOR => alu(AluOp::Xor),
            opcodes::OP_NOT => unary(UnaryOp::Not),
            opcodes::OP_SHR => unary(UnaryOp::Shr),
            opcodes::OP_SHL => unary(UnaryOp::Shl),
            opcodes::OP_ROR => unary(UnaryOp::Ror),
            opcodes::OP_ROL => unary(UnaryOp::Rol),
            opcodes::OP_CONTROL if d.immediate_mode && d.mode_bits == opcodes::MODE_HALT => {
                Self::Halt
            }
            _ => Self::Unknown(d.raw),
        }
    }
}
