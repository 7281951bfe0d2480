//! Instruction Disassembler.
//!
//! Converts a 16-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing, the `disasm` CLI command, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use sim16_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x4123), "add r1, r1, r3");
//! assert_eq!(disassemble(0xFFFF), "halt");
//! ```

use crate::isa::decode::decode_instruction;
use crate::isa::instruction::{AluOp, Condition, Instruction, UnaryOp};

/// Returns the mnemonic for a two-operand ALU operation.
const fn alu_mnemonic(op: AluOp) -> &'static str {
    match op {
        AluOp::Add => "add",
        AluOp::Sub => "sub",
        AluOp::Mul => "mul",
        AluOp::And => "and",
        AluOp::Orr => "orr",
        AluOp::Xor => "xor",
    }
}

/// Returns the mnemonic for a single-operand operation.
const fn unary_mnemonic(op: UnaryOp) -> &'static str {
    match op {
        UnaryOp::Not => "not",
        UnaryOp::Shr => "shr",
        UnaryOp::Shl => "shl",
        UnaryOp::Ror => "ror",
        UnaryOp::Rol => "rol",
    }
}

/// Returns the mnemonic for a branch condition.
const fn branch_mnemonic(cond: Condition) -> &'static str {
    match cond {
        Condition::Always => "jmp",
        Condition::Equal => "jeq",
        Condition::LessThan => "jlt",
        Condition::GreaterThan => "jgt",
    }
}

/// Formats an already-classified instruction.
pub fn format_instruction(inst: &Instruction) -> String {
    match *inst {
        Instruction::Nop => "nop".to_string(),
        Instruction::MovReg { rd, rm } => format!("mov {rd}, {rm}"),
        Instruction::MovImm { rd, imm } => format!("mov {rd}, #{imm:#04x}"),
        Instruction::Store { rd, rn } => format!("str {rd}, [{rn}]"),
        Instruction::LoadImm { rn, imm } => format!("str {rn}, #{imm:#04x}"),
        Instruction::Load { rd, rm } => format!("ldr {rd}, [{rm}]"),
        Instruction::Alu { op, rd, rn, rm } => {
            format!("{} {rd}, {rn}, {rm}", alu_mnemonic(op))
        }
        Instruction::Unary { op, rd, rn } => format!("{} {rd}, {rn}", unary_mnemonic(op)),
        Instruction::Push { rn } => format!("push {rn}"),
        Instruction::Pop { rd } => format!("pop {rd}"),
        Instruction::Cmp { rn, rm } => format!("cmp {rn}, {rm}"),
        Instruction::Branch { cond, offset } => {
            format!("{} +{offset:#04x}", branch_mnemonic(cond))
        }
        Instruction::Halt => "halt".to_string(),
        Instruction::Unknown(raw) => format!(".word {raw:#06x}"),
    }
}

/// Disassembles a 16-bit instruction word into a human-readable string.
///
/// Returns a mnemonic like `"add r1, r2, r3"`, or `".word 0x...."` for
/// encodings without a defined meaning.
///
/// # Arguments
///
/// * `word` - The raw 16-bit instruction encoding.
pub fn disassemble(word: u16) -> String {
    format_instruction(&decode_instruction(word))
}
