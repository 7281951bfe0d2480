//! # Instruction Decode Tests
//!
//! Field extraction and classification over the 16-bit encoding space.

use proptest::prelude::*;
use rstest::rstest;
use sim16_core::common::Reg;
use sim16_core::isa::decode::{decode, decode_instruction};
use sim16_core::isa::instruction::{AluOp, Condition, Instruction, InstructionBits, UnaryOp};

const fn r(n: u16) -> Reg {
    Reg::from_bits(n)
}

#[test]
fn field_extraction() {
    // 0100 1 011 101 00110
    let word: u16 = 0b0100_1011_1010_0110;
    let d = decode(word);
    assert_eq!(d.raw, word);
    assert_eq!(d.opcode, 0x4);
    assert!(d.immediate_mode);
    assert_eq!(d.rd, r(3));
    assert_eq!(d.rn, r(5));
    assert_eq!(d.rm, r(6));
    assert_eq!(d.mode_bits, 0b10);
    assert_eq!(d.imm8, 0xA6);
    assert_eq!(word.opcode(), d.opcode);
}

#[rstest]
#[case::nop(0x0000, Instruction::Nop)]
#[case::nop_ignores_registers(0x0700, Instruction::Nop)]
#[case::push(0x0021, Instruction::Push { rn: r(1) })]
#[case::pop(0x0202, Instruction::Pop { rd: r(2) })]
#[case::cmp(0x0023, Instruction::Cmp { rn: r(1), rm: r(3) })]
#[case::jmp(0x0804, Instruction::Branch { cond: Condition::Always, offset: 0x04 })]
#[case::jeq(0x0809, Instruction::Branch { cond: Condition::Equal, offset: 0x09 })]
#[case::jlt(0x08FE, Instruction::Branch { cond: Condition::LessThan, offset: 0xFE })]
#[case::jgt(0x0803, Instruction::Branch { cond: Condition::GreaterThan, offset: 0x03 })]
#[case::mov_reg(0x1402, Instruction::MovReg { rd: r(4), rm: r(2) })]
#[case::mov_imm(0x1905, Instruction::MovImm { rd: r(1), imm: 0x05 })]
#[case::str(0x2140, Instruction::Store { rd: r(1), rn: r(2) })]
#[case::str_imm(0x2845, Instruction::LoadImm { rn: r(2), imm: 0x45 })]
#[case::ldr(0x3302, Instruction::Load { rd: r(3), rm: r(2) })]
#[case::add(0x4143, Instruction::Alu { op: AluOp::Add, rd: r(1), rn: r(2), rm: r(3) })]
#[case::add_ignores_i_bit(0x4943, Instruction::Alu { op: AluOp::Add, rd: r(1), rn: r(2), rm: r(3) })]
#[case::sub(0x5000, Instruction::Alu { op: AluOp::Sub, rd: r(0), rn: r(0), rm: r(0) })]
#[case::mul(0x6000, Instruction::Alu { op: AluOp::Mul, rd: r(0), rn: r(0), rm: r(0) })]
#[case::and(0x7000, Instruction::Alu { op: AluOp::And, rd: r(0), rn: r(0), rm: r(0) })]
#[case::orr(0x8000, Instruction::Alu { op: AluOp::Orr, rd: r(0), rn: r(0), rm: r(0) })]
#[case::not(0x9120, Instruction::Unary { op: UnaryOp::Not, rd: r(1), rn: r(1) })]
#[case::xor(0xA000, Instruction::Alu { op: AluOp::Xor, rd: r(0), rn: r(0), rm: r(0) })]
#[case::shr(0xB000, Instruction::Unary { op: UnaryOp::Shr, rd: r(0), rn: r(0) })]
#[case::shl(0xC000, Instruction::Unary { op: UnaryOp::Shl, rd: r(0), rn: r(0) })]
#[case::ror(0xD000, Instruction::Unary { op: UnaryOp::Ror, rd: r(0), rn: r(0) })]
#[case::rol(0xE000, Instruction::Unary { op: UnaryOp::Rol, rd: r(0), rn: r(0) })]
#[case::halt(0xFFFF, Instruction::Halt)]
#[case::halt_any_registers(0xF803, Instruction::Halt)]
#[case::control_without_i(0xF003, Instruction::Unknown(0xF003))]
#[case::control_other_mode(0xF802, Instruction::Unknown(0xF802))]
fn classification(#[case] word: u16, #[case] expected: Instruction) {
    assert_eq!(decode_instruction(word), expected);
}

proptest! {
    #[test]
    fn decode_is_total_and_deterministic(word in any::<u16>()) {
        let first = decode_instruction(word);
        prop_assert_eq!(first, decode_instruction(word));
        prop_assert_eq!(decode(word).raw, word);
    }

    #[test]
    fn only_one_family_is_unknown(word in any::<u16>()) {
        if let Instruction::Unknown(raw) = decode_instruction(word) {
            prop_assert_eq!(raw, word);
            prop_assert_eq!(word >> 12, 0xF);
        }
    }
}
