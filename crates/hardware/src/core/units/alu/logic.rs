//! ALU logical operations.
//!
//! Implements bitwise AND, OR, XOR and complement. Each sets `Z` and `S` from
//! the result and clears `C` and `O`.

use super::AluResult;
use crate::core::arch::Flags;

const fn logic_result(value: u16) -> AluResult {
    AluResult::with_flags(value, Flags::logic(value))
}

/// Bitwise AND.
pub const fn and(a: u16, b: u16) -> AluResult {
    logic_result(a & b)
}

/// Bitwise OR.
pub const fn orr(a: u16, b: u16) -> AluResult {
    logic_result(a | b)
}

/// Bitwise exclusive OR.
pub const fn xor(a: u16, b: u16) -> AluResult {
    logic_result(a ^ b)
}

/// Bitwise complement.
pub const fn not(a: u16) -> AluResult {
    logic_result(!a)
}
