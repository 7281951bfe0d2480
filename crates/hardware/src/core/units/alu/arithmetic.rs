//! ALU arithmetic operations.
//!
//! Implements 16-bit addition, subtraction and multiplication. All results wrap
//! modulo 2^16. Addition and subtraction report unsigned carry/borrow and signed
//! overflow; multiplication clears both.

use super::AluResult;
use crate::core::arch::Flags;
use crate::core::arch::flags::SIGN_BIT;

/// Adds two words, returning the wrapped sum and its flags.
///
/// `C` is set on unsigned carry out of bit 15; `O` is set when both operands share
/// a sign that differs from the sign of the sum.
#[inline]
pub const fn add(a: u16, b: u16) -> (u16, Flags) {
    let (result, carry) = a.overflowing_add(b);
    let overflow = (a ^ result) & (b ^ result) & SIGN_BIT != 0;
    (result, Flags::from_result(result, carry, overflow))
}

/// Subtracts `b` from `a`, returning the wrapped difference and its flags.
///
/// `C` is the borrow (`a < b` unsigned); `O` is set when the operands have different
/// signs and the result's sign differs from `a`.
#[inline]
pub const fn sub(a: u16, b: u16) -> (u16, Flags) {
    let (result, borrow) = a.overflowing_sub(b);
    let overflow = (a ^ b) & (a ^ result) & SIGN_BIT != 0;
    (result, Flags::from_result(result, borrow, overflow))
}

/// Multiplies two words, keeping the low 16 bits; `C = O = 0`.
#[inline]
pub const fn mul(a: u16, b: u16) -> AluResult {
    let value = a.wrapping_mul(b);
    AluResult::with_flags(value, Flags::logic(value))
}
