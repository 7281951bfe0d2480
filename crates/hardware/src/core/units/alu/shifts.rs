//! ALU shift and rotate operations.
//!
//! All operations move by exactly one bit position. Shifts are logical
//! (zero-fill) and set `Z`/`S` with `C = O = 0`; rotates carry no defined
//! flag effect and leave the flags unchanged.

use super::AluResult;
use crate::core::arch::Flags;

/// Logical shift right by one.
pub const fn shr(a: u16) -> AluResult {
    let value = a >> 1;
    AluResult::with_flags(value, Flags::logic(value))
}

/// Shift left by one; bit 15 is discarded.
pub const fn shl(a: u16) -> AluResult {
    let value = a << 1;
    AluResult::with_flags(value, Flags::logic(value))
}

/// Rotate right by one.
pub const fn ror(a: u16) -> AluResult {
    AluResult::without_flags(a.rotate_right(1))
}

/// Rotate left by one.
pub const fn rol(a: u16) -> AluResult {
    AluResult::without_flags(a.rotate_left(1))
}
