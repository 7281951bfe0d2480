//! Status Flags Register.
//!
//! This module implements the four condition codes of the machine. It performs:
//! 1. **Storage:** Carry, Overflow, Zero and Sign as independent booleans.
//! 2. **Packing:** Conversion to and from the one-byte status register layout.
//! 3. **Derivation:** Building a complete flag set from an ALU result, so flags are
//!    always replaced wholesale and never partially updated.

use std::fmt;

/// Status-register bit for Carry.
pub const FLAG_C: u8 = 0x1;
/// Status-register bit for Overflow.
pub const FLAG_O: u8 = 0x2;
/// Status-register bit for Zero.
pub const FLAG_Z: u8 = 0x4;
/// Status-register bit for Sign.
pub const FLAG_S: u8 = 0x8;

/// Most-significant bit of a 16-bit word; the Sign flag mirrors it.
pub const SIGN_BIT: u16 = 0x8000;

/// The condition codes consumed by conditional branches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Flags {
    /// Unsigned carry out of an addition, or borrow of a subtraction.
    pub carry: bool,
    /// Signed overflow of an addition or subtraction.
    pub overflow: bool,
    /// Result was zero.
    pub zero: bool,
    /// Bit 15 of the result was set.
    pub sign: bool,
}

impl Flags {
    /// Builds a complete flag set from a result and explicit carry/overflow bits.
    ///
    /// `Z` and `S` are derived from `result`; `S` is its most-significant bit.
    pub const fn from_result(result: u16, carry: bool, overflow: bool) -> Self {
        Self {
            carry,
            overflow,
            zero: result == 0,
            sign: result & SIGN_BIT != 0,
        }
    }

    /// Builds the flag set used by logical operations: `Z` and `S` from `result`, `C = O = 0`.
    pub const fn logic(result: u16) -> Self {
        Self::from_result(result, false, false)
    }

    /// Packs the flags into the status-register byte layout.
    pub const fn bits(self) -> u8 {
        let mut bits = 0;
        if self.carry {
            bits |= FLAG_C;
        }
        if self.overflow {
            bits |= FLAG_O;
        }
        if self.zero {
            bits |= FLAG_Z;
        }
        if self.sign {
            bits |= FLAG_S;
        }
        bits
    }

    /// Unpacks a status-register byte; unused high bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            carry: bits & FLAG_C != 0,
            overflow: bits & FLAG_O != 0,
            zero: bits & FLAG_Z != 0,
            sign: bits & FLAG_S != 0,
        }
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[C:{} Ov:{} Z:{} S:{}]",
            u8::from(self.carry),
            u8::from(self.overflow),
            u8::from(self.zero),
            u8::from(self.sign)
        )
    }
}
