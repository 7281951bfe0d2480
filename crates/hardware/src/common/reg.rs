//! Register File.
//!
//! This module provides the `RegisterFile` struct and the `Reg` index type. It provides:
//! 1. **Storage:** Eight independent 16-bit registers (`R0`-`R7`).
//! 2. **Safe Indexing:** `Reg` can only hold a 3-bit index, so every access is in bounds.
//! 3. **Observability:** Iteration in index order for the state reporter.

use std::fmt;

use crate::common::constants::{NUM_REGS, REG_INDEX_MASK};

/// A register index in the range 0-7.
///
/// Construction masks the value to three bits, matching how the decoder extracts
/// register fields from an instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reg(u8);

impl Reg {
    /// All eight registers in index order.
    pub const ALL: [Self; NUM_REGS] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
    ];

    /// Builds a register index from the low three bits of `bits`.
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self((bits & REG_INDEX_MASK) as u8)
    }

    /// Builds a register index, returning `None` when `idx` is not 0-7.
    pub const fn new(idx: usize) -> Option<Self> {
        if idx < NUM_REGS {
            Some(Self(idx as u8))
        } else {
            None
        }
    }

    /// The numeric index (0-7).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// Eight 16-bit general-purpose registers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u16; NUM_REGS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    #[inline]
    pub const fn read(&self, reg: Reg) -> u16 {
        self.regs[reg.index()]
    }

    /// Writes a register.
    #[inline]
    pub fn write(&mut self, reg: Reg, val: u16) {
        self.regs[reg.index()] = val;
    }

    /// Iterates over `(register, value)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Reg, u16)> + '_ {
        Reg::ALL.into_iter().map(|r| (r, self.read(r)))
    }
}
