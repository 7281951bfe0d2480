//! Hardware Call Stack.
//!
//! This module implements the full-descending hardware stack. It provides:
//! 1. **Storage:** A fixed `STACK_SIZE`-byte region ending just below `STACK_BASE`.
//! 2. **Stack Pointer:** `SP` starts at `STACK_BASE` (empty) and points at the last
//!    occupied byte; a push decrements then stores, a pop loads then increments.
//! 3. **Bounds Checking:** Every push and pop is checked before anything is mutated,
//!    so a faulting instruction leaves `SP` and the stack bytes untouched.
//!
//! Valid `SP` values are `[STACK_BASE - STACK_SIZE, STACK_BASE]`; with the default
//! geometry that is eight 16-bit slots.

use crate::common::SimError;
use crate::common::constants::{STACK_BASE, STACK_SIZE, STACK_SLOT_SIZE};

/// The hardware stack: its backing bytes and the stack pointer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stack {
    bytes: Vec<u8>,
    base: u16,
    sp: u16,
}

impl Stack {
    /// Creates an empty stack whose top is `base` and which holds `size` bytes below it.
    pub fn new(base: u16, size: u16) -> Self {
        Self {
            bytes: vec![0; usize::from(size)],
            base,
            sp: base,
        }
    }

    /// Current stack pointer.
    #[inline]
    pub const fn sp(&self) -> u16 {
        self.sp
    }

    /// Address of the empty-stack position (`STACK_BASE`).
    #[inline]
    pub const fn base(&self) -> u16 {
        self.base
    }

    /// Lowest address the stack may occupy.
    #[inline]
    pub fn floor(&self) -> u16 {
        self.base.wrapping_sub(self.bytes.len() as u16)
    }

    /// Number of bytes currently on the stack.
    #[inline]
    pub fn depth(&self) -> u16 {
        self.base.wrapping_sub(self.sp)
    }

    /// Returns true when nothing has been pushed.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.sp == self.base
    }

    /// Pushes a 16-bit value, low byte first.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::StackOverflow`] when fewer than two free bytes remain.
    pub fn push(&mut self, val: u16) -> Result<(), SimError> {
        let free = self.sp.wrapping_sub(self.floor());
        if free < STACK_SLOT_SIZE {
            return Err(SimError::StackOverflow { sp: self.sp });
        }
        for byte in val.to_le_bytes() {
            self.sp = self.sp.wrapping_sub(1);
            let idx = self.index(self.sp);
            self.bytes[idx] = byte;
        }
        Ok(())
    }

    /// Pops a 16-bit value pushed by [`Stack::push`].
    ///
    /// # Errors
    ///
    /// Returns [`SimError::StackUnderflow`] when fewer than two bytes are on the stack.
    pub fn pop(&mut self) -> Result<u16, SimError> {
        if self.depth() < STACK_SLOT_SIZE {
            return Err(SimError::StackUnderflow { sp: self.sp });
        }
        let mut be = [0u8; 2];
        for byte in &mut be {
            *byte = self.bytes[self.index(self.sp)];
            self.sp = self.sp.wrapping_add(1);
        }
        Ok(u16::from_be_bytes(be))
    }

    /// Iterates over every 2-byte slot of the region from the top down, as `(address, value)`.
    ///
    /// Slots below `SP` hold stale data from earlier pushes (or zero).
    pub fn slots(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        let count = self.capacity() / STACK_SLOT_SIZE;
        (1..=count).map(move |i| {
            let addr = self.base.wrapping_sub(i * STACK_SLOT_SIZE);
            let idx = self.index(addr);
            (addr, u16::from_be_bytes([self.bytes[idx], self.bytes[idx + 1]]))
        })
    }

    /// Restores the empty state and zeroes the backing bytes.
    pub fn reset(&mut self) {
        self.bytes.fill(0);
        self.sp = self.base;
    }

    fn capacity(&self) -> u16 {
        self.bytes.len() as u16
    }

    fn index(&self, addr: u16) -> usize {
        addr.wrapping_sub(self.floor()) as usize
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new(STACK_BASE, STACK_SIZE)
    }
}
