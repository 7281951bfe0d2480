//! Flat byte-addressable memory.
//!
//! Both the instruction memory and the data memory are 64 KiB arrays indexed by a
//! 16-bit address, so every address produced by the machine is in bounds by
//! construction. Multi-byte accesses are little-endian and wrap at the top of the
//! address space.

use crate::common::constants::MEM_SIZE;

/// A 64 KiB byte-addressable memory.
#[derive(Clone)]
pub struct Memory {
    bytes: Box<[u8]>,
}

impl Memory {
    /// Creates a zero-filled memory.
    pub fn new() -> Self {
        Self {
            bytes: vec![0; MEM_SIZE].into_boxed_slice(),
        }
    }

    /// Reads one byte.
    #[inline]
    pub fn read_u8(&self, addr: u16) -> u8 {
        self.bytes[usize::from(addr)]
    }

    /// Writes one byte.
    #[inline]
    pub fn write_u8(&mut self, addr: u16, val: u8) {
        self.bytes[usize::from(addr)] = val;
    }

    /// Reads a little-endian 16-bit word; the high byte wraps to address 0 at the top.
    #[inline]
    pub fn read_u16(&self, addr: u16) -> u16 {
        u16::from_le_bytes([self.read_u8(addr), self.read_u8(addr.wrapping_add(1))])
    }

    /// Writes a little-endian 16-bit word: low byte at `addr`, high byte at `addr + 1`.
    #[inline]
    pub fn write_u16(&mut self, addr: u16, val: u16) {
        let [lo, hi] = val.to_le_bytes();
        self.write_u8(addr, lo);
        self.write_u8(addr.wrapping_add(1), hi);
    }

    /// Iterates over `(address, value)` for every non-zero byte.
    pub fn non_zero(&self) -> impl Iterator<Item = (u16, u8)> + '_ {
        self.bytes
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b != 0)
            .map(|(i, &b)| (i as u16, b))
    }

    /// Zeroes every byte.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("size", &self.bytes.len())
            .field("non_zero", &self.non_zero().count())
            .finish()
    }
}
