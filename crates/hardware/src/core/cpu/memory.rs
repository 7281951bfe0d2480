//! Memory Access Helpers.
//!
//! This module provides the interface between the CPU and its memories.
//! It performs the following:
//! 1. **Instruction Fetch:** Little-endian 16-bit reads from instruction memory.
//! 2. **Data Access:** Byte-wide loads and stores against data memory.
//! 3. **Program Loading:** Writing loader output into instruction memory.

use super::Cpu;
use crate::common::constants::INSTRUCTION_SIZE;
use crate::sim::loader::Program;

impl Cpu {
    /// Fetches the word at `PC` into `IR` and advances `PC` by one instruction.
    ///
    /// # Returns
    ///
    /// The fetched instruction word.
    #[inline]
    pub fn fetch(&mut self) -> u16 {
        self.ir = self.imem.read_u16(self.pc);
        self.pc = self.pc.wrapping_add(INSTRUCTION_SIZE);
        self.ir
    }

    /// Loads one byte of data memory, zero-extended to a register value.
    #[inline]
    pub fn load_data(&self, addr: u16) -> u16 {
        u16::from(self.dmem.read_u8(addr))
    }

    /// Stores the low byte of `val` to data memory.
    #[inline]
    pub fn store_data(&mut self, addr: u16, val: u16) {
        self.dmem.write_u8(addr, val.to_le_bytes()[0]);
    }

    /// Writes every word of `program` into instruction memory, low byte first.
    pub fn load_program(&mut self, program: &Program) {
        for word in &program.words {
            self.imem.write_u16(word.addr, word.value);
        }
        tracing::info!(words = program.words.len(), "program loaded");
    }
}
