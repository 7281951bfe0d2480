//! Global System Constants.
//!
//! This module defines machine-wide constants used across the simulator. It includes:
//! 1. **Memory Constants:** Sizes of the instruction and data address spaces.
//! 2. **Stack Constants:** Location and capacity of the hardware stack.
//! 3. **Instruction Constants:** Word width and register count.

/// Size in bytes of both the instruction and data memories (64 KiB).
pub const MEM_SIZE: usize = 1 << 16;

/// Initial stack pointer; an empty stack has `SP == STACK_BASE`.
pub const STACK_BASE: u16 = 0x8200;

/// Capacity of the hardware stack in bytes.
pub const STACK_SIZE: u16 = 16;

/// Size of one instruction word in bytes.
pub const INSTRUCTION_SIZE: u16 = 2;

/// Number of bytes moved by a single PUSH or POP.
pub const STACK_SLOT_SIZE: u16 = 2;

/// Number of general-purpose registers (R0-R7).
pub const NUM_REGS: usize = 8;

/// Mask applied to register index fields (3 bits).
pub const REG_INDEX_MASK: u16 = 0x7;
