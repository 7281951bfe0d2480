//! Core processor implementation.
//!
//! This module contains the CPU state, the fetch-decode-execute loop, the ALU,
//! and the architectural components (flags, stack) the executor acts on.

/// Architecture-specific components (flags register, hardware stack).
pub mod arch;

/// CPU core implementation and execution loop.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
