//! 16-bit custom ISA simulator library.
//!
//! This crate implements a sequential simulator for a small 16-bit machine with the following:
//! 1. **Core:** Register file, flags, PC/SP/IR, and the fetch-decode-execute loop.
//! 2. **Memory:** Separate 64 KiB instruction and data memories plus a 16-byte hardware stack.
//! 3. **ISA:** Field extraction, decoding into a tagged instruction enum, and disassembly.
//! 4. **Simulation:** Program-file loader, state reporter, run driver, configuration, and statistics.

/// Common types and constants (errors, registers, byte memories).
pub mod common;
/// Simulator configuration (defaults, JSON deserialization).
pub mod config;
/// CPU core (architectural state, execution loop, ALU).
pub mod core;
/// Instruction set (field extraction, decode, opcodes, disassembly).
pub mod isa;
/// Program loader, state reporter, and the run driver.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Main CPU type; holds every piece of architectural state.
pub use crate::core::Cpu;
/// Error type for every fallible operation in the crate.
pub use crate::common::SimError;
/// Top-level run driver pairing a CPU with a state reporter.
pub use crate::sim::simulator::Simulator;
