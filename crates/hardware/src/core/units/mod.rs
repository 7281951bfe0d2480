//! Functional units used by the executor.

/// Integer ALU with flag computation.
pub mod alu;
