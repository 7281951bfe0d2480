//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every other component:
//! 1. **Constants:** Memory sizes, stack geometry, and instruction width.
//! 2. **Error Handling:** The `SimError` taxonomy for load failures and stack faults.
//! 3. **Memory:** Flat 64 KiB byte-addressable memories.
//! 4. **Register Management:** The eight-entry register file and its index type.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for loading and execution faults.
pub mod error;

/// Flat byte-addressable memory.
pub mod memory;

/// Register file implementation.
pub mod reg;

pub use error::SimError;
pub use memory::Memory;
pub use reg::{Reg, RegisterFile};
