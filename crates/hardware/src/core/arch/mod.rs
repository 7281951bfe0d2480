//! Architectural state components.
//!
//! This module contains the machine elements that are not plain registers or memory:
//! 1. **Flags:** The Carry/Overflow/Zero/Sign status register.
//! 2. **Stack:** The bounds-checked, full-descending hardware stack and its pointer.

/// Status flags register.
pub mod flags;

/// Hardware call stack.
pub mod stack;

pub use flags::Flags;
pub use stack::Stack;
