//! Simulator error definitions.
//!
//! This module defines every failure the simulator can report. It provides:
//! 1. **Load Failures:** The program or configuration file could not be read or parsed.
//! 2. **Stack Faults:** A PUSH or POP would move `SP` outside the stack region.
//! 3. **Lifecycle Errors:** Attempting to step a machine that has already halted.
//!
//! Malformed program lines and unrecognized opcodes are deliberately absent: the
//! loader skips the former and the executor treats the latter as no-ops.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or executing a program.
///
/// Every variant is fatal to the current run. Stack faults are raised before the
/// faulting instruction mutates any state.
#[derive(Debug, Error)]
pub enum SimError {
    /// The program file could not be opened or read.
    #[error("could not read program file '{}': {source}", path.display())]
    LoadFailure {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration file could not be read.
    #[error("could not read config file '{}': {source}", path.display())]
    ConfigRead {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid JSON for [`crate::Config`].
    #[error("invalid config file '{}': {source}", path.display())]
    ConfigParse {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// A PUSH would move `SP` below the bottom of the stack region.
    ///
    /// The associated value is the stack pointer before the push.
    #[error("stack overflow: push with SP={sp:#06x}")]
    StackOverflow {
        /// Stack pointer at the time of the fault.
        sp: u16,
    },

    /// A POP would move `SP` above the top of the stack region.
    ///
    /// The associated value is the stack pointer before the pop.
    #[error("stack underflow: pop with SP={sp:#06x}")]
    StackUnderflow {
        /// Stack pointer at the time of the fault.
        sp: u16,
    },

    /// The machine is halted and cannot make further progress.
    #[error("machine is halted")]
    Halted,
}
