//! Simulation driver and program loading.
//!
//! Provides the program file loader, the state dump reporter, and the
//! [`simulator::Simulator`] run loop tying them to the CPU.

pub mod loader;
pub mod reporter;
pub mod simulator;
