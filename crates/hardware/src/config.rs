//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline values matching the reference machine (PC 0, breakpoints on).
//! 2. **Structures:** `general` (execution options) and `reporter` (state dump options).
//! 3. **Loading:** Deserialization from a JSON file with per-field defaults.
//!
//! The machine geometry (memory sizes, stack location and capacity) is fixed by
//! [`crate::common::constants`] and is not configurable.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Address of the first instruction fetched.
    pub const START_PC: u16 = 0x0000;

    /// NOP acts as a debug breakpoint that dumps machine state.
    pub const BREAK_ON_NOP: bool = true;
}

/// Root configuration structure.
///
/// Every field has a default, so an empty JSON object is a valid configuration.
///
/// # Examples
///
/// ```
/// use sim16_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "start_pc": 16 },
///     "reporter": { "show_stack": false }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.start_pc, 0x10);
/// assert!(config.general.break_on_nop);
/// assert!(!config.reporter.show_stack);
/// assert!(config.reporter.show_data_memory);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General execution settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// State dump settings.
    #[serde(default)]
    pub reporter: ReporterConfig,
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ConfigRead`] if the file cannot be read and
    /// [`SimError::ConfigParse`] if it is not a valid configuration.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| SimError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// General execution settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `trace`-level log event with the disassembly of every executed instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value.
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u16,

    /// Whether NOP stops to dump machine state; when false NOP is a plain no-op.
    #[serde(default = "GeneralConfig::default_break_on_nop")]
    pub break_on_nop: bool,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> u16 {
        defaults::START_PC
    }

    /// Returns the default breakpoint behavior of NOP.
    const fn default_break_on_nop() -> bool {
        defaults::BREAK_ON_NOP
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
            break_on_nop: defaults::BREAK_ON_NOP,
        }
    }
}

/// Settings for the console state reporter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReporterConfig {
    /// Include the stack region listing.
    #[serde(default = "ReporterConfig::default_true")]
    pub show_stack: bool,

    /// Include the non-zero data memory listing.
    #[serde(default = "ReporterConfig::default_true")]
    pub show_data_memory: bool,
}

impl ReporterConfig {
    const fn default_true() -> bool {
        true
    }
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            show_stack: true,
            show_data_memory: true,
        }
    }
}
