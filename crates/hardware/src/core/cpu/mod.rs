//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the single owner of all machine
//! state. It coordinates the following:
//! 1. **State Management:** Registers, flags, program counter, instruction register,
//!    and the run state (`Running`/`Halted`).
//! 2. **Memory:** Separate instruction and data memories plus the hardware stack.
//! 3. **Observability:** Instruction tracing and run statistics.

/// Instruction execution and the fetch-decode-execute loop.
pub mod execution;

/// Instruction fetch, data memory access, and program loading.
pub mod memory;

use crate::common::{Memory, RegisterFile};
use crate::config::Config;
use crate::core::arch::{Flags, Stack};
use crate::stats::SimStats;

pub use execution::StepOutcome;

/// Execution state of the machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// Fetching and executing instructions.
    #[default]
    Running,
    /// Stopped by HALT or a fault; terminal.
    Halted,
}

/// Main CPU structure containing all machine state.
#[derive(Debug, Clone)]
pub struct Cpu {
    /// General-purpose registers R0-R7.
    pub regs: RegisterFile,
    /// Condition codes.
    pub flags: Flags,
    /// Program Counter (byte address into instruction memory).
    pub pc: u16,
    /// Instruction Register: the most recently fetched word.
    pub ir: u16,
    /// Hardware stack and stack pointer.
    pub stack: Stack,
    /// Instruction memory; written by the loader, read-only while running.
    pub imem: Memory,
    /// Data memory used by LDR/STR.
    pub dmem: Memory,
    /// Running or halted.
    pub state: RunState,

    /// Emit a trace event per executed instruction.
    pub trace: bool,
    /// NOP requests a state dump.
    pub break_on_nop: bool,
    /// Run statistics.
    pub stats: SimStats,

    start_pc: u16,
}

impl Cpu {
    /// Creates a new CPU with zeroed registers, flags and memories, `SP = STACK_BASE`,
    /// and `PC` set to the configured start address.
    ///
    /// # Arguments
    ///
    /// * `config` - The simulator configuration parameters.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            flags: Flags::default(),
            pc: config.general.start_pc,
            ir: 0,
            stack: Stack::default(),
            imem: Memory::new(),
            dmem: Memory::new(),
            state: RunState::Running,
            trace: config.general.trace_instructions,
            break_on_nop: config.general.break_on_nop,
            stats: SimStats::default(),
            start_pc: config.general.start_pc,
        }
    }

    /// Current stack pointer.
    #[inline]
    pub const fn sp(&self) -> u16 {
        self.stack.sp()
    }

    /// Returns true once HALT has executed or a fault has occurred.
    #[inline]
    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }

    /// Returns the machine to its power-on state while keeping the loaded program.
    ///
    /// Registers, flags, IR, data memory, stack and statistics are cleared; PC returns
    /// to the configured start address.
    pub fn reset(&mut self) {
        self.regs = RegisterFile::new();
        self.flags = Flags::default();
        self.pc = self.start_pc;
        self.ir = 0;
        self.stack.reset();
        self.dmem.clear();
        self.state = RunState::Running;
        self.stats = SimStats::default();
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
