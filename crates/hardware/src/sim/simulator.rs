//! Simulator: owns the CPU and the state reporter side-by-side.
//!
//! The CPU is borrowed mutably for each step and immutably for each dump, so the
//! reporter never observes a half-executed instruction.

use crate::common::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::cpu::StepOutcome;
use crate::sim::loader::Program;
use crate::sim::reporter::{ConsoleReporter, ReportReason, StateReporter};

/// Top-level run driver: CPU state plus the reporter that renders dumps.
#[derive(Debug)]
pub struct Simulator<R: StateReporter = ConsoleReporter> {
    /// Machine state.
    pub cpu: Cpu,
    /// Receives breakpoint, halt and fault dumps.
    pub reporter: R,
}

impl Simulator<ConsoleReporter> {
    /// Creates a simulator that prints dumps to stdout.
    pub fn new(config: &Config) -> Self {
        Self::with_reporter(config, ConsoleReporter::new(config.reporter.clone()))
    }
}

impl<R: StateReporter> Simulator<R> {
    /// Creates a simulator with a custom reporter.
    pub fn with_reporter(config: &Config, reporter: R) -> Self {
        Self {
            cpu: Cpu::new(config),
            reporter,
        }
    }

    /// Loads a parsed program into instruction memory.
    pub fn load(&mut self, program: &Program) {
        self.cpu.load_program(program);
    }

    /// Executes one instruction and reports any state dump it triggers.
    ///
    /// # Errors
    ///
    /// Returns the fault raised by the instruction, after reporting it.
    pub fn tick(&mut self) -> Result<StepOutcome, SimError> {
        match self.cpu.step() {
            Ok(outcome) => {
                match outcome {
                    StepOutcome::Continue => {}
                    StepOutcome::Breakpoint => self.reporter.report(&self.cpu, ReportReason::Breakpoint),
                    StepOutcome::Halt => self.reporter.report(&self.cpu, ReportReason::Halt),
                }
                Ok(outcome)
            }
            Err(SimError::Halted) => Err(SimError::Halted),
            Err(e) => {
                self.reporter.report(&self.cpu, ReportReason::Fault);
                Err(e)
            }
        }
    }

    /// Runs until HALT or a fault.
    ///
    /// # Errors
    ///
    /// Returns the fault that stopped the machine. HALT is a clean stop.
    pub fn run(&mut self) -> Result<(), SimError> {
        loop {
            if self.tick()? == StepOutcome::Halt {
                return Ok(());
            }
        }
    }
}
