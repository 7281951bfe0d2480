use sim16_core::Simulator;
use sim16_core::common::Reg;
use sim16_core::config::Config;
use sim16_core::core::Cpu;
use sim16_core::core::cpu::StepOutcome;
use sim16_core::sim::loader::{Program, ProgramWord};
use sim16_core::sim::reporter::StateReporter;
use sim16_core::SimError;

use crate::common::mocks::reporter::RecordingReporter;

pub struct TestContext<R: StateReporter = RecordingReporter> {
    pub sim: Simulator<R>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self::with_reporter(config, RecordingReporter::default())
    }
}

impl<R: StateReporter> TestContext<R> {
    pub fn with_reporter(config: &Config, reporter: R) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();
        Self {
            sim: Simulator::with_reporter(config, reporter),
        }
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    /// Load consecutive instruction words starting at `addr` and set the PC there.
    pub fn load_program(mut self, addr: u16, words: &[u16]) -> Self {
        let program = Program {
            words: words
                .iter()
                .enumerate()
                .map(|(i, &value)| ProgramWord {
                    addr: addr.wrapping_add(2 * i as u16),
                    value,
                })
                .collect(),
            skipped: 0,
        };
        self.sim.load(&program);
        self.sim.cpu.pc = addr;
        self
    }

    /// Set a general-purpose register value.
    pub fn set_reg(&mut self, reg: usize, val: u16) {
        let r = Reg::new(reg).unwrap_or_else(|| panic!("no register r{reg}"));
        self.sim.cpu.regs.write(r, val);
    }

    /// Read a general-purpose register value.
    pub fn get_reg(&self, reg: usize) -> u16 {
        let r = Reg::new(reg).unwrap_or_else(|| panic!("no register r{reg}"));
        self.sim.cpu.regs.read(r)
    }

    /// Execute a single instruction through the simulator.
    pub fn step(&mut self) -> Result<StepOutcome, SimError> {
        self.sim.tick()
    }

    /// Execute `n` instructions, panicking on any fault.
    pub fn run(&mut self, n: usize) {
        for i in 0..n {
            if let Err(e) = self.sim.tick() {
                panic!("fault after {i} instructions: {e}");
            }
        }
    }

    /// Run until HALT or a fault.
    pub fn run_to_end(&mut self) -> Result<(), SimError> {
        self.sim.run()
    }
}
