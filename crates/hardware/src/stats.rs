//! Simulation statistics collection and reporting.
//!
//! This module tracks run metrics for the simulator. It provides:
//! 1. **Throughput:** Fetches, retired instructions, and wall-clock rate.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, stack, branch, system, unknown).
//! 3. **Control flow:** Taken and not-taken branches, breakpoints hit.

use std::time::{Duration, Instant};

use crate::isa::instruction::Instruction;

/// Simulation statistics structure tracking all run metrics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instruction fetches (one per step).
    pub cycles: u64,
    /// Number of instructions that completed without a fault.
    pub instructions_retired: u64,

    /// Count of ALU instructions (arithmetic, logic, shifts, CMP).
    pub inst_alu: u64,
    /// Count of loads (LDR) and register moves.
    pub inst_load: u64,
    /// Count of stores (STR, both forms).
    pub inst_store: u64,
    /// Count of PUSH and POP.
    pub inst_stack: u64,
    /// Count of branch instructions, taken or not.
    pub inst_branch: u64,
    /// Count of NOP and HALT.
    pub inst_system: u64,
    /// Count of encodings executed as unknown no-ops.
    pub inst_unknown: u64,

    /// Branches whose condition held.
    pub branches_taken: u64,
    /// Branches whose condition did not hold.
    pub branches_not_taken: u64,
    /// Number of NOP breakpoints that requested a state dump.
    pub breakpoints: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_stack: 0,
            inst_branch: 0,
            inst_system: 0,
            inst_unknown: 0,
            branches_taken: 0,
            branches_not_taken: 0,
            breakpoints: 0,
        }
    }
}

impl SimStats {
    /// Records a retired instruction in the mix counters.
    pub fn record_retired(&mut self, inst: &Instruction) {
        self.instructions_retired += 1;
        match inst {
            Instruction::Alu { .. } | Instruction::Unary { .. } | Instruction::Cmp { .. } => {
                self.inst_alu += 1;
            }
            Instruction::Load { .. }
            | Instruction::MovReg { .. }
            | Instruction::MovImm { .. }
            | Instruction::LoadImm { .. } => self.inst_load += 1,
            Instruction::Store { .. } => self.inst_store += 1,
            Instruction::Push { .. } | Instruction::Pop { .. } => self.inst_stack += 1,
            Instruction::Branch { .. } => self.inst_branch += 1,
            Instruction::Nop | Instruction::Halt => self.inst_system += 1,
            Instruction::Unknown(_) => self.inst_unknown += 1,
        }
    }

    /// Records the outcome of a conditional branch.
    pub fn record_branch(&mut self, taken: bool) {
        if taken {
            self.branches_taken += 1;
        } else {
            self.branches_not_taken += 1;
        }
    }

    /// Wall-clock time since the statistics were created.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Prints a summary of the collected statistics to stdout.
    #[allow(clippy::cast_precision_loss)]
    pub fn print(&self) {
        let secs = self.elapsed().as_secs_f64();
        let kips = if secs > 0.0 {
            self.instructions_retired as f64 / secs / 1_000.0
        } else {
            0.0
        };
        println!("\n=== Statistics ===");
        println!("  cycles               {:>12}", self.cycles);
        println!("  instructions         {:>12}", self.instructions_retired);
        println!("  elapsed              {:>12.3} s ({kips:.1} KIPS)", secs);
        println!("  alu                  {:>12}", self.inst_alu);
        println!("  load/move            {:>12}", self.inst_load);
        println!("  store                {:>12}", self.inst_store);
        println!("  stack                {:>12}", self.inst_stack);
        println!(
            "  branch               {:>12} (taken {}, not taken {})",
            self.inst_branch, self.branches_taken, self.branches_not_taken
        );
        println!("  system               {:>12}", self.inst_system);
        println!("  unknown              {:>12}", self.inst_unknown);
        println!("  breakpoints          {:>12}", self.breakpoints);
    }
}
