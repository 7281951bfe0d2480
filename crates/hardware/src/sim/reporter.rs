//! Machine State Reporting.
//!
//! This module renders machine state dumps. It provides:
//! 1. **Trait:** [`StateReporter`], the seam the run driver calls at breakpoints, HALT and faults.
//! 2. **Console output:** [`ConsoleReporter`], which prints registers, flags, data memory
//!    and the stack region to stdout.

use std::fmt::{self, Write as _};

use crate::config::ReporterConfig;
use crate::core::Cpu;

/// Why a state dump was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportReason {
    /// A NOP executed with breakpoints enabled.
    Breakpoint,
    /// HALT executed.
    Halt,
    /// A stack fault stopped the machine.
    Fault,
}

impl fmt::Display for ReportReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Breakpoint => "breakpoint",
            Self::Halt => "halt",
            Self::Fault => "fault",
        };
        f.write_str(s)
    }
}

/// Receives read-only snapshots of the machine.
pub trait StateReporter {
    /// Reports the current machine state.
    fn report(&mut self, cpu: &Cpu, reason: ReportReason);
}

/// Prints state dumps to stdout.
#[derive(Clone, Debug, Default)]
pub struct ConsoleReporter {
    config: ReporterConfig,
}

impl ConsoleReporter {
    /// Creates a reporter with the given display options.
    pub const fn new(config: ReporterConfig) -> Self {
        Self { config }
    }

    /// Renders a dump of `cpu` as text.
    pub fn render(&self, cpu: &Cpu, reason: ReportReason) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_dump(&mut out, cpu, reason);
        out
    }

    fn write_dump(&self, out: &mut String, cpu: &Cpu, reason: ReportReason) -> fmt::Result {
        writeln!(out, "=== machine state ({reason}) ===")?;
        writeln!(
            out,
            "PC = {:#06x}  SP = {:#06x}  IR = {:#06x}",
            cpu.pc,
            cpu.sp(),
            cpu.ir
        )?;
        writeln!(out, "Flags {}", cpu.flags)?;

        for pair in cpu.regs.iter().collect::<Vec<_>>().chunks(4) {
            let line: Vec<String> = pair
                .iter()
                .map(|(r, v)| format!("R[{}]={v:#06x}", r.index()))
                .collect();
            writeln!(out, "{}", line.join("  "))?;
        }

        if self.config.show_data_memory {
            writeln!(out, "Data memory (non-zero):")?;
            let mut any = false;
            for (addr, val) in cpu.dmem.non_zero() {
                any = true;
                writeln!(out, "  [{addr:#06x}] = {val:#04x}")?;
            }
            if !any {
                writeln!(out, "  (empty)")?;
            }
        }

        if self.config.show_stack {
            writeln!(out, "Stack (base {:#06x}):", cpu.stack.base())?;
            for (addr, val) in cpu.stack.slots() {
                let marker = if addr == cpu.sp() { " <- SP" } else { "" };
                writeln!(out, "  [{addr:#06x}] = {val:#06x}{marker}")?;
            }
        }
        Ok(())
    }
}

impl StateReporter for ConsoleReporter {
    fn report(&mut self, cpu: &Cpu, reason: ReportReason) {
        print!("{}", self.render(cpu, reason));
    }
}
