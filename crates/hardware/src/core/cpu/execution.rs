//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle of the CPU. It performs the following:
//! 1. **Fetch/Decode:** Reads the word at `PC`, advances `PC`, and classifies the word.
//! 2. **Dispatch:** One `match` arm per instruction; unknown encodings are no-ops.
//! 3. **Termination:** HALT moves the machine to `Halted`; stack faults do too and are
//!    returned as errors without applying the faulting instruction.
//! 4. **Observability:** Optional per-instruction trace events and run statistics.

use super::{Cpu, RunState};
use crate::common::{Reg, SimError};
use crate::core::units::alu::{Alu, AluResult};
use crate::isa::decode::decode_instruction;
use crate::isa::disasm::format_instruction;
use crate::isa::instruction::{Condition, Instruction};

/// What the caller should do after a successful step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Keep executing.
    Continue,
    /// A NOP breakpoint asked for a state dump; execution may continue afterwards.
    Breakpoint,
    /// HALT executed; the machine is now halted.
    Halt,
}

impl Cpu {
    /// Executes exactly one instruction.
    ///
    /// # Returns
    ///
    /// The [`StepOutcome`] of the instruction.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::StackOverflow`] or [`SimError::StackUnderflow`] when a PUSH or
    /// POP would leave the stack region; the machine is halted and no state other than
    /// `PC`/`IR` (already advanced by the fetch) is changed. Returns [`SimError::Halted`]
    /// when called on a halted machine.
    pub fn step(&mut self) -> Result<StepOutcome, SimError> {
        if self.state == RunState::Halted {
            return Err(SimError::Halted);
        }

        let pc = self.pc;
        let word = self.fetch();
        let inst = decode_instruction(word);
        self.stats.cycles += 1;

        if self.trace {
            tracing::trace!(
                "{:#06x}: {:#06x}  {}",
                pc,
                word,
                format_instruction(&inst)
            );
        }

        match self.execute(inst) {
            Ok(outcome) => {
                self.stats.record_retired(&inst);
                Ok(outcome)
            }
            Err(e) => {
                self.state = RunState::Halted;
                tracing::error!(pc = pc, word = word, "fault: {e}");
                Err(e)
            }
        }
    }

    /// Steps until the machine halts or faults, passing breakpoints to `on_breakpoint`.
    ///
    /// There is no instruction budget: a program that never halts never returns.
    ///
    /// # Errors
    ///
    /// Propagates the first fault raised by [`Cpu::step`].
    pub fn run_until_halt(&mut self, mut on_breakpoint: impl FnMut(&Self)) -> Result<(), SimError> {
        loop {
            match self.step()? {
                StepOutcome::Continue => {}
                StepOutcome::Breakpoint => on_breakpoint(self),
                StepOutcome::Halt => return Ok(()),
            }
        }
    }

    /// Evaluates a branch condition against the current flags.
    pub const fn condition_holds(&self, cond: Condition) -> bool {
        let f = self.flags;
        match cond {
            Condition::Always => true,
            Condition::Equal => f.zero,
            Condition::LessThan => f.sign && !f.zero,
            Condition::GreaterThan => !f.zero && !f.sign,
        }
    }

    /// Applies an ALU result: writes the value and replaces the flags if the operation defines them.
    fn commit_alu(&mut self, rd: Reg, result: AluResult) {
        self.regs.write(rd, result.value);
        if let Some(flags) = result.flags {
            self.flags = flags;
        }
    }

    /// Executes one classified instruction against the machine state.
    fn execute(&mut self, inst: Instruction) -> Result<StepOutcome, SimError> {
        match inst {
            Instruction::Nop => {
                if self.break_on_nop {
                    self.stats.breakpoints += 1;
                    tracing::debug!(pc = self.pc, "breakpoint");
                    return Ok(StepOutcome::Breakpoint);
                }
            }
            Instruction::MovReg { rd, rm } => {
                let val = self.regs.read(rm);
                self.regs.write(rd, val);
            }
            Instruction::MovImm { rd, imm } => self.regs.write(rd, u16::from(imm)),
            Instruction::Store { rd, rn } => {
                let addr = self.regs.read(rn);
                self.store_data(addr, self.regs.read(rd));
            }
            Instruction::LoadImm { rn, imm } => self.regs.write(rn, u16::from(imm)),
            Instruction::Load { rd, rm } => {
                let val = self.load_data(self.regs.read(rm));
                self.regs.write(rd, val);
            }
            Instruction::Alu { op, rd, rn, rm } => {
                let result = Alu::execute(op, self.regs.read(rn), self.regs.read(rm));
                self.commit_alu(rd, result);
            }
            Instruction::Unary { op, rd, rn } => {
                let result = Alu::execute_unary(op, self.regs.read(rn));
                self.commit_alu(rd, result);
            }
            Instruction::Push { rn } => self.stack.push(self.regs.read(rn))?,
            Instruction::Pop { rd } => {
                let val = self.stack.pop()?;
                self.regs.write(rd, val);
            }
            Instruction::Cmp { rn, rm } => {
                self.flags = Alu::compare(self.regs.read(rn), self.regs.read(rm));
            }
            Instruction::Branch { cond, offset } => {
                let taken = self.condition_holds(cond);
                if taken {
                    self.pc = self.pc.wrapping_add(u16::from(offset));
                }
                self.stats.record_branch(taken);
            }
            Instruction::Halt => {
                self.state = RunState::Halted;
                tracing::info!(pc = self.pc, "halted");
                return Ok(StepOutcome::Halt);
            }
            Instruction::Unknown(raw) => tracing::trace!(word = raw, "skipping unknown encoding"),
        }
        Ok(StepOutcome::Continue)
    }
}
