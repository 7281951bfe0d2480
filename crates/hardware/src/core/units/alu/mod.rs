//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 16-bit integer ALU used by the executor. Every
//! operation returns its result together with the flag set it defines, or `None`
//! when the operation leaves the flags untouched (rotates).
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul
//! - [`logic`]:      And, Orr, Xor, Not
//! - [`shifts`]:     Shr, Shl, Ror, Rol

/// Integer arithmetic operations (add, subtract, multiply).
pub mod arithmetic;

/// Bitwise logical operations (and, or, xor, not).
pub mod logic;

/// Shift and rotate operations.
pub mod shifts;

use crate::core::arch::Flags;
use crate::isa::instruction::{AluOp, UnaryOp};

/// Output of one ALU operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AluResult {
    /// The 16-bit result (always wrapped modulo 2^16).
    pub value: u16,
    /// Complete replacement flag set, or `None` if the flags are unaffected.
    pub flags: Option<Flags>,
}

impl AluResult {
    /// A result that replaces the flags wholesale.
    pub const fn with_flags(value: u16, flags: Flags) -> Self {
        Self {
            value,
            flags: Some(flags),
        }
    }

    /// A result that leaves the flags unchanged.
    pub const fn without_flags(value: u16) -> Self {
        Self { value, flags: None }
    }
}

/// Arithmetic Logic Unit for 16-bit integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes a two-operand ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation to perform.
    /// * `a`  - First operand (`R[rn]`).
    /// * `b`  - Second operand (`R[rm]`).
    ///
    /// # Examples
    ///
    /// ```
    /// use sim16_core::core::units::alu::Alu;
    /// use sim16_core::isa::instruction::AluOp;
    ///
    /// let r = Alu::execute(AluOp::Add, 0xFFFF, 1);
    /// assert_eq!(r.value, 0);
    /// let flags = r.flags.unwrap();
    /// assert!(flags.zero && flags.carry && !flags.overflow);
    /// ```
    pub const fn execute(op: AluOp, a: u16, b: u16) -> AluResult {
        match op {
            AluOp::Add => {
                let (value, flags) = arithmetic::add(a, b);
                AluResult::with_flags(value, flags)
            }
            AluOp::Sub => {
                let (value, flags) = arithmetic::sub(a, b);
                AluResult::with_flags(value, flags)
            }
            AluOp::Mul => arithmetic::mul(a, b),
            AluOp::And => logic::and(a, b),
            AluOp::Orr => logic::orr(a, b),
            AluOp::Xor => logic::xor(a, b),
        }
    }

    /// Executes a single-operand operation on `a` (`R[rn]`).
    pub const fn execute_unary(op: UnaryOp, a: u16) -> AluResult {
        match op {
            UnaryOp::Not => logic::not(a),
            UnaryOp::Shr => shifts::shr(a),
            UnaryOp::Shl => shifts::shl(a),
            UnaryOp::Ror => shifts::ror(a),
            UnaryOp::Rol => shifts::rol(a),
        }
    }

    /// Computes the flags of `a - b` without producing a register result (CMP).
    pub const fn compare(a: u16, b: u16) -> Flags {
        arithmetic::sub(a, b).1
    }
}
