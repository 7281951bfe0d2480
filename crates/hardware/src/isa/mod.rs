//! Instruction Set Architecture (ISA) Definitions.
//!
//! Every instruction is one 16-bit word laid out as:
//!
//! ```text
//!  15    12  11  10  8  7   5  4  3  2   0
//! | opcode | i |  rd  |  rn  | -  - |  rm  |
//!                     |      imm8          |
//!                               mode = [1:0]
//! ```
//!
//! Fields overlap; the opcode and the immediate-mode bit decide which are used.

/// Instruction decoding logic (field extraction and classification).
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Opcode, mode, and branch-condition constants.
pub mod opcodes;
