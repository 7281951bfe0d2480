//! Opcode and sub-operation constants.
//!
//! The 4-bit primary opcode occupies bits [15:12]. Opcode `0b0000` is the
//! "system" group, further split by the immediate-mode bit and the 2-bit mode
//! field in bits [1:0].

/// System group: NOP/PUSH/POP/CMP (`i = 0`) and branches (`i = 1`).
pub const OP_SYSTEM: u8 = 0b0000;
/// Register or immediate move.
pub const OP_MOV: u8 = 0b0001;
/// Store to data memory, or immediate load into `rn`.
pub const OP_STR: u8 = 0b0010;
/// Load from data memory.
pub const OP_LDR: u8 = 0b0011;
/// Addition.
pub const OP_ADD: u8 = 0b0100;
/// Subtraction.
pub const OP_SUB: u8 = 0b0101;
/// Multiplication (low 16 bits).
pub const OP_MUL: u8 = 0b0110;
/// Bitwise AND.
pub const OP_AND: u8 = 0b0111;
/// Bitwise OR.
pub const OP_ORR: u8 = 0b1000;
/// Bitwise complement.
pub const OP_NOT: u8 = 0b1001;
/// Bitwise exclusive OR.
pub const OP_XOR: u8 = 0b1010;
/// Logical shift right by one.
pub const OP_SHR: u8 = 0b1011;
/// Shift left by one.
pub const OP_SHL: u8 = 0b1100;
/// Rotate right by one.
pub const OP_ROR: u8 = 0b1101;
/// Rotate left by one.
pub const OP_ROL: u8 = 0b1110;
/// Control group; only `i = 1, mode = 0b11` (HALT) is defined.
pub const OP_CONTROL: u8 = 0b1111;

/// System group, `i = 0`: debug breakpoint.
pub const MODE_NOP: u8 = 0b00;
/// System group, `i = 0`: push `rn`.
pub const MODE_PUSH: u8 = 0b01;
/// System group, `i = 0`: pop into `rd`.
pub const MODE_POP: u8 = 0b10;
/// System group, `i = 0`: compare `rn` with `rm`.
pub const MODE_CMP: u8 = 0b11;

/// Branch condition: always.
pub const COND_ALWAYS: u8 = 0b00;
/// Branch condition: equal (`Z`).
pub const COND_EQ: u8 = 0b01;
/// Branch condition: less than (`S && !Z`).
pub const COND_LT: u8 = 0b10;
/// Branch condition: greater than (`!Z && !S`).
pub const COND_GT: u8 = 0b11;

/// Control group mode selecting HALT.
pub const MODE_HALT: u8 = 0b11;

/// Canonical HALT encoding (all ones).
pub const HALT: u16 = 0xFFFF;

/// Canonical NOP encoding (all zeros).
pub const NOP: u16 = 0x0000;
