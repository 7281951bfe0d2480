//! # Byte Memory Tests
//!
//! Instruction and data memories are flat 64 KiB byte arrays with wrapping addresses.

use pretty_assertions::assert_eq;
use sim16_core::common::Memory;

#[test]
fn memory_starts_zeroed() {
    let mem = Memory::new();
    assert_eq!(mem.read_u16(0x0000), 0);
    assert_eq!(mem.read_u16(0xFFFE), 0);
    assert_eq!(mem.non_zero().count(), 0);
}

#[test]
fn word_write_is_little_endian() {
    let mut mem = Memory::new();
    mem.write_u16(0x0010, 0x1234);
    assert_eq!(mem.read_u8(0x0010), 0x34);
    assert_eq!(mem.read_u8(0x0011), 0x12);
    assert_eq!(mem.read_u16(0x0010), 0x1234);
}

#[test]
fn word_at_top_address_wraps_to_zero() {
    let mut mem = Memory::new();
    mem.write_u16(0xFFFF, 0xABCD);
    assert_eq!(mem.read_u8(0xFFFF), 0xCD);
    assert_eq!(mem.read_u8(0x0000), 0xAB);
}

#[test]
fn non_zero_lists_written_bytes_in_address_order() {
    let mut mem = Memory::new();
    mem.write_u8(0x0200, 7);
    mem.write_u8(0x0001, 3);
    let cells: Vec<(u16, u8)> = mem.non_zero().collect();
    assert_eq!(cells, vec![(0x0001, 3), (0x0200, 7)]);
}

#[test]
fn clear_zeroes_everything() {
    let mut mem = Memory::new();
    mem.write_u16(0x4000, 0x0302);
    assert_eq!(mem.non_zero().count(), 2);
    mem.clear();
    assert_eq!(mem.non_zero().count(), 0);
}
