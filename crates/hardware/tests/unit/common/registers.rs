//! # Register File Tests

use rstest::rstest;
use sim16_core::common::{Reg, RegisterFile};

#[test]
fn registers_start_at_zero() {
    let regs = RegisterFile::new();
    assert!(regs.iter().all(|(_, v)| v == 0));
}

#[rstest]
#[case(0)]
#[case(3)]
#[case(7)]
fn write_then_read(#[case] idx: usize) {
    let mut regs = RegisterFile::new();
    let r = Reg::new(idx).unwrap();
    regs.write(r, 0xBEEF);
    assert_eq!(regs.read(r), 0xBEEF);
    assert_eq!(regs.iter().filter(|&(_, v)| v == 0xBEEF).count(), 1);
}

#[test]
fn register_index_out_of_range() {
    assert!(Reg::new(8).is_none());
}

#[test]
fn register_display() {
    assert_eq!(Reg::from_bits(5).to_string(), "r5");
}
