//! # Flags Register Tests

use sim16_core::core::arch::Flags;
use sim16_core::core::arch::flags::{FLAG_C, FLAG_O, FLAG_S, FLAG_Z};

#[test]
fn bit_layout() {
    let f = Flags::from_result(0x8000, true, false);
    assert_eq!(f.bits(), FLAG_C | FLAG_S);
    assert_eq!(Flags::logic(0).bits(), FLAG_Z);
    assert!(Flags::from_bits(FLAG_O).overflow);
}

#[test]
fn display_lists_all_four() {
    let text = Flags::from_bits(FLAG_Z).to_string();
    assert!(text.contains("Z:1"));
    assert!(text.contains("C:0"));
}
