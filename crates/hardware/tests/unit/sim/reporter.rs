//! # State Reporter Tests

use sim16_core::common::Reg;
use sim16_core::config::ReporterConfig;
use sim16_core::core::Cpu;
use sim16_core::sim::reporter::{ConsoleReporter, ReportReason};

fn sample_cpu() -> Cpu {
    let mut cpu = Cpu::default();
    cpu.regs.write(Reg::from_bits(2), 0xBEEF);
    cpu.dmem.write_u8(0x0040, 0x34);
    cpu.stack.push(0x1234).unwrap();
    cpu.pc = 0x0010;
    cpu
}

#[test]
fn dump_contains_registers_memory_and_stack() {
    let text = ConsoleReporter::default().render(&sample_cpu(), ReportReason::Breakpoint);

    assert!(text.contains("(breakpoint)"));
    assert!(text.contains("PC = 0x0010"));
    assert!(text.contains("SP = 0x81fe"));
    assert!(text.contains("R[2]=0xbeef"));
    assert!(text.contains("[0x0040] = 0x34"));
    assert!(text.contains("[0x81fe] = 0x1234 <- SP"));
    assert!(text.contains("[C:0 Ov:0 Z:0 S:0]"));
    assert!(text.contains("Stack (base 0x8200):"));
}

#[test]
fn empty_data_memory_is_noted() {
    let text = ConsoleReporter::default().render(&Cpu::default(), ReportReason::Fault);
    assert!(text.contains("(fault)"));
    assert!(text.contains("(empty)"));
}

#[test]
fn sections_follow_config() {
    let reporter = ConsoleReporter::new(ReporterConfig {
        show_stack: false,
        show_data_memory: true,
    });
    let text = reporter.render(&sample_cpu(), ReportReason::Halt);
    assert!(text.contains("[0x0040] = 0x34"));
    assert!(!text.contains("Stack ("));
}
