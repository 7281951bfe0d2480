//! # Program Loader Tests

use std::io::Write;

use pretty_assertions::assert_eq;
use sim16_core::SimError;
use sim16_core::core::Cpu;
use sim16_core::sim::loader::{ProgramWord, load_program, parse_program};
use tempfile::NamedTempFile;

fn write_program(text: impl AsRef<[u8]>) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_ref()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn word_is_split_little_endian() {
    let file = write_program("0010: 0x1234\n");
    let program = load_program(file.path()).unwrap();
    assert_eq!(program.words, vec![ProgramWord { addr: 0x0010, value: 0x1234 }]);

    let mut cpu = Cpu::default();
    cpu.load_program(&program);
    assert_eq!(cpu.imem.read_u8(0x0010), 0x34);
    assert_eq!(cpu.imem.read_u8(0x0011), 0x12);
}

#[test]
fn word_at_top_address_wraps() {
    let program = parse_program("ffff: 0xabcd");
    let mut cpu = Cpu::default();
    cpu.load_program(&program);
    assert_eq!(cpu.imem.read_u8(0xFFFF), 0xCD);
    assert_eq!(cpu.imem.read_u8(0x0000), 0xAB);
}

#[test]
fn malformed_lines_are_skipped_and_counted() {
    let text = "\
0000: 0x1905
this is not an instruction

   0002:0XFFFF   ; halt
0004 0x0000
";
    let program = parse_program(text);
    assert_eq!(
        program.words,
        vec![
            ProgramWord { addr: 0x0000, value: 0x1905 },
            ProgramWord { addr: 0x0002, value: 0xFFFF },
        ]
    );
    assert_eq!(program.skipped, 3);
}

#[test]
fn non_utf8_line_is_skipped_not_fatal() {
    // Latin-1 comment: "; instruções"
    let file = write_program(b"; instru\xE7\xF5es\n0010: 0x1234\n");
    let program = load_program(file.path()).unwrap();
    assert_eq!(program.words, vec![ProgramWord { addr: 0x0010, value: 0x1234 }]);
    assert_eq!(program.skipped, 1);
}

#[test]
fn non_utf8_trailing_text_skips_only_that_line() {
    let program = parse_program(b"0000: 0x1905 ; r\xE9g\r\n0002: 0xffff\r\n".as_slice());
    assert_eq!(program.words, vec![ProgramWord { addr: 0x0002, value: 0xFFFF }]);
    assert_eq!(program.skipped, 1);
}

#[test]
fn crlf_and_missing_final_newline() {
    let program = parse_program("0000: 0x1111\r\n0002: 0x2222");
    assert_eq!(program.words.len(), 2);
    assert_eq!(program.skipped, 0);
    assert_eq!(parse_program("").skipped, 0);
}

#[test]
fn fifth_hex_digit_is_trailing_text() {
    let program = parse_program("00010: 0x1234\n0010: 0x12345\n");
    assert_eq!(program.words, vec![ProgramWord { addr: 0x0010, value: 0x1234 }]);
    assert_eq!(program.skipped, 1);
}

#[test]
fn later_lines_overwrite_earlier_ones() {
    let program = parse_program("0000: 0x1111\n0000: 0x2222\n");
    let mut cpu = Cpu::default();
    cpu.load_program(&program);
    assert_eq!(cpu.imem.read_u16(0), 0x2222);
}

#[test]
fn missing_file_is_a_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let err = load_program(&path).unwrap_err();
    match err {
        SimError::LoadFailure { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}
