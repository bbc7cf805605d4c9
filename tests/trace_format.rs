// Contract tests for the nestest log layout, checked against the field
// offsets the reference log uses (PC at 0, instruction bytes at 6..14,
// disassembly at 16..48, registers from 48).

use nes6502::bus::Bus;
use nes6502::cpu::Cpu;
use nes6502::rom::Rom;
use nes6502::trace::trace;

fn cpu_with_program(program: &[u8]) -> Cpu {
    let mut cpu = Cpu::new(Bus::new(Rom::with_program(program)));
    cpu.reset();
    cpu
}

#[test]
fn the_reference_example_line_is_reproduced_verbatim() {
    let cpu = cpu_with_program(&[0x4C, 0xF5, 0xC5]);
    assert_eq!(
        trace(&cpu),
        "C000  4C F5 C5  JMP $C5F5                       A:00 X:00 Y:00 P:24 SP:FD"
    );
}

#[test]
fn field_offsets_match_the_reference_log() {
    let mut cpu = cpu_with_program(&[0xA5, 0x10]); // LDA $10
    cpu.write_u8(0x0010, 0x42);
    cpu.accumulator = 0x80;
    cpu.x_register = 0x01;
    cpu.y_register = 0x68;
    let line = trace(&cpu);

    assert_eq!(&line[0..4], "C000");
    assert_eq!(&line[6..14], "A5 10   ");
    assert_eq!(&line[16..28], "LDA $10 = 42");
    assert_eq!(&line[48..52], "A:80");
    assert_eq!(&line[53..57], "X:01");
    assert_eq!(&line[58..62], "Y:68");
    assert_eq!(&line[63..67], "P:24");
    assert_eq!(&line[68..73], "SP:FD");
}

#[test]
fn a_traced_run_lines_up_with_execution() {
    // LDA #$01 ; STA $0200 ; KIL
    let mut cpu = cpu_with_program(&[0xA9, 0x01, 0x8D, 0x00, 0x02, 0x02]);
    let mut lines = Vec::new();
    cpu.run_with_callback(|cpu| lines.push(trace(cpu))).unwrap();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("C000  A9 01     LDA #$01"));
    // The second line reflects state after the load.
    assert!(lines[1].starts_with("C002  8D 00 02  STA $0200 = 00"));
    assert!(lines[1].contains("A:01"));
    assert!(lines[2].starts_with("C005  02       *KIL"));
}

#[test]
fn unofficial_opcodes_are_starred_at_column_15() {
    let mut cpu = cpu_with_program(&[0xA7, 0x33]); // LAX $33
    cpu.write_u8(0x0033, 0x7E);
    let line = trace(&cpu);
    assert_eq!(&line[15..19], "*LAX");
    assert_eq!(&line[20..28], "$33 = 7E");
}

#[test]
fn indirect_x_annotation_shows_pointer_and_target() {
    let mut cpu = cpu_with_program(&[0xC1, 0x80]); // CMP ($80,X)
    cpu.write_u8(0x0080, 0x00);
    cpu.write_u8(0x0081, 0x02);
    cpu.accumulator = 0x80;
    let line = trace(&cpu);
    assert!(line.starts_with("C000  C1 80     CMP ($80,X) @ 80 = 0200 = 00"));
    assert!(line.contains("A:80"));
}
