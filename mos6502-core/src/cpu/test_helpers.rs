use crate::cpu::Cpu;

pub const ENTRY: u16 = 0x0300;
pub const RAM_SIZE: usize = 512;

/// Loads `program` at `ENTRY` and runs it to completion (a clean `BRK` halt).
/// Panics if the program hits a fatal error -- tests that expect one should
/// call `cpu.step()`/`cpu.run()` directly instead of going through this.
pub fn run_program(program: &[u8]) -> Cpu {
    let mut cpu = Cpu::new(RAM_SIZE);
    cpu.load(program, ENTRY, program.len() as u16).unwrap();
    cpu.set_entry(ENTRY);
    cpu.run(false).unwrap();
    cpu
}

pub fn assert_register_a(program: &[u8], expected_a: u8, expected_status: u8) {
    let cpu = run_program(program);
    assert_eq!(cpu.a, expected_a, "A register");
    assert_eq!(cpu.p, expected_status, "status register");
}

pub fn assert_register_x(program: &[u8], expected_x: u8, expected_status: u8) {
    let cpu = run_program(program);
    assert_eq!(cpu.x, expected_x, "X register");
    assert_eq!(cpu.p, expected_status, "status register");
}

pub fn assert_register_y(program: &[u8], expected_y: u8, expected_status: u8) {
    let cpu = run_program(program);
    assert_eq!(cpu.y, expected_y, "Y register");
    assert_eq!(cpu.p, expected_status, "status register");
}

/// `RESET_STATUS_FLAG` (expansion bit) folded in, matching how every real
/// status byte reads back.
pub fn status(bits: u8) -> u8 {
    bits | crate::cpu::RESET_STATUS_FLAG
}

macro_rules! register_a {
    ($name:ident, $program:expr, $expected_a:expr, $expected_status:expr) => {
        #[test]
        fn $name() {
            crate::cpu::test_helpers::assert_register_a(
                &$program,
                $expected_a,
                crate::cpu::test_helpers::status($expected_status),
            );
        }
    };
}

macro_rules! register_x {
    ($name:ident, $program:expr, $expected_x:expr, $expected_status:expr) => {
        #[test]
        fn $name() {
            crate::cpu::test_helpers::assert_register_x(
                &$program,
                $expected_x,
                crate::cpu::test_helpers::status($expected_status),
            );
        }
    };
}

#[allow(unused_macros)]
macro_rules! register_y {
    ($name:ident, $program:expr, $expected_y:expr, $expected_status:expr) => {
        #[test]
        fn $name() {
            crate::cpu::test_helpers::assert_register_y(
                &$program,
                $expected_y,
                crate::cpu::test_helpers::status($expected_status),
            );
        }
    };
}

pub(crate) use register_a;
pub(crate) use register_x;
pub(crate) use register_y;
