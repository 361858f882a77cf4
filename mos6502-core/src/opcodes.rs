use crate::cpu::ops_arith::*;
use crate::cpu::ops_jump::*;
use crate::cpu::ops_move::*;
use crate::cpu::Cpu;
use crate::error::{Error, Result};

/// Addressing mode an opcode resolves its operand with. `None` marks opcode
/// slots this core does not implement (the illegal/undocumented opcode
/// space, and unassigned slots in the legal space) -- it is not a real mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Implied,
    RegisterA,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
    Relative,
    None,
}

/// An operation function is handed the CPU and the addressing mode its
/// opcode was assigned in the table; it resolves its own operand and
/// returns whether execution should continue (`false` only for `BRK`).
pub type OperationFn = fn(&mut Cpu, Mode) -> Result<bool>;

fn continues(result: Result<()>) -> Result<bool> {
    result.map(|_| true)
}

/// Backstop for a table desync: `step()` is supposed to intercept every
/// illegal slot via `ADDRESSING_MODE_TABLE[opcode] == Mode::None` before
/// dispatching, so this should never run, but if the two tables ever
/// disagree it degrades to the same documented halt rather than panicking.
fn unimplemented(cpu: &mut Cpu, _mode: Mode) -> Result<bool> {
    let pc = cpu.pc.wrapping_sub(1);
    let opcode = cpu.memory.peek(pc).unwrap_or(0);
    cpu.dump_registers();
    Err(Error::IllegalInstruction { opcode, pc })
}

macro_rules! op {
    ($f:expr) => {
        (|cpu: &mut Cpu, mode: Mode| continues($f(cpu, mode)))
    };
}

#[rustfmt::skip]
pub const OPCODE_STRING_TABLE: [&str; 256] = [
    "brk", "ora", "ill", "ill", "ill", "ora", "asl", "ill", "php", "ora", "asl", "ill", "ill", "ora", "asl", "ill",
    "bpl", "ora", "ill", "ill", "ill", "ora", "asl", "ill", "clc", "ora", "ill", "ill", "ill", "ora", "asl", "ill",
    "jsr", "and", "ill", "ill", "bit", "and", "rol", "ill", "plp", "and", "rol", "ill", "bit", "and", "rol", "ill",
    "bmi", "and", "ill", "ill", "ill", "and", "rol", "ill", "sec", "and", "ill", "ill", "ill", "and", "rol", "ill",
    "rti", "eor", "ill", "ill", "ill", "eor", "lsr", "ill", "pha", "eor", "lsr", "ill", "jmp", "eor", "lsr", "ill",
    "bvc", "eor", "ill", "ill", "ill", "eor", "lsr", "ill", "cli", "eor", "ill", "ill", "ill", "eor", "lsr", "ill",
    "rts", "adc", "ill", "ill", "ill", "adc", "ror", "ill", "pla", "adc", "ror", "ill", "jmp", "adc", "ror", "ill",
    "bvs", "adc", "ill", "ill", "ill", "adc", "ror", "ill", "sei", "adc", "ill", "ill", "ill", "adc", "ror", "ill",
    "ill", "sta", "ill", "ill", "sty", "sta", "stx", "ill", "dey", "ill", "txa", "ill", "sty", "sta", "stx", "ill",
    "bcc", "sta", "ill", "ill", "sty", "sta", "stx", "ill", "tya", "sta", "txs", "ill", "ill", "sta", "ill", "ill",
    "ldy", "lda", "ldx", "ill", "ldy", "lda", "ldx", "ill", "tay", "lda", "tax", "ill", "ldy", "lda", "ldx", "ill",
    "bcs", "lda", "ill", "ill", "ldy", "lda", "ldx", "ill", "clv", "lda", "tsx", "ill", "ldy", "lda", "ldx", "ill",
    "cpy", "cmp", "ill", "ill", "cpy", "cmp", "dec", "ill", "iny", "cmp", "dex", "ill", "cpy", "cmp", "dec", "ill",
    "bne", "cmp", "ill", "ill", "ill", "cmp", "dec", "ill", "cld", "cmp", "ill", "ill", "ill", "cmp", "dec", "ill",
    "cpx", "sbc", "ill", "ill", "cpx", "sbc", "inc", "ill", "inx", "sbc", "nop", "ill", "cpx", "sbc", "inc", "ill",
    "beq", "sbc", "ill", "ill", "ill", "sbc", "inc", "ill", "sed", "sbc", "ill", "ill", "ill", "sbc", "inc", "ill",
];

#[rustfmt::skip]
pub const ADDRESSING_MODE_TABLE: [Mode; 256] = [
    Mode::Implied, Mode::IndirectX, Mode::None, Mode::None, Mode::None, Mode::ZeroPage, Mode::ZeroPage, Mode::None, Mode::Implied, Mode::Immediate, Mode::RegisterA, Mode::None, Mode::None, Mode::Absolute, Mode::Absolute, Mode::None,
    Mode::Relative, Mode::IndirectY, Mode::None, Mode::None, Mode::None, Mode::ZeroPageX, Mode::ZeroPageX, Mode::None, Mode::Implied, Mode::AbsoluteY, Mode::None, Mode::None, Mode::None, Mode::AbsoluteX, Mode::AbsoluteX, Mode::None,
    Mode::Absolute, Mode::IndirectX, Mode::None, Mode::None, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::None, Mode::Implied, Mode::Immediate, Mode::RegisterA, Mode::None, Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::None,
    Mode::Relative, Mode::IndirectY, Mode::None, Mode::None, Mode::None, Mode::ZeroPageX, Mode::ZeroPageX, Mode::None, Mode::Implied, Mode::AbsoluteY, Mode::None, Mode::None, Mode::None, Mode::AbsoluteX, Mode::AbsoluteX, Mode::None,
    Mode::None, Mode::IndirectX, Mode::None, Mode::None, Mode::None, Mode::ZeroPage, Mode::ZeroPage, Mode::None, Mode::Implied, Mode::Immediate, Mode::RegisterA, Mode::None, Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::None,
    Mode::Relative, Mode::IndirectY, Mode::None, Mode::None, Mode::None, Mode::ZeroPageX, Mode::ZeroPageX, Mode::None, Mode::Implied, Mode::AbsoluteY, Mode::None, Mode::None, Mode::None, Mode::AbsoluteX, Mode::AbsoluteX, Mode::None,
    Mode::Implied, Mode::IndirectX, Mode::None, Mode::None, Mode::None, Mode::ZeroPage, Mode::ZeroPage, Mode::None, Mode::Implied, Mode::Immediate, Mode::RegisterA, Mode::None, Mode::Indirect, Mode::Absolute, Mode::Absolute, Mode::None,
    Mode::Relative, Mode::IndirectY, Mode::None, Mode::None, Mode::None, Mode::ZeroPageX, Mode::ZeroPageX, Mode::None, Mode::Implied, Mode::AbsoluteY, Mode::None, Mode::None, Mode::None, Mode::AbsoluteX, Mode::AbsoluteX, Mode::None,
    Mode::None, Mode::IndirectX, Mode::None, Mode::None, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::None, Mode::Implied, Mode::None, Mode::Implied, Mode::None, Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::None,
    Mode::Relative, Mode::IndirectY, Mode::None, Mode::None, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageY, Mode::None, Mode::Implied, Mode::AbsoluteY, Mode::Implied, Mode::None, Mode::None, Mode::AbsoluteX, Mode::None, Mode::None,
    Mode::Immediate, Mode::IndirectX, Mode::Immediate, Mode::None, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::None, Mode::Implied, Mode::Immediate, Mode::Implied, Mode::None, Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::None,
    Mode::Relative, Mode::IndirectY, Mode::None, Mode::None, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageY, Mode::None, Mode::Implied, Mode::AbsoluteY, Mode::Implied, Mode::None, Mode::AbsoluteX, Mode::AbsoluteX, Mode::AbsoluteY, Mode::None,
    Mode::Immediate, Mode::IndirectX, Mode::None, Mode::None, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::None, Mode::Implied, Mode::Immediate, Mode::Implied, Mode::None, Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::None,
    Mode::Relative, Mode::IndirectY, Mode::None, Mode::None, Mode::None, Mode::ZeroPageX, Mode::ZeroPageX, Mode::None, Mode::Implied, Mode::AbsoluteY, Mode::None, Mode::None, Mode::None, Mode::AbsoluteX, Mode::AbsoluteX, Mode::None,
    Mode::Immediate, Mode::IndirectX, Mode::None, Mode::None, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::None, Mode::Implied, Mode::Immediate, Mode::Implied, Mode::None, Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::None,
    Mode::Relative, Mode::IndirectY, Mode::None, Mode::None, Mode::None, Mode::ZeroPageX, Mode::ZeroPageX, Mode::None, Mode::Implied, Mode::AbsoluteY, Mode::None, Mode::None, Mode::None, Mode::AbsoluteX, Mode::AbsoluteX, Mode::None,
];

#[rustfmt::skip]
pub const OPERATION_FN_TABLE: [OperationFn; 256] = [
    /* 00 */ brk, /* 01 */ op!(ora), /* 02 */ unimplemented, /* 03 */ unimplemented,
    /* 04 */ unimplemented, /* 05 */ op!(ora), /* 06 */ op!(asl), /* 07 */ unimplemented,
    /* 08 */ op!(php), /* 09 */ op!(ora), /* 0a */ op!(asl), /* 0b */ unimplemented,
    /* 0c */ unimplemented, /* 0d */ op!(ora), /* 0e */ op!(asl), /* 0f */ unimplemented,
    /* 10 */ op!(bpl), /* 11 */ op!(ora), /* 12 */ unimplemented, /* 13 */ unimplemented,
    /* 14 */ unimplemented, /* 15 */ op!(ora), /* 16 */ op!(asl), /* 17 */ unimplemented,
    /* 18 */ op!(clc), /* 19 */ op!(ora), /* 1a */ unimplemented, /* 1b */ unimplemented,
    /* 1c */ unimplemented, /* 1d */ op!(ora), /* 1e */ op!(asl), /* 1f */ unimplemented,
    /* 20 */ op!(jsr), /* 21 */ op!(and), /* 22 */ unimplemented, /* 23 */ unimplemented,
    /* 24 */ op!(bit), /* 25 */ op!(and), /* 26 */ op!(rol), /* 27 */ unimplemented,
    /* 28 */ op!(plp), /* 29 */ op!(and), /* 2a */ op!(rol), /* 2b */ unimplemented,
    /* 2c */ op!(bit), /* 2d */ op!(and), /* 2e */ op!(rol), /* 2f */ unimplemented,
    /* 30 */ op!(bmi), /* 31 */ op!(and), /* 32 */ unimplemented, /* 33 */ unimplemented,
    /* 34 */ unimplemented, /* 35 */ op!(and), /* 36 */ op!(rol), /* 37 */ unimplemented,
    /* 38 */ op!(sec), /* 39 */ op!(and), /* 3a */ unimplemented, /* 3b */ unimplemented,
    /* 3c */ unimplemented, /* 3d */ op!(and), /* 3e */ op!(rol), /* 3f */ unimplemented,
    /* 40 */ unimplemented, /* 41 */ op!(eor), /* 42 */ unimplemented, /* 43 */ unimplemented,
    /* 44 */ unimplemented, /* 45 */ op!(eor), /* 46 */ op!(lsr), /* 47 */ unimplemented,
    /* 48 */ op!(pha), /* 49 */ op!(eor), /* 4a */ op!(lsr), /* 4b */ unimplemented,
    /* 4c */ op!(jmp), /* 4d */ op!(eor), /* 4e */ op!(lsr), /* 4f */ unimplemented,
    /* 50 */ op!(bvc), /* 51 */ op!(eor), /* 52 */ unimplemented, /* 53 */ unimplemented,
    /* 54 */ unimplemented, /* 55 */ op!(eor), /* 56 */ op!(lsr), /* 57 */ unimplemented,
    /* 58 */ op!(cli), /* 59 */ op!(eor), /* 5a */ unimplemented, /* 5b */ unimplemented,
    /* 5c */ unimplemented, /* 5d */ op!(eor), /* 5e */ op!(lsr), /* 5f */ unimplemented,
    /* 60 */ op!(rts), /* 61 */ op!(adc), /* 62 */ unimplemented, /* 63 */ unimplemented,
    /* 64 */ unimplemented, /* 65 */ op!(adc), /* 66 */ op!(ror), /* 67 */ unimplemented,
    /* 68 */ op!(pla), /* 69 */ op!(adc), /* 6a */ op!(ror), /* 6b */ unimplemented,
    /* 6c */ op!(jmp), /* 6d */ op!(adc), /* 6e */ op!(ror), /* 6f */ unimplemented,
    /* 70 */ op!(bvs), /* 71 */ op!(adc), /* 72 */ unimplemented, /* 73 */ unimplemented,
    /* 74 */ unimplemented, /* 75 */ op!(adc), /* 76 */ op!(ror), /* 77 */ unimplemented,
    /* 78 */ op!(sei), /* 79 */ op!(adc), /* 7a */ unimplemented, /* 7b */ unimplemented,
    /* 7c */ unimplemented, /* 7d */ op!(adc), /* 7e */ op!(ror), /* 7f */ unimplemented,
    /* 80 */ unimplemented, /* 81 */ op!(sta), /* 82 */ unimplemented, /* 83 */ unimplemented,
    /* 84 */ op!(sty), /* 85 */ op!(sta), /* 86 */ op!(stx), /* 87 */ unimplemented,
    /* 88 */ op!(dey), /* 89 */ unimplemented, /* 8a */ op!(txa), /* 8b */ unimplemented,
    /* 8c */ op!(sty), /* 8d */ op!(sta), /* 8e */ op!(stx), /* 8f */ unimplemented,
    /* 90 */ op!(bcc), /* 91 */ op!(sta), /* 92 */ unimplemented, /* 93 */ unimplemented,
    /* 94 */ op!(sty), /* 95 */ op!(sta), /* 96 */ op!(stx), /* 97 */ unimplemented,
    /* 98 */ op!(tya), /* 99 */ op!(sta), /* 9a */ op!(txs), /* 9b */ unimplemented,
    /* 9c */ unimplemented, /* 9d */ op!(sta), /* 9e */ unimplemented, /* 9f */ unimplemented,
    /* a0 */ op!(ldy), /* a1 */ op!(lda), /* a2 */ op!(ldx), /* a3 */ unimplemented,
    /* a4 */ op!(ldy), /* a5 */ op!(lda), /* a6 */ op!(ldx), /* a7 */ unimplemented,
    /* a8 */ op!(tay), /* a9 */ op!(lda), /* aa */ op!(tax), /* ab */ unimplemented,
    /* ac */ op!(ldy), /* ad */ op!(lda), /* ae */ op!(ldx), /* af */ unimplemented,
    /* b0 */ op!(bcs), /* b1 */ op!(lda), /* b2 */ unimplemented, /* b3 */ unimplemented,
    /* b4 */ op!(ldy), /* b5 */ op!(lda), /* b6 */ op!(ldx), /* b7 */ unimplemented,
    /* b8 */ op!(clv), /* b9 */ op!(lda), /* ba */ op!(tsx), /* bb */ unimplemented,
    /* bc */ op!(ldy), /* bd */ op!(lda), /* be */ op!(ldx), /* bf */ unimplemented,
    /* c0 */ op!(cpy), /* c1 */ op!(cmp), /* c2 */ unimplemented, /* c3 */ unimplemented,
    /* c4 */ op!(cpy), /* c5 */ op!(cmp), /* c6 */ op!(dec), /* c7 */ unimplemented,
    /* c8 */ op!(iny), /* c9 */ op!(cmp), /* ca */ op!(dex), /* cb */ unimplemented,
    /* cc */ op!(cpy), /* cd */ op!(cmp), /* ce */ op!(dec), /* cf */ unimplemented,
    /* d0 */ op!(bne), /* d1 */ op!(cmp), /* d2 */ unimplemented, /* d3 */ unimplemented,
    /* d4 */ unimplemented, /* d5 */ op!(cmp), /* d6 */ op!(dec), /* d7 */ unimplemented,
    /* d8 */ op!(cld), /* d9 */ op!(cmp), /* da */ unimplemented, /* db */ unimplemented,
    /* dc */ unimplemented, /* dd */ op!(cmp), /* de */ op!(dec), /* df */ unimplemented,
    /* e0 */ op!(cpx), /* e1 */ op!(sbc), /* e2 */ unimplemented, /* e3 */ unimplemented,
    /* e4 */ op!(cpx), /* e5 */ op!(sbc), /* e6 */ op!(inc), /* e7 */ unimplemented,
    /* e8 */ op!(inx), /* e9 */ op!(sbc), /* ea */ op!(nop), /* eb */ unimplemented,
    /* ec */ op!(cpx), /* ed */ op!(sbc), /* ee */ op!(inc), /* ef */ unimplemented,
    /* f0 */ op!(beq), /* f1 */ op!(sbc), /* f2 */ unimplemented, /* f3 */ unimplemented,
    /* f4 */ unimplemented, /* f5 */ op!(sbc), /* f6 */ op!(inc), /* f7 */ unimplemented,
    /* f8 */ op!(sed), /* f9 */ op!(sbc), /* fa */ unimplemented, /* fb */ unimplemented,
    /* fc */ unimplemented, /* fd */ op!(sbc), /* fe */ op!(inc), /* ff */ unimplemented,
];
