pub mod ops_arith;
pub mod ops_jump;
pub mod ops_move;
#[cfg(test)]
mod test;
#[cfg(test)]
mod test_helpers;

use colored::*;

use crate::error::{Error, Result};
use crate::memory::Memory;
use crate::opcodes::{Mode, ADDRESSING_MODE_TABLE, OPCODE_STRING_TABLE, OPERATION_FN_TABLE};

pub const STACK_PAGE: u16 = 0x0100;

/// Bitmask values of the status register `P`. Bit 5 ("expansion") has no
/// hardware meaning; it reads back as 1 always.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusFlag {
    Carry = 0b0000_0001,
    Zero = 0b0000_0010,
    InterruptDisable = 0b0000_0100,
    Decimal = 0b0000_1000,
    Break = 0b0001_0000,
    Expansion = 0b0010_0000,
    Overflow = 0b0100_0000,
    Negative = 0b1000_0000,
}

pub const RESET_STATUS_FLAG: u8 = StatusFlag::Expansion as u8;

pub struct Cpu {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub p: u8,
    pub s: u8,
    pub pc: u16,
    pub memory: Memory,
}

impl Cpu {
    pub fn new(size: usize) -> Self {
        Cpu {
            a: 0,
            x: 0,
            y: 0,
            p: RESET_STATUS_FLAG,
            s: 0xff,
            pc: 0,
            memory: Memory::new(size),
        }
    }

    pub fn load(&mut self, buf: &[u8], offset: u16, len: u16) -> Result<()> {
        self.memory.load(buf, offset, len)
    }

    pub fn store(&self, buf: &mut [u8], offset: u16, len: u16) -> Result<()> {
        self.memory.store(buf, offset, len)
    }

    pub fn set_entry(&mut self, addr: u16) {
        self.pc = addr;
    }

    // -- status flags --------------------------------------------------

    pub fn set_status_flag(&mut self, flag: StatusFlag, on: bool) {
        if on {
            self.p |= flag as u8;
        } else {
            self.p &= !(flag as u8);
        }
    }

    pub fn is_status_flag_set(&self, flag: StatusFlag) -> bool {
        self.p & (flag as u8) != 0
    }

    pub fn get_carry(&self) -> u8 {
        u8::from(self.is_status_flag_set(StatusFlag::Carry))
    }

    pub fn update_zero_and_negative_flag(&mut self, value: u8) {
        self.set_status_flag(StatusFlag::Zero, value == 0);
        self.set_status_flag(StatusFlag::Negative, value & 0x80 != 0);
    }

    /// A + M + C, folding the incoming carry, with the two's-complement
    /// overflow rule. Shared by `ADC` and (via one's-complement of the
    /// operand) `SBC`.
    pub fn adc_value(&mut self, value: u8) {
        let carry_in = u16::from(self.get_carry());
        let sum = u16::from(self.a) + u16::from(value) + carry_in;
        let result = sum as u8;
        let overflow = (self.a ^ result) & (value ^ result) & 0x80 != 0;
        self.set_status_flag(StatusFlag::Carry, sum > 0xff);
        self.set_status_flag(StatusFlag::Overflow, overflow);
        self.update_zero_and_negative_flag(result);
        self.a = result;
    }

    pub fn sbc_value(&mut self, value: u8) {
        self.adc_value(!value);
    }

    pub fn compare(&mut self, register: u8, value: u8) {
        let result = register.wrapping_sub(value);
        self.set_status_flag(StatusFlag::Carry, register >= value);
        self.set_status_flag(StatusFlag::Zero, register == value);
        self.set_status_flag(StatusFlag::Negative, result & 0x80 != 0);
    }

    // -- memory / operand fetch -----------------------------------------

    /// Reads the byte at `PC` and advances `PC`. Used for operand bytes; a
    /// failed read here is a `TruncatedOperand`, not a plain `OutOfBounds`.
    pub fn next_u8(&mut self) -> Result<u8> {
        let pc = self.pc;
        let value = self
            .memory
            .peek(pc)
            .map_err(|_| Error::TruncatedOperand { pc })?;
        self.pc = self.pc.wrapping_add(1);
        Ok(value)
    }

    pub fn next_u16(&mut self) -> Result<u16> {
        let lo = self.next_u8()?;
        let hi = self.next_u8()?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    /// Resolves the 16-bit effective address for every mode that has one.
    /// `Immediate`, `RegisterA`, `Implied`, and `Relative` are handled by
    /// their instructions directly and never reach here.
    pub fn get_operand_address(&mut self, mode: Mode) -> Result<u16> {
        match mode {
            Mode::ZeroPage => Ok(u16::from(self.next_u8()?)),
            Mode::ZeroPageX => Ok(u16::from(self.next_u8()?.wrapping_add(self.x))),
            Mode::ZeroPageY => Ok(u16::from(self.next_u8()?.wrapping_add(self.y))),
            Mode::Absolute => self.next_u16(),
            Mode::AbsoluteX => Ok(self.next_u16()?.wrapping_add(u16::from(self.x))),
            Mode::AbsoluteY => Ok(self.next_u16()?.wrapping_add(u16::from(self.y))),
            Mode::Indirect => {
                let pointer = self.next_u16()?;
                self.read_u16_wrapping(pointer)
            }
            Mode::IndirectX => {
                let zero_page = self.next_u8()?.wrapping_add(self.x);
                self.read_u16_zero_page(zero_page)
            }
            Mode::IndirectY => {
                let zero_page = self.next_u8()?;
                let base = self.read_u16_zero_page(zero_page)?;
                Ok(base.wrapping_add(u16::from(self.y)))
            }
            _ => unreachable!("{:?} has no addressable operand", mode),
        }
    }

    /// Reads a little-endian 16-bit value from two zero-page cells,
    /// wrapping the high byte's address within the zero page.
    fn read_u16_zero_page(&self, low_address: u8) -> Result<u16> {
        let lo = self.memory.peek(u16::from(low_address))?;
        let hi = self.memory.peek(u16::from(low_address.wrapping_add(1)))?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    /// Reads a little-endian 16-bit value at `address`, wrapping the high
    /// byte's address modulo 65536 (used by `JMP (abs)`).
    fn read_u16_wrapping(&self, address: u16) -> Result<u16> {
        let lo = self.memory.peek(address)?;
        let hi = self.memory.peek(address.wrapping_add(1))?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    /// Reads the byte an instruction operates on, for modes that only ever
    /// read (loads, arithmetic, compares, logic).
    pub fn get_operand(&mut self, mode: Mode) -> Result<u8> {
        match mode {
            Mode::Immediate => self.next_u8(),
            Mode::RegisterA => Ok(self.a),
            _ => {
                let address = self.get_operand_address(mode)?;
                self.memory.peek(address)
            }
        }
    }

    /// Reads, transforms, and writes back the operand of a read-modify-write
    /// instruction (`ASL`, `LSR`, `ROL`, `ROR`, `INC`, `DEC`), returning the
    /// new value so the caller can update flags from it.
    pub fn modify_operand(&mut self, mode: Mode, f: impl FnOnce(&mut Cpu, u8) -> u8) -> Result<u8> {
        match mode {
            Mode::RegisterA => {
                let current = self.a;
                let result = f(self, current);
                self.a = result;
                Ok(result)
            }
            _ => {
                let address = self.get_operand_address(mode)?;
                let value = self.memory.peek(address)?;
                let result = f(self, value);
                self.memory.poke(address, result)?;
                Ok(result)
            }
        }
    }

    // -- stack ------------------------------------------------------------

    pub fn push_u8(&mut self, value: u8) -> Result<()> {
        self.memory.poke(STACK_PAGE + u16::from(self.s), value)?;
        self.s = self.s.wrapping_sub(1);
        Ok(())
    }

    pub fn pull_u8(&mut self) -> Result<u8> {
        self.s = self.s.wrapping_add(1);
        self.memory.peek(STACK_PAGE + u16::from(self.s))
    }

    /// Conditional relative branch: always consumes the displacement byte,
    /// only takes it when `condition` holds.
    pub fn branch_if(&mut self, condition: bool) -> Result<()> {
        let displacement = self.next_u8()?;
        if condition {
            self.pc = self.pc.wrapping_add(displacement as i8 as u16);
        }
        Ok(())
    }

    // -- dispatch -----------------------------------------------------------

    /// Executes one instruction. `Ok(true)` to keep running, `Ok(false)` on
    /// a clean `BRK` halt, `Err` on a fatal condition.
    pub fn step(&mut self) -> Result<bool> {
        let pc = self.pc;
        let opcode = self.memory.peek(pc)?;
        self.pc = self.pc.wrapping_add(1);

        let mode = ADDRESSING_MODE_TABLE[opcode as usize];
        if mode == Mode::None {
            eprintln!(
                "{} opcode {:#04x} ({}) at pc={:#06x}",
                "illegal:".red().bold(),
                opcode,
                self.opcode_name(opcode),
                pc
            );
            self.dump_registers();
            return Err(Error::IllegalInstruction { opcode, pc });
        }

        OPERATION_FN_TABLE[opcode as usize](self, mode)
    }

    /// Loops `step` until it halts. If `trace`, prints the mnemonic about to
    /// execute and dumps registers and memory after every step.
    pub fn run(&mut self, trace: bool) -> Result<()> {
        loop {
            if trace {
                if let Ok(opcode) = self.memory.peek(self.pc) {
                    eprintln!(
                        "{} {}",
                        format!("{:#06x}", self.pc).dimmed(),
                        self.opcode_name(opcode)
                    );
                }
            }
            let keep_going = self.step()?;
            if trace {
                self.dump_registers();
                self.dump_memory();
            }
            if !keep_going {
                return Ok(());
            }
        }
    }

    // -- diagnostics --------------------------------------------------------

    pub fn dump_registers(&self) {
        let flags = [
            (StatusFlag::Negative, 'N'),
            (StatusFlag::Overflow, 'V'),
            (StatusFlag::Expansion, '-'),
            (StatusFlag::Break, 'B'),
            (StatusFlag::Decimal, 'D'),
            (StatusFlag::InterruptDisable, 'I'),
            (StatusFlag::Zero, 'Z'),
            (StatusFlag::Carry, 'C'),
        ];
        let status: String = flags
            .iter()
            .map(|(flag, letter)| {
                if self.is_status_flag_set(*flag) {
                    *letter
                } else {
                    '.'
                }
            })
            .collect();

        eprintln!("{}", "registers".bold());
        eprintln!("  A: {:#04x}  X: {:#04x}  Y: {:#04x}", self.a, self.x, self.y);
        eprintln!("  S: {:#04x}  PC: {:#06x}", self.s, self.pc);
        eprintln!("  P: {} ({})", status.yellow(), format!("{:#04x}", self.p));
    }

    pub fn dump_memory(&self) {
        self.memory.dump();
    }

    pub fn opcode_name(&self, opcode: u8) -> &'static str {
        OPCODE_STRING_TABLE[opcode as usize]
    }
}
