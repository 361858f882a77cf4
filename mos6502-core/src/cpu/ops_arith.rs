use crate::cpu::{Cpu, StatusFlag};
use crate::error::Result;
use crate::opcodes::Mode;

/// Bitwise OR with accumulator.
/// Function: A <- A | M
/// Flags: N, Z
pub fn ora(cpu: &mut Cpu, mode: Mode) -> Result<()> {
    let value = cpu.get_operand(mode)?;
    cpu.a |= value;
    cpu.update_zero_and_negative_flag(cpu.a);
    Ok(())
}

/// Bitwise AND with accumulator.
/// Function: A <- A & M
/// Flags: N, Z
pub fn and(cpu: &mut Cpu, mode: Mode) -> Result<()> {
    let value = cpu.get_operand(mode)?;
    cpu.a &= value;
    cpu.update_zero_and_negative_flag(cpu.a);
    Ok(())
}

/// Bitwise exclusive-OR with accumulator.
/// Function: A <- A ^ M
/// Flags: N, Z
pub fn eor(cpu: &mut Cpu, mode: Mode) -> Result<()> {
    let value = cpu.get_operand(mode)?;
    cpu.a ^= value;
    cpu.update_zero_and_negative_flag(cpu.a);
    Ok(())
}

/// Add memory to accumulator with carry.
/// Function: A <- A + M + C
/// Flags: N, V, Z, C
pub fn adc(cpu: &mut Cpu, mode: Mode) -> Result<()> {
    let value = cpu.get_operand(mode)?;
    cpu.adc_value(value);
    Ok(())
}

/// Subtract memory from accumulator with borrow, implemented as ADC of the
/// operand's ones'-complement -- the standard 6502 identity, so it shares
/// ADC's carry/overflow logic exactly.
/// Function: A <- A - M - (1 - C)
/// Flags: N, V, Z, C
pub fn sbc(cpu: &mut Cpu, mode: Mode) -> Result<()> {
    let value = cpu.get_operand(mode)?;
    cpu.sbc_value(value);
    Ok(())
}

/// Test bits in memory against accumulator. Unlike every other logic op,
/// N and V come from the operand itself, not from the masked result.
/// Function: Z <- (A & M) == 0
/// Flags: N (M bit 7), V (M bit 6), Z
pub fn bit(cpu: &mut Cpu, mode: Mode) -> Result<()> {
    let value = cpu.get_operand(mode)?;
    cpu.set_status_flag(StatusFlag::Zero, cpu.a & value == 0);
    cpu.set_status_flag(StatusFlag::Negative, value & 0x80 != 0);
    cpu.set_status_flag(StatusFlag::Overflow, value & 0x40 != 0);
    Ok(())
}

/// Compare accumulator with memory.
/// Function: A - M
/// Flags: N, Z, C
pub fn cmp(cpu: &mut Cpu, mode: Mode) -> Result<()> {
    let value = cpu.get_operand(mode)?;
    let a = cpu.a;
    cpu.compare(a, value);
    Ok(())
}

/// Compare X register with memory.
/// Function: X - M
/// Flags: N, Z, C
pub fn cpx(cpu: &mut Cpu, mode: Mode) -> Result<()> {
    let value = cpu.get_operand(mode)?;
    let x = cpu.x;
    cpu.compare(x, value);
    Ok(())
}

/// Compare Y register with memory.
/// Function: Y - M
/// Flags: N, Z, C
pub fn cpy(cpu: &mut Cpu, mode: Mode) -> Result<()> {
    let value = cpu.get_operand(mode)?;
    let y = cpu.y;
    cpu.compare(y, value);
    Ok(())
}

/// Increment memory.
/// Function: M <- M + 1
/// Flags: N, Z
pub fn inc(cpu: &mut Cpu, mode: Mode) -> Result<()> {
    let result = cpu.modify_operand(mode, |_, value| value.wrapping_add(1))?;
    cpu.update_zero_and_negative_flag(result);
    Ok(())
}

/// Decrement memory.
/// Function: M <- M - 1
/// Flags: N, Z
pub fn dec(cpu: &mut Cpu, mode: Mode) -> Result<()> {
    let result = cpu.modify_operand(mode, |_, value| value.wrapping_sub(1))?;
    cpu.update_zero_and_negative_flag(result);
    Ok(())
}

/// Increment X register.
/// Function: X <- X + 1
/// Flags: N, Z, and C on wraparound to `$00` (a documented deviation from a
/// faithful 6502, required by this core's boundary-case contract).
pub fn inx(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zero_and_negative_flag(cpu.x);
    cpu.set_status_flag(StatusFlag::Carry, cpu.x == 0);
    Ok(())
}

/// Increment Y register.
/// Function: Y <- Y + 1
/// Flags: N, Z
pub fn iny(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zero_and_negative_flag(cpu.y);
    Ok(())
}

/// Decrement X register.
/// Function: X <- X - 1
/// Flags: N, Z
pub fn dex(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zero_and_negative_flag(cpu.x);
    Ok(())
}

/// Decrement Y register.
/// Function: Y <- Y - 1
/// Flags: N, Z
pub fn dey(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zero_and_negative_flag(cpu.y);
    Ok(())
}

/// Arithmetic shift left.
/// Function: C <- bit 7, M <- M << 1
/// Flags: N, Z, C
pub fn asl(cpu: &mut Cpu, mode: Mode) -> Result<()> {
    let mut carry = false;
    let result = cpu.modify_operand(mode, |_, value| {
        carry = value & 0x80 != 0;
        value << 1
    })?;
    cpu.set_status_flag(StatusFlag::Carry, carry);
    cpu.update_zero_and_negative_flag(result);
    Ok(())
}

/// Logical shift right.
/// Function: C <- bit 0, M <- M >> 1
/// Flags: N, Z, C
pub fn lsr(cpu: &mut Cpu, mode: Mode) -> Result<()> {
    let mut carry = false;
    let result = cpu.modify_operand(mode, |_, value| {
        carry = value & 0x01 != 0;
        value >> 1
    })?;
    cpu.set_status_flag(StatusFlag::Carry, carry);
    cpu.update_zero_and_negative_flag(result);
    Ok(())
}

/// Rotate left through carry.
/// Function: C, M <- M << 1 with the old C feeding into bit 0
/// Flags: N, Z, C
pub fn rol(cpu: &mut Cpu, mode: Mode) -> Result<()> {
    let carry_in = cpu.get_carry();
    let mut carry_out = false;
    let result = cpu.modify_operand(mode, |_, value| {
        carry_out = value & 0x80 != 0;
        (value << 1) | carry_in
    })?;
    cpu.set_status_flag(StatusFlag::Carry, carry_out);
    cpu.update_zero_and_negative_flag(result);
    Ok(())
}

/// Rotate right through carry.
/// Function: C, M <- M >> 1 with the old C feeding into bit 7
/// Flags: N, Z, C
pub fn ror(cpu: &mut Cpu, mode: Mode) -> Result<()> {
    let carry_in = cpu.get_carry();
    let mut carry_out = false;
    let result = cpu.modify_operand(mode, |_, value| {
        carry_out = value & 0x01 != 0;
        (value >> 1) | (carry_in << 7)
    })?;
    cpu.set_status_flag(StatusFlag::Carry, carry_out);
    cpu.update_zero_and_negative_flag(result);
    Ok(())
}
