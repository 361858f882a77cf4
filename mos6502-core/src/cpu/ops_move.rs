use crate::cpu::Cpu;
use crate::error::Result;
use crate::opcodes::Mode;

/// Load accumulator from memory.
/// Function: A <- M
/// Flags: N, Z
pub fn lda(cpu: &mut Cpu, mode: Mode) -> Result<()> {
    let value = cpu.get_operand(mode)?;
    cpu.a = value;
    cpu.update_zero_and_negative_flag(value);
    Ok(())
}

/// Load X register from memory.
/// Function: X <- M
/// Flags: N, Z
pub fn ldx(cpu: &mut Cpu, mode: Mode) -> Result<()> {
    let value = cpu.get_operand(mode)?;
    cpu.x = value;
    cpu.update_zero_and_negative_flag(value);
    Ok(())
}

/// Load Y register from memory.
/// Function: Y <- M
/// Flags: N, Z
pub fn ldy(cpu: &mut Cpu, mode: Mode) -> Result<()> {
    let value = cpu.get_operand(mode)?;
    cpu.y = value;
    cpu.update_zero_and_negative_flag(value);
    Ok(())
}

/// Store accumulator to memory.
/// Function: M <- A
/// Flags: none
pub fn sta(cpu: &mut Cpu, mode: Mode) -> Result<()> {
    let address = cpu.get_operand_address(mode)?;
    let value = cpu.a;
    cpu.memory.poke(address, value)
}

/// Store X register to memory.
/// Function: M <- X
/// Flags: none
pub fn stx(cpu: &mut Cpu, mode: Mode) -> Result<()> {
    let address = cpu.get_operand_address(mode)?;
    let value = cpu.x;
    cpu.memory.poke(address, value)
}

/// Store Y register to memory.
/// Function: M <- Y
/// Flags: none
pub fn sty(cpu: &mut Cpu, mode: Mode) -> Result<()> {
    let address = cpu.get_operand_address(mode)?;
    let value = cpu.y;
    cpu.memory.poke(address, value)
}

/// Transfer accumulator to X.
/// Function: X <- A
/// Flags: N, Z
pub fn tax(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    cpu.x = cpu.a;
    cpu.update_zero_and_negative_flag(cpu.x);
    Ok(())
}

/// Transfer X to accumulator.
/// Function: A <- X
/// Flags: N, Z
pub fn txa(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    cpu.a = cpu.x;
    cpu.update_zero_and_negative_flag(cpu.a);
    Ok(())
}

/// Transfer accumulator to Y.
/// Function: Y <- A
/// Flags: N, Z
pub fn tay(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    cpu.y = cpu.a;
    cpu.update_zero_and_negative_flag(cpu.y);
    Ok(())
}

/// Transfer Y to accumulator.
/// Function: A <- Y
/// Flags: N, Z
pub fn tya(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    cpu.a = cpu.y;
    cpu.update_zero_and_negative_flag(cpu.a);
    Ok(())
}

/// Transfer stack pointer to X.
/// Function: X <- S
/// Flags: N, Z
pub fn tsx(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    cpu.x = cpu.s;
    cpu.update_zero_and_negative_flag(cpu.x);
    Ok(())
}

/// Transfer X to stack pointer.
/// Function: S <- X
/// Flags: none
pub fn txs(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    cpu.s = cpu.x;
    Ok(())
}

/// Push accumulator onto the stack.
/// Function: (S--) <- A
/// Flags: none
pub fn pha(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    let value = cpu.a;
    cpu.push_u8(value)
}

/// Pull accumulator from the stack.
/// Function: A <- (++S)
/// Flags: N, Z
pub fn pla(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    let value = cpu.pull_u8()?;
    cpu.a = value;
    cpu.update_zero_and_negative_flag(value);
    Ok(())
}

/// Push status flags onto the stack. The break and expansion bits read as
/// set in the pushed byte, matching real 6502 `PHP` behavior.
/// Function: (S--) <- P
/// Flags: none
pub fn php(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    let value = cpu.p | 0b0011_0000;
    cpu.push_u8(value)
}

/// Pull status flags from the stack.
/// Function: P <- (++S)
/// Flags: all, from the pulled byte
pub fn plp(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    let value = cpu.pull_u8()?;
    cpu.p = value | 0b0010_0000;
    Ok(())
}
