use crate::cpu::{Cpu, StatusFlag};
use crate::error::Result;
use crate::opcodes::Mode;

/// Branch on result plus (N clear).
pub fn bpl(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    let take = !cpu.is_status_flag_set(StatusFlag::Negative);
    cpu.branch_if(take)
}

/// Branch on result minus (N set).
pub fn bmi(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    let take = cpu.is_status_flag_set(StatusFlag::Negative);
    cpu.branch_if(take)
}

/// Branch on overflow clear.
pub fn bvc(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    let take = !cpu.is_status_flag_set(StatusFlag::Overflow);
    cpu.branch_if(take)
}

/// Branch on overflow set.
pub fn bvs(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    let take = cpu.is_status_flag_set(StatusFlag::Overflow);
    cpu.branch_if(take)
}

/// Branch on carry clear.
pub fn bcc(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    let take = !cpu.is_status_flag_set(StatusFlag::Carry);
    cpu.branch_if(take)
}

/// Branch on carry set.
pub fn bcs(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    let take = cpu.is_status_flag_set(StatusFlag::Carry);
    cpu.branch_if(take)
}

/// Branch on result not zero.
pub fn bne(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    let take = !cpu.is_status_flag_set(StatusFlag::Zero);
    cpu.branch_if(take)
}

/// Branch on result zero.
pub fn beq(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    let take = cpu.is_status_flag_set(StatusFlag::Zero);
    cpu.branch_if(take)
}

/// Unconditional jump. `Indirect` mode is only ever assigned to this
/// instruction (`JMP (abs)`); `Absolute` is the direct form.
/// Function: PC <- address
/// Flags: none
pub fn jmp(cpu: &mut Cpu, mode: Mode) -> Result<()> {
    let address = cpu.get_operand_address(mode)?;
    cpu.pc = address;
    Ok(())
}

/// Jump to subroutine: pushes the return address (the last byte of this
/// instruction, not the next instruction) high-then-low, then jumps.
/// Function: (S--, S--) <- PC - 1; PC <- address
/// Flags: none
pub fn jsr(cpu: &mut Cpu, mode: Mode) -> Result<()> {
    let address = cpu.get_operand_address(mode)?;
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_u8((return_address >> 8) as u8)?;
    cpu.push_u8(return_address as u8)?;
    cpu.pc = address;
    Ok(())
}

/// Return from subroutine: pulls low then high, then advances past the
/// `JSR` operand byte `JSR` backed up over.
/// Function: PC <- (pulled) + 1
/// Flags: none
pub fn rts(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    let lo = u16::from(cpu.pull_u8()?);
    let hi = u16::from(cpu.pull_u8()?);
    cpu.pc = ((hi << 8) | lo).wrapping_add(1);
    Ok(())
}

/// Force break: sets the break flag and halts the interpreter loop. Does
/// not push a return frame (see the error-handling design notes).
/// Function: B <- 1; halt
/// Flags: B
pub fn brk(cpu: &mut Cpu, _mode: Mode) -> Result<bool> {
    cpu.set_status_flag(StatusFlag::Break, true);
    Ok(false)
}

/// Clear carry flag.
pub fn clc(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    cpu.set_status_flag(StatusFlag::Carry, false);
    Ok(())
}

/// Set carry flag.
pub fn sec(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    cpu.set_status_flag(StatusFlag::Carry, true);
    Ok(())
}

/// Clear decimal mode flag. Arithmetic stays binary-only regardless; D is
/// otherwise non-functional (see the design notes).
pub fn cld(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    cpu.set_status_flag(StatusFlag::Decimal, false);
    Ok(())
}

/// Set decimal mode flag.
pub fn sed(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    cpu.set_status_flag(StatusFlag::Decimal, true);
    Ok(())
}

/// Clear interrupt disable flag.
pub fn cli(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    cpu.set_status_flag(StatusFlag::InterruptDisable, false);
    Ok(())
}

/// Set interrupt disable flag.
pub fn sei(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    cpu.set_status_flag(StatusFlag::InterruptDisable, true);
    Ok(())
}

/// Clear overflow flag.
pub fn clv(cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    cpu.set_status_flag(StatusFlag::Overflow, false);
    Ok(())
}

/// No operation.
pub fn nop(_cpu: &mut Cpu, _mode: Mode) -> Result<()> {
    Ok(())
}
