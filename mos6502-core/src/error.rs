use thiserror::Error;

/// Fatal conditions a running CPU can hit. There are no recoverable errors
/// inside `step`: either the instruction completes, or the CPU halts with one
/// of these and `step` returns `Err`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("address {address:#06x} is out of bounds for {size}-byte memory")]
    OutOfBounds { address: u16, size: usize },

    #[error("illegal instruction {opcode:#04x} at pc={pc:#06x}")]
    IllegalInstruction { opcode: u8, pc: u16 },

    #[error("operand fetch at pc={pc:#06x} runs past the end of memory")]
    TruncatedOperand { pc: u16 },
}

pub type Result<T> = std::result::Result<T, Error>;
