use std::fmt;

use thiserror::Error;

use crate::cpu::Flag;

pub type Result<T> = std::result::Result<T, CpuError>;

/// Which decode table rejected an opcode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OpcodeTable {
    Primary,
    /// Opcodes following the `0xCB` prefix.
    Extended,
}

impl fmt::Display for OpcodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpcodeTable::Primary => f.write_str("primary"),
            OpcodeTable::Extended => f.write_str("extended"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum CpuError {
    /// The opcode matched no pattern. `bits` is the 8-character binary form.
    #[error("unknown {table} instruction 0b{bits}")]
    UnknownInstruction { table: OpcodeTable, bits: String },
    #[error("flag {flag:?} can only be set to 0 or 1, got {value}")]
    InvalidFlagValue { flag: Flag, value: u8 },
    #[error("bit position {0} is outside 0..=7")]
    BitPosition(u8),
    #[error("bit value {0} is not 0 or 1")]
    BitValue(u8),
    #[error("{0} bits do not fit in a u32")]
    BitCount(usize),
}

impl CpuError {
    pub(crate) fn unknown(table: OpcodeTable, opcode: u8) -> Self {
        CpuError::UnknownInstruction {
            table,
            bits: format!("{opcode:08b}"),
        }
    }
}
