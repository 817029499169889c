//! Sharp LR35902 (Game Boy CPU) instruction core.
//!
//! The core decodes opcodes against bit-pattern tables and executes them on
//! an owned register file and `Bus`. Peripherals, banking and interrupt
//! servicing are left to whoever drives `Cpu::step`.

pub mod bits;
pub mod cpu;
pub mod error;
pub mod memory;

pub use cpu::{Cpu, ExtendedInstruction, Flag, Instruction, Reg16, Reg8, Registers};
pub use error::{CpuError, OpcodeTable, Result};
pub use memory::{Bus, Interrupt, InterruptMask, Memory};
