mod alu;
mod cb;
pub mod decode;
mod exec;
mod helpers;
mod init;
pub mod instruction;
pub mod operand;
mod regs;

pub use decode::{decode, decode_extended};
pub use instruction::{ExtendedInstruction, Instruction};
pub use regs::{Flag, Flags, Reg16, Reg8, Registers};

use crate::error::{CpuError, Result};
use crate::memory::{Bus, Memory, MEMORY_SIZE};

/// Game Boy CPU core.
///
/// Owns its register file and the bus it executes against. `B` defaults to
/// the flat 64 KiB `Memory`; anything implementing `Bus` (a banked cartridge
/// map, a test harness) can be plugged in instead.
#[derive(Clone, Debug)]
pub struct Cpu<B: Bus = Memory> {
    pub regs: Registers,
    ime: bool,
    /// Set by HALT. The CPU keeps executing if stepped; `run` stops on it.
    halted: bool,
    /// Set by STOP, same treatment as `halted`.
    stopped: bool,
    bus: B,
}

impl<B: Bus> Cpu<B> {
    /// Flag value as 0 or 1.
    #[inline]
    pub fn flag(&self, flag: Flag) -> u8 {
        self.test_flag(flag) as u8
    }

    /// Set a flag to 0 or 1. Any other value is rejected and F is left as it
    /// was.
    pub fn set_flag(&mut self, flag: Flag, value: u8) -> Result<()> {
        match value {
            0 | 1 => {
                self.put_flag(flag, value == 1);
                Ok(())
            }
            _ => Err(CpuError::InvalidFlagValue { flag, value }),
        }
    }

    #[inline]
    pub(crate) fn test_flag(&self, flag: Flag) -> bool {
        self.regs.f.contains(flag.mask())
    }

    #[inline]
    pub(crate) fn put_flag(&mut self, flag: Flag, value: bool) {
        self.regs.f.set(flag.mask(), value);
    }

    #[inline]
    pub(crate) fn clear_flags(&mut self) {
        self.regs.f = Flags::empty();
    }

    #[inline]
    pub fn ime(&self) -> bool {
        self.ime
    }

    pub fn set_ime(&mut self, enabled: bool) {
        if self.ime != enabled {
            log::debug!("IME {} at PC=0x{:04X}", enabled as u8, self.regs.pc);
        }
        self.ime = enabled;
    }

    #[inline]
    pub fn halted(&self) -> bool {
        self.halted
    }

    #[inline]
    pub fn stopped(&self) -> bool {
        self.stopped
    }

    /// Leave HALT/STOP, e.g. after the driver has serviced an interrupt.
    pub fn resume(&mut self) {
        self.halted = false;
        self.stopped = false;
    }

    #[inline]
    pub fn bus(&self) -> &B {
        &self.bus
    }

    #[inline]
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    #[inline]
    pub fn read8(&mut self, addr: u16) -> u8 {
        self.bus.read8(addr)
    }

    #[inline]
    pub fn write8(&mut self, addr: u16, value: u8) {
        self.bus.write8(addr, value);
    }

    /// Copy `bytes` onto the bus starting at `addr`. Bytes that would run
    /// past 0xFFFF are dropped rather than wrapped to 0x0000.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        let room = MEMORY_SIZE - addr as usize;
        let len = bytes.len().min(room);
        if len < bytes.len() {
            log::warn!(
                "load at 0x{addr:04X} truncated: {} of {} bytes fit",
                len,
                bytes.len()
            );
        }
        for (at, &byte) in (addr..=u16::MAX).zip(&bytes[..len]) {
            self.bus.write8(at, byte);
        }
    }

    /// Decode and execute the instruction at PC, leaving PC at the next
    /// instruction. Returns what was executed.
    ///
    /// Decoding happens before anything is touched: an unknown opcode leaves
    /// registers, IME and memory exactly as they were.
    pub fn step(&mut self) -> Result<Instruction> {
        let pc = self.regs.pc;
        let opcode = self.bus.read8(pc);
        let instruction = match decode(opcode) {
            Ok(instruction) => instruction,
            Err(err) => {
                log::error!(
                    "invalid opcode 0x{opcode:02X} at PC=0x{pc:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
                    sp = self.regs.sp,
                    af = self.regs.af(),
                    bc = self.regs.bc(),
                    de = self.regs.de(),
                    hl = self.regs.hl(),
                );
                return Err(err);
            }
        };
        log::trace!("{pc:04X}: {instruction}");

        self.regs.pc = pc.wrapping_add(1);
        self.execute(instruction)?;
        Ok(instruction)
    }

    /// Decode and execute one extended-table opcode as if it had just been
    /// fetched after a `0xCB` prefix. PC is not touched.
    pub fn execute_extended(&mut self, opcode: u8) -> Result<ExtendedInstruction> {
        let instruction = decode_extended(opcode)?;
        self.exec_extended(instruction)?;
        Ok(instruction)
    }

    /// Step until HALT or STOP is reached, or `max_steps` instructions have
    /// run. Returns the number of instructions executed.
    pub fn run(&mut self, max_steps: usize) -> Result<usize> {
        let mut steps = 0;
        while steps < max_steps && !self.halted && !self.stopped {
            self.step()?;
            steps += 1;
        }
        log::debug!(
            "run finished after {steps} steps at PC=0x{:04X} (halted={}, stopped={})",
            self.regs.pc,
            self.halted,
            self.stopped
        );
        Ok(steps)
    }
}
