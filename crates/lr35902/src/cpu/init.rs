use crate::memory::{Bus, Memory};

use super::{Cpu, Registers};

impl Default for Cpu<Memory> {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu<Memory> {
    /// CPU with zeroed registers over a fresh, zeroed 64 KiB memory.
    pub fn new() -> Self {
        Self::with_bus(Memory::new())
    }

    /// CPU in the state the DMG boot ROM hands over to the cartridge.
    pub fn dmg() -> Self {
        Self::with_registers(Registers::dmg_boot())
    }

    pub fn with_registers(regs: Registers) -> Self {
        let mut cpu = Self::new();
        cpu.regs = regs;
        cpu
    }
}

impl<B: Bus> Cpu<B> {
    pub fn with_bus(bus: B) -> Self {
        Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            stopped: false,
            bus,
        }
    }

    /// Reset registers and CPU state. The bus keeps its contents.
    pub fn reset(&mut self, regs: Registers) {
        self.regs = regs;
        self.ime = false;
        self.halted = false;
        self.stopped = false;
    }

    pub fn into_bus(self) -> B {
        self.bus
    }
}
