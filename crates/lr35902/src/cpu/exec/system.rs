use crate::cpu::Cpu;
use crate::memory::Bus;

impl<B: Bus> Cpu<B> {
    pub(super) fn exec_stop(&mut self) {
        // STOP is officially a 2-byte instruction; the second byte is
        // often 0 and ignored.
        let _padding = self.fetch8();
        log::debug!("STOP at PC=0x{:04X}", self.regs.pc.wrapping_sub(2));
        self.stopped = true;
        self.halted = false;
    }

    pub(super) fn exec_halt(&mut self) {
        log::debug!("HALT at PC=0x{:04X}", self.regs.pc.wrapping_sub(1));
        self.halted = true;
    }
}
