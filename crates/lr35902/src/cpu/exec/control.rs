use crate::cpu::Cpu;
use crate::memory::Bus;

impl<B: Bus> Cpu<B> {
    pub(super) fn exec_rst(&mut self, vector: u8) {
        debug_assert!(vector & !0x38 == 0, "RST vector {vector:#04x}");
        let ret = self.regs.pc;
        self.push_u16(ret);
        self.regs.pc = vector as u16;
    }

    pub(super) fn exec_reti(&mut self) {
        self.ret(true);
        self.set_ime(true);
    }
}
