use crate::bits::split_word;
use crate::cpu::operand::{IndirectA, Operand16, Operand8};
use crate::cpu::Cpu;
use crate::memory::Bus;

/// Base of the high page used by LDH.
const HIGH_PAGE: u16 = 0xFF00;

impl<B: Bus> Cpu<B> {
    pub(super) fn exec_ld_r_r(&mut self, dst: Operand8, src: Operand8) {
        let value = self.read_operand(src);
        self.write_operand(dst, value);
    }

    pub(super) fn exec_ld_r_d8(&mut self, dst: Operand8) {
        let value = self.fetch8();
        self.write_operand(dst, value);
    }

    pub(super) fn exec_ld_rr_d16(&mut self, dst: Operand16) {
        let value = self.fetch16();
        self.write_pair(dst, value);
    }

    pub(super) fn exec_ld_a16_sp(&mut self) {
        let addr = self.fetch16();
        let (lo, hi) = split_word(self.regs.sp);
        self.bus.write8(addr, lo);
        self.bus.write8(addr.wrapping_add(1), hi);
    }

    pub(super) fn exec_ldh_a8_a(&mut self) {
        let addr = HIGH_PAGE | self.fetch8() as u16;
        self.bus.write8(addr, self.regs.a);
    }

    pub(super) fn exec_ldh_a_a8(&mut self) {
        let addr = HIGH_PAGE | self.fetch8() as u16;
        self.regs.a = self.bus.read8(addr);
    }

    pub(super) fn exec_ldh_c_a(&mut self) {
        let addr = HIGH_PAGE | self.regs.c as u16;
        self.bus.write8(addr, self.regs.a);
    }

    pub(super) fn exec_ldh_a_c(&mut self) {
        let addr = HIGH_PAGE | self.regs.c as u16;
        self.regs.a = self.bus.read8(addr);
    }

    pub(super) fn exec_ld_a16_a(&mut self) {
        let addr = self.fetch16();
        self.bus.write8(addr, self.regs.a);
    }

    pub(super) fn exec_ld_a_a16(&mut self) {
        let addr = self.fetch16();
        self.regs.a = self.bus.read8(addr);
    }

    /// Resolve the address for `LD (rr),A` / `LD A,(rr)` and apply the
    /// HL post-increment/decrement.
    fn indirect_addr(&mut self, addr: IndirectA) -> u16 {
        match addr {
            IndirectA::BC => self.regs.bc(),
            IndirectA::DE => self.regs.de(),
            IndirectA::HlIncrement => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            IndirectA::HlDecrement => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    pub(super) fn exec_ld_indirect_a(&mut self, addr: IndirectA) {
        let addr = self.indirect_addr(addr);
        self.bus.write8(addr, self.regs.a);
    }

    pub(super) fn exec_ld_a_indirect(&mut self, addr: IndirectA) {
        let addr = self.indirect_addr(addr);
        self.regs.a = self.bus.read8(addr);
    }
}
