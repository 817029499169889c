use crate::cpu::operand::{Operand16, Operand8};
use crate::cpu::Cpu;
use crate::memory::Bus;

impl<B: Bus> Cpu<B> {
    pub(super) fn exec_inc8(&mut self, target: Operand8) {
        let value = self.read_operand(target);
        let result = self.alu_inc8(value);
        self.write_operand(target, result);
    }

    pub(super) fn exec_dec8(&mut self, target: Operand8) {
        let value = self.read_operand(target);
        let result = self.alu_dec8(value);
        self.write_operand(target, result);
    }

    // 16-bit INC/DEC wrap and leave the flags alone.

    pub(super) fn exec_inc16(&mut self, target: Operand16) {
        let value = self.read_pair(target).wrapping_add(1);
        self.write_pair(target, value);
    }

    pub(super) fn exec_dec16(&mut self, target: Operand16) {
        let value = self.read_pair(target).wrapping_sub(1);
        self.write_pair(target, value);
    }
}
