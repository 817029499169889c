use crate::cpu::operand::StackPair;
use crate::cpu::Cpu;
use crate::memory::Bus;

impl<B: Bus> Cpu<B> {
    pub(super) fn exec_push(&mut self, pair: StackPair) {
        let value = match pair {
            StackPair::BC => self.regs.bc(),
            StackPair::DE => self.regs.de(),
            StackPair::HL => self.regs.hl(),
            StackPair::AF => self.regs.af(),
        };
        self.push_u16(value);
    }

    pub(super) fn exec_pop(&mut self, pair: StackPair) {
        let value = self.pop_u16();
        match pair {
            StackPair::BC => self.regs.set_bc(value),
            StackPair::DE => self.regs.set_de(value),
            StackPair::HL => self.regs.set_hl(value),
            // The low nibble of F is dropped here.
            StackPair::AF => self.regs.set_af(value),
        }
    }
}
