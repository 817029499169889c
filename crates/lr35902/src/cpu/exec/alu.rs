use crate::cpu::operand::{RotateA, ShiftOp};
use crate::cpu::{Cpu, Flag};
use crate::memory::Bus;

impl<B: Bus> Cpu<B> {
    /// RLCA/RRCA/RLA/RRA: the extended-table rotates applied to A, except
    /// that Z is always cleared.
    pub(super) fn exec_rotate_a(&mut self, op: RotateA) {
        let shift = match op {
            RotateA::Rlca => ShiftOp::Rlc,
            RotateA::Rrca => ShiftOp::Rrc,
            RotateA::Rla => ShiftOp::Rl,
            RotateA::Rra => ShiftOp::Rr,
        };
        self.regs.a = self.shift(shift, self.regs.a);
        self.put_flag(Flag::Z, false);
    }

    pub(super) fn exec_add_sp_r8(&mut self) {
        let imm = self.fetch8();
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
    }

    pub(super) fn exec_ld_hl_sp_r8(&mut self) {
        let imm = self.fetch8();
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
    }

    pub(super) fn exec_cpl(&mut self) {
        self.regs.a = !self.regs.a;
        self.put_flag(Flag::H, true);
        self.put_flag(Flag::N, true);
    }

    pub(super) fn exec_scf(&mut self) {
        self.put_flag(Flag::C, true);
        self.put_flag(Flag::H, false);
        self.put_flag(Flag::N, false);
    }

    pub(super) fn exec_ccf(&mut self) {
        let carry = self.test_flag(Flag::C);
        self.put_flag(Flag::C, !carry);
        self.put_flag(Flag::H, false);
        self.put_flag(Flag::N, false);
    }
}
