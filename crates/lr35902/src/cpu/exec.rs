mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use crate::error::Result;
use crate::memory::Bus;

use super::instruction::Instruction;
use super::Cpu;

impl<B: Bus> Cpu<B> {
    /// Execute a decoded primary instruction. PC already points past the
    /// opcode; routines fetch their own immediates.
    pub(super) fn execute(&mut self, instruction: Instruction) -> Result<()> {
        use Instruction::*;

        match instruction {
            Nop => {}
            Stop => self.exec_stop(),
            Halt => self.exec_halt(),
            Di => self.set_ime(false),
            Ei => self.set_ime(true),

            Ld { dst, src } => self.exec_ld_r_r(dst, src),
            LdImm8(dst) => self.exec_ld_r_d8(dst),
            LdImm16(dst) => self.exec_ld_rr_d16(dst),
            StoreA(addr) => self.exec_ld_indirect_a(addr),
            LoadA(addr) => self.exec_ld_a_indirect(addr),
            StoreSp => self.exec_ld_a16_sp(),
            StoreHighA => self.exec_ldh_a8_a(),
            LoadHighA => self.exec_ldh_a_a8(),
            StoreHighCA => self.exec_ldh_c_a(),
            LoadHighCA => self.exec_ldh_a_c(),
            StoreAbsA => self.exec_ld_a16_a(),
            LoadAbsA => self.exec_ld_a_a16(),
            LdSpHl => self.regs.sp = self.regs.hl(),
            LdHlSpOffset => self.exec_ld_hl_sp_r8(),
            Push(pair) => self.exec_push(pair),
            Pop(pair) => self.exec_pop(pair),

            Alu { op, src } => {
                let value = self.read_operand(src);
                self.alu(op, value);
            }
            AluImm(op) => {
                let value = self.fetch8();
                self.alu(op, value);
            }
            Inc8(target) => self.exec_inc8(target),
            Dec8(target) => self.exec_dec8(target),
            Inc16(target) => self.exec_inc16(target),
            Dec16(target) => self.exec_dec16(target),
            AddHl(src) => {
                let value = self.read_pair(src);
                self.alu_add16_hl(value);
            }
            AddSpOffset => self.exec_add_sp_r8(),

            RotateAcc(op) => self.exec_rotate_a(op),
            Daa => self.alu_daa(),
            Cpl => self.exec_cpl(),
            Scf => self.exec_scf(),
            Ccf => self.exec_ccf(),

            Jr => self.jr(true),
            JrCond(cc) => self.jr(self.condition(cc)),
            Jp => self.jp(true),
            JpCond(cc) => self.jp(self.condition(cc)),
            JpHl => self.regs.pc = self.regs.hl(),
            Call => self.call(true),
            CallCond(cc) => self.call(self.condition(cc)),
            Ret => self.ret(true),
            RetCond(cc) => self.ret(self.condition(cc)),
            Reti => self.exec_reti(),
            Rst(vector) => self.exec_rst(vector),

            Prefix => self.step_cb()?,
        }

        Ok(())
    }
}
