use crate::memory::Bus;

use super::operand::AluOp;
use super::{Cpu, Flag};

impl<B: Bus> Cpu<B> {
    /// Apply one of the eight accumulator operations to A and `value`.
    pub(super) fn alu(&mut self, op: AluOp, value: u8) {
        match op {
            AluOp::Add => self.alu_add(value, false),
            AluOp::Adc => self.alu_add(value, true),
            AluOp::Sub => self.alu_sub(value, false),
            AluOp::Sbc => self.alu_sub(value, true),
            AluOp::And => self.alu_and(value),
            AluOp::Xor => self.alu_xor(value),
            AluOp::Or => self.alu_or(value),
            AluOp::Cp => self.alu_cp(value),
        }
    }

    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true).
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = (use_carry && self.test_flag(Flag::C)) as u8;

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = a as u16 + value as u16 + carry_in as u16;
        let result = full as u8;

        self.regs.a = result;

        self.clear_flags();
        self.put_flag(Flag::Z, result == 0);
        self.put_flag(Flag::H, half > 0x0F);
        self.put_flag(Flag::C, full > 0xFF);
    }

    /// Core 8-bit SUB/SBC operation on A.
    ///
    /// `use_carry` selects between SUB (false) and SBC (true).
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let carry_in = (use_carry && self.test_flag(Flag::C)) as i16;
        let result = self.sub_flags(value, carry_in);
        self.regs.a = result;
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.regs.a = result;

        self.clear_flags();
        self.put_flag(Flag::Z, result == 0);
        self.put_flag(Flag::H, true);
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.regs.a = result;

        self.clear_flags();
        self.put_flag(Flag::Z, result == 0);
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.regs.a = result;

        self.clear_flags();
        self.put_flag(Flag::Z, result == 0);
    }

    /// Compare A with `value`, setting flags as if `A - value` was performed.
    /// A itself is not modified.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        self.sub_flags(value, 0);
    }

    /// Flags of `A - value - carry_in`; returns the truncated difference.
    fn sub_flags(&mut self, value: u8, carry_in: i16) -> u8 {
        let a = self.regs.a;
        let half = (a & 0x0F) as i16 - (value & 0x0F) as i16 - carry_in;
        let full = a as i16 - value as i16 - carry_in;
        let result = full as u8;

        self.clear_flags();
        self.put_flag(Flag::Z, result == 0);
        self.put_flag(Flag::N, true);
        self.put_flag(Flag::H, half < 0);
        self.put_flag(Flag::C, full < 0);
        result
    }

    /// Decimal adjust accumulator after BCD addition/subtraction.
    ///
    /// After an addition (N=0) the low digit is corrected when H is set or it
    /// exceeds 9, and the high digit when C is set or A exceeds 0x99; the
    /// latter also sets C. After a subtraction (N=1) only H and C select the
    /// corrections and C keeps its value. H is always cleared, N untouched.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let mut adjust: u8 = if self.test_flag(Flag::C) { 0x60 } else { 0x00 };
        if self.test_flag(Flag::H) {
            adjust |= 0x06;
        }

        if !self.test_flag(Flag::N) {
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            a = a.wrapping_sub(adjust);
        }

        self.put_flag(Flag::C, adjust >= 0x60);
        self.put_flag(Flag::H, false);
        self.put_flag(Flag::Z, a == 0);
        self.regs.a = a;
    }

    /// 8-bit increment helper used by INC r and INC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.put_flag(Flag::Z, result == 0);
        self.put_flag(Flag::N, false);
        self.put_flag(Flag::H, (value & 0x0F) + 1 > 0x0F);
        result
    }

    /// 8-bit decrement helper used by DEC r and DEC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.put_flag(Flag::Z, result == 0);
        self.put_flag(Flag::N, true);
        self.put_flag(Flag::H, (value & 0x0F) == 0);
        result
    }

    /// 16-bit add helper for `ADD HL,rr`.
    ///
    /// Z is unaffected; N is cleared; H and C are the carries out of bits 11
    /// and 15.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let result = hl.wrapping_add(value);

        self.put_flag(Flag::N, false);
        self.put_flag(Flag::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.put_flag(Flag::C, hl as u32 + value as u32 > 0xFFFF);

        self.regs.set_hl(result);
    }

    /// 16-bit add helper for instructions that add a signed 8-bit immediate
    /// to a 16-bit base (ADD SP,e8 and LD HL,SP+e8).
    ///
    /// Z and N are cleared. H and C come from adding the raw immediate byte
    /// to the low byte of the base as unsigned values.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16;
        let low = base & 0x00FF;
        let imm = imm8 as u16;
        self.put_flag(Flag::Z, false);
        self.put_flag(Flag::N, false);
        self.put_flag(Flag::H, (low & 0x0F) + (imm & 0x0F) > 0x0F);
        self.put_flag(Flag::C, low + imm > 0xFF);
        base.wrapping_add_signed(offset)
    }
}
