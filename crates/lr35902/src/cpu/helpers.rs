use crate::bits::{assemble_word, split_word};
use crate::memory::Bus;

use super::operand::{Condition, Operand16, Operand8};
use super::{Cpu, Flag};

impl<B: Bus> Cpu<B> {
    /// Read an 8-bit register, or memory at HL for `(HL)`.
    #[inline]
    pub(super) fn read_operand(&mut self, operand: Operand8) -> u8 {
        match operand {
            Operand8::B => self.regs.b,
            Operand8::C => self.regs.c,
            Operand8::D => self.regs.d,
            Operand8::E => self.regs.e,
            Operand8::H => self.regs.h,
            Operand8::L => self.regs.l,
            Operand8::HlIndirect => self.bus.read8(self.regs.hl()),
            Operand8::A => self.regs.a,
        }
    }

    /// Write counterpart of `read_operand`.
    #[inline]
    pub(super) fn write_operand(&mut self, operand: Operand8, value: u8) {
        match operand {
            Operand8::B => self.regs.b = value,
            Operand8::C => self.regs.c = value,
            Operand8::D => self.regs.d = value,
            Operand8::E => self.regs.e = value,
            Operand8::H => self.regs.h = value,
            Operand8::L => self.regs.l = value,
            Operand8::HlIndirect => {
                let addr = self.regs.hl();
                self.bus.write8(addr, value);
            }
            Operand8::A => self.regs.a = value,
        }
    }

    #[inline]
    pub(super) fn read_pair(&self, operand: Operand16) -> u16 {
        match operand {
            Operand16::BC => self.regs.bc(),
            Operand16::DE => self.regs.de(),
            Operand16::HL => self.regs.hl(),
            Operand16::SP => self.regs.sp,
        }
    }

    #[inline]
    pub(super) fn write_pair(&mut self, operand: Operand16, value: u16) {
        match operand {
            Operand16::BC => self.regs.set_bc(value),
            Operand16::DE => self.regs.set_de(value),
            Operand16::HL => self.regs.set_hl(value),
            Operand16::SP => self.regs.sp = value,
        }
    }

    #[inline]
    pub(super) fn fetch8(&mut self) -> u8 {
        let value = self.bus.read8(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    #[inline]
    pub(super) fn fetch16(&mut self) -> u16 {
        let lo = self.fetch8();
        let hi = self.fetch8();
        assemble_word(lo, hi)
    }

    #[inline]
    pub(super) fn push_u16(&mut self, value: u16) {
        let (lo, hi) = split_word(value);
        // Stack grows downward. We want memory[SP] = low, memory[SP+1] = high.
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.bus.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.bus.write8(self.regs.sp, lo);
    }

    #[inline]
    pub(super) fn pop_u16(&mut self) -> u16 {
        let lo = self.bus.read8(self.regs.sp);
        let hi = self.bus.read8(self.regs.sp.wrapping_add(1));
        self.regs.sp = self.regs.sp.wrapping_add(2);
        assemble_word(lo, hi)
    }

    #[inline]
    pub(super) fn condition(&self, cc: Condition) -> bool {
        match cc {
            Condition::NotZero => !self.test_flag(Flag::Z),
            Condition::Zero => self.test_flag(Flag::Z),
            Condition::NotCarry => !self.test_flag(Flag::C),
            Condition::Carry => self.test_flag(Flag::C),
        }
    }

    /// Relative jump helper used by JR/JR cc.
    ///
    /// The displacement is a signed 8-bit offset relative to the address
    /// following the operand. The operand is consumed either way.
    pub(super) fn jr(&mut self, taken: bool) {
        let offset = self.fetch8() as i8;
        if taken {
            self.regs.pc = self.regs.pc.wrapping_add_signed(offset as i16);
        }
    }

    /// Absolute jump helper used by JP a16 / JP cc,a16.
    pub(super) fn jp(&mut self, taken: bool) {
        let addr = self.fetch16();
        if taken {
            self.regs.pc = addr;
        }
    }

    /// Call helper used by CALL a16 / CALL cc,a16. The target is read even
    /// when the call is not taken.
    pub(super) fn call(&mut self, taken: bool) {
        let addr = self.fetch16();
        if taken {
            let ret = self.regs.pc;
            self.push_u16(ret);
            self.regs.pc = addr;
        }
    }

    pub(super) fn ret(&mut self, taken: bool) {
        if taken {
            self.regs.pc = self.pop_u16();
        }
    }
}
