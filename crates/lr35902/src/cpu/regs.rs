use bitflags::bitflags;
use typed_builder::TypedBuilder;

use crate::bits::{assemble_word, split_word};

bitflags! {
    /// Contents of the F register.
    ///
    /// Layout (bit index in the byte, from MSB to LSB):
    /// - bit 7: Z (zero)
    /// - bit 6: N (subtract)
    /// - bit 5: H (half carry)
    /// - bit 4: C (carry)
    /// - bits 0–3 are always zero.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Flags: u8 {
        const Z = 1 << 7;
        const N = 1 << 6;
        const H = 1 << 5;
        const C = 1 << 4;
    }
}

/// A single flag of the F register.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flag {
    Z = 7,
    N = 6,
    H = 5,
    C = 4,
}

impl Flag {
    #[inline]
    pub fn mask(self) -> Flags {
        Flags::from_bits_truncate(1 << self as u8)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Reg8 {
    A,
    F,
    B,
    C,
    D,
    E,
    H,
    L,
}

/// Register pairs. The first-named register is the high byte.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Reg16 {
    AF,
    BC,
    DE,
    HL,
}

/// Registers for the Game Boy CPU (LR35902).
///
/// The core is Z80-like with an 8-bit ALU and a 16-bit address space.
/// Presets can be built field by field:
///
/// ```
/// use lr35902::cpu::Registers;
///
/// let regs = Registers::builder().a(0x37).b(0x78).pc(0xC000).build();
/// assert_eq!(regs.bc(), 0x7800);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, TypedBuilder)]
pub struct Registers {
    #[builder(default)]
    pub a: u8,
    #[builder(default, setter(transform = |bits: u8| Flags::from_bits_truncate(bits)))]
    pub f: Flags,
    #[builder(default)]
    pub b: u8,
    #[builder(default)]
    pub c: u8,
    #[builder(default)]
    pub d: u8,
    #[builder(default)]
    pub e: u8,
    #[builder(default)]
    pub h: u8,
    #[builder(default)]
    pub l: u8,
    #[builder(default)]
    pub sp: u16,
    #[builder(default)]
    pub pc: u16,
}

impl Registers {
    /// Register state the DMG boot ROM leaves behind when it jumps to the
    /// cartridge entry point at 0x0100 (values per Pan Docs).
    pub fn dmg_boot() -> Self {
        Registers::builder()
            .a(0x01)
            .f(0xB0)
            .b(0x00)
            .c(0x13)
            .d(0x00)
            .e(0xD8)
            .h(0x01)
            .l(0x4D)
            .sp(0xFFFE)
            .pc(0x0100)
            .build()
    }

    pub fn get(&self, reg: Reg8) -> u8 {
        match reg {
            Reg8::A => self.a,
            Reg8::F => self.f.bits(),
            Reg8::B => self.b,
            Reg8::C => self.c,
            Reg8::D => self.d,
            Reg8::E => self.e,
            Reg8::H => self.h,
            Reg8::L => self.l,
        }
    }

    pub fn set(&mut self, reg: Reg8, value: u8) {
        match reg {
            Reg8::A => self.a = value,
            // Lower 4 bits of F are always zero.
            Reg8::F => self.f = Flags::from_bits_truncate(value),
            Reg8::B => self.b = value,
            Reg8::C => self.c = value,
            Reg8::D => self.d = value,
            Reg8::E => self.e = value,
            Reg8::H => self.h = value,
            Reg8::L => self.l = value,
        }
    }

    pub fn get16(&self, pair: Reg16) -> u16 {
        match pair {
            Reg16::AF => self.af(),
            Reg16::BC => self.bc(),
            Reg16::DE => self.de(),
            Reg16::HL => self.hl(),
        }
    }

    pub fn set16(&mut self, pair: Reg16, value: u16) {
        match pair {
            Reg16::AF => self.set_af(value),
            Reg16::BC => self.set_bc(value),
            Reg16::DE => self.set_de(value),
            Reg16::HL => self.set_hl(value),
        }
    }

    #[inline]
    pub fn af(&self) -> u16 {
        assemble_word(self.f.bits(), self.a)
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let (f, a) = split_word(value);
        self.a = a;
        self.f = Flags::from_bits_truncate(f);
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        assemble_word(self.c, self.b)
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        (self.c, self.b) = split_word(value);
    }

    #[inline]
    pub fn de(&self) -> u16 {
        assemble_word(self.e, self.d)
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        (self.e, self.d) = split_word(value);
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        assemble_word(self.l, self.h)
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        (self.l, self.h) = split_word(value);
    }
}
