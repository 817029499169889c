//! Operand selectors decoded from opcode bit-fields.
//!
//! Each constructor takes the raw field value; callers extract the field with
//! `bits::field`, so only the low 2 or 3 bits are ever set.

use std::fmt;

/// 8-bit operand, encoded in three bits: 0=B, 1=C, 2=D, 3=E, 4=H, 5=L,
/// 6=(HL), 7=A.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operand8 {
    B,
    C,
    D,
    E,
    H,
    L,
    /// Memory at the address held in HL.
    HlIndirect,
    A,
}

impl Operand8 {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => Operand8::B,
            1 => Operand8::C,
            2 => Operand8::D,
            3 => Operand8::E,
            4 => Operand8::H,
            5 => Operand8::L,
            6 => Operand8::HlIndirect,
            _ => Operand8::A,
        }
    }
}

impl fmt::Display for Operand8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operand8::B => "B",
            Operand8::C => "C",
            Operand8::D => "D",
            Operand8::E => "E",
            Operand8::H => "H",
            Operand8::L => "L",
            Operand8::HlIndirect => "(HL)",
            Operand8::A => "A",
        };
        f.write_str(name)
    }
}

/// 16-bit operand for arithmetic and immediate loads: BC, DE, HL, SP.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operand16 {
    BC,
    DE,
    HL,
    SP,
}

impl Operand16 {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Operand16::BC,
            1 => Operand16::DE,
            2 => Operand16::HL,
            _ => Operand16::SP,
        }
    }
}

impl fmt::Display for Operand16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operand16::BC => "BC",
            Operand16::DE => "DE",
            Operand16::HL => "HL",
            Operand16::SP => "SP",
        };
        f.write_str(name)
    }
}

/// PUSH/POP pair: same as `Operand16` with AF in place of SP.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StackPair {
    BC,
    DE,
    HL,
    AF,
}

impl StackPair {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => StackPair::BC,
            1 => StackPair::DE,
            2 => StackPair::HL,
            _ => StackPair::AF,
        }
    }
}

impl fmt::Display for StackPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StackPair::BC => "BC",
            StackPair::DE => "DE",
            StackPair::HL => "HL",
            StackPair::AF => "AF",
        };
        f.write_str(name)
    }
}

/// Address operand of `LD (rr),A` / `LD A,(rr)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IndirectA {
    BC,
    DE,
    /// (HL), then HL is incremented.
    HlIncrement,
    /// (HL), then HL is decremented.
    HlDecrement,
}

impl IndirectA {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => IndirectA::BC,
            1 => IndirectA::DE,
            2 => IndirectA::HlIncrement,
            _ => IndirectA::HlDecrement,
        }
    }
}

impl fmt::Display for IndirectA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IndirectA::BC => "(BC)",
            IndirectA::DE => "(DE)",
            IndirectA::HlIncrement => "(HL+)",
            IndirectA::HlDecrement => "(HL-)",
        };
        f.write_str(name)
    }
}

/// Branch condition for JR/JP/CALL/RET.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Condition {
    NotZero,
    Zero,
    NotCarry,
    Carry,
}

impl Condition {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Condition::NotZero,
            1 => Condition::Zero,
            2 => Condition::NotCarry,
            _ => Condition::Carry,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Condition::NotZero => "NZ",
            Condition::Zero => "Z",
            Condition::NotCarry => "NC",
            Condition::Carry => "C",
        };
        f.write_str(name)
    }
}

/// 8-bit ALU operation on A, bits 3-5 of the opcode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }

    /// Mnemonic plus the destination prefix the usual assembler syntax uses.
    pub(crate) fn mnemonic(self) -> &'static str {
        match self {
            AluOp::Add => "ADD A,",
            AluOp::Adc => "ADC A,",
            AluOp::Sub => "SUB ",
            AluOp::Sbc => "SBC A,",
            AluOp::And => "AND ",
            AluOp::Xor => "XOR ",
            AluOp::Or => "OR ",
            AluOp::Cp => "CP ",
        }
    }
}

/// Shift/rotate operation of the extended table, bits 3-5.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ShiftOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

impl ShiftOp {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => ShiftOp::Rlc,
            1 => ShiftOp::Rrc,
            2 => ShiftOp::Rl,
            3 => ShiftOp::Rr,
            4 => ShiftOp::Sla,
            5 => ShiftOp::Sra,
            6 => ShiftOp::Swap,
            _ => ShiftOp::Srl,
        }
    }
}

impl fmt::Display for ShiftOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShiftOp::Rlc => "RLC",
            ShiftOp::Rrc => "RRC",
            ShiftOp::Rl => "RL",
            ShiftOp::Rr => "RR",
            ShiftOp::Sla => "SLA",
            ShiftOp::Sra => "SRA",
            ShiftOp::Swap => "SWAP",
            ShiftOp::Srl => "SRL",
        };
        f.write_str(name)
    }
}

/// Accumulator rotate (RLCA/RRCA/RLA/RRA), bits 3-4 of `000oo111`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RotateA {
    Rlca,
    Rrca,
    Rla,
    Rra,
}

impl RotateA {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => RotateA::Rlca,
            1 => RotateA::Rrca,
            2 => RotateA::Rla,
            _ => RotateA::Rra,
        }
    }
}

impl fmt::Display for RotateA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RotateA::Rlca => "RLCA",
            RotateA::Rrca => "RRCA",
            RotateA::Rla => "RLA",
            RotateA::Rra => "RRA",
        };
        f.write_str(name)
    }
}
