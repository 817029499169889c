//! Opcode decoder.
//!
//! Both opcode spaces are described as ordered lists of 8-character bit
//! patterns. `0` and `1` are fixed bits; any other character marks a bit that
//! belongs to an operand field (`r` register, `o` operation, `c` condition,
//! `p` register pair, `b` bit index, `t` RST target). The first pattern whose
//! fixed bits match wins, and its decode function pulls the operand fields
//! out of the opcode.

use crate::bits::field;
use crate::error::{CpuError, OpcodeTable, Result};

use super::instruction::{ExtendedInstruction, Instruction};
use super::operand::{
    AluOp, Condition, IndirectA, Operand16, Operand8, RotateA, ShiftOp, StackPair,
};

/// One row of a decode table.
pub struct Pattern<T> {
    /// The pattern as written, e.g. `"10ooorrr"`.
    pub text: &'static str,
    mask: u8,
    value: u8,
    decode: fn(u8) -> T,
}

impl<T> Pattern<T> {
    /// Compiles `text` into a mask/value pair. Evaluated at compile time for
    /// the decode tables, so a malformed pattern fails the build.
    pub const fn new(text: &'static str, decode: fn(u8) -> T) -> Self {
        let bytes = text.as_bytes();
        assert!(bytes.len() == 8, "opcode patterns are exactly 8 characters");

        let mut mask = 0u8;
        let mut value = 0u8;
        let mut i = 0;
        while i < 8 {
            let bit = 7 - i;
            match bytes[i] {
                b'0' => mask |= 1 << bit,
                b'1' => {
                    mask |= 1 << bit;
                    value |= 1 << bit;
                }
                _ => {}
            }
            i += 1;
        }

        Self {
            text,
            mask,
            value,
            decode,
        }
    }

    #[inline]
    pub fn matches(&self, opcode: u8) -> bool {
        opcode & self.mask == self.value
    }
}

fn find<T>(table: &[Pattern<T>], opcode: u8) -> Option<T> {
    table
        .iter()
        .find(|pattern| pattern.matches(opcode))
        .map(|pattern| (pattern.decode)(opcode))
}

/// Decode a primary-table opcode.
pub fn decode(opcode: u8) -> Result<Instruction> {
    find(PRIMARY, opcode).ok_or_else(|| CpuError::unknown(OpcodeTable::Primary, opcode))
}

/// Decode an extended-table opcode (the byte after `0xCB`).
pub fn decode_extended(opcode: u8) -> Result<ExtendedInstruction> {
    find(EXTENDED, opcode).ok_or_else(|| CpuError::unknown(OpcodeTable::Extended, opcode))
}

#[inline]
fn r8_dst(op: u8) -> Operand8 {
    Operand8::from_bits(field(op, 5, 3))
}

#[inline]
fn r8_src(op: u8) -> Operand8 {
    Operand8::from_bits(field(op, 2, 0))
}

#[inline]
fn r16(op: u8) -> Operand16 {
    Operand16::from_bits(field(op, 5, 4))
}

#[inline]
fn cond(op: u8) -> Condition {
    Condition::from_bits(field(op, 4, 3))
}

#[inline]
fn alu_op(op: u8) -> AluOp {
    AluOp::from_bits(field(op, 5, 3))
}

/// Primary opcode table.
///
/// Fixed-opcode rows come before the families that would otherwise swallow
/// them (HALT sits inside the `LD r,r'` block).
pub const PRIMARY: &[Pattern<Instruction>] = &[
    Pattern::new("00000000", |_| Instruction::Nop),
    Pattern::new("00010000", |_| Instruction::Stop),
    Pattern::new("01110110", |_| Instruction::Halt),
    Pattern::new("11110011", |_| Instruction::Di),
    Pattern::new("11111011", |_| Instruction::Ei),
    Pattern::new("11001011", |_| Instruction::Prefix),
    // Loads
    Pattern::new("01rrrrrr", |op| Instruction::Ld {
        dst: r8_dst(op),
        src: r8_src(op),
    }),
    Pattern::new("00rrr110", |op| Instruction::LdImm8(r8_dst(op))),
    Pattern::new("00pp0001", |op| Instruction::LdImm16(r16(op))),
    Pattern::new("00pp0010", |op| {
        Instruction::StoreA(IndirectA::from_bits(field(op, 5, 4)))
    }),
    Pattern::new("00pp1010", |op| {
        Instruction::LoadA(IndirectA::from_bits(field(op, 5, 4)))
    }),
    Pattern::new("00001000", |_| Instruction::StoreSp),
    Pattern::new("11100000", |_| Instruction::StoreHighA),
    Pattern::new("11110000", |_| Instruction::LoadHighA),
    Pattern::new("11100010", |_| Instruction::StoreHighCA),
    Pattern::new("11110010", |_| Instruction::LoadHighCA),
    Pattern::new("11101010", |_| Instruction::StoreAbsA),
    Pattern::new("11111010", |_| Instruction::LoadAbsA),
    Pattern::new("11111001", |_| Instruction::LdSpHl),
    Pattern::new("11111000", |_| Instruction::LdHlSpOffset),
    Pattern::new("11pp0101", |op| {
        Instruction::Push(StackPair::from_bits(field(op, 5, 4)))
    }),
    Pattern::new("11pp0001", |op| {
        Instruction::Pop(StackPair::from_bits(field(op, 5, 4)))
    }),
    // 8-bit arithmetic
    Pattern::new("10ooorrr", |op| Instruction::Alu {
        op: alu_op(op),
        src: r8_src(op),
    }),
    Pattern::new("11ooo110", |op| Instruction::AluImm(alu_op(op))),
    Pattern::new("00rrr100", |op| Instruction::Inc8(r8_dst(op))),
    Pattern::new("00rrr101", |op| Instruction::Dec8(r8_dst(op))),
    // 16-bit arithmetic
    Pattern::new("00pp0011", |op| Instruction::Inc16(r16(op))),
    Pattern::new("00pp1011", |op| Instruction::Dec16(r16(op))),
    Pattern::new("00pp1001", |op| Instruction::AddHl(r16(op))),
    Pattern::new("11101000", |_| Instruction::AddSpOffset),
    // Accumulator and flag operations
    Pattern::new("000oo111", |op| {
        Instruction::RotateAcc(RotateA::from_bits(field(op, 4, 3)))
    }),
    Pattern::new("00100111", |_| Instruction::Daa),
    Pattern::new("00101111", |_| Instruction::Cpl),
    Pattern::new("00110111", |_| Instruction::Scf),
    Pattern::new("00111111", |_| Instruction::Ccf),
    // Control flow
    Pattern::new("00011000", |_| Instruction::Jr),
    Pattern::new("001cc000", |op| Instruction::JrCond(cond(op))),
    Pattern::new("11000011", |_| Instruction::Jp),
    Pattern::new("110cc010", |op| Instruction::JpCond(cond(op))),
    Pattern::new("11101001", |_| Instruction::JpHl),
    Pattern::new("11001101", |_| Instruction::Call),
    Pattern::new("110cc100", |op| Instruction::CallCond(cond(op))),
    Pattern::new("11001001", |_| Instruction::Ret),
    Pattern::new("110cc000", |op| Instruction::RetCond(cond(op))),
    Pattern::new("11011001", |_| Instruction::Reti),
    Pattern::new("11ttt111", |op| Instruction::Rst(op & 0x38)),
];

/// Extended (CB-prefixed) opcode table. Every byte decodes.
pub const EXTENDED: &[Pattern<ExtendedInstruction>] = &[
    Pattern::new("00ooorrr", |op| ExtendedInstruction::Shift {
        op: ShiftOp::from_bits(field(op, 5, 3)),
        target: r8_src(op),
    }),
    Pattern::new("01bbbrrr", |op| ExtendedInstruction::Bit {
        bit: field(op, 5, 3),
        target: r8_src(op),
    }),
    Pattern::new("10bbbrrr", |op| ExtendedInstruction::Res {
        bit: field(op, 5, 3),
        target: r8_src(op),
    }),
    Pattern::new("11bbbrrr", |op| ExtendedInstruction::Set {
        bit: field(op, 5, 3),
        target: r8_src(op),
    }),
];
