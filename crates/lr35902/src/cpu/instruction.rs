use std::fmt;

use super::operand::{
    AluOp, Condition, IndirectA, Operand16, Operand8, RotateA, ShiftOp, StackPair,
};

/// A decoded primary-table instruction.
///
/// Immediate operands are not part of the value; they are fetched from the
/// instruction stream while executing. `Display` renders them as the usual
/// placeholders (`d8`, `d16`, `a8`, `a16`, `e8`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Instruction {
    Nop,
    Stop,
    Halt,
    Di,
    Ei,

    /// LD r,r'
    Ld { dst: Operand8, src: Operand8 },
    /// LD r,d8
    LdImm8(Operand8),
    /// LD rr,d16
    LdImm16(Operand16),
    /// LD (rr),A
    StoreA(IndirectA),
    /// LD A,(rr)
    LoadA(IndirectA),
    /// LD (a16),SP
    StoreSp,
    /// LDH (a8),A
    StoreHighA,
    /// LDH A,(a8)
    LoadHighA,
    /// LD (C),A
    StoreHighCA,
    /// LD A,(C)
    LoadHighCA,
    /// LD (a16),A
    StoreAbsA,
    /// LD A,(a16)
    LoadAbsA,
    /// LD SP,HL
    LdSpHl,
    /// LD HL,SP+e8
    LdHlSpOffset,
    Push(StackPair),
    Pop(StackPair),

    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP with a register or (HL).
    Alu { op: AluOp, src: Operand8 },
    /// Same operations with an 8-bit immediate.
    AluImm(AluOp),
    Inc8(Operand8),
    Dec8(Operand8),
    Inc16(Operand16),
    Dec16(Operand16),
    /// ADD HL,rr
    AddHl(Operand16),
    /// ADD SP,e8
    AddSpOffset,

    RotateAcc(RotateA),
    Daa,
    Cpl,
    Scf,
    Ccf,

    Jr,
    JrCond(Condition),
    Jp,
    JpCond(Condition),
    JpHl,
    Call,
    CallCond(Condition),
    Ret,
    RetCond(Condition),
    Reti,
    /// RST with the target address (0x00, 0x08, ..., 0x38).
    Rst(u8),

    /// `0xCB`: the next byte is an extended-table opcode.
    Prefix,
}

impl Instruction {
    /// Encoded length in bytes, including immediates. `Prefix` counts only
    /// itself; the extended opcode that follows is one more byte.
    pub fn length(&self) -> u16 {
        use Instruction::*;
        match self {
            LdImm8(_) | StoreHighA | LoadHighA | LdHlSpOffset | AluImm(_) | AddSpOffset | Jr
            | JrCond(_) | Stop => 2,
            LdImm16(_) | StoreSp | StoreAbsA | LoadAbsA | Jp | JpCond(_) | Call
            | CallCond(_) => 3,
            _ => 1,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Instruction::*;
        match self {
            Nop => f.write_str("NOP"),
            Stop => f.write_str("STOP"),
            Halt => f.write_str("HALT"),
            Di => f.write_str("DI"),
            Ei => f.write_str("EI"),
            Ld { dst, src } => write!(f, "LD {dst},{src}"),
            LdImm8(dst) => write!(f, "LD {dst},d8"),
            LdImm16(dst) => write!(f, "LD {dst},d16"),
            StoreA(addr) => write!(f, "LD {addr},A"),
            LoadA(addr) => write!(f, "LD A,{addr}"),
            StoreSp => f.write_str("LD (a16),SP"),
            StoreHighA => f.write_str("LDH (a8),A"),
            LoadHighA => f.write_str("LDH A,(a8)"),
            StoreHighCA => f.write_str("LD (C),A"),
            LoadHighCA => f.write_str("LD A,(C)"),
            StoreAbsA => f.write_str("LD (a16),A"),
            LoadAbsA => f.write_str("LD A,(a16)"),
            LdSpHl => f.write_str("LD SP,HL"),
            LdHlSpOffset => f.write_str("LD HL,SP+e8"),
            Push(pair) => write!(f, "PUSH {pair}"),
            Pop(pair) => write!(f, "POP {pair}"),
            Alu { op, src } => write!(f, "{}{src}", op.mnemonic()),
            AluImm(op) => write!(f, "{}d8", op.mnemonic()),
            Inc8(r) => write!(f, "INC {r}"),
            Dec8(r) => write!(f, "DEC {r}"),
            Inc16(rr) => write!(f, "INC {rr}"),
            Dec16(rr) => write!(f, "DEC {rr}"),
            AddHl(rr) => write!(f, "ADD HL,{rr}"),
            AddSpOffset => f.write_str("ADD SP,e8"),
            RotateAcc(op) => write!(f, "{op}"),
            Daa => f.write_str("DAA"),
            Cpl => f.write_str("CPL"),
            Scf => f.write_str("SCF"),
            Ccf => f.write_str("CCF"),
            Jr => f.write_str("JR e8"),
            JrCond(cc) => write!(f, "JR {cc},e8"),
            Jp => f.write_str("JP a16"),
            JpCond(cc) => write!(f, "JP {cc},a16"),
            JpHl => f.write_str("JP HL"),
            Call => f.write_str("CALL a16"),
            CallCond(cc) => write!(f, "CALL {cc},a16"),
            Ret => f.write_str("RET"),
            RetCond(cc) => write!(f, "RET {cc}"),
            Reti => f.write_str("RETI"),
            Rst(vector) => write!(f, "RST {vector:02X}H"),
            Prefix => f.write_str("PREFIX CB"),
        }
    }
}

/// A decoded extended-table (CB-prefixed) instruction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExtendedInstruction {
    Shift { op: ShiftOp, target: Operand8 },
    Bit { bit: u8, target: Operand8 },
    Res { bit: u8, target: Operand8 },
    Set { bit: u8, target: Operand8 },
}

impl fmt::Display for ExtendedInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtendedInstruction::Shift { op, target } => write!(f, "{op} {target}"),
            ExtendedInstruction::Bit { bit, target } => write!(f, "BIT {bit},{target}"),
            ExtendedInstruction::Res { bit, target } => write!(f, "RES {bit},{target}"),
            ExtendedInstruction::Set { bit, target } => write!(f, "SET {bit},{target}"),
        }
    }
}
