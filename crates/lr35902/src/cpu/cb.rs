use crate::bits::{get_bit, modify_bit};
use crate::error::Result;
use crate::memory::Bus;

use super::instruction::ExtendedInstruction;
use super::operand::ShiftOp;
use super::{Cpu, Flag};

impl<B: Bus> Cpu<B> {
    /// Handle the `0xCB` prefix: fetch the next byte and run it through the
    /// extended table.
    pub(super) fn step_cb(&mut self) -> Result<()> {
        let opcode = self.fetch8();
        let instruction = super::decode_extended(opcode)?;
        log::trace!("  CB {opcode:02X}: {instruction}");
        self.exec_extended(instruction)
    }

    /// Execute a decoded bit operation, shift or rotate.
    pub(super) fn exec_extended(&mut self, instruction: ExtendedInstruction) -> Result<()> {
        match instruction {
            ExtendedInstruction::Shift { op, target } => {
                let value = self.read_operand(target);
                let result = self.shift(op, value);
                self.write_operand(target, result);
            }
            ExtendedInstruction::Bit { bit, target } => {
                let value = self.read_operand(target);
                let set = get_bit(value, bit)? == 1;
                // Preserve C, set H=1, N=0.
                self.put_flag(Flag::Z, !set);
                self.put_flag(Flag::N, false);
                self.put_flag(Flag::H, true);
            }
            ExtendedInstruction::Res { bit, target } => {
                let value = self.read_operand(target);
                let result = modify_bit(value, bit, 0)?;
                self.write_operand(target, result);
            }
            ExtendedInstruction::Set { bit, target } => {
                let value = self.read_operand(target);
                let result = modify_bit(value, bit, 1)?;
                self.write_operand(target, result);
            }
        }
        Ok(())
    }

    /// Shift or rotate `value`, setting Z from the result, clearing N and H
    /// and loading C with the bit shifted out (cleared for SWAP).
    pub(super) fn shift(&mut self, op: ShiftOp, value: u8) -> u8 {
        let carry_in = self.test_flag(Flag::C);
        let (result, carry) = match op {
            ShiftOp::Rlc => (value.rotate_left(1), value & 0x80 != 0),
            ShiftOp::Rrc => (value.rotate_right(1), value & 0x01 != 0),
            ShiftOp::Rl => ((value << 1) | carry_in as u8, value & 0x80 != 0),
            ShiftOp::Rr => ((value >> 1) | ((carry_in as u8) << 7), value & 0x01 != 0),
            ShiftOp::Sla => (value << 1, value & 0x80 != 0),
            // Arithmetic shift keeps the sign bit.
            ShiftOp::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            ShiftOp::Swap => (value.rotate_left(4), false),
            ShiftOp::Srl => (value >> 1, value & 0x01 != 0),
        };

        self.clear_flags();
        self.put_flag(Flag::Z, result == 0);
        self.put_flag(Flag::C, carry);
        result
    }
}
