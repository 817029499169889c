//! Bit, nibble and word helpers shared by the decoder and the execution
//! routines. Everything here is pure.

use crate::error::{CpuError, Result};

#[inline]
fn check_position(pos: u8) -> Result<()> {
    if pos > 7 {
        return Err(CpuError::BitPosition(pos));
    }
    Ok(())
}

/// Returns bit `pos` of `byte` as 0 or 1.
pub fn get_bit(byte: u8, pos: u8) -> Result<u8> {
    check_position(pos)?;
    Ok((byte >> pos) & 1)
}

/// Returns `byte` with bit `pos` replaced by `bit`.
pub fn modify_bit(byte: u8, pos: u8, bit: u8) -> Result<u8> {
    check_position(pos)?;
    match bit {
        0 => Ok(byte & !(1 << pos)),
        1 => Ok(byte | (1 << pos)),
        other => Err(CpuError::BitValue(other)),
    }
}

/// Low (`lower == true`) or high nibble of `byte`, in 0..=15.
#[inline]
pub fn get_nibble(lower: bool, byte: u8) -> u8 {
    if lower {
        byte & 0x0F
    } else {
        byte >> 4
    }
}

/// Reinterprets the two's-complement pattern of `value` as unsigned.
#[inline]
pub fn zero_extend_byte(value: i8) -> u16 {
    value as u8 as u16
}

#[inline]
pub fn zero_extend_short(value: i16) -> u32 {
    value as u16 as u32
}

/// Assembles an unsigned value from individual bits, most significant first.
///
/// `bits_to_value(&[1, 0, 1]) == Ok(5)`.
pub fn bits_to_value(bits: &[u8]) -> Result<u32> {
    if bits.len() > 32 {
        return Err(CpuError::BitCount(bits.len()));
    }
    bits.iter().try_fold(0u32, |acc, &bit| match bit {
        0 | 1 => Ok((acc << 1) | bit as u32),
        other => Err(CpuError::BitValue(other)),
    })
}

/// Extracts the inclusive bit range `hi..=lo` of `byte`, shifted down.
///
/// Used by the decoder to pull 2- and 3-bit selector fields out of an
/// opcode, e.g. `field(op, 5, 3)` for the ALU operation.
#[inline]
pub(crate) fn field(byte: u8, hi: u8, lo: u8) -> u8 {
    debug_assert!(hi <= 7 && lo <= hi);
    let width = hi - lo + 1;
    (byte >> lo) & (((1u16 << width) - 1) as u8)
}

/// Little-endian word from its two bytes.
#[inline]
pub fn assemble_word(lsb: u8, msb: u8) -> u16 {
    u16::from_le_bytes([lsb, msb])
}

/// Splits a word into `(lsb, msb)`.
#[inline]
pub fn split_word(word: u16) -> (u8, u8) {
    let [lsb, msb] = word.to_le_bytes();
    (lsb, msb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_bit_reads_each_position() {
        let byte = 0b1010_0110;
        let bits: Vec<u8> = (0..8).map(|pos| get_bit(byte, pos).unwrap()).collect();
        assert_eq!(bits, vec![0, 1, 1, 0, 0, 1, 0, 1]);
    }

    #[test]
    fn get_bit_rejects_out_of_range_position() {
        assert_eq!(get_bit(0xFF, 8), Err(CpuError::BitPosition(8)));
    }

    #[test]
    fn modify_bit_sets_and_clears() {
        assert_eq!(modify_bit(0x00, 7, 1).unwrap(), 0x80);
        assert_eq!(modify_bit(0xFF, 0, 0).unwrap(), 0xFE);
        assert_eq!(modify_bit(0x10, 4, 1).unwrap(), 0x10);
    }

    #[test]
    fn modify_bit_rejects_bad_arguments() {
        assert_eq!(modify_bit(0, 9, 1), Err(CpuError::BitPosition(9)));
        assert_eq!(modify_bit(0, 3, 2), Err(CpuError::BitValue(2)));
    }

    #[test]
    fn nibbles() {
        assert_eq!(get_nibble(true, 0xA7), 0x7);
        assert_eq!(get_nibble(false, 0xA7), 0xA);
    }

    #[test]
    fn zero_extension_keeps_bit_pattern() {
        assert_eq!(zero_extend_byte(-1), 0xFF);
        assert_eq!(zero_extend_byte(-128), 0x80);
        assert_eq!(zero_extend_byte(5), 5);
        assert_eq!(zero_extend_short(-1), 0xFFFF);
        assert_eq!(zero_extend_short(i16::MIN), 0x8000);
    }

    #[test]
    fn bits_to_value_assembles_msb_first() {
        assert_eq!(bits_to_value(&[1, 0, 1]).unwrap(), 5);
        assert_eq!(bits_to_value(&[1, 1]).unwrap(), 3);
        assert_eq!(bits_to_value(&[]).unwrap(), 0);
        assert_eq!(bits_to_value(&[1, 3]), Err(CpuError::BitValue(3)));
    }

    #[test]
    fn bits_to_value_rejects_more_than_32_bits() {
        assert_eq!(bits_to_value(&[1; 32]).unwrap(), u32::MAX);
        assert_eq!(bits_to_value(&[1; 33]), Err(CpuError::BitCount(33)));
        assert_eq!(bits_to_value(&[0; 64]), Err(CpuError::BitCount(64)));
    }

    #[test]
    fn field_matches_bits_to_value() {
        for byte in 0..=u8::MAX {
            let expected = bits_to_value(&[
                get_bit(byte, 5).unwrap(),
                get_bit(byte, 4).unwrap(),
                get_bit(byte, 3).unwrap(),
            ])
            .unwrap();
            assert_eq!(field(byte, 5, 3) as u32, expected);
        }
        assert_eq!(field(0b1100_0000, 7, 6), 3);
        assert_eq!(field(0xFF, 7, 0), 0xFF);
    }

    #[test]
    fn words_are_little_endian() {
        assert_eq!(assemble_word(0x34, 0x12), 0x1234);
        assert_eq!(split_word(0xBEEF), (0xEF, 0xBE));
    }
}
