use crate::error::Reason;
use crate::vle::{unicode::*, VariableLengthEncoding};
use crate::Validation;

pub(crate) struct Utf8Sequence {
    bytes: [u8; 4],
    full_length: u8,
    current_length: u8,
    validation: Validation,
}

impl VariableLengthEncoding for Utf8Sequence {
    type Point = u8;
    const MAX_POINTS: usize = 4;

    #[inline]
    fn build(byte: Self::Point, validation: Validation) -> Result<Self, Reason> {
        let full_length = match byte.leading_ones() {
            0 => 1,
            1 => return Err(Reason::UnexpectedContinuation),
            n @ 2..=4 => n,
            _ => return Err(Reason::InvalidLeadingByte),
        } as u8;
        Ok(Self {
            bytes: [byte, 0, 0, 0],
            full_length,
            current_length: 1,
            validation,
        })
    }

    #[inline]
    fn is_complete(&self) -> bool {
        self.current_length == self.full_length
    }

    #[inline]
    fn add_point(&mut self, point: Self::Point) -> Result<(), Reason> {
        debug_assert!(!self.is_complete());
        if point & CONT_PREFIX_MASK != TAG_CONT {
            return Err(Reason::InvalidContinuation);
        }
        self.bytes[self.current_length as usize] = point;
        self.current_length += 1;
        Ok(())
    }

    #[inline]
    fn codepoint(&self) -> Result<u32, Reason> {
        let codepoint = self.value();
        if self.validation == Validation::Lax {
            return Ok(codepoint);
        }
        let shortest = match self.full_length {
            1 => 0,
            2 => END_ONE_B,
            3 => END_TWO_B,
            _ => END_THREE_B,
        };
        if codepoint < shortest {
            return Err(Reason::Overlong);
        }
        check_scalar(codepoint)?;
        Ok(codepoint)
    }

    #[inline]
    fn encode(codepoint: u32, validation: Validation) -> Result<Self, Reason> {
        let mut bytes = [0; 4];
        let full_length = if codepoint < END_ONE_B {
            bytes[0] = codepoint as u8;
            1
        } else if codepoint < END_TWO_B {
            bytes[0] = (codepoint >> 6 & 0x1F) as u8 | TAG_TWO_B;
            bytes[1] = (codepoint & 0x3F) as u8 | TAG_CONT;
            2
        } else if codepoint < END_THREE_B {
            if validation == Validation::Strict && is_surrogate(codepoint) {
                return Err(Reason::Surrogate);
            }
            bytes[0] = (codepoint >> 12 & 0x0F) as u8 | TAG_THREE_B;
            bytes[1] = (codepoint >> 6 & 0x3F) as u8 | TAG_CONT;
            bytes[2] = (codepoint & 0x3F) as u8 | TAG_CONT;
            3
        } else if codepoint <= MAX_CODEPOINT {
            bytes[0] = (codepoint >> 18 & 0x07) as u8 | TAG_FOUR_B;
            bytes[1] = (codepoint >> 12 & 0x3F) as u8 | TAG_CONT;
            bytes[2] = (codepoint >> 6 & 0x3F) as u8 | TAG_CONT;
            bytes[3] = (codepoint & 0x3F) as u8 | TAG_CONT;
            4
        } else {
            return Err(Reason::OutOfRange);
        };
        Ok(Self {
            bytes,
            full_length,
            current_length: full_length,
            validation,
        })
    }

    #[inline]
    fn points(&self) -> &[Self::Point] {
        &self.bytes[..self.current_length as usize]
    }
}

impl Utf8Sequence {
    #[inline]
    fn value(&self) -> u32 {
        let width = self.full_length as u32;
        let mut codepoint = match width {
            1 => return self.bytes[0] as u32,
            _ => (self.bytes[0] & (0x7F >> width)) as u32,
        };
        for byte in &self.bytes[1..self.full_length as usize] {
            codepoint = (codepoint << 6) | (byte & CONT_VALUE_MASK) as u32;
        }
        codepoint
    }
}

const TAG_CONT: u8 = 0b1000_0000;
const TAG_TWO_B: u8 = 0b1100_0000;
const TAG_THREE_B: u8 = 0b1110_0000;
const TAG_FOUR_B: u8 = 0b1111_0000;
const CONT_PREFIX_MASK: u8 = 0b1100_0000;
const CONT_VALUE_MASK: u8 = 0b0011_1111;
const END_ONE_B: u32 = 0x80;
const END_TWO_B: u32 = 0x800;
const END_THREE_B: u32 = 0x10000;

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_one(bytes: &[u8], validation: Validation) -> Result<u32, Reason> {
        let mut sequence = Utf8Sequence::build(bytes[0], validation)?;
        for &byte in &bytes[1..] {
            sequence.add_point(byte)?;
        }
        assert!(sequence.is_complete());
        sequence.codepoint()
    }

    #[test]
    fn leading_byte_lengths() {
        for (byte, length) in [(0x41, 1), (0xC3, 2), (0xE2, 3), (0xF0, 4)] {
            let sequence = Utf8Sequence::build(byte, Validation::Strict).unwrap();
            assert_eq!(sequence.full_length, length);
            assert_eq!(sequence.is_complete(), length == 1);
        }
    }

    #[test]
    fn rejects_bad_leading_bytes() {
        assert_eq!(
            Utf8Sequence::build(0x80, Validation::Lax).err(),
            Some(Reason::UnexpectedContinuation)
        );
        assert_eq!(
            Utf8Sequence::build(0xBF, Validation::Strict).err(),
            Some(Reason::UnexpectedContinuation)
        );
        for byte in 0xF8..=0xFF {
            assert_eq!(
                Utf8Sequence::build(byte, Validation::Lax).err(),
                Some(Reason::InvalidLeadingByte)
            );
        }
    }

    #[test]
    fn rejects_bad_continuation() {
        let mut sequence = Utf8Sequence::build(0xE2, Validation::Strict).unwrap();
        assert!(sequence.add_point(0x82).is_ok());
        assert_eq!(sequence.add_point(0x41), Err(Reason::InvalidContinuation));
        assert_eq!(sequence.add_point(0xC0), Err(Reason::InvalidContinuation));
        assert!(!sequence.is_complete());
    }

    #[test]
    fn decodes_each_width() {
        assert_eq!(decode_one(&[0x24], Validation::Strict), Ok(0x24));
        assert_eq!(decode_one(&[0xC2, 0xA3], Validation::Strict), Ok(0xA3));
        assert_eq!(decode_one(&[0xE2, 0x82, 0xAC], Validation::Strict), Ok(0x20AC));
        assert_eq!(
            decode_one(&[0xF0, 0x9F, 0x98, 0x80], Validation::Strict),
            Ok(0x1F600)
        );
    }

    #[test]
    fn strict_checks_value() {
        assert_eq!(decode_one(&[0xC0, 0x80], Validation::Strict), Err(Reason::Overlong));
        assert_eq!(
            decode_one(&[0xE0, 0x80, 0xAF], Validation::Strict),
            Err(Reason::Overlong)
        );
        assert_eq!(
            decode_one(&[0xED, 0xA0, 0x80], Validation::Strict),
            Err(Reason::Surrogate)
        );
        assert_eq!(
            decode_one(&[0xF4, 0x90, 0x80, 0x80], Validation::Strict),
            Err(Reason::OutOfRange)
        );
    }

    #[test]
    fn lax_accepts_any_pattern() {
        assert_eq!(decode_one(&[0xC0, 0x80], Validation::Lax), Ok(0));
        assert_eq!(decode_one(&[0xED, 0xA0, 0x80], Validation::Lax), Ok(0xD800));
        assert_eq!(
            decode_one(&[0xF7, 0xBF, 0xBF, 0xBF], Validation::Lax),
            Ok(0x1F_FFFF)
        );
    }

    #[test]
    fn encodes_boundaries() {
        let cases: [(u32, &[u8]); 8] = [
            (0x7F, &[0x7F]),
            (0x80, &[0xC2, 0x80]),
            (0x7FF, &[0xDF, 0xBF]),
            (0x800, &[0xE0, 0xA0, 0x80]),
            (0xFFFF, &[0xEF, 0xBF, 0xBF]),
            (0x10000, &[0xF0, 0x90, 0x80, 0x80]),
            (0x10FFFF, &[0xF4, 0x8F, 0xBF, 0xBF]),
            (0x20AC, &[0xE2, 0x82, 0xAC]),
        ];
        for (codepoint, bytes) in cases {
            let sequence = Utf8Sequence::encode(codepoint, Validation::Strict).unwrap();
            assert_eq!(sequence.points(), bytes);
        }
    }

    #[test]
    fn encode_surrogate_depends_on_validation() {
        assert_eq!(
            Utf8Sequence::encode(0xDFFF, Validation::Strict).err(),
            Some(Reason::Surrogate)
        );
        let sequence = Utf8Sequence::encode(0xDFFF, Validation::Lax).unwrap();
        assert_eq!(sequence.points(), &[0xED, 0xBF, 0xBF]);
    }

    #[test]
    fn encode_out_of_range() {
        for validation in [Validation::Strict, Validation::Lax] {
            assert_eq!(
                Utf8Sequence::encode(0x110000, validation).err(),
                Some(Reason::OutOfRange)
            );
        }
    }
}
