use crate::error::Reason;

pub(crate) mod utf16sequence;
pub(crate) mod utf8sequence;

pub(crate) const MAX_CODEPOINT: u32 = 0x10FFFF;

#[inline]
pub(crate) const fn is_surrogate(codepoint: u32) -> bool {
    matches!(codepoint, 0xD800..=0xDFFF)
}

/// Rejects anything that is not a Unicode scalar value.
#[inline]
pub(crate) const fn check_scalar(codepoint: u32) -> Result<(), Reason> {
    if is_surrogate(codepoint) {
        Err(Reason::Surrogate)
    } else if codepoint > MAX_CODEPOINT {
        Err(Reason::OutOfRange)
    } else {
        Ok(())
    }
}

/// Byte order of serialized UTF-16 code units.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endianness {
    BigEndian,
    LittleEndian,
}

impl Endianness {
    #[inline]
    pub const fn bytes_to_u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            Endianness::BigEndian => u16::from_be_bytes(bytes),
            Endianness::LittleEndian => u16::from_le_bytes(bytes),
        }
    }

    #[inline]
    pub const fn u16_to_bytes(self, unit: u16) -> [u8; 2] {
        match self {
            Endianness::BigEndian => unit.to_be_bytes(),
            Endianness::LittleEndian => unit.to_le_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_bounds() {
        assert_eq!(check_scalar(0), Ok(()));
        assert_eq!(check_scalar(0xD7FF), Ok(()));
        assert_eq!(check_scalar(0xD800), Err(Reason::Surrogate));
        assert_eq!(check_scalar(0xDFFF), Err(Reason::Surrogate));
        assert_eq!(check_scalar(0xE000), Ok(()));
        assert_eq!(check_scalar(MAX_CODEPOINT), Ok(()));
        assert_eq!(check_scalar(MAX_CODEPOINT + 1), Err(Reason::OutOfRange));
    }

    #[test]
    fn byte_order() {
        assert_eq!(Endianness::BigEndian.bytes_to_u16([0xD8, 0x3D]), 0xD83D);
        assert_eq!(Endianness::LittleEndian.bytes_to_u16([0x3D, 0xD8]), 0xD83D);
        assert_eq!(Endianness::BigEndian.u16_to_bytes(0x20AC), [0x20, 0xAC]);
        assert_eq!(Endianness::LittleEndian.u16_to_bytes(0x20AC), [0xAC, 0x20]);
    }
}
