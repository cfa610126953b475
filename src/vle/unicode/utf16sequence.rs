use crate::error::Reason;
use crate::vle::{unicode::*, VariableLengthEncoding};
use crate::Validation;

#[derive(Clone, Copy)]
enum Utf16Type {
    Bmp(u16),
    Surrogate { data: [u16; 2], is_complete: bool },
}

pub(crate) struct Utf16Sequence(Utf16Type);

impl VariableLengthEncoding for Utf16Sequence {
    type Point = u16;
    const MAX_POINTS: usize = 2;

    #[inline]
    fn build(point: Self::Point, _validation: Validation) -> Result<Self, Reason> {
        let data = match point {
            0xD800..=0xDBFF => Utf16Type::Surrogate {
                data: [point, 0],
                is_complete: false,
            },
            0xDC00..=0xDFFF => return Err(Reason::UnpairedLowSurrogate),
            _ => Utf16Type::Bmp(point),
        };
        Ok(Self(data))
    }

    #[inline]
    fn is_complete(&self) -> bool {
        match self.0 {
            Utf16Type::Bmp(_) => true,
            Utf16Type::Surrogate {
                data: _,
                is_complete,
            } => is_complete,
        }
    }

    #[inline]
    fn add_point(&mut self, point: Self::Point) -> Result<(), Reason> {
        match self.0 {
            Utf16Type::Bmp(_)
            | Utf16Type::Surrogate {
                data: _,
                is_complete: true,
            } => unreachable!("add_point on a complete sequence"),
            Utf16Type::Surrogate {
                data: ref mut units,
                ref mut is_complete,
            } => {
                if !(0xDC00..=0xDFFF).contains(&point) {
                    return Err(Reason::MissingLowSurrogate);
                }
                units[1] = point;
                *is_complete = true;
                Ok(())
            }
        }
    }

    #[inline]
    fn codepoint(&self) -> Result<u32, Reason> {
        match self.0 {
            Utf16Type::Bmp(unit) => Ok(unit as u32),
            Utf16Type::Surrogate {
                data: _,
                is_complete: false,
            } => Err(Reason::Truncated),
            Utf16Type::Surrogate {
                data: units,
                is_complete: true,
            } => {
                let high = units[0] as u32;
                let low = units[1] as u32;
                Ok(((high - 0xD800) << 10) + (low - 0xDC00) + 0x10000)
            }
        }
    }

    #[inline]
    fn encode(codepoint: u32, validation: Validation) -> Result<Self, Reason> {
        if is_surrogate(codepoint) {
            return Err(Reason::Surrogate);
        }
        if codepoint < 0x10000 {
            return Ok(Self(Utf16Type::Bmp(codepoint as u16)));
        }
        if validation == Validation::Strict {
            check_scalar(codepoint)?;
        }
        let offset = codepoint - 0x10000;
        // Lax input above U+10FFFF wraps, as a 16-bit store would.
        let high = ((offset >> 10) + 0xD800) as u16;
        let low = ((offset & 0x3FF) + 0xDC00) as u16;
        Ok(Self(Utf16Type::Surrogate {
            data: [high, low],
            is_complete: true,
        }))
    }

    #[inline]
    fn points(&self) -> &[Self::Point] {
        match self.0 {
            Utf16Type::Bmp(ref unit) => core::slice::from_ref(unit),
            Utf16Type::Surrogate {
                data: ref units,
                is_complete: true,
            } => units,
            Utf16Type::Surrogate {
                data: ref units,
                is_complete: false,
            } => &units[..1],
        }
    }
}
