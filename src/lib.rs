//! Conversions between UTF-8, UTF-16 and raw Unicode code points.
//!
//! Every conversion takes a whole buffer and returns a freshly allocated one.
//! Failures are reported as [`Error::InvalidEncoding`], so an empty input
//! (which always converts to an empty output) can never be mistaken for a
//! rejected one.
//!
//! ```
//! let codepoints = utfconv::from_utf8("€😀".as_bytes()).unwrap();
//! assert_eq!(codepoints, [0x20AC, 0x1F600]);
//! assert_eq!(utfconv::to_utf16(&codepoints).unwrap(), [0x20AC, 0xD83D, 0xDE00]);
//! assert!(utfconv::from_utf8(&[0x80]).is_err());
//! ```
//!
//! # Validation
//!
//! The plain functions use [`Validation::Strict`], which only accepts and
//! produces Unicode scalar values in their shortest form. The `*_with`
//! variants also take [`Validation::Lax`], which only checks bit layout.
//! Under it UTF-8 decoding accepts overlong forms, surrogates and values up
//! to U+1FFFFF. UTF-8 encoding accepts surrogates, and UTF-16 encoding puts
//! no upper bound on code points.

mod error;
mod vle;

pub use error::{Encoding, Error, Reason, Result};
pub use vle::unicode::Endianness;

use vle::unicode::{utf16sequence::Utf16Sequence, utf8sequence::Utf8Sequence};
use vle::VariableLengthEncoding;

/// How much a conversion checks beyond the structure of its input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Validation {
    /// Reject overlong UTF-8, surrogate code points and anything above U+10FFFF.
    #[default]
    Strict,
    /// Only reject input that does not fit the encoding's bit layout.
    Lax,
}

/// Decodes a string into code points, going through its UTF-16 form.
pub fn from_string(input: &str) -> Result<Vec<u32>> {
    from_string_with(input, Validation::default())
}

pub fn from_string_with(input: &str, validation: Validation) -> Result<Vec<u32>> {
    let units: Vec<u16> = input.encode_utf16().collect();
    from_utf16_with(&units, validation)
}

pub fn from_utf8(input: &[u8]) -> Result<Vec<u32>> {
    from_utf8_with(input, Validation::default())
}

pub fn from_utf8_with(input: &[u8], validation: Validation) -> Result<Vec<u32>> {
    vle::decode::<Utf8Sequence>(input, validation)
        .map_err(|rejection| Error::invalid(Encoding::Utf8, rejection))
}

/// Decodes UTF-16 code units. Surrogates must come in high/low pairs.
pub fn from_utf16(input: &[u16]) -> Result<Vec<u32>> {
    from_utf16_with(input, Validation::default())
}

pub fn from_utf16_with(input: &[u16], validation: Validation) -> Result<Vec<u32>> {
    vle::decode::<Utf16Sequence>(input, validation)
        .map_err(|rejection| Error::invalid(Encoding::Utf16, rejection))
}

/// Decodes UTF-16 serialized as bytes in the given order.
///
/// Error offsets index `input`, i.e. they count bytes.
pub fn from_utf16_bytes(input: &[u8], endianness: Endianness) -> Result<Vec<u32>> {
    from_utf16_bytes_with(input, endianness, Validation::default())
}

pub fn from_utf16_bytes_with(
    input: &[u8],
    endianness: Endianness,
    validation: Validation,
) -> Result<Vec<u32>> {
    let chunks = input.chunks_exact(2);
    if !chunks.remainder().is_empty() {
        return Err(Error::invalid(
            Encoding::Utf16,
            (input.len() - 1, Reason::Truncated),
        ));
    }
    let units: Vec<u16> = chunks
        .map(|pair| endianness.bytes_to_u16([pair[0], pair[1]]))
        .collect();
    vle::decode::<Utf16Sequence>(&units, validation)
        .map_err(|(offset, reason)| Error::invalid(Encoding::Utf16, (offset * 2, reason)))
}

/// Encodes code points as a `String`, going through their UTF-16 form.
pub fn to_string(input: &[u32]) -> Result<String> {
    to_string_with(input, Validation::default())
}

pub fn to_string_with(input: &[u32], validation: Validation) -> Result<String> {
    let chars = input
        .iter()
        .enumerate()
        .map(|(offset, &codepoint)| -> Result<char> {
            let rejected = |reason| Error::invalid(Encoding::CodePoints, (offset, reason));
            let sequence = Utf16Sequence::encode(codepoint, validation).map_err(rejected)?;
            let mut decoded = char::decode_utf16(sequence.points().iter().copied());
            // Lax pairs above U+10FFFF wrap into units that either fail to
            // decode or decode to some other character.
            match (decoded.next(), decoded.next()) {
                (Some(Ok(ch)), None) if u32::from(ch) == codepoint => Ok(ch),
                _ => Err(rejected(Reason::OutOfRange)),
            }
        });
    itertools::process_results(chars, |chars| chars.collect())
}

pub fn to_utf8(input: &[u32]) -> Result<Vec<u8>> {
    to_utf8_with(input, Validation::default())
}

pub fn to_utf8_with(input: &[u32], validation: Validation) -> Result<Vec<u8>> {
    vle::encode::<Utf8Sequence>(input, validation)
        .map_err(|rejection| Error::invalid(Encoding::CodePoints, rejection))
}

/// Encodes code points as UTF-16, splitting anything above U+FFFF into a
/// surrogate pair.
pub fn to_utf16(input: &[u32]) -> Result<Vec<u16>> {
    to_utf16_with(input, Validation::default())
}

pub fn to_utf16_with(input: &[u32], validation: Validation) -> Result<Vec<u16>> {
    vle::encode::<Utf16Sequence>(input, validation)
        .map_err(|rejection| Error::invalid(Encoding::CodePoints, rejection))
}

/// Encodes code points as UTF-16 and serializes the units in the given order.
pub fn to_utf16_bytes(input: &[u32], endianness: Endianness) -> Result<Vec<u8>> {
    to_utf16_bytes_with(input, endianness, Validation::default())
}

pub fn to_utf16_bytes_with(
    input: &[u32],
    endianness: Endianness,
    validation: Validation,
) -> Result<Vec<u8>> {
    let units = to_utf16_with(input, validation)?;
    Ok(units
        .into_iter()
        .flat_map(|unit| endianness.u16_to_bytes(unit))
        .collect())
}

pub fn utf8_to_utf16(input: &[u8]) -> Result<Vec<u16>> {
    to_utf16(&from_utf8(input)?)
}

pub fn utf16_to_utf8(input: &[u16]) -> Result<Vec<u8>> {
    to_utf8(&from_utf16(input)?)
}
