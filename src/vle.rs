use crate::error::Reason;
use crate::Validation;

pub(crate) mod unicode;

/// One encoded code point, assembled point by point or produced from a code point.
pub(crate) trait VariableLengthEncoding: Sized {
    type Point: Copy;
    const MAX_POINTS: usize;

    fn build(point: Self::Point, validation: Validation) -> Result<Self, Reason>;
    fn is_complete(&self) -> bool;
    /// Only called while `!self.is_complete()`.
    fn add_point(&mut self, point: Self::Point) -> Result<(), Reason>;
    fn codepoint(&self) -> Result<u32, Reason>;
    fn encode(codepoint: u32, validation: Validation) -> Result<Self, Reason>;
    fn points(&self) -> &[Self::Point];
}

/// Rejection of the input element at `.0`.
pub(crate) type Rejection = (usize, Reason);

pub(crate) fn decode<V: VariableLengthEncoding>(
    input: &[V::Point],
    validation: Validation,
) -> Result<Vec<u32>, Rejection> {
    let mut output = Vec::with_capacity(input.len());
    let mut points = input.iter().copied().enumerate();
    while let Some((start, point)) = points.next() {
        let mut sequence = V::build(point, validation).map_err(|reason| (start, reason))?;
        while !sequence.is_complete() {
            let (offset, point) = points.next().ok_or((start, Reason::Truncated))?;
            sequence
                .add_point(point)
                .map_err(|reason| (offset, reason))?;
        }
        output.push(sequence.codepoint().map_err(|reason| (start, reason))?);
    }
    Ok(output)
}

pub(crate) fn encode<V: VariableLengthEncoding>(
    input: &[u32],
    validation: Validation,
) -> Result<Vec<V::Point>, Rejection> {
    let mut output = Vec::with_capacity(input.len().saturating_mul(V::MAX_POINTS));
    for (offset, &codepoint) in input.iter().enumerate() {
        let sequence = V::encode(codepoint, validation).map_err(|reason| (offset, reason))?;
        output.extend_from_slice(sequence.points());
    }
    output.shrink_to_fit();
    Ok(output)
}
