//! Error types.
//!
//! Each failure class has its own type so callers can never confuse a
//! malformed encoding with an invalid group element, or either of those with
//! an exhausted hash-to-curve search.

/// A hex string could not be decoded into a fixed-width encoding.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum DecodeError {
    /// The input is not valid hex (odd length or a non-hex character).
    #[error("malformed hex: {0}")]
    Hex(hex::FromHexError),

    /// The input is valid hex but decodes to the wrong number of bytes.
    #[error("expected {expected} bytes, found {found}")]
    Length {
        /// Required width of the encoding.
        expected: usize,
        /// Width of the decoded input.
        found: usize,
    },
}

impl From<hex::FromHexError> for DecodeError {
    fn from(err: hex::FromHexError) -> Self {
        Self::Hex(err)
    }
}

/// An operand or result of a group operation is not a usable group element.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GroupError {
    /// A point operand is not a compressed encoding of a curve point.
    #[error("point is not a member of the group")]
    InvalidPoint,

    /// A scalar operand is zero or not below the group order.
    #[error("scalar is not a member of the scalar field")]
    InvalidScalar,

    /// The result is the point at infinity, which has no compressed encoding.
    #[error("result is the point at infinity")]
    Identity,
}

/// The hash-to-curve search ran out of counters without finding a point.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum HashToCurveError {
    /// Every candidate in the counter range was off the curve.
    #[error("no curve point found after {attempts} attempts")]
    Exhausted {
        /// Number of counters tried.
        attempts: u32,
    },
}
