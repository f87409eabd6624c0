//! The curve-agnostic group contract.
//!
//! A [`Field`] binds a prime-order curve group to its hash-to-curve domain.
//! It is a stateless context: it parses external encodings into [`Point`]s
//! and [`Scalar`]s and maps arbitrary bytes onto the curve. Points and
//! scalars are immutable values that remember the field that made them.
//!
//! The associated types tie the three traits together, so a point of one
//! curve can never be multiplied by a scalar of another.
//!
//! ## Validity is explicit
//!
//! Construction from bytes or hex is pure decoding. Whether a value is an
//! actual group element is answered only by `is_member`. Consuming
//! operations ([`Point::add`], [`Point::mul`], [`Scalar::to_point`],
//! [`Scalar::sign`]) check their operands and report [`GroupError`] rather
//! than producing an unspecified value.

use core::fmt::Debug;

use rand::{CryptoRng, RngCore};

use crate::error::{DecodeError, GroupError, HashToCurveError};

/// Scalar of the field `F`.
pub type ScalarOf<F> = <F as Field>::Scalar;

/// Point of the field `F`.
pub type PointOf<F> = <F as Field>::Point;

/// Algebraic context for one prime-order curve group.
pub trait Field: Clone + Debug + Eq + Send + Sync + 'static {
    /// Elements of the scalar field.
    type Scalar: Scalar<Field = Self>;

    /// Elements of the curve group.
    type Point: Point<Field = Self>;

    /// The standard generator $\mathcal{G}$ of the group.
    fn generator(&self) -> Self::Point;

    /// Deterministically map `msg` to a group element.
    ///
    /// The output is always a member. Exhausting the bounded search is a
    /// distinct, explicit failure.
    fn hash_to_curve(&self, msg: &[u8]) -> Result<Self::Point, HashToCurveError>;

    /// Decode a point from hex. No membership check.
    fn hex_to_point(&self, hex: &str) -> Result<Self::Point, DecodeError>;

    /// Decode a scalar from hex. No membership check.
    fn hex_to_scalar(&self, hex: &str) -> Result<Self::Scalar, DecodeError>;

    /// Sample a uniformly random valid scalar.
    fn random_scalar(&self, rng: &mut (impl RngCore + CryptoRng)) -> Self::Scalar;

    /// Whether `hex` decodes to a member of the group.
    fn is_valid_point(&self, hex: &str) -> bool {
        self.hex_to_point(hex).is_ok_and(|point| point.is_member())
    }

    /// Whether `hex` decodes to a valid nonzero scalar.
    fn is_valid_scalar(&self, hex: &str) -> bool {
        self.hex_to_scalar(hex).is_ok_and(|scalar| scalar.is_member())
    }
}

/// An encoded element of the curve group.
///
/// Equality is byte-wise over the canonical encoding.
pub trait Point: Clone + Debug + Eq + Send + Sync {
    /// The field this point belongs to.
    type Field: Field<Point = Self>;

    /// The field that produced this point.
    fn field(&self) -> &Self::Field;

    /// Group addition `self + other`.
    fn add(&self, other: &Self) -> Result<Self, GroupError>;

    /// Scalar multiplication `[scalar] self`.
    fn mul(&self, scalar: &ScalarOf<Self::Field>) -> Result<Self, GroupError>;

    /// Whether the encoding is a point on the curve.
    ///
    /// This is the only authority on point validity.
    fn is_member(&self) -> bool;

    /// Lowercase hex of the encoding.
    fn to_hex(&self) -> String;
}

/// An encoded element of the scalar field.
pub trait Scalar: Clone + Debug + Send + Sync {
    /// The field this scalar belongs to.
    type Field: Field<Scalar = Self>;

    /// The field that produced this scalar.
    fn field(&self) -> &Self::Field;

    /// The public point `[self] G`.
    fn to_point(&self) -> Result<PointOf<Self::Field>, GroupError>;

    /// Multiply `point` by this scalar.
    ///
    /// In a blind signature scheme the mint's private key "signs" a blinded
    /// message point by exactly this multiplication.
    fn sign(&self, point: &PointOf<Self::Field>) -> Result<PointOf<Self::Field>, GroupError>;

    /// Whether the value lies in $[1, n-1]$ for group order $n$.
    fn is_member(&self) -> bool;

    /// Lowercase hex of the raw encoding.
    fn to_hex(&self) -> String;
}
