use core::{fmt, str::FromStr};

use group::Group as _;
use k256::{
    AffinePoint, EncodedPoint, ProjectivePoint,
    elliptic_curve::sec1::{FromEncodedPoint as _, Tag, ToEncodedPoint as _},
};

use super::{SECP256K1, Secp256k1Field, Secp256k1Scalar};
use crate::{
    algebra::{Field as _, Point},
    constants::POINT_LEN,
    error::{DecodeError, GroupError},
};

/// A secp256k1 point in 33-byte SEC1 compressed encoding.
///
/// Holds the encoding as given: the bytes are not checked against the
/// curve until [`is_member`](Point::is_member) is asked. Equality and
/// hashing are over the raw bytes, which is exact for the canonical
/// compressed form.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[expect(
    clippy::module_name_repetitions,
    reason = "curve-qualified names keep the algebra trait names free"
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Secp256k1Point {
    #[cfg_attr(feature = "serde", serde(skip))]
    field: Secp256k1Field,
    #[cfg_attr(feature = "serde", serde(with = "crate::encoding::hex_serde"))]
    bytes: [u8; POINT_LEN],
}

impl Secp256k1Point {
    /// Wrap a compressed encoding without validating it.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; POINT_LEN]) -> Self {
        Self {
            field: SECP256K1,
            bytes,
        }
    }

    /// The compressed encoding.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; POINT_LEN] {
        self.bytes
    }

    /// Decode through `k256`.
    ///
    /// Only the compressed tags `0x02`/`0x03` are accepted. SEC1 also admits
    /// a 33-byte compact form (`0x05 || x`), which would give a second
    /// encoding of the same element.
    fn to_affine(self) -> Option<AffinePoint> {
        let encoded = EncodedPoint::from_bytes(self.bytes).ok()?;
        if !matches!(encoded.tag(), Tag::CompressedEvenY | Tag::CompressedOddY) {
            return None;
        }
        AffinePoint::from_encoded_point(&encoded).into()
    }

    fn to_projective(self) -> Result<ProjectivePoint, GroupError> {
        self.to_affine()
            .map(ProjectivePoint::from)
            .ok_or(GroupError::InvalidPoint)
    }

    /// Compress a curve point. The identity has no 33-byte form.
    pub(super) fn from_projective(point: ProjectivePoint) -> Result<Self, GroupError> {
        if bool::from(point.is_identity()) {
            return Err(GroupError::Identity);
        }
        let encoded = point.to_affine().to_encoded_point(true);
        <[u8; POINT_LEN]>::try_from(encoded.as_bytes())
            .map(Self::from_bytes)
            .map_err(|_short| GroupError::Identity)
    }
}

impl Point for Secp256k1Point {
    type Field = Secp256k1Field;

    fn field(&self) -> &Secp256k1Field {
        &self.field
    }

    fn add(&self, other: &Self) -> Result<Self, GroupError> {
        let sum = self.to_projective()? + other.to_projective()?;
        Self::from_projective(sum)
    }

    fn mul(&self, scalar: &Secp256k1Scalar) -> Result<Self, GroupError> {
        let product = self.to_projective()? * scalar.to_k256()?;
        Self::from_projective(product)
    }

    fn is_member(&self) -> bool {
        self.to_affine().is_some()
    }

    fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl From<[u8; POINT_LEN]> for Secp256k1Point {
    fn from(bytes: [u8; POINT_LEN]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Secp256k1Point> for [u8; POINT_LEN] {
    fn from(point: Secp256k1Point) -> Self {
        point.to_bytes()
    }
}

impl fmt::Display for Secp256k1Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Secp256k1Point {
    type Err = DecodeError;

    fn from_str(hex: &str) -> Result<Self, Self::Err> {
        SECP256K1.hex_to_point(hex)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::{SeedableRng as _, rngs::StdRng};

    use super::*;
    use crate::{
        algebra::Scalar as _,
        constants::EVEN_Y_TAG,
    };

    const TWO_G: &str = "02c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5";

    fn random_point(seed: u64) -> Secp256k1Point {
        let mut rng = StdRng::seed_from_u64(seed);
        SECP256K1
            .random_scalar(&mut rng)
            .to_point()
            .expect("random scalar is valid")
    }

    fn with_tag(mut bytes: [u8; POINT_LEN], tag: u8) -> Secp256k1Point {
        if let Some(first) = bytes.first_mut() {
            *first = tag;
        }
        Secp256k1Point::from_bytes(bytes)
    }

    /// Same x-coordinate, opposite y: the group inverse.
    fn negate(point: &Secp256k1Point) -> Secp256k1Point {
        let bytes = point.to_bytes();
        let tag = bytes.first().map_or(0, |tag| tag ^ 0x01);
        with_tag(bytes, tag)
    }

    #[test]
    fn zero_bytes_are_not_a_member() {
        assert!(
            !Secp256k1Point::from_bytes([0u8; POINT_LEN]).is_member(),
            "33 zero bytes"
        );
    }

    #[test]
    fn off_curve_x_is_not_a_member() {
        // x = 5: 5^3 + 7 = 132 is a non-residue mod p.
        let mut x = [0u8; POINT_LEN];
        if let Some(last) = x.last_mut() {
            *last = 5;
        }
        assert!(!with_tag(x, EVEN_Y_TAG).is_member(), "x = 5");

        // x = p is not a canonical field element.
        let p = SECP256K1
            .hex_to_point("02fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f")
            .expect("valid hex");
        assert!(!p.is_member(), "x = p");
    }

    #[test]
    fn bad_tag_is_not_a_member() {
        let bytes = SECP256K1.generator().to_bytes();
        assert!(!with_tag(bytes, 0x00).is_member(), "identity tag");
        assert!(!with_tag(bytes, 0x04).is_member(), "uncompressed tag");
        assert!(!with_tag(bytes, 0x05).is_member(), "compact tag");
        assert!(!with_tag(bytes, 0x06).is_member(), "hybrid tag");
    }

    #[test]
    fn compact_encoding_is_rejected_everywhere() {
        let generator = SECP256K1.generator();
        let compact = with_tag(generator.to_bytes(), 0x05);
        assert!(
            !SECP256K1.is_valid_point(&compact.to_hex()),
            "compact encoding of G"
        );
        assert_eq!(
            compact.add(&generator),
            Err(GroupError::InvalidPoint),
            "add rejects the compact form"
        );
        let one = SECP256K1
            .hex_to_scalar("0000000000000000000000000000000000000000000000000000000000000001")
            .expect("valid hex");
        assert_eq!(
            compact.mul(&one),
            Err(GroupError::InvalidPoint),
            "mul rejects the compact form"
        );
    }

    #[test]
    fn both_parities_are_members() {
        let generator = SECP256K1.generator();
        assert!(negate(&generator).is_member(), "odd-y generator");
        assert_ne!(negate(&generator), generator, "distinct encodings");
    }

    #[test]
    fn doubling_generator() {
        let generator = SECP256K1.generator();
        let doubled = generator.add(&generator).expect("valid operands");
        assert_eq!(doubled.to_hex(), TWO_G, "G + G = 2G");
    }

    #[test]
    fn adding_inverse_is_identity() {
        let point = random_point(7);
        assert_eq!(
            point.add(&negate(&point)),
            Err(GroupError::Identity),
            "P + (-P) has no compressed encoding"
        );
    }

    #[test]
    fn invalid_operands_are_rejected() {
        let valid = SECP256K1.generator();
        let invalid = Secp256k1Point::from_bytes([0u8; POINT_LEN]);
        assert_eq!(valid.add(&invalid), Err(GroupError::InvalidPoint), "rhs");
        assert_eq!(invalid.add(&valid), Err(GroupError::InvalidPoint), "lhs");

        let one = SECP256K1
            .hex_to_scalar("0000000000000000000000000000000000000000000000000000000000000001")
            .expect("valid hex");
        assert_eq!(invalid.mul(&one), Err(GroupError::InvalidPoint), "point");

        let zero = Secp256k1Scalar::from_bytes([0u8; 32]);
        assert_eq!(valid.mul(&zero), Err(GroupError::InvalidScalar), "scalar");
    }

    #[test]
    fn field_is_the_secp256k1_context() {
        assert_eq!(*SECP256K1.generator().field(), SECP256K1, "owning field");
    }

    #[test]
    fn display_and_parse() {
        let generator = SECP256K1.generator();
        assert_eq!(generator.to_string(), generator.to_hex(), "display is hex");
        assert_eq!(
            generator.to_hex().parse::<Secp256k1Point>(),
            Ok(generator),
            "parse inverts display"
        );
        assert_eq!(
            TWO_G.to_uppercase().parse::<Secp256k1Point>().map(|point| point.to_hex()),
            Ok(TWO_G.to_owned()),
            "uppercase input normalizes to lowercase output"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_hex_string() {
        let generator = SECP256K1.generator();
        let json = serde_json::to_string(&generator).expect("serializes");
        assert_eq!(json, format!("\"{}\"", generator.to_hex()), "hex string");
        let back: Secp256k1Point = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, generator, "round trip");
        assert!(
            serde_json::from_str::<Secp256k1Point>("\"02ab\"").is_err(),
            "short encoding"
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn hex_round_trip(seed in any::<u64>()) {
            let point = random_point(seed);
            let parsed = SECP256K1.hex_to_point(&point.to_hex()).expect("valid hex");
            prop_assert_eq!(parsed.to_hex(), point.to_hex());
        }

        #[test]
        fn addition_is_associative(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
            let (pa, pb, pc) = (random_point(a), random_point(b), random_point(c));
            let left = pa.add(&pb).and_then(|ab| ab.add(&pc));
            let right = pb.add(&pc).and_then(|bc| pa.add(&bc));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn addition_is_commutative(a in any::<u64>(), b in any::<u64>()) {
            let (pa, pb) = (random_point(a), random_point(b));
            prop_assert_eq!(pa.add(&pb), pb.add(&pa));
        }

        #[test]
        fn mul_distributes_over_add(a in any::<u64>(), b in any::<u64>(), k in any::<u64>()) {
            let (pa, pb) = (random_point(a), random_point(b));
            let scalar = SECP256K1.random_scalar(&mut StdRng::seed_from_u64(k));
            let left = pa.add(&pb).and_then(|sum| sum.mul(&scalar));
            let right = pa.mul(&scalar).and_then(|ka| pb.mul(&scalar).and_then(|kb| ka.add(&kb)));
            prop_assert_eq!(left, right);
        }
    }
}
