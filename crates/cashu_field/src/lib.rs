//! # cashu_field
//!
//! A prime-order group abstraction for Chaumian ecash, instantiated over
//! secp256k1.
//!
//! The crate provides:
//! - **An algebraic contract** ([`algebra`]): the [`Field`], [`Point`] and
//!   [`Scalar`] traits. A field is a stateless context that parses encodings
//!   and hashes bytes onto the curve; points and scalars are immutable values
//!   tagged with the field that produced them.
//! - **One instantiation** ([`secp256k1`]): compressed 33-byte points and
//!   32-byte scalars, with curve arithmetic delegated to `k256`.
//! - **Hash-to-curve**: the Cashu try-and-increment map
//!
//!   $$Y = \text{first valid } \mathtt{0x02} \| \text{SHA256}(
//!   \text{SHA256}(\text{sep} \| m) \| \text{LE32}(i))$$
//!
//!   with $\text{sep} =$ [`DOMAIN_SEPARATOR`](constants::DOMAIN_SEPARATOR).
//!
//! ## Validity
//!
//! Decoding never validates. A parsed point or scalar is only a byte string
//! until [`Point::is_member`] / [`Scalar::is_member`] says otherwise.
//! Operations that consume group elements re-check their operands and fail
//! with [`GroupError`] instead of returning a meaningless result.
//!
//! ```
//! use cashu_field::{Field as _, Point as _, SECP256K1, Scalar as _};
//!
//! let y = SECP256K1.hash_to_curve(b"test_message").expect("hash to curve");
//! assert!(y.is_member());
//!
//! let k = SECP256K1
//!     .hex_to_scalar("0000000000000000000000000000000000000000000000000000000000000001")
//!     .expect("valid hex");
//! assert_eq!(k.sign(&y).expect("valid operands"), y);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![expect(clippy::pub_use, reason = "exporting items for consumers")]

pub mod algebra;
pub mod constants;
pub mod error;
pub mod secp256k1;

mod encoding;

pub use algebra::{Field, Point, Scalar};
pub use error::{DecodeError, GroupError, HashToCurveError};
pub use secp256k1::{SECP256K1, Secp256k1Field, Secp256k1Point, Secp256k1Scalar};
