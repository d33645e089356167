//! Constant-time arithmetic in GF(2^255 - 19), the base field underlying
//! Ed25519 and Ristretto255.
//!
//! [`FieldElement`] is the single value type this crate exposes: a
//! five-limb radix-2^51 representation together with the carry/reduce,
//! add/sub/negate, multiply/square, inversion, and Ristretto square-root
//! operations higher-level curve code builds on. The crate has no
//! allocation, no I/O, and no configuration surface — every operation is a
//! pure function from one or two elements to a fresh element.
//!
//! Point arithmetic, scalar multiplication, Ed25519 signing, and Ristretto
//! group encoding are not part of this crate; they are external consumers
//! of [`FieldElement`].

mod constants;
mod error;
mod field;
mod ristretto;

pub use error::FieldError;
pub use field::FieldElement;
