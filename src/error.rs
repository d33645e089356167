use thiserror::Error;

/// Errors surfaced by the fallible, ergonomic entry points of this crate.
///
/// The arithmetic kernel itself is total (every operation on a well-shaped
/// limb tuple produces a result) — this type exists only for
/// [`crate::FieldElement::from_slice`], which accepts a variable-length
/// byte slice the way callers decoding from a wire format receive one.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("field element must be exactly 32 bytes, got {0}")]
    InvalidLength(usize),
}
