//! Domain constants used by Ristretto255 decoding and point arithmetic.
//!
//! Each tuple is the canonical five-limb radix-2^51 representation; callers
//! must use these literal values rather than re-derive them.

use crate::field::FieldElement;

impl FieldElement {
    /// The additive identity, 0.
    pub const ZERO: FieldElement = FieldElement([0, 0, 0, 0, 0]);

    /// The multiplicative identity, 1.
    pub const ONE: FieldElement = FieldElement([1, 0, 0, 0, 0]);

    /// Edwards curve parameter `d = -121665/121666`.
    pub const D: FieldElement = FieldElement([
        929955233495203,
        466365720129213,
        1662059464998953,
        2033849074728123,
        1442794654840575,
    ]);

    /// `2*d`.
    pub const D2: FieldElement = FieldElement([
        1859910466990425,
        932731440258426,
        1072319116312658,
        1815898335770999,
        633789495995903,
    ]);

    /// A fixed non-trivial square root of -1 mod p.
    pub const SQRTM1: FieldElement = FieldElement([
        1718705420411056,
        234908883556509,
        2233514472574048,
        2117202627021982,
        765476049583133,
    ]);

    /// `1/sqrt(a - d)` for Ristretto255, where `a = -1`.
    pub const INVSQRTAMD: FieldElement = FieldElement([
        278908739862762,
        821645201101625,
        8113234426968,
        1777959178193151,
        2118520810568447,
    ]);

    /// `1 - d^2`.
    pub const ONEMSQD: FieldElement = FieldElement([
        1136626929484150,
        1998550399581263,
        496427632559748,
        118527312129759,
        45110755273534,
    ]);

    /// `(d - 1)^2`.
    pub const SQDMONE: FieldElement = FieldElement([
        1507062230895904,
        1572317787530805,
        683053064812840,
        317374165784489,
        1572899562415810,
    ]);

    /// `sqrt(a * d - 1)` for Ristretto255, where `a = -1`.
    pub const SQRTADM1: FieldElement = FieldElement([
        2241493124984347,
        425987919032274,
        2207028919301688,
        1220490630685848,
        974799131293748,
    ]);

    /// The Montgomery curve coefficient `A = 486662` for Curve25519.
    pub const CURVE25519_A: FieldElement = FieldElement([486662, 0, 0, 0, 0]);
}
