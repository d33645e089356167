//! Field arithmetic modulo p = 2^255 - 19, using radix-2^51 limbs.
//!
//! A [`FieldElement`] is five `u64` limbs (l0, l1, l2, l3, l4) representing
//! the integer `l0 + l1*2^51 + l2*2^102 + l3*2^153 + l4*2^204`. Most
//! operations accept and return "loose" elements whose limbs may occupy up
//! to 64 bits; [`FieldElement::reduce`] and [`FieldElement::to_bytes`]
//! freeze a loose element into canonical shape (every limb < 2^51, value in
//! `[0, p)`). Callers chaining several additions before a multiplication
//! must track headroom themselves — see each method's doc comment.

use crate::error::FieldError;

pub(crate) const MASK: u64 = (1u64 << 51) - 1;
const TWO_51: u64 = 1u64 << 51;

/// An element of GF(2^255 - 19), stored as five 51-bit limbs.
///
/// Equality (`PartialEq`) compares limbs directly. This is **not** semantic
/// field equality: two loose representations of the same residue can
/// compare unequal. Compare [`FieldElement::to_bytes`] outputs (or call
/// [`FieldElement::reduce`] first) when canonical equality is required.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FieldElement(pub(crate) [u64; 5]);

impl FieldElement {
    /// Decode the low 255 bits of a little-endian 32-byte string.
    ///
    /// The high bit of `bytes[31]` is discarded. The result has every limb
    /// < 2^51 but may represent an integer up to `p + 18` — call
    /// [`FieldElement::reduce`] or [`FieldElement::to_bytes`] for a
    /// canonical representative.
    pub fn from_bytes(bytes: &[u8; 32]) -> FieldElement {
        let load8 = |i: usize| -> u64 { u64::from_le_bytes(bytes[i..i + 8].try_into().unwrap()) };
        FieldElement([
            load8(0) & MASK,
            (load8(6) >> 3) & MASK,
            (load8(12) >> 6) & MASK,
            (load8(19) >> 1) & MASK,
            (load8(24) >> 12) & MASK,
        ])
    }

    /// Decode a variable-length byte slice, rejecting anything but 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<FieldElement, FieldError> {
        let array: [u8; 32] = bytes
            .try_into()
            .map_err(|_| FieldError::InvalidLength(bytes.len()))?;
        Ok(FieldElement::from_bytes(&array))
    }

    /// Encode as a canonical little-endian 32-byte string (calls `reduce` first).
    pub fn to_bytes(self) -> [u8; 32] {
        let t = self.reduce().0;

        let t0 = t[0] | (t[1] << 51);
        let t1 = (t[1] >> 13) | (t[2] << 38);
        let t2 = (t[2] >> 26) | (t[3] << 25);
        let t3 = (t[3] >> 39) | (t[4] << 12);

        let mut out = [0u8; 32];
        out[0..8].copy_from_slice(&t0.to_le_bytes());
        out[8..16].copy_from_slice(&t1.to_le_bytes());
        out[16..24].copy_from_slice(&t2.to_le_bytes());
        out[24..32].copy_from_slice(&t3.to_le_bytes());
        out
    }

    /// Freeze to the canonical representative in `[0, p)`, every limb < 2^51.
    ///
    /// Branch-free: the same sequence of additions, shifts, and masks runs
    /// regardless of the input value.
    pub fn reduce(self) -> FieldElement {
        let mut t = self.0;

        carry_fold(&mut t);
        carry_fold(&mut t);

        // t is now in [0, 2^255), canonically limbed. Conditionally subtract p
        // by adding 19 and folding the carry back: this either adds 19 (value
        // was <= p - 20) or wraps through limb 4, netting a subtraction of p.
        t[0] += 19;
        carry_fold(&mut t);

        // Offset by 2^51 per limb (canceling the +19 and the artificial
        // offset), then carry/mask to land back on the true residue.
        t[0] = t[0].wrapping_add(TWO_51 - 19);
        t[1] = t[1].wrapping_add(TWO_51 - 1);
        t[2] = t[2].wrapping_add(TWO_51 - 1);
        t[3] = t[3].wrapping_add(TWO_51 - 1);
        t[4] = t[4].wrapping_add(TWO_51 - 1);

        t[1] += t[0] >> 51;
        t[0] &= MASK;
        t[2] += t[1] >> 51;
        t[1] &= MASK;
        t[3] += t[2] >> 51;
        t[2] &= MASK;
        t[4] += t[3] >> 51;
        t[3] &= MASK;
        t[4] &= MASK;

        FieldElement(t)
    }

    /// `a + b`. Headroom: limbs < 2^54 in, limbs < 2^55 out (no carry propagation).
    pub fn add(self, other: FieldElement) -> FieldElement {
        FieldElement([
            self.0[0] + other.0[0],
            self.0[1] + other.0[1],
            self.0[2] + other.0[2],
            self.0[3] + other.0[3],
            self.0[4] + other.0[4],
        ])
    }

    /// `a - b mod p`. `other` is carried into canonical limb shape first;
    /// `self` is not, so a caller chaining many additions into `self` without
    /// an interposed `reduce` risks 64-bit overflow.
    pub fn sub(self, other: FieldElement) -> FieldElement {
        let mut h = other.0;
        carry_fold(&mut h);

        const K0: u64 = 2 * (TWO_51 - 19);
        const K1: u64 = 2 * (TWO_51 - 1);
        FieldElement([
            self.0[0].wrapping_add(K0).wrapping_sub(h[0]),
            self.0[1].wrapping_add(K1).wrapping_sub(h[1]),
            self.0[2].wrapping_add(K1).wrapping_sub(h[2]),
            self.0[3].wrapping_add(K1).wrapping_sub(h[3]),
            self.0[4].wrapping_add(K1).wrapping_sub(h[4]),
        ])
    }

    /// `-a`, as `sub(zero, a)`.
    pub fn neg(self) -> FieldElement {
        FieldElement::ZERO.sub(self)
    }

    /// `a * b mod p`, folding terms of degree >= 5 by 19 (since `2^255 = 19 mod p`).
    pub fn mul(self, other: FieldElement) -> FieldElement {
        let f = self.0;
        let g = other.0;

        let f0 = f[0] as u128;
        let f1 = f[1] as u128;
        let f2 = f[2] as u128;
        let f3 = f[3] as u128;
        let f4 = f[4] as u128;
        let g0 = g[0] as u128;
        let g1 = g[1] as u128;
        let g2 = g[2] as u128;
        let g3 = g[3] as u128;
        let g4 = g[4] as u128;

        let f1_19 = 19 * f1;
        let f2_19 = 19 * f2;
        let f3_19 = 19 * f3;
        let f4_19 = 19 * f4;

        let r = [
            f0 * g0 + f1_19 * g4 + f2_19 * g3 + f3_19 * g2 + f4_19 * g1,
            f0 * g1 + f1 * g0 + f2_19 * g4 + f3_19 * g3 + f4_19 * g2,
            f0 * g2 + f1 * g1 + f2 * g0 + f3_19 * g4 + f4_19 * g3,
            f0 * g3 + f1 * g2 + f2 * g1 + f3 * g0 + f4_19 * g4,
            f0 * g4 + f1 * g3 + f2 * g2 + f3 * g1 + f4 * g0,
        ];

        FieldElement(carry_propagate(r))
    }

    /// `a^2 mod p`.
    pub fn sq(self) -> FieldElement {
        FieldElement(carry_propagate(self.sq_wide()))
    }

    /// `2 * a^2 mod p`.
    pub fn sq2(self) -> FieldElement {
        let mut r = self.sq_wide();
        for limb in r.iter_mut() {
            *limb <<= 1;
        }
        FieldElement(carry_propagate(r))
    }

    /// Squared limbs before the final carry chain — shared by `sq` and `sq2`.
    fn sq_wide(self) -> [u128; 5] {
        let f = self.0;
        let f0 = f[0] as u128;
        let f1 = f[1] as u128;
        let f2 = f[2] as u128;
        let f3 = f[3] as u128;
        let f4 = f[4] as u128;

        let f0_2 = f0 << 1;
        let f1_2 = f1 << 1;
        let f1_38 = 38 * f1;
        let f2_38 = 38 * f2;
        let f3_38 = 38 * f3;
        let f3_19 = 19 * f3;
        let f4_19 = 19 * f4;

        [
            f0 * f0 + f1_38 * f4 + f2_38 * f3,
            f0_2 * f1 + f2_38 * f4 + f3_19 * f3,
            f0_2 * f2 + f1 * f1 + f3_38 * f4,
            f0_2 * f3 + f1_2 * f2 + f4_19 * f4,
            f0_2 * f4 + f1_2 * f3 + f2 * f2,
        ]
    }

    /// `a^(p-2) mod p`, the multiplicative inverse. `invert(0) == 0`.
    ///
    /// Fixed addition chain: 265 squarings, 11 multiplications.
    pub fn invert(self) -> FieldElement {
        let z = self;
        let t0 = z.sq();
        let t1 = t0.sq().sq();
        let t1 = z.mul(t1);
        let t0 = t0.mul(t1);
        let t2 = t0.sq();
        let t1 = t1.mul(t2);
        let t2 = sq_n(t1, 5);
        let t1 = t2.mul(t1);
        let t2 = sq_n(t1, 10);
        let t2 = t2.mul(t1);
        let t3 = sq_n(t2, 20);
        let t2 = t3.mul(t2);
        let t2 = sq_n(t2, 10);
        let t1 = t2.mul(t1);
        let t2 = sq_n(t1, 50);
        let t2 = t2.mul(t1);
        let t3 = sq_n(t2, 100);
        let t2 = t3.mul(t2);
        let t2 = sq_n(t2, 50);
        let t1 = t2.mul(t1);
        let t1 = sq_n(t1, 5);
        t1.mul(t0)
    }

    /// `a^((p-5)/8) mod p`, used by the Ristretto255 square-root primitive.
    pub fn pow22523(self) -> FieldElement {
        let z = self;
        let t0 = z.sq();
        let t1 = t0.sq().sq();
        let t1 = z.mul(t1);
        let t0 = t0.mul(t1);
        let t0 = t0.sq();
        let t0 = t1.mul(t0);
        let t1 = sq_n(t0, 5);
        let t0 = t1.mul(t0);
        let t1 = sq_n(t0, 10);
        let t1 = t1.mul(t0);
        let t2 = sq_n(t1, 20);
        let t1 = t2.mul(t1);
        let t1 = sq_n(t1, 10);
        let t0 = t1.mul(t0);
        let t1 = sq_n(t0, 50);
        let t1 = t1.mul(t0);
        let t2 = sq_n(t1, 100);
        let t1 = t2.mul(t1);
        let t1 = sq_n(t1, 50);
        let t0 = t1.mul(t0);
        let t0 = t0.sq().sq();
        t0.mul(z)
    }

    /// `a^((p-1)/2) mod p`: the Legendre symbol, returned as a field element
    /// equal to one, zero, or `-one`.
    pub fn chi25519(self) -> FieldElement {
        let t0 = self.sq();
        let t1 = t0.mul(self);
        let t0 = t1.sq();
        let t2 = t0.sq().sq();
        let t2 = t2.mul(t0);
        let t1 = t2.mul(self);
        let t2 = sq_n(t1, 5);
        let t1 = t2.mul(t1);
        let t2 = sq_n(t1, 10);
        let t2 = t2.mul(t1);
        let t3 = sq_n(t2, 20);
        let t2 = t3.mul(t2);
        let t2 = sq_n(t2, 10);
        let t1 = t2.mul(t1);
        let t2 = sq_n(t1, 50);
        let t2 = t2.mul(t1);
        let t3 = sq_n(t2, 100);
        let t2 = t3.mul(t2);
        let t2 = sq_n(t2, 50);
        let t1 = t2.mul(t1);
        let t1 = sq_n(t1, 4);
        t1.mul(t0)
    }

    /// Constant-time select: returns `g` if `b == 1`, `self` if `b == 0`.
    ///
    /// `b` must be 0 or 1. Implemented with an all-ones/all-zeros XOR mask,
    /// not a branch.
    pub fn cmov(self, g: FieldElement, b: u8) -> FieldElement {
        let mask = 0u64.wrapping_sub(b as u64);
        let mut out = [0u64; 5];
        for i in 0..5 {
            out[i] = self.0[i] ^ ((self.0[i] ^ g.0[i]) & mask);
        }
        FieldElement(out)
    }

    /// Constant-time conditional negate: `-self` if `b == 1`, else `self`.
    pub fn cneg(self, b: u8) -> FieldElement {
        self.cmov(self.neg(), b)
    }

    /// Absolute value: the canonically non-negative representative.
    pub fn abs(self) -> FieldElement {
        self.cneg(self.is_negative())
    }

    /// 1 if this element is zero mod p, else 0. Branch-free.
    pub fn is_zero(self) -> u8 {
        let bytes = self.to_bytes();
        let d = bytes.iter().fold(0u8, |acc, &b| acc | b);
        (1u16 & ((d as u16).wrapping_sub(1) >> 8)) as u8
    }

    /// The least-significant bit of the canonical encoding.
    pub fn is_negative(self) -> u8 {
        self.to_bytes()[0] & 1
    }
}

/// One pass of carry propagation, folding limb 4's overflow into limb 0
/// with a factor of 19 (since `2^255 = 19 mod p`).
fn carry_fold(t: &mut [u64; 5]) {
    t[1] += t[0] >> 51;
    t[0] &= MASK;
    t[2] += t[1] >> 51;
    t[1] &= MASK;
    t[3] += t[2] >> 51;
    t[2] &= MASK;
    t[4] += t[3] >> 51;
    t[3] &= MASK;
    t[0] += 19 * (t[4] >> 51);
    t[4] &= MASK;
}

/// Post-multiplication carry chain shared by `mul`, `sq`, and `sq2`: reduces
/// five 128-bit accumulators to post-multiplication limb shape (limbs 0-3
/// < 2^51, limb 4 < 2^51 + small).
fn carry_propagate(r: [u128; 5]) -> [u64; 5] {
    let mask = MASK as u128;

    let out0 = r[0] & mask;
    let r1 = r[1] + (r[0] >> 51);
    let out1 = r1 & mask;
    let r2 = r[2] + (r1 >> 51);
    let out2 = r2 & mask;
    let r3 = r[3] + (r2 >> 51);
    let out3 = r3 & mask;
    let r4 = r[4] + (r3 >> 51);
    let out4 = r4 & mask;

    let mut out0 = out0 as u64 + 19 * ((r4 >> 51) as u64);
    let mut out1 = out1 as u64;
    let carry = out0 >> 51;
    out0 &= MASK;
    out1 += carry;
    let carry = out1 >> 51;
    out1 &= MASK;
    let out2 = out2 as u64 + carry;

    [out0, out1, out2, out3 as u64, out4 as u64]
}

/// Square `x` `n` times in a row.
fn sq_n(x: FieldElement, n: u32) -> FieldElement {
    let mut t = x;
    for _ in 0..n {
        t = t.sq();
    }
    t
}
