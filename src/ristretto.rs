//! The Ristretto255 inverse-square-root-of-a-ratio primitive.

use crate::field::FieldElement;

impl FieldElement {
    /// Given `u` (`self`) and `v`, seeks `x` with `v*x^2 == ±u` or
    /// `v*x^2 == ±u*sqrt(-1)`.
    ///
    /// Returns `(x, was_square)`, where `was_square == 1` iff `u/v` is a
    /// quadratic residue (including the two `±1` cases above). `x` is
    /// always non-negative. All three candidate-root checks are evaluated
    /// unconditionally and the correction is applied with `cmov`, so the
    /// routine's instruction sequence does not depend on the operands.
    pub fn sqrt_ratio_m1(u: FieldElement, v: FieldElement) -> (FieldElement, u8) {
        let v3 = v.sq().mul(v);
        let mut x = v3.sq().mul(v).mul(u); // x = u * v^7

        x = x.pow22523(); // x = (uv^7)^((p-5)/8)
        x = x.mul(v3).mul(u); // x = uv^3 * (uv^7)^((p-5)/8)

        let vxx = x.sq().mul(v);
        let m_root_check = vxx.sub(u);
        let p_root_check = vxx.add(u);
        let f_root_check = vxx.add(u.mul(FieldElement::SQRTM1));

        let has_m_root = m_root_check.is_zero();
        let has_p_root = p_root_check.is_zero();
        let has_f_root = f_root_check.is_zero();

        let x_sqrtm1 = x.mul(FieldElement::SQRTM1);
        x = x.cmov(x_sqrtm1, has_p_root | has_f_root);
        x = x.abs();

        log::trace!(
            "sqrt_ratio_m1: was_square={}",
            has_m_root | has_p_root
        );

        (x, has_m_root | has_p_root)
    }
}
