//! Fixed-vector conformance tests against known GF(2^255 - 19) identities.
//!
//! These are hand-picked vectors, not a reproduction of the seeded-oracle
//! fingerprints in the originating test suite — that suite's `fountains`
//! generator is an external randomness utility outside this crate's scope.

use salvium_field::FieldElement;

fn fe_from_hex(hex: &str) -> FieldElement {
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(hex, &mut bytes).expect("valid hex");
    FieldElement::from_bytes(&bytes)
}

fn hex_from_fe(fe: FieldElement) -> String {
    hex::encode(fe.to_bytes())
}

#[test]
fn zero_and_one_encode_canonically() {
    assert_eq!(hex_from_fe(FieldElement::ZERO), "0".repeat(64));
    let mut one = [0u8; 32];
    one[0] = 1;
    assert_eq!(FieldElement::ONE.to_bytes(), one);
}

#[test]
fn d2_is_d_plus_d() {
    assert_eq!(
        FieldElement::D2.to_bytes(),
        FieldElement::D.add(FieldElement::D).to_bytes()
    );
}

#[test]
fn onemsqd_is_one_minus_d_squared() {
    let expected = FieldElement::ONE.sub(FieldElement::D.sq());
    assert_eq!(FieldElement::ONEMSQD.to_bytes(), expected.to_bytes());
}

#[test]
fn sqdmone_is_d_minus_one_squared() {
    let expected = FieldElement::D.sub(FieldElement::ONE).sq();
    assert_eq!(FieldElement::SQDMONE.to_bytes(), expected.to_bytes());
}

#[test]
fn sqrtm1_squared_is_minus_one() {
    let minus_one = FieldElement::ONE.neg();
    assert_eq!(FieldElement::SQRTM1.sq().to_bytes(), minus_one.to_bytes());
}

#[test]
fn sqrtadm1_squared_is_minus_d_minus_one() {
    // sqrt(a*d - 1) with a = -1, so sqrtadm1^2 == -d - 1.
    let expected = FieldElement::D.neg().sub(FieldElement::ONE);
    assert_eq!(FieldElement::SQRTADM1.sq().to_bytes(), expected.to_bytes());
}

#[test]
fn invsqrtamd_squared_times_amd_is_one() {
    // a - d = -1 - d. invsqrtamd^2 * (a - d) should be one.
    let a_minus_d = FieldElement::ONE.neg().sub(FieldElement::D);
    let product = FieldElement::INVSQRTAMD.sq().mul(a_minus_d);
    assert_eq!(product.to_bytes(), FieldElement::ONE.to_bytes());
}

#[test]
fn curve25519_a_round_trips() {
    let mut expected = [0u8; 32];
    expected[0..4].copy_from_slice(&486662u32.to_le_bytes());
    assert_eq!(FieldElement::CURVE25519_A.to_bytes(), expected);
}

#[test]
fn invert_round_trips_for_basepoint_u() {
    // u = 9, the X25519 base point's u-coordinate.
    let mut bytes = [0u8; 32];
    bytes[0] = 9;
    let u = FieldElement::from_bytes(&bytes);
    let inv = u.invert();
    assert_eq!(u.mul(inv).to_bytes(), FieldElement::ONE.to_bytes());
    assert_eq!(inv.invert().to_bytes(), u.to_bytes());
}

#[test]
fn sqrt_ratio_m1_of_one_over_one_is_square() {
    let (x, was_square) = FieldElement::sqrt_ratio_m1(FieldElement::ONE, FieldElement::ONE);
    assert_eq!(was_square, 1);
    assert_eq!(x.mul(x).to_bytes(), FieldElement::ONE.to_bytes());
    assert_eq!(x.is_negative(), 0);
}

#[test]
fn sqrt_ratio_m1_of_nonresidue_over_one_is_not_square() {
    // sqrtm1 * sqrtm1 == -1, so asking for sqrt(-1 * anything-already-sqrt)
    // would be square; instead probe a fixed small non-residue-ish input and
    // check was_square reflects chi25519's verdict on u/v.
    let u = {
        let mut bytes = [0u8; 32];
        bytes[0] = 2;
        FieldElement::from_bytes(&bytes)
    };
    let v = FieldElement::ONE;
    let (x, was_square) = FieldElement::sqrt_ratio_m1(u, v);
    let chi = u.chi25519();
    let expected_square = chi.to_bytes() == FieldElement::ONE.to_bytes();
    assert_eq!(was_square == 1, expected_square);
    assert_eq!(x.is_negative(), 0);
}

#[test]
fn from_bytes_discards_high_bit() {
    let mut a = [0u8; 32];
    a[31] = 0x80; // only the high bit set
    let b = [0u8; 32];
    let fe_a = FieldElement::from_bytes(&a);
    let fe_b = FieldElement::from_bytes(&b);
    assert_eq!(fe_a.to_bytes(), fe_b.to_bytes());
    a[31] = 0; // sanity: clearing it by hand gives the same bytes
    assert_eq!(a, b);
}

#[test]
fn reduce_of_p_plus_five_is_five() {
    // p + 5 little-endian: p's bytes with byte[0] += 5 (no carry, since
    // p's low byte 0xED + 5 = 0xF2 < 256).
    let mut bytes = [0xffu8; 32];
    bytes[0] = 0xed;
    bytes[31] = 0x7f;
    bytes[0] = bytes[0].wrapping_add(5);
    let fe = FieldElement::from_bytes(&bytes);
    let mut expected = [0u8; 32];
    expected[0] = 5;
    assert_eq!(fe.reduce().to_bytes(), expected);
}
