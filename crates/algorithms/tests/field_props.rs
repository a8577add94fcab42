//! Property tests for the GF(2^m) field laws
//!
//! The algebraic identities are checked over random elements of a
//! mid-size trinomial field, GF(2^113) with x^113 + x^9 + 1, and the
//! encoding round-trips additionally over the sect409k1 base field.

use gf2m_algorithms::field::{BinaryField, FieldElement};
use gf2m_params::GF2_409;
use proptest::prelude::*;

fn gf113() -> BinaryField {
    BinaryField::new(113, &[113, 9, 0]).unwrap()
}

fn gf409() -> BinaryField {
    BinaryField::new(GF2_409.degree, GF2_409.poly_terms).unwrap()
}

/// Strategy producing an element of GF(2^113) from raw bytes
fn gf113_element() -> impl Strategy<Value = FieldElement> {
    proptest::collection::vec(any::<u8>(), 15).prop_map(|mut bytes| {
        bytes[0] &= 0x01; // confine to 113 bits
        gf113().element_from_bytes(&bytes).unwrap()
    })
}

/// Strategy producing an element of GF(2^409) from raw bytes
fn gf409_element() -> impl Strategy<Value = FieldElement> {
    proptest::collection::vec(any::<u8>(), 52).prop_map(|mut bytes| {
        bytes[0] &= 0x01; // confine to 409 bits
        gf409().element_from_bytes(&bytes).unwrap()
    })
}

proptest! {
    #[test]
    fn addition_commutes(a in gf113_element(), b in gf113_element()) {
        let gf = gf113();
        prop_assert_eq!(gf.add(&a, &b), gf.add(&b, &a));
    }

    #[test]
    fn addition_identity_and_self_inverse(a in gf113_element()) {
        let gf = gf113();
        prop_assert_eq!(gf.add(&a, &gf.zero()), a.clone());
        prop_assert!(gf.add(&a, &a).is_zero());
    }

    #[test]
    fn multiplication_commutes(a in gf113_element(), b in gf113_element()) {
        let gf = gf113();
        prop_assert_eq!(gf.mul(&a, &b), gf.mul(&b, &a));
    }

    #[test]
    fn multiplicative_identity(a in gf113_element()) {
        let gf = gf113();
        prop_assert_eq!(gf.mul(&a, &gf.one()), a);
    }

    #[test]
    fn multiplication_distributes(
        a in gf113_element(),
        b in gf113_element(),
        c in gf113_element(),
    ) {
        let gf = gf113();
        let lhs = gf.mul(&a, &gf.add(&b, &c));
        let rhs = gf.add(&gf.mul(&a, &b), &gf.mul(&a, &c));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn power_consistency(a in gf113_element()) {
        let gf = gf113();
        prop_assert_eq!(gf.pow_u64(&a, 0), gf.one());
        prop_assert_eq!(gf.pow_u64(&a, 2), gf.square(&a));
        prop_assert_eq!(gf.pow_u64(&a, 2), gf.mul(&a, &a));
    }

    #[test]
    fn trace_is_linear(a in gf113_element(), b in gf113_element()) {
        let gf = gf113();
        prop_assert_eq!(gf.trace(&gf.add(&a, &b)), gf.trace(&a) ^ gf.trace(&b));
    }

    #[test]
    fn binary_round_trip(a in gf113_element()) {
        let gf = gf113();
        prop_assert_eq!(gf.from_binary(&gf.to_binary(&a)).unwrap(), a);
    }

    #[test]
    fn byte_round_trip_large_field(a in gf409_element()) {
        let gf = gf409();
        prop_assert_eq!(gf.element_from_bytes(&gf.to_bytes(&a)).unwrap(), a);
    }
}

proptest! {
    // Inversion runs hundreds of multiplications per case, keep the
    // case count down
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn inverse_correctness(a in gf113_element()) {
        let gf = gf113();
        if a.is_zero() {
            prop_assert!(gf.inverse(&a).is_err());
        } else {
            let inv = gf.inverse(&a).unwrap();
            prop_assert_eq!(gf.mul(&a, &inv), gf.one());
        }
    }
}
