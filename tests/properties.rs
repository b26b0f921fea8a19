//! Property-based tests for base conversion.
//!
//! Uses proptest to check round trips, zero rendering and the length bound
//! over arbitrary values and base pairs.

use basexx::{
    Alnum, BASE30, BASE50, BASE62, BASE94, BINARY, Base, Buffer, convert, convert_bytes,
    decode_int, encode_int, estimate_length,
};
use num_bigint::{BigInt, BigUint};
use proptest::prelude::*;

fn base_for(index: usize) -> Box<dyn Base> {
    match index {
        0 => Box::new(BASE62),
        1 => Box::new(BASE94),
        2 => Box::new(BINARY),
        3 => Box::new(BASE30.clone()),
        4 => Box::new(BASE50.clone()),
        n => Box::new(Alnum::new((n - 5) as u32 + 2).unwrap()),
    }
}

/// Indexes every built-in base: five fixed ones plus radix 2 through 36
fn any_base() -> impl Strategy<Value = usize> {
    0usize..40
}

fn any_value() -> impl Strategy<Value = BigUint> {
    prop::collection::vec(any::<u8>(), 0..48).prop_map(|bytes| BigUint::from_bytes_be(&bytes))
}

// =============================================================================
// Digit Properties
// =============================================================================

proptest! {
    /// value_of(digit_of(v)) = v for every digit value
    #[test]
    fn prop_digit_round_trip(index in any_base(), seed: u32) {
        let base = base_for(index);
        let value = seed % base.radix();
        let symbol = base.digit_of(value).unwrap();
        prop_assert_eq!(base.value_of(symbol).unwrap(), value);
    }
}

// =============================================================================
// Conversion Properties
// =============================================================================

proptest! {
    /// Converting A -> B -> A reproduces the canonical digit string
    #[test]
    fn prop_conversion_round_trip(value in any_value(), a in any_base(), b in any_base()) {
        let (a, b) = (base_for(a), base_for(b));
        let digits = encode_int(BigInt::from(value.clone()), &a).unwrap();

        let there = convert_bytes(&digits, &a, &b).unwrap();
        let back = convert_bytes(&there, &b, &a).unwrap();

        prop_assert_eq!(&back, &digits);
        prop_assert_eq!(decode_int(&there, &b).unwrap(), value);
    }

    /// Any run of zero digits renders as exactly one zero digit
    #[test]
    fn prop_zero_is_one_digit(zeros in 0usize..32, a in any_base(), b in any_base()) {
        let (a, b) = (base_for(a), base_for(b));
        let zero = a.digit_of(0).unwrap();
        let input = vec![zero; zeros];

        let out = convert_bytes(&input, &a, &b).unwrap();

        prop_assert_eq!(out, vec![b.digit_of(0).unwrap()]);
    }

    /// A destination sized by estimate_length never overflows
    #[test]
    fn prop_estimate_is_enough(digits in prop::collection::vec(any::<u32>(), 0..40), a in any_base(), b in any_base()) {
        let (a, b) = (base_for(a), base_for(b));
        let input: Vec<u8> = digits
            .iter()
            .map(|d| a.digit_of(d % a.radix()).unwrap())
            .collect();

        let mut src = Buffer::new(&input[..], &a);
        let mut dest = Buffer::new(vec![0u8; estimate_length(a.radix(), b.radix(), input.len())], &b);

        prop_assert!(convert(&mut dest, &mut src).is_ok());
    }

    /// The largest n-digit value fills the estimate exactly
    #[test]
    fn prop_estimate_is_tight(n in 1usize..64, a in any_base(), b in any_base()) {
        let (a, b) = (base_for(a), base_for(b));
        let top = a.digit_of(a.radix() - 1).unwrap();
        let input = vec![top; n];

        let out = convert_bytes(&input, &a, &b).unwrap();

        prop_assert_eq!(out.len(), estimate_length(a.radix(), b.radix(), n));
    }

    /// Negative integers encode like their magnitude
    #[test]
    fn prop_sign_is_folded(n: i64, index in any_base()) {
        let base = base_for(index);
        prop_assert_eq!(
            encode_int(n, &base).unwrap(),
            encode_int(BigInt::from(n).magnitude().clone(), &base).unwrap()
        );
    }
}
