//! Integration tests for entities_rational crate
//!
//! These tests verify rational construction, arithmetic and comparison
//! end-to-end through the public API.

use std::cmp::Ordering;
use std::collections::HashSet;

use entities_rational::*;

#[test]
fn test_exact_arithmetic_integration() {
    let third = RationalValue::from(1i64).div(&RationalValue::from(3i64)).unwrap();
    let sum = third.plus(&third).plus(&third);
    assert!(sum.is_one());
    assert_eq!(sum.to_i64(), Some(1));

    let half = RationalValue::from_fraction(1, 2).unwrap();
    let result = half
        .times(&RationalValue::from_fraction(2, 3).unwrap())
        .minus(&RationalValue::from_fraction(1, 12).unwrap());
    // 1/3 - 1/12 = 1/4
    assert_eq!(result.to_string(), "1/4");
}

#[test]
fn test_large_values_do_not_overflow() {
    let big = RationalValue::from_fraction(i64::MAX, 3).unwrap();
    let squared = big.times(&big);
    let expected_numerator = BigNumber::from_i64(i64::MAX).times(&BigNumber::from_i64(i64::MAX));

    assert_eq!(squared.numerator(), &expected_numerator);
    assert_eq!(squared.denominator().to_i64(), Some(9));
    assert!(squared.to_i64().is_none());

    let back = squared.div(&big).unwrap();
    assert_eq!(back, big);
}

#[test]
fn test_extreme_denominators() {
    let r = RationalValue::from_fraction(1, i64::MIN).unwrap();
    assert!(r.is_negative());
    assert_eq!(r.denominator().to_u64(), Some(1u64 << 63));

    let inverse = r.inverse().unwrap();
    assert_eq!(inverse.to_i64(), Some(i64::MIN));
}

#[test]
fn test_unreduced_workflow() {
    // Accumulate without reduction, then canonicalize once
    let mut total = RationalValue::new(false);
    for _ in 0..4 {
        total = total.plus(&RationalValue::from_fraction_with(1, 4, false).unwrap());
    }
    assert!(!total.auto_reduce());
    assert_eq!(total.to_string(), "256/256");
    assert!(total.is_one());
    assert_eq!(total, RationalValue::ONE);

    total.reduce();
    assert_eq!(total.to_string(), "1");
}

#[test]
fn test_mixed_comparisons_integration() {
    let r = RationalValue::from_fraction_with(10, 4, false).unwrap();

    assert!(r > 2u8);
    assert!(r < 3i128);
    assert!(r != 2usize);
    assert_eq!(r.compare_to(&BigNumber::from_i64(2)), Ordering::Greater);
    assert_eq!(r.try_compare(&5u16), Ok(Ordering::Less));
    assert_eq!(
        r.try_compare(&2.5f32),
        Err(RationalError::InvalidArgument(
            "expected a rational value or an integer".to_string()
        ))
    );
}

#[test]
fn test_hash_set_deduplicates_equal_values() {
    let mut set = HashSet::new();
    set.insert(RationalValue::from_fraction(1, 2).unwrap());
    set.insert(RationalValue::from_fraction_with(2, 4, false).unwrap());
    set.insert(RationalValue::from_fraction_with(-3, -6, false).unwrap());
    set.insert(RationalValue::from_fraction_with(0, 5, false).unwrap());
    set.insert(RationalValue::ZERO);

    assert_eq!(set.len(), 2);
}

#[test]
fn test_sorting_mixed_representations() {
    let mut values = vec![
        RationalValue::from_fraction(3, 4).unwrap(),
        RationalValue::from_fraction_with(-2, 4, false).unwrap(),
        RationalValue::ZERO,
        RationalValue::from_fraction_with(2, 3, false).unwrap(),
        RationalValue::MINUS_ONE,
    ];
    values.sort();

    let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    assert_eq!(rendered, vec!["-1", "-2/4", "0", "2/3", "3/4"]);
}

#[test]
fn test_errors_propagate_with_question_mark() {
    fn ratio(n: i64, d: i64, by: i64) -> Result<RationalValue, RationalError> {
        let value = RationalValue::from_fraction(n, d)?;
        value.div(&RationalValue::from(by))
    }

    assert_eq!(ratio(1, 2, 2).unwrap().to_string(), "1/4");
    assert_eq!(ratio(1, 0, 2), Err(RationalError::InvalidDenominator));
    assert_eq!(ratio(1, 2, 0), Err(RationalError::DivisionByZero));
}

#[test]
fn test_conversions_from_integers() {
    assert_eq!(RationalValue::from(7u8).to_string(), "7");
    assert_eq!(RationalValue::from(-7i16).to_string(), "-7");
    assert_eq!(RationalValue::from(u128::MAX).to_string(), u128::MAX.to_string());
    assert_eq!(RationalValue::from(BigNumber::from_i64(-3)), -3i64);
    assert_eq!(RationalValue::from(malachite::Integer::from(12)), 12u32);
}

#[test]
fn test_values_are_shareable_across_threads() {
    let value = std::sync::Arc::new(RationalValue::from_fraction(5, 7).unwrap());
    let handles: Vec<_> = (1..=4i64)
        .map(|k| {
            let value = std::sync::Arc::clone(&value);
            std::thread::spawn(move || value.times(&RationalValue::from(k)))
        })
        .collect();

    let results: Vec<RationalValue> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let total: RationalValue = results.iter().sum();
    // 5/7 * (1 + 2 + 3 + 4)
    assert_eq!(total.to_string(), "50/7");
}
