//! Property-based tests for container packing.
//!
//! These tests verify that:
//! - The recommended containers always hold at least the liters asked for
//! - Small containers never add up to a full large container
//! - Packing the same quantity twice gives the same answer
//! - Negative quantities and quantities beyond u64 containers are rejected

use paint_calc::{combine_containers, large_containers_only, ContainerSizes, PaintError, Recommendation};
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-9;
/// Relative slack for huge quantities, where one ulp is many liters.
const RELATIVE_TOLERANCE: f64 = 1e-12;

/// 18 L x u64::MAX, the first quantity whose large count no longer fits.
fn countable_limit() -> f64 {
    ContainerSizes::default().large * u64::MAX as f64
}

/// Everyday quantities plus magnitudes right up to the countable limit.
fn arb_liters() -> impl Strategy<Value = f64> {
    prop_oneof![
        0.0001f64..10_000.0,
        10_000.0f64..1.0e15,
        1.0e15f64..3.3e20,
    ]
}

proptest! {
    #[test]
    fn combination_covers_requirement(liters in arb_liters()) {
        let sizes = ContainerSizes::default();
        let result = combine_containers(liters, &sizes).unwrap();

        let Recommendation::Containers(combination) = result else {
            panic!("positive quantity {} produced {:?}", liters, result);
        };
        prop_assert!(
            combination.total_liters(&sizes) + TOLERANCE >= liters * (1.0 - RELATIVE_TOLERANCE)
        );
    }

    #[test]
    fn small_containers_stay_below_one_large(liters in arb_liters()) {
        let sizes = ContainerSizes::default();
        let (_, small) = combine_containers(liters, &sizes).unwrap().counts();
        prop_assert!((small as f64) * sizes.small < sizes.large);
    }

    #[test]
    fn packing_is_idempotent(liters in 0.0f64..10_000.0) {
        let sizes = ContainerSizes::default();
        let first = combine_containers(liters, &sizes).unwrap();
        let second = combine_containers(liters, &sizes).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn large_only_covers_requirement(liters in arb_liters()) {
        let sizes = ContainerSizes::default();
        let result = large_containers_only(liters, &sizes).unwrap();
        let (_, small) = result.counts();
        prop_assert_eq!(small, 0);

        let Recommendation::Containers(combination) = result else {
            panic!("positive quantity {} produced {:?}", liters, result);
        };
        prop_assert!(
            combination.total_liters(&sizes) + TOLERANCE >= liters * (1.0 - RELATIVE_TOLERANCE)
        );
    }

    #[test]
    fn uncountable_quantities_are_rejected(factor in 1.0f64..1.0e100) {
        let liters = countable_limit() * factor;
        let sizes = ContainerSizes::default();
        let err = combine_containers(liters, &sizes).unwrap_err();
        prop_assert!(matches!(err, PaintError::QuantityTooLarge { .. }), "unexpected error kind");
        let err = large_containers_only(liters, &sizes).unwrap_err();
        prop_assert!(matches!(err, PaintError::QuantityTooLarge { .. }), "unexpected error kind");
    }

    #[test]
    fn negative_quantities_are_rejected(liters in -10_000.0f64..-0.0001) {
        let err = combine_containers(liters, &ContainerSizes::default()).unwrap_err();
        prop_assert!(matches!(err, PaintError::NegativeQuantity { .. }), "unexpected error kind");
    }
}
