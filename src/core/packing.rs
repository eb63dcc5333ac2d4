//! Container packing: liters needed -> number of large and small containers.

use crate::domain::model::{ContainerCombination, ContainerSizes, PackingPolicy, Recommendation};
use crate::domain::ports::PackingStrategy;
use crate::utils::error::{PaintError, Result};
use crate::utils::validation::Validate;

impl Validate for ContainerSizes {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_positive_number("containers.small", self.small)?;
        crate::utils::validation::validate_positive_number("containers.large", self.large)?;
        if self.small >= self.large {
            return Err(PaintError::InvalidConfigValue {
                field: "containers.small".to_string(),
                value: self.small.to_string(),
                reason: format!("must be smaller than the large container ({})", self.large),
            });
        }
        Ok(())
    }
}

/// Rejects negative, non-finite and uncountable quantities. `Some(NoneNeeded)` for zero.
///
/// The large-container count must stay below `u64::MAX` so the correction
/// rule can still add one more.
fn check_quantity(liters: f64, sizes: &ContainerSizes) -> Result<Option<Recommendation>> {
    if !liters.is_finite() {
        return Err(PaintError::NonFiniteQuantity { liters });
    }
    if liters < 0.0 {
        return Err(PaintError::NegativeQuantity { liters });
    }
    if liters == 0.0 {
        return Ok(Some(Recommendation::NoneNeeded));
    }
    if liters / sizes.large >= u64::MAX as f64 {
        return Err(PaintError::QuantityTooLarge { liters });
    }
    Ok(None)
}

/// Large containers first, the remainder in small ones.
///
/// When the small containers would hold as much as one large container
/// (happens because `large / small` is not an integer, e.g. 5 x 3.6 = 18),
/// they are swapped for one more large container.
pub fn combine_containers(liters: f64, sizes: &ContainerSizes) -> Result<Recommendation> {
    sizes.validate()?;
    if let Some(early) = check_quantity(liters, sizes)? {
        return Ok(early);
    }

    let mut large = (liters / sizes.large).floor() as u64;
    let remainder = liters % sizes.large;
    let mut small = (remainder / sizes.small).ceil() as u64;

    if small as f64 * sizes.small >= sizes.large {
        tracing::debug!(
            small,
            "small containers reach a full large container, swapping for one more large"
        );
        small = 0;
        large += 1;
    }

    Ok(Recommendation::Containers(ContainerCombination { large, small }))
}

/// Round up to whole large containers, ignoring the small size.
pub fn large_containers_only(liters: f64, sizes: &ContainerSizes) -> Result<Recommendation> {
    sizes.validate()?;
    if let Some(early) = check_quantity(liters, sizes)? {
        return Ok(early);
    }

    let large = (liters / sizes.large).ceil() as u64;
    Ok(Recommendation::Containers(ContainerCombination { large, small: 0 }))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TwoSizeCombination;

impl PackingStrategy for TwoSizeCombination {
    fn name(&self) -> &'static str {
        PackingPolicy::Combination.as_str()
    }

    fn pack(&self, liters: f64, sizes: &ContainerSizes) -> Result<Recommendation> {
        combine_containers(liters, sizes)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LargeOnly;

impl PackingStrategy for LargeOnly {
    fn name(&self) -> &'static str {
        PackingPolicy::LargeOnly.as_str()
    }

    fn pack(&self, liters: f64, sizes: &ContainerSizes) -> Result<Recommendation> {
        large_containers_only(liters, sizes)
    }
}

impl PackingStrategy for PackingPolicy {
    fn name(&self) -> &'static str {
        self.as_str()
    }

    fn pack(&self, liters: f64, sizes: &ContainerSizes) -> Result<Recommendation> {
        match self {
            PackingPolicy::Combination => TwoSizeCombination.pack(liters, sizes),
            PackingPolicy::LargeOnly => LargeOnly.pack(liters, sizes),
        }
    }
}
