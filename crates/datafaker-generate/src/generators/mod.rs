//! Field generators and the default/NULL components that wrap them.

mod number;
mod regex;
mod sequence;

use rand::{Rng, RngCore};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;
use crate::value::GeneratedValue;

pub use number::NumberGenerator;
pub use regex::{RegexGenerator, preview_regex};
pub use sequence::SequenceGenerator;

/// Replace a share of the rows with a fixed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DefaultComponent {
    pub value: String,
    /// Share of rows, 0..=100.
    pub percent: u8,
}

impl DefaultComponent {
    pub fn new(value: impl Into<String>, percent: u8) -> Self {
        Self {
            value: value.into(),
            percent,
        }
    }

    pub fn check(&self) -> Result<(), GenerationError> {
        check_percent("default", self.percent)
    }
}

/// Replace a share of the rows with NULL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NullComponent {
    pub percent: u8,
}

impl NullComponent {
    pub fn new(percent: u8) -> Self {
        Self { percent }
    }

    pub fn check(&self) -> Result<(), GenerationError> {
        check_percent("null", self.percent)
    }
}

/// Validate a default/NULL pair attached to one field.
pub fn check_components(
    default: Option<&DefaultComponent>,
    null: Option<&NullComponent>,
) -> Result<(), GenerationError> {
    if let Some(default) = default {
        default.check()?;
    }
    if let Some(null) = null {
        null.check()?;
    }
    let total = u16::from(default.map_or(0, |c| c.percent))
        + u16::from(null.map_or(0, |c| c.percent));
    if total > 100 {
        return Err(GenerationError::InvalidRequest(format!(
            "default and null percentages add up to {total}, above 100"
        )));
    }
    Ok(())
}

/// Roll once per row; `None` means the field generator supplies the value.
///
/// The default share covers `[0, default)` and the NULL share the next
/// `null` points, so the two never overlap.
pub fn roll_components(
    default: Option<&DefaultComponent>,
    null: Option<&NullComponent>,
    rng: &mut dyn RngCore,
) -> Option<GeneratedValue> {
    if default.is_none() && null.is_none() {
        return None;
    }
    let roll: u8 = rng.random_range(0..100);
    let default_share = default.map_or(0, |c| c.percent);
    if let Some(default) = default
        && roll < default_share
    {
        return Some(GeneratedValue::Text(default.value.clone()));
    }
    let null_share = null.map_or(0, |c| c.percent);
    if roll < default_share.saturating_add(null_share) {
        return Some(GeneratedValue::Null);
    }
    None
}

fn check_percent(component: &str, percent: u8) -> Result<(), GenerationError> {
    if percent > 100 {
        return Err(GenerationError::InvalidRequest(format!(
            "{component} percent {percent} is above 100"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn percent_sum_is_capped() {
        let default = DefaultComponent::new("x", 60);
        let null = NullComponent::new(50);
        assert!(check_components(Some(&default), Some(&null)).is_err());
        assert!(check_components(Some(&default), None).is_ok());
        assert!(check_components(None, Some(&NullComponent::new(101))).is_err());
    }

    #[test]
    fn full_null_share_always_nulls() {
        let null = NullComponent::new(100);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..200 {
            assert_eq!(
                roll_components(None, Some(&null), &mut rng),
                Some(GeneratedValue::Null)
            );
        }
    }

    #[test]
    fn zero_shares_never_fire() {
        let default = DefaultComponent::new("x", 0);
        let null = NullComponent::new(0);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..200 {
            assert_eq!(roll_components(Some(&default), Some(&null), &mut rng), None);
        }
    }
}
