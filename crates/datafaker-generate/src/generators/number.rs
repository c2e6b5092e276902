use rand::{Rng, RngCore};

use crate::errors::GenerationError;
use crate::value::GeneratedValue;

const MAX_DECIMAL_PLACES: u8 = 10;

/// Uniform numbers in `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberGenerator {
    pub start: i64,
    pub end: i64,
    pub decimal_places: u8,
}

impl Default for NumberGenerator {
    fn default() -> Self {
        Self {
            start: 0,
            end: 1000,
            decimal_places: 0,
        }
    }
}

impl NumberGenerator {
    pub fn new(start: i64, end: i64, decimal_places: u8) -> Result<Self, GenerationError> {
        let generator = Self {
            start,
            end,
            decimal_places,
        };
        generator.check()?;
        Ok(generator)
    }

    pub fn check(&self) -> Result<(), GenerationError> {
        if self.start > self.end {
            return Err(GenerationError::InvalidRequest(format!(
                "number start {} is greater than end {}",
                self.start, self.end
            )));
        }
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(GenerationError::InvalidRequest(format!(
                "decimal places {} exceed {MAX_DECIMAL_PLACES}",
                self.decimal_places
            )));
        }
        Ok(())
    }

    /// Count of distinct integers in range; `None` for decimal output.
    pub fn distinct_values(&self) -> Option<u128> {
        if self.decimal_places > 0 {
            return None;
        }
        Some((i128::from(self.end) - i128::from(self.start) + 1) as u128)
    }

    pub fn sample(&self, rng: &mut dyn RngCore) -> GeneratedValue {
        if self.decimal_places == 0 {
            return GeneratedValue::Int(rng.random_range(self.start..=self.end));
        }
        let low = self.start as f64;
        let high = self.end as f64;
        let raw: f64 = rng.random_range(low..=high);
        let scale = 10_f64.powi(i32::from(self.decimal_places));
        GeneratedValue::Float(((raw * scale).round() / scale).clamp(low, high))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn rejects_inverted_range_and_wide_scale() {
        assert!(NumberGenerator::new(5, 1, 0).is_err());
        assert!(NumberGenerator::new(0, 1, 11).is_err());
        assert!(NumberGenerator::new(3, 3, 10).is_ok());
    }

    #[test]
    fn decimals_are_rounded_within_range() {
        let generator = NumberGenerator::new(1, 2, 2).expect("valid");
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..100 {
            let value = generator.sample(&mut rng).as_f64().expect("float");
            assert!((1.0..=2.0).contains(&value));
            assert!(((value * 100.0).round() - value * 100.0).abs() < 1e-6);
        }
    }

    #[test]
    fn integers_stay_in_range() {
        let generator = NumberGenerator::new(-3, 3, 0).expect("valid");
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..100 {
            let value = generator.sample(&mut rng).as_i64().expect("int");
            assert!((-3..=3).contains(&value));
        }
        assert_eq!(generator.distinct_values(), Some(7));
    }
}
