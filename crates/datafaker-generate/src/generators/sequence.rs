use crate::errors::GenerationError;

/// Arithmetic sequence with optional bounds.
///
/// Yields `start` first, then steps by `step`. Leaving the bounds ends the
/// sequence, or wraps back to the opposite bound when `cycle` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceGenerator {
    pub start: i64,
    pub step: i64,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub cycle: bool,
    current: Option<i64>,
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::new(1, 1, None, None, false)
    }
}

impl SequenceGenerator {
    pub fn new(start: i64, step: i64, min: Option<i64>, max: Option<i64>, cycle: bool) -> Self {
        Self {
            start,
            step,
            min,
            max,
            cycle,
            current: None,
        }
    }

    pub fn check(&self, count: u64) -> Result<(), GenerationError> {
        if self.step == 0 {
            return Err(invalid("sequence step must not be zero".to_string()));
        }
        if let Some(min) = self.min
            && self.start < min
        {
            return Err(invalid(format!(
                "sequence start {} is below min {min}",
                self.start
            )));
        }
        if let Some(max) = self.max
            && self.start > max
        {
            return Err(invalid(format!(
                "sequence start {} is above max {max}",
                self.start
            )));
        }
        if self.cycle {
            return Ok(());
        }
        if let Some(available) = self.available()
            && available < u128::from(count)
        {
            return Err(invalid(format!(
                "sequence holds {available} values but {count} rows were requested"
            )));
        }
        Ok(())
    }

    /// Values left before the bound in the stepping direction.
    fn available(&self) -> Option<u128> {
        let step = i128::from(self.step);
        let start = i128::from(self.start);
        let span = if step > 0 {
            i128::from(self.max?) - start
        } else {
            start - i128::from(self.min?)
        };
        Some((span / step.abs() + 1) as u128)
    }

    pub fn reset(&mut self) {
        self.current = None;
    }

    fn wrap_target(&self) -> i64 {
        if self.step > 0 {
            self.min.unwrap_or(self.start)
        } else {
            self.max.unwrap_or(self.start)
        }
    }
}

impl Iterator for SequenceGenerator {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let Some(current) = self.current else {
            self.current = Some(self.start);
            return Some(self.start);
        };
        let max = self.max.unwrap_or(i64::MAX);
        let min = self.min.unwrap_or(i64::MIN);
        let next = current
            .checked_add(self.step)
            .filter(|value| (min..=max).contains(value));
        let next = match next {
            Some(value) => value,
            None if self.cycle => self.wrap_target(),
            None => return None,
        };
        self.current = Some(next);
        Some(next)
    }
}

fn invalid(message: String) -> GenerationError {
    GenerationError::InvalidRequest(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_from_start() {
        let sequence = SequenceGenerator::default();
        assert_eq!(sequence.take(5).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn cycle_wraps_to_lower_bound() {
        let sequence = SequenceGenerator::new(3, 1, Some(1), Some(5), true);
        assert_eq!(
            sequence.take(8).collect::<Vec<_>>(),
            vec![3, 4, 5, 1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn negative_step_wraps_to_upper_bound() {
        let sequence = SequenceGenerator::new(2, -1, Some(0), Some(3), true);
        assert_eq!(
            sequence.take(6).collect::<Vec<_>>(),
            vec![2, 1, 0, 3, 2, 1]
        );
    }

    #[test]
    fn ends_past_max_without_cycle() {
        let sequence = SequenceGenerator::new(1, 2, None, Some(6), false);
        assert_eq!(sequence.collect::<Vec<_>>(), vec![1, 3, 5]);
    }

    #[test]
    fn check_counts_available_values() {
        let sequence = SequenceGenerator::new(1, 2, None, Some(6), false);
        assert!(sequence.check(3).is_ok());
        assert!(sequence.check(4).is_err());
        assert!(SequenceGenerator::new(5, 1, Some(6), None, false).check(1).is_err());
        assert!(SequenceGenerator::new(1, 0, None, None, false).check(1).is_err());
        assert!(SequenceGenerator::new(1, 1, Some(1), Some(2), true).check(50).is_ok());
    }
}
