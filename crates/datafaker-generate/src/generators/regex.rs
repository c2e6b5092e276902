use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::errors::GenerationError;

/// Random strings matching a regular expression.
#[derive(Debug, Clone)]
pub struct RegexGenerator {
    pattern: String,
    max_repeat: u32,
    compiled: rand_regex::Regex,
}

impl RegexGenerator {
    pub fn new(pattern: &str, max_repeat: u32) -> Result<Self, GenerationError> {
        let compiled = rand_regex::Regex::compile(pattern, max_repeat).map_err(|err| {
            GenerationError::InvalidRequest(format!("invalid regex '{pattern}': {err}"))
        })?;
        Ok(Self {
            pattern: pattern.to_string(),
            max_repeat,
            compiled,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn max_repeat(&self) -> u32 {
        self.max_repeat
    }

    pub fn sample(&self, rng: &mut dyn RngCore) -> String {
        rng.sample(&self.compiled)
    }
}

/// Sample strings for a pattern; unseeded previews differ per call.
pub fn preview_regex(
    pattern: &str,
    count: usize,
    max_repeat: u32,
    seed: Option<u64>,
) -> Result<Vec<String>, GenerationError> {
    let generator = RegexGenerator::new(pattern, max_repeat)?;
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::seed_from_u64(rand::random()),
    };
    Ok((0..count).map(|_| generator.sample(&mut rng)).collect())
}
