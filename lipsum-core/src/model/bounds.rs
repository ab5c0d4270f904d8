use serde::{Deserialize, Serialize};

use crate::error::{LipsumError, Result};

/// Inclusive range of counts (sentences per paragraph, words per sentence).
///
/// # Invariants
/// - `min <= max` once accepted by `Bounds::new` or `Generator::new`
/// - `max <= i64::MAX`, the range of `Generator::generate_random_integer`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
	pub min: usize,
	pub max: usize,
}

impl Bounds {
	/// Default sentences per paragraph.
	pub const SENTENCES_PER_PARAGRAPH: Bounds = Bounds { min: 3, max: 7 };

	/// Default words per sentence.
	pub const WORDS_PER_SENTENCE: Bounds = Bounds { min: 5, max: 15 };

	/// Creates a validated range.
	///
	/// `label` names the range in the error message.
	///
	/// # Errors
	/// Returns `LipsumError::Configuration` if `min > max` and
	/// `LipsumError::BoundTooLarge` if `max` exceeds `i64::MAX`.
	pub fn new(label: &'static str, min: usize, max: usize) -> Result<Self> {
		let bounds = Self { min, max };
		bounds.validate(label)?;
		Ok(bounds)
	}

	/// Checks the `min <= max` and `max <= i64::MAX` invariants.
	pub fn validate(&self, label: &'static str) -> Result<()> {
		if self.min > self.max {
			return Err(LipsumError::Configuration { bound: label, min: self.min, max: self.max });
		}
		if i64::try_from(self.max).is_err() {
			return Err(LipsumError::BoundTooLarge { bound: label, max: self.max });
		}
		Ok(())
	}

	/// Returns true when `value` lies in `min..=max`.
	pub fn contains(&self, value: usize) -> bool {
		(self.min..=self.max).contains(&value)
	}
}
