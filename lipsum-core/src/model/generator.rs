use std::fmt;

use serde::Deserialize;

use crate::error::{LipsumError, Result};
use crate::model::bounds::Bounds;
use crate::model::random_source::{EntropySource, RandomSource, SeededSource};
use crate::model::vocabulary::Vocabulary;
use crate::util::capitalize;

/// Construction options for a `Generator`.
///
/// Every field has a default, so callers usually write
/// `GeneratorOptions { seed: Some(..), ..Default::default() }`.
/// The random source cannot be deserialized and is skipped by serde.
#[derive(Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
	/// Sentences per paragraph, default `3..=7`.
	pub sentences_per_paragraph: Bounds,

	/// Words per sentence, default `5..=15`.
	pub words_per_sentence: Bounds,

	/// Caller-supplied random source. Takes precedence over `seed`.
	#[serde(skip)]
	pub random: Option<Box<dyn RandomSource + Send>>,

	/// Seed for a deterministic source. An empty seed counts as absent.
	pub seed: Option<String>,

	/// Words to draw from, default the built-in lorem ipsum list.
	pub words: Option<Vocabulary>,
}

impl Default for GeneratorOptions {
	fn default() -> Self {
		Self {
			sentences_per_paragraph: Bounds::SENTENCES_PER_PARAGRAPH,
			words_per_sentence: Bounds::WORDS_PER_SENTENCE,
			random: None,
			seed: None,
			words: None,
		}
	}
}

impl fmt::Debug for GeneratorOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("GeneratorOptions")
			.field("sentences_per_paragraph", &self.sentences_per_paragraph)
			.field("words_per_sentence", &self.words_per_sentence)
			.field("random", &self.random.as_ref().map(|_| "<custom>"))
			.field("seed", &self.seed)
			.field("words", &self.words.as_ref().map(|w| w.len()))
			.finish()
	}
}

/// Random placeholder text generator.
///
/// # Responsibilities
/// - Hold the count bounds, the vocabulary and a random source
/// - Produce random integers, words, sentences and paragraphs
///
/// # Invariants
/// - Both bounds satisfy `min <= max` (checked once, in `new`)
/// - Configuration never changes after construction; only the random
///   source advances, which is why generation takes `&mut self`
pub struct Generator {
	sentences_per_paragraph: Bounds,
	words_per_sentence: Bounds,
	words: Vocabulary,
	random: Box<dyn RandomSource + Send>,
}

impl Generator {
	/// Creates a generator from `options`.
	///
	/// # Behavior
	/// - Validates `sentences_per_paragraph`, then `words_per_sentence`;
	///   the first inverted range is reported.
	/// - Picks the random source: `random` as given, else a `SeededSource`
	///   built from `seed`, else an `EntropySource`.
	///
	/// # Errors
	/// Returns `LipsumError::Configuration` naming the failing bound, or
	/// `LipsumError::BoundTooLarge` when a maximum exceeds `i64::MAX`.
	pub fn new(options: GeneratorOptions) -> Result<Self> {
		let GeneratorOptions { sentences_per_paragraph, words_per_sentence, random, seed, words } = options;

		sentences_per_paragraph.validate("sentences per paragraph")?;
		words_per_sentence.validate("words per sentence")?;

		let random: Box<dyn RandomSource + Send> = match (random, seed) {
			(Some(random), _) => {
				log::debug!("Generator using caller supplied random source");
				random
			}
			(None, Some(seed)) if !seed.is_empty() => {
				log::debug!("Generator using seeded random source");
				Box::new(SeededSource::new(&seed))
			}
			_ => Box::new(EntropySource::new()),
		};

		Ok(Self {
			sentences_per_paragraph,
			words_per_sentence,
			words: words.unwrap_or_default(),
			random,
		})
	}

	/// Returns an integer in `[min, max]`, computed as
	/// `floor(random * (max - min + 1) + min)`.
	///
	/// A draw of `0.0` maps to `min`. The result is clamped to the range so
	/// float rounding near `1.0` (or a misbehaving custom source) can never
	/// escape it. `min <= max` is the caller's responsibility.
	pub fn generate_random_integer(&mut self, min: i64, max: i64) -> i64 {
		let span = max as f64 - min as f64 + 1.0;
		let value = (self.random.next_f64() * span + min as f64).floor() as i64;
		value.min(max).max(min)
	}

	/// Draws one word from the vocabulary.
	///
	/// # Errors
	/// Returns `LipsumError::EmptyVocabulary` without consuming a draw when
	/// the vocabulary is empty.
	pub fn pluck_random_word(&mut self) -> Result<&str> {
		if self.words.is_empty() {
			return Err(LipsumError::EmptyVocabulary);
		}
		let index = self.generate_random_integer(0, self.words.len() as i64 - 1) as usize;
		Ok(&self.words[index])
	}

	/// Generates `count` space-separated words.
	///
	/// `None` draws the count from `words_per_sentence`; `Some(0)` yields an
	/// empty string. Words are drawn in output order.
	pub fn generate_random_words(&mut self, count: Option<usize>) -> Result<String> {
		let count = match count {
			Some(count) => count,
			None => self.random_count(self.words_per_sentence),
		};

		let mut words = String::new();
		for i in 0..count {
			if i > 0 {
				words.push(' ');
			}
			let word = self.pluck_random_word()?;
			words.push_str(word);
		}
		Ok(words.trim().to_owned())
	}

	/// Generates a sentence: capitalized words followed by a period.
	///
	/// Zero words give `"."`.
	pub fn generate_random_sentence(&mut self, count: Option<usize>) -> Result<String> {
		let words = self.generate_random_words(count)?;
		Ok(format!("{}.", capitalize(&words)))
	}

	/// Generates `count` sentences joined by single spaces.
	///
	/// `None` draws the count from `sentences_per_paragraph`. Every
	/// sentence draws its own word count.
	pub fn generate_random_paragraph(&mut self, count: Option<usize>) -> Result<String> {
		let count = match count {
			Some(count) => count,
			None => self.random_count(self.sentences_per_paragraph),
		};

		let sentences = (0..count)
			.map(|_| self.generate_random_sentence(None))
			.collect::<Result<Vec<_>>>()?;
		Ok(sentences.join(" ").trim().to_owned())
	}

	/// Bounds were checked against `i64::MAX` in `new`, so the conversions
	/// only fall back on values that cannot occur.
	fn random_count(&mut self, bounds: Bounds) -> usize {
		let min = i64::try_from(bounds.min).unwrap_or(i64::MAX);
		let max = i64::try_from(bounds.max).unwrap_or(i64::MAX);
		usize::try_from(self.generate_random_integer(min, max)).unwrap_or(bounds.min)
	}
}

impl fmt::Debug for Generator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Generator")
			.field("sentences_per_paragraph", &self.sentences_per_paragraph)
			.field("words_per_sentence", &self.words_per_sentence)
			.field("words", &self.words.len())
			.finish_non_exhaustive()
	}
}
