use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LipsumError, Result};
use crate::model::bounds::Bounds;
use crate::model::generator::{Generator, GeneratorOptions};
use crate::model::vocabulary::Vocabulary;

/// Output format of the facade.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Format {
	#[default]
	Plain,
	/// Every string is wrapped in `<p>` and `</p>`.
	Html,
}

impl Format {
	fn apply(self, text: String) -> String {
		match self {
			Format::Plain => text,
			Format::Html => format!("<p>{text}</p>"),
		}
	}
}

impl FromStr for Format {
	type Err = LipsumError;

	fn from_str(s: &str) -> Result<Self> {
		match s.to_lowercase().as_str() {
			"plain" => Ok(Format::Plain),
			"html" => Ok(Format::Html),
			_ => Err(LipsumError::UnknownFormat(s.to_owned())),
		}
	}
}

impl fmt::Display for Format {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Format::Plain => "plain",
			Format::Html => "html",
		})
	}
}

/// Unit counted by `lorem_ipsum`.
///
/// Parsing accepts the singular and plural spelling.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Units {
	#[serde(alias = "word")]
	Words,
	#[default]
	#[serde(alias = "sentence")]
	Sentences,
	#[serde(alias = "paragraph")]
	Paragraphs,
}

impl FromStr for Units {
	type Err = LipsumError;

	fn from_str(s: &str) -> Result<Self> {
		match s.to_lowercase().as_str() {
			"word" | "words" => Ok(Units::Words),
			"sentence" | "sentences" => Ok(Units::Sentences),
			"paragraph" | "paragraphs" => Ok(Units::Paragraphs),
			_ => Err(LipsumError::UnknownUnits(s.to_owned())),
		}
	}
}

impl fmt::Display for Units {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Units::Words => "words",
			Units::Sentences => "sentences",
			Units::Paragraphs => "paragraphs",
		})
	}
}

/// Line ending used between paragraphs when no suffix is configured.
pub fn platform_line_ending() -> &'static str {
	if cfg!(windows) { "\r\n" } else { "\n" }
}

/// Formatting facade over a `Generator`.
///
/// Adds an output `Format` and a paragraph separator (`suffix`).
#[derive(Debug)]
pub struct LoremIpsum {
	generator: Generator,
	format: Format,
	suffix: Option<String>,
}

impl LoremIpsum {
	/// Wraps `generator`. `suffix` of `None` (or empty) selects the
	/// platform line ending.
	pub fn new(generator: Generator, format: Format, suffix: Option<String>) -> Self {
		Self { generator, format, suffix: suffix.filter(|s| !s.is_empty()) }
	}

	/// Builds the generator from `options` and wraps it.
	pub fn with_options(options: GeneratorOptions, format: Format, suffix: Option<String>) -> Result<Self> {
		Ok(Self::new(Generator::new(options)?, format, suffix))
	}

	/// Separator placed between paragraphs.
	pub fn line_ending(&self) -> &str {
		self.suffix.as_deref().unwrap_or(platform_line_ending())
	}

	/// `count` words (random count when `None`), formatted.
	pub fn generate_words(&mut self, count: Option<usize>) -> Result<String> {
		let words = self.generator.generate_random_words(count)?;
		Ok(self.format.apply(words))
	}

	/// A run of `count` sentences (random count when `None`), formatted as
	/// a single block.
	pub fn generate_sentences(&mut self, count: Option<usize>) -> Result<String> {
		let sentences = self.generator.generate_random_paragraph(count)?;
		Ok(self.format.apply(sentences))
	}

	/// `count` paragraphs, each formatted on its own and joined with the
	/// line ending.
	pub fn generate_paragraphs(&mut self, count: usize) -> Result<String> {
		let mut paragraphs = Vec::with_capacity(count);
		for _ in 0..count {
			let paragraph = self.generator.generate_random_paragraph(None)?;
			paragraphs.push(self.format.apply(paragraph));
		}
		Ok(paragraphs.join(self.line_ending()))
	}
}

/// Options for the one-shot `lorem_ipsum` call.
///
/// Bounds are given as separate lower/upper values:
/// `paragraph_*` counts sentences per paragraph, `sentence_*` counts words
/// per sentence.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LoremOptions {
	pub count: usize,
	pub units: Units,
	pub format: Format,
	pub suffix: Option<String>,
	pub paragraph_lower_bound: usize,
	pub paragraph_upper_bound: usize,
	pub sentence_lower_bound: usize,
	pub sentence_upper_bound: usize,
	pub seed: Option<String>,
	pub words: Option<Vocabulary>,
}

impl Default for LoremOptions {
	fn default() -> Self {
		Self {
			count: 1,
			units: Units::Sentences,
			format: Format::Plain,
			suffix: None,
			paragraph_lower_bound: Bounds::SENTENCES_PER_PARAGRAPH.min,
			paragraph_upper_bound: Bounds::SENTENCES_PER_PARAGRAPH.max,
			sentence_lower_bound: Bounds::WORDS_PER_SENTENCE.min,
			sentence_upper_bound: Bounds::WORDS_PER_SENTENCE.max,
			seed: None,
			words: None,
		}
	}
}

impl LoremOptions {
	fn generator_options(&self) -> GeneratorOptions {
		GeneratorOptions {
			sentences_per_paragraph: Bounds { min: self.paragraph_lower_bound, max: self.paragraph_upper_bound },
			words_per_sentence: Bounds { min: self.sentence_lower_bound, max: self.sentence_upper_bound },
			random: None,
			seed: self.seed.clone(),
			words: self.words.clone(),
		}
	}
}

/// Generates `count` units of placeholder text in one call.
///
/// # Errors
/// Returns `LipsumError::Configuration` for inverted bounds and
/// `LipsumError::EmptyVocabulary` when `words` is empty.
pub fn lorem_ipsum(options: LoremOptions) -> Result<String> {
	let mut lorem = LoremIpsum::with_options(options.generator_options(), options.format, options.suffix)?;
	log::trace!("Generating {} {}", options.count, options.units);

	match options.units {
		Units::Words => lorem.generate_words(Some(options.count)),
		Units::Sentences => lorem.generate_sentences(Some(options.count)),
		Units::Paragraphs => lorem.generate_paragraphs(options.count),
	}
}
