use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::io;

/// Built-in lorem ipsum word list.
///
/// Every entry is lowercase, including `lorem`, so capitals only appear at
/// the start of a sentence. The classic lorem ipsum list spells it `Lorem`.
pub const WORDS: &[&str] = &[
	"ad", "adipisicing", "aliqua", "aliquip", "amet", "anim", "aute", "cillum",
	"commodo", "consectetur", "consequat", "culpa", "cupidatat", "deserunt", "do",
	"dolor", "dolore", "duis", "ea", "eiusmod", "elit", "enim", "esse", "est", "et",
	"eu", "ex", "excepteur", "exercitation", "fugiat", "id", "in", "incididunt",
	"ipsum", "irure", "labore", "laboris", "laborum", "lorem", "magna", "minim",
	"mollit", "nisi", "non", "nostrud", "nulla", "occaecat", "officia", "pariatur",
	"proident", "qui", "quis", "reprehenderit", "sint", "sit", "sunt", "tempor",
	"ullamco", "ut", "velit", "veniam", "voluptate",
];

/// Ordered list of candidate words.
///
/// Cloning is cheap: the words are shared behind an `Arc`, so many
/// generators can draw from one loaded list. Content is not validated;
/// duplicates or empty strings only reduce the variety of the output.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
	words: Arc<[String]>,
}

impl Vocabulary {
	/// Loads a vocabulary from a text file, one word per line.
	pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
		Ok(Self::from(io::read_words(path)?))
	}
}

impl Default for Vocabulary {
	/// The built-in lorem ipsum list.
	fn default() -> Self {
		WORDS.iter().copied().collect()
	}
}

impl Deref for Vocabulary {
	type Target = [String];

	fn deref(&self) -> &[String] {
		&self.words
	}
}

impl From<Vec<String>> for Vocabulary {
	fn from(words: Vec<String>) -> Self {
		Self { words: words.into() }
	}
}

impl From<Vocabulary> for Vec<String> {
	fn from(vocabulary: Vocabulary) -> Self {
		vocabulary.words.to_vec()
	}
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self::from(iter.into_iter().map(Into::into).collect::<Vec<String>>())
	}
}
