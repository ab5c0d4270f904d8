use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, LipsumError>;

/// Errors produced while configuring or running a generator.
///
/// None of these leave a `Generator` in a bad state: a failed call can be
/// followed by any other call on the same instance.
#[derive(Debug, Error)]
pub enum LipsumError {
	/// A bounds pair has `min > max`.
	///
	/// `bound` names the offending option, e.g. `"sentences per paragraph"`.
	#[error("Minimum number of {bound} ({min}) cannot exceed maximum ({max}).")]
	Configuration {
		bound: &'static str,
		min: usize,
		max: usize,
	},

	/// A bounds pair whose maximum cannot be drawn as an `i64`.
	#[error("Maximum number of {bound} ({max}) is too large.")]
	BoundTooLarge {
		bound: &'static str,
		max: usize,
	},

	/// A word was requested from a vocabulary with no words in it.
	#[error("Cannot pick a word from an empty vocabulary")]
	EmptyVocabulary,

	#[error("Unknown units '{0}', expected words, sentences or paragraphs")]
	UnknownUnits(String),

	#[error("Unknown format '{0}', expected plain or html")]
	UnknownFormat(String),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}
