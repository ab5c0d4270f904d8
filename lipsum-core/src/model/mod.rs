//! Top-level module for placeholder text generation.
//!
//! This module provides:
//! - Inclusive count ranges (`Bounds`)
//! - The candidate word list (`Vocabulary`)
//! - Random number streams (`RandomSource` and its implementations)
//! - The word/sentence/paragraph generator (`Generator`)
//! - Output formatting and one-shot generation (`LoremIpsum`, `lorem_ipsum`)

/// Inclusive `min..=max` ranges for sentence and word counts.
pub mod bounds;

/// High-level generator producing random words, sentences and paragraphs.
///
/// Owns its bounds, a vocabulary handle and a random source.
pub mod generator;

/// Formatting facade (plain text or HTML, line endings) and the
/// one-shot `lorem_ipsum` entry point.
pub mod lorem_ipsum;

/// Random number streams yielding `f64` values in `[0, 1)`.
///
/// Seeded streams are reproducible across runs and platforms.
pub mod random_source;

/// Shared, read-only word list, including the built-in lorem ipsum words.
pub mod vocabulary;
