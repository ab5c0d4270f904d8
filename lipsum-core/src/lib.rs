//! Lorem ipsum placeholder text generation library.
//!
//! This crate provides a small, configurable placeholder text generator including:
//! - Random words, sentences and paragraphs drawn from a vocabulary
//! - Injectable random sources (seeded, OS entropy, or caller supplied)
//! - A formatting facade producing plain text or HTML
//! - Word list loading from text files
//!
//! ```
//! use lipsum_core::model::generator::{Generator, GeneratorOptions};
//!
//! let mut generator = Generator::new(GeneratorOptions {
//! 	seed: Some("layout".to_owned()),
//! 	..Default::default()
//! })?;
//! let sentence = generator.generate_random_sentence(Some(4))?;
//! assert!(sentence.ends_with('.'));
//! # Ok::<(), lipsum_core::error::LipsumError>(())
//! ```

/// Text generation: bounds, vocabulary, random sources, the generator
/// itself and the lorem ipsum formatting facade.
pub mod model;

/// Error type shared by the whole crate.
pub mod error;

/// Word list loading and file helpers.
pub mod io;

/// String helpers.
pub mod util;

pub use error::{LipsumError, Result};
pub use model::bounds::Bounds;
pub use model::generator::{Generator, GeneratorOptions};
pub use model::lorem_ipsum::{lorem_ipsum, Format, LoremIpsum, LoremOptions, Units};
pub use model::random_source::{EntropySource, FnSource, RandomSource, SeededSource};
pub use model::vocabulary::Vocabulary;
