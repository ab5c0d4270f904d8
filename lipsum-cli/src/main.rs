use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use lipsum_core::{lorem_ipsum, Bounds, Format, LoremOptions, Units, Vocabulary};

/// Generate lorem ipsum placeholder text.
///
/// Examples:
///   lipsum                      one sentence
///   lipsum 3 paragraphs         three paragraphs
///   lipsum 12 words --seed demo the same twelve words every time
#[derive(Debug, Parser)]
#[command(name = "lipsum", version, about)]
struct Cli {
    /// How many units to generate
    #[arg(default_value_t = 1)]
    count: usize,

    /// words, sentences or paragraphs (singular accepted)
    #[arg(default_value_t = Units::Sentences)]
    units: Units,

    /// plain or html
    #[arg(short, long, default_value_t = Format::Plain)]
    format: Format,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<String>,

    /// Word list file, one word per line
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Separator between paragraphs (defaults to the platform line ending)
    #[arg(long)]
    suffix: Option<String>,

    /// Minimum sentences per paragraph
    #[arg(long, default_value_t = Bounds::SENTENCES_PER_PARAGRAPH.min)]
    sentences_min: usize,

    /// Maximum sentences per paragraph
    #[arg(long, default_value_t = Bounds::SENTENCES_PER_PARAGRAPH.max)]
    sentences_max: usize,

    /// Minimum words per sentence
    #[arg(long, default_value_t = Bounds::WORDS_PER_SENTENCE.min)]
    words_min: usize,

    /// Maximum words per sentence
    #[arg(long, default_value_t = Bounds::WORDS_PER_SENTENCE.max)]
    words_max: usize,
}

impl Cli {
    fn into_options(self) -> anyhow::Result<LoremOptions> {
        let words = match &self.words {
            Some(path) => Some(
                Vocabulary::from_file(path)
                    .with_context(|| format!("Failed to read word list {}", path.display()))?,
            ),
            None => None,
        };

        Ok(LoremOptions {
            count: self.count,
            units: self.units,
            format: self.format,
            suffix: self.suffix,
            paragraph_lower_bound: self.sentences_min,
            paragraph_upper_bound: self.sentences_max,
            sentence_lower_bound: self.words_min,
            sentence_upper_bound: self.words_max,
            seed: self.seed,
            words,
        })
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("{cli:?}");

    // Prints the text followed by a newline, whatever the suffix
    let text = lorem_ipsum(cli.into_options()?)?;
    println!("{text}");

    Ok(())
}
