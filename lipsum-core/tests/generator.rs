use lipsum_core::model::vocabulary::WORDS;
use lipsum_core::{Bounds, FnSource, Generator, GeneratorOptions, LipsumError, SeededSource};

fn seeded(seed: &str) -> Generator {
    Generator::new(GeneratorOptions {
        seed: Some(seed.to_owned()),
        ..Default::default()
    })
    .unwrap()
}

fn sentence_count(paragraph: &str) -> usize {
    paragraph.matches('.').count()
}

#[test]
#[ntest::timeout(1000)]
fn integers_stay_within_bounds() {
    let mut generator = Generator::new(GeneratorOptions::default()).unwrap();
    for (min, max) in [(0, 0), (0, 1), (3, 7), (5, 15), (-10, 10), (100, 1_000)] {
        for _ in 0..2_000 {
            let value = generator.generate_random_integer(min, max);
            assert!((min..=max).contains(&value), "{value} not in {min}..={max}");
        }
    }
}

#[test]
#[ntest::timeout(1000)]
fn every_value_of_a_small_range_is_reachable() {
    let mut generator = seeded("coverage");
    let mut seen = [false; 4];
    for _ in 0..1_000 {
        seen[generator.generate_random_integer(0, 3) as usize] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn inverted_sentence_bounds_rejected() {
    let err = Generator::new(GeneratorOptions {
        sentences_per_paragraph: Bounds { min: 8, max: 5 },
        ..Default::default()
    })
    .unwrap_err();
    assert!(matches!(err, LipsumError::Configuration { .. }));
    assert!(err.to_string().contains("sentences"));
    assert!(err.to_string().contains('8'));
}

#[test]
fn inverted_word_bounds_rejected() {
    let err = Generator::new(GeneratorOptions {
        words_per_sentence: Bounds { min: 10, max: 2 },
        ..Default::default()
    })
    .unwrap_err();
    assert!(matches!(err, LipsumError::Configuration { .. }));
    assert!(err.to_string().contains("words"));
}

#[test]
#[ntest::timeout(1000)]
fn same_seed_same_text() {
    let mut first = seeded("reproducible");
    let mut second = seeded("reproducible");

    let outputs: Vec<String> = (0..3).map(|_| first.generate_random_paragraph(None).unwrap()).collect();
    for output in &outputs {
        assert_eq!(*output, second.generate_random_paragraph(None).unwrap());
    }

    // The stream continues instead of restarting.
    assert_ne!(outputs[0], outputs[1]);
}

#[test]
fn seed_and_seeded_source_agree() {
    let mut from_seed = seeded("agree");
    let mut from_source = Generator::new(GeneratorOptions {
        random: Some(Box::new(SeededSource::new("agree"))),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(
        from_seed.generate_random_paragraph(None).unwrap(),
        from_source.generate_random_paragraph(None).unwrap()
    );
}

#[test]
fn explicit_random_source_wins_over_seed() {
    let mut generator = Generator::new(GeneratorOptions {
        random: Some(Box::new(FnSource::new(|| 0.0))),
        seed: Some("ignored".to_owned()),
        words: Some(["alpha", "beta"].into_iter().collect()),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(generator.generate_random_words(Some(2)).unwrap(), "alpha alpha");
}

#[test]
#[ntest::timeout(1000)]
fn words_come_from_vocabulary() {
    let mut generator = seeded("members");
    for _ in 0..200 {
        let words = generator.generate_random_words(Some(5)).unwrap();
        let tokens: Vec<&str> = words.split(' ').collect();
        assert_eq!(tokens.len(), 5);
        assert!(tokens.iter().all(|token| WORDS.contains(token)));
    }
}

#[test]
#[ntest::timeout(1000)]
fn sentence_shape() {
    let mut generator = seeded("shape");
    for _ in 0..200 {
        let sentence = generator.generate_random_sentence(None).unwrap();
        assert!(sentence.chars().next().unwrap().is_uppercase(), "{sentence}");
        assert!(sentence.ends_with('.'));
        assert!(!sentence.ends_with(".."));
        assert_eq!(sentence.matches('.').count(), 1);

        let words = sentence.trim_end_matches('.').split(' ').count();
        assert!(Bounds::WORDS_PER_SENTENCE.contains(words));
    }
}

#[test]
#[ntest::timeout(1000)]
fn paragraph_sentence_count_within_default_bounds() {
    let mut generator = Generator::new(GeneratorOptions::default()).unwrap();
    for _ in 0..200 {
        let paragraph = generator.generate_random_paragraph(None).unwrap();
        assert!(Bounds::SENTENCES_PER_PARAGRAPH.contains(sentence_count(&paragraph)));
        assert_eq!(paragraph, paragraph.trim());
        assert!(!paragraph.contains("  "));
    }
}

#[test]
fn custom_bounds_respected() {
    let mut generator = Generator::new(GeneratorOptions {
        sentences_per_paragraph: Bounds { min: 2, max: 2 },
        words_per_sentence: Bounds { min: 1, max: 1 },
        seed: Some("tight".to_owned()),
        ..Default::default()
    })
    .unwrap();
    let paragraph = generator.generate_random_paragraph(None).unwrap();
    assert_eq!(paragraph.split(' ').count(), 2);
    assert_eq!(sentence_count(&paragraph), 2);
}

#[test]
fn explicit_paragraph_count() {
    let mut generator = seeded("five");
    let paragraph = generator.generate_random_paragraph(Some(5)).unwrap();
    assert_eq!(sentence_count(&paragraph), 5);
}

#[test]
fn empty_vocabulary_reports_error() {
    let mut generator = Generator::new(GeneratorOptions {
        words: Some(Vec::<String>::new().into()),
        ..Default::default()
    })
    .unwrap();
    assert!(matches!(generator.generate_random_sentence(None), Err(LipsumError::EmptyVocabulary)));
    assert!(matches!(generator.generate_random_paragraph(Some(1)), Err(LipsumError::EmptyVocabulary)));
}
