//! Tokenizer behaviour on book-like text.

use concord::tokenize::{classify, split_tokens, Verdict, ROMAN_ALLOW_LIST};
use concord::{tokenize_line, Tokenizer};

#[test]
fn test_dialogue_line() {
    let tokens: Vec<_> =
        tokenize_line("\"It was a dark night,\" said Holmes; \"a dark and stormy night!\"").collect();
    assert_eq!(
        tokens,
        vec!["It", "was", "a", "dark", "night", "said", "Holmes", "a", "dark", "and", "stormy", "night"]
    );
}

#[test]
fn test_chapter_headings_drop_numerals() {
    let tokens: Vec<_> = tokenize_line("CHAPTER XIV. The Adventure of the Speckled Band").collect();
    assert_eq!(tokens, vec!["CHAPTER", "The", "Adventure", "of", "the", "Speckled", "Band"]);
    assert_eq!(classify("XIV"), Verdict::RomanNumeral);
    assert_eq!(classify("mcmxc"), Verdict::RomanNumeral);
}

#[test]
fn test_allow_listed_words_survive() {
    for &word in ROMAN_ALLOW_LIST {
        assert_eq!(classify(word), Verdict::Accepted, "{}", word);
        assert_eq!(classify(&word.to_uppercase()), Verdict::Accepted, "{}", word);
    }
}

#[test]
fn test_non_words_are_rejected() {
    for token in ["221b", "s", "x", "co-op", "naïve", "1895"] {
        assert_eq!(classify(token), Verdict::NotAWord, "{}", token);
    }
}

#[test]
fn test_hyphens_and_apostrophes_split() {
    let pieces: Vec<_> = split_tokens("well-known don't").collect();
    assert_eq!(pieces, vec!["well", "known", "don", "t"]);

    let tokens: Vec<_> = tokenize_line("well-known don't").collect();
    assert_eq!(tokens, vec!["well", "known", "don"]);
}

#[test]
fn test_stats_accumulate_across_lines() {
    let mut tokenizer = Tokenizer::new();
    assert_eq!(tokenizer.line("Chapter IV"), vec!["Chapter"]);
    assert_eq!(tokenizer.line("it's 1895!"), vec!["it"]);
    assert!(tokenizer.line("").is_empty());

    let stats = tokenizer.stats();
    assert_eq!(stats.seen, 5);
    assert_eq!(stats.accepted, 2);
    assert_eq!(stats.rejected_roman, 1);
    assert_eq!(stats.rejected_shape, 2);
    assert_eq!(stats.seen, stats.accepted + stats.rejected_roman + stats.rejected_shape);
}
