//! Property tests for chunked tokenization

use proptest::prelude::*;
use wordstream_core::Tokenizer;

/// Text drawn from a small alphabet so separators are frequent
fn text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ab. ,\t\nçé]{0,40}").unwrap()
}

/// Feed `text` in pieces split at `cuts`, carrying leftovers through
fn tokenize_in_chunks(tokenizer: &Tokenizer, text: &str, cuts: &[usize]) -> Vec<String> {
    let boundaries: Vec<usize> = {
        let mut points: Vec<usize> = cuts
            .iter()
            .map(|&cut| cut % (text.len() + 1))
            .filter(|&cut| text.is_char_boundary(cut))
            .collect();
        points.push(0);
        points.push(text.len());
        points.sort_unstable();
        points.dedup();
        points
    };

    let mut words = Vec::new();
    let mut leftover: Option<String> = None;
    for window in boundaries.windows(2) {
        let tokens = tokenizer.process_words(&text[window[0]..window[1]], leftover.as_deref());
        words.extend(tokens.words);
        leftover = tokens.leftover;
    }
    words.extend(leftover);
    words
}

proptest! {
    #[test]
    fn terminated_input_never_leaves_leftover(body in text(), sep in prop::sample::select(vec![' ', '\t', '\n', '\r', '.', ','])) {
        let tokenizer = Tokenizer::new();
        let chunk = format!("{body}{sep}");
        prop_assert_eq!(tokenizer.process_words(&chunk, None).leftover, None);
    }

    #[test]
    fn words_never_contain_separators_or_are_empty(body in text(), prefix in "[ab]{0,3}") {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.process_words(&body, Some(prefix.as_str()));
        for word in tokens.words.iter().chain(tokens.leftover.iter()) {
            prop_assert!(!word.is_empty());
            prop_assert!(!word.chars().any(|ch| tokenizer.is_separator(ch)));
        }
    }

    #[test]
    fn chunking_does_not_change_the_words(body in text(), cuts in prop::collection::vec(0usize..64, 0..6)) {
        let tokenizer = Tokenizer::new();
        let whole = tokenize_in_chunks(&tokenizer, &body, &[]);
        let chunked = tokenize_in_chunks(&tokenizer, &body, &cuts);
        prop_assert_eq!(whole, chunked);
    }
}
