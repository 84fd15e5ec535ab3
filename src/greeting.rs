use crate::constants::{GREETING_INPUTS, GREETING_PHRASES, GREETING_REPLIES};
use rand::{Rng, seq::SliceRandom};

/// True when any whitespace-separated word of `text` is a greeting, or a
/// run of its words spells a greeting phrase.
pub fn is_greeting(text: &str) -> bool {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| c.is_ascii_punctuation()))
        .collect();
    if words.iter().any(|w| GREETING_INPUTS.contains(w)) {
        return true;
    }
    GREETING_PHRASES.iter().any(|phrase| {
        let target: Vec<&str> = phrase.split_whitespace().collect();
        words.windows(target.len()).any(|run| run == target.as_slice())
    })
}

/// Returns a random greeting reply when `text` greets, using `rng` so callers
/// control determinism.
pub fn match_greeting<R: Rng + ?Sized>(
    text: &str,
    rng: &mut R,
) -> Option<&'static str> {
    if !is_greeting(text) {
        return None;
    }
    GREETING_REPLIES.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn hello_there_gets_a_reply() {
        let mut rng = StdRng::seed_from_u64(7);
        let reply = match_greeting("Hello there", &mut rng).unwrap();
        assert!(GREETING_REPLIES.contains(&reply));
    }

    #[test]
    fn non_greeting_gets_nothing() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(match_greeting("xyz", &mut rng), None);
        assert_eq!(match_greeting("this is high", &mut rng), None);
    }

    #[test]
    fn matching_ignores_case_and_punctuation() {
        assert!(is_greeting("HEY"));
        assert!(is_greeting("well, hi!"));
        assert!(is_greeting("so what's up today"));
        assert!(!is_greeting("history"));
    }

    #[test]
    fn phrases_match_whole_words_only() {
        assert!(is_greeting("What's up?"));
        assert!(!is_greeting("what's upstream of the dam"));
        assert!(!is_greeting("what's upside down"));
    }

    #[test]
    fn same_seed_same_reply() {
        let a = match_greeting("hi", &mut StdRng::seed_from_u64(42));
        let b = match_greeting("hi", &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn every_reply_is_reachable() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(match_greeting("hey", &mut rng).unwrap());
        }
        assert_eq!(seen.len(), GREETING_REPLIES.len());
    }
}
