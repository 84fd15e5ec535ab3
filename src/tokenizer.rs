use crate::stop_words::is_stop_word;
use once_cell::sync::Lazy;
use std::collections::HashMap;

// Irregular plurals the suffix rules cannot recover.
static IRREGULAR: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("mice", "mouse"),
        ("geese", "goose"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("oxen", "ox"),
        ("lives", "life"),
        ("wives", "wife"),
        ("knives", "knife"),
        ("leaves", "leaf"),
        ("wolves", "wolf"),
        ("halves", "half"),
    ])
});

// Checked in order; the first matching suffix wins.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("ies", "y"),
    ("men", "man"),
];

const KEEP_TRAILING_S: &[&str] = &["ss", "us", "is", "ous"];

/// Reduces a lower-case word to its singular noun form.
pub fn lemmatize(word: &str) -> String {
    if let Some(base) = IRREGULAR.get(word) {
        return (*base).to_string();
    }
    if word.chars().count() <= 3 || word.chars().any(|c| !c.is_alphabetic()) {
        return word.to_string();
    }
    for (suffix, replacement) in SUFFIX_RULES {
        if let Some(stem) = word.strip_suffix(suffix)
            && stem.chars().count() >= 2
        {
            return format!("{stem}{replacement}");
        }
    }
    if let Some(stem) = word.strip_suffix('s')
        && !KEEP_TRAILING_S.iter().any(|k| word.ends_with(k))
    {
        return stem.to_string();
    }
    word.to_string()
}

/// Lower-cases `text`, strips ASCII punctuation, splits on whitespace,
/// lemmatizes every token and drops stop words.
pub fn normalize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();
    cleaned
        .split_whitespace()
        .map(lemmatize)
        .filter(|t| !is_stop_word(t))
        .collect()
}
