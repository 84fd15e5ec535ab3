use unicode_segmentation::UnicodeSegmentation;

// Words whose trailing period never ends a sentence.
const ABBREVIATIONS: &[&str] = &["mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "vs", "e.g", "i.e"];

const TERMINALS: &[&str] = &[".", "!", "?", "…"];
const CLOSERS: &[&str] = &["\"", "'", ")", "]", "}", "”", "’", "»"];

/// Splits a raw document into lower-cased sentences in document order.
///
/// Blank lines end paragraphs; single line breaks inside a paragraph are
/// folded into spaces so hard-wrapped prose is not cut mid-sentence. Text is
/// lower-cased first, so boundaries come from punctuation alone: a run of
/// `.`, `!` or `?` (plus closing quotes or brackets) followed by whitespace
/// ends a sentence, except a period after a title abbreviation.
pub fn segment_sentences(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    paragraphs(&lowered)
        .iter()
        .flat_map(|p| split_paragraph(p))
        .collect()
}

fn paragraphs(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                out.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current.join(" "));
    }
    out
}

fn split_paragraph(paragraph: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut last_word = "";
    let mut at_end = false;

    // UAX #29 word bounds keep "e.g" and "3.14" whole and isolate punctuation.
    for seg in paragraph.split_word_bounds() {
        if at_end {
            if TERMINALS.contains(&seg) || CLOSERS.contains(&seg) {
                current.push_str(seg);
                continue;
            }
            at_end = false;
            if seg.chars().all(char::is_whitespace) {
                push_sentence(&mut sentences, &mut current);
                continue;
            }
        }
        current.push_str(seg);
        if TERMINALS.contains(&seg) {
            at_end = !(seg == "." && ABBREVIATIONS.contains(&last_word));
        } else if seg.chars().any(char::is_alphanumeric) {
            last_word = seg;
        }
    }
    push_sentence(&mut sentences, &mut current);
    sentences
}

fn push_sentence(
    sentences: &mut Vec<String>,
    current: &mut String,
) {
    let sentence = current.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
    current.clear();
}
