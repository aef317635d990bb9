/// Words masked out of every accepted chirp. Matching is exact and case-sensitive.
pub const FORBIDDEN_WORDS: [&str; 6] = [
    "kerfuffle",
    "sharbert",
    "fornax",
    "Kerfuffle",
    "Sharbert",
    "Fornax",
];

/// Replacement written in place of a forbidden word.
pub const MASK: &str = "****";

/// Masks forbidden words in `text`.
///
/// The text is split on single ASCII spaces and every token that is exactly a
/// forbidden word is replaced by [`MASK`]. Tokens are rejoined with one space,
/// so runs of spaces come out as a single space. Tokens with attached
/// punctuation (`"kerfuffle,"`) or other casings (`"KERFUFFLE"`) are kept.
pub fn filter(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());

    for (i, token) in text.split(' ').enumerate() {
        if i > 0 && !cleaned.ends_with(' ') {
            cleaned.push(' ');
        }

        if is_forbidden(token) {
            cleaned.push_str(MASK);
        } else {
            cleaned.push_str(token);
        }
    }

    cleaned
}

fn is_forbidden(token: &str) -> bool {
    FORBIDDEN_WORDS.contains(&token)
}
