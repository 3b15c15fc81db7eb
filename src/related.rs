/// Words with more characters than this (after dropping a possessive `'s`)
/// are accepted without asking.
pub const AUTO_ACCEPT_MIN_EXCLUSIVE: usize = 3;

/// Words this short or shorter are never reported as related.
pub const RELATED_MIN_EXCLUSIVE: usize = 2;

const POSSESSIVE_SUFFIX: &str = "'s";

/// Trim a raw line into a word. Returns `None` for blank lines.
pub fn normalize_word(line: &str) -> Option<&str> {
    let word = line.trim();
    (!word.is_empty()).then_some(word)
}

/// True when the word is long enough to skip the prompt.
pub fn is_auto_accepted(word: &str) -> bool {
    let word = word.trim();
    let stem = word.strip_suffix(POSSESSIVE_SUFFIX).unwrap_or(word);
    stem.chars().count() > AUTO_ACCEPT_MIN_EXCLUSIVE
}

/// Returns the words from `wordlist` that may be related to `target`, i.e.
/// that contain `target` or are contained in it, ignoring case.
///
/// Entries of two characters or fewer are skipped. Order follows `wordlist`.
pub fn find_related_words<'a, S: AsRef<str>>(target: &str, wordlist: &'a [S]) -> Vec<&'a str> {
    let target = target.trim().to_lowercase();
    wordlist
        .iter()
        .map(|w| w.as_ref().trim())
        .filter(|w| w.chars().count() > RELATED_MIN_EXCLUSIVE)
        .filter(|w| {
            let lower = w.to_lowercase();
            lower.contains(&target) || target.contains(&lower)
        })
        .collect()
}
