// Text normalization — raw document text into a token sequence.
//
// Lowercase, drop ASCII punctuation and decimal digits, split on whitespace.
// No stemming, no Unicode normalization beyond case folding.

/// Split raw text into lowercase word tokens.
///
/// Every ASCII punctuation character and every decimal digit (0-9) is removed
/// before splitting, so "don't" becomes "dont" and "2nd" becomes "nd". Other
/// numeric characters such as fractions or Roman numerals are kept.
/// Empty input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| !c.is_ascii_punctuation() && !c.is_ascii_digit())
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}
