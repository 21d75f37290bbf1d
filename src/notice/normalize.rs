/// Reduce a notice text to the key used to decide whether two notices are the
/// same license.
///
/// Everything that is not a word character (alphanumeric or `_`) is dropped
/// and the rest is lowercased, so re-wrapped or re-indented copies of one
/// boilerplate collapse to the same key while a changed word does not.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .flat_map(char::to_lowercase)
        .collect()
}
