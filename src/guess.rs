use crate::vocabulary::Word;

/// Case-insensitive guess check. Whitespace is significant: the input
/// layer decides what to trim before calling, not this function.
pub fn is_correct(guess: &str, target: &Word) -> bool {
    guess.to_lowercase() == target.as_str().to_lowercase()
}
