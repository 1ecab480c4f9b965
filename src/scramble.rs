use crate::vocabulary::Word;
use rand::seq::SliceRandom;
use rand::Rng;

/// A puzzle as shown to the player: the shuffled letters plus the answer
/// they were shuffled from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambledWord {
    answer: Word,
    display: String,
}

impl ScrambledWord {
    pub fn answer(&self) -> &Word {
        &self.answer
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}

fn permute<R: Rng>(word: &Word, rng: &mut R) -> String {
    let mut chars: Vec<char> = word.as_str().chars().collect();
    chars.shuffle(rng);
    chars.into_iter().collect()
}

/// Uniformly random permutation of the word's characters. May reproduce
/// the original ordering; single-character and repeated-character words
/// always do.
pub fn scramble<R: Rng>(word: &Word, rng: &mut R) -> ScrambledWord {
    ScrambledWord {
        answer: word.clone(),
        display: permute(word, rng),
    }
}

/// Scramble for presentation. If the shuffle lands on the original
/// ordering the letters are shuffled once more, so the player usually
/// sees a rearrangement. Words with no distinct orderings come through
/// unchanged either way.
pub fn scramble_for_display<R: Rng>(word: &Word, rng: &mut R) -> ScrambledWord {
    let mut display = permute(word, rng);
    if display == word.as_str() && word.len() > 1 {
        display = permute(word, rng);
    }
    ScrambledWord {
        answer: word.clone(),
        display,
    }
}
