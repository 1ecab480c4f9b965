use include_dir::{include_dir, Dir};
use rand::Rng;
use serde::Deserialize;
use serde_json::from_str;
use std::fmt;

static WORDLIST_DIR: Dir = include_dir!("src/wordlists");

/// A single puzzle word. Compares by exact content; lowercased in the
/// shipped lists. The empty string is representable so the evaluator's
/// degenerate case stays expressible, but no shipped list contains it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Word(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Word {
    fn from(s: &str) -> Self {
        Word::new(s)
    }
}

/// Startup failures around the word list. All of these are fatal before
/// the first round; a running session never produces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingWordList(String),
    MalformedWordList(String),
    EmptyVocabulary(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingWordList(name) => {
                write!(f, "no embedded word list named '{name}'")
            }
            Self::MalformedWordList(name) => {
                write!(f, "word list '{name}' is not valid word-list json")
            }
            Self::EmptyVocabulary(name) => {
                write!(f, "word list '{name}' contains no words")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// The candidate word list a session draws from. Guaranteed non-empty:
/// both constructors reject an empty list, so selection never fails.
#[derive(Deserialize, Clone, Debug)]
pub struct Vocabulary {
    name: String,
    size: u32,
    words: Vec<Word>,
}

impl Vocabulary {
    /// Load an embedded word list by name (`english`, `animals`).
    pub fn load(name: &str) -> Result<Self, ConfigError> {
        let file = WORDLIST_DIR
            .get_file(format!("{name}.json"))
            .ok_or_else(|| ConfigError::MissingWordList(name.to_string()))?;

        let contents = file
            .contents_utf8()
            .ok_or_else(|| ConfigError::MalformedWordList(name.to_string()))?;

        let vocabulary: Vocabulary = from_str(contents)
            .map_err(|_| ConfigError::MalformedWordList(name.to_string()))?;

        if vocabulary.words.is_empty() {
            return Err(ConfigError::EmptyVocabulary(name.to_string()));
        }
        Ok(vocabulary)
    }

    /// Build a vocabulary from caller-supplied words. Mostly for tests and
    /// custom sources; the non-empty rule applies here too.
    pub fn from_words(
        name: impl Into<String>,
        words: Vec<Word>,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        if words.is_empty() {
            return Err(ConfigError::EmptyVocabulary(name));
        }
        Ok(Vocabulary {
            name,
            size: words.len() as u32,
            words,
        })
    }

    /// Uniformly random word, with replacement across calls: the same word
    /// may come up in consecutive rounds.
    pub fn random_word<R: Rng>(&self, rng: &mut R) -> &Word {
        // Non-empty by construction, so the range is never empty.
        let index = rng.gen_range(0..self.words.len());
        &self.words[index]
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn declared_size(&self) -> u32 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_load_english() {
        let vocabulary = Vocabulary::load("english").unwrap();

        assert_eq!(vocabulary.name(), "english");
        assert!(!vocabulary.is_empty());
        assert_eq!(vocabulary.declared_size() as usize, vocabulary.len());
    }

    #[test]
    fn test_load_animals() {
        let vocabulary = Vocabulary::load("animals").unwrap();

        assert_eq!(vocabulary.name(), "animals");
        assert!(!vocabulary.is_empty());
        assert_eq!(vocabulary.declared_size() as usize, vocabulary.len());
    }

    #[test]
    fn test_load_unknown_list() {
        let err = Vocabulary::load("klingon").unwrap_err();
        assert_eq!(err, ConfigError::MissingWordList("klingon".to_string()));
    }

    #[test]
    fn test_shipped_words_are_lowercase_and_nonempty() {
        for name in ["english", "animals"] {
            let vocabulary = Vocabulary::load(name).unwrap();
            for word in vocabulary.words() {
                assert!(!word.is_empty());
                assert!(
                    word.as_str().chars().all(|c| c.is_ascii_lowercase()),
                    "unexpected character in '{word}'"
                );
            }
        }
    }

    #[test]
    fn test_from_words_rejects_empty() {
        let err = Vocabulary::from_words("custom", vec![]).unwrap_err();
        assert_eq!(err, ConfigError::EmptyVocabulary("custom".to_string()));
    }

    #[test]
    fn test_from_words_counts() {
        let vocabulary =
            Vocabulary::from_words("custom", vec![Word::from("apple"), Word::from("pearl")])
                .unwrap();
        assert_eq!(vocabulary.len(), 2);
        assert_eq!(vocabulary.declared_size(), 2);
    }

    #[test]
    fn test_random_word_is_member() {
        let vocabulary = Vocabulary::load("english").unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let word = vocabulary.random_word(&mut rng);
            assert!(vocabulary.words().contains(word));
        }
    }

    #[test]
    fn test_random_word_deterministic_per_seed() {
        let vocabulary = Vocabulary::load("english").unwrap();
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);

        for _ in 0..20 {
            assert_eq!(
                vocabulary.random_word(&mut a),
                vocabulary.random_word(&mut b)
            );
        }
    }

    #[test]
    fn test_random_word_single_entry() {
        let vocabulary =
            Vocabulary::from_words("solo", vec![Word::from("apple")]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(vocabulary.random_word(&mut rng).as_str(), "apple");
        assert_eq!(vocabulary.random_word(&mut rng).as_str(), "apple");
    }

    #[test]
    fn test_word_display_and_len() {
        let word = Word::from("puzzle");
        assert_eq!(word.to_string(), "puzzle");
        assert_eq!(word.len(), 6);
        assert!(!word.is_empty());
        assert!(Word::new("").is_empty());
    }

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::MissingWordList("x".into()).to_string(),
            "no embedded word list named 'x'"
        );
        assert_eq!(
            ConfigError::EmptyVocabulary("x".into()).to_string(),
            "word list 'x' contains no words"
        );
    }

    #[test]
    fn test_vocabulary_deserialization() {
        let json_data = r#"
        {
            "name": "test",
            "size": 3,
            "words": ["hello", "world", "tests"]
        }
        "#;

        let vocabulary: Vocabulary = from_str(json_data).unwrap();

        assert_eq!(vocabulary.name(), "test");
        assert_eq!(vocabulary.declared_size(), 3);
        assert_eq!(vocabulary.len(), 3);
        assert!(vocabulary.words().contains(&Word::from("world")));
    }
}
