use crate::vocabulary::Word;
use std::time::Duration;

/// How many wins the ledger remembers.
pub const LEDGER_CAPACITY: usize = 5;

/// One winning round. Losses are reported to the player but never
/// recorded here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    word: Word,
    time_taken: Duration,
}

impl RoundResult {
    pub fn new(word: Word, time_taken: Duration) -> Self {
        RoundResult { word, time_taken }
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn time_taken(&self) -> Duration {
        self.time_taken
    }

    pub fn seconds(&self) -> f64 {
        self.time_taken.as_secs_f64()
    }
}

/// Bounded history of recent wins, most recent first. Inserting past
/// capacity silently drops the oldest entry; that is the normal overflow
/// path, not a failure.
#[derive(Debug, Clone, Default)]
pub struct ResultLedger {
    results: Vec<RoundResult>,
}

impl ResultLedger {
    pub fn new() -> Self {
        ResultLedger::default()
    }

    pub fn push(&mut self, result: RoundResult) {
        self.results.insert(0, result);
        self.results.truncate(LEDGER_CAPACITY);
    }

    pub fn entries(&self) -> &[RoundResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
