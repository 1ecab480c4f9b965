use crate::guess::is_correct;
use crate::ledger::{ResultLedger, RoundResult};
use crate::scramble::{scramble_for_display, ScrambledWord};
use crate::vocabulary::{Vocabulary, Word};
use rand::Rng;
use std::time::Duration;

/// Where the session is in its round loop. `Exited` is terminal and only
/// reachable from `Idle`; a round in flight always resolves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    RoundInProgress,
    RoundResolved,
    Exited,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// What a submitted guess resolved to. `word` is always the answer, so a
/// loss can show the player what the scramble hid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    pub outcome: Outcome,
    pub word: Word,
    pub elapsed: Duration,
}

impl RoundOutcome {
    pub fn is_win(&self) -> bool {
        self.outcome == Outcome::Correct
    }
}

/// drives one player's run of rounds: pick a word, scramble it, judge the
/// guess, record wins. The caller owns the clock and passes elapsed time
/// in with the guess; this struct never reads wall time itself.
#[derive(Debug)]
pub struct GameSession<R: Rng> {
    vocabulary: Vocabulary,
    rng: R,
    ledger: ResultLedger,
    phase: Phase,
    puzzle: Option<ScrambledWord>,
    last_outcome: Option<RoundOutcome>,
}

impl<R: Rng> GameSession<R> {
    pub fn new(vocabulary: Vocabulary, rng: R) -> Self {
        GameSession {
            vocabulary,
            rng,
            ledger: ResultLedger::new(),
            phase: Phase::Idle,
            puzzle: None,
            last_outcome: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn ledger(&self) -> &ResultLedger {
        &self.ledger
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The puzzle currently in play. `Some` exactly while a round is in
    /// progress.
    pub fn puzzle(&self) -> Option<&ScrambledWord> {
        self.puzzle.as_ref()
    }

    pub fn last_outcome(&self) -> Option<&RoundOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn has_exited(&self) -> bool {
        self.phase == Phase::Exited
    }

    /// Start the next round: draw a word, scramble it, hand the puzzle
    /// back for display. Refused (returns `None`) unless the session is
    /// idle.
    pub fn begin_round(&mut self) -> Option<&ScrambledWord> {
        if self.phase != Phase::Idle {
            return None;
        }

        let word = self.vocabulary.random_word(&mut self.rng).clone();
        self.puzzle = Some(scramble_for_display(&word, &mut self.rng));
        self.last_outcome = None;
        self.phase = Phase::RoundInProgress;
        self.puzzle.as_ref()
    }

    /// Resolve the round in play. A correct guess is recorded in the
    /// ledger; a wrong one only reports the answer. Either way the round
    /// is over and the outcome is returned. Refused (returns `None`) when
    /// no round is in progress.
    pub fn submit_guess(&mut self, guess: &str, elapsed: Duration) -> Option<RoundOutcome> {
        if self.phase != Phase::RoundInProgress {
            return None;
        }
        let puzzle = self.puzzle.take()?;

        let outcome = if is_correct(guess, puzzle.answer()) {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };

        if outcome == Outcome::Correct {
            self.ledger
                .push(RoundResult::new(puzzle.answer().clone(), elapsed));
        }

        let resolved = RoundOutcome {
            outcome,
            word: puzzle.answer().clone(),
            elapsed,
        };
        self.last_outcome = Some(resolved.clone());
        self.phase = Phase::RoundResolved;
        Some(resolved)
    }

    /// Dismiss the shown outcome and return to idle, ready for the next
    /// round. Refused unless a round was just resolved.
    pub fn acknowledge(&mut self) -> bool {
        if self.phase != Phase::RoundResolved {
            return false;
        }
        self.phase = Phase::Idle;
        true
    }

    /// Leave the session. Only possible from idle; mid-round quits are
    /// refused so every started round resolves.
    pub fn quit(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Exited;
        true
    }
}
