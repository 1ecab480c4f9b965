use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;

use jumblr::runtime::{FixedTicker, GameEvent, Runner, TestEventSource};
use jumblr::session::GameSession;
use jumblr::vocabulary::{Vocabulary, Word};

fn single_word_session(word: &str) -> GameSession<StdRng> {
    let vocabulary =
        Vocabulary::from_words("fixture", vec![Word::from(word)]).expect("one word is enough");
    GameSession::new(vocabulary, StdRng::seed_from_u64(2))
}

// Headless integration using the internal runtime + GameSession without a TTY
// Verifies that a minimal play-one-round flow completes via Runner/TestEventSource.
#[test]
fn headless_round_flow_completes() {
    let mut session = single_word_session("hi");

    let answer = session
        .begin_round()
        .expect("round should start")
        .answer()
        .as_str()
        .to_string();

    // Channel for the test event source
    let (tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let ticker = FixedTicker::new(Duration::from_millis(5));
    let runner = Runner::new(es, ticker);

    // Producer: send the keystrokes for the answer, then Enter to submit
    for c in answer.chars() {
        tx.send(GameEvent::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::NONE,
        )))
        .unwrap();
    }
    tx.send(GameEvent::Key(KeyEvent::new(
        KeyCode::Enter,
        KeyModifiers::NONE,
    )))
    .unwrap();

    // Act: drive a tiny event loop until the round resolves (or bounded steps)
    let mut guess = String::new();
    for _ in 0..100u32 {
        match runner.step() {
            GameEvent::Tick => {}
            GameEvent::Resize => {}
            GameEvent::Key(key) => match key.code {
                KeyCode::Char(c) => guess.push(c),
                KeyCode::Enter => {
                    session
                        .submit_guess(&guess, Duration::from_millis(750))
                        .expect("round should resolve");
                }
                _ => {}
            },
        }
        if session.last_outcome().is_some() {
            break;
        }
    }

    let outcome = session.last_outcome().expect("round should have resolved");
    assert!(outcome.is_win());
    assert_eq!(session.ledger().len(), 1);
}

#[test]
fn headless_wrong_guess_resolves_without_recording() {
    let mut session = single_word_session("torch");
    session.begin_round().expect("round should start");

    let (tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let ticker = FixedTicker::new(Duration::from_millis(5));
    let runner = Runner::new(es, ticker);

    for c in "xyz".chars() {
        tx.send(GameEvent::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::NONE,
        )))
        .unwrap();
    }
    tx.send(GameEvent::Key(KeyEvent::new(
        KeyCode::Enter,
        KeyModifiers::NONE,
    )))
    .unwrap();

    let mut guess = String::new();
    for _ in 0..100u32 {
        match runner.step() {
            GameEvent::Tick => {}
            GameEvent::Resize => {}
            GameEvent::Key(key) => match key.code {
                KeyCode::Char(c) => guess.push(c),
                KeyCode::Enter => {
                    session
                        .submit_guess(&guess, Duration::from_millis(300))
                        .expect("round should resolve");
                }
                _ => {}
            },
        }
        if session.last_outcome().is_some() {
            break;
        }
    }

    let outcome = session.last_outcome().expect("round should have resolved");
    assert!(!outcome.is_win());
    assert_eq!(outcome.word.as_str(), "torch");
    assert!(session.ledger().is_empty());

    // The session is immediately playable again
    assert!(session.acknowledge());
    assert!(session.begin_round().is_some());
}
