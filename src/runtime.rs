use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent};

/// Everything the event loop reacts to: keystrokes, terminal resizes,
/// and the redraw tick that fires when nothing else arrives.
#[derive(Clone, Debug)]
pub enum GameEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Where events come from. Production reads the terminal; tests feed a
/// channel.
pub trait GameEventSource: Send + 'static {
    /// Block for up to `timeout` waiting for the next event.
    fn recv_timeout(&self, timeout: Duration) -> Result<GameEvent, RecvTimeoutError>;
}

/// Reads crossterm events on a background thread and forwards them over
/// a channel. The thread exits once the receiving side is dropped.
pub struct CrosstermEventSource {
    rx: Receiver<GameEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            match event::read() {
                Ok(CtEvent::Key(key)) => {
                    if tx.send(GameEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(CtEvent::Resize(_, _)) => {
                    if tx.send(GameEvent::Resize).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<GameEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// How long to wait for input before emitting a redraw tick.
pub trait Ticker: Send + Sync + 'static {
    fn interval(&self) -> Duration;
}

#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Channel-backed source for driving the loop from tests.
pub struct TestEventSource {
    rx: Receiver<GameEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<GameEvent>) -> Self {
        Self { rx }
    }
}

impl GameEventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<GameEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Pairs an event source with a ticker and hands the loop one event at a
/// time.
pub struct Runner<E: GameEventSource, T: Ticker> {
    event_source: E,
    ticker: T,
}

impl<E: GameEventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        Self {
            event_source,
            ticker,
        }
    }

    /// Next event, or `Tick` if the tick interval passes without one. A
    /// disconnected source also degrades to ticks so the loop can notice
    /// and wind down instead of hanging.
    pub fn step(&self) -> GameEvent {
        match self.event_source.recv_timeout(self.ticker.interval()) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                GameEvent::Tick
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::sync::mpsc;

    #[test]
    fn test_step_returns_tick_on_timeout() {
        let (_tx, rx) = mpsc::channel();
        let source = TestEventSource::new(rx);
        let runner = Runner::new(source, FixedTicker::new(Duration::from_millis(1)));

        assert_matches!(runner.step(), GameEvent::Tick);
    }

    #[test]
    fn test_step_passes_through_events() {
        let (tx, rx) = mpsc::channel();
        tx.send(GameEvent::Resize).unwrap();
        let source = TestEventSource::new(rx);
        let runner = Runner::new(source, FixedTicker::new(Duration::from_millis(10)));

        assert_matches!(runner.step(), GameEvent::Resize);
    }

    #[test]
    fn test_step_degrades_to_tick_when_source_hangs_up() {
        let (tx, rx) = mpsc::channel();
        drop(tx);
        let source = TestEventSource::new(rx);
        let runner = Runner::new(source, FixedTicker::new(Duration::from_millis(1)));

        assert_matches!(runner.step(), GameEvent::Tick);
    }

    #[test]
    fn test_events_drain_before_ticks() {
        let (tx, rx) = mpsc::channel();
        tx.send(GameEvent::Resize).unwrap();
        tx.send(GameEvent::Resize).unwrap();
        let source = TestEventSource::new(rx);
        let runner = Runner::new(source, FixedTicker::new(Duration::from_millis(1)));

        assert_matches!(runner.step(), GameEvent::Resize);
        assert_matches!(runner.step(), GameEvent::Resize);
        assert_matches!(runner.step(), GameEvent::Tick);
    }
}
