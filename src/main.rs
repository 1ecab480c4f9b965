pub mod guess;
pub mod ledger;
pub mod scramble;
pub mod session;
pub mod summary;
pub mod ui;
pub mod util;
pub mod vocabulary;

use crate::{
    session::GameSession,
    vocabulary::{ConfigError, Vocabulary},
};
use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

const TICK_RATE_MS: u64 = 100;

/// unscramble words against the clock in your terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal word-unscrambling game. Each round shuffles one word from the chosen list and times how long you take to puzzle it back together."
)]
pub struct Cli {
    /// word list to draw puzzles from
    #[clap(short = 'l', long, value_enum, default_value_t = WordListChoice::English)]
    word_list: WordListChoice,

    /// fixed seed for reproducible word picks and shuffles
    #[clap(short = 's', long)]
    seed: Option<u64>,
}

#[derive(Debug, Copy, Clone, ValueEnum, strum_macros::Display)]
pub enum WordListChoice {
    English,
    Animals,
}

impl WordListChoice {
    fn load(&self) -> Result<Vocabulary, ConfigError> {
        Vocabulary::load(&self.to_string().to_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Menu,
    Playing,
    RoundOver,
    RecentResults,
    Breakdown,
}

#[derive(Debug)]
pub struct App {
    pub cli: Option<Cli>,
    pub session: GameSession<StdRng>,
    pub state: AppState,
    pub guess: String,
    pub round_started: Option<Instant>,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self, ConfigError> {
        let vocabulary = cli.word_list.load()?;
        let rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            session: GameSession::new(vocabulary, rng),
            cli: Some(cli),
            state: AppState::Menu,
            guess: String::new(),
            round_started: None,
        })
    }

    /// Time spent in the current round, or zero outside of one.
    pub fn elapsed_in_round(&self) -> Duration {
        self.round_started
            .map_or(Duration::ZERO, |started| started.elapsed())
    }

    pub fn start_round(&mut self) {
        if self.session.begin_round().is_some() {
            self.guess.clear();
            self.round_started = Some(Instant::now());
            self.state = AppState::Playing;
        }
    }

    pub fn submit_guess(&mut self) {
        let elapsed = self.elapsed_in_round();
        if self.session.submit_guess(&self.guess, elapsed).is_some() {
            self.guess.clear();
            self.round_started = None;
            self.state = AppState::RoundOver;
        }
    }

    pub fn dismiss_outcome(&mut self) {
        if self.session.acknowledge() {
            self.state = AppState::Menu;
        }
    }

    pub fn quit(&mut self) {
        self.session.quit();
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    // Fail on a bad word list before touching the terminal
    let mut app = App::new(cli)?;

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen,)?;
    terminal.show_cursor()?;

    res
}

fn start_tui<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    let game_events = get_game_events();

    terminal.draw(|f| ui(app, f))?;

    loop {
        match game_events.recv()? {
            GameEvent::Tick => {
                // Ticks only matter while the round timer is on screen
                if app.state == AppState::Playing {
                    terminal.draw(|f| ui(app, f))?;
                }
            }
            GameEvent::Resize => {
                terminal.draw(|f| ui(app, f))?;
            }
            GameEvent::Key(key) => {
                if handle_key(app, key) {
                    break;
                }
                terminal.draw(|f| ui(app, f))?;
            }
        }
    }

    Ok(())
}

/// Applies one key press to the app. Returns true once the app should close.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.state {
        AppState::Menu => match key.code {
            KeyCode::Char('p') | KeyCode::Enter => app.start_round(),
            KeyCode::Char('r') => app.state = AppState::RecentResults,
            KeyCode::Char('b') => app.state = AppState::Breakdown,
            KeyCode::Char('q') | KeyCode::Esc => app.quit(),
            _ => {}
        },
        AppState::Playing => match key.code {
            KeyCode::Enter => app.submit_guess(),
            KeyCode::Backspace => {
                app.guess.pop();
            }
            KeyCode::Char(c) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL) {
                    app.guess.push(c);
                }
            }
            // No escape hatch mid-round; the guess resolves first
            _ => {}
        },
        AppState::RoundOver => match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(_) => app.dismiss_outcome(),
            _ => {}
        },
        AppState::RecentResults | AppState::Breakdown => match key.code {
            KeyCode::Char('b') | KeyCode::Esc | KeyCode::Backspace => app.state = AppState::Menu,
            _ => {}
        },
    }

    app.session.has_exited()
}

#[derive(Clone)]
enum GameEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

fn get_game_events() -> mpsc::Receiver<GameEvent> {
    let (tx, rx) = mpsc::channel();

    let tick_tx = tx.clone();
    thread::spawn(move || loop {
        if tick_tx.send(GameEvent::Tick).is_err() {
            break;
        }

        thread::sleep(Duration::from_millis(TICK_RATE_MS))
    });

    thread::spawn(move || loop {
        let evt = match event::read() {
            Ok(Event::Key(key)) => Some(GameEvent::Key(key)),
            Ok(Event::Resize(_, _)) => Some(GameEvent::Resize),
            Ok(_) => None,
            Err(_) => break,
        };

        if let Some(evt) = evt {
            if tx.send(evt).is_err() {
                break;
            }
        }
    });

    rx
}

fn ui(app: &mut App, f: &mut Frame) {
    ui::screen::current_screen(&app.state).render(app, f);
}
