use ratatui::Frame;

use crate::{
    ui::breakdown::render_breakdown, ui::recent::render_recent_results, App, AppState,
};

/// A UI Screen boundary: each app state renders through one of these
pub trait Screen {
    fn render(&self, app: &mut App, f: &mut Frame);
}

/// Menu screen - renders the main menu using the existing App widget
pub struct MenuScreen;

impl Screen for MenuScreen {
    fn render(&self, app: &mut App, f: &mut Frame) {
        f.render_widget(&*app, f.area());
    }
}

/// Playing screen - renders the scramble prompt using the existing App widget
pub struct PlayingScreen;

impl Screen for PlayingScreen {
    fn render(&self, app: &mut App, f: &mut Frame) {
        f.render_widget(&*app, f.area());
    }
}

/// Round over screen - renders the win/loss banner using the existing App widget
pub struct RoundOverScreen;

impl Screen for RoundOverScreen {
    fn render(&self, app: &mut App, f: &mut Frame) {
        f.render_widget(&*app, f.area());
    }
}

/// Recent results screen - uses dedicated renderer
pub struct RecentResultsScreen;

impl Screen for RecentResultsScreen {
    fn render(&self, app: &mut App, f: &mut Frame) {
        render_recent_results(app, f);
    }
}

/// Breakdown screen - uses dedicated renderer
pub struct BreakdownScreen;

impl Screen for BreakdownScreen {
    fn render(&self, app: &mut App, f: &mut Frame) {
        render_breakdown(app, f);
    }
}

/// Helper to construct the appropriate screen for the current state
pub fn current_screen(state: &AppState) -> Box<dyn Screen> {
    match state {
        AppState::Menu => Box::new(MenuScreen),
        AppState::Playing => Box::new(PlayingScreen),
        AppState::RoundOver => Box::new(RoundOverScreen),
        AppState::RecentResults => Box::new(RecentResultsScreen),
        AppState::Breakdown => Box::new(BreakdownScreen),
    }
}
