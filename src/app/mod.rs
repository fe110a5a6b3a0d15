mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use crate::deck::Deck;
use iced::{Point, Size, Theme, window};
use std::path::PathBuf;

/// Helper to launch the app with the loaded deck and persisted bookmarks.
pub fn run_app(
    deck: Deck,
    config: AppConfig,
    deck_path: PathBuf,
    stored_bookmarks: Vec<u64>,
    start_question_id: Option<u64>,
) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        position: match (config.window_pos_x, config.window_pos_y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => {
                window::Position::Specific(Point::new(x, y))
            }
            _ => window::Position::Default,
        },
        ..window::Settings::default()
    };

    iced::application("Reibun Cards", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| {
            if matches!(app.config.theme, crate::config::ThemeMode::Night) {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
        .run_with(move || {
            App::bootstrap(deck, config, deck_path, stored_bookmarks, start_question_id)
        })
}
