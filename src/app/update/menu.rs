use super::super::state::{App, MenuPhase, Screen};
use super::Effect;
use crate::config::ThemeMode;

impl App {
    pub(super) fn handle_toggle_menu(&mut self) {
        if self.screen != Screen::Cards {
            return;
        }
        match self.menu.phase {
            MenuPhase::Closed | MenuPhase::Closing => self.menu.begin_open(),
            MenuPhase::Open | MenuPhase::Opening => self.menu.begin_close(),
        }
        // An open menu swallows card gestures; drop any half-finished drag.
        self.drag = None;
    }

    pub(super) fn handle_close_menu(&mut self) {
        self.menu.begin_close();
    }

    pub(super) fn handle_toggle_theme(&mut self, effects: &mut Vec<Effect>) {
        self.config.theme = match self.config.theme {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        };
        effects.push(Effect::SaveConfig);
    }
}

#[cfg(test)]
mod tests {
    use super::super::Effect;
    use super::super::super::state::{App, MenuPhase, Screen};
    use crate::config::{AppConfig, ThemeMode};
    use crate::deck::{Deck, Question};
    use std::path::PathBuf;

    fn build_test_app() -> App {
        let questions = (1..=4)
            .map(|id| Question {
                id,
                jp: format!("文 {id}"),
                en: format!("Sentence {id}"),
            })
            .collect();
        let deck = Deck::from_questions(questions).expect("sample deck");
        let deck_path = PathBuf::from(format!(
            "/tmp/reibun-menu-test-{}.json",
            std::process::id()
        ));
        let (app, _task) =
            App::bootstrap(deck, AppConfig::default(), deck_path, Vec::new(), None);
        app
    }

    #[test]
    fn toggle_opens_then_reverses_mid_slide() {
        let mut app = build_test_app();

        app.handle_toggle_menu();
        assert_eq!(app.menu.phase, MenuPhase::Opening);

        app.menu.advance(0.4);
        app.handle_toggle_menu();
        assert_eq!(app.menu.phase, MenuPhase::Closing);
        assert!(app.menu.progress > 0.0);
    }

    #[test]
    fn toggle_is_ignored_on_the_bookmark_list() {
        let mut app = build_test_app();
        app.screen = Screen::BookmarkList;
        app.handle_toggle_menu();
        assert_eq!(app.menu.phase, MenuPhase::Closed);
    }

    #[test]
    fn theme_toggle_flips_the_mode_and_saves() {
        let mut app = build_test_app();
        let before = app.config.theme;

        let mut effects = Vec::new();
        app.handle_toggle_theme(&mut effects);
        assert_ne!(app.config.theme, before);
        assert!(effects.iter().any(|e| matches!(e, Effect::SaveConfig)));

        app.handle_toggle_theme(&mut effects);
        assert_eq!(app.config.theme, before);
    }

    #[test]
    fn default_theme_is_day() {
        let app = build_test_app();
        assert_eq!(app.config.theme, ThemeMode::Day);
    }
}
