use super::super::state::{App, DragState, Screen, TAP_SLOP_PX};
use super::Effect;
use tracing::{info, warn};

impl App {
    pub(super) fn handle_next_question(&mut self, effects: &mut Vec<Effect>) {
        if self.card.advance(self.deck.len()) {
            effects.push(Effect::StopSpeech);
            info!(
                index = self.card.index + 1,
                total = self.deck.len(),
                "Advanced to the next question"
            );
        }
    }

    pub(super) fn handle_previous_question(&mut self, effects: &mut Vec<Effect>) {
        if self.card.retreat() {
            effects.push(Effect::StopSpeech);
            info!(
                index = self.card.index + 1,
                total = self.deck.len(),
                "Stepped back to the previous question"
            );
        }
    }

    pub(super) fn handle_flip_language(&mut self, effects: &mut Vec<Effect>) {
        self.card.flip();
        effects.push(Effect::StopSpeech);
    }

    pub(super) fn handle_jump_to_question(&mut self, id: u64, effects: &mut Vec<Effect>) {
        let position = match self.deck.position_of(id) {
            Some(position) => position,
            None => {
                warn!(id, "Question id not in deck; jumping to the first card");
                0
            }
        };
        self.card.jump_to(position, self.deck.len());
        self.screen = Screen::Cards;
        effects.push(Effect::StopSpeech);
        info!(id, index = position, "Jumped to question");
    }

    pub(super) fn handle_pointer_pressed(&mut self) {
        if self.screen == Screen::Cards && !self.menu.is_visible() {
            self.drag = Some(DragState {
                origin_x: self.cursor_x,
                origin_y: self.cursor_y,
                current_x: self.cursor_x,
                current_y: self.cursor_y,
            });
        }
    }

    pub(super) fn handle_pointer_moved(&mut self, x: f32, y: f32) {
        self.cursor_x = x;
        self.cursor_y = y;
        if let Some(drag) = &mut self.drag {
            drag.current_x = x;
            drag.current_y = y;
        }
    }

    /// A completed gesture fires at most one command: past the horizontal
    /// threshold it navigates, within the tap slop it flips the card, and
    /// anything in between is not a command.
    pub(super) fn handle_pointer_released(&mut self, effects: &mut Vec<Effect>) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let dx = drag.current_x - drag.origin_x;
        let dy = drag.current_y - drag.origin_y;
        let threshold = self.config.swipe_threshold;

        if dx > threshold {
            self.handle_previous_question(effects);
        } else if dx < -threshold {
            self.handle_next_question(effects);
        } else if dx.abs() <= TAP_SLOP_PX && dy.abs() <= TAP_SLOP_PX {
            self.handle_flip_language(effects);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::Effect;
    use super::super::super::state::{App, DisplayLanguage, Screen};
    use crate::config::AppConfig;
    use crate::deck::{Deck, Question};
    use std::path::PathBuf;

    fn sample_deck(count: usize) -> Deck {
        let questions = (0..count)
            .map(|i| Question {
                id: (i + 1) as u64,
                jp: format!("日本語の文 {i}"),
                en: format!("English sentence {i}"),
            })
            .collect();
        Deck::from_questions(questions).expect("sample deck")
    }

    fn build_test_app(count: usize) -> App {
        let deck_path = PathBuf::from(format!(
            "/tmp/reibun-nav-test-{}-{}.json",
            std::process::id(),
            count
        ));
        let (app, _task) = App::bootstrap(
            sample_deck(count),
            AppConfig::default(),
            deck_path,
            Vec::new(),
            None,
        );
        app
    }

    fn release_after_drag(app: &mut App, dx: f32, effects: &mut Vec<Effect>) {
        app.handle_pointer_moved(200.0, 300.0);
        app.handle_pointer_pressed();
        app.handle_pointer_moved(200.0 + dx, 300.0);
        app.handle_pointer_released(effects);
    }

    #[test]
    fn next_then_previous_round_trips_but_resets_language() {
        let mut app = build_test_app(5);
        app.card.flip();
        assert_eq!(app.card.language, DisplayLanguage::English);

        let mut effects = Vec::new();
        app.handle_next_question(&mut effects);
        assert_eq!(app.card.index, 1);
        assert_eq!(app.card.language, DisplayLanguage::Japanese);

        app.handle_previous_question(&mut effects);
        assert_eq!(app.card.index, 0);
        assert_eq!(app.card.language, DisplayLanguage::Japanese);
    }

    #[test]
    fn navigation_stops_any_active_speech() {
        let mut app = build_test_app(5);
        let mut effects = Vec::new();
        app.handle_next_question(&mut effects);
        assert!(effects.iter().any(|e| matches!(e, Effect::StopSpeech)));
    }

    #[test]
    fn next_at_the_last_card_changes_nothing() {
        let mut app = build_test_app(3);
        app.card.jump_to(2, app.deck.len());
        app.card.flip();

        let mut effects = Vec::new();
        app.handle_next_question(&mut effects);
        assert_eq!(app.card.index, 2);
        assert_eq!(app.card.language, DisplayLanguage::English);
        assert!(effects.is_empty());
    }

    #[test]
    fn previous_at_the_first_card_changes_nothing() {
        let mut app = build_test_app(3);
        let mut effects = Vec::new();
        app.handle_previous_question(&mut effects);
        assert_eq!(app.card.index, 0);
        assert!(effects.is_empty());
    }

    #[test]
    fn jump_to_unknown_id_falls_back_to_the_first_card() {
        let mut app = build_test_app(4);
        app.card.jump_to(3, app.deck.len());
        app.screen = Screen::BookmarkList;

        let mut effects = Vec::new();
        app.handle_jump_to_question(999, &mut effects);
        assert_eq!(app.card.index, 0);
        assert_eq!(app.screen, Screen::Cards);
    }

    #[test]
    fn jump_returns_to_the_card_screen_at_the_target() {
        let mut app = build_test_app(4);
        app.screen = Screen::BookmarkList;

        let mut effects = Vec::new();
        app.handle_jump_to_question(3, &mut effects);
        assert_eq!(app.card.index, 2);
        assert_eq!(app.screen, Screen::Cards);
        assert!(effects.iter().any(|e| matches!(e, Effect::StopSpeech)));
    }

    #[test]
    fn rightward_drag_past_threshold_goes_back() {
        let mut app = build_test_app(5);
        app.card.jump_to(2, app.deck.len());

        let mut effects = Vec::new();
        release_after_drag(&mut app, 80.0, &mut effects);
        assert_eq!(app.card.index, 1);
        assert!(app.drag.is_none());
    }

    #[test]
    fn leftward_drag_past_threshold_advances() {
        let mut app = build_test_app(5);
        let mut effects = Vec::new();
        release_after_drag(&mut app, -80.0, &mut effects);
        assert_eq!(app.card.index, 1);
    }

    #[test]
    fn sub_threshold_drag_is_not_a_command() {
        let mut app = build_test_app(5);
        let mut effects = Vec::new();
        release_after_drag(&mut app, 30.0, &mut effects);
        assert_eq!(app.card.index, 0);
        assert_eq!(app.card.language, DisplayLanguage::Japanese);
        assert!(effects.is_empty());
    }

    #[test]
    fn tap_flips_the_card() {
        let mut app = build_test_app(5);
        let mut effects = Vec::new();
        release_after_drag(&mut app, 0.0, &mut effects);
        assert_eq!(app.card.index, 0);
        assert_eq!(app.card.language, DisplayLanguage::English);
    }

    #[test]
    fn drags_are_ignored_while_the_menu_is_open() {
        let mut app = build_test_app(5);
        app.menu.begin_open();

        let mut effects = Vec::new();
        release_after_drag(&mut app, -80.0, &mut effects);
        assert_eq!(app.card.index, 0);
    }
}
