use super::super::state::{App, Notice, Screen};
use super::Effect;
use std::time::Instant;
use tracing::info;

impl App {
    pub(super) fn handle_toggle_bookmark(&mut self, effects: &mut Vec<Effect>) {
        let id = self.current_question().id;
        let added = self.bookmarks.toggle(id);
        self.notice = Some(Notice {
            text: if added {
                "Added to bookmarks"
            } else {
                "Removed from bookmarks"
            },
            shown_at: Instant::now(),
        });
        info!(id, added, "Toggled bookmark");
        effects.push(Effect::SaveBookmarks);
    }

    pub(super) fn handle_open_bookmark_list(&mut self, effects: &mut Vec<Effect>) {
        self.screen = Screen::BookmarkList;
        self.menu.begin_close();
        effects.push(Effect::StopSpeech);
    }

    pub(super) fn handle_close_bookmark_list(&mut self) {
        self.screen = Screen::Cards;
    }
}

#[cfg(test)]
mod tests {
    use super::super::Effect;
    use super::super::super::state::{App, Screen};
    use crate::config::AppConfig;
    use crate::deck::{Deck, Question};
    use std::path::PathBuf;

    fn sample_deck() -> Deck {
        let questions = vec![
            Question {
                id: 1,
                jp: "A".to_string(),
                en: "a".to_string(),
            },
            Question {
                id: 2,
                jp: "B".to_string(),
                en: "b".to_string(),
            },
        ];
        Deck::from_questions(questions).expect("sample deck")
    }

    fn build_test_app() -> App {
        let deck_path = PathBuf::from(format!(
            "/tmp/reibun-bookmark-test-{}.json",
            std::process::id()
        ));
        let (app, _task) = App::bootstrap(
            sample_deck(),
            AppConfig::default(),
            deck_path,
            Vec::new(),
            None,
        );
        app
    }

    #[test]
    fn toggle_twice_restores_membership() {
        let mut app = build_test_app();
        let mut effects = Vec::new();

        app.handle_toggle_bookmark(&mut effects);
        assert!(app.current_is_bookmarked());
        app.handle_toggle_bookmark(&mut effects);
        assert!(!app.current_is_bookmarked());
    }

    #[test]
    fn toggle_requests_a_durable_write_and_shows_a_notice() {
        let mut app = build_test_app();
        let mut effects = Vec::new();

        app.handle_toggle_bookmark(&mut effects);
        assert!(effects.iter().any(|e| matches!(e, Effect::SaveBookmarks)));
        assert_eq!(
            app.notice.as_ref().map(|notice| notice.text),
            Some("Added to bookmarks")
        );

        effects.clear();
        app.handle_toggle_bookmark(&mut effects);
        assert_eq!(
            app.notice.as_ref().map(|notice| notice.text),
            Some("Removed from bookmarks")
        );
    }

    #[test]
    fn bookmarking_the_second_card_filters_the_list_to_it() {
        let mut app = build_test_app();
        let mut effects = Vec::new();

        app.handle_next_question(&mut effects);
        app.handle_flip_language(&mut effects);
        app.handle_toggle_bookmark(&mut effects);

        let ids: Vec<u64> = app.bookmarked_questions().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn opening_the_list_leaves_the_cards_and_stops_speech() {
        let mut app = build_test_app();
        let mut effects = Vec::new();

        app.handle_open_bookmark_list(&mut effects);
        assert_eq!(app.screen, Screen::BookmarkList);
        assert!(effects.iter().any(|e| matches!(e, Effect::StopSpeech)));

        app.handle_close_bookmark_list();
        assert_eq!(app.screen, Screen::Cards);
    }
}
