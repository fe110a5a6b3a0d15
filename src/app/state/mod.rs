mod bookmarks;
mod card;
mod constants;
mod menu;
mod speech;
mod ui;

use crate::cache::{save_bookmarks, save_deck_config};
use crate::config::AppConfig;
use crate::deck::{Deck, Question};
use crate::speech::SpeechEngine;
use iced::Task;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

use super::messages::Message;

pub(in crate::app) use bookmarks::BookmarkSet;
pub(crate) use card::{CardState, DisplayLanguage, progress_fraction};
pub(crate) use constants::*;
pub(in crate::app) use menu::{MenuPhase, MenuState};
pub(in crate::app) use speech::SpeechState;
pub(in crate::app) use ui::{DragState, Notice, Screen};

fn speech_engine_from_config(config: &AppConfig) -> Option<SpeechEngine> {
    SpeechEngine::new(
        config.tts_model_path.clone().into(),
        config.tts_espeak_path.clone().into(),
    )
    .ok()
}

/// Core application state composed of sub-models.
pub struct App {
    pub(super) deck: Deck,
    pub(super) card: CardState,
    pub(super) bookmarks: BookmarkSet,
    pub(super) speech: SpeechState,
    pub(super) menu: MenuState,
    pub(super) screen: Screen,
    pub(super) notice: Option<Notice>,
    pub(super) drag: Option<DragState>,
    pub(super) cursor_x: f32,
    pub(super) cursor_y: f32,
    pub(super) last_tick: Option<Instant>,
    pub(super) config: AppConfig,
    pub(super) deck_path: PathBuf,
}

impl App {
    pub(super) fn current_question(&self) -> &Question {
        let index = self.card.index.min(self.deck.len().saturating_sub(1));
        &self.deck.questions()[index]
    }

    pub(super) fn card_text(&self) -> &str {
        let question = self.current_question();
        match self.card.language {
            DisplayLanguage::Japanese => &question.jp,
            DisplayLanguage::English => &question.en,
        }
    }

    pub(super) fn position_label(&self) -> String {
        format!("{} / {}", self.card.index + 1, self.deck.len())
    }

    pub(super) fn progress(&self) -> f32 {
        progress_fraction(self.card.index, self.deck.len())
    }

    pub(super) fn current_is_bookmarked(&self) -> bool {
        self.bookmarks.is_bookmarked(self.current_question().id)
    }

    /// Bookmarked questions in dataset order.
    pub(super) fn bookmarked_questions(&self) -> Vec<&Question> {
        self.deck
            .questions()
            .iter()
            .filter(|question| self.bookmarks.is_bookmarked(question.id))
            .collect()
    }

    pub(super) fn stop_playback(&mut self) {
        if let Some(playback) = self.speech.playback.take() {
            playback.stop();
        }
    }

    /// Optimistic-write policy: the in-memory set is already current, the
    /// durable write may fail and only raises the unsynced marker.
    pub(super) fn persist_bookmarks(&mut self) {
        let ids = self.bookmarks.as_vec();
        match save_bookmarks(&self.deck_path, &ids) {
            Ok(()) => self.bookmarks.unsynced = false,
            Err(err) => {
                self.bookmarks.unsynced = true;
                warn!("Failed to persist bookmarks: {err:#}");
            }
        }
    }

    pub(super) fn save_deck_config(&self) {
        save_deck_config(&self.deck_path, &self.config);
    }

    /// The fast tick subscription only runs while something on screen is
    /// time-driven.
    pub(super) fn needs_ticks(&self) -> bool {
        self.menu.is_animating() || self.notice.is_some() || self.speech.playback.is_some()
    }

    pub(super) fn bootstrap(
        deck: Deck,
        mut config: AppConfig,
        deck_path: PathBuf,
        stored_bookmarks: Vec<u64>,
        start_question_id: Option<u64>,
    ) -> (App, Task<Message>) {
        clamp_config(&mut config);

        let initial_index = match start_question_id {
            Some(id) => match deck.position_of(id) {
                Some(position) => position,
                None => {
                    warn!(id, "Deep-link question id not found; starting from the first card");
                    0
                }
            },
            None => 0,
        };
        let bookmarks = BookmarkSet::from_stored(stored_bookmarks, &deck);

        let app = App {
            card: CardState::new(initial_index),
            bookmarks,
            speech: SpeechState::new(speech_engine_from_config(&config)),
            menu: MenuState::new(),
            screen: Screen::Cards,
            notice: None,
            drag: None,
            cursor_x: 0.0,
            cursor_y: 0.0,
            last_tick: None,
            deck,
            config,
            deck_path,
        };

        info!(
            questions = app.deck.len(),
            start_index = app.card.index,
            bookmarks = app.bookmarks.len(),
            night_mode = matches!(app.config.theme, crate::config::ThemeMode::Night),
            "Initialized app state"
        );

        (app, Task::none())
    }
}

fn clamp_config(config: &mut AppConfig) {
    fn normalize_key_binding(value: &mut String, fallback: String) {
        let normalized = value.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            *value = fallback;
        } else {
            *value = normalized;
        }
    }

    config.card_font_size = config
        .card_font_size
        .clamp(MIN_CARD_FONT_SIZE, MAX_CARD_FONT_SIZE);
    config.window_width = config.window_width.clamp(320.0, 7680.0);
    config.window_height = config.window_height.clamp(240.0, 4320.0);
    config.window_pos_x = config.window_pos_x.filter(|v| v.is_finite());
    config.window_pos_y = config.window_pos_y.filter(|v| v.is_finite());
    config.swipe_threshold = config
        .swipe_threshold
        .clamp(MIN_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD);
    config.menu_slide_ms = config.menu_slide_ms.clamp(MIN_MENU_SLIDE_MS, MAX_MENU_SLIDE_MS);
    config.notice_secs = config.notice_secs.clamp(MIN_NOTICE_SECS, MAX_NOTICE_SECS);
    config.tts_speed = config.tts_speed.clamp(MIN_TTS_SPEED, MAX_TTS_SPEED);
    config.tts_volume = config.tts_volume.clamp(MIN_TTS_VOLUME, MAX_TTS_VOLUME);
    normalize_key_binding(&mut config.key_next_card, "right".to_string());
    normalize_key_binding(&mut config.key_prev_card, "left".to_string());
    normalize_key_binding(&mut config.key_flip_card, "space".to_string());
    normalize_key_binding(&mut config.key_toggle_bookmark, "b".to_string());
    normalize_key_binding(&mut config.key_speak, "s".to_string());
    normalize_key_binding(&mut config.key_toggle_menu, "m".to_string());
    normalize_key_binding(&mut config.key_safe_quit, "q".to_string());
}

#[cfg(test)]
mod tests {
    use super::{App, Screen};
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

    fn bootstrap(start_question_id: Option<u64>) -> App {
        let deck_path = PathBuf::from(format!(
            "/tmp/reibun-state-test-{}.json",
            std::process::id()
        ));
        let (app, _task) = App::bootstrap(
            sample_deck(),
            AppConfig::default(),
            deck_path,
            Vec::new(),
            start_question_id,
        );
        app
    }

    #[test]
    fn deep_link_seeds_the_initial_index() {
        let app = bootstrap(Some(2));
        assert_eq!(app.card.index, 1);
        assert_eq!(app.screen, Screen::Cards);
    }

    #[test]
    fn unknown_deep_link_falls_back_to_the_first_card() {
        let app = bootstrap(Some(404));
        assert_eq!(app.card.index, 0);
    }

    #[test]
    fn bookmarked_questions_preserve_dataset_order() {
        let mut app = bootstrap(None);
        app.bookmarks.toggle(2);
        app.bookmarks.toggle(1);
        let ids: Vec<u64> = app.bookmarked_questions().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
