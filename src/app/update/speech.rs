use super::super::state::{App, DisplayLanguage};
use super::Effect;
use crate::cache::tts_dir;
use tracing::warn;

impl App {
    /// Spoken playback is offered for the English rendering only; requests
    /// made while Japanese is shown are dropped.
    pub(super) fn handle_speak_current(&mut self, effects: &mut Vec<Effect>) {
        if self.card.language != DisplayLanguage::English {
            return;
        }
        effects.push(Effect::Speak {
            text: self.current_question().en.clone(),
        });
    }

    /// Any prior playback is cancelled before a new one starts; failures are
    /// logged and leave the app silent.
    pub(super) fn start_speech(&mut self, text: &str) {
        self.stop_playback();
        let Some(engine) = self.speech.engine.clone() else {
            warn!("Speech requested but no engine is available");
            return;
        };
        let cache_root = tts_dir(&self.deck_path);
        match engine.speak(
            &cache_root,
            text,
            self.config.tts_speed,
            self.config.tts_volume,
        ) {
            Ok(playback) => self.speech.playback = Some(playback),
            Err(err) => warn!("Speech playback failed: {err:#}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::Effect;
    use super::super::super::state::{App, DisplayLanguage};
    use crate::config::AppConfig;
    use crate::deck::{Deck, Question};
    use std::path::PathBuf;

    fn build_test_app() -> App {
        let questions = vec![
            Question {
                id: 1,
                jp: "こんにちは。".to_string(),
                en: "Hello.".to_string(),
            },
            Question {
                id: 2,
                jp: "さようなら。".to_string(),
                en: "Goodbye.".to_string(),
            },
        ];
        let deck = Deck::from_questions(questions).expect("sample deck");
        let deck_path = PathBuf::from(format!(
            "/tmp/reibun-speech-test-{}.json",
            std::process::id()
        ));
        let (app, _task) =
            App::bootstrap(deck, AppConfig::default(), deck_path, Vec::new(), None);
        app
    }

    #[test]
    fn speaking_is_unavailable_while_japanese_is_shown() {
        let mut app = build_test_app();
        assert_eq!(app.card.language, DisplayLanguage::Japanese);

        let mut effects = Vec::new();
        app.handle_speak_current(&mut effects);
        assert!(effects.is_empty());
    }

    #[test]
    fn speaking_requests_the_english_sentence() {
        let mut app = build_test_app();
        let mut effects = Vec::new();
        app.handle_flip_language(&mut effects);

        effects.clear();
        app.handle_speak_current(&mut effects);
        assert!(effects.iter().any(|e| match e {
            Effect::Speak { text } => text == "Hello.",
            _ => false,
        }));
    }

    #[test]
    fn flipping_back_to_japanese_cancels_playback() {
        let mut app = build_test_app();
        let mut effects = Vec::new();
        app.handle_flip_language(&mut effects);

        effects.clear();
        app.handle_flip_language(&mut effects);
        assert!(effects.iter().any(|e| matches!(e, Effect::StopSpeech)));
        assert!(!app.speech.is_speaking());
    }
}
