use crate::speech::{SpeechEngine, SpeechPlayback};

/// Runtime speech model (tuning lives in `AppConfig`).
pub struct SpeechState {
    pub(in crate::app) engine: Option<SpeechEngine>,
    pub(in crate::app) playback: Option<SpeechPlayback>,
}

impl SpeechState {
    pub(in crate::app) fn new(engine: Option<SpeechEngine>) -> Self {
        SpeechState {
            engine,
            playback: None,
        }
    }

    pub(in crate::app) fn is_speaking(&self) -> bool {
        self.playback
            .as_ref()
            .map(|playback| !playback.is_finished())
            .unwrap_or(false)
    }
}
