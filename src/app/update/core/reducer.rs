use super::super::super::messages::Message;
use super::super::super::state::{App, TICK_INTERVAL};
use super::super::Effect;
use std::time::{Duration, Instant};

impl App {
    pub(in crate::app::update) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::NextQuestion => self.handle_next_question(&mut effects),
            Message::PreviousQuestion => self.handle_previous_question(&mut effects),
            Message::FlipLanguage => self.handle_flip_language(&mut effects),
            Message::JumpToQuestion(id) => self.handle_jump_to_question(id, &mut effects),
            Message::ToggleBookmark => self.handle_toggle_bookmark(&mut effects),
            Message::SpeakCurrent => self.handle_speak_current(&mut effects),
            Message::ToggleTheme => self.handle_toggle_theme(&mut effects),
            Message::ToggleMenu => self.handle_toggle_menu(),
            Message::CloseMenu => self.handle_close_menu(),
            Message::OpenBookmarkList => self.handle_open_bookmark_list(&mut effects),
            Message::CloseBookmarkList => self.handle_close_bookmark_list(),
            Message::SafeQuit => effects.push(Effect::QuitSafely),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::PointerPressed => self.handle_pointer_pressed(),
            Message::PointerMoved { x, y } => self.handle_pointer_moved(x, y),
            Message::PointerReleased => self.handle_pointer_released(&mut effects),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height, &mut effects);
            }
            Message::WindowMoved { x, y } => {
                self.handle_window_moved(x, y, &mut effects);
            }
            Message::PollSystemSignals => self.handle_poll_system_signals(&mut effects),
            Message::Tick(now) => self.handle_tick(now),
        }

        effects
    }

    fn handle_window_resized(&mut self, width: f32, height: f32, effects: &mut Vec<Effect>) {
        if width.is_finite() && height.is_finite() {
            self.config.window_width = width;
            self.config.window_height = height;
            effects.push(Effect::SaveConfig);
        }
    }

    fn handle_window_moved(&mut self, x: f32, y: f32, effects: &mut Vec<Effect>) {
        if x.is_finite() && y.is_finite() {
            self.config.window_pos_x = Some(x);
            self.config.window_pos_y = Some(y);
            effects.push(Effect::SaveConfig);
        }
    }

    fn handle_poll_system_signals(&mut self, effects: &mut Vec<Effect>) {
        if crate::take_sigint_requested() {
            effects.push(Effect::QuitSafely);
        }
    }

    fn handle_tick(&mut self, now: Instant) {
        // A restarted tick subscription must not replay the idle gap into the
        // animation.
        let dt = self
            .last_tick
            .map(|previous| now.saturating_duration_since(previous))
            .unwrap_or(TICK_INTERVAL)
            .min(Duration::from_millis(100));
        self.last_tick = Some(now);

        if self.menu.is_animating() {
            let slide = Duration::from_millis(self.config.menu_slide_ms.max(1)).as_secs_f32();
            self.menu.advance(dt.as_secs_f32() / slide);
        }

        if let Some(notice) = &self.notice {
            let shown_for = now.saturating_duration_since(notice.shown_at).as_secs_f32();
            if shown_for >= self.config.notice_secs {
                self.notice = None;
            }
        }

        if self
            .speech
            .playback
            .as_ref()
            .map(|playback| playback.is_finished())
            .unwrap_or(false)
        {
            self.speech.playback = None;
        }

        if !self.needs_ticks() {
            self.last_tick = None;
        }
    }
}
