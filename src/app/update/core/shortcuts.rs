use super::super::super::messages::Message;
use super::super::super::state::{App, Screen};
use iced::keyboard::{Key, Modifiers, key};

impl App {
    pub(in crate::app::update) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = match key.as_ref() {
            Key::Named(key::Named::Space) => "space".to_string(),
            Key::Named(key::Named::ArrowLeft) => "left".to_string(),
            Key::Named(key::Named::ArrowRight) => "right".to_string(),
            Key::Named(key::Named::Escape) => "escape".to_string(),
            Key::Character(ch) => ch.to_ascii_lowercase(),
            _ => return None,
        };

        // Escape always backs out of whatever overlay is on top.
        if pressed == "escape" {
            return if self.screen == Screen::BookmarkList {
                Some(Message::CloseBookmarkList)
            } else if self.menu.is_visible() {
                Some(Message::CloseMenu)
            } else {
                None
            };
        }

        if Self::shortcut_matches(&self.config.key_next_card, "right", &pressed, modifiers) {
            Some(Message::NextQuestion)
        } else if Self::shortcut_matches(&self.config.key_prev_card, "left", &pressed, modifiers) {
            Some(Message::PreviousQuestion)
        } else if Self::shortcut_matches(&self.config.key_flip_card, "space", &pressed, modifiers) {
            Some(Message::FlipLanguage)
        } else if Self::shortcut_matches(
            &self.config.key_toggle_bookmark,
            "b",
            &pressed,
            modifiers,
        ) {
            Some(Message::ToggleBookmark)
        } else if Self::shortcut_matches(&self.config.key_speak, "s", &pressed, modifiers) {
            Some(Message::SpeakCurrent)
        } else if Self::shortcut_matches(&self.config.key_toggle_menu, "m", &pressed, modifiers) {
            Some(Message::ToggleMenu)
        } else if Self::shortcut_matches(&self.config.key_safe_quit, "q", &pressed, modifiers) {
            Some(Message::SafeQuit)
        } else {
            None
        }
    }

    pub(in crate::app::update) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut_token(raw, fallback);

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }

        let required_key = required_key.unwrap_or(fallback);
        if pressed != required_key {
            return false;
        }

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && modifiers.shift() == required_shift
    }

    pub(in crate::app::update) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            fallback.to_string()
        } else {
            normalized.replace("spacebar", "space")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::Modifiers;

    #[test]
    fn normalizes_spacebar_alias() {
        assert_eq!(App::normalize_shortcut_token(" SpaceBar ", "x"), "space");
    }

    #[test]
    fn matches_plain_character_shortcut() {
        assert!(App::shortcut_matches("b", "x", "b", Modifiers::empty()));
    }

    #[test]
    fn matches_ctrl_shortcut() {
        assert!(App::shortcut_matches("ctrl+b", "x", "b", Modifiers::CTRL));
    }

    #[test]
    fn rejects_unexpected_extra_modifier() {
        assert!(!App::shortcut_matches(
            "ctrl+b",
            "x",
            "b",
            Modifiers::CTRL | Modifiers::SHIFT,
        ));
    }

    #[test]
    fn empty_binding_falls_back() {
        assert!(App::shortcut_matches("  ", "right", "right", Modifiers::empty()));
    }
}
