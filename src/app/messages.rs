use iced::keyboard::{Key, Modifiers};
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    NextQuestion,
    PreviousQuestion,
    FlipLanguage,
    JumpToQuestion(u64),
    ToggleBookmark,
    SpeakCurrent,
    ToggleTheme,
    ToggleMenu,
    CloseMenu,
    OpenBookmarkList,
    CloseBookmarkList,
    SafeQuit,
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    PointerPressed,
    PointerMoved {
        x: f32,
        y: f32,
    },
    PointerReleased,
    WindowResized {
        width: f32,
        height: f32,
    },
    WindowMoved {
        x: f32,
        y: f32,
    },
    PollSystemSignals,
    Tick(Instant),
}
