use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;
use std::time::Duration;

/// Limits and fixed geometry for card-screen controls.
pub(crate) const MIN_CARD_FONT_SIZE: u32 = 12;
pub(crate) const MAX_CARD_FONT_SIZE: u32 = 72;
pub(crate) const MIN_SWIPE_THRESHOLD: f32 = 10.0;
pub(crate) const MAX_SWIPE_THRESHOLD: f32 = 400.0;
pub(crate) const MIN_TTS_SPEED: f32 = 0.1;
pub(crate) const MAX_TTS_SPEED: f32 = 3.0;
pub(crate) const MIN_TTS_VOLUME: f32 = 0.0;
pub(crate) const MAX_TTS_VOLUME: f32 = 2.0;
pub(crate) const MIN_MENU_SLIDE_MS: u64 = 50;
pub(crate) const MAX_MENU_SLIDE_MS: u64 = 2_000;
pub(crate) const MIN_NOTICE_SECS: f32 = 0.5;
pub(crate) const MAX_NOTICE_SECS: f32 = 10.0;
pub(crate) const MENU_WIDTH_PX: f32 = 250.0;
/// Pointer slop below which a press-release counts as a tap, not a drag.
pub(crate) const TAP_SLOP_PX: f32 = 8.0;
pub(crate) const PROGRESS_BAR_WIDTH_PX: f32 = 100.0;
pub(crate) const TICK_INTERVAL: Duration = Duration::from_millis(16);
pub(crate) const SIGNAL_POLL_INTERVAL: Duration = Duration::from_millis(500);
pub(crate) static LIST_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("bookmark-scroll"));
