use std::time::Instant;

/// Which top-level screen is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Cards,
    BookmarkList,
}

/// Transient confirmation toast shown after a bookmark toggle.
pub struct Notice {
    pub(in crate::app) text: &'static str,
    pub(in crate::app) shown_at: Instant,
}

/// In-flight pointer drag on the card screen.
pub struct DragState {
    pub(in crate::app) origin_x: f32,
    pub(in crate::app) origin_y: f32,
    pub(in crate::app) current_x: f32,
    pub(in crate::app) current_y: f32,
}
