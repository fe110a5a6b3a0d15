pub(crate) fn default_card_font_size() -> u32 {
    24
}

pub(crate) fn default_window_width() -> f32 {
    420.0
}

pub(crate) fn default_window_height() -> f32 {
    760.0
}

pub(crate) fn default_swipe_threshold() -> f32 {
    50.0
}

pub(crate) fn default_menu_slide_ms() -> u64 {
    220
}

pub(crate) fn default_notice_secs() -> f32 {
    2.0
}

pub(crate) fn default_tts_model() -> String {
    "/usr/share/piper-voices/en/en_US/ryan/high/en_US-ryan-high.onnx".to_string()
}

pub(crate) fn default_tts_espeak_path() -> String {
    "/usr/share".to_string()
}

pub(crate) fn default_tts_speed() -> f32 {
    1.0
}

pub(crate) fn default_tts_volume() -> f32 {
    1.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_key_next_card() -> String {
    "right".to_string()
}

pub(crate) fn default_key_prev_card() -> String {
    "left".to_string()
}

pub(crate) fn default_key_flip_card() -> String {
    "space".to_string()
}

pub(crate) fn default_key_toggle_bookmark() -> String {
    "b".to_string()
}

pub(crate) fn default_key_speak() -> String {
    "s".to_string()
}

pub(crate) fn default_key_toggle_menu() -> String {
    "m".to_string()
}

pub(crate) fn default_key_safe_quit() -> String {
    "q".to_string()
}
