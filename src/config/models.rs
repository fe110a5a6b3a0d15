use serde::Deserialize;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "crate::config::defaults::default_card_font_size")]
    pub card_font_size: u32,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default)]
    pub window_pos_x: Option<f32>,
    #[serde(default)]
    pub window_pos_y: Option<f32>,
    #[serde(default = "crate::config::defaults::default_swipe_threshold")]
    pub swipe_threshold: f32,
    #[serde(default = "crate::config::defaults::default_menu_slide_ms")]
    pub menu_slide_ms: u64,
    #[serde(default = "crate::config::defaults::default_notice_secs")]
    pub notice_secs: f32,
    #[serde(default = "crate::config::defaults::default_tts_model")]
    pub tts_model_path: String,
    #[serde(default = "crate::config::defaults::default_tts_espeak_path")]
    pub tts_espeak_path: String,
    #[serde(default = "crate::config::defaults::default_tts_speed")]
    pub tts_speed: f32,
    #[serde(default = "crate::config::defaults::default_tts_volume")]
    pub tts_volume: f32,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_key_next_card")]
    pub key_next_card: String,
    #[serde(default = "crate::config::defaults::default_key_prev_card")]
    pub key_prev_card: String,
    #[serde(default = "crate::config::defaults::default_key_flip_card")]
    pub key_flip_card: String,
    #[serde(default = "crate::config::defaults::default_key_toggle_bookmark")]
    pub key_toggle_bookmark: String,
    #[serde(default = "crate::config::defaults::default_key_speak")]
    pub key_speak: String,
    #[serde(default = "crate::config::defaults::default_key_toggle_menu")]
    pub key_toggle_menu: String,
    #[serde(default = "crate::config::defaults::default_key_safe_quit")]
    pub key_safe_quit: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::Day,
            card_font_size: crate::config::defaults::default_card_font_size(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            window_pos_x: None,
            window_pos_y: None,
            swipe_threshold: crate::config::defaults::default_swipe_threshold(),
            menu_slide_ms: crate::config::defaults::default_menu_slide_ms(),
            notice_secs: crate::config::defaults::default_notice_secs(),
            tts_model_path: crate::config::defaults::default_tts_model(),
            tts_espeak_path: crate::config::defaults::default_tts_espeak_path(),
            tts_speed: crate::config::defaults::default_tts_speed(),
            tts_volume: crate::config::defaults::default_tts_volume(),
            log_level: crate::config::defaults::default_log_level(),
            key_next_card: crate::config::defaults::default_key_next_card(),
            key_prev_card: crate::config::defaults::default_key_prev_card(),
            key_flip_card: crate::config::defaults::default_key_flip_card(),
            key_toggle_bookmark: crate::config::defaults::default_key_toggle_bookmark(),
            key_speak: crate::config::defaults::default_key_speak(),
            key_toggle_menu: crate::config::defaults::default_key_toggle_menu(),
            key_safe_quit: crate::config::defaults::default_key_safe_quit(),
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    Night,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Day
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Debug
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{}", label)
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
