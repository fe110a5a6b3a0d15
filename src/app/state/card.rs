/// Which of the two sentence fields is currently rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayLanguage {
    Japanese,
    English,
}

impl DisplayLanguage {
    pub(in crate::app) fn flipped(self) -> Self {
        match self {
            DisplayLanguage::Japanese => DisplayLanguage::English,
            DisplayLanguage::English => DisplayLanguage::Japanese,
        }
    }

    pub(in crate::app) fn badge(self) -> &'static str {
        match self {
            DisplayLanguage::Japanese => "JP",
            DisplayLanguage::English => "EN",
        }
    }
}

/// Position and display-language model for the card screen.
///
/// The index is always valid for the loaded deck; the language resets to
/// Japanese whenever the position changes, never on a manual flip.
pub struct CardState {
    pub(in crate::app) index: usize,
    pub(in crate::app) language: DisplayLanguage,
}

impl CardState {
    pub(in crate::app) fn new(index: usize) -> Self {
        CardState {
            index,
            language: DisplayLanguage::Japanese,
        }
    }

    /// Advance to the next question. Returns false at the last question.
    pub(in crate::app) fn advance(&mut self, question_count: usize) -> bool {
        if self.index + 1 < question_count {
            self.index += 1;
            self.language = DisplayLanguage::Japanese;
            true
        } else {
            false
        }
    }

    /// Step back to the previous question. Returns false at the first one.
    pub(in crate::app) fn retreat(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            self.language = DisplayLanguage::Japanese;
            true
        } else {
            false
        }
    }

    pub(in crate::app) fn flip(&mut self) {
        self.language = self.language.flipped();
    }

    pub(in crate::app) fn jump_to(&mut self, index: usize, question_count: usize) {
        self.index = index.min(question_count.saturating_sub(1));
        self.language = DisplayLanguage::Japanese;
    }

    pub(in crate::app) fn is_first(&self) -> bool {
        self.index == 0
    }

    pub(in crate::app) fn is_last(&self, question_count: usize) -> bool {
        self.index + 1 >= question_count
    }
}

/// Completed fraction of the deck; 0 at the first question and 1 exactly at
/// the last.
pub(crate) fn progress_fraction(index: usize, question_count: usize) -> f32 {
    if index == 0 || question_count <= 1 {
        0.0
    } else {
        index as f32 / (question_count - 1) as f32
    }
}
