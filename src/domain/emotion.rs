// SPDX-License-Identifier: MPL-2.0
//! The closed set of emotion labels shown by the demo.

use std::fmt;

/// One of the five labels the demo can display.
///
/// The set is closed: every value of this type is a valid label, so no
/// validation is needed anywhere the label flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EmotionLabel {
    Happy,
    Sad,
    Angry,
    Surprised,
    #[default]
    Neutral,
}

impl EmotionLabel {
    /// Every label, in display order.
    pub const ALL: [EmotionLabel; 5] = [
        EmotionLabel::Happy,
        EmotionLabel::Sad,
        EmotionLabel::Angry,
        EmotionLabel::Surprised,
        EmotionLabel::Neutral,
    ];

    /// Stable English name, used in diagnostics and logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EmotionLabel::Happy => "Happy",
            EmotionLabel::Sad => "Sad",
            EmotionLabel::Angry => "Angry",
            EmotionLabel::Surprised => "Surprised",
            EmotionLabel::Neutral => "Neutral",
        }
    }

    /// Returns the i18n message key for the localized label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            EmotionLabel::Happy => "emotion-happy",
            EmotionLabel::Sad => "emotion-sad",
            EmotionLabel::Angry => "emotion-angry",
            EmotionLabel::Surprised => "emotion-surprised",
            EmotionLabel::Neutral => "emotion-neutral",
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_is_neutral() {
        assert_eq!(EmotionLabel::default(), EmotionLabel::Neutral);
    }

    #[test]
    fn all_contains_five_distinct_labels() {
        let labels: HashSet<EmotionLabel> = EmotionLabel::ALL.iter().copied().collect();
        assert_eq!(EmotionLabel::ALL.len(), 5);
        assert_eq!(labels.len(), 5);
    }

    #[test]
    fn display_uses_english_name() {
        assert_eq!(EmotionLabel::Surprised.to_string(), "Surprised");
    }
}
