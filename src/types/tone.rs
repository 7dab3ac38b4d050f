//! Tone styles for the explanation generator

use serde::{Deserialize, Serialize};

/// The four tone styles an explanation can be rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneStyle {
    Casual,
    Expert,
    Empathetic,
    Neutral,
}

impl ToneStyle {
    /// All tones, for iteration in tests and help text
    pub const ALL: [ToneStyle; 4] = [
        ToneStyle::Casual,
        ToneStyle::Expert,
        ToneStyle::Empathetic,
        ToneStyle::Neutral,
    ];

    /// Lowercase name as used on the CLI
    pub fn as_str(&self) -> &'static str {
        match self {
            ToneStyle::Casual => "casual",
            ToneStyle::Expert => "expert",
            ToneStyle::Empathetic => "empathetic",
            ToneStyle::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for ToneStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for tone values outside the closed set
///
/// Detected at configuration time; the pipeline never sees a bad tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseToneError {
    pub input: String,
}

impl std::fmt::Display for ParseToneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown tone '{}' (expected one of: casual, expert, empathetic, neutral)",
            self.input
        )
    }
}

impl std::error::Error for ParseToneError {}

impl std::str::FromStr for ToneStyle {
    type Err = ParseToneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "casual" => Ok(ToneStyle::Casual),
            "expert" => Ok(ToneStyle::Expert),
            "empathetic" => Ok(ToneStyle::Empathetic),
            "neutral" => Ok(ToneStyle::Neutral),
            _ => Err(ParseToneError {
                input: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_all_tones() {
        for tone in ToneStyle::ALL {
            assert_eq!(ToneStyle::from_str(tone.as_str()).unwrap(), tone);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(ToneStyle::from_str("EXPERT").unwrap(), ToneStyle::Expert);
    }

    #[test]
    fn test_unknown_tone_fails_fast() {
        let err = ToneStyle::from_str("sarcastic").unwrap_err();
        assert!(err.to_string().contains("sarcastic"));
    }
}
