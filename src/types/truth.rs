//! Belnap four-valued truth definitions

use serde::{Deserialize, Serialize};

/// The four possible truth values of a proposition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Truth {
    /// Supporting evidence outweighs opposing
    True,
    /// Opposing evidence outweighs supporting
    False,
    /// Both supporting and opposing evidence present (contradiction)
    Both,
    /// No usable evidence (unknown)
    Neither,
}

impl std::fmt::Display for Truth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Truth::True => "True",
            Truth::False => "False",
            Truth::Both => "Both",
            Truth::Neither => "Neither",
        };
        write!(f, "{}", name)
    }
}
