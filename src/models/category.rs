//! Transaction category model
//!
//! Categories are a closed set with a fixed icon and color each.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::appearance::{Appearance, ColorKey};

/// Spending or income category of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionCategory {
    Food,
    Transport,
    Shopping,
    Income,
    Entertainment,
}

impl TransactionCategory {
    /// Every category, in picker order
    pub const ALL: [TransactionCategory; 5] = [
        Self::Food,
        Self::Transport,
        Self::Shopping,
        Self::Income,
        Self::Entertainment,
    ];

    /// Icon and color used when rendering a transaction of this category
    pub fn appearance(&self) -> Appearance {
        let (icon, color) = match self {
            Self::Food => ("fork.knife", ColorKey::Orange),
            Self::Transport => ("car.fill", ColorKey::Blue),
            Self::Shopping => ("bag.fill", ColorKey::Purple),
            Self::Income => ("dollarsign.circle.fill", ColorKey::Green),
            Self::Entertainment => ("tv.fill", ColorKey::Pink),
        };
        Appearance { icon, color }
    }

    /// Stable string tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Shopping => "shopping",
            Self::Income => "income",
            Self::Entertainment => "entertainment",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Income => "Income",
            Self::Entertainment => "Entertainment",
        }
    }

    /// Parse a category from its tag (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
