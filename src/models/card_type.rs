//! Card network type
//!
//! Four networks, each with a stable string tag, a display name, an
//! icon/color pair and a two-stop gradient for the card face.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::appearance::{Appearance, ColorKey, ColorStop, Gradient};

/// Card network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    #[default]
    Visa,
    Mastercard,
    Amex,
    Discover,
}

impl CardType {
    pub const ALL: [CardType; 4] = [Self::Visa, Self::Mastercard, Self::Amex, Self::Discover];

    /// Stable string tag, also the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::Discover => "discover",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
        }
    }

    pub fn appearance(&self) -> Appearance {
        let color = match self {
            Self::Visa => ColorKey::Blue,
            Self::Mastercard => ColorKey::Red,
            Self::Amex => ColorKey::Green,
            Self::Discover => ColorKey::Orange,
        };
        Appearance {
            icon: "creditcard.fill",
            color,
        }
    }

    /// Background gradient of the card face
    pub fn gradient(&self) -> Gradient {
        let (start, end) = match self {
            Self::Visa => (
                ColorStop::solid(ColorKey::Blue),
                ColorStop::faded(ColorKey::Blue, 0.8),
            ),
            Self::Mastercard => (
                ColorStop::solid(ColorKey::Red),
                ColorStop::solid(ColorKey::Orange),
            ),
            Self::Amex => (
                ColorStop::solid(ColorKey::Green),
                ColorStop::faded(ColorKey::Green, 0.8),
            ),
            Self::Discover => (
                ColorStop::solid(ColorKey::Orange),
                ColorStop::solid(ColorKey::Red),
            ),
        };
        Gradient { start, end }
    }

    /// Parse from a tag or display name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "visa" => Some(Self::Visa),
            "mastercard" | "master card" | "mc" => Some(Self::Mastercard),
            "amex" | "american express" => Some(Self::Amex),
            "discover" => Some(Self::Discover),
            _ => None,
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(CardType::Amex.to_string(), "American Express");
        assert_eq!(CardType::Mastercard.display_name(), "Mastercard");
    }

    #[test]
    fn test_every_network_uses_the_card_icon() {
        for card_type in CardType::ALL {
            assert_eq!(card_type.appearance().icon, "creditcard.fill");
        }
        assert_eq!(CardType::Mastercard.appearance().color, ColorKey::Red);
    }

    #[test]
    fn test_gradients() {
        let visa = CardType::Visa.gradient();
        assert_eq!(visa.start, ColorStop::solid(ColorKey::Blue));
        assert_eq!(visa.end.color, ColorKey::Blue);
        assert!((visa.end.opacity - 0.8).abs() < f32::EPSILON);

        let discover = CardType::Discover.gradient();
        assert_eq!(discover.start.color, ColorKey::Orange);
        assert_eq!(discover.end.color, ColorKey::Red);
    }

    #[test]
    fn test_tags_are_stable() {
        for card_type in CardType::ALL {
            let json = serde_json::to_string(&card_type).unwrap();
            assert_eq!(json, format!("\"{}\"", card_type.as_str()));
            assert_eq!(CardType::parse(card_type.as_str()), Some(card_type));
        }
        assert_eq!(CardType::parse("American Express"), Some(CardType::Amex));
        assert_eq!(CardType::parse("jcb"), None);
    }
}
