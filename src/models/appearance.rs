//! Rendering descriptors for enum lookups
//!
//! The domain never renders anything. Categories and card types map to these
//! small records and the presentation layer decides what the keys mean.

use serde::Serialize;
use std::fmt;

/// Named color a presentation layer resolves to its own palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorKey {
    Blue,
    Green,
    Orange,
    Pink,
    Purple,
    Red,
}

impl ColorKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Purple => "purple",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon and color for a list row or badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Appearance {
    /// Symbol name, e.g. `fork.knife`
    pub icon: &'static str,
    pub color: ColorKey,
}

/// One stop of a gradient
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorStop {
    pub color: ColorKey,
    /// 0.0..=1.0
    pub opacity: f32,
}

impl ColorStop {
    pub const fn solid(color: ColorKey) -> Self {
        Self { color, opacity: 1.0 }
    }

    pub const fn faded(color: ColorKey, opacity: f32) -> Self {
        Self { color, opacity }
    }
}

/// Two-stop gradient drawn from top-leading to bottom-trailing
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gradient {
    pub start: ColorStop,
    pub end: ColorStop,
}
