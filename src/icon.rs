//! Icon types for devicon font glyphs.
//!
//! This module provides the style vocabulary of the devicon font and the
//! validated definition record every registry entry is turned into.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A rendering variant of a devicon glyph.
///
/// Not every icon ships every style. The font only carries a handful of
/// variants, so the vocabulary is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum IconStyle {
    Plain,
    Original,
    Line,
    PlainWordmark,
    OriginalWordmark,
    LineWordmark,
}

impl IconStyle {
    /// Every known style, in declaration order.
    pub const ALL: [IconStyle; 6] = [
        Self::Plain,
        Self::Original,
        Self::Line,
        Self::PlainWordmark,
        Self::OriginalWordmark,
        Self::LineWordmark,
    ];

    /// Returns the class-name fragment for this style.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Original => "original",
            Self::Line => "line",
            Self::PlainWordmark => "plain-wordmark",
            Self::OriginalWordmark => "original-wordmark",
            Self::LineWordmark => "line-wordmark",
        }
    }
}

impl fmt::Display for IconStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known [`IconStyle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStyle(pub String);

impl fmt::Display for UnknownStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown icon style `{}`", self.0)
    }
}

impl std::error::Error for UnknownStyle {}

impl FromStr for IconStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| UnknownStyle(s.to_string()))
    }
}

/// A validated icon entry.
///
/// Definitions are only built by the registry loader, which guarantees a
/// non-blank name and at least one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDefinition {
    name: String,
    aliases: Vec<String>,
    styles: Vec<IconStyle>,
}

impl IconDefinition {
    /// Creates a definition, returning `None` if the name is blank or there
    /// are no styles.
    pub fn new(
        name: impl Into<String>,
        aliases: Vec<String>,
        styles: Vec<IconStyle>,
    ) -> Option<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() || styles.is_empty() {
            return None;
        }
        Some(Self {
            name,
            aliases,
            styles,
        })
    }

    /// The canonical name, as stored.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternate names, as stored.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Available styles in storage order. Never empty.
    pub fn styles(&self) -> &[IconStyle] {
        &self.styles
    }

    /// Returns true if the icon ships the given style.
    pub fn has_style(&self, style: IconStyle) -> bool {
        self.styles.contains(&style)
    }

    /// Picks the first preferred style the icon has, falling back to the first
    /// stored style.
    pub fn select_style(&self, preference: &[IconStyle]) -> IconStyle {
        preference
            .iter()
            .copied()
            .find(|style| self.has_style(*style))
            .unwrap_or(self.styles[0])
    }
}
