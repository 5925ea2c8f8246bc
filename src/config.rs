//! Serializable resolver configuration.
//!
//! A [`ResolverConfig`] captures everything that shapes the output tokens and
//! how strictly the registry is validated. It round-trips through JSON so an
//! embedding application can keep it next to its other settings.
//!
//! # Example
//!
//! ```
//! use devflow_kit::{DuplicatePolicy, IconStyle, ResolverConfig};
//!
//! let config = ResolverConfig::new()
//!     .with_style_preference(vec![IconStyle::Original, IconStyle::Plain])
//!     .with_duplicates(DuplicatePolicy::FirstWins);
//!
//! let json = config.to_json().unwrap();
//! let restored = ResolverConfig::from_json(&json).unwrap();
//! assert_eq!(restored.style_preference, vec![IconStyle::Original, IconStyle::Plain]);
//! ```

use serde::{Deserialize, Serialize};

use crate::icon::IconStyle;

// ============================================================================
// Policies
// ============================================================================

/// What to do when two registry entries claim the same key.
///
/// Keys are canonical names and lowercase aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum DuplicatePolicy {
    /// Fail construction with [`RegistryError::DuplicateName`] or
    /// [`RegistryError::DuplicateAlias`].
    ///
    /// [`RegistryError::DuplicateName`]: crate::RegistryError::DuplicateName
    /// [`RegistryError::DuplicateAlias`]: crate::RegistryError::DuplicateAlias
    #[default]
    Reject,
    /// Keep the first entry registered for a key.
    FirstWins,
    /// Overwrite with the last entry registered for a key.
    LastWins,
}

/// What to do with an entry that fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum MalformedPolicy {
    /// Log the defect and leave the entry out.
    #[default]
    Skip,
    /// Abort loading with the defect.
    Fail,
}

// ============================================================================
// ResolverConfig
// ============================================================================

pub const DEFAULT_PREFIX: &str = "devicon";
pub const DEFAULT_COLORED_MODIFIER: &str = "colored";

/// Settings for building and querying a [`TagIconResolver`](crate::TagIconResolver).
///
/// # JSON Format
///
/// ```json
/// {
///   "prefix": "devicon",
///   "coloredModifier": "colored",
///   "stylePreference": ["plain", "original", "line"],
///   "duplicates": "reject",
///   "malformed": "skip"
/// }
/// ```
///
/// Every field is optional when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct ResolverConfig {
    /// Leading fragment of every token.
    pub prefix: String,

    /// Token appended after a space when a colored icon is requested.
    pub colored_modifier: String,

    /// Styles tried in order before falling back to the first stored style.
    pub style_preference: Vec<IconStyle>,

    /// Handling of duplicate names and aliases.
    pub duplicates: DuplicatePolicy,

    /// Handling of entries that fail validation.
    pub malformed: MalformedPolicy,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            colored_modifier: DEFAULT_COLORED_MODIFIER.to_string(),
            style_preference: vec![IconStyle::Plain, IconStyle::Original, IconStyle::Line],
            duplicates: DuplicatePolicy::default(),
            malformed: MalformedPolicy::default(),
        }
    }
}

impl ResolverConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the token prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the colored modifier token.
    pub fn with_colored_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.colored_modifier = modifier.into();
        self
    }

    /// Sets the style preference order.
    pub fn with_style_preference(mut self, preference: Vec<IconStyle>) -> Self {
        self.style_preference = preference;
        self
    }

    /// Sets the duplicate key policy.
    pub fn with_duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Sets the malformed entry policy.
    pub fn with_malformed(mut self, policy: MalformedPolicy) -> Self {
        self.malformed = policy;
        self
    }

    /// Serializes the config to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the config to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================
