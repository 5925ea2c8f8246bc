//! Devicon registry loading and validation.
//!
//! The registry asset is the `devicon.json` shipped by the devicon project: an
//! array of records shaped like
//!
//! ```json
//! { "name": "javascript", "altnames": ["js"], "versions": { "font": ["plain"] } }
//! ```
//!
//! Only `name`, `altnames` and `versions.font` matter here. Every record is
//! checked once, and defects are handled according to [`MalformedPolicy`].

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::config::MalformedPolicy;
use crate::error::{RegistryError, Result};
use crate::icon::{IconDefinition, IconStyle};

/// The registry asset bundled with the crate.
pub const BUNDLED_REGISTRY: &str = include_str!("../data/devicon.json");

#[derive(Debug, Deserialize)]
struct RawEntry {
    name: String,
    #[serde(default)]
    altnames: Vec<String>,
    #[serde(default)]
    versions: RawVersions,
}

#[derive(Debug, Default, Deserialize)]
struct RawVersions {
    #[serde(default)]
    font: Vec<String>,
}

/// Parses and validates registry JSON into definitions, in registry order.
pub fn load_definitions(json: &str, policy: MalformedPolicy) -> Result<Vec<IconDefinition>> {
    let entries: Vec<RawEntry> = serde_json::from_str(json)?;
    let mut definitions = Vec::with_capacity(entries.len());

    for (index, entry) in entries.into_iter().enumerate() {
        match validate(index, entry, policy) {
            Ok(definition) => definitions.push(definition),
            Err(defect) => match policy {
                MalformedPolicy::Fail => return Err(defect),
                MalformedPolicy::Skip => warn!("Skipping registry entry: {defect}"),
            },
        }
    }

    Ok(definitions)
}

/// Reads and validates a registry file.
pub fn load_definitions_from_path(
    path: impl AsRef<Path>,
    policy: MalformedPolicy,
) -> Result<Vec<IconDefinition>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_definitions(&json, policy)
}

fn validate(index: usize, entry: RawEntry, policy: MalformedPolicy) -> Result<IconDefinition> {
    let name = entry.name.trim();
    if name.is_empty() {
        return Err(RegistryError::EmptyName { index });
    }

    let mut styles = Vec::with_capacity(entry.versions.font.len());
    for raw in &entry.versions.font {
        match raw.parse::<IconStyle>() {
            Ok(style) if !styles.contains(&style) => styles.push(style),
            Ok(_) => {}
            Err(_) => {
                let defect = RegistryError::UnknownStyle {
                    name: name.to_string(),
                    style: raw.clone(),
                };
                if policy == MalformedPolicy::Fail {
                    return Err(defect);
                }
                warn!("Ignoring style: {defect}");
            }
        }
    }

    IconDefinition::new(name, entry.altnames, styles).ok_or_else(|| RegistryError::MissingStyles {
        name: name.to_string(),
    })
}

// ============================================================================
// Tests
// ============================================================================
