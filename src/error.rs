//! Errors raised while building a [`TagIconResolver`](crate::TagIconResolver).
//!
//! Resolution itself never fails; an unknown tag is `None`. Every variant here
//! is produced during construction, before the first lookup.

use std::path::PathBuf;

use thiserror::Error;

/// A defect found while loading or indexing the icon registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry asset is not valid JSON of the expected shape.
    #[error("malformed registry data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The registry file could not be read.
    #[error("failed to read registry {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An entry has an empty or blank canonical name.
    #[error("registry entry #{index} has an empty name")]
    EmptyName { index: usize },

    /// An entry lists a style outside the known vocabulary.
    #[error("icon `{name}` lists unknown style `{style}`")]
    UnknownStyle { name: String, style: String },

    /// An entry has no usable font style.
    #[error("icon `{name}` has no font styles")]
    MissingStyles { name: String },

    /// Two entries share a canonical name.
    #[error("icon `{name}` is registered more than once")]
    DuplicateName { name: String },

    /// Two entries claim the same alias.
    #[error("alias `{alias}` is claimed by both `{first}` and `{second}`")]
    DuplicateAlias {
        alias: String,
        first: String,
        second: String,
    },
}

/// Result alias for registry construction.
pub type Result<T, E = RegistryError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = RegistryError::DuplicateAlias {
            alias: "js".into(),
            first: "javascript".into(),
            second: "jscript".into(),
        };
        assert_eq!(
            err.to_string(),
            "alias `js` is claimed by both `javascript` and `jscript`"
        );

        let err = RegistryError::MissingStyles { name: "react".into() };
        assert_eq!(err.to_string(), "icon `react` has no font styles");
    }

    #[test]
    fn json_errors_convert() {
        let parse = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: RegistryError = parse.into();
        assert!(matches!(err, RegistryError::Parse(_)));
        assert!(err.to_string().starts_with("malformed registry data"));
    }
}
