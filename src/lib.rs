//! devflow-kit: core utilities for the DevFlow Q&A site
//!
//! This crate resolves free-form tag names to devicon font classes and
//! provides the small formatting and navigation helpers the site's pages
//! share, along with the in-memory question and tag feeds.
//!
//! # Example
//!
//! ```
//! use devflow_kit::TagIconResolver;
//!
//! let resolver = TagIconResolver::shared();
//!
//! // Aliases and casing are normalised
//! assert_eq!(
//!     resolver.class_name(" JS ", true).as_deref(),
//!     Some("devicon-javascript-plain colored"),
//! );
//!
//! // Monochrome drops the trailing modifier
//! assert_eq!(
//!     resolver.class_name("reactjs", false).as_deref(),
//!     Some("devicon-react-original"),
//! );
//!
//! // Unknown tags have no icon
//! assert!(resolver.resolve("unknowntag123", true).is_none());
//! ```
//!
//! # Custom Registries
//!
//! Build a resolver from any devicon-shaped JSON with a [`ResolverConfig`]:
//!
//! ```
//! use devflow_kit::{DuplicatePolicy, ResolverConfig, TagIconResolver};
//!
//! let json = r#"[
//!     { "name": "javascript", "altnames": ["js"], "versions": { "font": ["plain", "original"] } }
//! ]"#;
//!
//! let config = ResolverConfig::new().with_duplicates(DuplicatePolicy::FirstWins);
//! let resolver = TagIconResolver::from_json(json, &config).unwrap();
//!
//! let class = resolver.resolve("js", true).unwrap();
//! assert_eq!(class.to_string(), "devicon-javascript-plain colored");
//! ```

mod config;
mod error;
mod icon;
mod nav;
mod registry;
mod resolver;
mod time;

pub mod data;

#[cfg(feature = "tsify")]
mod wasm;

pub use config::{
    DEFAULT_COLORED_MODIFIER, DEFAULT_PREFIX, DuplicatePolicy, MalformedPolicy, ResolverConfig,
};
pub use error::{RegistryError, Result};
pub use icon::{IconDefinition, IconStyle, UnknownStyle};
pub use nav::{
    NAV_LINK_ACTIVE_CLASSES, NAV_LINK_INACTIVE_CLASSES, cn, is_route_active,
    nav_icon_invert_classes, nav_link_classes,
};
pub use registry::{BUNDLED_REGISTRY, load_definitions, load_definitions_from_path};
pub use resolver::{IconClass, TagIconResolver};
pub use time::{relative_time, relative_time_from_now};

