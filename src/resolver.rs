//! Tag to devicon class resolution.
//!
//! [`TagIconResolver`] owns two indices built once from the registry:
//! lowercase canonical name to definition, and lowercase alias to canonical
//! name. After construction it is read-only and can be shared freely across
//! threads.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::OnceLock;

use tracing::{debug, info};

use crate::config::{DuplicatePolicy, ResolverConfig};
use crate::error::{RegistryError, Result};
use crate::icon::{IconDefinition, IconStyle};
use crate::registry::{self, BUNDLED_REGISTRY};

// ============================================================================
// IconClass
// ============================================================================

/// A resolved icon, printable as a class token.
///
/// Formats as `"{prefix}-{name}-{style}"`, followed by `" {modifier}"` when a
/// colored icon was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconClass<'a> {
    prefix: &'a str,
    name: &'a str,
    style: IconStyle,
    colored_modifier: Option<&'a str>,
}

impl<'a> IconClass<'a> {
    /// The canonical icon name.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The selected style.
    pub fn style(&self) -> IconStyle {
        self.style
    }

    /// Returns true if the colored modifier is appended.
    pub fn is_colored(&self) -> bool {
        self.colored_modifier.is_some()
    }
}

impl fmt::Display for IconClass<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.prefix, self.name, self.style)?;
        if let Some(modifier) = self.colored_modifier {
            write!(f, " {modifier}")?;
        }
        Ok(())
    }
}

// ============================================================================
// TagIconResolver
// ============================================================================

/// Maps free-form tag names to devicon class tokens.
///
/// # Example
///
/// ```
/// use devflow_kit::TagIconResolver;
///
/// let resolver = TagIconResolver::shared();
///
/// assert_eq!(resolver.class_name("js", true).as_deref(), Some("devicon-javascript-plain colored"));
/// assert_eq!(resolver.class_name("React", false).as_deref(), Some("devicon-react-original"));
/// assert_eq!(resolver.class_name("unknowntag123", true), None);
/// ```
#[derive(Debug, Clone)]
pub struct TagIconResolver {
    config: ResolverConfig,
    definitions: Vec<IconDefinition>,
    by_name: HashMap<String, usize>,
    by_alias: HashMap<String, usize>,
}

impl TagIconResolver {
    /// Builds a resolver from validated definitions.
    ///
    /// Duplicate names and aliases are handled according to
    /// [`ResolverConfig::duplicates`].
    pub fn new(definitions: Vec<IconDefinition>, config: &ResolverConfig) -> Result<Self> {
        let policy = config.duplicates;
        let mut kept: Vec<IconDefinition> = Vec::with_capacity(definitions.len());
        let mut by_name: HashMap<String, usize> = HashMap::with_capacity(definitions.len());

        for def in definitions {
            match by_name.entry(def.name().to_lowercase()) {
                Entry::Vacant(slot) => {
                    slot.insert(kept.len());
                    kept.push(def);
                }
                Entry::Occupied(slot) => match policy {
                    DuplicatePolicy::Reject => {
                        return Err(RegistryError::DuplicateName {
                            name: def.name().to_string(),
                        });
                    }
                    DuplicatePolicy::FirstWins => {
                        debug!("Ignoring repeated icon `{}`", def.name());
                    }
                    DuplicatePolicy::LastWins => {
                        debug!("Replacing icon `{}` with a later entry", def.name());
                        kept[*slot.get()] = def;
                    }
                },
            }
        }

        let mut by_alias: HashMap<String, usize> = HashMap::new();
        for (index, def) in kept.iter().enumerate() {
            for alias in def.aliases() {
                let key = alias.trim().to_lowercase();
                if key.is_empty() {
                    continue;
                }
                if let Some(&owner) = by_name.get(&key) {
                    if owner != index {
                        debug!(
                            "Alias `{alias}` of `{}` is shadowed by icon `{}`",
                            def.name(),
                            kept[owner].name()
                        );
                    }
                }
                match by_alias.entry(key) {
                    Entry::Vacant(slot) => {
                        slot.insert(index);
                    }
                    Entry::Occupied(mut slot) => {
                        let first = *slot.get();
                        if first == index {
                            continue;
                        }
                        match policy {
                            DuplicatePolicy::Reject => {
                                return Err(RegistryError::DuplicateAlias {
                                    alias: slot.key().clone(),
                                    first: kept[first].name().to_string(),
                                    second: def.name().to_string(),
                                });
                            }
                            DuplicatePolicy::FirstWins => {
                                debug!("Alias `{alias}` stays with `{}`", kept[first].name());
                            }
                            DuplicatePolicy::LastWins => {
                                debug!("Alias `{alias}` moves to `{}`", def.name());
                                slot.insert(index);
                            }
                        }
                    }
                }
            }
        }

        info!(
            icons = kept.len(),
            aliases = by_alias.len(),
            "Built tag icon resolver"
        );

        Ok(Self {
            config: config.clone(),
            definitions: kept,
            by_name,
            by_alias,
        })
    }

    /// Parses, validates and indexes registry JSON.
    pub fn from_json(json: &str, config: &ResolverConfig) -> Result<Self> {
        let definitions = registry::load_definitions(json, config.malformed)?;
        Self::new(definitions, config)
    }

    /// Builds a resolver over the bundled registry with the default config.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_REGISTRY, &ResolverConfig::default())
    }

    /// Returns the process-wide resolver over the bundled registry.
    ///
    /// Built on first use.
    ///
    /// # Panics
    ///
    /// Panics if the bundled registry is invalid.
    pub fn shared() -> &'static TagIconResolver {
        static SHARED: OnceLock<TagIconResolver> = OnceLock::new();
        SHARED.get_or_init(|| Self::bundled().expect("bundled devicon registry is valid"))
    }

    /// Resolves a tag to an icon class.
    ///
    /// The tag is trimmed and lowercased, then looked up as a canonical name
    /// and failing that as an alias. Returns `None` for blank or unknown tags.
    pub fn resolve(&self, tag: &str, colored: bool) -> Option<IconClass<'_>> {
        let def = self.definition(tag)?;
        Some(IconClass {
            prefix: &self.config.prefix,
            name: def.name(),
            style: def.select_style(&self.config.style_preference),
            colored_modifier: colored.then_some(self.config.colored_modifier.as_str()),
        })
    }

    /// Resolves a tag straight to its class token.
    pub fn class_name(&self, tag: &str, colored: bool) -> Option<String> {
        self.resolve(tag, colored).map(|class| class.to_string())
    }

    /// Looks up the definition a tag resolves to.
    pub fn definition(&self, tag: &str) -> Option<&IconDefinition> {
        let key = tag.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }
        let index = self
            .by_name
            .get(&key)
            .or_else(|| self.by_alias.get(&key))?;
        self.definitions.get(*index)
    }

    /// The configuration this resolver was built with.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Returns the number of icons.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if no icons are registered.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterates definitions in registry order.
    pub fn definitions(&self) -> impl Iterator<Item = &IconDefinition> {
        self.definitions.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MalformedPolicy;

    fn def(name: &str, aliases: &[&str], styles: &[IconStyle]) -> IconDefinition {
        IconDefinition::new(
            name,
            aliases.iter().map(|a| a.to_string()).collect(),
            styles.to_vec(),
        )
        .unwrap()
    }

    fn javascript_only() -> TagIconResolver {
        TagIconResolver::new(
            vec![def("javascript", &["js"], &[IconStyle::Plain, IconStyle::Original])],
            &ResolverConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn alias_resolves_to_canonical_token() {
        let resolver = javascript_only();
        assert_eq!(
            resolver.class_name("js", true).as_deref(),
            Some("devicon-javascript-plain colored")
        );
        assert_eq!(
            resolver.class_name("JS", false).as_deref(),
            Some("devicon-javascript-plain")
        );
    }

    #[test]
    fn normalises_case_and_whitespace() {
        let resolver = TagIconResolver::shared();
        let expected = resolver.class_name("react", true);
        assert!(expected.is_some());
        assert_eq!(resolver.class_name(" REACT ", true), expected);
        assert_eq!(resolver.class_name("React", true), expected);
        assert_eq!(resolver.class_name("\treact\n", true), expected);
    }

    #[test]
    fn blank_and_unknown_tags_are_not_found() {
        let resolver = TagIconResolver::shared();
        assert_eq!(resolver.resolve("", true), None);
        assert_eq!(resolver.resolve("   ", true), None);
        assert_eq!(resolver.resolve("unknowntag123", true), None);
        assert!(resolver.definition("").is_none());
    }

    #[test]
    fn bundled_known_icons() {
        let resolver = TagIconResolver::shared();
        let cases = [
            ("react", "devicon-react-original colored"),
            ("javascript", "devicon-javascript-plain colored"),
            ("nextjs", "devicon-nextjs-plain colored"),
            ("tailwindcss", "devicon-tailwindcss-original colored"),
            ("typescript", "devicon-typescript-plain colored"),
            ("threejs", "devicon-threejs-original colored"),
            ("aarch64", "devicon-aarch64-plain colored"),
        ];
        for (tag, expected) in cases {
            assert_eq!(resolver.class_name(tag, true).as_deref(), Some(expected), "{tag}");
        }
    }

    #[test]
    fn bundled_aliases() {
        let resolver = TagIconResolver::shared();
        let cases = [
            ("js", "devicon-javascript-plain colored"),
            ("ts", "devicon-typescript-plain colored"),
            ("reactjs", "devicon-react-original colored"),
            ("pugjs", "devicon-pug-plain colored"),
            ("postgres", "devicon-postgresql-plain colored"),
            ("tailwind", "devicon-tailwindcss-original colored"),
        ];
        for (tag, expected) in cases {
            assert_eq!(resolver.class_name(tag, true).as_deref(), Some(expected), "{tag}");
        }
    }

    #[test]
    fn every_name_and_alias_resolves_consistently() {
        let resolver = TagIconResolver::shared();
        for def in resolver.definitions() {
            let class = resolver.resolve(def.name(), true).unwrap();
            assert_eq!(class.name(), def.name());
            assert!(def.has_style(class.style()));
            assert!(class.to_string().contains(def.name()));

            for alias in def.aliases() {
                assert_eq!(resolver.resolve(alias, true), Some(class), "{alias}");
            }
        }
    }

    #[test]
    fn colored_only_adds_trailing_token() {
        let resolver = TagIconResolver::shared();
        let colored = resolver.class_name("react", true).unwrap();
        let plain = resolver.class_name("react", false).unwrap();
        assert_eq!(colored, format!("{plain} colored"));
        assert_eq!(colored.split(' ').count(), plain.split(' ').count() + 1);
        assert!(resolver.resolve("react", true).unwrap().is_colored());
        assert!(!resolver.resolve("react", false).unwrap().is_colored());
    }

    #[test]
    fn falls_back_to_first_stored_style() {
        let resolver = TagIconResolver::shared();
        assert_eq!(
            resolver.class_name("aws", false).as_deref(),
            Some("devicon-amazonwebservices-plain-wordmark")
        );
        assert_eq!(
            resolver.class_name("npm", false).as_deref(),
            Some("devicon-npm-original-wordmark")
        );
    }

    #[test]
    fn line_only_icon_uses_line() {
        let resolver = TagIconResolver::new(
            vec![
                def("both", &[], &[IconStyle::Line, IconStyle::Original]),
                def("thin", &[], &[IconStyle::Line]),
            ],
            &ResolverConfig::default(),
        )
        .unwrap();
        assert_eq!(resolver.resolve("both", false).unwrap().style(), IconStyle::Original);
        assert_eq!(resolver.resolve("thin", false).unwrap().style(), IconStyle::Line);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let resolver = TagIconResolver::shared();
        let first = resolver.class_name("js", true);
        for _ in 0..10 {
            assert_eq!(resolver.class_name("js", true), first);
        }
    }

    #[test]
    fn custom_prefix_modifier_and_preference() {
        let config = ResolverConfig::new()
            .with_prefix("di")
            .with_colored_modifier("brand")
            .with_style_preference(vec![IconStyle::Original]);
        let resolver = TagIconResolver::new(
            vec![def("javascript", &["js"], &[IconStyle::Plain, IconStyle::Original])],
            &config,
        )
        .unwrap();
        assert_eq!(
            resolver.class_name("js", true).as_deref(),
            Some("di-javascript-original brand")
        );
    }

    #[test]
    fn duplicate_alias_rejected_by_default() {
        let defs = vec![
            def("javascript", &["js"], &[IconStyle::Plain]),
            def("jscript", &["JS"], &[IconStyle::Line]),
        ];
        let err = TagIconResolver::new(defs, &ResolverConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::DuplicateAlias { ref alias, ref first, ref second }
                if alias == "js" && first == "javascript" && second == "jscript"
        ));
    }

    #[test]
    fn duplicate_alias_first_and_last_wins() {
        let defs = || {
            vec![
                def("javascript", &["js"], &[IconStyle::Plain]),
                def("jscript", &["js"], &[IconStyle::Line]),
            ]
        };

        let first = ResolverConfig::new().with_duplicates(DuplicatePolicy::FirstWins);
        let resolver = TagIconResolver::new(defs(), &first).unwrap();
        assert_eq!(resolver.resolve("js", false).unwrap().name(), "javascript");

        let last = ResolverConfig::new().with_duplicates(DuplicatePolicy::LastWins);
        let resolver = TagIconResolver::new(defs(), &last).unwrap();
        assert_eq!(resolver.resolve("js", false).unwrap().name(), "jscript");
    }

    #[test]
    fn duplicate_names_follow_policy() {
        let defs = || {
            vec![
                def("react", &["reactjs"], &[IconStyle::Original]),
                def("react", &[], &[IconStyle::Plain]),
            ]
        };

        let err = TagIconResolver::new(defs(), &ResolverConfig::default()).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName { ref name } if name == "react"));

        let first = ResolverConfig::new().with_duplicates(DuplicatePolicy::FirstWins);
        let resolver = TagIconResolver::new(defs(), &first).unwrap();
        assert_eq!(resolver.len(), 1);
        assert_eq!(resolver.resolve("react", false).unwrap().style(), IconStyle::Original);
        assert!(resolver.resolve("reactjs", false).is_some());

        let last = ResolverConfig::new().with_duplicates(DuplicatePolicy::LastWins);
        let resolver = TagIconResolver::new(defs(), &last).unwrap();
        assert_eq!(resolver.len(), 1);
        assert_eq!(resolver.resolve("react", false).unwrap().style(), IconStyle::Plain);
        assert!(resolver.resolve("reactjs", false).is_none());
    }

    #[test]
    fn name_lookup_beats_alias() {
        let resolver = TagIconResolver::new(
            vec![
                def("go", &[], &[IconStyle::Plain]),
                def("gopher", &["go"], &[IconStyle::Original]),
            ],
            &ResolverConfig::default(),
        )
        .unwrap();
        assert_eq!(resolver.resolve("go", false).unwrap().name(), "go");
    }

    #[test]
    fn mixed_case_canonical_name_keeps_stored_spelling() {
        let resolver = TagIconResolver::new(
            vec![def("GraphQL", &[], &[IconStyle::Plain])],
            &ResolverConfig::default(),
        )
        .unwrap();
        assert_eq!(
            resolver.class_name("graphql", false).as_deref(),
            Some("devicon-GraphQL-plain")
        );
    }

    #[test]
    fn from_json_applies_malformed_policy() {
        let json = r#"[
            { "name": "ghost", "altnames": [], "versions": { "font": [] } },
            { "name": "javascript", "altnames": ["js"], "versions": { "font": ["plain", "original"] } }
        ]"#;

        let resolver = TagIconResolver::from_json(json, &ResolverConfig::default()).unwrap();
        assert_eq!(resolver.len(), 1);
        assert!(resolver.resolve("ghost", true).is_none());

        let strict = ResolverConfig::new().with_malformed(MalformedPolicy::Fail);
        assert!(TagIconResolver::from_json(json, &strict).is_err());
    }

    #[test]
    fn shared_across_threads() {
        let resolver = TagIconResolver::shared();
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| TagIconResolver::shared().class_name("ts", true)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), resolver.class_name("ts", true));
        }
    }
}
