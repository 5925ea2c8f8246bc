use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::resolver::{IconClass, TagIconResolver};

/// A tag with the number of questions filed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify))]
pub struct Tag {
    pub name: String,
    pub questions: u32,
}

impl Tag {
    /// Creates a tag with its question count.
    pub fn new(name: impl Into<String>, questions: u32) -> Self {
        Self {
            name: name.into(),
            questions,
        }
    }

    /// Resolves the icon for this tag's badge.
    pub fn icon<'r>(&self, resolver: &'r TagIconResolver, colored: bool) -> Option<IconClass<'r>> {
        resolver.resolve(&self.name, colored)
    }
}

static MOCK_TAGS: LazyLock<Vec<Tag>> = LazyLock::new(|| {
    vec![
        Tag::new("nextjs", 320),
        Tag::new("reactjs", 244),
        Tag::new("javascript", 83),
        Tag::new("react", 30),
        Tag::new("postgres", 89),
    ]
});

/// Popular tags by question count, highest first.
///
/// TODO: replace with a query against the tags collection once the database is set up.
pub fn popular_tags(limit: usize) -> Vec<Tag> {
    let mut tags = MOCK_TAGS.clone();
    tags.sort_by(|a, b| b.questions.cmp(&a.questions));
    tags.truncate(limit);
    tags
}
