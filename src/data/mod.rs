//! In-memory data sources for the question feed and tag sidebar.
//!
//! These stand in for the database: each function returns an ordered copy of
//! a fixed record set.

pub mod questions;
pub mod tags;

pub use questions::{Author, Question, all_questions, top_questions};
pub use tags::{Tag, popular_tags};

/// Number of records returned by the "top" queries when no limit is given.
pub const DEFAULT_LIMIT: usize = 5;
