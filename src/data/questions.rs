use std::sync::LazyLock;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::time::relative_time;

/// The user who asked a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify))]
pub struct Author {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "tsify", tsify(optional))]
    pub avatar: Option<String>,
}

/// A question as shown in the home feed.
///
/// Serializes with camelCase keys and `_id` for identifiers, matching the
/// documents the front end consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify))]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub author: Author,
    pub votes: i64,
    pub answer_count: u32,
    pub view_count: u32,
    #[cfg_attr(feature = "tsify", tsify(type = "string"))]
    pub created_at: DateTime<Utc>,
}

impl Question {
    /// How long ago the question was asked, relative to `now`.
    pub fn relative_age(&self, now: DateTime<Utc>) -> String {
        relative_time(self.created_at, now)
    }
}

struct Seed {
    id: &'static str,
    title: &'static str,
    body: &'static str,
    tags: &'static [&'static str],
    author: (&'static str, &'static str),
    votes: i64,
    answer_count: u32,
    view_count: u32,
    created: (i32, u32, u32),
}

const SEEDS: [Seed; 7] = [
    Seed {
        id: "1",
        title: "How to centre a div?",
        body: "I've been trying to centre a div both horizontally and vertically for hours. I've tried margin: auto, text-align: center, and various other approaches but nothing seems to work consistently. What's the most reliable modern approach?",
        tags: &["css", "html"],
        author: ("u1", "Sarah Chen"),
        votes: 142,
        answer_count: 12,
        view_count: 15420,
        created: (2025, 11, 15),
    },
    Seed {
        id: "2",
        title: "How to Ensure Unique User Profile with ON CONFLICT in PostgreSQL Using Drizzle ORM?",
        body: "I'm building a user profile system where users can only have one profile. When they try to create a second profile, I want to update the existing one instead. How do I implement this upsert pattern with Drizzle ORM?",
        tags: &["postgres", "nextjs"],
        author: ("u2", "Marcus Johnson"),
        votes: 89,
        answer_count: 5,
        view_count: 3241,
        created: (2025, 12, 20),
    },
    Seed {
        id: "3",
        title: "What are the benefits and trade-offs of using Server-Side Rendering (SSR) in Next.js?",
        body: "I'm starting a new Next.js project and trying to decide between SSR, SSG, and client-side rendering. What are the real-world trade-offs I should consider? When does SSR actually make sense?",
        tags: &["nextjs", "reactjs"],
        author: ("u3", "Emily Rodriguez"),
        votes: 67,
        answer_count: 8,
        view_count: 4892,
        created: (2025, 12, 18),
    },
    Seed {
        id: "4",
        title: "Node.js res.json() and res.send(), not working but still able to change status code",
        body: "I'm building an Express API and running into a strange issue. My res.json() and res.send() calls don't seem to send any response body, but the status code changes work fine. What could be causing this?",
        tags: &["javascript", "nodejs"],
        author: ("u4", "Alex Kim"),
        votes: 45,
        answer_count: 3,
        view_count: 1876,
        created: (2025, 12, 22),
    },
    Seed {
        id: "5",
        title: "ReactJs or NextJs for beginners i ask for advice",
        body: "I'm new to web development and want to learn React. Should I start with plain React or jump straight into Next.js? I've heard Next.js is more opinionated but provides better structure. What do experienced developers recommend?",
        tags: &["reactjs", "nextjs"],
        author: ("u5", "Jordan Taylor"),
        votes: 38,
        answer_count: 15,
        view_count: 6234,
        created: (2025, 12, 25),
    },
    Seed {
        id: "6",
        title: "How to set up Tailwind CSS v4 with Next.js?",
        body: "I'm trying to set up Tailwind CSS v4 in my Next.js project but the configuration seems different from v3. The @tailwind directives aren't working. What's the correct way to configure Tailwind v4 with the new @import syntax?",
        tags: &["tailwind", "nextjs", "css"],
        author: ("u6", "Priya Patel"),
        votes: 23,
        answer_count: 4,
        view_count: 1245,
        created: (2025, 12, 28),
    },
    Seed {
        id: "7",
        title: "TypeScript generics explained with examples",
        body: "I understand basic TypeScript but generics confuse me. Can someone explain with practical examples when and why I'd use generics? I've seen code like <T extends Something> and have no idea what it means.",
        tags: &["typescript", "javascript"],
        author: ("u7", "David Lee"),
        votes: 19,
        answer_count: 6,
        view_count: 2103,
        created: (2025, 12, 30),
    },
];

static MOCK_QUESTIONS: LazyLock<Vec<Question>> =
    LazyLock::new(|| SEEDS.iter().map(seed_question).collect());

fn seed_question(seed: &Seed) -> Question {
    let (year, month, day) = seed.created;
    Question {
        id: seed.id.to_string(),
        title: seed.title.to_string(),
        body: seed.body.to_string(),
        tags: seed.tags.iter().map(|t| t.to_string()).collect(),
        author: Author {
            id: seed.author.0.to_string(),
            name: seed.author.1.to_string(),
            avatar: None,
        },
        votes: seed.votes,
        answer_count: seed.answer_count,
        view_count: seed.view_count,
        created_at: Utc
            .with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .expect("valid seed date"),
    }
}

/// Every question, in feed order.
///
/// TODO: replace with a database query once the database is set up.
pub fn all_questions() -> Vec<Question> {
    MOCK_QUESTIONS.clone()
}

/// The `limit` highest-voted questions, highest first.
pub fn top_questions(limit: usize) -> Vec<Question> {
    let mut questions = all_questions();
    questions.sort_by(|a, b| b.votes.cmp(&a.votes));
    questions.truncate(limit);
    questions
}
