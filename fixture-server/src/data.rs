//! Deterministic seed data for the five fixture collections.
//!
//! # Design
//! Records are built from typed structs and serialized once at startup, so
//! the served JSON always carries the full field set in a stable shape.
//! Identifiers ascend from 1 and every foreign key points at a seeded owner,
//! which the relational-integrity tests rely on.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub id: i64,
    #[serde(rename = "postId")]
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Album {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Todo {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
    pub completed: bool,
}

const USERS: [(&str, &str, &str); 10] = [
    ("Ida Frost", "ifrost", "example.org"),
    ("Tove Berg", "tberg", "example.net"),
    ("Nils Moen", "nmoen", "example.com"),
    ("Sara Lind", "slind", "example.org"),
    ("Omar Haddad", "ohaddad", "example.net"),
    ("Lena Vik", "lvik", "example.com"),
    ("Petra Falk", "pfalk", "example.org"),
    ("Juan Reyes", "jreyes", "example.net"),
    ("Mai Tran", "mtran", "example.com"),
    ("Karl Aas", "kaas", "example.org"),
];

const POST_TITLES: [&str; 4] = [
    "notes from the field",
    "on keeping things simple",
    "a short status update",
    "things I would do differently",
];

const COMMENT_AUTHORS: [(&str, &str); 5] = [
    ("laudantium enim", "reader"),
    ("quo vero", "visitor"),
    ("odio adipisci", "lurker"),
    ("alias odio", "regular"),
    ("vero eaque", "passerby"),
];

const ALBUM_TITLES: [&str; 5] = [
    "holiday snapshots",
    "city at night",
    "old scans",
    "work in progress",
    "family archive",
];

const TODO_TITLES: [&str; 6] = [
    "water the plants",
    "answer the backlog",
    "renew the certificate",
    "read the incident report",
    "clean the workbench",
    "book the venue",
];

pub fn seed_users() -> Vec<User> {
    USERS
        .iter()
        .enumerate()
        .map(|(i, (name, username, domain))| User {
            id: i as i64 + 1,
            name: (*name).to_string(),
            username: (*username).to_string(),
            email: format!("{username}@{domain}"),
        })
        .collect()
}

/// Two posts per user, ids 1..=20.
pub fn seed_posts() -> Vec<Post> {
    (1..=20)
        .map(|id: i64| Post {
            id,
            user_id: (id + 1) / 2,
            title: format!("{} #{id}", POST_TITLES[(id as usize - 1) % POST_TITLES.len()]),
            body: format!(
                "Body of post {id}. Written for the fixture data set, long enough \
                 to look like prose and short enough to diff by eye."
            ),
        })
        .collect()
}

/// Two comments per post, ids 1..=40.
pub fn seed_comments() -> Vec<Comment> {
    (1..=40)
        .map(|id: i64| {
            let (name, handle) = COMMENT_AUTHORS[(id as usize - 1) % COMMENT_AUTHORS.len()];
            Comment {
                id,
                post_id: (id + 1) / 2,
                name: name.to_string(),
                email: format!("{handle}{id}@example.org"),
                body: format!("Comment {id}: read the post twice and this still holds."),
            }
        })
        .collect()
}

/// One or two albums per user, ids 1..=15.
pub fn seed_albums() -> Vec<Album> {
    (1..=15)
        .map(|id: i64| Album {
            id,
            user_id: (id - 1) % 10 + 1,
            title: format!("{} vol. {id}", ALBUM_TITLES[(id as usize - 1) % ALBUM_TITLES.len()]),
        })
        .collect()
}

/// Three todos per user, ids 1..=30, with a mix of completed states.
pub fn seed_todos() -> Vec<Todo> {
    (1..=30)
        .map(|id: i64| Todo {
            id,
            user_id: (id + 2) / 3,
            title: TODO_TITLES[(id as usize - 1) % TODO_TITLES.len()].to_string(),
            completed: id % 2 == 0,
        })
        .collect()
}

/// All five collections, serialized and keyed by their path segment.
pub struct Fixtures {
    collections: BTreeMap<&'static str, Vec<Value>>,
}

impl Fixtures {
    pub fn seed() -> Self {
        let mut collections = BTreeMap::new();
        collections.insert("users", to_values(&seed_users()));
        collections.insert("posts", to_values(&seed_posts()));
        collections.insert("comments", to_values(&seed_comments()));
        collections.insert("albums", to_values(&seed_albums()));
        collections.insert("todos", to_values(&seed_todos()));
        Self { collections }
    }

    pub fn collection(&self, resource: &str) -> Option<&[Value]> {
        self.collections.get(resource).map(Vec::as_slice)
    }

    /// Query parameter each collection can be filtered by.
    pub fn owner_key(&self, resource: &str) -> Option<&'static str> {
        match resource {
            "posts" | "albums" | "todos" => Some("userId"),
            "comments" => Some("postId"),
            _ => None,
        }
    }
}

fn to_values<T: Serialize>(items: &[T]) -> Vec<Value> {
    items
        .iter()
        .map(|item| serde_json::to_value(item).expect("seed records serialize"))
        .collect()
}
