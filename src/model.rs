//! Data model — immutable records fetched once per run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A submission authored by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    /// Self-text body. Empty for link posts.
    pub body: String,
    pub subreddit: String,
    pub score: i64,
    pub created_at: DateTime<Utc>,
    pub url: String,
    pub num_comments: u64,
}

/// A comment authored by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub body: String,
    pub subreddit: String,
    pub score: i64,
    pub created_at: DateTime<Utc>,
    pub parent_id: String,
}

/// Everything fetched for one user, newest first. Read-only after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDataset {
    pub username: String,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
    pub fetched_at: DateTime<Utc>,
}

impl UserDataset {
    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty() && self.comments.is_empty()
    }
}
