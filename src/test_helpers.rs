//! Shared test fixtures — dataset/post/comment builders.
//!
//! Available only under `#[cfg(test)]`.

use chrono::Utc;

use crate::model::{Comment, Post, UserDataset};

pub fn post(id: &str, subreddit: &str, title: &str) -> Post {
    scored_post(id, subreddit, title, 1)
}

pub fn scored_post(id: &str, subreddit: &str, title: &str, score: i64) -> Post {
    Post {
        id: id.to_string(),
        title: title.to_string(),
        body: String::new(),
        subreddit: subreddit.to_string(),
        score,
        created_at: Utc::now(),
        url: format!("https://www.reddit.com/r/{subreddit}/comments/{id}/"),
        num_comments: 0,
    }
}

pub fn comment(id: &str, subreddit: &str, body: &str) -> Comment {
    scored_comment(id, subreddit, body, 1)
}

pub fn scored_comment(id: &str, subreddit: &str, body: &str, score: i64) -> Comment {
    Comment {
        id: id.to_string(),
        body: body.to_string(),
        subreddit: subreddit.to_string(),
        score,
        created_at: Utc::now(),
        parent_id: "t3_parent".to_string(),
    }
}

pub fn dataset(username: &str, posts: Vec<Post>, comments: Vec<Comment>) -> UserDataset {
    UserDataset {
        username: username.to_string(),
        posts,
        comments,
        fetched_at: Utc::now(),
    }
}
