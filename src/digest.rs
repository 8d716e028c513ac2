//! Evidence digest — bounded text block over a dataset, used as model input.

use std::fmt::Write as _;

use crate::constants::{DIGEST_COMMENT_LIMIT, DIGEST_POST_LIMIT, EXCERPT_MAX_LEN};
use crate::model::UserDataset;
use crate::processing::normalize;

/// First `max_chars` characters of `text`, ellipsis always appended.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let head: String = text.chars().take(max_chars).collect();
    format!("{head}...")
}

/// Format a compact, deterministic digest of the dataset: header with totals,
/// then up to the first 5 posts and first 5 comments with normalized excerpts.
pub fn build_digest(dataset: &UserDataset) -> String {
    let mut content = String::new();
    let _ = writeln!(content, "Reddit User: {}", dataset.username);
    let _ = writeln!(content, "Total Posts: {}", dataset.post_count());
    let _ = writeln!(content, "Total Comments: {}", dataset.comment_count());
    content.push('\n');

    content.push_str("RECENT POSTS:\n");
    for (i, post) in dataset.posts.iter().take(DIGEST_POST_LIMIT).enumerate() {
        let _ = writeln!(content, "{}. [r/{}] {}", i + 1, post.subreddit, post.title);
        if !post.body.is_empty() {
            let body = normalize(Some(post.body.as_str()));
            let _ = writeln!(content, "   Content: {}", excerpt(&body, EXCERPT_MAX_LEN));
        }
        let _ = writeln!(
            content,
            "   Score: {}, Comments: {}\n",
            post.score, post.num_comments
        );
    }

    content.push_str("RECENT COMMENTS:\n");
    for (i, comment) in dataset.comments.iter().take(DIGEST_COMMENT_LIMIT).enumerate() {
        let body = normalize(Some(comment.body.as_str()));
        let _ = writeln!(
            content,
            "{}. [r/{}] {}",
            i + 1,
            comment.subreddit,
            excerpt(&body, EXCERPT_MAX_LEN)
        );
        let _ = writeln!(content, "   Score: {}\n", comment.score);
    }

    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{comment, dataset, post};

    #[test]
    fn test_header_totals() {
        let ds = dataset("someone", vec![post("p1", "askrust", "Title")], vec![]);
        let digest = build_digest(&ds);
        assert!(digest.starts_with("Reddit User: someone\n"));
        assert!(digest.contains("Total Posts: 1\n"));
        assert!(digest.contains("Total Comments: 0\n"));
    }

    #[test]
    fn test_caps_at_five_each() {
        let posts = (0..8).map(|i| post(&format!("p{i}"), "sub", &format!("title {i}"))).collect();
        let comments = (0..8).map(|i| comment(&format!("c{i}"), "sub", "body")).collect();
        let digest = build_digest(&dataset("u", posts, comments));
        assert!(digest.contains("5. [r/sub] title 4"));
        assert!(!digest.contains("title 5"));
        // 5 numbered posts + 5 numbered comments, no sixth entry
        assert!(!digest.contains("6. [r/sub]"));
    }

    #[test]
    fn test_empty_body_has_no_content_line() {
        let digest = build_digest(&dataset("u", vec![post("p1", "sub", "link post")], vec![]));
        assert!(!digest.contains("Content:"));
    }

    #[test]
    fn test_excerpt_bounded() {
        let long = "x".repeat(400);
        let mut p = post("p1", "sub", "t");
        p.body = long.clone();
        let digest = build_digest(&dataset("u", vec![p], vec![]));
        assert!(digest.contains(&format!("Content: {}...", "x".repeat(200))));
        assert!(!digest.contains(&"x".repeat(201)));
    }

    #[test]
    fn test_deterministic() {
        let ds = dataset(
            "u",
            vec![post("p1", "a", "one")],
            vec![comment("c1", "b", "two")],
        );
        assert_eq!(build_digest(&ds), build_digest(&ds));
    }
}
