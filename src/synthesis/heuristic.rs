//! Heuristic persona synthesis — deterministic statistics over the dataset.
//!
//! Always produces a complete persona, even for an empty dataset. Used
//! directly when no generation capability is configured, and as the fallback
//! when the AI path fails.

use std::fmt::Write as _;

use crate::constants::{
    CITATION_EXCERPT_LEN, DETAILED_COMMENT_LEN, DIVERSE_COMMUNITY_THRESHOLD,
    ENGAGEMENT_HIGH_THRESHOLD, ENGAGEMENT_MODERATE_THRESHOLD, TOP_COMMUNITY_LIMIT,
};
use crate::digest::excerpt;
use crate::model::UserDataset;
use crate::processing::normalize;

use super::PersonaSynthesizer;

pub struct HeuristicSynthesizer;

impl PersonaSynthesizer for HeuristicSynthesizer {
    fn synthesize(&self, dataset: &UserDataset) -> String {
        synthesize_heuristic(dataset)
    }
}

/// Community name with occurrence count, ranked descending. Every post and
/// comment counts once under its subreddit; ties keep first-seen order.
/// Case-sensitive on purpose: differently-cased names are distinct keys.
pub fn community_frequencies(dataset: &UserDataset) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let names = dataset
        .posts
        .iter()
        .map(|p| p.subreddit.as_str())
        .chain(dataset.comments.iter().map(|c| c.subreddit.as_str()));
    for name in names {
        match counts.iter_mut().find(|(n, _)| n == name) {
            Some((_, c)) => *c += 1,
            None => counts.push((name.to_string(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1)); // stable: ties keep insertion order
    counts
}

/// Average over strictly positive scores, 0.0 if there are none.
fn average_positive(scores: impl Iterator<Item = i64>) -> f64 {
    let positive: Vec<i64> = scores.filter(|s| *s > 0).collect();
    if positive.is_empty() {
        return 0.0;
    }
    positive.iter().sum::<i64>() as f64 / positive.len() as f64
}

fn engagement_label(total: usize) -> &'static str {
    if total > ENGAGEMENT_HIGH_THRESHOLD {
        "High"
    } else if total > ENGAGEMENT_MODERATE_THRESHOLD {
        "Moderate"
    } else {
        "Low"
    }
}

/// Build the full persona report from dataset statistics. Never fails.
pub fn synthesize_heuristic(dataset: &UserDataset) -> String {
    let posts = &dataset.posts;
    let comments = &dataset.comments;
    let frequencies = community_frequencies(dataset);
    let top: &[(String, usize)] =
        &frequencies[..frequencies.len().min(TOP_COMMUNITY_LIMIT)];

    let avg_post_score = average_positive(posts.iter().map(|p| p.score));
    let avg_comment_score = average_positive(comments.iter().map(|c| c.score));

    let mut persona = String::new();
    persona.push_str("REDDIT USER PERSONA ANALYSIS\n");
    persona.push_str(&"=".repeat(50));
    persona.push_str("\n\n");

    let _ = writeln!(persona, "**Name/Handle**: u/{}\n", dataset.username);

    persona.push_str("**Demographics**:\n");
    persona.push_str("- Age Range: Unable to determine from available data\n");
    persona.push_str("- Gender: Not specified\n");
    persona.push_str("- Location: Not determinable from public posts\n\n");

    persona.push_str("**Primary Interests**:\n");
    persona.push_str("Based on subreddit activity, this user shows interest in:\n");
    for (subreddit, count) in top {
        let _ = writeln!(persona, "- r/{subreddit} ({count} posts/comments)");
    }

    persona.push_str("\n**Communication Style**:\n");
    let _ = writeln!(
        persona,
        "- Posts {} submissions and {} comments in recent activity",
        posts.len(),
        comments.len()
    );
    let _ = writeln!(persona, "- Average post score: {avg_post_score:.1}");
    let _ = writeln!(persona, "- Average comment score: {avg_comment_score:.1}");
    let _ = writeln!(
        persona,
        "- Engagement level: {}",
        engagement_label(posts.len() + comments.len())
    );

    persona.push_str("\n**Top Subreddits**:\n");
    for (i, (subreddit, count)) in top.iter().enumerate() {
        let _ = writeln!(persona, "{}. r/{} - {} interactions", i + 1, subreddit, count);
    }

    persona.push_str("\n**Posting Behavior**:\n");
    let _ = writeln!(persona, "- Content creation: {} original posts", posts.len());
    let _ = writeln!(persona, "- Community engagement: {} comments", comments.len());
    let preferred = if comments.len() > posts.len() {
        "Comments"
    } else if posts.len() > comments.len() {
        "Posts"
    } else {
        "Balanced"
    };
    let _ = writeln!(persona, "- Preferred interaction: {preferred}");

    persona.push_str("\n**Standout Traits**:\n");
    let helpful = posts.iter().any(|p| {
        format!("{} {}", p.title, p.body).to_lowercase().contains("help")
    });
    if helpful {
        persona.push_str("- Helpful nature: Shows willingness to assist others\n");
    }
    if comments.iter().any(|c| c.body.chars().count() > DETAILED_COMMENT_LEN) {
        persona.push_str("- Detailed communicator: Writes comprehensive responses\n");
    }
    if frequencies.len() > DIVERSE_COMMUNITY_THRESHOLD {
        persona.push_str("- Diverse interests: Active across multiple communities\n");
    }

    persona.push_str("\n**Evidence Citations**:\n");
    if let Some(first) = posts.first() {
        let _ = writeln!(
            persona,
            "- Recent post in r/{}: \"{}\"",
            first.subreddit,
            excerpt(&first.title, CITATION_EXCERPT_LEN)
        );
    }
    if let Some(first) = comments.first() {
        let body = normalize(Some(first.body.as_str()));
        let _ = writeln!(
            persona,
            "- Recent comment in r/{}: \"{}\"",
            first.subreddit,
            excerpt(&body, CITATION_EXCERPT_LEN)
        );
    }

    persona.push_str("\n---\n");
    let _ = writeln!(
        persona,
        "Analysis generated on {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    persona.push_str(
        "Note: This is a basic analysis. For more detailed insights, configure OpenAI API access.\n",
    );

    persona
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{comment, dataset, post, scored_comment, scored_post};

    #[test]
    fn test_empty_dataset_total() {
        let persona = synthesize_heuristic(&dataset("ghost", vec![], vec![]));
        assert!(persona.contains("**Name/Handle**: u/ghost"));
        assert!(persona.contains("Engagement level: Low"));
        assert!(!persona.contains("Helpful nature"));
        assert!(!persona.contains("Detailed communicator"));
        assert!(!persona.contains("Diverse interests"));
    }

    #[test]
    fn test_community_ranking_and_boundaries() {
        // 2 posts in "a", 3 comments in "a","b","b" — total 5
        let ds = dataset(
            "u",
            vec![scored_post("p1", "a", "t1", 0), scored_post("p2", "a", "t2", 0)],
            vec![
                scored_comment("c1", "a", "x", 0),
                scored_comment("c2", "b", "x", 0),
                scored_comment("c3", "b", "x", 0),
            ],
        );
        let freq = community_frequencies(&ds);
        assert_eq!(freq, vec![("a".to_string(), 3), ("b".to_string(), 2)]);

        let persona = synthesize_heuristic(&ds);
        // 5 total is not > 5: still Low
        assert!(persona.contains("Engagement level: Low"));
        assert!(persona.contains("Preferred interaction: Comments"));
        assert!(persona.contains("Average post score: 0.0"));
        assert!(persona.contains("Average comment score: 0.0"));
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let ds = dataset(
            "u",
            vec![post("p1", "zebra", "t"), post("p2", "apple", "t")],
            vec![],
        );
        let freq = community_frequencies(&ds);
        assert_eq!(freq[0].0, "zebra");
        assert_eq!(freq[1].0, "apple");
    }

    #[test]
    fn test_case_sensitive_communities() {
        let ds = dataset("u", vec![post("p1", "Rust", "t"), post("p2", "rust", "t")], vec![]);
        assert_eq!(community_frequencies(&ds).len(), 2);
    }

    #[test]
    fn test_engagement_thresholds() {
        assert_eq!(engagement_label(0), "Low");
        assert_eq!(engagement_label(5), "Low");
        assert_eq!(engagement_label(6), "Moderate");
        assert_eq!(engagement_label(15), "Moderate");
        assert_eq!(engagement_label(16), "High");
    }

    #[test]
    fn test_average_ignores_nonpositive() {
        let ds = dataset(
            "u",
            vec![
                scored_post("p1", "a", "t", 10),
                scored_post("p2", "a", "t", -3),
                scored_post("p3", "a", "t", 0),
            ],
            vec![],
        );
        let persona = synthesize_heuristic(&ds);
        assert!(persona.contains("Average post score: 10.0"));
    }

    #[test]
    fn test_standout_traits() {
        let long_body = "y".repeat(501);
        let ds = dataset(
            "u",
            vec![post("p1", "s1", "Need HELP with borrow checker")],
            vec![comment("c1", "s2", &long_body)],
        );
        let persona = synthesize_heuristic(&ds);
        assert!(persona.contains("Helpful nature"));
        assert!(persona.contains("Detailed communicator"));
        assert!(!persona.contains("Diverse interests"));

        let many_subs: Vec<_> = (0..6).map(|i| post(&format!("p{i}"), &format!("s{i}"), "t")).collect();
        let persona = synthesize_heuristic(&dataset("u", many_subs, vec![]));
        assert!(persona.contains("Diverse interests"));
    }

    #[test]
    fn test_citations_from_first_entries() {
        let ds = dataset(
            "u",
            vec![post("p1", "first", "the title"), post("p2", "second", "other")],
            vec![comment("c1", "csub", "a **bold** remark")],
        );
        let persona = synthesize_heuristic(&ds);
        assert!(persona.contains("- Recent post in r/first: \"the title...\""));
        assert!(persona.contains("- Recent comment in r/csub: \"a bold remark...\""));
        assert!(!persona.contains("r/second:"));
    }
}
