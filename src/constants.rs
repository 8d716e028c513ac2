use std::time::Duration;

// === Fetch defaults ===
pub const DEFAULT_POST_LIMIT: usize = 10;
pub const DEFAULT_COMMENT_LIMIT: usize = 10;
pub const DEFAULT_USER_AGENT: &str = "PersonaGenerator/1.0";

// === Evidence digest ===
pub const DIGEST_POST_LIMIT: usize = 5;
pub const DIGEST_COMMENT_LIMIT: usize = 5;
pub const EXCERPT_MAX_LEN: usize = 200;
pub const CITATION_EXCERPT_LEN: usize = 100;

// === Heuristic persona ===
pub const TOP_COMMUNITY_LIMIT: usize = 5;
pub const ENGAGEMENT_HIGH_THRESHOLD: usize = 15;
pub const ENGAGEMENT_MODERATE_THRESHOLD: usize = 5;
pub const DETAILED_COMMENT_LEN: usize = 500;
pub const DIVERSE_COMMUNITY_THRESHOLD: usize = 5;

// === Text generation ===
pub const GENERATION_MODEL: &str = "gpt-4";
pub const GENERATION_MAX_TOKENS: u32 = 2_000;
pub const GENERATION_TEMPERATURE: f64 = 0.7;

// === HTTP ===
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
pub const GENERATION_TIMEOUT: Duration = Duration::from_secs(120);

// === CLI ===
pub const PREVIEW_LEN: usize = 500;
