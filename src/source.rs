//! Reddit data source — fetch a user's recent posts and comments.
//!
//! Uses the OAuth2 client-credentials flow against Reddit's public API.
//! Posts and comments are fetched independently: a failure on one side is
//! logged and yields an empty list, it never aborts the other side.

use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::config::RedditCredentials;
use crate::constants::FETCH_TIMEOUT;
use crate::error::{PersonaError, PersonaResult};
use crate::model::{Comment, Post, UserDataset};

/// Remote read-only source of user activity.
pub trait DataSource {
    fn fetch_user_data(
        &self,
        username: &str,
        post_limit: usize,
        comment_limit: usize,
    ) -> PersonaResult<UserDataset>;
}

pub struct RedditClient {
    credentials: RedditCredentials,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct Listing<T> {
    data: ListingData<T>,
}

#[derive(Deserialize)]
struct ListingData<T> {
    children: Vec<Child<T>>,
}

#[derive(Deserialize)]
struct Child<T> {
    data: T,
}

#[derive(Deserialize)]
struct RawPost {
    id: String,
    title: String,
    #[serde(default)]
    selftext: String,
    subreddit: String,
    score: i64,
    created_utc: f64,
    #[serde(default)]
    url: String,
    #[serde(default)]
    num_comments: u64,
}

#[derive(Deserialize)]
struct RawComment {
    id: String,
    body: String,
    subreddit: String,
    score: i64,
    created_utc: f64,
    parent_id: String,
}

fn epoch_to_utc(secs: f64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs as i64, 0).unwrap_or_default()
}

impl RedditClient {
    pub fn new(credentials: RedditCredentials) -> Self {
        Self { credentials }
    }

    /// Build from environment credentials. Fails with `DataSourceUnavailable`
    /// when they are absent.
    pub fn from_env() -> PersonaResult<Self> {
        let client = Self::new(RedditCredentials::from_env()?);
        tracing::info!("Reddit API client initialized");
        Ok(client)
    }

    fn authenticate(&self) -> PersonaResult<String> {
        let basic = base64::engine::general_purpose::STANDARD.encode(format!(
            "{}:{}",
            self.credentials.client_id, self.credentials.client_secret
        ));

        let mut response = ureq::post("https://www.reddit.com/api/v1/access_token")
            .header("Authorization", &format!("Basic {basic}"))
            .header("User-Agent", &self.credentials.user_agent)
            .header("content-type", "application/x-www-form-urlencoded")
            .config()
            .timeout_global(Some(FETCH_TIMEOUT))
            .build()
            .send("grant_type=client_credentials")
            .map_err(|e| PersonaError::Fetch(format!("token request failed: {e}")))?;

        let token: TokenResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| PersonaError::Fetch(format!("token response malformed: {e}")))?;
        Ok(token.access_token)
    }

    fn get(&self, token: &str, path: &str) -> Result<ureq::Body, ureq::Error> {
        let response = ureq::get(format!("https://oauth.reddit.com{path}"))
            .header("Authorization", &format!("Bearer {token}"))
            .header("User-Agent", &self.credentials.user_agent)
            .config()
            .timeout_global(Some(FETCH_TIMEOUT))
            .build()
            .call()?;
        Ok(response.into_body())
    }

    /// Existence probe. 404 means missing or suspended account.
    fn check_user_exists(&self, token: &str, username: &str) -> PersonaResult<()> {
        match self.get(token, &format!("/user/{username}/about")) {
            Ok(_) => Ok(()),
            Err(ureq::Error::StatusCode(404)) => {
                Err(PersonaError::UserNotFound(username.to_string()))
            }
            Err(e) => Err(PersonaError::Fetch(format!("user lookup failed: {e}"))),
        }
    }

    fn fetch_posts(&self, token: &str, username: &str, limit: usize) -> PersonaResult<Vec<Post>> {
        let mut body = self
            .get(token, &format!("/user/{username}/submitted?limit={limit}&sort=new"))
            .map_err(|e| PersonaError::Fetch(e.to_string()))?;
        let listing: Listing<RawPost> = body
            .read_json()
            .map_err(|e| PersonaError::Fetch(e.to_string()))?;

        Ok(listing
            .data
            .children
            .into_iter()
            .map(|c| Post {
                id: c.data.id,
                title: c.data.title,
                body: c.data.selftext,
                subreddit: c.data.subreddit,
                score: c.data.score,
                created_at: epoch_to_utc(c.data.created_utc),
                url: c.data.url,
                num_comments: c.data.num_comments,
            })
            .collect())
    }

    fn fetch_comments(
        &self,
        token: &str,
        username: &str,
        limit: usize,
    ) -> PersonaResult<Vec<Comment>> {
        let mut body = self
            .get(token, &format!("/user/{username}/comments?limit={limit}&sort=new"))
            .map_err(|e| PersonaError::Fetch(e.to_string()))?;
        let listing: Listing<RawComment> = body
            .read_json()
            .map_err(|e| PersonaError::Fetch(e.to_string()))?;

        Ok(listing
            .data
            .children
            .into_iter()
            .map(|c| Comment {
                id: c.data.id,
                body: c.data.body,
                subreddit: c.data.subreddit,
                score: c.data.score,
                created_at: epoch_to_utc(c.data.created_utc),
                parent_id: c.data.parent_id,
            })
            .collect())
    }
}

impl DataSource for RedditClient {
    fn fetch_user_data(
        &self,
        username: &str,
        post_limit: usize,
        comment_limit: usize,
    ) -> PersonaResult<UserDataset> {
        let token = self.authenticate()?;
        self.check_user_exists(&token, username)?;

        tracing::info!(username, "Scraping user data");

        let posts = match self.fetch_posts(&token, username, post_limit) {
            Ok(posts) => posts,
            Err(e) => {
                tracing::warn!(error = %e, "Error fetching posts");
                Vec::new()
            }
        };
        let comments = match self.fetch_comments(&token, username, comment_limit) {
            Ok(comments) => comments,
            Err(e) => {
                tracing::warn!(error = %e, "Error fetching comments");
                Vec::new()
            }
        };

        tracing::info!(
            posts = posts.len(),
            comments = comments.len(),
            "Successfully scraped user data"
        );

        Ok(UserDataset {
            username: username.to_string(),
            posts,
            comments,
            fetched_at: Utc::now(),
        })
    }
}
