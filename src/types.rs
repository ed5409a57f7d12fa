use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// GitHub API response structures

/// `GET /users/{username}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub twitter_username: Option<String>,
    pub public_repos: u32,
}

/// One entry of `GET /users/{username}/repos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
