#![allow(dead_code)]

use async_trait::async_trait;
use github_profile_viewer::error::{Result, ViewerError};
use github_profile_viewer::github::{GitHubApi, RepoQuery};
use github_profile_viewer::pagination::PaginationStrip;
use github_profile_viewer::render::{ProfileCard, RepoGrid};
use github_profile_viewer::types::{Profile, RepositorySummary};
use github_profile_viewer::view::ViewPort;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Profile(String),
    Repositories(String, RepoQuery),
}

/// Holds a profile fetch open until released.
pub struct Gate {
    pub username: String,
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
}

/// In-memory GitHub: pages are sliced from the full repository list.
#[derive(Default)]
pub struct FakeApi {
    pub profiles: HashMap<String, Profile>,
    pub repositories: HashMap<String, Vec<RepositorySummary>>,
    pub failing_repos: HashSet<String>,
    pub gates: HashMap<String, Gate>,
    pub calls: Mutex<Vec<ApiCall>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, login: &str, repo_count: u32) -> Self {
        self.profiles.insert(login.to_string(), profile(login, repo_count));
        self.repositories
            .insert(login.to_string(), repositories(login, repo_count as usize));
        self
    }

    pub fn failing_repositories_for(mut self, login: &str) -> Self {
        self.failing_repos.insert(login.to_string());
        self
    }

    /// Each gated user gets its own hold; gate several to keep requests overlapping.
    pub fn gated(mut self, login: &str) -> (Self, Arc<Notify>, Arc<Notify>) {
        let started = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        self.gates.insert(
            login.to_string(),
            Gate {
                username: login.to_string(),
                started: started.clone(),
                release: release.clone(),
            },
        );
        (self, started, release)
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GitHubApi for FakeApi {
    async fn fetch_profile(&self, username: &str) -> Result<Profile> {
        self.calls
            .lock()
            .unwrap()
            .push(ApiCall::Profile(username.to_string()));

        if let Some(gate) = self.gates.get(username) {
            gate.started.notify_one();
            gate.release.notified().await;
        }

        self.profiles
            .get(username)
            .cloned()
            .ok_or_else(|| ViewerError::NotFound("User not found.".to_string()))
    }

    async fn fetch_repositories(
        &self,
        username: &str,
        query: RepoQuery,
    ) -> Result<Vec<RepositorySummary>> {
        self.calls
            .lock()
            .unwrap()
            .push(ApiCall::Repositories(username.to_string(), query));

        if self.failing_repos.contains(username) {
            return Err(ViewerError::FetchError(
                "Error fetching repositories.".to_string(),
            ));
        }

        let all = self.repositories.get(username).cloned().unwrap_or_default();
        let start = ((query.page.max(1) - 1) * query.per_page) as usize;
        Ok(all
            .into_iter()
            .skip(start)
            .take(query.per_page as usize)
            .collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Profile(ProfileCard),
    Repositories(RepoGrid),
    Pagination(PaginationStrip),
    Loading(bool),
    Alert(String),
}

/// Records every call the controller makes into the view.
#[derive(Default)]
pub struct RecordingView {
    pub events: Mutex<Vec<Rendered>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<Rendered> {
        self.events.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Rendered::Alert(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn last_profile(&self) -> Option<ProfileCard> {
        self.events().into_iter().rev().find_map(|e| match e {
            Rendered::Profile(card) => Some(card),
            _ => None,
        })
    }

    pub fn last_grid(&self) -> Option<RepoGrid> {
        self.events().into_iter().rev().find_map(|e| match e {
            Rendered::Repositories(grid) => Some(grid),
            _ => None,
        })
    }

    pub fn last_pagination(&self) -> Option<PaginationStrip> {
        self.events().into_iter().rev().find_map(|e| match e {
            Rendered::Pagination(strip) => Some(strip),
            _ => None,
        })
    }

    pub fn is_loading(&self) -> bool {
        self.events()
            .into_iter()
            .rev()
            .find_map(|e| match e {
                Rendered::Loading(visible) => Some(visible),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl ViewPort for RecordingView {
    fn show_profile(&self, card: &ProfileCard) {
        self.events.lock().unwrap().push(Rendered::Profile(card.clone()));
    }

    fn show_repositories(&self, grid: &RepoGrid) {
        self.events
            .lock()
            .unwrap()
            .push(Rendered::Repositories(grid.clone()));
    }

    fn show_pagination(&self, strip: &PaginationStrip) {
        self.events
            .lock()
            .unwrap()
            .push(Rendered::Pagination(strip.clone()));
    }

    fn set_loading(&self, visible: bool) {
        self.events.lock().unwrap().push(Rendered::Loading(visible));
    }

    fn alert(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(Rendered::Alert(message.to_string()));
    }
}

pub fn profile(login: &str, public_repos: u32) -> Profile {
    Profile {
        login: login.to_string(),
        avatar_url: format!("https://avatars.githubusercontent.com/{}", login),
        html_url: format!("https://github.com/{}", login),
        name: Some(format!("The {}", login)),
        bio: Some("Writes code.".to_string()),
        location: Some("San Francisco".to_string()),
        twitter_username: None,
        public_repos,
    }
}

/// Newest first, as `sort=created` returns them.
pub fn repositories(login: &str, count: usize) -> Vec<RepositorySummary> {
    (0..count)
        .map(|i| RepositorySummary {
            name: format!("{}-repo-{}", login, i + 1),
            description: Some(format!("Repository number {}", i + 1)),
            topics: vec!["rust".to_string()],
            created_at: None,
        })
        .collect()
}
