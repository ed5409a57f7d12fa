//! Search and page-change orchestration.
//!
//! The controller owns all viewer state. Requests are numbered; a response is
//! only rendered if no newer request was issued while it was in flight.

use crate::config::PageReset;
use crate::error::{Result, ViewerError};
use crate::github::{GitHubApi, RepoQuery};
use crate::pagination::{total_pages, PageSize, PaginationStrip};
use crate::render::{ProfileCard, RepoGrid};
use crate::types::{Profile, RepositorySummary};
use crate::view::ViewPort;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, info};

pub const VALIDATION_MESSAGE: &str = "Please enter a valid username.";
pub const FETCH_FAILED_MESSAGE: &str = "An error occurred while fetching user data.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing searched yet.
    #[default]
    Idle,
    Loading,
    Loaded,
}

/// Result of the last successful search.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPage {
    pub username: String,
    pub profile: Profile,
    pub repositories: Vec<RepositorySummary>,
    pub page: u32,
    pub page_size: PageSize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    pub phase: Phase,
    pub current_page: u32,
    /// Dropdown selection; applies to the next request.
    pub selected_page_size: PageSize,
    pub loaded: Option<LoadedPage>,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            current_page: 1,
            selected_page_size: PageSize::default(),
            loaded: None,
        }
    }
}

impl ViewerState {
    /// Page count for the last loaded profile at the selected page size.
    pub fn total_pages(&self) -> Option<u32> {
        self.loaded
            .as_ref()
            .map(|loaded| total_pages(loaded.profile.public_repos, self.selected_page_size.get()))
    }

    fn settled_phase(&self) -> Phase {
        if self.loaded.is_some() {
            Phase::Loaded
        } else {
            Phase::Idle
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Character(char),
    Other,
}

/// Input coming from the viewer surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    KeyPressed { key: Key, input: String },
    SearchClicked { input: String },
    PageClicked(u32),
    PageSizeSelected(PageSize),
}

#[derive(Debug)]
pub enum Outcome {
    /// Blank username, nothing fetched.
    Rejected,
    /// Event had no effect.
    Ignored,
    /// State changed without a fetch.
    Updated,
    Loaded,
    /// Fetch failed; the error was logged and a generic alert raised.
    Failed(ViewerError),
    /// A newer request was issued while this one was in flight.
    Superseded,
}

pub struct PageController<A, V> {
    api: A,
    view: V,
    page_reset: PageReset,
    state: Mutex<ViewerState>,
    latest_request: AtomicU64,
}

impl<A: GitHubApi, V: ViewPort> PageController<A, V> {
    pub fn new(api: A, view: V) -> Self {
        PageController {
            api,
            view,
            page_reset: PageReset::default(),
            state: Mutex::new(ViewerState::default()),
            latest_request: AtomicU64::new(0),
        }
    }

    pub fn with_page_reset(mut self, page_reset: PageReset) -> Self {
        self.page_reset = page_reset;
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.state
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .selected_page_size = page_size;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn snapshot(&self) -> ViewerState {
        self.state().clone()
    }

    fn state(&self) -> MutexGuard<'_, ViewerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_current(&self, token: u64) -> bool {
        self.latest_request.load(Ordering::SeqCst) == token
    }

    pub fn select_page_size(&self, page_size: PageSize) {
        debug!(page_size = page_size.get(), "Page size selected");
        self.state().selected_page_size = page_size;
    }

    pub async fn handle(&self, event: UiEvent) -> Outcome {
        match event {
            UiEvent::KeyPressed { key: Key::Enter, input } => self.search(&input).await,
            UiEvent::KeyPressed { .. } => Outcome::Ignored,
            UiEvent::SearchClicked { input } => self.search(&input).await,
            UiEvent::PageClicked(page) => self.change_page(page).await,
            UiEvent::PageSizeSelected(page_size) => {
                self.select_page_size(page_size);
                Outcome::Updated
            }
        }
    }

    pub async fn search(&self, input: &str) -> Outcome {
        let username = input.trim();
        if username.is_empty() {
            debug!("Rejected blank username");
            self.view.alert(VALIDATION_MESSAGE);
            return Outcome::Rejected;
        }

        let page = {
            let mut state = self.state();
            if self.page_reset == PageReset::Reset {
                state.current_page = 1;
            }
            state.current_page
        };

        self.load(username.to_string(), page).await
    }

    /// Re-runs the last search on `new_page`; out-of-range pages are ignored.
    pub async fn change_page(&self, new_page: u32) -> Outcome {
        let username = {
            let mut state = self.state();
            let Some(total) = state.total_pages() else {
                debug!(new_page, "Page change before any search");
                return Outcome::Ignored;
            };
            if new_page < 1 || new_page > total {
                debug!(new_page, total, "Page out of range");
                return Outcome::Ignored;
            }
            let Some(username) = state.loaded.as_ref().map(|loaded| loaded.username.clone()) else {
                return Outcome::Ignored;
            };
            state.current_page = new_page;
            username
        };

        self.load(username, new_page).await
    }

    /// Searches, then moves to `page` unless it is the first. A page outside
    /// the loaded range, zero included, comes back as `Ignored`.
    pub async fn open(&self, input: &str, page: u32) -> Outcome {
        let outcome = self.search(input).await;
        if page == 1 || !matches!(outcome, Outcome::Loaded) {
            return outcome;
        }
        self.change_page(page).await
    }

    /// Takes the next request token and shows the loading indicator.
    fn begin(&self) -> (LoadingIndicator<'_, A, V>, PageSize) {
        let mut state = self.state();
        let token = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        state.phase = Phase::Loading;
        self.view.set_loading(true);
        (
            LoadingIndicator {
                controller: self,
                token,
            },
            state.selected_page_size,
        )
    }

    async fn load(&self, username: String, page: u32) -> Outcome {
        let (loading, page_size) = self.begin();
        let token = loading.token;
        debug!(token, %username, page, page_size = page_size.get(), "Loading profile");

        let query = RepoQuery {
            page,
            per_page: page_size.get(),
        };

        let fetched = self.fetch(token, &username, query).await;

        // Held through rendering so a newer request cannot interleave with it.
        let mut state = self.state();
        if !self.is_current(token) {
            match &fetched {
                Err(e) => debug!(token, %username, error = %e, "Discarding stale failure"),
                Ok(_) => debug!(token, %username, "Discarding stale response"),
            }
            return Outcome::Superseded;
        }

        match fetched {
            Ok(Some((profile, repositories))) => {
                let strip = PaginationStrip::build(profile.public_repos, page_size.get(), page);
                self.view.show_pagination(&strip);
                self.view.show_profile(&ProfileCard::from(&profile));
                self.view.show_repositories(&RepoGrid::build(&repositories));

                info!(
                    %username,
                    page,
                    total_pages = strip.total_pages,
                    repositories = repositories.len(),
                    "Loaded profile"
                );

                state.current_page = page;
                state.phase = Phase::Loaded;
                state.loaded = Some(LoadedPage {
                    username,
                    profile,
                    repositories,
                    page,
                    page_size,
                });
                Outcome::Loaded
            }
            Ok(None) => Outcome::Superseded,
            Err(e) => {
                error!(%username, page, error = %e, "Search failed");
                self.view.alert(FETCH_FAILED_MESSAGE);

                let phase = state.settled_phase();
                state.phase = phase;
                Outcome::Failed(e)
            }
        }
    }

    /// Profile first, then the repository page. `None` once superseded.
    async fn fetch(
        &self,
        token: u64,
        username: &str,
        query: RepoQuery,
    ) -> Result<Option<(Profile, Vec<RepositorySummary>)>> {
        let profile = self.api.fetch_profile(username).await?;
        if !self.is_current(token) {
            return Ok(None);
        }

        let repositories = self.api.fetch_repositories(username, query).await?;
        if !self.is_current(token) {
            return Ok(None);
        }

        Ok(Some((profile, repositories)))
    }
}

/// Keeps the loading indicator up while a request is in flight. Only the
/// latest request hides it, so a superseded one finishing early leaves it on.
struct LoadingIndicator<'a, A: GitHubApi, V: ViewPort> {
    controller: &'a PageController<A, V>,
    token: u64,
}

impl<A: GitHubApi, V: ViewPort> Drop for LoadingIndicator<'_, A, V> {
    fn drop(&mut self) {
        let _state = self.controller.state();
        if self.controller.is_current(self.token) {
            self.controller.view.set_loading(false);
        }
    }
}
