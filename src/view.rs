use crate::controller::ViewerState;
use crate::pagination::{PageSize, PaginationStrip};
use crate::render::html;
use crate::render::{ProfileCard, RepoGrid};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Render targets the controller draws into.
///
/// Implementations replace the whole target on every call, the same way
/// assigning `innerHTML` would.
pub trait ViewPort: Send + Sync {
    fn show_profile(&self, card: &ProfileCard);
    fn show_repositories(&self, grid: &RepoGrid);
    fn show_pagination(&self, strip: &PaginationStrip);
    fn set_loading(&self, visible: bool);
    fn alert(&self, message: &str);
}

#[derive(Debug, Clone, Default)]
struct HtmlTargets {
    image: String,
    bio: String,
    repos: String,
    pagination: String,
    loading: bool,
    alerts: Vec<String>,
}

/// Keeps the latest HTML fragment for each target.
pub struct HtmlView {
    targets: Mutex<HtmlTargets>,
    page_href: Box<dyn Fn(u32) -> String + Send + Sync>,
}

impl Default for HtmlView {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlView {
    /// Pagination links point at `/page/{n}`.
    pub fn new() -> Self {
        Self::with_page_href(|page| format!("/page/{}", page))
    }

    pub fn with_page_href<F>(page_href: F) -> Self
    where
        F: Fn(u32) -> String + Send + Sync + 'static,
    {
        HtmlView {
            targets: Mutex::new(HtmlTargets::default()),
            page_href: Box::new(page_href),
        }
    }

    fn targets(&self) -> MutexGuard<'_, HtmlTargets> {
        self.targets.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn image_block(&self) -> String {
        self.targets().image.clone()
    }

    pub fn bio_block(&self) -> String {
        self.targets().bio.clone()
    }

    pub fn repo_block(&self) -> String {
        self.targets().repos.clone()
    }

    pub fn pagination_block(&self) -> String {
        self.targets().pagination.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.targets().loading
    }

    /// Drains alerts raised since the last call.
    pub fn take_alerts(&self) -> Vec<String> {
        std::mem::take(&mut self.targets().alerts)
    }

    /// Full page: search form, loader, render targets and pending alerts.
    pub fn document(&self, state: &ViewerState) -> String {
        let alerts: String = self.take_alerts().iter().map(|m| html::alert(m)).collect();
        let targets = self.targets().clone();

        let username = state
            .loaded
            .as_ref()
            .map(|loaded| loaded.username.as_str())
            .unwrap_or_default();
        let options: String = PageSize::choices()
            .map(|size| option(size, state.selected_page_size))
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<title>GitHub Profile Viewer</title>
</head>
<body>
<div class="container">
{alerts}
<form action="/search" method="get" class="d-flex mb-4">
<input id="usernameInput" name="username" type="text" placeholder="Enter GitHub username" value="{username}" />
<select id="reposPerPageSelect" name="per_page">{options}</select>
<button type="submit" class="btn btn-primary">Search</button>
</form>
{loader}
<div class="row">
<div id="imgContainer" class="col-md-4">{image}</div>
<div id="bioContainer" class="col-md-8">{bio}</div>
</div>
<div id="repoContainer" class="row">{repos}</div>
<ul id="paginationContainer" class="pagination">{pagination}</ul>
</div>
</body>
</html>
"#,
            alerts = alerts,
            username = html::escape(username),
            options = options,
            loader = html::loader(targets.loading),
            image = targets.image,
            bio = targets.bio,
            repos = targets.repos,
            pagination = targets.pagination,
        )
    }
}

fn option(size: PageSize, selected: PageSize) -> String {
    let flag = if size == selected { " selected" } else { "" };
    format!(r#"<option value="{size}"{flag}>{size}</option>"#, size = size, flag = flag)
}

impl ViewPort for HtmlView {
    fn show_profile(&self, card: &ProfileCard) {
        let mut targets = self.targets();
        targets.image = html::profile_image(card);
        targets.bio = html::profile_bio(card);
    }

    fn show_repositories(&self, grid: &RepoGrid) {
        self.targets().repos = html::repo_grid(grid);
    }

    fn show_pagination(&self, strip: &PaginationStrip) {
        let fragment = html::pagination(strip, &*self.page_href);
        self.targets().pagination = fragment;
    }

    fn set_loading(&self, visible: bool) {
        self.targets().loading = visible;
    }

    fn alert(&self, message: &str) {
        self.targets().alerts.push(message.to_string());
    }
}
