use crate::controller::PageController;
use crate::github::GitHubApi;
use crate::pagination::PageSize;
use crate::view::{HtmlView, ViewPort};
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Liveness probe response (minimal, just indicates the process is running)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub status: String,
}

/// Query string sent by the search form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub username: String,
    pub per_page: Option<String>,
}

/// One viewer session shared by every browser tab talking to this process.
pub struct AppState<A> {
    pub controller: PageController<A, HtmlView>,
}

pub fn router<A: GitHubApi + 'static>(state: Arc<AppState<A>>) -> Router {
    Router::new()
        .route("/", get(index::<A>))
        .route("/search", get(search::<A>))
        .route("/page/:page", get(change_page::<A>))
        .route("/livez", get(liveness_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the viewer HTTP server
pub async fn start_server<A: GitHubApi + 'static>(
    state: Arc<AppState<A>>,
    host: &str,
    port: u16,
) -> crate::error::Result<()> {
    let app = router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Viewer listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn render<A: GitHubApi>(state: &AppState<A>) -> Html<String> {
    let snapshot = state.controller.snapshot();
    Html(state.controller.view().document(&snapshot))
}

async fn index<A: GitHubApi>(State(state): State<Arc<AppState<A>>>) -> impl IntoResponse {
    render(&state)
}

async fn search<A: GitHubApi>(
    State(state): State<Arc<AppState<A>>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    if let Some(raw) = params.per_page.as_deref() {
        match raw.parse::<PageSize>() {
            Ok(page_size) => state.controller.select_page_size(page_size),
            Err(e) => {
                warn!(error = %e, "Ignoring page size");
                state.controller.view().alert(&e.to_string());
            }
        }
    }

    state.controller.search(&params.username).await;
    render(&state)
}

async fn change_page<A: GitHubApi>(
    State(state): State<Arc<AppState<A>>>,
    Path(page): Path<u32>,
) -> impl IntoResponse {
    state.controller.change_page(page).await;
    render(&state)
}

/// Liveness check - just returns OK if the process is running
async fn liveness_check() -> impl IntoResponse {
    Json(LivenessResponse {
        status: "ok".to_string(),
    })
}
