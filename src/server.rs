use axum::{
    Json, Router,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, StatusCode, Uri, header},
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::AppState;
use crate::config::AppConfig;
use crate::content::ContentLibrary;
use crate::error::ServerError;
use crate::motion::{Motion, MotionPreference, REDUCED_MOTION_HINT};
use crate::routes::SiteRoute;
use crate::ui::{Page, RenderContext, render_page};

/// Client hints requested from browsers.
const ACCEPT_CH: HeaderName = HeaderName::from_static("accept-ch");

/// Load content and start the HTTP server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> Result<(), ServerError> {
    let content = ContentLibrary::load(config.site.content_file.as_deref())?;
    info!(
        name: "content.loaded",
        source = %config
            .site
            .content_file
            .as_ref()
            .map_or_else(|| "builtin".to_string(), |p| p.display().to_string()),
        sectors = content.markets.sectors.len(),
        steps = content.process.steps.len(),
        "Content loaded"
    );

    let state = AppState::new(Arc::clone(&config), Arc::new(content));
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            address: addr.clone(),
            source,
        })?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(ServerError::Serve)
}

/// Build the router: one GET route per declared page, static assets, a
/// health probe, and the 404 page for everything else.
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new();
    for route in SiteRoute::ALL {
        router = router.route(
            route.path(),
            get(move |State(state): State<AppState>, headers: HeaderMap| async move {
                page_response(&state, Page::Route(route), &headers, StatusCode::OK)
            }),
        );
    }

    let timeout = Duration::from_secs(state.config.server.request_timeout_secs);

    router
        .route("/healthz", get(healthz))
        .nest_service("/static", ServeDir::new(&state.config.site.static_dir))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(
                    move |req: Request, next: Next| async move {
                        match tokio::time::timeout(timeout, next.run(req)).await {
                            Ok(res) => res,
                            Err(_) => {
                                (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response()
                            }
                        }
                    },
                )),
        )
        .with_state(state)
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Catch-all: the 404 page.
async fn not_found(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Response {
    info!(name: "page.not_found", path = %uri.path(), "No route for path");
    page_response(&state, Page::NotFound, &headers, StatusCode::NOT_FOUND)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    pages: usize,
}

/// GET /healthz
async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        pages: SiteRoute::ALL.len(),
    })
}

fn page_response(
    state: &AppState,
    page: Page,
    headers: &HeaderMap,
    status: StatusCode,
) -> Response {
    let preference = MotionPreference::from_headers(headers);
    let ctx = RenderContext {
        site_name: state.config.site.name.clone(),
        content: Arc::clone(&state.content),
        motion: Motion::new(&state.config.motion, preference),
    };

    let html = render_page(page, &ctx);
    debug!(
        name: "page.rendered",
        page = ?page,
        reduced_motion = preference.is_reduced(),
        bytes = html.len(),
        "Page rendered"
    );

    (
        status,
        [
            (ACCEPT_CH, REDUCED_MOTION_HINT),
            (header::VARY, REDUCED_MOTION_HINT),
        ],
        Html(html),
    )
        .into_response()
}
