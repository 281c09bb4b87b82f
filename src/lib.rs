//! Halcyon marketing site
//!
//! Server-rendered content pages (markets, process, legal, 404, ...) built
//! with Axum and Leptos SSR.
//!
//! # Architecture
//!
//! - **Server**: Axum router with one GET route per declared page and a 404 fallback
//! - **Content**: ordered YAML tables, validated at startup
//! - **UI**: Leptos SSR components following one page/section pattern
//! - **Motion**: reveal, tilt and decoration values computed per request
//!
//! # Modules
//!
//! - [`config`]: Layered configuration (defaults, file, env, CLI)
//! - [`content`]: Page content tables and validation
//! - [`motion`]: Reduced-motion preference, reveal, tilt and decoration paths
//! - [`routes`]: Declared site routes
//! - [`server`]: HTTP server and handlers
//! - [`ui`]: Leptos components and pages

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod content;
pub mod error;
pub mod motion;
pub mod routes;
pub mod server;
pub mod telemetry;
pub mod ui;

use crate::config::AppConfig;
use crate::content::ContentLibrary;
use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
    /// Page content, loaded once at startup.
    pub content: Arc<ContentLibrary>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Arc<AppConfig>, content: Arc<ContentLibrary>) -> Self {
        Self { config, content }
    }
}
