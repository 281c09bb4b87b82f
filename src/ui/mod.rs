//! UI components and layouts.
//!
//! This module provides Leptos SSR components for rendering the site's
//! pages.
//!
//! # Structure
//!
//! - [`app`]: Document shell and page dispatch
//! - [`components`]: Reusable UI components
//! - [`layout`]: Page container, decoration layer, section renderer, CTA
//! - [`pages`]: One component per page

pub mod app;
pub mod components;
pub mod layout;
pub mod pages;

pub use app::{Page, RenderContext, render_page};
