//! Reusable UI components.
//!
//! Composable, accessible building blocks rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`ButtonLink`]: Route link styled as a button, with variants
//! - [`Card`], [`CardHeader`], [`CardContent`]: Card container, optionally tiltable
//! - [`Badge`]: Short label such as a growth rate, toned by meaning
//! - [`IconGlyph`]: Inline SVG for a named icon

mod badge;
mod button;
mod card;
mod icons;

pub use badge::{Badge, BadgeTone};
pub use button::{ButtonLink, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardHeader};
pub use icons::IconGlyph;
