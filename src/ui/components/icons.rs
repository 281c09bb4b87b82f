//! SVG icon rendering.
//!
//! Icons are rendered inline as SVG elements so they inherit `currentColor`
//! and need no asset requests.

use leptos::prelude::*;

use crate::content::Icon;

/// Common icon size class.
const ICON_SIZE: &str = "h-5 w-5";

/// Inline SVG for a named [`Icon`].
#[component]
pub fn IconGlyph(
    /// Icon to draw.
    icon: Icon,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("{} {}", ICON_SIZE, class);
    let paths = icon
        .paths()
        .iter()
        .map(|d| view! { <path d=*d /> })
        .collect_view();

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-icon=icon.name()
            class=classes
        >
            {paths}
        </svg>
    }
}
