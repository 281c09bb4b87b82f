//! Site header and footer.

use leptos::prelude::*;

use crate::content::Icon;
use crate::routes::SiteRoute;
use crate::ui::components::IconGlyph;

/// Site header with primary navigation.
#[component]
pub fn SiteHeader(
    site_name: String,
    /// Route being rendered; highlighted in the navigation.
    #[prop(optional_no_strip)]
    current: Option<SiteRoute>,
) -> impl IntoView {
    let links = SiteRoute::primary_nav()
        .into_iter()
        .map(|route| {
            let active = current == Some(route);
            let classes = if active {
                "px-3 py-2 rounded-xl text-sm text-textPrimary bg-surface"
            } else {
                "px-3 py-2 rounded-xl text-sm text-textSecondary hover:text-textPrimary hover:bg-surface transition-all"
            };
            let aria_current = active.then_some("page");
            view! {
                <a href=route.path() class=classes aria-current=aria_current>{route.title()}</a>
            }
        })
        .collect_view();

    view! {
        <header class="sticky top-0 z-50 w-full bg-surfaceContainer/90 backdrop-blur shadow-sm">
            <div class="container mx-auto flex h-14 md:h-16 items-center justify-between px-4 md:px-6 max-w-6xl">
                <a href=SiteRoute::Home.path() class="flex items-center gap-2 font-semibold hover:opacity-80 transition-opacity">
                    <IconGlyph icon=Icon::Sparkles class="text-primary" />
                    <span class="text-base md:text-lg">{site_name}</span>
                </a>
                <nav class="flex items-center gap-1" data-nav="primary">
                    {links}
                </nav>
            </div>
        </header>
    }
}

/// Footer with legal links.
#[component]
pub fn SiteFooter(site_name: String) -> impl IntoView {
    let links = SiteRoute::legal_nav()
        .into_iter()
        .map(|route| {
            view! {
                <a href=route.path() class="text-xs text-textMuted hover:text-textPrimary">{route.title()}</a>
            }
        })
        .collect_view();

    view! {
        <footer class="bg-surfaceContainer py-6">
            <div class="container mx-auto flex flex-col md:flex-row items-center justify-between gap-4 px-4 md:px-6 max-w-6xl">
                <p class="text-xs text-textMuted">{site_name}</p>
                <nav class="flex items-center gap-4" data-nav="legal">
                    {links}
                </nav>
            </div>
        </footer>
    }
}
