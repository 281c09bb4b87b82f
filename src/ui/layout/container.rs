//! Page container and hero heading.

use leptos::prelude::*;

use crate::content::Hero;
use crate::motion::Motion;
use crate::ui::layout::FloatingDecorations;

/// Top-level wrapper of a page.
///
/// Owns the page-wide layout and background, renders the decoration layer
/// exactly once, then the page's sections in the order given.
#[component]
pub fn PageContainer(
    /// Page key, used for `data-page` and page-specific styling.
    page: &'static str,
    /// Motion settings for this render.
    motion: Motion,
    /// Sections of the page, in order.
    children: Children,
) -> impl IntoView {
    let classes = format!("page page-{page} relative overflow-hidden");

    view! {
        <div class=classes data-page=page>
            <div class="page-backdrop absolute inset-0 -z-10 bg-gradient-hero" aria-hidden="true"></div>
            <FloatingDecorations motion=motion />
            <div class="relative z-10 container mx-auto max-w-6xl px-4 md:px-6 py-12 md:py-20 space-y-20">
                {children()}
            </div>
        </div>
    }
}

/// Heading block at the top of a page.
#[component]
pub fn PageHero(
    hero: Hero,
    motion: Motion,
    /// Optional line under the intro, such as a "last updated" date.
    #[prop(optional)]
    note: Option<String>,
) -> impl IntoView {
    let reveal = motion.reveal(0);

    view! {
        <header class="page-hero reveal text-center space-y-4" data-reveal-once="true" style=reveal.style()>
            <p class="text-sm font-semibold uppercase tracking-widest text-primary">{hero.eyebrow}</p>
            <h1 class="text-4xl md:text-6xl font-bold text-balance">{hero.headline}</h1>
            <p class="mx-auto max-w-2xl text-lg text-textMuted">{hero.intro}</p>
            {note.map(|note| view! { <p class="text-xs text-textMuted" data-note="true">{note}</p> })}
        </header>
    }
}
