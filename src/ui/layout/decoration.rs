//! Floating decoration layer.

use leptos::prelude::*;

use crate::content::Icon;
use crate::motion::{Motion, decoration_glyph};
use crate::ui::components::IconGlyph;

/// Ambient glyphs drifting behind the page content.
///
/// Purely cosmetic: hidden from assistive technology, ignores pointer
/// input, and depends on nothing but the glyph index.
#[component]
pub fn FloatingDecorations(motion: Motion) -> impl IntoView {
    let glyphs = (0..motion.decoration_count)
        .map(|index| {
            let path = decoration_glyph(index, motion.preference);
            let icon = Icon::DECORATIVE[index % Icon::DECORATIVE.len()];
            view! {
                <span class="floating-glyph absolute text-primary/20" data-glyph=index.to_string() style=path.style()>
                    <IconGlyph icon=icon class="h-8 w-8" />
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="floating-decorations pointer-events-none absolute inset-0 -z-10" aria-hidden="true">
            {glyphs}
        </div>
    }
}
