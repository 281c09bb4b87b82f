//! Pill labels: sector growth, step durations, cookie consent state.

use leptos::prelude::*;

use crate::content::Icon;
use crate::ui::components::IconGlyph;

/// What a badge communicates, which decides its colour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeTone {
    /// Brand-coloured, for things that always apply.
    #[default]
    Accent,
    /// Upward figures such as growth rates.
    Growth,
    /// Outlined, for neutral facts such as durations or opt-in state.
    Neutral,
}

impl BadgeTone {
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Accent => "bg-primary text-white",
            Self::Growth => "bg-success/15 text-success border border-success/30",
            Self::Neutral => "border border-panelBorder bg-transparent text-textSecondary",
        }
    }

    /// Value of the `data-badge` attribute.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Accent => "accent",
            Self::Growth => "growth",
            Self::Neutral => "neutral",
        }
    }
}

/// Short label, optionally led by an icon.
///
/// ```rust,ignore
/// view! {
///     <Badge tone=BadgeTone::Growth icon=Some(Icon::TrendingUp)>"+18% CAGR"</Badge>
/// }
/// ```
#[component]
pub fn Badge(
    #[prop(default = BadgeTone::Accent)]
    tone: BadgeTone,
    /// Leading icon.
    #[prop(optional_no_strip)]
    icon: Option<Icon>,
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "inline-flex items-center gap-1 rounded-full px-2.5 py-0.5 text-xs font-semibold {}",
        tone.classes()
    );

    view! {
        <span class=classes data-badge=tone.name()>
            {icon.map(|icon| view! { <IconGlyph icon=icon class="h-3 w-3" /> })}
            {children()}
        </span>
    }
}
