//! Link-styled button with variants and sizes.

use leptos::prelude::*;

use crate::routes::SiteRoute;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Primary,
    /// Outline button, for the lesser of two actions.
    Outline,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary text-white shadow-glow hover:bg-primaryMuted",
            Self::Outline => "bg-transparent border border-panelBorder text-textPrimary hover:bg-panel",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Medium button (default).
    #[default]
    Md,
    /// Large button.
    Lg,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Md => "h-10 px-4 text-sm",
            Self::Lg => "h-12 px-6 text-base",
        }
    }
}

/// Anchor to a declared route, styled as a button.
///
/// Takes a [`SiteRoute`] rather than an href, so it cannot link anywhere
/// the server does not serve.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <ButtonLink route=SiteRoute::Contact variant=ButtonVariant::Primary>
///         "Get in touch"
///     </ButtonLink>
/// }
/// ```
#[component]
pub fn ButtonLink(
    /// Destination route.
    route: SiteRoute,
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center gap-2 rounded-lg font-medium \
                        transition-colors focus-visible:outline-none focus-visible:ring-2 \
                        focus-visible:ring-primary focus-visible:ring-offset-2";

    let classes = format!(
        "{} {} {} {}",
        base_classes,
        variant.classes(),
        size.classes(),
        class
    );

    view! {
        <a href=route.path() class=classes data-cta="true">
            {children()}
        </a>
    }
}
