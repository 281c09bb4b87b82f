//! 404 page.

use leptos::prelude::*;

use crate::content::{Icon, NotFoundContent, QuickLink};
use crate::motion::Motion;
use crate::ui::components::{ButtonLink, ButtonSize, Card, CardContent, IconGlyph};
use crate::ui::layout::{PageContainer, Section, reveal_list};

/// Error page shown for any path that is not a declared route.
#[component]
pub fn NotFoundPage(content: NotFoundContent, motion: Motion) -> impl IntoView {
    let NotFoundContent {
        code,
        headline,
        message,
        primary,
        quick_links,
    } = content;

    let links = reveal_list("quick-links", quick_links, motion, |_, link: QuickLink| {
        let QuickLink {
            icon,
            label,
            description,
            route,
        } = link;

        view! {
            <a href=route.path() class="block h-full" data-quick-link="true">
                <Card tilt=motion.card_tilt()>
                    <CardContent class="pt-6 flex items-center gap-4">
                        <IconGlyph icon=icon class="h-6 w-6 text-primary" />
                        <div>
                            <p class="font-semibold">{label}</p>
                            <p class="text-sm text-textMuted">{description}</p>
                        </div>
                    </CardContent>
                </Card>
            </a>
        }
    });

    view! {
        <PageContainer page="not-found" motion=motion>
            <header class="text-center space-y-6">
                <p class="error-code text-8xl md:text-9xl font-black text-primary/80">{code}</p>
                <h1 class="text-3xl md:text-4xl font-bold">{headline}</h1>
                <p class="mx-auto max-w-xl text-textMuted">{message}</p>
                <ButtonLink route=primary.route size=ButtonSize::Lg>
                    <IconGlyph icon=Icon::Home class="h-4 w-4" />
                    {primary.label}
                </ButtonLink>
            </header>
            <Section name="quick-links" title="Popular destinations" layout="grid gap-4 sm:grid-cols-2">
                {links}
            </Section>
        </PageContainer>
    }
}
