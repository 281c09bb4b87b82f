//! Landing page.

use leptos::prelude::*;

use crate::content::{Highlight, HomeContent, Icon};
use crate::motion::Motion;
use crate::ui::components::{Card, CardContent, CardHeader, IconGlyph};
use crate::ui::layout::{CtaBlock, PageContainer, PageHero, Section, reveal_list};

#[component]
pub fn HomePage(content: HomeContent, motion: Motion) -> impl IntoView {
    let HomeContent {
        hero,
        highlights,
        cta,
    } = content;

    let cards = reveal_list("highlights", highlights, motion, |_, highlight: Highlight| {
        let Highlight {
            icon,
            title,
            description,
            route,
        } = highlight;

        view! {
            <a href=route.path() class="block h-full group" data-card-link="true">
                <Card tilt=motion.card_tilt()>
                    <CardHeader>
                        <IconGlyph icon=icon class="h-8 w-8 text-primary" />
                        <h3 class="text-xl font-semibold">{title}</h3>
                    </CardHeader>
                    <CardContent class="space-y-4">
                        <p class="text-textMuted">{description}</p>
                        <span class="inline-flex items-center gap-1 text-sm text-primary">
                            "Learn more"
                            <IconGlyph icon=Icon::ArrowRight class="h-4 w-4" />
                        </span>
                    </CardContent>
                </Card>
            </a>
        }
    });

    view! {
        <PageContainer page="home" motion=motion>
            <PageHero hero=hero motion=motion />
            <Section name="highlights" layout="grid gap-6 md:grid-cols-3">
                {cards}
            </Section>
            <CtaBlock cta=cta motion=motion />
        </PageContainer>
    }
}
