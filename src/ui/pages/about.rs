//! About page.

use leptos::prelude::*;

use crate::content::{AboutContent, Principle};
use crate::motion::Motion;
use crate::ui::components::{Card, CardContent, CardHeader, IconGlyph};
use crate::ui::layout::{CtaBlock, PageContainer, PageHero, Section, reveal_list};

#[component]
pub fn AboutPage(content: AboutContent, motion: Motion) -> impl IntoView {
    let AboutContent {
        hero,
        story,
        principles,
        cta,
    } = content;

    let paragraphs = reveal_list("story", story, motion, |_, paragraph: String| {
        view! { <p class="text-lg leading-relaxed">{paragraph}</p> }
    });

    let cards = reveal_list("principles", principles, motion, |_, principle: Principle| {
        let Principle {
            icon,
            title,
            description,
        } = principle;

        view! {
            <Card tilt=motion.card_tilt()>
                <CardHeader>
                    <IconGlyph icon=icon class="h-8 w-8 text-primary" />
                    <h3 class="text-xl font-semibold">{title}</h3>
                </CardHeader>
                <CardContent>
                    <p class="text-textMuted">{description}</p>
                </CardContent>
            </Card>
        }
    });

    view! {
        <PageContainer page="about" motion=motion>
            <PageHero hero=hero motion=motion />
            <Section name="story" layout="mx-auto max-w-3xl space-y-6">
                {paragraphs}
            </Section>
            <Section name="principles" title="What we believe" layout="grid gap-6 md:grid-cols-3">
                {cards}
            </Section>
            <CtaBlock cta=cta motion=motion />
        </PageContainer>
    }
}
