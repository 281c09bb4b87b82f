//! Contact page.

use leptos::prelude::*;

use crate::content::{ContactChannel, ContactContent};
use crate::motion::Motion;
use crate::ui::components::{Card, CardContent, IconGlyph};
use crate::ui::layout::{CtaBlock, PageContainer, PageHero, Section, reveal_list};

#[component]
pub fn ContactPage(content: ContactContent, motion: Motion) -> impl IntoView {
    let ContactContent {
        hero,
        channels,
        cta,
    } = content;

    let cards = reveal_list("channels", channels, motion, |_, channel: ContactChannel| {
        let ContactChannel {
            icon,
            label,
            value,
            href,
        } = channel;

        view! {
            <Card>
                <CardContent class="pt-6 flex items-start gap-4">
                    <IconGlyph icon=icon class="h-6 w-6 text-primary" />
                    <div>
                        <p class="text-sm text-textMuted">{label}</p>
                        <a href=href class="font-medium hover:text-primary">
                            {value}
                        </a>
                    </div>
                </CardContent>
            </Card>
        }
    });

    view! {
        <PageContainer page="contact" motion=motion>
            <PageHero hero=hero motion=motion />
            <Section name="channels" layout="grid gap-6 md:grid-cols-3">
                {cards}
            </Section>
            <CtaBlock cta=cta motion=motion />
        </PageContainer>
    }
}
