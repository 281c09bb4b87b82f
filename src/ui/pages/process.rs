//! Process page: how an engagement runs, step by step.

use leptos::prelude::*;

use crate::content::{Icon, ProcessContent, ProcessStep};
use crate::motion::Motion;
use crate::ui::components::{Badge, BadgeTone, Card, CardContent, CardHeader, IconGlyph};
use crate::ui::layout::{CtaBlock, PageContainer, PageHero, Section, reveal_list};

#[component]
pub fn ProcessPage(content: ProcessContent, motion: Motion) -> impl IntoView {
    let ProcessContent { hero, steps, cta } = content;

    let step_cards = reveal_list("steps", steps, motion, |index, step: ProcessStep| {
        let ProcessStep {
            icon,
            title,
            description,
            duration,
        } = step;
        let number = format!("{:02}", index + 1);
        let label = number.clone();

        view! {
            <Card tilt=motion.card_tilt() class="process-step">
                <CardHeader>
                    <div class="flex items-center justify-between">
                        <span class="text-3xl font-bold text-primary/60" data-step=number>{label}</span>
                        <IconGlyph icon=icon class="h-8 w-8 text-primary" />
                    </div>
                    <h3 class="text-xl font-semibold">{title}</h3>
                </CardHeader>
                <CardContent class="space-y-3">
                    <p class="text-textMuted">{description}</p>
                    <Badge tone=BadgeTone::Neutral icon=Some(Icon::Zap)>{duration}</Badge>
                </CardContent>
            </Card>
        }
    });

    view! {
        <PageContainer page="process" motion=motion>
            <PageHero hero=hero motion=motion />
            <Section name="steps" layout="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                {step_cards}
            </Section>
            <CtaBlock cta=cta motion=motion />
        </PageContainer>
    }
}
