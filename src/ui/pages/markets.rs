//! Markets page: the investment pitch.
//!
//! Three tables, rendered in this order: sectors as tiltable cards, headline
//! statistics as a band, milestones as a timeline.

use leptos::prelude::*;

use crate::content::{Icon, MarketSector, MarketsContent, Milestone, Statistic};
use crate::motion::Motion;
use crate::ui::components::{Badge, BadgeTone, Card, CardContent, CardHeader, IconGlyph};
use crate::ui::layout::{CtaBlock, PageContainer, PageHero, Section, reveal_list};

#[component]
pub fn MarketsPage(content: MarketsContent, motion: Motion) -> impl IntoView {
    let MarketsContent {
        hero,
        sectors,
        stats,
        milestones,
        cta,
    } = content;

    let sector_cards = reveal_list("sectors", sectors, motion, |_, sector: MarketSector| {
        let MarketSector {
            icon,
            title,
            description,
            growth,
            market_size,
        } = sector;

        view! {
            <Card tilt=motion.card_tilt() class="market-card">
                <CardHeader>
                    <div class="flex items-center justify-between">
                        <IconGlyph icon=icon class="h-8 w-8 text-primary" />
                        <Badge tone=BadgeTone::Growth icon=Some(Icon::TrendingUp)>{growth}</Badge>
                    </div>
                    <h3 class="text-xl font-semibold">{title}</h3>
                </CardHeader>
                <CardContent class="space-y-3">
                    <p class="text-textMuted">{description}</p>
                    <p class="text-sm font-medium" data-market-size="true">{market_size}</p>
                </CardContent>
            </Card>
        }
    });

    let stat_blocks = reveal_list("stats", stats, motion, |_, stat: Statistic| {
        let Statistic { value, label } = stat;

        view! {
            <div class="text-center">
                <p class="text-4xl font-bold text-primary">{value}</p>
                <p class="text-sm text-textMuted">{label}</p>
            </div>
        }
    });

    let timeline = reveal_list("milestones", milestones, motion, |_, milestone: Milestone| {
        let Milestone {
            year,
            title,
            description,
        } = milestone;

        view! {
            <div class="relative border-l-2 border-primary/40 pl-6">
                <span class="absolute -left-[9px] top-1 h-4 w-4 rounded-full bg-primary"></span>
                <p class="text-sm font-semibold text-primary">{year}</p>
                <h3 class="text-lg font-semibold">{title}</h3>
                <p class="text-textMuted">{description}</p>
            </div>
        }
    });

    view! {
        <PageContainer page="markets" motion=motion>
            <PageHero hero=hero motion=motion />
            <Section name="sectors" title="Sectors we invest in" layout="grid gap-6 md:grid-cols-2">
                {sector_cards}
            </Section>
            <Section name="stats" title="By the numbers" layout="grid gap-8 grid-cols-2 md:grid-cols-4">
                {stat_blocks}
            </Section>
            <Section name="milestones" title="Our track record" layout="mx-auto max-w-2xl space-y-8">
                {timeline}
            </Section>
            <CtaBlock cta=cta motion=motion />
        </PageContainer>
    }
}
