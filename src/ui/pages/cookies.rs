//! Cookie policy page.

use leptos::prelude::*;

use crate::content::{CookieCategory, CookiesContent};
use crate::motion::Motion;
use crate::ui::components::{Badge, BadgeTone, Card, CardContent, CardHeader, IconGlyph};
use crate::ui::layout::{CtaBlock, PageContainer, PageHero, Section, reveal_list};
use crate::ui::pages::PolicySections;

#[component]
pub fn CookiesPage(content: CookiesContent, motion: Motion) -> impl IntoView {
    let CookiesContent {
        hero,
        updated,
        categories,
        sections,
        cta,
    } = content;
    let note = format!("Last updated: {updated}");

    let category_cards = reveal_list(
        "categories",
        categories,
        motion,
        |_, category: CookieCategory| {
            let CookieCategory {
                icon,
                name,
                description,
                required,
                examples,
            } = category;
            let (tone, consent) = if required {
                (BadgeTone::Accent, "Always active")
            } else {
                (BadgeTone::Neutral, "Optional")
            };
            let examples = examples
                .into_iter()
                .map(|cookie| view! { <code class="rounded bg-surface px-1.5 py-0.5 text-xs">{cookie}</code> })
                .collect_view();

            view! {
                <Card>
                    <CardHeader>
                        <div class="flex items-center justify-between">
                            <IconGlyph icon=icon class="h-6 w-6 text-primary" />
                            <Badge tone=tone>{consent}</Badge>
                        </div>
                        <h3 class="text-lg font-semibold">{name}</h3>
                    </CardHeader>
                    <CardContent class="space-y-3">
                        <p class="text-textMuted">{description}</p>
                        <div class="flex flex-wrap gap-2">{examples}</div>
                    </CardContent>
                </Card>
            }
        },
    );

    view! {
        <PageContainer page="cookies" motion=motion>
            <PageHero hero=hero motion=motion note=note />
            <Section name="categories" title="Cookies we use" layout="grid gap-6 md:grid-cols-3">
                {category_cards}
            </Section>
            <PolicySections sections=sections motion=motion />
            <CtaBlock cta=cta motion=motion />
        </PageContainer>
    }
}
