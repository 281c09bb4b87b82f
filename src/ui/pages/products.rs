//! Products page.

use leptos::prelude::*;

use crate::content::{Product, ProductsContent};
use crate::motion::Motion;
use crate::ui::components::{Card, CardContent, CardHeader, IconGlyph};
use crate::ui::layout::{CtaBlock, PageContainer, PageHero, Section, reveal_list};

#[component]
pub fn ProductsPage(content: ProductsContent, motion: Motion) -> impl IntoView {
    let ProductsContent {
        hero,
        products,
        cta,
    } = content;

    let cards = reveal_list("products", products, motion, |_, product: Product| {
        let Product {
            icon,
            name,
            tagline,
            features,
        } = product;
        let features = features
            .into_iter()
            .map(|feature| view! { <li>{feature}</li> })
            .collect_view();

        view! {
            <Card tilt=motion.card_tilt()>
                <CardHeader>
                    <IconGlyph icon=icon class="h-8 w-8 text-primary" />
                    <h3 class="text-xl font-semibold">{name}</h3>
                    <p class="text-sm text-textMuted">{tagline}</p>
                </CardHeader>
                <CardContent>
                    <ul class="list-disc pl-5 space-y-1 text-sm">{features}</ul>
                </CardContent>
            </Card>
        }
    });

    view! {
        <PageContainer page="products" motion=motion>
            <PageHero hero=hero motion=motion />
            <Section name="products" layout="grid gap-6 md:grid-cols-3">
                {cards}
            </Section>
            <CtaBlock cta=cta motion=motion />
        </PageContainer>
    }
}
