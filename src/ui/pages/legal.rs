//! Privacy policy and terms of service.
//!
//! Both are a list of numbered clauses; the cookie page reuses
//! [`PolicySections`] for its prose.

use leptos::prelude::*;

use crate::content::{PolicyContent, PolicySection};
use crate::motion::Motion;
use crate::ui::layout::{CtaBlock, PageContainer, PageHero, Section, reveal_list};

/// A legal page built from clauses.
#[component]
pub fn PolicyPage(
    /// Page key, `privacy` or `terms`.
    page: &'static str,
    content: PolicyContent,
    motion: Motion,
) -> impl IntoView {
    let PolicyContent {
        hero,
        updated,
        sections,
        cta,
    } = content;
    let note = format!("Last updated: {updated}");

    view! {
        <PageContainer page=page motion=motion>
            <PageHero hero=hero motion=motion note=note />
            <PolicySections sections=sections motion=motion />
            <CtaBlock cta=cta motion=motion />
        </PageContainer>
    }
}

/// Numbered clauses, each with paragraphs and an optional bullet list.
#[component]
pub fn PolicySections(sections: Vec<PolicySection>, motion: Motion) -> impl IntoView {
    let clauses = reveal_list("clauses", sections, motion, |index, section: PolicySection| {
        let PolicySection {
            title,
            paragraphs,
            bullets,
        } = section;
        let heading = format!("{}. {}", index + 1, title);
        let paragraphs = paragraphs
            .into_iter()
            .map(|paragraph| view! { <p class="text-textMuted leading-relaxed">{paragraph}</p> })
            .collect_view();
        let bullets = (!bullets.is_empty()).then(|| {
            let items = bullets
                .into_iter()
                .map(|bullet| view! { <li>{bullet}</li> })
                .collect_view();
            view! { <ul class="list-disc pl-6 space-y-1 text-textMuted">{items}</ul> }
        });

        view! {
            <article class="policy-clause space-y-3">
                <h2 class="text-2xl font-semibold">{heading}</h2>
                {paragraphs}
                {bullets}
            </article>
        }
    });

    view! {
        <Section name="clauses" layout="mx-auto max-w-3xl space-y-10">
            {clauses}
        </Section>
    }
}
