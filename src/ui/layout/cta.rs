//! Closing call-to-action block.

use leptos::prelude::*;

use crate::content::CallToAction;
use crate::motion::Motion;
use crate::ui::components::{ButtonLink, ButtonSize, ButtonVariant};

/// Heading, body and one or two links to fixed routes.
#[component]
pub fn CtaBlock(cta: CallToAction, motion: Motion) -> impl IntoView {
    let reveal = motion.reveal(0);
    let CallToAction {
        heading,
        body,
        primary,
        secondary,
    } = cta;

    view! {
        <section
            class="cta-block reveal rounded-2xl border border-panelBorder bg-panel/60 p-10 text-center space-y-6"
            data-section="cta"
            data-reveal-once="true"
            style=reveal.style()
        >
            <h2 class="text-3xl font-bold">{heading}</h2>
            <p class="mx-auto max-w-xl text-textMuted">{body}</p>
            <div class="flex flex-wrap items-center justify-center gap-4">
                <ButtonLink route=primary.route size=ButtonSize::Lg>
                    {primary.label}
                </ButtonLink>
                {secondary.map(|link| view! {
                    <ButtonLink route=link.route variant=ButtonVariant::Outline size=ButtonSize::Lg>
                        {link.label}
                    </ButtonLink>
                })}
            </div>
        </section>
    }
}
