//! Section renderer.

use leptos::prelude::*;

use crate::motion::Motion;

/// Titled band of a page holding a grid or list of blocks.
#[component]
pub fn Section(
    /// Section name; blocks inside are tagged `<name>:<index>`.
    name: &'static str,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    /// Classes of the inner block container (grid columns, spacing).
    #[prop(default = "grid gap-6 md:grid-cols-2")]
    layout: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="page-section space-y-8" data-section=name>
            {title.map(|title| view! {
                <h2 class="text-3xl font-bold text-center">{title}</h2>
            })}
            {subtitle.map(|subtitle| view! {
                <p class="mx-auto max-w-2xl text-center text-textMuted">{subtitle}</p>
            })}
            <div class=layout>
                {children()}
            </div>
        </section>
    }
}

/// One revealable block per record, in record order.
///
/// Each block is tagged `data-item="<section>:<index>"` and carries the reveal
/// variables for its index, so blocks enter view staggered and once.
pub fn reveal_list<T, V, F>(section: &str, items: Vec<T>, motion: Motion, render: F) -> Vec<AnyView>
where
    V: IntoView + 'static,
    F: Fn(usize, T) -> V,
{
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let reveal = motion.reveal(index);
            let body = render(index, item);
            view! {
                <div
                    class="reveal"
                    data-reveal-once=reveal.once.to_string()
                    data-item=format!("{section}:{index}")
                    style=reveal.style()
                >
                    {body}
                </div>
            }
            .into_any()
        })
        .collect()
}
