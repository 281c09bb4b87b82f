//! Document shell and page dispatch.

use std::sync::Arc;

use leptos::prelude::*;

use crate::content::ContentLibrary;
use crate::motion::Motion;
use crate::routes::SiteRoute;
use crate::ui::layout::{SiteFooter, SiteHeader};
use crate::ui::pages::{
    AboutPage, ContactPage, CookiesPage, HomePage, MarketsPage, NotFoundPage, PolicyPage,
    ProcessPage, ProductsPage,
};

/// A renderable page: a declared route or the catch-all error page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Route(SiteRoute),
    NotFound,
}

impl Page {
    /// Document title prefix.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Route(route) => route.title(),
            Self::NotFound => "Page Not Found",
        }
    }
}

/// Everything a render pass reads.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub site_name: String,
    pub content: Arc<ContentLibrary>,
    pub motion: Motion,
}

/// Render `page` as a complete HTML document.
pub fn render_page(page: Page, ctx: &RenderContext) -> String {
    let body = Owner::new().with(|| document_body(page, ctx).to_html());
    let title = format!("{} | {}", page.title(), ctx.site_name);
    html_shell(&title, &body)
}

fn document_body(page: Page, ctx: &RenderContext) -> impl IntoView + use<> {
    let current = match page {
        Page::Route(route) => Some(route),
        Page::NotFound => None,
    };
    let site_name = ctx.site_name.clone();
    let content = page_view(page, ctx);

    view! {
        <div id="site-shell" class="flex flex-col min-h-screen">
            <SiteHeader site_name=site_name.clone() current=current />
            <main id="page" class="flex-1">
                {content}
            </main>
            <SiteFooter site_name=site_name />
        </div>
    }
}

fn page_view(page: Page, ctx: &RenderContext) -> AnyView {
    let motion = ctx.motion;
    let content = &ctx.content;

    match page {
        Page::Route(SiteRoute::Home) => {
            view! { <HomePage content=content.home.clone() motion=motion /> }.into_any()
        }
        Page::Route(SiteRoute::Products) => {
            view! { <ProductsPage content=content.products.clone() motion=motion /> }.into_any()
        }
        Page::Route(SiteRoute::About) => {
            view! { <AboutPage content=content.about.clone() motion=motion /> }.into_any()
        }
        Page::Route(SiteRoute::Contact) => {
            view! { <ContactPage content=content.contact.clone() motion=motion /> }.into_any()
        }
        Page::Route(SiteRoute::Markets) => {
            view! { <MarketsPage content=content.markets.clone() motion=motion /> }.into_any()
        }
        Page::Route(SiteRoute::Process) => {
            view! { <ProcessPage content=content.process.clone() motion=motion /> }.into_any()
        }
        Page::Route(SiteRoute::Privacy) => view! {
            <PolicyPage page="privacy" content=content.privacy.clone() motion=motion />
        }
        .into_any(),
        Page::Route(SiteRoute::Terms) => view! {
            <PolicyPage page="terms" content=content.terms.clone() motion=motion />
        }
        .into_any(),
        Page::Route(SiteRoute::Cookies) => {
            view! { <CookiesPage content=content.cookies.clone() motion=motion /> }.into_any()
        }
        Page::NotFound => {
            view! { <NotFoundPage content=content.not_found.clone() motion=motion /> }.into_any()
        }
    }
}

/// Wrap a rendered body in the HTML document.
fn html_shell(title: &str, body: &str) -> String {
    let title = escape_text(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/app.css">
    <script defer src="/static/site.js"></script>
</head>
<body class="min-h-screen bg-background text-textPrimary antialiased">
{body}
</body>
</html>
"#
    )
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::MotionPreference;

    fn context(preference: MotionPreference) -> RenderContext {
        let motion = Motion {
            preference,
            ..Motion::default()
        };
        RenderContext {
            site_name: "Halcyon".to_string(),
            content: Arc::new(ContentLibrary::builtin().unwrap()),
            motion,
        }
    }

    fn render(page: Page) -> String {
        render_page(page, &context(MotionPreference::NoPreference))
    }

    fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
        needles
            .iter()
            .map(|needle| {
                html.find(needle)
                    .unwrap_or_else(|| panic!("missing {needle:?}"))
            })
            .collect()
    }

    #[test]
    fn test_document_title() {
        let html = render(Page::Route(SiteRoute::Markets));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Markets | Halcyon</title>"));

        let html = render(Page::NotFound);
        assert!(html.contains("<title>Page Not Found | Halcyon</title>"));
    }

    #[test]
    fn test_market_sectors_render_in_order() {
        let ctx = context(MotionPreference::NoPreference);
        let html = render_page(Page::Route(SiteRoute::Markets), &ctx);

        assert_eq!(html.matches("data-item=\"sectors:").count(), 4);
        assert_eq!(html.matches("data-item=\"milestones:").count(), 4);
        assert_eq!(
            html.matches("data-item=\"stats:").count(),
            ctx.content.markets.stats.len()
        );

        let titles: Vec<&str> = ctx
            .content
            .markets
            .sectors
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        let found = positions(&html, &titles);
        assert!(found.windows(2).all(|w| w[0] < w[1]));

        let items = positions(
            &html,
            &[
                "data-item=\"sectors:0\"",
                "data-item=\"sectors:1\"",
                "data-item=\"sectors:2\"",
                "data-item=\"sectors:3\"",
            ],
        );
        assert!(items.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_process_steps_render_in_order() {
        let ctx = context(MotionPreference::NoPreference);
        let html = render_page(Page::Route(SiteRoute::Process), &ctx);

        assert_eq!(html.matches("data-item=\"steps:").count(), 6);
        let titles: Vec<&str> = ctx
            .content
            .process
            .steps
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        let found = positions(&html, &titles);
        assert!(found.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("data-step=\"06\""));
    }

    #[test]
    fn test_not_found_has_four_quick_links() {
        let html = render(Page::NotFound);
        let targets: Vec<&str> = html
            .split("<a ")
            .skip(1)
            .filter_map(|chunk| chunk.split('>').next())
            .filter(|tag| tag.contains("data-quick-link"))
            .filter_map(|tag| tag.split("href=\"").nth(1)?.split('"').next())
            .collect();

        let expected: Vec<&str> = crate::content::QUICK_LINK_ROUTES
            .iter()
            .map(|route| route.path())
            .collect();
        assert_eq!(targets, expected);
    }

    #[test]
    fn test_decoration_layer_rendered_once() {
        let html = render(Page::Route(SiteRoute::Privacy));
        assert_eq!(html.matches("class=\"floating-decorations").count(), 1);
        assert_eq!(
            html.matches("data-glyph=").count(),
            Motion::default().decoration_count
        );
    }

    #[test]
    fn test_reduced_motion_zeroes_reveal_offsets() {
        let full = render_page(
            Page::Route(SiteRoute::Terms),
            &context(MotionPreference::NoPreference),
        );
        let reduced = render_page(
            Page::Route(SiteRoute::Terms),
            &context(MotionPreference::Reduce),
        );

        assert!(full.contains("--reveal-y: 24px;"));
        assert!(!reduced.contains("--reveal-y: 24px;"));
        assert!(reduced.contains("--reveal-y: 0px;"));
        assert!(!reduced.contains("data-tilt-max"));
    }

    #[test]
    fn test_every_href_is_declared_or_external() {
        for page in SiteRoute::ALL
            .into_iter()
            .map(Page::Route)
            .chain([Page::NotFound])
        {
            let html = render(page);
            for chunk in html.split("href=\"").skip(1) {
                let href = chunk.split('"').next().unwrap_or_default();
                let external = href.starts_with("mailto:")
                    || href.starts_with("tel:")
                    || href.starts_with("https://")
                    || href.starts_with("/static/");
                assert!(
                    external || SiteRoute::is_declared(href),
                    "{page:?} links to undeclared {href:?}"
                );
            }
        }
    }

    #[test]
    fn test_renders_are_deterministic() {
        let ctx = context(MotionPreference::NoPreference);
        assert_eq!(
            render_page(Page::Route(SiteRoute::Home), &ctx),
            render_page(Page::Route(SiteRoute::Home), &ctx)
        );
    }

    #[test]
    fn test_current_route_is_marked() {
        let html = render(Page::Route(SiteRoute::Process));
        assert!(html.contains("aria-current=\"page\""));
        let html = render(Page::NotFound);
        assert!(!html.contains("aria-current"));
    }

    #[test]
    fn test_content_is_visible_without_script() {
        let html = render(Page::Route(SiteRoute::Cookies));
        assert!(html.contains("<html lang=\"en\">"));
        assert!(!html.contains("motion-ready"));

        let stylesheet = include_str!("../../static/app.css");
        assert!(stylesheet.contains(".motion-ready .reveal {"));
        assert!(!stylesheet.lines().any(|line| line.starts_with(".reveal")));

        let script = include_str!("../../static/site.js");
        assert!(script.contains("classList.add(\"motion-ready\")"));
    }

    #[test]
    fn test_tilt_cards_carry_rest_transform() {
        let html = render(Page::Route(SiteRoute::Markets));
        let rest = format!(
            "data-tilt-rest=\"{}\"",
            crate::motion::TiltTransform::NEUTRAL
        );
        assert_eq!(html.matches(&rest).count(), html.matches("data-tilt-max=").count());
        assert_eq!(html.matches(&rest).count(), 4);

        let reduced = render_page(
            Page::Route(SiteRoute::Markets),
            &context(MotionPreference::Reduce),
        );
        assert!(!reduced.contains("data-tilt-rest"));
    }

    #[test]
    fn test_badges_are_toned_by_meaning() {
        let markets = render(Page::Route(SiteRoute::Markets));
        assert_eq!(markets.matches("data-badge=\"growth\"").count(), 4);

        let process = render(Page::Route(SiteRoute::Process));
        assert_eq!(process.matches("data-badge=\"neutral\"").count(), 6);

        let ctx = context(MotionPreference::NoPreference);
        let cookies = render_page(Page::Route(SiteRoute::Cookies), &ctx);
        let categories = &ctx.content.cookies.categories;
        let required = categories.iter().filter(|c| c.required).count();
        assert_eq!(cookies.matches("data-badge=\"accent\"").count(), required);
        assert_eq!(
            cookies.matches("data-badge=\"neutral\"").count(),
            categories.len() - required
        );
    }
}
