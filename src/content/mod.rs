//! Page content tables.
//!
//! Every page reads its copy from a [`ContentLibrary`]: ordered tables of
//! plain records (market sectors, process steps, policy sections, ...).
//! The library ships compiled in from `content/site.yaml` and can be
//! replaced wholesale by a file named in configuration.
//!
//! Records are deserialized into typed structs, so a record missing a field
//! is rejected when the library loads rather than leaving a gap in a page.
//! Link targets are [`SiteRoute`] names, so a link can only name a route the
//! server mounts.

mod icon;

use std::path::Path;

use serde::Deserialize;

use crate::error::ContentError;
use crate::routes::SiteRoute;

pub use icon::Icon;

/// Content compiled into the binary.
const BUILTIN_CONTENT: &str = include_str!("../../content/site.yaml");

/// Destinations of the 404 quick-navigation links.
pub const QUICK_LINK_ROUTES: [SiteRoute; 4] = [
    SiteRoute::Home,
    SiteRoute::Products,
    SiteRoute::About,
    SiteRoute::Contact,
];

/// A labelled link to a declared route.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    pub label: String,
    pub route: SiteRoute,
}

/// Closing call-to-action block of a page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CallToAction {
    pub heading: String,
    pub body: String,
    pub primary: Link,
    #[serde(default)]
    pub secondary: Option<Link>,
}

/// Page heading shared by every page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hero {
    pub eyebrow: String,
    pub headline: String,
    pub intro: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Highlight {
    pub icon: Icon,
    pub title: String,
    pub description: String,
    pub route: SiteRoute,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HomeContent {
    pub hero: Hero,
    pub highlights: Vec<Highlight>,
    pub cta: CallToAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Product {
    pub icon: Icon,
    pub name: String,
    pub tagline: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductsContent {
    pub hero: Hero,
    pub products: Vec<Product>,
    pub cta: CallToAction,
}

/// A company value on the about page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Principle {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AboutContent {
    pub hero: Hero,
    pub story: Vec<String>,
    pub principles: Vec<Principle>,
    pub cta: CallToAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactChannel {
    pub icon: Icon,
    pub label: String,
    pub value: String,
    /// External `mailto:`/`tel:`/map link.
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactContent {
    pub hero: Hero,
    pub channels: Vec<ContactChannel>,
    pub cta: CallToAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarketSector {
    pub icon: Icon,
    pub title: String,
    pub description: String,
    /// Annual growth label, e.g. `"+18%"`.
    pub growth: String,
    /// Addressable market label, e.g. `"$2.1T"`.
    pub market_size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Statistic {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Milestone {
    pub year: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarketsContent {
    pub hero: Hero,
    pub sectors: Vec<MarketSector>,
    pub stats: Vec<Statistic>,
    pub milestones: Vec<Milestone>,
    pub cta: CallToAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessStep {
    pub icon: Icon,
    pub title: String,
    pub description: String,
    /// Typical duration label, e.g. `"1-2 weeks"`.
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessContent {
    pub hero: Hero,
    pub steps: Vec<ProcessStep>,
    pub cta: CallToAction,
}

/// A numbered clause of a legal page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicySection {
    pub title: String,
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyContent {
    pub hero: Hero,
    /// "Last updated" label.
    pub updated: String,
    pub sections: Vec<PolicySection>,
    pub cta: CallToAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CookieCategory {
    pub icon: Icon,
    pub name: String,
    pub description: String,
    /// Strictly necessary cookies cannot be declined.
    pub required: bool,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CookiesContent {
    pub hero: Hero,
    pub updated: String,
    pub categories: Vec<CookieCategory>,
    pub sections: Vec<PolicySection>,
    pub cta: CallToAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuickLink {
    pub icon: Icon,
    pub label: String,
    pub description: String,
    pub route: SiteRoute,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotFoundContent {
    pub code: String,
    pub headline: String,
    pub message: String,
    pub primary: Link,
    pub quick_links: Vec<QuickLink>,
}

/// All page content of the site.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentLibrary {
    pub home: HomeContent,
    pub products: ProductsContent,
    pub about: AboutContent,
    pub contact: ContactContent,
    pub markets: MarketsContent,
    pub process: ProcessContent,
    pub privacy: PolicyContent,
    pub terms: PolicyContent,
    pub cookies: CookiesContent,
    pub not_found: NotFoundContent,
}

impl ContentLibrary {
    /// The content compiled into the binary.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_yaml(BUILTIN_CONTENT)
    }

    /// Parse and validate a content document.
    pub fn from_yaml(source: &str) -> Result<Self, ContentError> {
        let library: Self = serde_yaml::from_str(source)?;
        library.validate()?;
        Ok(library)
    }

    /// Load a content file from disk.
    pub fn from_file(path: &Path) -> Result<Self, ContentError> {
        let source = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&source)
    }

    /// Load `path` when given, else the built-in content.
    pub fn load(path: Option<&Path>) -> Result<Self, ContentError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::builtin(),
        }
    }

    /// Check the structural rules the pages rely on.
    pub fn validate(&self) -> Result<(), ContentError> {
        expect_count("markets.sectors", &self.markets.sectors, 4)?;
        expect_count("markets.milestones", &self.markets.milestones, 4)?;
        expect_count("process.steps", &self.process.steps, 6)?;
        expect_count("not_found.quick_links", &self.not_found.quick_links, 4)?;

        let mut found: Vec<SiteRoute> = self
            .not_found
            .quick_links
            .iter()
            .map(|link| link.route)
            .collect();
        let mut expected = QUICK_LINK_ROUTES.to_vec();
        found.sort_by_key(route_rank);
        expected.sort_by_key(route_rank);
        if found != expected {
            return Err(ContentError::QuickLinks { expected, found });
        }

        non_empty("home.highlights", self.home.highlights.iter().map(|h| &h.title))?;
        non_empty("products.products", self.products.products.iter().map(|p| &p.name))?;
        non_empty("about.principles", self.about.principles.iter().map(|p| &p.title))?;
        non_empty("contact.channels", self.contact.channels.iter().map(|c| &c.label))?;
        non_empty("markets.sectors", self.markets.sectors.iter().map(|s| &s.title))?;
        non_empty("markets.milestones", self.markets.milestones.iter().map(|m| &m.title))?;
        non_empty("markets.stats", self.markets.stats.iter().map(|s| &s.label))?;
        non_empty("process.steps", self.process.steps.iter().map(|s| &s.title))?;
        non_empty("privacy.sections", self.privacy.sections.iter().map(|s| &s.title))?;
        non_empty("terms.sections", self.terms.sections.iter().map(|s| &s.title))?;
        non_empty("cookies.categories", self.cookies.categories.iter().map(|c| &c.name))?;
        non_empty("cookies.sections", self.cookies.sections.iter().map(|s| &s.title))?;
        non_empty(
            "not_found.quick_links",
            self.not_found.quick_links.iter().map(|q| &q.label),
        )?;

        Ok(())
    }

    /// Every route linked from page content, in page order.
    #[must_use]
    pub fn linked_routes(&self) -> Vec<SiteRoute> {
        let ctas = [
            &self.home.cta,
            &self.products.cta,
            &self.about.cta,
            &self.contact.cta,
            &self.markets.cta,
            &self.process.cta,
            &self.privacy.cta,
            &self.terms.cta,
            &self.cookies.cta,
        ];

        let mut routes: Vec<SiteRoute> = self.home.highlights.iter().map(|h| h.route).collect();
        for cta in ctas {
            routes.push(cta.primary.route);
            routes.extend(cta.secondary.as_ref().map(|link| link.route));
        }
        routes.push(self.not_found.primary.route);
        routes.extend(self.not_found.quick_links.iter().map(|q| q.route));
        routes
    }
}

fn route_rank(route: &SiteRoute) -> usize {
    SiteRoute::ALL
        .iter()
        .position(|r| r == route)
        .unwrap_or(usize::MAX)
}

fn expect_count<T>(table: &'static str, records: &[T], expected: usize) -> Result<(), ContentError> {
    if records.len() == expected {
        Ok(())
    } else {
        Err(ContentError::Count {
            table,
            expected,
            found: records.len(),
        })
    }
}

fn non_empty<'a>(
    table: &'static str,
    titles: impl Iterator<Item = &'a String>,
) -> Result<(), ContentError> {
    for (index, title) in titles.enumerate() {
        if title.trim().is_empty() {
            return Err(ContentError::EmptyField {
                table,
                index,
                field: "title",
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_content_is_valid() {
        let library = ContentLibrary::builtin().expect("built-in content must load");
        assert_eq!(library.markets.sectors.len(), 4);
        assert_eq!(library.markets.milestones.len(), 4);
        assert_eq!(library.process.steps.len(), 6);
        assert_eq!(library.not_found.quick_links.len(), 4);
    }

    #[test]
    fn test_quick_links_cover_expected_routes() {
        let library = ContentLibrary::builtin().unwrap();
        let routes: Vec<_> = library
            .not_found
            .quick_links
            .iter()
            .map(|q| q.route)
            .collect();
        assert_eq!(routes, QUICK_LINK_ROUTES);
    }

    #[test]
    fn test_every_linked_route_is_declared() {
        let library = ContentLibrary::builtin().unwrap();
        let routes = library.linked_routes();
        assert!(!routes.is_empty());
        for route in routes {
            assert!(SiteRoute::is_declared(route.path()), "{route:?}");
        }
    }

    #[test]
    fn test_wrong_sector_count_is_rejected() {
        let mut library = ContentLibrary::builtin().unwrap();
        library.markets.sectors.pop();
        let err = library.validate().unwrap_err();
        assert!(matches!(
            err,
            ContentError::Count {
                table: "markets.sectors",
                expected: 4,
                found: 3
            }
        ));
    }

    #[test]
    fn test_duplicate_quick_link_is_rejected() {
        let mut library = ContentLibrary::builtin().unwrap();
        library.not_found.quick_links[3].route = SiteRoute::Home;
        assert!(matches!(
            library.validate(),
            Err(ContentError::QuickLinks { .. })
        ));
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let mut library = ContentLibrary::builtin().unwrap();
        library.process.steps[2].title = "  ".to_string();
        assert!(matches!(
            library.validate(),
            Err(ContentError::EmptyField {
                table: "process.steps",
                index: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_missing_field_is_a_parse_error() {
        let source = BUILTIN_CONTENT.replacen("market_size:", "market_sizes:", 1);
        assert!(matches!(
            ContentLibrary::from_yaml(&source),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_route_is_a_parse_error() {
        let source = BUILTIN_CONTENT.replacen("route: contact", "route: pricing", 1);
        assert_ne!(source, BUILTIN_CONTENT);
        assert!(matches!(
            ContentLibrary::from_yaml(&source),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let err = ContentLibrary::load(Some(Path::new("/definitely/not/here.yaml"))).unwrap_err();
        assert!(matches!(err, ContentError::Read { .. }));
    }
}
