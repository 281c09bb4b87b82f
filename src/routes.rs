//! Declared site routes.
//!
//! Every link rendered by a page names a [`SiteRoute`] rather than a raw
//! path, so a link can only ever point at a route the server mounts.

use serde::Deserialize;

/// A page mounted at a fixed path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SiteRoute {
    Home,
    Products,
    About,
    Contact,
    Markets,
    Process,
    Privacy,
    Terms,
    Cookies,
}

impl SiteRoute {
    /// All declared routes, in navigation order.
    pub const ALL: [Self; 9] = [
        Self::Home,
        Self::Products,
        Self::About,
        Self::Contact,
        Self::Markets,
        Self::Process,
        Self::Privacy,
        Self::Terms,
        Self::Cookies,
    ];

    /// The path this route is mounted at.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Products => "/products",
            Self::About => "/about",
            Self::Contact => "/contact",
            Self::Markets => "/markets",
            Self::Process => "/process",
            Self::Privacy => "/privacy",
            Self::Terms => "/terms",
            Self::Cookies => "/cookies",
        }
    }

    /// Human-readable page title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Products => "Products",
            Self::About => "About",
            Self::Contact => "Contact",
            Self::Markets => "Markets",
            Self::Process => "Our Process",
            Self::Privacy => "Privacy Policy",
            Self::Terms => "Terms of Service",
            Self::Cookies => "Cookie Policy",
        }
    }

    /// Look up the route mounted at exactly `path`.
    ///
    /// The router mounts paths verbatim, so `/markets/` is not `/markets`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Whether `href` resolves to a declared route.
    #[must_use]
    pub fn is_declared(href: &str) -> bool {
        Self::from_path(href).is_some()
    }

    /// Routes linked from the shared header navigation.
    #[must_use]
    pub fn primary_nav() -> [Self; 5] {
        [
            Self::Products,
            Self::Markets,
            Self::Process,
            Self::About,
            Self::Contact,
        ]
    }

    /// Routes linked from the shared footer.
    #[must_use]
    pub fn legal_nav() -> [Self; 3] {
        [Self::Privacy, Self::Terms, Self::Cookies]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in SiteRoute::ALL {
            assert_eq!(SiteRoute::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_trailing_slash_is_a_different_path() {
        assert_eq!(SiteRoute::from_path("/markets/"), None);
        assert!(!SiteRoute::is_declared("/process/"));
        assert_eq!(SiteRoute::from_path(""), None);
        assert_eq!(SiteRoute::from_path("/"), Some(SiteRoute::Home));
    }

    #[test]
    fn test_unknown_path_is_not_declared() {
        assert!(!SiteRoute::is_declared("/pricing"));
        assert!(!SiteRoute::is_declared("/markets/energy"));
    }

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<_> = SiteRoute::ALL.iter().map(|r| r.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), SiteRoute::ALL.len());
    }
}
