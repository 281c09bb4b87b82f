//! Named icons referenced by content records.

use serde::Deserialize;

/// An icon from the site's line-icon set.
///
/// Content names icons in kebab-case (`trending-up`); the UI layer turns
/// them into inline SVG via [`Icon::paths`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Home,
    Package,
    Info,
    Mail,
    Phone,
    MapPin,
    TrendingUp,
    Leaf,
    Zap,
    HeartPulse,
    Truck,
    Cpu,
    Search,
    Compass,
    PenTool,
    Code,
    Rocket,
    BarChart,
    Shield,
    Cookie,
    Lock,
    Settings,
    Users,
    Target,
    Sparkles,
    Globe,
    ArrowRight,
}

impl Icon {
    /// Glyphs cycled through by the floating decoration layer.
    pub const DECORATIVE: [Self; 6] = [
        Self::Sparkles,
        Self::TrendingUp,
        Self::Globe,
        Self::Zap,
        Self::Leaf,
        Self::Rocket,
    ];

    /// SVG path data on a 24x24 view box.
    #[must_use]
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Home => &["m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z", "M9 22V12h6v10"],
            Self::Package => &[
                "M16.5 9.4 7.55 4.24",
                "M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z",
                "M3.27 6.96 12 12.01l8.73-5.05",
                "M12 22.08V12",
            ],
            Self::Info => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 16v-4", "M12 8h.01"],
            Self::Mail => &[
                "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
                "m22 6-10 7L2 6",
            ],
            Self::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            Self::MapPin => &[
                "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z",
                "M12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            ],
            Self::TrendingUp => &["m22 7-8.5 8.5-5-5L2 17", "M16 7h6v6"],
            Self::Leaf => &[
                "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10z",
                "M2 21c0-3 1.85-5.36 5.08-6",
            ],
            Self::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            Self::HeartPulse => &[
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7z",
                "M3.22 12H9.5l.5-1 2 4.5 2-7 1.5 3.5h5.27",
            ],
            Self::Truck => &[
                "M10 17h4V5H2v12h3",
                "M20 17h2v-3.34a4 4 0 0 0-1.17-2.83L19 9h-5v8h1",
                "M7.5 20a2.5 2.5 0 1 0 0-5 2.5 2.5 0 0 0 0 5z",
                "M17.5 20a2.5 2.5 0 1 0 0-5 2.5 2.5 0 0 0 0 5z",
            ],
            Self::Cpu => &[
                "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M9 9h6v6H9z",
                "M9 1v3M15 1v3M9 20v3M15 20v3M20 9h3M20 14h3M1 9h3M1 14h3",
            ],
            Self::Search => &["M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z", "m21 21-4.3-4.3"],
            Self::Compass => &[
                "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
                "m16.24 7.76-2.12 6.36-6.36 2.12 2.12-6.36 6.36-2.12z",
            ],
            Self::PenTool => &[
                "m12 19 7-7 3 3-7 7-3-3z",
                "m18 13-1.5-7.5L2 2l3.5 14.5L13 18l5-5z",
                "m2 2 7.59 7.59",
                "M11 13a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
            ],
            Self::Code => &["m16 18 6-6-6-6", "m8 6-6 6 6 6"],
            Self::Rocket => &[
                "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z",
                "m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z",
                "M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0",
                "M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5",
            ],
            Self::BarChart => &["M12 20V10", "M18 20V4", "M6 20v-4"],
            Self::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
            Self::Cookie => &[
                "M12 2a10 10 0 1 0 10 10 4 4 0 0 1-5-5 4 4 0 0 1-5-5",
                "M8.5 8.5v.01M16 15.5v.01M12 12v.01M11 17v.01M7 14v.01",
            ],
            Self::Lock => &[
                "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2z",
                "M7 11V7a5 5 0 0 1 10 0v4",
            ],
            Self::Settings => &[
                "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
                "M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 0 1-4 0v-.09A1.65 1.65 0 0 0 9 19.4a1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 4.68 15a1.65 1.65 0 0 0-1.51-1H3a2 2 0 0 1 0-4h.09A1.65 1.65 0 0 0 4.6 9a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 9 4.68a1.65 1.65 0 0 0 1-1.51V3a2 2 0 0 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 19.4 9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 0 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z",
            ],
            Self::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Self::Target => &[
                "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
                "M12 18a6 6 0 1 0 0-12 6 6 0 0 0 0 12z",
                "M12 14a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
            ],
            Self::Sparkles => &[
                "m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z",
            ],
            Self::Globe => &[
                "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
                "M2 12h20",
                "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
            ],
            Self::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
        }
    }

    /// Stable kebab-case name, matching the content spelling.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Package => "package",
            Self::Info => "info",
            Self::Mail => "mail",
            Self::Phone => "phone",
            Self::MapPin => "map-pin",
            Self::TrendingUp => "trending-up",
            Self::Leaf => "leaf",
            Self::Zap => "zap",
            Self::HeartPulse => "heart-pulse",
            Self::Truck => "truck",
            Self::Cpu => "cpu",
            Self::Search => "search",
            Self::Compass => "compass",
            Self::PenTool => "pen-tool",
            Self::Code => "code",
            Self::Rocket => "rocket",
            Self::BarChart => "bar-chart",
            Self::Shield => "shield",
            Self::Cookie => "cookie",
            Self::Lock => "lock",
            Self::Settings => "settings",
            Self::Users => "users",
            Self::Target => "target",
            Self::Sparkles => "sparkles",
            Self::Globe => "globe",
            Self::ArrowRight => "arrow-right",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case_names_deserialize() {
        let icon: Icon = serde_yaml::from_str("trending-up").unwrap();
        assert_eq!(icon, Icon::TrendingUp);
        assert_eq!(icon.name(), "trending-up");
    }

    #[test]
    fn test_every_decorative_icon_has_paths() {
        for icon in Icon::DECORATIVE {
            assert!(!icon.paths().is_empty());
        }
    }
}
