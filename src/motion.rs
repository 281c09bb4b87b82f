//! Motion primitives shared by every page.
//!
//! The browser animates; this module decides *what* it animates. Everything
//! here is a pure function of its inputs so server renders stay
//! deterministic and the same formulas can be mirrored in `static/site.js`.
//!
//! - [`MotionPreference`]: the visitor's reduced-motion setting
//! - [`RevealVariant`] / [`RevealTracker`]: reveal on viewport entry, once
//! - [`tilt`]: hover tilt geometry
//! - [`decoration_glyph`]: index-derived paths for the floating layer

use std::collections::HashSet;
use std::fmt;

use axum::http::HeaderMap;

use crate::config::MotionConfig;

/// Client hint carrying the reduced-motion media feature.
pub const REDUCED_MOTION_HINT: &str = "sec-ch-prefers-reduced-motion";

/// The visitor's motion preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MotionPreference {
    /// Full animation.
    #[default]
    NoPreference,
    /// Animate opacity only; no displacement, no looping drift.
    Reduce,
}

impl MotionPreference {
    /// Read the preference from request headers.
    ///
    /// A missing or unreadable hint means no preference, which is the same
    /// answer a non-browser context gives.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(REDUCED_MOTION_HINT)
            .and_then(|value| value.to_str().ok())
            .map_or(Self::NoPreference, Self::from_hint)
    }

    /// Parse a `Sec-CH-Prefers-Reduced-Motion` value.
    #[must_use]
    pub fn from_hint(value: &str) -> Self {
        if value.trim().trim_matches('"').eq_ignore_ascii_case("reduce") {
            Self::Reduce
        } else {
            Self::NoPreference
        }
    }

    #[must_use]
    pub fn is_reduced(self) -> bool {
        self == Self::Reduce
    }
}

/// Motion inputs for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub preference: MotionPreference,
    pub reveal_offset_px: f32,
    pub reveal_duration_ms: u32,
    pub reveal_stagger_ms: u32,
    pub tilt_max_deg: f32,
    pub decoration_count: usize,
}

impl Motion {
    /// Combine configured motion settings with a visitor preference.
    #[must_use]
    pub fn new(config: &MotionConfig, preference: MotionPreference) -> Self {
        Self {
            preference,
            reveal_offset_px: config.reveal_offset_px,
            reveal_duration_ms: config.reveal_duration_ms,
            reveal_stagger_ms: config.reveal_stagger_ms,
            tilt_max_deg: config.tilt_max_deg,
            decoration_count: config.decoration_count,
        }
    }

    /// Hover tilt for interactive cards; reduced motion disables it.
    #[must_use]
    pub fn card_tilt(&self) -> Option<f32> {
        (!self.preference.is_reduced()).then_some(self.tilt_max_deg)
    }

    /// Reveal variant for the block at `index` within its section.
    #[must_use]
    pub fn reveal(&self, index: usize) -> RevealVariant {
        RevealVariant::for_index(index, self)
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::new(&MotionConfig::default(), MotionPreference::NoPreference)
    }
}

/// Initial state and timing of a block that reveals on viewport entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealVariant {
    /// Vertical displacement before the reveal, in pixels.
    pub initial_offset_px: f32,
    pub duration_ms: u32,
    pub delay_ms: u32,
    /// Reveals fire on first entry only.
    pub once: bool,
}

impl RevealVariant {
    /// Staggered variant for the `index`-th block of a section.
    #[must_use]
    pub fn for_index(index: usize, motion: &Motion) -> Self {
        let initial_offset_px = if motion.preference.is_reduced() {
            0.0
        } else {
            motion.reveal_offset_px
        };
        let step = u32::try_from(index).unwrap_or(u32::MAX);

        Self {
            initial_offset_px,
            duration_ms: motion.reveal_duration_ms,
            delay_ms: step.saturating_mul(motion.reveal_stagger_ms),
            once: true,
        }
    }

    /// CSS custom properties consumed by the reveal stylesheet.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "--reveal-y: {}px; --reveal-duration: {}ms; --reveal-delay: {}ms;",
            self.initial_offset_px, self.duration_ms, self.delay_ms
        )
    }
}

/// Tracks which elements have already been revealed.
///
/// Mirrors the `IntersectionObserver` bookkeeping in the browser script:
/// the first entry fires, every later entry is ignored.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a viewport intersection change. Returns `true` when the
    /// element should play its reveal now.
    pub fn observe(&mut self, element: &str, in_view: bool) -> bool {
        if !in_view || self.revealed.contains(element) {
            return false;
        }
        self.revealed.insert(element.to_string());
        true
    }

    #[must_use]
    pub fn is_revealed(&self, element: &str) -> bool {
        self.revealed.contains(element)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

/// An element's bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// A pointer position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

/// Rotation applied to a hovered card, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltTransform {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl TiltTransform {
    pub const NEUTRAL: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.rotate_x == 0.0 && self.rotate_y == 0.0
    }
}

impl fmt::Display for TiltTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "perspective(1000px) rotateX({}deg) rotateY({}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Tilt for a pointer hovering `bounds`.
///
/// `None` means the pointer has left the element, which resets the tilt.
#[must_use]
pub fn tilt(bounds: BoundingBox, pointer: Option<Pointer>, max_deg: f32) -> TiltTransform {
    let Some(pointer) = pointer else {
        return TiltTransform::NEUTRAL;
    };
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return TiltTransform::NEUTRAL;
    }

    let nx = ((pointer.x - bounds.left) / bounds.width - 0.5).clamp(-0.5, 0.5);
    let ny = ((pointer.y - bounds.top) / bounds.height - 0.5).clamp(-0.5, 0.5);

    // -0.0 renders as "-0deg"; keep the centre exactly neutral.
    TiltTransform {
        rotate_x: (-ny * 2.0 * max_deg) + 0.0,
        rotate_y: (nx * 2.0 * max_deg) + 0.0,
    }
}

/// Placement and loop timing of one floating glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPath {
    /// Horizontal anchor, percent of the layer width.
    pub left_pct: u32,
    /// Vertical anchor, percent of the layer height.
    pub top_pct: u32,
    /// Peak vertical drift in pixels.
    pub drift_px: u32,
    pub duration_s: u32,
    /// Start delay in tenths of a second.
    pub delay_ds: u32,
}

impl GlyphPath {
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {}%; top: {}%; --float-drift: {}px; --float-duration: {}s; --float-delay: {}.{}s;",
            self.left_pct,
            self.top_pct,
            self.drift_px,
            self.duration_s,
            self.delay_ds / 10,
            self.delay_ds % 10
        )
    }
}

/// Path of the `index`-th floating glyph.
///
/// Anchors are spread by co-prime strides so neighbouring glyphs never
/// stack; reduced motion pins every glyph in place.
#[must_use]
pub fn decoration_glyph(index: usize, preference: MotionPreference) -> GlyphPath {
    let i = u32::try_from(index % 100).unwrap_or(0);
    let drift_px = if preference.is_reduced() {
        0
    } else {
        12 + (i % 3) * 8
    };

    GlyphPath {
        left_pct: (i * 37 + 11) % 90 + 5,
        top_pct: (i * 53 + 7) % 80 + 10,
        drift_px,
        duration_s: 12 + (i % 4) * 3,
        delay_ds: i * 8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn motion(preference: MotionPreference) -> Motion {
        Motion {
            preference,
            ..Motion::default()
        }
    }

    const CARD: BoundingBox = BoundingBox {
        left: 100.0,
        top: 200.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn test_preference_from_headers() {
        let mut headers = HeaderMap::new();
        assert_eq!(
            MotionPreference::from_headers(&headers),
            MotionPreference::NoPreference
        );

        headers.insert(REDUCED_MOTION_HINT, HeaderValue::from_static("reduce"));
        assert_eq!(
            MotionPreference::from_headers(&headers),
            MotionPreference::Reduce
        );

        headers.insert(
            REDUCED_MOTION_HINT,
            HeaderValue::from_static("no-preference"),
        );
        assert_eq!(
            MotionPreference::from_headers(&headers),
            MotionPreference::NoPreference
        );
    }

    #[test]
    fn test_quoted_hint_is_accepted() {
        assert_eq!(MotionPreference::from_hint("\"reduce\""), MotionPreference::Reduce);
        assert_eq!(MotionPreference::from_hint(" Reduce "), MotionPreference::Reduce);
    }

    #[test]
    fn test_reduced_motion_zeroes_initial_offset() {
        let full = motion(MotionPreference::NoPreference).reveal(3);
        let reduced = motion(MotionPreference::Reduce).reveal(3);

        assert!(full.initial_offset_px > 0.0);
        assert_eq!(reduced.initial_offset_px, 0.0);
        assert_eq!(full.delay_ms, reduced.delay_ms);
        assert!(reduced.style().contains("--reveal-y: 0px;"));
    }

    #[test]
    fn test_reveal_delay_is_staggered_by_index() {
        let m = motion(MotionPreference::NoPreference);
        assert_eq!(m.reveal(0).delay_ms, 0);
        assert_eq!(m.reveal(1).delay_ms, m.reveal_stagger_ms);
        assert_eq!(m.reveal(4).delay_ms, 4 * m.reveal_stagger_ms);
        assert!(m.reveal(2).once);
    }

    #[test]
    fn test_reveal_fires_once_per_element() {
        let mut tracker = RevealTracker::new();

        assert!(!tracker.observe("sectors:0", false));
        assert!(tracker.observe("sectors:0", true));
        assert!(!tracker.observe("sectors:0", false));
        assert!(!tracker.observe("sectors:0", true));
        assert!(tracker.observe("sectors:1", true));

        assert!(tracker.is_revealed("sectors:0"));
        assert_eq!(tracker.revealed_count(), 2);
    }

    #[test]
    fn test_reduced_motion_disables_card_tilt() {
        assert_eq!(motion(MotionPreference::NoPreference).card_tilt(), Some(8.0));
        assert_eq!(motion(MotionPreference::Reduce).card_tilt(), None);
    }

    #[test]
    fn test_tilt_is_neutral_at_centre_and_on_exit() {
        let centre = Pointer { x: 200.0, y: 250.0 };
        assert!(tilt(CARD, Some(centre), 8.0).is_neutral());
        assert_eq!(tilt(CARD, None, 8.0), TiltTransform::NEUTRAL);
    }

    #[test]
    fn test_tilt_is_proportional_to_offset() {
        let quarter = tilt(CARD, Some(Pointer { x: 250.0, y: 250.0 }), 8.0);
        let edge = tilt(CARD, Some(Pointer { x: 300.0, y: 250.0 }), 8.0);

        assert!((quarter.rotate_y - 4.0).abs() < f32::EPSILON);
        assert!((edge.rotate_y - 8.0).abs() < f32::EPSILON);
        assert_eq!(edge.rotate_x, 0.0);

        let top_edge = tilt(CARD, Some(Pointer { x: 200.0, y: 200.0 }), 8.0);
        assert!((top_edge.rotate_x - 8.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_tilt_clamps_outside_pointer() {
        let far = tilt(CARD, Some(Pointer { x: 5000.0, y: -5000.0 }), 8.0);
        assert!((far.rotate_y - 8.0).abs() < f32::EPSILON);
        assert!((far.rotate_x - 8.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_tilt_degenerate_box_is_neutral() {
        let flat = BoundingBox {
            width: 0.0,
            ..CARD
        };
        assert!(tilt(flat, Some(Pointer { x: 1.0, y: 1.0 }), 8.0).is_neutral());
    }

    #[test]
    fn test_tilt_css() {
        assert_eq!(
            TiltTransform::NEUTRAL.to_string(),
            "perspective(1000px) rotateX(0deg) rotateY(0deg)"
        );
    }

    #[test]
    fn test_glyph_paths_are_deterministic_and_in_bounds() {
        for i in 0..24 {
            let a = decoration_glyph(i, MotionPreference::NoPreference);
            let b = decoration_glyph(i, MotionPreference::NoPreference);
            assert_eq!(a, b);
            assert!((5..95).contains(&a.left_pct));
            assert!((10..90).contains(&a.top_pct));
            assert!(a.drift_px > 0);
        }
    }

    #[test]
    fn test_reduced_motion_pins_glyphs() {
        let glyph = decoration_glyph(5, MotionPreference::Reduce);
        assert_eq!(glyph.drift_px, 0);
        assert!(glyph.style().contains("--float-drift: 0px;"));
    }

    #[test]
    fn test_glyph_delay_formatting() {
        let glyph = decoration_glyph(3, MotionPreference::NoPreference);
        assert_eq!(glyph.delay_ds, 24);
        assert!(glyph.style().contains("--float-delay: 2.4s;"));
    }

    const BROWSER_SCRIPT: &str = include_str!("../static/site.js");

    #[test]
    fn test_browser_script_reveals_once() {
        // The observer stops watching an element after its first reveal,
        // matching RevealTracker.
        assert!(BROWSER_SCRIPT.contains("entry.target.dataset.revealOnce === \"true\""));
        assert!(BROWSER_SCRIPT.contains("observer.unobserve(entry.target)"));
        assert!(RevealVariant::for_index(3, &Motion::default()).once);
    }

    #[test]
    fn test_browser_script_tilt_matches_formula() {
        let template = "perspective(1000px) rotateX(${rx}deg) rotateY(${ry}deg)";
        assert!(BROWSER_SCRIPT.contains(template));
        assert!(BROWSER_SCRIPT.contains("Math.min(0.5, Math.max(-0.5, v))"));
        assert!(BROWSER_SCRIPT.contains("card.dataset.tiltRest"));

        let transform = tilt(CARD, Some(Pointer { x: 300.0, y: 150.0 }), 8.0);
        let rendered = template
            .replace("${rx}", &transform.rotate_x.to_string())
            .replace("${ry}", &transform.rotate_y.to_string());
        assert_eq!(rendered, transform.to_string());
    }
}
