//! Page composition shared by every page.
//!
//! Every page follows the same shape: a [`PageContainer`] that draws the
//! [`FloatingDecorations`] once, a [`PageHero`], a fixed sequence of
//! [`Section`]s whose blocks come from [`reveal_list`], and a closing
//! [`CtaBlock`]. [`SiteHeader`] and [`SiteFooter`] frame every page.

mod chrome;
mod container;
mod cta;
mod decoration;
mod section;

pub use chrome::{SiteFooter, SiteHeader};
pub use container::{PageContainer, PageHero};
pub use cta::CtaBlock;
pub use decoration::FloatingDecorations;
pub use section::{Section, reveal_list};
