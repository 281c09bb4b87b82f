//! One component per page.
//!
//! Pages take their content table and the motion settings for the current
//! request; they hold no state and perform no I/O.

mod about;
mod contact;
mod cookies;
mod home;
mod legal;
mod markets;
mod not_found;
mod process;
mod products;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use cookies::CookiesPage;
pub use home::HomePage;
pub use legal::{PolicyPage, PolicySections};
pub use markets::MarketsPage;
pub use not_found::NotFoundPage;
pub use process::ProcessPage;
pub use products::ProductsPage;
