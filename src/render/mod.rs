//! Card rendering: one entry -> markup mapping shared by the static splice
//! path and the dynamic hydrate path, so both produce the same cards.

pub mod markup;
pub mod page;

pub use markup::{card, render_cards};
pub use page::{LandingPage, RenderError, CARDS_PLACEHOLDER};
