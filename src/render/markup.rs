//! Entry -> markup mapping.

use maud::{html, Markup};

use crate::registry::{PackageCard, Registry};

/// Renders one entry as a navigable card.
///
/// The card is the anchor element itself, so navigation works without any
/// script: a heading child with the display name, a paragraph child with the
/// description, and the `rel` attribute only when the entry carries one. All
/// interpolated text is HTML-escaped.
pub fn card(entry: &PackageCard) -> Markup {
    html! {
        a.project-card href=(entry.href) rel=[entry.rel.as_deref()] {
            h3 { (entry.name) }
            p { (entry.description) }
        }
    }
}

/// Renders the whole registry as one markup block, in registry order.
///
/// Both rendering paths delegate here; the block spliced into the template at
/// build time and the block a hydrated container receives are the same string.
pub fn render_cards(registry: &Registry) -> String {
    let block = html! {
        @for entry in registry {
            (card(entry))
        }
    };
    block.into_string()
}
