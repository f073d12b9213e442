use dioxus::prelude::*;

use super::shoe_card::ShoeCard;
use crate::domain::ShoeListing;
use crate::ui::theme;

/// Responsive grid of shoe cards, with an empty state when a filter
/// matches nothing.
#[component]
pub fn ShoeGrid(listings: Vec<ShoeListing>) -> Element {
    if listings.is_empty() {
        return rsx! {
            div { class: "{theme::panel_border()}",
                p { class: "{theme::empty_state()}", "No shoes match this view yet." }
            }
        };
    }

    rsx! {
        div {
            class: "grid grid-cols-1 gap-8 sm:grid-cols-2 lg:grid-cols-3",
            for listing in listings {
                ShoeCard { listing }
            }
        }
    }
}
