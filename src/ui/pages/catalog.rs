use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::{
    domain::{filter_listings, sort_listings, AppState, CatalogSort},
    ui::{components::shoe_grid::ShoeGrid, theme},
    util::format::pluralize,
};

/// The storefront grid: the active filter's listings, ordered by the
/// selected sort.
#[component]
pub fn CatalogPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    let (filter, sort, listings) = state.with(|st| (st.filter, st.sort, st.listings.clone()));

    let now = OffsetDateTime::now_utc();
    let mut visible = filter_listings(&listings, filter, now);
    sort_listings(&mut visible, sort);

    let heading = filter.label();
    let shoe_count = pluralize("shoe", visible.len() as u32);

    rsx! {
        section {
            header {
                class: "mb-6 flex flex-wrap items-center justify-between gap-2",
                div {
                    h2 { class: "text-lg font-semibold text-slate-100", "{heading}" }
                    p { class: "text-xs {theme::text_muted()}", "{shoe_count}" }
                }
                div {
                    class: "flex items-center gap-2 text-xs uppercase tracking-wide text-slate-400",
                    span { "Sort:" }
                    for mode in [
                        CatalogSort::NewestReleases,
                        CatalogSort::PriceLowHigh,
                        CatalogSort::PriceHighLow,
                    ] {
                        button {
                            class: theme::sort_btn(sort == mode),
                            onclick: move |_| state.with_mut(|st| st.sort = mode),
                            "{mode.label()}"
                        }
                    }
                }
            }
            ShoeGrid { listings: visible }
        }
    }
}
