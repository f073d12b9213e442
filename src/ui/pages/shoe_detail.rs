use dioxus::prelude::*;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::{
    app::Route,
    domain::{classify, AppState, ShoeVariant},
    ui::{components::variant_tag::VariantTag, theme},
    util::{
        assets,
        format::{format_price, pluralize},
    },
};

/// Detail view behind a card's `/shoe/{slug}` link.
#[component]
pub fn ShoeDetailPage(slug: String) -> Element {
    let state = use_context::<Signal<AppState>>();
    let listing = state.with(|st| st.find_listing(&slug).cloned());

    let Some(listing) = listing else {
        tracing::warn!(slug = %slug, "detail route hit for unknown listing");
        return rsx! {
            div { class: "{theme::panel_border()}",
                p { class: "{theme::empty_state()}", "No shoe found for “{slug}”." }
                p { class: "px-4 pb-6 text-sm",
                    Link {
                        class: "text-rose-300 hover:text-rose-200",
                        to: Route::Catalog {},
                        "Back to the catalog"
                    }
                }
            }
        };
    };

    let now = OffsetDateTime::now_utc();
    let variant = classify(listing.sale_price, listing.release_date, now);
    let on_sale = variant == ShoeVariant::OnSale;
    let image = assets::shoe_image_data_uri(&listing.image_src);
    let color_info = pluralize("Color", listing.num_of_colors);
    let released = listing
        .release_date
        .format(&Rfc3339)
        .unwrap_or_else(|_| listing.release_date.to_string());

    rsx! {
        section {
            class: "grid gap-8 md:grid-cols-2",
            div { class: "relative",
                VariantTag { variant }
                img { class: "{theme::card_image()}", alt: "{listing.name}", src: "{image}" }
            }
            div {
                h2 { class: "text-2xl font-semibold text-slate-100", "{listing.name}" }
                div { class: "mt-4 flex items-baseline gap-3 text-xl",
                    span { class: "{theme::card_price(on_sale)}", "{format_price(listing.price)}" }
                    if let Some(sale_price) = listing.sale_price.filter(|_| on_sale) {
                        span { class: "{theme::card_sale_price()}", "{format_price(sale_price)}" }
                    }
                }
                p { class: "mt-2 text-sm {theme::text_muted()}", "{color_info}" }
                p { class: "mt-1 text-xs {theme::text_muted()}", "Released {released}" }
                p { class: "mt-8 text-sm",
                    Link {
                        class: "text-rose-300 hover:text-rose-200",
                        to: Route::Catalog {},
                        "← Back to the catalog"
                    }
                }
            }
        }
    }
}
