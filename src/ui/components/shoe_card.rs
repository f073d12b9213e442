use dioxus::prelude::*;
use time::OffsetDateTime;

use super::variant_tag::VariantTag;
use crate::app::Route;
use crate::domain::{classify, ShoeListing, ShoeVariant};
use crate::ui::theme;
use crate::util::assets;
use crate::util::format::{format_price, pluralize};

/// One catalog card: artwork with an optional variant tag, the name/price
/// row, and the color count with the sale price alongside while a sale
/// runs.
#[component]
pub fn ShoeCard(listing: ShoeListing) -> Element {
    // Captured once per render so every derived value agrees on the clock.
    let now = OffsetDateTime::now_utc();
    let variant = classify(listing.sale_price, listing.release_date, now);

    tracing::debug!(
        slug = %listing.slug,
        name = %listing.name,
        image_src = %listing.image_src,
        price = listing.price,
        sale_price = ?listing.sale_price,
        release_date = %listing.release_date,
        num_of_colors = listing.num_of_colors,
        variant = variant.as_str(),
        "rendering shoe card"
    );

    let on_sale = variant == ShoeVariant::OnSale;
    let image = assets::shoe_image_data_uri(&listing.image_src);
    let color_info = pluralize("Color", listing.num_of_colors);

    rsx! {
        Link {
            class: "{theme::card_link()}",
            to: Route::Shoe { slug: listing.slug.clone() },
            article {
                div { class: "relative",
                    VariantTag { variant }
                    img { class: "{theme::card_image()}", alt: "", src: "{image}" }
                }
                div { class: "mt-3 flex justify-between text-base",
                    h3 { class: "{theme::card_name()}", "{listing.name}" }
                    span { class: "{theme::card_price(on_sale)}", "{format_price(listing.price)}" }
                }
                div { class: "flex justify-between text-base",
                    p { class: "{theme::card_color_info()}", "{color_info}" }
                    if let Some(sale_price) = listing.sale_price.filter(|_| on_sale) {
                        span { class: "{theme::card_sale_price()}", "{format_price(sale_price)}" }
                    }
                }
            }
        }
    }
}
