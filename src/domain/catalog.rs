//! Filtering and ordering of the catalog grid.

use std::cmp::Ordering;

use time::OffsetDateTime;

use super::entities::ShoeListing;
use super::variant::{classify, ShoeVariant};

/// Which slice of the catalog the grid shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CatalogFilter {
    #[default]
    All,
    OnSale,
    NewReleases,
}

impl CatalogFilter {
    pub fn label(&self) -> &'static str {
        match self {
            CatalogFilter::All => "All Shoes",
            CatalogFilter::OnSale => "Sale",
            CatalogFilter::NewReleases => "New Releases",
        }
    }
}

/// Ordering applied to the grid after filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CatalogSort {
    #[default]
    NewestReleases,
    PriceLowHigh,
    PriceHighLow,
}

impl CatalogSort {
    pub fn label(&self) -> &'static str {
        match self {
            CatalogSort::NewestReleases => "Newest",
            CatalogSort::PriceLowHigh => "Price ↑",
            CatalogSort::PriceHighLow => "Price ↓",
        }
    }
}

/// Keep the listings whose variant matches the filter.
///
/// Variant classification decides membership, so a discounted shoe that is
/// also a fresh release shows up under `OnSale` only — the same dominance
/// rule the card tag uses.
pub fn filter_listings(
    listings: &[ShoeListing],
    filter: CatalogFilter,
    now: OffsetDateTime,
) -> Vec<ShoeListing> {
    listings
        .iter()
        .filter(|listing| match filter {
            CatalogFilter::All => true,
            CatalogFilter::OnSale => {
                classify(listing.sale_price, listing.release_date, now) == ShoeVariant::OnSale
            }
            CatalogFilter::NewReleases => {
                classify(listing.sale_price, listing.release_date, now)
                    == ShoeVariant::NewRelease
            }
        })
        .cloned()
        .collect()
}

/// Order listings in place. The sort is stable, so equal keys keep their
/// catalog order.
pub fn sort_listings(listings: &mut [ShoeListing], sort: CatalogSort) {
    match sort {
        CatalogSort::NewestReleases => {
            listings.sort_by(|a, b| b.release_date.cmp(&a.release_date));
        }
        CatalogSort::PriceLowHigh => {
            listings.sort_by(|a, b| compare_effective_price(a, b));
        }
        CatalogSort::PriceHighLow => {
            listings.sort_by(|a, b| compare_effective_price(b, a));
        }
    }
}

fn compare_effective_price(a: &ShoeListing, b: &ShoeListing) -> Ordering {
    a.effective_price().cmp(&b.effective_price())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;
    use time::Duration;

    const NOW: OffsetDateTime = datetime!(2026-08-01 12:00:00 UTC);

    fn listing(slug: &str, price: i64, sale_price: Option<i64>, days_ago: i64) -> ShoeListing {
        ShoeListing {
            slug: slug.to_string(),
            name: slug.to_string(),
            image_src: format!("{slug}.svg"),
            price,
            sale_price,
            release_date: NOW - Duration::days(days_ago),
            num_of_colors: 1,
        }
    }

    fn fixture() -> Vec<ShoeListing> {
        vec![
            listing("old-full-price", 10000, None, 200),
            listing("fresh-discounted", 12000, Some(9000), 5),
            listing("fresh-full-price", 8000, None, 5),
            listing("old-discounted", 6000, Some(4000), 90),
        ]
    }

    #[test]
    fn on_sale_filter_keeps_every_discounted_listing() {
        let kept = filter_listings(&fixture(), CatalogFilter::OnSale, NOW);
        let slugs: Vec<_> = kept.iter().map(|l| l.slug.as_str()).collect();
        assert_eq!(slugs, ["fresh-discounted", "old-discounted"]);
    }

    #[test]
    fn new_releases_filter_excludes_discounted_fresh_listing() {
        let kept = filter_listings(&fixture(), CatalogFilter::NewReleases, NOW);
        let slugs: Vec<_> = kept.iter().map(|l| l.slug.as_str()).collect();
        assert_eq!(slugs, ["fresh-full-price"]);
    }

    #[test]
    fn all_filter_keeps_everything_in_order() {
        assert_eq!(filter_listings(&fixture(), CatalogFilter::All, NOW).len(), 4);
    }

    #[test]
    fn price_sort_uses_the_effective_price() {
        let mut listings = fixture();
        sort_listings(&mut listings, CatalogSort::PriceLowHigh);
        let prices: Vec<_> = listings.iter().map(ShoeListing::effective_price).collect();
        assert_eq!(prices, [4000, 8000, 9000, 10000]);
    }

    #[test]
    fn price_sort_descending_reverses_the_order() {
        let mut listings = fixture();
        sort_listings(&mut listings, CatalogSort::PriceHighLow);
        let prices: Vec<_> = listings.iter().map(ShoeListing::effective_price).collect();
        assert_eq!(prices, [10000, 9000, 8000, 4000]);
    }

    #[test]
    fn newest_sort_puts_fresh_releases_first() {
        let mut listings = fixture();
        sort_listings(&mut listings, CatalogSort::NewestReleases);
        assert_eq!(listings[0].slug, "fresh-discounted");
        assert_eq!(listings.last().unwrap().slug, "old-full-price");
    }
}
