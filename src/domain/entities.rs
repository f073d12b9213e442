use time::OffsetDateTime;

/// A single catalog listing, as shown on the storefront grid.
///
/// Prices are integer cents. `sale_price` being present marks the listing
/// as discounted; a value of zero still counts as a discount.
#[derive(Clone, Debug, PartialEq)]
pub struct ShoeListing {
    /// Unique identifier, also the `/shoe/{slug}` route segment.
    pub slug: String,
    pub name: String,
    /// File name of an embedded artwork asset.
    pub image_src: String,
    pub price: i64,
    pub sale_price: Option<i64>,
    pub release_date: OffsetDateTime,
    pub num_of_colors: u32,
}

impl ShoeListing {
    /// The price a buyer would actually pay.
    pub fn effective_price(&self) -> i64 {
        self.sale_price.unwrap_or(self.price)
    }
}
