//! Display classification for catalog listings.

use time::{Duration, OffsetDateTime};

/// How long after its release date a listing keeps the "new" treatment.
/// The boundary is inclusive: a shoe released exactly this long ago is
/// still new.
pub const NEW_RELEASE_WINDOW: Duration = Duration::days(30);

/// The three display treatments a listing can get on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShoeVariant {
    NewRelease,
    OnSale,
    Default,
}

impl ShoeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShoeVariant::NewRelease => "new-release",
            ShoeVariant::OnSale => "on-sale",
            ShoeVariant::Default => "default",
        }
    }
}

/// Classify a listing from its sale price and release date.
///
/// A present `sale_price` wins outright, even when the release is recent
/// and even when the discounted price is zero. Otherwise a release inside
/// [`NEW_RELEASE_WINDOW`] of `now` (future dates included) is a new
/// release, and anything older falls back to the default treatment.
///
/// `now` is passed in rather than read from the clock so the result is a
/// pure function of its arguments.
pub fn classify(
    sale_price: Option<i64>,
    release_date: OffsetDateTime,
    now: OffsetDateTime,
) -> ShoeVariant {
    if sale_price.is_some() {
        ShoeVariant::OnSale
    } else if now - release_date <= NEW_RELEASE_WINDOW {
        ShoeVariant::NewRelease
    } else {
        ShoeVariant::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    const NOW: OffsetDateTime = datetime!(2026-08-01 12:00:00 UTC);

    #[test]
    fn sale_price_wins_over_recent_release() {
        let released = NOW - Duration::days(10);
        assert_eq!(classify(Some(8000), released, NOW), ShoeVariant::OnSale);
    }

    #[test]
    fn zero_sale_price_still_counts_as_on_sale() {
        let released = NOW - Duration::days(400);
        assert_eq!(classify(Some(0), released, NOW), ShoeVariant::OnSale);
    }

    #[test]
    fn recent_release_without_sale_is_new() {
        let released = NOW - Duration::days(10);
        assert_eq!(classify(None, released, NOW), ShoeVariant::NewRelease);
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let released = NOW - NEW_RELEASE_WINDOW;
        assert_eq!(classify(None, released, NOW), ShoeVariant::NewRelease);
    }

    #[test]
    fn just_past_the_window_is_default() {
        let released = NOW - NEW_RELEASE_WINDOW - Duration::seconds(1);
        assert_eq!(classify(None, released, NOW), ShoeVariant::Default);
    }

    #[test]
    fn future_release_date_is_new() {
        let released = NOW + Duration::days(3);
        assert_eq!(classify(None, released, NOW), ShoeVariant::NewRelease);
    }

    #[test]
    fn old_release_without_sale_is_default() {
        let released = NOW - Duration::days(365);
        assert_eq!(classify(None, released, NOW), ShoeVariant::Default);
    }

    #[test]
    fn classification_is_deterministic() {
        let released = NOW - Duration::days(10);
        let first = classify(Some(8000), released, NOW);
        let second = classify(Some(8000), released, NOW);
        assert_eq!(first, second);
    }
}
