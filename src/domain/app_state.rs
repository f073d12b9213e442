use super::catalog::{CatalogFilter, CatalogSort};
use super::entities::ShoeListing;

/// Shared UI state, provided as a Dioxus context from the app root.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Catalog loaded from the embedded asset at startup. Empty when the
    /// load failed; the failure itself is surfaced through a toast.
    pub listings: Vec<ShoeListing>,
    pub filter: CatalogFilter,
    pub sort: CatalogSort,
}

impl AppState {
    pub fn find_listing(&self, slug: &str) -> Option<&ShoeListing> {
        self.listings.iter().find(|listing| listing.slug == slug)
    }
}
