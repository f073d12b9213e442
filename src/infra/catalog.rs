//! Catalog source backed by the embedded `assets/shoes.json` fixture.
//!
//! The wire shape keeps timestamps as RFC 3339 strings; conversion to the
//! domain type pins the parse failure to the offending listing.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::domain::ShoeListing;
use crate::util::assets;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog asset is not embedded in this build")]
    Missing,
    #[error("catalog JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("listing `{slug}` has an invalid release date: {source}")]
    ReleaseDate {
        slug: String,
        source: time::error::Parse,
    },
    #[error("listing slug `{0}` appears more than once")]
    DuplicateSlug(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShoeListingDto {
    slug: String,
    name: String,
    image_src: String,
    price: i64,
    #[serde(default)]
    sale_price: Option<i64>,
    release_date: String,
    num_of_colors: u32,
}

/// Loads and validates the embedded catalog.
///
/// Slugs key the detail route, so a duplicate is rejected rather than
/// silently shadowing a listing.
pub fn load_catalog() -> Result<Vec<ShoeListing>, CatalogError> {
    let raw = assets::catalog_json().ok_or(CatalogError::Missing)?;
    let dtos: Vec<ShoeListingDto> = serde_json::from_slice(raw.as_ref())?;
    convert_catalog(dtos)
}

fn convert_catalog(dtos: Vec<ShoeListingDto>) -> Result<Vec<ShoeListing>, CatalogError> {
    let mut seen = HashSet::with_capacity(dtos.len());
    let mut listings = Vec::with_capacity(dtos.len());
    for dto in dtos {
        if !seen.insert(dto.slug.clone()) {
            return Err(CatalogError::DuplicateSlug(dto.slug));
        }
        listings.push(convert_listing(dto)?);
    }
    Ok(listings)
}

fn convert_listing(dto: ShoeListingDto) -> Result<ShoeListing, CatalogError> {
    let release_date = OffsetDateTime::parse(&dto.release_date, &Rfc3339).map_err(|source| {
        CatalogError::ReleaseDate {
            slug: dto.slug.clone(),
            source,
        }
    })?;

    Ok(ShoeListing {
        slug: dto.slug,
        name: dto.name,
        image_src: dto.image_src,
        price: dto.price,
        sale_price: dto.sale_price,
        release_date,
        num_of_colors: dto.num_of_colors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads_with_unique_slugs() {
        let listings = load_catalog().expect("embedded catalog should parse");
        assert!(!listings.is_empty());

        let slugs: HashSet<_> = listings.iter().map(|l| l.slug.as_str()).collect();
        assert_eq!(slugs.len(), listings.len());
    }

    #[test]
    fn embedded_catalog_covers_every_variant_input() {
        let listings = load_catalog().unwrap();
        assert!(listings.iter().any(|l| l.sale_price.is_some()));
        assert!(listings.iter().any(|l| l.sale_price.is_none()));
    }

    #[test]
    fn malformed_release_date_names_the_listing() {
        let dto = ShoeListingDto {
            slug: "bad-date".to_string(),
            name: "Bad Date".to_string(),
            image_src: "bad.svg".to_string(),
            price: 1000,
            sale_price: None,
            release_date: "yesterday".to_string(),
            num_of_colors: 1,
        };
        match convert_listing(dto) {
            Err(CatalogError::ReleaseDate { slug, .. }) => assert_eq!(slug, "bad-date"),
            other => panic!("expected ReleaseDate error, got {other:?}"),
        }
    }

    #[test]
    fn sale_price_zero_survives_the_wire_format() {
        let json = r#"[{
            "slug": "freebie",
            "name": "Freebie",
            "imageSrc": "freebie.svg",
            "price": 5000,
            "salePrice": 0,
            "releaseDate": "2024-01-15T00:00:00Z",
            "numOfColors": 2
        }]"#;
        let dtos: Vec<ShoeListingDto> = serde_json::from_str(json).unwrap();
        let listing = convert_listing(dtos.into_iter().next().unwrap()).unwrap();
        assert_eq!(listing.sale_price, Some(0));
    }

    #[test]
    fn duplicate_slugs_are_rejected() {
        let json = r#"[
            {"slug": "twin", "name": "a", "imageSrc": "a.svg", "price": 1,
             "releaseDate": "2024-01-01T00:00:00Z", "numOfColors": 1},
            {"slug": "twin", "name": "b", "imageSrc": "b.svg", "price": 2,
             "releaseDate": "2024-01-01T00:00:00Z", "numOfColors": 1}
        ]"#;
        let dtos: Vec<ShoeListingDto> = serde_json::from_str(json).unwrap();
        match convert_catalog(dtos) {
            Err(CatalogError::DuplicateSlug(slug)) => assert_eq!(slug, "twin"),
            other => panic!("expected DuplicateSlug error, got {other:?}"),
        }
    }
}
