//! Listing browsing and creation workflows.

use anyhow::Result;

use crate::domain::errors::DomainError;
use crate::domain::model::{NewProperty, Property};
use crate::infra::backend::Backend;
use crate::infra::geocoder::Geocoder;

/// Raw form input for a new listing. Numeric fields stay strings until
/// submission so the form can echo back exactly what was typed.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub price: String,
    pub address: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub square_feet: String,
    pub images: String,
    /// Coordinates of the suggestion the user picked, if any. Absent when
    /// the address was typed free-form.
    pub coordinates: Option<(f64, f64)>,
}

impl ListingDraft {
    /// Validate and convert the draft into a creation payload owned by the
    /// signed-in user.
    pub fn build(&self, owner_id: &str) -> Result<NewProperty, DomainError> {
        let title = required(&self.title, "title")?;
        let description = required(&self.description, "description")?;
        let address = required(&self.address, "address")?;

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| DomainError::invalid("price", "must be a number"))?;
        if !price.is_finite() || price <= 0.0 {
            return Err(DomainError::invalid("price", "must be positive"));
        }

        let bedrooms: u32 = self
            .bedrooms
            .trim()
            .parse()
            .map_err(|_| DomainError::invalid("bedrooms", "must be a whole number"))?;
        let bathrooms: u32 = self
            .bathrooms
            .trim()
            .parse()
            .map_err(|_| DomainError::invalid("bathrooms", "must be a whole number"))?;
        let square_feet: f64 = self
            .square_feet
            .trim()
            .parse()
            .map_err(|_| DomainError::invalid("square feet", "must be a number"))?;

        Ok(NewProperty {
            title,
            description,
            price,
            address,
            bedrooms,
            bathrooms,
            square_feet,
            images: split_image_urls(&self.images),
            owner_id: owner_id.to_owned(),
            latitude: self.coordinates.map(|(lat, _)| lat),
            longitude: self.coordinates.map(|(_, lon)| lon),
        })
    }
}

fn required(value: &str, field: &'static str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::invalid(field, "is required"));
    }
    Ok(trimmed.to_owned())
}

/// Comma-separated image URL input, trimmed, empties dropped.
pub fn split_image_urls(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Listings shown on the home page, newest first.
pub fn featured(properties: &[Property], limit: usize) -> &[Property] {
    &properties[..properties.len().min(limit)]
}

/// A listing plus the coordinates to show for it.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDetail {
    pub property: Property,
    pub coordinates: Option<(f64, f64)>,
}

/// Fetch one listing and resolve its location: stored coordinates win, and
/// otherwise the address is geocoded on the fly. Geocoding failure only
/// costs the map line, never the page.
pub fn load_detail(backend: &Backend, geocoder: &Geocoder, id: &str) -> Result<PropertyDetail> {
    let property = backend.fetch_property(id)?;
    let coordinates = match property.coordinates() {
        Some(stored) => Some(stored),
        None if !property.address.trim().is_empty() => {
            match geocoder.locate(&property.address) {
                Ok(located) => located,
                Err(err) => {
                    tracing::warn!(error = %err, id, "failed to geocode listing address");
                    None
                }
            }
        }
        None => None,
    };
    Ok(PropertyDetail {
        property,
        coordinates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> ListingDraft {
        ListingDraft {
            title: "Beautiful House in Downtown".into(),
            description: "Three floors, garden".into(),
            price: "299999".into(),
            address: "100 Main St, Springfield".into(),
            bedrooms: "3".into(),
            bathrooms: "2".into(),
            square_feet: "2000".into(),
            images: " https://img.example.org/a.jpg,, https://img.example.org/b.jpg ".into(),
            coordinates: Some((39.1, -89.6)),
        }
    }

    #[test]
    fn draft_builds_a_creation_payload() {
        let listing = filled_draft().build("u-1").expect("valid draft");
        assert_eq!(listing.owner_id, "u-1");
        assert_eq!(listing.price, 299999.0);
        assert_eq!(listing.bedrooms, 3);
        assert_eq!(
            listing.images,
            vec![
                "https://img.example.org/a.jpg".to_owned(),
                "https://img.example.org/b.jpg".to_owned()
            ]
        );
        assert_eq!(listing.latitude, Some(39.1));
        assert_eq!(listing.longitude, Some(-89.6));
    }

    #[test]
    fn missing_title_is_rejected() {
        let mut draft = filled_draft();
        draft.title = "  ".into();
        assert_eq!(
            draft.build("u-1"),
            Err(DomainError::invalid("title", "is required"))
        );
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let mut draft = filled_draft();
        draft.price = "lots".into();
        assert!(draft.build("u-1").is_err());
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut draft = filled_draft();
        draft.price = "-5".into();
        assert_eq!(
            draft.build("u-1"),
            Err(DomainError::invalid("price", "must be positive"))
        );
    }

    #[test]
    fn free_form_address_has_no_coordinates() {
        let mut draft = filled_draft();
        draft.coordinates = None;
        let listing = draft.build("u-1").unwrap();
        assert_eq!(listing.latitude, None);
        assert_eq!(listing.longitude, None);
    }

    #[test]
    fn image_urls_split_on_commas() {
        assert_eq!(
            split_image_urls("a.jpg, b.jpg ,,  "),
            vec!["a.jpg".to_owned(), "b.jpg".to_owned()]
        );
        assert!(split_image_urls("").is_empty());
    }

    #[test]
    fn featured_caps_the_listing_count() {
        let rows: Vec<Property> = serde_json::from_value(serde_json::json!([
            {"id": "1", "title": "a", "price": 1.0, "bedrooms": 1, "bathrooms": 1,
             "square_feet": 1.0, "owner_id": "u"},
            {"id": "2", "title": "b", "price": 1.0, "bedrooms": 1, "bathrooms": 1,
             "square_feet": 1.0, "owner_id": "u"}
        ]))
        .unwrap();
        assert_eq!(featured(&rows, 1).len(), 1);
        assert_eq!(featured(&rows, 10).len(), 2);
    }
}
