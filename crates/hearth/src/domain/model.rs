//! Domain models for listings, applications, geocoding, and auth.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// A property listing as stored by the hosted backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub address: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub square_feet: f64,
    #[serde(default)]
    pub images: Vec<String>,
    pub owner_id: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Property {
    /// Coordinates stored on the record, if the backend has them.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// First image URL, if any.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Payload for creating a new listing. The owner is injected from the
/// signed-in session at submission time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub address: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub square_feet: f64,
    pub images: Vec<String>,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Lifecycle of a rental/purchase application, as the backend stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

/// Title and address of the listing an application refers to, embedded by
/// the backend when listing applications.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PropertySummary {
    pub title: String,
    #[serde(default)]
    pub address: String,
}

/// An application submitted against a listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PropertyApplication {
    pub id: String,
    pub property_id: String,
    pub applicant_id: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub property: Option<PropertySummary>,
}

impl PropertyApplication {
    /// Submission date for display. The backend owns the timestamp format;
    /// anything unparsable renders as absent rather than failing the page.
    pub fn created_date(&self) -> Option<time::Date> {
        let raw = self.created_at.as_deref()?;
        OffsetDateTime::parse(raw, &Rfc3339).ok().map(|ts| ts.date())
    }
}

/// Payload for submitting a new application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewApplication {
    pub property_id: String,
    pub applicant_id: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// One geocoding result: display label plus WGS-84 coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Signed-in state returned by the backend's auth endpoint and persisted
/// between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub user_id: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&ApplicationStatus::Approved).unwrap();
        assert_eq!(json, "\"approved\"");
        let back: ApplicationStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(back, ApplicationStatus::Rejected);
    }

    #[test]
    fn unknown_status_fails_decoding() {
        let result: Result<ApplicationStatus, _> = serde_json::from_str("\"withdrawn\"");
        assert!(result.is_err());
    }

    #[test]
    fn coordinates_require_both_axes() {
        let mut property: Property = serde_json::from_value(serde_json::json!({
            "id": "p1",
            "title": "Cottage",
            "price": 120000.0,
            "bedrooms": 2,
            "bathrooms": 1,
            "square_feet": 850.0,
            "owner_id": "u1",
            "latitude": 39.1
        }))
        .unwrap();
        assert_eq!(property.coordinates(), None);
        property.longitude = Some(-89.6);
        assert_eq!(property.coordinates(), Some((39.1, -89.6)));
    }

    #[test]
    fn created_date_tolerates_garbage() {
        let application = PropertyApplication {
            id: "a1".into(),
            property_id: "p1".into(),
            applicant_id: "u2".into(),
            email: "a@b.c".into(),
            phone: String::new(),
            message: String::new(),
            status: ApplicationStatus::Pending,
            created_at: Some("not a timestamp".into()),
            property: None,
        };
        assert!(application.created_date().is_none());
    }
}
