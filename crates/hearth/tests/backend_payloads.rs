//! Backend payloads decode into the domain model, and form drafts produce
//! well-shaped submission payloads.

use hearth::app::applications::ApplicationDraft;
use hearth::app::listings::ListingDraft;
use hearth::domain::errors::DomainError;
use hearth::domain::model::{ApplicationStatus, AuthSession, Property, PropertyApplication};

fn session(user_id: &str) -> AuthSession {
    AuthSession {
        access_token: "jwt".into(),
        user_id: user_id.into(),
        email: "viewer@example.org".into(),
    }
}

#[test]
fn property_listing_payload_decodes() {
    let rows: Vec<Property> = serde_json::from_str(
        r#"[
            {
                "id": "4f9d0a4e",
                "title": "Beautiful House in Downtown",
                "description": "Three floors and a garden.",
                "price": 299999,
                "address": "100 Main St, Springfield",
                "bedrooms": 3,
                "bathrooms": 2,
                "square_feet": 2000,
                "images": ["https://img.example.org/front.jpg"],
                "owner_id": "u-owner",
                "latitude": 39.1,
                "longitude": -89.6,
                "created_at": "2026-04-18T08:12:00Z"
            },
            {
                "id": "77aa91b2",
                "title": "Compact Studio",
                "price": 96000,
                "bedrooms": 1,
                "bathrooms": 1,
                "square_feet": 410.5,
                "owner_id": "u-other"
            }
        ]"#,
    )
    .expect("rows decode");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].coordinates(), Some((39.1, -89.6)));
    assert_eq!(rows[1].coordinates(), None);
    assert!(rows[1].images.is_empty());
    assert!(rows[1].description.is_empty());
}

#[test]
fn application_payload_decodes_with_embedded_listing() {
    let rows: Vec<PropertyApplication> = serde_json::from_str(
        r#"[
            {
                "id": "a-1",
                "property_id": "4f9d0a4e",
                "applicant_id": "u-tenant",
                "email": "tenant@example.org",
                "phone": "555-0100",
                "message": "We would love to rent this.",
                "status": "approved",
                "created_at": "2026-05-02T09:30:00Z",
                "property": {"title": "Beautiful House in Downtown", "address": "100 Main St"}
            }
        ]"#,
    )
    .expect("rows decode");

    assert_eq!(rows[0].status, ApplicationStatus::Approved);
    let summary = rows[0].property.as_ref().expect("embedded listing");
    assert_eq!(summary.title, "Beautiful House in Downtown");
    let date = rows[0].created_date().expect("valid timestamp");
    assert_eq!(date.to_string(), "2026-05-02");
}

#[test]
fn listing_draft_serializes_without_absent_coordinates() {
    let draft = ListingDraft {
        title: "Compact Studio".into(),
        description: "Cozy".into(),
        price: "96000".into(),
        address: "5 Side St".into(),
        bedrooms: "1".into(),
        bathrooms: "1".into(),
        square_feet: "410.5".into(),
        images: String::new(),
        coordinates: None,
    };
    let listing = draft.build("u-owner").expect("valid draft");
    let value = serde_json::to_value(&listing).expect("serializes");

    assert_eq!(value["owner_id"], "u-owner");
    assert_eq!(value["price"], 96000.0);
    assert!(value.get("latitude").is_none());
    assert!(value.get("longitude").is_none());
}

#[test]
fn own_listing_applications_are_rejected_before_any_request() {
    let property: Property = serde_json::from_value(serde_json::json!({
        "id": "p-1",
        "title": "Mine",
        "price": 1000.0,
        "bedrooms": 1,
        "bathrooms": 1,
        "square_feet": 100.0,
        "owner_id": "u-owner"
    }))
    .unwrap();

    let draft = ApplicationDraft {
        email: "owner@example.org".into(),
        phone: "555-0100".into(),
        message: "Applying to myself".into(),
    };
    assert_eq!(
        draft.build(&property, &session("u-owner")),
        Err(DomainError::OwnListing)
    );
    assert!(draft.build(&property, &session("u-tenant")).is_ok());
}
