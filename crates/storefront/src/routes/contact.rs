//! Contact page route handler.
//!
//! Static content; the only page that does not touch the store.

use axum::Json;
use serde::Serialize;

/// Contact card payload.
#[derive(Debug, Clone, Serialize)]
pub struct ContactPage {
    /// Shop display name.
    pub shop_name: &'static str,
    /// Contact email address.
    pub email: &'static str,
    /// Contact phone number.
    pub phone: &'static str,
    /// Opening hours.
    pub hours: &'static str,
}

/// The shop's contact card.
const CONTACT: ContactPage = ContactPage {
    shop_name: "Festiva Balloons",
    email: "hello@festiva.example",
    phone: "+1 (555) 010-2336",
    hours: "Daily 9:00-20:00",
};

/// Return the static contact card.
pub async fn contact() -> Json<ContactPage> {
    Json(CONTACT)
}
