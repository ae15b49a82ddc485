//! Wire records exchanged with the hotel-management backend.
//!
//! DESIGN
//! ======
//! Every response is read through one `ApiEnvelope`. Outgoing bodies use the
//! backend's snake_case names. Client records come back camelCase, so `Client`
//! accepts both spellings; bookings are snake_case either way.
//! Nullable backend columns are `Option` so a `null` never fails a whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Response envelope `{ data, message?, status? }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

/// Credentials posted to `/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// A hotel as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub policy: Option<String>,
    /// Star rating, 1 through 5.
    pub stars: u8,
}

/// Body for creating or updating a hotel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelPayload {
    pub name: String,
    pub location: String,
    pub description: String,
    pub policy: String,
    pub stars: u8,
}

/// A stay booked by a client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: i64,
    pub check_in: String,
    pub check_out: String,
    pub guests_count: u32,
    pub payment_method: String,
    pub status: String,
}

/// A hotel client as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    #[serde(alias = "firstName")]
    pub first_name: String,
    #[serde(alias = "lastName")]
    pub last_name: String,
    #[serde(default, alias = "middleName")]
    pub middle_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_registered", alias = "isRegistered")]
    pub is_registered: bool,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

impl Client {
    pub fn full_name(&self) -> String {
        match self.middle_name.as_deref().map(str::trim) {
            Some(middle) if !middle.is_empty() => format!("{} {middle} {}", self.first_name, self.last_name),
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

/// Body for creating or updating a client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientPayload {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub email: String,
    pub phone: String,
    pub is_registered: bool,
}

fn default_registered() -> bool {
    true
}
