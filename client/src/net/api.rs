//! REST bindings for the backend resources.
//!
//! Each call goes through the shared `Gateway`, so authentication headers and
//! 401 handling apply uniformly. Callers get `Result` outputs and decide how to
//! surface failures; nothing here navigates or touches page state.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::gateway::{ApiError, Gateway};
use super::types::{Client, ClientPayload, Hotel, HotelPayload, LoginRequest};
use crate::state::session::strip_bearer;

pub const LOGIN_PATH: &str = "/auth/login";
pub const HOTELS_PATH: &str = "/hotels";
pub const CLIENTS_PATH: &str = "/clients";

fn hotel_path(id: i64) -> String {
    format!("{HOTELS_PATH}/{id}")
}

fn client_path(id: i64) -> String {
    format!("{CLIENTS_PATH}/{id}")
}

/// Exchange credentials for a bearer token via `POST /auth/login`.
///
/// The returned token has any `Bearer ` marker removed; storing it in the
/// session is left to the caller.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the credentials are rejected.
pub async fn login(gateway: &Gateway, credentials: &LoginRequest) -> Result<String, ApiError> {
    let raw: String = gateway.post(LOGIN_PATH, credentials).await?;
    Ok(strip_bearer(&raw).to_owned())
}

/// List hotels via `GET /hotels`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body is not a hotel list.
pub async fn list_hotels(gateway: &Gateway) -> Result<Vec<Hotel>, ApiError> {
    gateway.get(HOTELS_PATH).await
}

/// Fetch one hotel via `GET /hotels/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the hotel does not exist.
pub async fn get_hotel(gateway: &Gateway, id: i64) -> Result<Hotel, ApiError> {
    gateway.get(&hotel_path(id)).await
}

/// Create a hotel via `POST /hotels`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the backend rejects the payload.
pub async fn create_hotel(gateway: &Gateway, payload: &HotelPayload) -> Result<Hotel, ApiError> {
    gateway.post(HOTELS_PATH, payload).await
}

/// Update a hotel via `PATCH /hotels/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the backend rejects the payload.
pub async fn update_hotel(gateway: &Gateway, id: i64, payload: &HotelPayload) -> Result<Hotel, ApiError> {
    gateway.patch(&hotel_path(id), payload).await
}

/// Delete a hotel via `DELETE /hotels/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn delete_hotel(gateway: &Gateway, id: i64) -> Result<(), ApiError> {
    gateway.delete(&hotel_path(id)).await
}

/// List clients via `GET /clients`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body is not a client list.
pub async fn list_clients(gateway: &Gateway) -> Result<Vec<Client>, ApiError> {
    gateway.get(CLIENTS_PATH).await
}

/// Fetch one client via `GET /clients/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the client does not exist.
pub async fn get_client(gateway: &Gateway, id: i64) -> Result<Client, ApiError> {
    gateway.get(&client_path(id)).await
}

/// Create a client via `POST /clients`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the backend rejects the payload.
pub async fn create_client(gateway: &Gateway, payload: &ClientPayload) -> Result<Client, ApiError> {
    gateway.post(CLIENTS_PATH, payload).await
}

/// Update a client via `PATCH /clients/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the backend rejects the payload.
pub async fn update_client(gateway: &Gateway, id: i64, payload: &ClientPayload) -> Result<Client, ApiError> {
    gateway.patch(&client_path(id), payload).await
}

/// Delete a client via `DELETE /clients/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn delete_client(gateway: &Gateway, id: i64) -> Result<(), ApiError> {
    gateway.delete(&client_path(id)).await
}
