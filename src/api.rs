//! Dashboard API Bindings
//!
//! HTTP wrappers around the backend endpoints, one function per request.

use gloo_net::http::Request;

use crate::error::ApiError;
use crate::models::{Pharmacy, Section};

/// Pharmacy list endpoint
pub const PHARMACIES_URL: &str = "/pharmacy/api/pharmacies/";

/// Path of the server-rendered fragment for one pharmacy section
pub fn fragment_path(pharmacy_id: u32, section: Section) -> String {
    format!("/pharmacy/{}/{}", pharmacy_id, section.slug())
}

/// Fetch the pharmacy list. An empty list is a valid result, not an error.
pub async fn list_pharmacies() -> Result<Vec<Pharmacy>, ApiError> {
    let response = Request::get(PHARMACIES_URL)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Server(response.status()));
    }
    response
        .json::<Vec<Pharmacy>>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Fetch a server-rendered HTML fragment for the content area.
pub async fn fetch_fragment(pharmacy_id: u32, section: Section) -> Result<String, ApiError> {
    let response = Request::get(&fragment_path(pharmacy_id, section))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Server(response.status()));
    }
    response
        .text()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_path_contains_id_and_slug() {
        assert_eq!(fragment_path(7, Section::Inventory), "/pharmacy/7/inventory");
    }

    #[test]
    fn fragment_path_per_section() {
        assert_eq!(fragment_path(3, Section::Sales), "/pharmacy/3/sales");
        assert_eq!(fragment_path(3, Section::Manager), "/pharmacy/3/manager");
    }
}
