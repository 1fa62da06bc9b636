//! Store operations for the product resource.
//!
//! Thin wrappers over the REST store: no retries, no auth, any non-2xx
//! status is a uniform failure. Mutation responses are not consumed;
//! consistency comes from re-fetching the list afterwards.

use crate::shared::api_utils::api_url;
use contracts::domain::product::{Product, ProductId, ProductInput};
use gloo_net::http::Request;

pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let response = Request::get(&api_url("/products"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_product(input: &ProductInput) -> Result<(), String> {
    let response = Request::post(&api_url("/products"))
        .json(input)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}

pub async fn update_product(id: &ProductId, input: &ProductInput) -> Result<(), String> {
    let url = api_url(&format!("/products/{}", id));

    let response = Request::put(&url)
        .json(input)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}

pub async fn delete_product(id: &ProductId) -> Result<(), String> {
    let url = api_url(&format!("/products/{}", id));

    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}
