//! Read-only analytics payload from the store.

use crate::shared::api_utils::api_url;
use contracts::domain::analytics::AnalyticsSummary;
use gloo_net::http::Request;

pub async fn fetch_analytics() -> Result<AnalyticsSummary, String> {
    let response = Request::get(&api_url("/analytics"))
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
