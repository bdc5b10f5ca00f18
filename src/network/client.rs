//! HTTP client wrapper - fetches TheMealDB endpoints and maps failures

use crate::constants::{CATEGORIES_PATH, FILTER_PATH, MEALDB_BASE_URL};
use crate::messages::{FetchKind, FetchResponse};
use crate::models::{CategoryListPayload, MealListPayload};

/// Thin wrapper around reqwest for the two TheMealDB endpoints.
///
/// The base URL is injectable so tests can point it at a mock server.
#[derive(Clone)]
pub struct MealDbClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for MealDbClient {
    fn default() -> Self {
        Self::new(MEALDB_BASE_URL)
    }
}

impl MealDbClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        MealDbClient {
            client: create_client(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the full category list. Any failure collapses into
    /// `FetchResponse::Failed` with a human-readable reason.
    pub async fn fetch_categories(&self, id: u64) -> FetchResponse {
        let url = format!("{}{}", self.base_url, CATEGORIES_PATH);
        match self.get_json::<CategoryListPayload>(&url).await {
            Ok(payload) => FetchResponse::Categories {
                id,
                categories: payload.categories,
            },
            Err(reason) => FetchResponse::Failed {
                id,
                kind: FetchKind::Categories,
                reason,
            },
        }
    }

    /// Fetch the recipe summaries of one category. The provider's
    /// `meals: null` no-matches case comes back as an empty list.
    pub async fn fetch_recipes(&self, id: u64, category: String) -> FetchResponse {
        let url = format!("{}{}", self.base_url, FILTER_PATH);
        let request = self.client.get(&url).query(&[("c", category.as_str())]);

        match send_json::<MealListPayload>(request).await {
            Ok(payload) => FetchResponse::Recipes {
                id,
                category,
                meals: payload.into_meals(),
            },
            Err(reason) => FetchResponse::Failed {
                id,
                kind: FetchKind::Recipes,
                reason,
            },
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, String> {
        send_json(self.client.get(url)).await
    }
}

async fn send_json<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, String> {
    let response = request.send().await.map_err(describe_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("HTTP {}", status.as_u16()));
    }

    response.json::<T>().await.map_err(describe_error)
}

/// Turn a reqwest error into the short reason string that ends up in the log
fn describe_error(e: reqwest::Error) -> String {
    if e.is_timeout() {
        "Request timed out (30s)".to_string()
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else if e.is_decode() {
        format!("Malformed payload: {}", e)
    } else {
        format!("Request failed: {}", e)
    }
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    use std::time::Duration;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
