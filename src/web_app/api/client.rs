// web_app/api/client.rs - HTTP client for the remote inventory backend
//
// The backend is an external REST service exposing the product collection
// resource. This module wraps the four calls the application makes against
// it. Each call is a single request/response cycle: no retries, no
// timeouts, no partial-failure handling.

use std::env;
use std::sync::Mutex;
use std::sync::OnceLock;

use reqwest::StatusCode;
use thiserror::Error;

use crate::web_app::model::{Product, ProductDraft};

/// Fallback collection URL when INVENTORY_API_URL is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:9090/api/items";

static CLIENT: OnceLock<ApiClient> = OnceLock::new();
static TEST_CLIENT_OVERRIDE: Mutex<Option<ApiClient>> = Mutex::new(None);

/// Error raised when a backend call does not fully succeed.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("{operation} request returned status {status}")]
    Status {
        operation: &'static str,
        status: StatusCode,
    },
    #[error("{operation} request failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl RequestError {
    fn transport(operation: &'static str, source: reqwest::Error) -> Self {
        RequestError::Transport { operation, source }
    }
}

/// Client for the backend product collection resource.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the given collection URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        ApiClient {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// GET the full product list, in server order.
    pub async fn list_all(&self) -> Result<Vec<Product>, RequestError> {
        let resp = self
            .http
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| RequestError::transport("list", e))?;
        if !resp.status().is_success() {
            return Err(RequestError::Status {
                operation: "list",
                status: resp.status(),
            });
        }
        resp.json().await.map_err(|e| RequestError::transport("list", e))
    }

    /// POST a draft; the backend assigns the id and returns the entity.
    pub async fn create(&self, draft: &ProductDraft) -> Result<Product, RequestError> {
        let resp = self
            .http
            .post(&self.base_url)
            .json(draft)
            .send()
            .await
            .map_err(|e| RequestError::transport("create", e))?;
        if !resp.status().is_success() {
            return Err(RequestError::Status {
                operation: "create",
                status: resp.status(),
            });
        }
        resp.json()
            .await
            .map_err(|e| RequestError::transport("create", e))
    }

    /// PUT the full draft for an existing id; returns the updated entity.
    pub async fn update(&self, id: i64, draft: &ProductDraft) -> Result<Product, RequestError> {
        let resp = self
            .http
            .put(self.item_url(id))
            .json(draft)
            .send()
            .await
            .map_err(|e| RequestError::transport("update", e))?;
        if !resp.status().is_success() {
            return Err(RequestError::Status {
                operation: "update",
                status: resp.status(),
            });
        }
        resp.json()
            .await
            .map_err(|e| RequestError::transport("update", e))
    }

    /// DELETE an existing id. The response body is ignored.
    pub async fn remove(&self, id: i64) -> Result<(), RequestError> {
        let resp = self
            .http
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(|e| RequestError::transport("delete", e))?;
        if !resp.status().is_success() {
            return Err(RequestError::Status {
                operation: "delete",
                status: resp.status(),
            });
        }
        Ok(())
    }
}

/// Initialize the global backend client
pub fn init_client(client: ApiClient) {
    tracing::info!("Initializing global backend client for {}", client.base_url);
    if CLIENT.set(client).is_err() {
        tracing::warn!("Backend client already initialized");
    }
}

/// Set a client override for testing
pub fn set_test_client(client: ApiClient) {
    let mut guard = TEST_CLIENT_OVERRIDE.lock().unwrap();
    *guard = Some(client);
}

/// Get the global backend client
pub fn get_client() -> Option<ApiClient> {
    // Check for test override first
    {
        let guard = TEST_CLIENT_OVERRIDE.lock().unwrap();
        if let Some(ref client) = *guard {
            return Some(client.clone());
        }
    }

    let client = CLIENT.get().cloned();
    if client.is_none() {
        tracing::warn!("Global backend client is empty!");
    }
    client
}

/// Build a client from the environment.
///
/// Reads INVENTORY_API_URL, falling back to the local development backend.
pub fn create_client() -> ApiClient {
    let base_url = env::var("INVENTORY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    ApiClient::new(base_url)
}
