// web_app/server_fns.rs - Leptos server function declarations
//
// These are thin wrappers around the backend client, using the #[server]
// macro to enable RPC-style calls from the client (WASM) to the server
// (Actix).
//
// Philosophy:
// - Server functions are bridges, not business logic
// - The four backend calls live in api/client.rs
// - Client resolution happens here (Leptos context, then process global)
// - Error handling converts RequestError to ServerFnError

use leptos::prelude::*;

use crate::web_app::model::{Product, ProductDraft};

#[cfg(feature = "ssr")]
async fn backend() -> Result<crate::web_app::api::client::ApiClient, ServerFnError> {
    use actix_web::{web::Data, HttpRequest};
    use leptos_actix::extract;

    use crate::web_app::api::client;
    use crate::web_app::api::client::ApiClient;

    // First try the Leptos context (for testing or if manually set)
    if let Some(client) = use_context::<ApiClient>() {
        return Ok(client);
    }

    // Try the process-global client set at startup (most reliable fallback)
    if let Some(client) = client::get_client() {
        return Ok(client);
    }

    // Last resort: pull it out of the Actix request state
    match extract().await {
        Ok(req) => {
            let req: HttpRequest = req;
            if let Some(client_data) = req.app_data::<Data<ApiClient>>() {
                return Ok(client_data.as_ref().clone());
            }
        }
        Err(e) => {
            tracing::error!("Failed to extract HttpRequest: {}", e);
        }
    }

    tracing::error!("Backend client could not be resolved from any source");
    Err(ServerFnError::new("Backend client not available"))
}

/// Fetch the full product list from the backend.
#[server(ListProducts, "/api")]
pub async fn list_products() -> Result<Vec<Product>, ServerFnError> {
    let client = backend().await?;

    let result = client.list_all().await;
    match &result {
        Ok(products) => tracing::info!("Listed {} products", products.len()),
        Err(e) => tracing::error!("Product list failed: {}", e),
    }

    result.map_err(|e| ServerFnError::new(format!("Failed to fetch products: {}", e)))
}

/// Create a product; returns the entity with its server-assigned id.
#[server(CreateProduct, "/api")]
pub async fn create_product(draft: ProductDraft) -> Result<Product, ServerFnError> {
    let client = backend().await?;

    tracing::info!("Create request: name='{}'", draft.product_name);
    let result = client.create(&draft).await;
    match &result {
        Ok(created) => tracing::info!("Created product id={}", created.id),
        Err(e) => tracing::error!("Product create failed: {}", e),
    }

    result.map_err(|e| ServerFnError::new(format!("Failed to add product: {}", e)))
}

/// Replace an existing product's fields; returns the updated entity.
#[server(UpdateProduct, "/api")]
pub async fn update_product(id: i64, draft: ProductDraft) -> Result<Product, ServerFnError> {
    let client = backend().await?;

    tracing::info!("Update request: id={} name='{}'", id, draft.product_name);
    let result = client.update(id, &draft).await;
    match &result {
        Ok(updated) => tracing::info!("Updated product id={}", updated.id),
        Err(e) => tracing::error!("Product update failed: {}", e),
    }

    result.map_err(|e| ServerFnError::new(format!("Failed to update product: {}", e)))
}

/// Delete a product by id.
#[server(DeleteProduct, "/api")]
pub async fn delete_product(id: i64) -> Result<(), ServerFnError> {
    let client = backend().await?;

    tracing::info!("Delete request: id={}", id);
    let result = client.remove(id).await;
    match &result {
        Ok(()) => tracing::info!("Deleted product id={}", id),
        Err(e) => tracing::error!("Product delete failed: {}", e),
    }

    result.map_err(|e| ServerFnError::new(format!("Failed to delete product: {}", e)))
}
