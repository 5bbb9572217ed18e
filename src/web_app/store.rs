// web_app/store.rs - Product state manager
//
// Owns the client-side cached view of the backend collection: the product
// list, the loading flag, and the notification slot. Mutations go through
// the server functions and patch the cache only after the backend
// confirms; there are no optimistic updates.
//
// Overlapping requests are possible (a refresh racing a delete) and are
// resolved as "last response wins". Acceptable for a single-operator
// admin tool; no per-id guard is attempted.

use crate::web_app::model::Product;

/// Append a freshly created product to the cached list.
pub fn apply_created(products: &mut Vec<Product>, created: Product) {
    products.push(created);
}

/// Replace the entry whose id matches the updated product.
///
/// Entries with other ids are untouched; an unknown id leaves the list
/// unchanged.
pub fn apply_updated(products: &mut [Product], updated: Product) {
    if let Some(slot) = products.iter_mut().find(|p| p.id == updated.id) {
        *slot = updated;
    }
}

/// Drop the entry with the given id from the cached list.
pub fn apply_removed(products: &mut Vec<Product>, id: i64) {
    products.retain(|p| p.id != id);
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use reactive::ProductStore;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
mod reactive {
    use leptos::prelude::*;
    use leptos::task::spawn_local;

    use super::{apply_created, apply_removed, apply_updated};
    use crate::web_app::model::{Notice, Product, ProductDraft};
    use crate::web_app::server_fns::{
        create_product, delete_product, list_products, update_product,
    };

    /// Reactive product state, constructed once per view session.
    ///
    /// All fields are signals, so the handle is Copy and can be captured by
    /// any number of closures.
    #[derive(Clone, Copy)]
    pub struct ProductStore {
        pub products: RwSignal<Vec<Product>>,
        pub loading: RwSignal<bool>,
        pub notice: RwSignal<Option<Notice>>,
    }

    impl ProductStore {
        /// Fresh store with an empty list. Loading starts true so the table
        /// shows a spinner until the first refresh lands.
        pub fn new() -> Self {
            ProductStore {
                products: RwSignal::new(Vec::new()),
                loading: RwSignal::new(true),
                notice: RwSignal::new(None),
            }
        }

        /// Reload the whole list from the backend.
        ///
        /// On success the cache is replaced wholesale, in server order. A
        /// failure surfaces as an error notice and is not propagated; the
        /// previous cache stays in place.
        pub async fn refresh(self) {
            self.loading.set(true);
            match list_products().await {
                Ok(list) => self.products.set(list),
                Err(e) => {
                    tracing::error!("refresh failed: {}", e);
                    self.notice.set(Some(Notice::error("Failed to fetch products")));
                }
            }
            self.loading.set(false);
        }

        /// Fire-and-forget refresh for mount hooks and the refresh button.
        pub fn spawn_refresh(self) {
            spawn_local(async move { self.refresh().await });
        }

        /// Create a product on the backend, then append it to the cache.
        ///
        /// Re-raises on failure so the form dialog can stay open.
        pub async fn create(self, draft: ProductDraft) -> Result<Product, ServerFnError> {
            match create_product(draft).await {
                Ok(created) => {
                    self.products
                        .update(|list| apply_created(list, created.clone()));
                    self.notice.set(Some(Notice::success("Product added!")));
                    Ok(created)
                }
                Err(e) => {
                    self.notice.set(Some(Notice::error("Failed to add product")));
                    Err(e)
                }
            }
        }

        /// Update a product on the backend, then patch the matching entry.
        ///
        /// Re-raises on failure so the form dialog can stay open.
        pub async fn update(self, id: i64, draft: ProductDraft) -> Result<Product, ServerFnError> {
            match update_product(id, draft).await {
                Ok(updated) => {
                    self.products
                        .update(|list| apply_updated(list, updated.clone()));
                    self.notice.set(Some(Notice::success("Product updated!")));
                    Ok(updated)
                }
                Err(e) => {
                    self.notice.set(Some(Notice::error("Failed to update product")));
                    Err(e)
                }
            }
        }

        /// Delete a product on the backend, then drop it from the cache.
        pub async fn delete(self, id: i64) -> Result<(), ServerFnError> {
            match delete_product(id).await {
                Ok(()) => {
                    self.products.update(|list| apply_removed(list, id));
                    self.notice.set(Some(Notice::success("Product deleted!")));
                    Ok(())
                }
                Err(e) => {
                    self.notice.set(Some(Notice::error("Failed to delete product")));
                    Err(e)
                }
            }
        }

        /// Clear the current notification.
        pub fn dismiss_notice(self) {
            self.notice.set(None);
        }
    }

    impl Default for ProductStore {
        fn default() -> Self {
            Self::new()
        }
    }
}
