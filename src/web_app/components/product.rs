// web_app/components/product.rs - Product display and editing components
//
// Components for the product table and the modal dialog bodies:
// - ProductTable: list rows with view/edit/delete actions
// - ProductForm: add/edit form with inline validation
// - ProductView: read-only detail card

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::common::{Badge, DangerButton, Loading, ModalWrapper, SecondaryButton, TextArea, TextInput};
use crate::web_app::model::{format_price, DraftForm, Product, ValidationErrors};
use crate::web_app::store::ProductStore;

/// Stock badge for a quantity, colored by classification.
#[component]
pub fn StockBadge(quantity: i32) -> impl IntoView {
    let status = crate::web_app::model::StockStatus::for_quantity(quantity);
    view! {
        <Badge variant=status.badge_variant()>{status.label()}</Badge>
    }
}

/// Product table with per-row actions
///
/// Renders the (already filtered) product list. Deleting asks for
/// confirmation before invoking the callback.
#[component]
pub fn ProductTable(
    /// Products to display, already search-filtered
    products: Signal<Vec<Product>>,
    /// Whether the initial load is still in flight
    loading: Signal<bool>,
    /// Open the read-only detail dialog
    on_view: Callback<Product>,
    /// Open the edit dialog
    on_edit: Callback<Product>,
    /// Delete after confirmation
    on_delete: Callback<i64>,
) -> impl IntoView {
    // Id awaiting delete confirmation
    let delete_candidate = RwSignal::new(None::<i64>);

    let confirm_delete = Callback::new(move |()| {
        if let Some(id) = delete_candidate.get_untracked() {
            on_delete.run(id);
            delete_candidate.set(None);
        }
    });

    let cancel_delete = Callback::new(move |()| {
        delete_candidate.set(None);
    });

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <Loading message="Loading products..." /> }
        >
            <Show
                when=move || !products.get().is_empty()
                fallback=|| view! {
                    <div class="flex flex-col items-center justify-center py-16 text-center">
                        <div class="text-gray-300 text-5xl mb-4">"📦"</div>
                        <h3 class="text-lg font-semibold text-gray-900">"No products found"</h3>
                        <p class="text-sm text-gray-500">"Add your first product to get started."</p>
                    </div>
                }
            >
                <div class="rounded-lg border border-gray-200 overflow-hidden">
                    <table class="w-full text-sm">
                        <thead>
                            <tr class="bg-gray-50 text-left text-gray-600">
                                <th class="py-3 px-4 font-semibold">"ID"</th>
                                <th class="py-3 px-4 font-semibold">"Product Name"</th>
                                <th class="py-3 px-4 font-semibold">"Price"</th>
                                <th class="py-3 px-4 font-semibold">"Quantity"</th>
                                <th class="py-3 px-4 font-semibold">"Status"</th>
                                <th class="py-3 px-4 font-semibold text-right">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || products.get()
                                key=|p| p.id
                                children=move |product| {
                                    let view_target = product.clone();
                                    let edit_target = product.clone();
                                    let product_id = product.id;
                                    view! {
                                        <tr class="border-t border-gray-100 hover:bg-gray-50 transition-colors">
                                            <td class="py-3 px-4 font-mono text-gray-400">
                                                "#" {product.id}
                                            </td>
                                            <td class="py-3 px-4 font-medium text-gray-900">
                                                {product.product_name.clone()}
                                            </td>
                                            <td class="py-3 px-4 font-semibold text-blue-600">
                                                {format_price(product.price)}
                                            </td>
                                            <td class="py-3 px-4">{product.quantity}</td>
                                            <td class="py-3 px-4">
                                                <StockBadge quantity=product.quantity />
                                            </td>
                                            <td class="py-3 px-4">
                                                <div class="flex items-center justify-end gap-1">
                                                    <button
                                                        class="px-2 py-1 text-xs font-medium text-blue-600 hover:bg-blue-50 rounded transition-colors"
                                                        on:click=move |_| on_view.run(view_target.clone())
                                                    >
                                                        "View"
                                                    </button>
                                                    <button
                                                        class="px-2 py-1 text-xs font-medium text-amber-600 hover:bg-amber-50 rounded transition-colors"
                                                        on:click=move |_| on_edit.run(edit_target.clone())
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="px-2 py-1 text-xs font-medium text-red-600 hover:bg-red-50 rounded transition-colors"
                                                        on:click=move |_| delete_candidate.set(Some(product_id))
                                                    >
                                                        "Delete"
                                                    </button>
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </Show>

        // Delete confirmation dialog
        {move || {
            delete_candidate.get().map(|_| view! {
                <ModalWrapper title="Delete Product" on_close=cancel_delete>
                    <p class="text-gray-600 mb-6">
                        "Are you sure you want to delete this product? This action cannot be undone."
                    </p>
                    <div class="flex justify-end gap-3">
                        <SecondaryButton on_click=cancel_delete>"Cancel"</SecondaryButton>
                        <DangerButton on_click=confirm_delete>"Delete"</DangerButton>
                    </div>
                </ModalWrapper>
            })
        }}
    }
}

fn initial_form(product: Option<&Product>) -> DraftForm {
    match product {
        Some(p) => DraftForm::from_product(p),
        None => DraftForm {
            product_name: String::new(),
            price: "0".to_string(),
            quantity: "0".to_string(),
            description: String::new(),
        },
    }
}

/// Add/edit form body
///
/// Shared by both modes; `product` present means editing. Validation runs
/// on submit and per-field messages render inline. The dialog stays open
/// when the mutation fails so nothing the user typed is lost.
#[component]
pub fn ProductForm(
    /// Product being edited, or None when adding
    product: Option<Product>,
    /// Store handling the create/update call
    store: ProductStore,
    /// Callback to close the dialog after a confirmed save
    on_close: Callback<()>,
) -> impl IntoView {
    let editing_id = product.as_ref().map(|p| p.id);
    let form = initial_form(product.as_ref());

    let product_name = RwSignal::new(form.product_name);
    let price = RwSignal::new(form.price);
    let quantity = RwSignal::new(form.quantity);
    let description = RwSignal::new(form.description);
    let errors = RwSignal::new(ValidationErrors::default());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft_form = DraftForm {
            product_name: product_name.get_untracked(),
            price: price.get_untracked(),
            quantity: quantity.get_untracked(),
            description: description.get_untracked(),
        };
        match draft_form.parse() {
            Err(found) => errors.set(found),
            Ok(draft) => {
                errors.set(ValidationErrors::default());
                submitting.set(true);
                spawn_local(async move {
                    let result = match editing_id {
                        Some(id) => store.update(id, draft).await.map(|_| ()),
                        None => store.create(draft).await.map(|_| ()),
                    };
                    submitting.set(false);
                    // Keep the dialog open on failure; the store already
                    // surfaced the error notice.
                    if result.is_ok() {
                        on_close.run(());
                    }
                });
            }
        }
    };

    let field_error = |message: Option<String>| {
        message.map(|m| view! { <p class="mt-1 text-sm text-red-600">{m}</p> })
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <p class="text-sm text-gray-500">
                {if editing_id.is_some() {
                    "Update the product details."
                } else {
                    "Fill in the details to add a new product."
                }}
            </p>

            // Product Name
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">"Product Name"</label>
                <TextInput value=product_name placeholder="Enter product name" />
                {move || field_error(errors.get().product_name)}
            </div>

            // Price and Quantity
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">"Price ($)"</label>
                    <TextInput value=price input_type="number" placeholder="0.00" />
                    {move || field_error(errors.get().price)}
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">"Quantity"</label>
                    <TextInput value=quantity input_type="number" placeholder="0" />
                    {move || field_error(errors.get().quantity)}
                </div>
            </div>

            // Description
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">"Description"</label>
                <TextArea value=description placeholder="Enter product description" />
                {move || field_error(errors.get().description)}
            </div>

            // Footer
            <div class="flex justify-end gap-3 pt-4">
                <SecondaryButton on_click=on_close>"Cancel"</SecondaryButton>
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 \
                           transition-colors disabled:bg-gray-400 disabled:cursor-not-allowed \
                           font-medium shadow-sm active:transform active:scale-95"
                >
                    {move || {
                        if submitting.get() {
                            "Saving..."
                        } else if editing_id.is_some() {
                            "Update"
                        } else {
                            "Add Product"
                        }
                    }}
                </button>
            </div>
        </form>
    }
}

/// Read-only product detail card, shown in the view dialog.
#[component]
pub fn ProductView(product: Product) -> impl IntoView {
    view! {
        <div class="space-y-4">
            // Header with ID and stock status
            <div class="flex items-center justify-between">
                <span class="font-mono text-sm text-gray-400">"ID: #" {product.id}</span>
                <StockBadge quantity=product.quantity />
            </div>

            // Name
            <div>
                <p class="text-xs text-gray-500 uppercase tracking-wide">"Product Name"</p>
                <p class="text-lg font-semibold text-gray-900">{product.product_name.clone()}</p>
            </div>

            // Price and Quantity
            <div class="grid grid-cols-2 gap-4">
                <div class="bg-green-50 rounded-lg p-4 border border-green-100">
                    <p class="text-xs text-gray-500 uppercase tracking-wide">"Price"</p>
                    <p class="text-xl font-bold text-green-700">{format_price(product.price)}</p>
                </div>
                <div class="bg-blue-50 rounded-lg p-4 border border-blue-100">
                    <p class="text-xs text-gray-500 uppercase tracking-wide">"Quantity"</p>
                    <p class="text-xl font-bold text-blue-700">{product.quantity} " units"</p>
                </div>
            </div>

            // Description
            <div>
                <p class="text-xs text-gray-500 uppercase tracking-wide mb-1">"Description"</p>
                <p class="text-sm text-gray-600 leading-relaxed">{product.description.clone()}</p>
            </div>
        </div>
    }
}
