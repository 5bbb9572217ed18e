// web_app/pages/products.rs - Product management page
//
// The main page that composes the stat cards, search toolbar, product
// table, and the add/edit/view dialogs around one ProductStore instance.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::components::*;
use crate::web_app::model::{
    filter_products, format_currency_whole, group_thousands, InventoryStats, Product,
};
use crate::web_app::store::ProductStore;

/// Main product management page
///
/// Owns the store for this view session:
/// - initial refresh on mount
/// - search box filtering the cached list
/// - statistics derived from the cached list
/// - add/edit/view/delete dialog wiring
#[component]
pub fn ProductsPage() -> impl IntoView {
    let store = ProductStore::new();

    // Load the list once on mount (client side only)
    Effect::new(move |_: Option<()>| {
        store.spawn_refresh();
    });

    // Search state
    let search_query = RwSignal::new(String::new());

    // Dialog state
    let form_dialog_open = RwSignal::new(false);
    let view_dialog_open = RwSignal::new(false);
    let selected_product = RwSignal::new(None::<Product>);

    // Filtered view of the cached list; never mutates the cache
    let filtered_products = Signal::derive(move || {
        filter_products(&store.products.get(), &search_query.get())
    });

    // Statistics over the full cached list (not the filtered view)
    let stats = Signal::derive(move || InventoryStats::from_products(&store.products.get()));
    let total_products = Signal::derive(move || stats.get().total_products.to_string());
    let inventory_value = Signal::derive(move || format_currency_whole(stats.get().total_value));
    let total_stock = Signal::derive(move || group_thousands(stats.get().total_quantity));
    let low_stock_items = Signal::derive(move || stats.get().low_stock_count.to_string());

    // Toolbar callbacks
    let on_add_click = Callback::new(move |()| {
        selected_product.set(None);
        form_dialog_open.set(true);
    });

    let on_refresh = Callback::new(move |()| {
        store.spawn_refresh();
    });

    // Row callbacks
    let on_view = Callback::new(move |product: Product| {
        selected_product.set(Some(product));
        view_dialog_open.set(true);
    });

    let on_edit = Callback::new(move |product: Product| {
        selected_product.set(Some(product));
        form_dialog_open.set(true);
    });

    let on_delete = Callback::new(move |id: i64| {
        spawn_local(async move {
            // Failure already surfaced as a notice; nothing else to do here
            let _ = store.delete(id).await;
        });
    });

    // Dialog close callbacks
    let on_close_form = Callback::new(move |()| {
        form_dialog_open.set(false);
    });

    let on_close_view = Callback::new(move |()| {
        view_dialog_open.set(false);
    });

    let on_dismiss_notice = Callback::new(move |()| {
        store.dismiss_notice();
    });

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900 flex flex-col">
            // Header
            <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center gap-3">
                    <div class="flex h-10 w-10 items-center justify-center rounded-lg bg-blue-600 text-white text-xl">
                        "📦"
                    </div>
                    <div>
                        <h1 class="text-lg font-bold">"Product Manager"</h1>
                        <p class="text-xs text-gray-500">"CRUD Management System"</p>
                    </div>
                </div>
            </header>

            // Main content
            <main class="flex-1 max-w-7xl w-full mx-auto px-4 sm:px-6 lg:px-8 py-8">
                // Hero section
                <div class="mb-8 rounded-2xl bg-gradient-to-r from-blue-50 to-indigo-50 border border-blue-100 p-8">
                    <div class="flex flex-col gap-4 md:flex-row md:items-center md:justify-between">
                        <div>
                            <h2 class="text-3xl font-bold">"Product Management"</h2>
                            <p class="mt-2 text-gray-500">
                                "Complete CRUD operations for managing your product inventory"
                            </p>
                        </div>
                        <Button on_click=on_add_click class="px-6 py-3 text-base">
                            "+ Add Product"
                        </Button>
                    </div>
                </div>

                // Statistics cards
                <div class="mb-8 grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
                    <StatCard title="Total Products" value=total_products icon="📦" />
                    <StatCard title="Inventory Value" value=inventory_value icon="💰" />
                    <StatCard title="Total Stock" value=total_stock icon="📊" />
                    <StatCard title="Low Stock Items" value=low_stock_items icon="⚠️" />
                </div>

                // Products table section
                <section class="rounded-xl border border-gray-200 bg-white p-6 shadow-sm">
                    <div class="mb-6 flex flex-col gap-4 sm:flex-row sm:items-center sm:justify-between">
                        <h3 class="text-xl font-semibold">"Products List"</h3>
                        <div class="flex items-center gap-3">
                            <TextInput
                                value=search_query
                                input_type="search"
                                placeholder="Search products..."
                                class="sm:w-64"
                            />
                            <SecondaryButton on_click=on_refresh>"Refresh"</SecondaryButton>
                        </div>
                    </div>

                    <ProductTable
                        products=filtered_products
                        loading=store.loading.into()
                        on_view=on_view
                        on_edit=on_edit
                        on_delete=on_delete
                    />
                </section>

                // API reference section
                <section class="mt-8 rounded-xl border border-gray-200 bg-white p-6 shadow-sm">
                    <h3 class="text-xl font-semibold mb-4">"API Endpoints Reference"</h3>
                    <div class="overflow-x-auto">
                        <table class="w-full text-sm">
                            <thead>
                                <tr class="border-b border-gray-200 text-left">
                                    <th class="py-3 px-4 font-semibold">"Operation"</th>
                                    <th class="py-3 px-4 font-semibold">"Method"</th>
                                    <th class="py-3 px-4 font-semibold">"Endpoint"</th>
                                </tr>
                            </thead>
                            <tbody class="text-gray-500">
                                <tr class="border-b border-gray-100">
                                    <td class="py-3 px-4">"Get all items"</td>
                                    <td class="py-3 px-4"><Badge variant="green">"GET"</Badge></td>
                                    <td class="py-3 px-4 font-mono text-xs">"/api/items"</td>
                                </tr>
                                <tr class="border-b border-gray-100">
                                    <td class="py-3 px-4">"Get item by ID"</td>
                                    <td class="py-3 px-4"><Badge variant="green">"GET"</Badge></td>
                                    <td class="py-3 px-4 font-mono text-xs">"/api/items/{id}"</td>
                                </tr>
                                <tr class="border-b border-gray-100">
                                    <td class="py-3 px-4">"Add new item"</td>
                                    <td class="py-3 px-4"><Badge variant="blue">"POST"</Badge></td>
                                    <td class="py-3 px-4 font-mono text-xs">"/api/items"</td>
                                </tr>
                                <tr class="border-b border-gray-100">
                                    <td class="py-3 px-4">"Update item"</td>
                                    <td class="py-3 px-4"><Badge variant="yellow">"PUT"</Badge></td>
                                    <td class="py-3 px-4 font-mono text-xs">"/api/items/{id}"</td>
                                </tr>
                                <tr>
                                    <td class="py-3 px-4">"Delete item"</td>
                                    <td class="py-3 px-4"><Badge variant="red">"DELETE"</Badge></td>
                                    <td class="py-3 px-4 font-mono text-xs">"/api/items/{id}"</td>
                                </tr>
                            </tbody>
                        </table>
                    </div>
                </section>
            </main>

            // Footer
            <footer class="bg-white border-t border-gray-200 py-6">
                <div class="max-w-7xl mx-auto px-4 text-center text-gray-500 text-sm">
                    <p>"Product Management System © 2025"</p>
                </div>
            </footer>

            // Add/Edit dialog
            {move || {
                form_dialog_open.get().then(|| {
                    let editing = selected_product.get();
                    let title = if editing.is_some() { "Edit Product" } else { "Add New Product" };
                    view! {
                        <ModalWrapper title=title on_close=on_close_form>
                            <ProductForm product=editing store=store on_close=on_close_form />
                        </ModalWrapper>
                    }
                })
            }}

            // View dialog
            {move || {
                view_dialog_open
                    .get()
                    .then(|| selected_product.get())
                    .flatten()
                    .map(|product| view! {
                        <ModalWrapper title="Product Details" on_close=on_close_view>
                            <ProductView product=product />
                        </ModalWrapper>
                    })
            }}

            // Toast notifications
            <Toast notice=store.notice on_dismiss=on_dismiss_notice />
        </div>
    }
}
