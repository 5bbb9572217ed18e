// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application for type-safe
// communication between frontend and backend. Field names are renamed to
// camelCase on the wire to match the backend collection resource.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Quantities below this count as "Low Stock".
pub const LOW_STOCK_THRESHOLD: i32 = 50;

/// Product as returned by the backend (id is server-assigned).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub product_name: String,
    pub price: Decimal,
    pub quantity: i32,
    pub description: String,
}

/// Product fields without the id; the payload for create and update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub product_name: String,
    pub price: Decimal,
    pub quantity: i32,
    pub description: String,
}

impl Product {
    /// Stock classification for this product's current quantity.
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::for_quantity(self.quantity)
    }

    /// The draft that would reproduce this product on update.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            product_name: self.product_name.clone(),
            price: self.price,
            quantity: self.quantity,
            description: self.description.clone(),
        }
    }
}

/// Stock level classification shown as a colored badge
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    /// Classify a quantity: 0 is out of stock, 1..49 is low, 50+ is in stock.
    pub fn for_quantity(quantity: i32) -> Self {
        if quantity <= 0 {
            StockStatus::OutOfStock
        } else if quantity < LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }

    /// Badge color variant for this status.
    pub fn badge_variant(self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "red",
            StockStatus::LowStock => "yellow",
            StockStatus::InStock => "green",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Aggregate statistics over the cached product list
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryStats {
    pub total_products: usize,
    pub total_value: Decimal,
    pub total_quantity: i64,
    pub low_stock_count: usize,
}

impl InventoryStats {
    /// Compute statistics from a product list.
    ///
    /// Total value is the sum of price times quantity. The low stock count
    /// covers products with some stock but below the threshold; out of
    /// stock products are not counted as low.
    pub fn from_products(products: &[Product]) -> Self {
        let total_value = products
            .iter()
            .map(|p| p.price * Decimal::from(p.quantity))
            .sum();
        let total_quantity = products.iter().map(|p| i64::from(p.quantity)).sum();
        let low_stock_count = products
            .iter()
            .filter(|p| p.quantity > 0 && p.quantity < LOW_STOCK_THRESHOLD)
            .count();

        InventoryStats {
            total_products: products.len(),
            total_value,
            total_quantity,
            low_stock_count,
        }
    }
}

/// Case-insensitive substring match against name or description.
pub fn matches_query(product: &Product, needle: &str) -> bool {
    product.product_name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

/// Filter a product list by a search query.
///
/// A blank query returns the full list. Filtering copies matching entries;
/// the input list is never mutated.
pub fn filter_products(products: &[Product], query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|p| matches_query(p, &needle))
        .cloned()
        .collect()
}

/// Raw form field text, as typed into the add/edit dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DraftForm {
    pub product_name: String,
    pub price: String,
    pub quantity: String,
    pub description: String,
}

impl DraftForm {
    /// Pre-fill the form from an existing product (edit mode).
    pub fn from_product(product: &Product) -> Self {
        DraftForm {
            product_name: product.product_name.clone(),
            price: product.price.to_string(),
            quantity: product.quantity.to_string(),
            description: product.description.clone(),
        }
    }

    /// Parse and validate the form into a draft.
    ///
    /// All fields are checked in one pass so the dialog can show every
    /// violation at once.
    pub fn parse(&self) -> Result<ProductDraft, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let product_name = self.product_name.trim().to_string();
        if product_name.chars().count() < 2 {
            errors.product_name = Some("Name must be at least 2 characters".into());
        }

        let price = match self.price.trim().parse::<Decimal>() {
            Ok(value) if value > Decimal::ZERO => value,
            Ok(_) => {
                errors.price = Some("Price must be positive".into());
                Decimal::ZERO
            }
            Err(_) => {
                errors.price = Some("Price must be a number".into());
                Decimal::ZERO
            }
        };

        let quantity = match self.quantity.trim().parse::<i32>() {
            Ok(value) if value >= 0 => value,
            Ok(_) => {
                errors.quantity = Some("Quantity must be 0 or more".into());
                0
            }
            Err(_) => {
                errors.quantity = Some("Quantity must be a whole number".into());
                0
            }
        };

        let description = self.description.trim().to_string();
        if description.chars().count() < 10 {
            errors.description = Some("Description must be at least 10 characters".into());
        }

        if errors.is_empty() {
            Ok(ProductDraft {
                product_name,
                price,
                quantity,
                description,
            })
        } else {
            Err(errors)
        }
    }
}

/// Per-field validation messages for the product form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationErrors {
    pub product_name: Option<String>,
    pub price: Option<String>,
    pub quantity: Option<String>,
    pub description: Option<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.product_name.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
            && self.description.is_none()
    }
}

/// User-facing notification emitted by the product store
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Format a price as dollars and cents, e.g. `$99.99`.
pub fn format_price(price: Decimal) -> String {
    format!("${:.2}", price)
}

/// Format a currency amount rounded to whole dollars with thousands
/// separators, e.g. `$12,345`. Used by the stat cards.
pub fn format_currency_whole(amount: Decimal) -> String {
    let whole = amount.round().to_i64().unwrap_or(0);
    format!("${}", group_thousands(whole))
}

/// Render an integer with thousands separators, e.g. `1,234,567`.
pub fn group_thousands(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
