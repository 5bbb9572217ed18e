// tests/model_tests.rs - Unit tests for the shared data model
//
// Covers the wire format, draft validation, stock classification,
// statistics, search filtering, and display formatting.

use product_manager::web_app::model::*;
use rust_decimal::Decimal;

fn product(id: i64, name: &str, price: Decimal, quantity: i32, description: &str) -> Product {
    Product {
        id,
        product_name: name.to_string(),
        price,
        quantity,
        description: description.to_string(),
    }
}

// --- Wire format ---

#[test]
fn test_product_serializes_with_camel_case_names() {
    let p = product(1, "Desk Lamp", Decimal::new(1999, 2), 3, "Adjustable LED desk lamp");
    let json = serde_json::to_string(&p).unwrap();

    assert!(json.contains("\"productName\":\"Desk Lamp\""));
    assert!(json.contains("\"quantity\":3"));
    assert!(!json.contains("product_name"));
}

#[test]
fn test_product_round_trips_through_json() {
    let p = product(9, "Monitor", Decimal::new(24999, 2), 120, "27 inch 4K IPS panel");
    let json = serde_json::to_string(&p).unwrap();
    let back: Product = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);
}

#[test]
fn test_draft_omits_id() {
    let draft = ProductDraft {
        product_name: "Monitor".to_string(),
        price: Decimal::new(24999, 2),
        quantity: 120,
        description: "27 inch 4K IPS panel".to_string(),
    };
    let json = serde_json::to_value(&draft).unwrap();

    assert!(json.get("id").is_none());
    assert_eq!(json["productName"], "Monitor");
    assert!(json["price"].is_number());
}

#[test]
fn test_backend_response_with_integer_price_parses() {
    // Backends serialize whole-dollar prices without a decimal point
    let body = r#"{"id":1,"productName":"Cable","price":12,"quantity":7,"description":"USB-C to USB-C, 2 meters"}"#;
    let p: Product = serde_json::from_str(body).unwrap();
    assert_eq!(p.price, Decimal::from(12));
}

#[test]
fn test_to_draft_strips_the_id() {
    let p = product(4, "Cable", Decimal::new(1250, 2), 7, "USB-C to USB-C, 2 meters");
    let draft = p.to_draft();
    assert_eq!(draft.product_name, p.product_name);
    assert_eq!(draft.price, p.price);
    assert_eq!(draft.quantity, p.quantity);
    assert_eq!(draft.description, p.description);
}

// --- Validation ---

#[test]
fn test_valid_form_parses_into_a_draft() {
    let form = DraftForm {
        product_name: "Desk Lamp".to_string(),
        price: "19.99".to_string(),
        quantity: "3".to_string(),
        description: "Adjustable LED desk lamp".to_string(),
    };

    let draft = form.parse().expect("form should be valid");
    assert_eq!(draft.product_name, "Desk Lamp");
    assert_eq!(draft.price, Decimal::new(1999, 2));
    assert_eq!(draft.quantity, 3);
    assert_eq!(draft.description, "Adjustable LED desk lamp");
}

#[test]
fn test_short_name_is_rejected() {
    let form = DraftForm {
        product_name: "A".to_string(),
        price: "10".to_string(),
        quantity: "1".to_string(),
        description: "long enough description".to_string(),
    };

    let errors = form.parse().unwrap_err();
    assert_eq!(
        errors.product_name.as_deref(),
        Some("Name must be at least 2 characters")
    );
    assert!(errors.price.is_none());
}

#[test]
fn test_zero_and_negative_prices_are_rejected() {
    for bad_price in ["0", "-19.99"] {
        let form = DraftForm {
            product_name: "Desk Lamp".to_string(),
            price: bad_price.to_string(),
            quantity: "3".to_string(),
            description: "Adjustable LED desk lamp".to_string(),
        };
        let errors = form.parse().unwrap_err();
        assert_eq!(errors.price.as_deref(), Some("Price must be positive"));
    }
}

#[test]
fn test_unparseable_price_is_rejected() {
    let form = DraftForm {
        product_name: "Desk Lamp".to_string(),
        price: "abc".to_string(),
        quantity: "3".to_string(),
        description: "Adjustable LED desk lamp".to_string(),
    };
    let errors = form.parse().unwrap_err();
    assert_eq!(errors.price.as_deref(), Some("Price must be a number"));
}

#[test]
fn test_negative_quantity_is_rejected_but_zero_allowed() {
    let negative = DraftForm {
        product_name: "Desk Lamp".to_string(),
        price: "19.99".to_string(),
        quantity: "-1".to_string(),
        description: "Adjustable LED desk lamp".to_string(),
    };
    let errors = negative.parse().unwrap_err();
    assert_eq!(errors.quantity.as_deref(), Some("Quantity must be 0 or more"));

    let zero = DraftForm {
        quantity: "0".to_string(),
        ..negative
    };
    let draft = zero.parse().expect("zero quantity is valid");
    assert_eq!(draft.quantity, 0);
}

#[test]
fn test_short_description_is_rejected() {
    let form = DraftForm {
        product_name: "Desk Lamp".to_string(),
        price: "19.99".to_string(),
        quantity: "3".to_string(),
        description: "too short".to_string(),
    };
    let errors = form.parse().unwrap_err();
    assert_eq!(
        errors.description.as_deref(),
        Some("Description must be at least 10 characters")
    );
}

#[test]
fn test_all_violations_reported_together() {
    let form = DraftForm {
        product_name: String::new(),
        price: String::new(),
        quantity: String::new(),
        description: String::new(),
    };
    let errors = form.parse().unwrap_err();
    assert!(errors.product_name.is_some());
    assert!(errors.price.is_some());
    assert!(errors.quantity.is_some());
    assert!(errors.description.is_some());
    assert!(!errors.is_empty());
}

#[test]
fn test_fields_are_trimmed_before_validation() {
    let form = DraftForm {
        product_name: "  Desk Lamp  ".to_string(),
        price: " 19.99 ".to_string(),
        quantity: " 3 ".to_string(),
        description: "  Adjustable LED desk lamp  ".to_string(),
    };
    let draft = form.parse().expect("trimmed input should validate");
    assert_eq!(draft.product_name, "Desk Lamp");
    assert_eq!(draft.description, "Adjustable LED desk lamp");
}

// --- Stock classification ---

#[test]
fn test_stock_badge_bands() {
    assert_eq!(StockStatus::for_quantity(0), StockStatus::OutOfStock);
    assert_eq!(StockStatus::for_quantity(1), StockStatus::LowStock);
    assert_eq!(StockStatus::for_quantity(49), StockStatus::LowStock);
    assert_eq!(StockStatus::for_quantity(50), StockStatus::InStock);
    assert_eq!(StockStatus::for_quantity(10_000), StockStatus::InStock);
}

#[test]
fn test_out_of_stock_product_scenario() {
    let p = product(1, "Notebook", Decimal::new(499, 2), 0, "ruled pages, A5 format");
    assert_eq!(p.stock_status(), StockStatus::OutOfStock);
    assert_eq!(p.stock_status().label(), "Out of Stock");
    assert_eq!(p.stock_status().badge_variant(), "red");
}

// --- Statistics ---

#[test]
fn test_stats_over_empty_list() {
    let stats = InventoryStats::from_products(&[]);
    assert_eq!(stats.total_products, 0);
    assert_eq!(stats.total_value, Decimal::ZERO);
    assert_eq!(stats.total_quantity, 0);
    assert_eq!(stats.low_stock_count, 0);
}

#[test]
fn test_stats_totals_and_low_stock_band() {
    let products = vec![
        product(1, "A", Decimal::new(1000, 2), 10, "first fixture product"),
        product(2, "B", Decimal::new(250, 2), 100, "second fixture product"),
        product(3, "C", Decimal::new(500, 2), 0, "third fixture product"),
        product(4, "D", Decimal::new(100, 2), 49, "fourth fixture product"),
    ];
    let stats = InventoryStats::from_products(&products);

    assert_eq!(stats.total_products, 4);
    // 100.00 + 250.00 + 0 + 49.00
    assert_eq!(stats.total_value, Decimal::new(39900, 2));
    assert_eq!(stats.total_quantity, 159);
    // products 1 and 4; out-of-stock product 3 is excluded
    assert_eq!(stats.low_stock_count, 2);
}

// --- Search filtering ---

#[test]
fn test_search_matches_name_case_insensitively() {
    let products = vec![
        product(1, "Desk Lamp", Decimal::ONE, 5, "warm light"),
        product(2, "Notebook", Decimal::ONE, 5, "ruled pages"),
    ];
    let hits = filter_products(&products, "dEsK");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);
}

#[test]
fn test_search_matches_description() {
    let products = vec![
        product(1, "Desk Lamp", Decimal::ONE, 5, "warm light"),
        product(2, "Notebook", Decimal::ONE, 5, "ruled pages"),
    ];
    let hits = filter_products(&products, "pages");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 2);
}

#[test]
fn test_search_without_match_is_empty_and_nonmutating() {
    let products = vec![
        product(1, "Desk Lamp", Decimal::ONE, 5, "warm light"),
        product(2, "Notebook", Decimal::ONE, 5, "ruled pages"),
    ];
    let before = products.clone();

    let hits = filter_products(&products, "no such thing anywhere");
    assert!(hits.is_empty());
    assert_eq!(products, before);
}

#[test]
fn test_blank_and_whitespace_queries_return_all() {
    let products = vec![product(1, "Desk Lamp", Decimal::ONE, 5, "warm light")];
    assert_eq!(filter_products(&products, ""), products);
    assert_eq!(filter_products(&products, "   \t "), products);
}

#[test]
fn test_filter_preserves_list_order() {
    let products = vec![
        product(3, "Lamp C", Decimal::ONE, 5, "x"),
        product(1, "Lamp A", Decimal::ONE, 5, "x"),
        product(2, "Lamp B", Decimal::ONE, 5, "x"),
    ];
    let hits = filter_products(&products, "lamp");
    let ids: Vec<i64> = hits.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

// --- Formatting ---

#[test]
fn test_price_formatting() {
    assert_eq!(format_price(Decimal::new(9999, 2)), "$99.99");
    assert_eq!(format_price(Decimal::new(1, 2)), "$0.01");
    assert_eq!(format_price(Decimal::from(100)), "$100.00");
}

#[test]
fn test_whole_currency_formatting_rounds_and_groups() {
    assert_eq!(format_currency_whole(Decimal::new(1234567, 2)), "$12,346");
    assert_eq!(format_currency_whole(Decimal::ZERO), "$0");
    assert_eq!(format_currency_whole(Decimal::from(1_000_000)), "$1,000,000");
}

#[test]
fn test_group_thousands() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(12), "12");
    assert_eq!(group_thousands(123), "123");
    assert_eq!(group_thousands(1_234), "1,234");
    assert_eq!(group_thousands(12_345_678), "12,345,678");
    assert_eq!(group_thousands(-5_000), "-5,000");
}
