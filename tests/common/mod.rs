// common/mod.rs - Shared test utilities for the mock inventory backend
//
// Spins up a real Actix HTTP server on a random local port implementing
// the backend collection resource contract, so the client and server
// functions can be exercised end to end without an external service.

use std::net::TcpListener;
use std::sync::Mutex;

use actix_web::{web, App, HttpResponse, HttpServer};
use rust_decimal::Decimal;

use product_manager::web_app::model::{Product, ProductDraft};

/// In-memory state behind the mock collection resource.
#[derive(Default)]
pub struct MockBackend {
    pub items: Mutex<Vec<Product>>,
    pub next_id: Mutex<i64>,
}

pub fn draft(name: &str, price: Decimal, quantity: i32, description: &str) -> ProductDraft {
    ProductDraft {
        product_name: name.to_string(),
        price,
        quantity,
        description: description.to_string(),
    }
}

pub fn product(id: i64, name: &str, price: Decimal, quantity: i32, description: &str) -> Product {
    Product {
        id,
        product_name: name.to_string(),
        price,
        quantity,
        description: description.to_string(),
    }
}

async fn list_items(state: web::Data<MockBackend>) -> HttpResponse {
    let items = state.items.lock().unwrap();
    HttpResponse::Ok().json(&*items)
}

async fn create_item(
    state: web::Data<MockBackend>,
    body: web::Json<ProductDraft>,
) -> HttpResponse {
    let mut items = state.items.lock().unwrap();
    let mut next_id = state.next_id.lock().unwrap();
    *next_id += 1;

    let created = Product {
        id: *next_id,
        product_name: body.product_name.clone(),
        price: body.price,
        quantity: body.quantity,
        description: body.description.clone(),
    };
    items.push(created.clone());
    HttpResponse::Ok().json(created)
}

async fn update_item(
    state: web::Data<MockBackend>,
    path: web::Path<i64>,
    body: web::Json<ProductDraft>,
) -> HttpResponse {
    let id = path.into_inner();
    let mut items = state.items.lock().unwrap();
    if let Some(slot) = items.iter_mut().find(|p| p.id == id) {
        *slot = Product {
            id,
            product_name: body.product_name.clone(),
            price: body.price,
            quantity: body.quantity,
            description: body.description.clone(),
        };
        let updated = slot.clone();
        HttpResponse::Ok().json(updated)
    } else {
        HttpResponse::NotFound().finish()
    }
}

async fn delete_item(state: web::Data<MockBackend>, path: web::Path<i64>) -> HttpResponse {
    let id = path.into_inner();
    let mut items = state.items.lock().unwrap();
    let before = items.len();
    items.retain(|p| p.id != id);
    if items.len() < before {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::NotFound().finish()
    }
}

/// Start a mock backend seeded with `initial` products.
///
/// Returns the collection URL to point an ApiClient at, plus the shared
/// state for asserting on what the backend ended up holding.
pub async fn spawn_backend(
    initial: Vec<Product>,
) -> anyhow::Result<(String, web::Data<MockBackend>)> {
    let highest_id = initial.iter().map(|p| p.id).max().unwrap_or(0);
    let state = web::Data::new(MockBackend {
        items: Mutex::new(initial),
        next_id: Mutex::new(highest_id),
    });

    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;

    let app_state = state.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .route("/api/items", web::get().to(list_items))
            .route("/api/items", web::post().to(create_item))
            .route("/api/items/{id}", web::put().to(update_item))
            .route("/api/items/{id}", web::delete().to(delete_item))
    })
    .workers(1)
    .listen(listener)?
    .run();

    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}/api/items"), state))
}
