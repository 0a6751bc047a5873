use std::net::SocketAddr;

use axum::Router;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use reqwest::StatusCode as HttpStatusCode;
use server::routes;
use server::state::ServerState;

fn cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

struct TestApp {
    base_url: String,
}

/// Spawn the full router on an ephemeral port against the in-memory
/// backend, so the suite needs no external services.
async fn start_server() -> anyhow::Result<TestApp> {
    let state = ServerState::in_memory();
    let app: Router = routes::build_router(state, cors(), "public");

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_public_health_and_metrics() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");

    let res = client().get(format!("{}/metrics", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn e2e_product_crud_flow() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // Create: slug derived from the title, placeholder image applied
    let res = c
        .post(format!("{}/api/products", app.base_url))
        .json(&json!({
            "title": "Dell PowerEdge R740!",
            "category": "Servers",
            "specs": {"Processor": "Intel Xeon", "Memory": "Up to 3TB DDR4"},
            "rentalPrice": "₹15,000/month"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["product"]["slug"], "dell-poweredge-r740");
    assert_eq!(body["product"]["status"], "Active");
    assert_eq!(body["product"]["images"][0], "/products/placeholder.jpg");
    let id = body["product"]["id"].as_str().expect("product id").to_string();

    // Read by slug
    let res = c
        .get(format!("{}/api/products?slug=dell-poweredge-r740", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["product"]["title"], "Dell PowerEdge R740!");
    assert_eq!(body["product"]["specs"]["Processor"], "Intel Xeon");

    // Patch a single flag; everything else must survive
    let res = c
        .patch(format!("{}/api/products", app.base_url))
        .json(&json!({"id": id, "isFeatured": true}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["product"]["isFeatured"], true);
    assert_eq!(body["product"]["specs"]["Memory"], "Up to 3TB DDR4");
    assert_eq!(body["product"]["rentalPrice"], "₹15,000/month");

    // Featured filter picks it up
    let res = c.get(format!("{}/api/products?featured=true", app.base_url)).send().await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["products"].as_array().map(Vec::len), Some(1));

    // Delete, then the slug read 404s and a second delete 404s
    let res = c.delete(format!("{}/api/products?id={}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = c
        .get(format!("{}/api/products?slug=dell-poweredge-r740", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let res = c.delete(format!("{}/api/products?id={}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_category_filter_is_case_insensitive() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    for (title, category) in [("Dell PowerEdge R740", "Servers"), ("MacBook Pro 16", "Laptops")] {
        let res = c
            .post(format!("{}/api/products", app.base_url))
            .json(&json!({"title": title, "category": category}))
            .send()
            .await?;
        assert_eq!(res.status(), HttpStatusCode::CREATED);
    }

    let lower = c
        .get(format!("{}/api/products?category=servers", app.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    let upper = c
        .get(format!("{}/api/products?category=Servers", app.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(lower, upper);
    assert_eq!(lower["products"].as_array().map(Vec::len), Some(1));
    // `category=all` means no filter
    let all = c
        .get(format!("{}/api/products?category=all", app.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(all["products"].as_array().map(Vec::len), Some(2));
    Ok(())
}

#[tokio::test]
async fn e2e_inquiry_flow() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // Submitted status is ignored; creation always starts at `new`
    let res = c
        .post(format!("{}/api/inquiry", app.base_url))
        .json(&json!({
            "name": "Rahul Sharma",
            "email": "rahul@techcorp.com",
            "phone": "+91 98765 43210",
            "message": "Interested in renting 20 Dell laptops.",
            "source": "quote_modal",
            "product": "Dell Laptop",
            "status": "closed"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["inquiry"]["status"], "new");
    let id = body["inquiry"]["id"].as_str().expect("inquiry id").to_string();

    // Second submission lists first (newest-first)
    let res = c
        .post(format!("{}/api/inquiry", app.base_url))
        .json(&json!({"name": "Priya Patel", "email": "priya@globalfinance.com", "phone": "+91 87654 32109"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    let body = c
        .get(format!("{}/api/inquiry", app.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    let inquiries = body["inquiries"].as_array().expect("inquiries array");
    assert_eq!(inquiries.len(), 2);
    assert_eq!(inquiries[0]["name"], "Priya Patel");
    assert_eq!(inquiries[1]["name"], "Rahul Sharma");

    // Unguarded transition straight to closed
    let res = c
        .patch(format!("{}/api/inquiry", app.base_url))
        .json(&json!({"id": id, "status": "closed"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["inquiry"]["status"], "closed");

    // Delete; deleting again reports the miss
    let res = c.delete(format!("{}/api/inquiry?id={}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = c.delete(format!("{}/api/inquiry?id={}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_settings_defaults_and_admin_login() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // Empty store answers with the full default map
    let body = c
        .get(format!("{}/api/settings", app.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(body["name"], "Prisha Enterprises");
    assert_eq!(body["admin_username"], "admin");

    // Default demo credential logs in on a fresh install
    let res = c
        .post(format!("{}/api/auth/login", app.base_url))
        .json(&json!({"username": "admin", "password": "prisha2024"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    // One overridden key leaves the other defaults intact
    let res = c
        .post(format!("{}/api/settings", app.base_url))
        .json(&json!({"phone": "+91 1"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = c
        .get(format!("{}/api/settings", app.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(body["phone"], "+91 1");
    assert_eq!(body["email"], "contact@prishaenterprises.in");

    // Change password, old one stops working
    let res = c
        .post(format!("{}/api/auth/change-password", app.base_url))
        .json(&json!({"currentPassword": "prisha2024", "newPassword": "n3w-secret"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = c
        .post(format!("{}/api/auth/login", app.base_url))
        .json(&json!({"username": "admin", "password": "prisha2024"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);
    let res = c
        .post(format!("{}/api/auth/login", app.base_url))
        .json(&json!({"username": "admin", "password": "n3w-secret"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(())
}
