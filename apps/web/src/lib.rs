//! # storekeep-web
//!
//! HTTP front-end for the store: server-rendered pages over axum.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storekeep Web Server                             │
//! │                                                                         │
//! │  main.rs                                                               │
//! │    ├── init_tracing()                                                  │
//! │    ├── WebConfig::load()        (env + .env)                           │
//! │    ├── Database::new()          (pool + schema)                        │
//! │    └── axum::serve(router(AppState { db }))                            │
//! │                                                                         │
//! │  router()                                                              │
//! │    ├── handlers::*   ──► storekeep-db repositories                     │
//! │    ├── views::*      ──► HTML strings                                  │
//! │    └── TraceLayer    ──► one span per request                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod views;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use storekeep_db::Database;

use crate::handlers::{customer, due, health, home, item, sale};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,storekeep=debug,tower_http=debug,sqlx=warn";

/// The shared application state that all handlers can access.
///
/// Holds nothing but the database handle; each request borrows a pooled
/// connection through it.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState { db }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/customers", get(customer::list))
        .route("/add_customer", post(customer::add))
        .route("/delete_customer/:id", get(customer::delete))
        .route("/items", get(item::list))
        .route("/add_item", post(item::add))
        .route("/delete_item/:id", get(item::delete))
        .route("/sales", get(sale::list))
        .route("/add_sale", post(sale::add))
        .route("/delete_sale/:id", get(sale::delete))
        .route("/due", get(due::list))
        .route("/add_due", post(due::add))
        .route("/delete_due/:id", get(due::delete))
        .route("/health", get(health::check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` overrides [`DEFAULT_LOG_FILTER`].
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

// =============================================================================
// Route Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use storekeep_core::{NewCustomer, NewItem};
    use storekeep_db::DbConfig;
    use tower::ServiceExt;

    async fn app() -> (Router, Database) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        (router(AppState::new(db.clone())), db)
    }

    async fn get(app: &Router, uri: &str) -> Response {
        app.clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_form(app: &Router, uri: &str, body: &str) -> Response {
        app.clone()
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn assert_redirect(response: &Response, location: &str) {
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], location);
    }

    #[tokio::test]
    async fn test_pages_render() {
        let (app, _db) = app().await;

        for uri in ["/", "/customers", "/items", "/sales", "/due"] {
            let response = get(&app, uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert!(body_text(response).await.contains("<nav>"));
        }
    }

    #[tokio::test]
    async fn test_health() {
        let (app, db) = app().await;

        let response = get(&app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "OK");

        db.close().await;
        let response = get(&app, "/health").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_add_customer_lists_newest_first() {
        let (app, db) = app().await;

        let response = post_form(&app, "/add_customer", "name=Alice&phone=555-1111&email=").await;
        assert_redirect(&response, "/customers");
        post_form(&app, "/add_customer", "name=Bob&phone=&email=bob%40example.com").await;

        let customers = db.customers().list().await.unwrap();
        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].name, "Bob");
        assert_eq!(customers[1].email, None);

        let html = body_text(get(&app, "/customers").await).await;
        let bob = html.find("<td>Bob</td>").unwrap();
        let alice = html.find("<td>Alice</td>").unwrap();
        assert!(bob < alice);
    }

    #[tokio::test]
    async fn test_add_customer_with_blank_name_is_skipped() {
        let (app, db) = app().await;

        let response = post_form(&app, "/add_customer", "name=+++&phone=555").await;
        assert_redirect(&response, "/customers");

        let response = post_form(&app, "/add_customer", "").await;
        assert_redirect(&response, "/customers");

        assert_eq!(db.customers().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_add_item_with_bad_price_defaults_to_zero() {
        let (app, db) = app().await;

        let response = post_form(&app, "/add_item", "name=Pen&stock=10&price=abc").await;
        assert_redirect(&response, "/items");

        let items = db.items().list().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].stock, 10);
        assert_eq!(items[0].price_cents, 0);
    }

    #[tokio::test]
    async fn test_sale_scenario() {
        let (app, db) = app().await;

        post_form(&app, "/add_item", "name=Pen&stock=10&price=2.50").await;
        post_form(&app, "/add_customer", "name=Alice&phone=555-1111&email=").await;
        let item = db.items().list().await.unwrap()[0].id;
        let customer = db.customers().list().await.unwrap()[0].id;

        let response = post_form(
            &app,
            "/add_sale",
            &format!("customer_id={customer}&item_id={item}&quantity=3"),
        )
        .await;
        assert_redirect(&response, "/sales");

        let sales = db.sales().list().await.unwrap();
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].total().to_string(), "7.50");
        assert_eq!(db.items().get_by_id(item).await.unwrap().unwrap().stock, 7);

        let html = body_text(get(&app, "/sales").await).await;
        assert!(html.contains("<td>7.50</td>"));
    }

    #[tokio::test]
    async fn test_sale_beyond_stock_goes_negative() {
        let (app, db) = app().await;

        let customer = insert_customer(&db, "Alice").await;
        let item = db
            .items()
            .insert(&NewItem {
                name: "Pad".to_string(),
                stock: 2,
                price_cents: 100,
            })
            .await
            .unwrap();

        post_form(
            &app,
            "/add_sale",
            &format!("customer_id={customer}&item_id={item}&quantity=5"),
        )
        .await;

        assert_eq!(db.items().get_by_id(item).await.unwrap().unwrap().stock, -3);
        assert_eq!(db.sales().list().await.unwrap()[0].total_cents, 500);
    }

    async fn insert_customer(db: &Database, name: &str) -> i64 {
        db.customers()
            .insert(&NewCustomer {
                name: name.to_string(),
                phone: String::new(),
                email: None,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_sale_quantity_defaults_and_missing_ids() {
        let (app, db) = app().await;

        let customer = insert_customer(&db, "Alice").await;
        let item = db
            .items()
            .insert(&NewItem {
                name: "Ink".to_string(),
                stock: 4,
                price_cents: 300,
            })
            .await
            .unwrap();

        post_form(
            &app,
            "/add_sale",
            &format!("customer_id={customer}&item_id={item}&quantity=-2"),
        )
        .await;
        let sales = db.sales().list().await.unwrap();
        assert_eq!(sales[0].quantity, 1);
        assert_eq!(sales[0].total_cents, 300);

        // Unknown item: recorded, but has no item row to list against
        post_form(&app, "/add_sale", &format!("customer_id={customer}&item_id=999&quantity=2")).await;
        assert_eq!(db.sales().count().await.unwrap(), 2);
        assert_eq!(db.sales().list().await.unwrap().len(), 1);

        let response = post_form(&app, "/add_sale", &format!("item_id={item}&quantity=1")).await;
        assert_redirect(&response, "/sales");
        post_form(&app, "/add_sale", "customer_id=abc&item_id=1").await;
        assert_eq!(db.sales().count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_sale_that_overflows_stock_is_skipped() {
        let (app, db) = app().await;

        let customer = insert_customer(&db, "Alice").await;
        let response = post_form(&app, "/add_item", "name=Bulk&stock=-9223372036854775800&price=0").await;
        assert_redirect(&response, "/items");
        let item = db.items().list().await.unwrap()[0].id;

        let response = post_form(
            &app,
            "/add_sale",
            &format!("customer_id={customer}&item_id={item}&quantity=100"),
        )
        .await;
        assert_redirect(&response, "/sales");

        assert_eq!(db.sales().count().await.unwrap(), 0);
        assert_eq!(
            db.items().get_by_id(item).await.unwrap().unwrap().stock,
            -9_223_372_036_854_775_800
        );
        assert_eq!(get(&app, "/items").await.status(), StatusCode::OK);
        assert_eq!(get(&app, "/sales").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_sale_whose_total_overflows_is_skipped() {
        let (app, db) = app().await;

        let customer = insert_customer(&db, "Alice").await;
        let item = db
            .items()
            .insert(&NewItem {
                name: "Gold".to_string(),
                stock: 10,
                price_cents: 250,
            })
            .await
            .unwrap();

        let response = post_form(
            &app,
            "/add_sale",
            &format!("customer_id={customer}&item_id={item}&quantity={}", i64::MAX / 2),
        )
        .await;
        assert_redirect(&response, "/sales");

        assert_eq!(db.sales().count().await.unwrap(), 0);
        assert_eq!(db.items().get_by_id(item).await.unwrap().unwrap().stock, 10);
        assert_eq!(get(&app, "/sales").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_add_due_requires_positive_amount() {
        let (app, db) = app().await;

        let customer = insert_customer(&db, "Bob").await;

        let response = post_form(&app, "/add_due", &format!("customer_id={customer}&amount=-5")).await;
        assert_redirect(&response, "/due");
        post_form(&app, "/add_due", &format!("customer_id={customer}&amount=0")).await;
        post_form(&app, "/add_due", "amount=5").await;
        assert_eq!(db.dues().count().await.unwrap(), 0);

        post_form(&app, "/add_due", &format!("customer_id={customer}&amount=12.75")).await;
        let dues = db.dues().list().await.unwrap();
        assert_eq!(dues.len(), 1);
        assert_eq!(dues[0].amount_cents, 1275);
        assert_eq!(dues[0].customer_name, "Bob");
    }

    #[tokio::test]
    async fn test_delete_routes_ignore_missing_ids() {
        let (app, db) = app().await;

        for (uri, listing) in [
            ("/delete_customer/42", "/customers"),
            ("/delete_item/42", "/items"),
            ("/delete_sale/42", "/sales"),
            ("/delete_due/42", "/due"),
        ] {
            let response = get(&app, uri).await;
            assert_redirect(&response, listing);
        }

        post_form(&app, "/add_customer", "name=Alice").await;
        let id = db.customers().list().await.unwrap()[0].id;
        let response = get(&app, &format!("/delete_customer/{id}")).await;
        assert_redirect(&response, "/customers");
        assert_eq!(db.customers().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_database_failure_renders_500() {
        let (app, db) = app().await;
        db.close().await;

        let response = get(&app, "/customers").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let html = body_text(response).await;
        assert!(html.contains("Something went wrong"));
        assert!(!html.contains("Pool"));
    }
}
