//! End-to-end flow: router, views, store, and persistence against an
//! in-process mock backend.

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use axum::routing::get;
use axum::{Json, Router as AxumRouter};
use serde_json::json;

use urban_gent_storefront::api::ApiClient;
use urban_gent_storefront::router::{Params, Router};
use urban_gent_storefront::store::{ContactLog, FilePersister, Persister, Store};
use urban_gent_storefront::surface::BufferSurface;
use urban_gent_storefront::views::{AboutView, ContactView, HomeView, ShopView, ViewContext};

fn catalog() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "name": "Áo Sơ Mi Oxford",
            "price": 350_000,
            "category": "tops",
            "images": ["oxford.jpg"],
            "shortDescription": "Sơ mi công sở"
        },
        {
            "id": 2,
            "name": "Quần Jean Slim",
            "price": 550_000,
            "originalPrice": 700_000,
            "category": "bottoms",
            "images": ["jean.jpg"],
            "tags": ["best-seller"],
            "shortDescription": "Jean co giãn"
        },
        {
            "id": 3,
            "name": "Thắt Lưng Da",
            "price": 250_000,
            "category": "accessories",
            "images": ["belt.jpg"],
            "shortDescription": "Da bò thật"
        }
    ])
}

async fn mock_backend() -> url::Url {
    let app = AxumRouter::new()
        .route("/products", get(|| async { Json(catalog()) }))
        .route(
            "/categories",
            get(|| async {
                Json(json!([
                    { "id": "tops", "name": "Áo" },
                    { "id": "bottoms", "name": "Quần" },
                    { "id": "accessories", "name": "Phụ kiện" }
                ]))
            }),
        );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}").parse().unwrap()
}

fn build_router(
    base: &url::Url,
    persister: Arc<dyn Persister>,
    surface: &BufferSurface,
) -> (Router, Arc<Mutex<Store>>) {
    let mut store = Store::new(Arc::clone(&persister));
    store.init();
    let store = Arc::new(Mutex::new(store));

    let ctx = ViewContext::new(ApiClient::new(base), Arc::clone(&store));
    let mut router = Router::new(ctx, Box::new(surface.clone()));
    router.register("home", Box::new(HomeView));
    router.register("shop", Box::new(ShopView));
    router.register("about", Box::new(AboutView));
    router.register(
        "contact",
        Box::new(ContactView::new(ContactLog::new(persister))),
    );
    (router, store)
}

#[tokio::test]
async fn shop_category_route_filters_the_grid() {
    let base = mock_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let surface = BufferSurface::new();
    let persister: Arc<dyn Persister> = Arc::new(FilePersister::new(dir.path()).unwrap());
    let (mut router, store) = build_router(&base, persister, &surface);

    router.handle_hash_change("#/shop?category=tops").await;

    assert_eq!(router.current_hash(), "#/shop?category=tops");
    assert_eq!(surface.visible().as_deref(), Some("shop"));
    assert_eq!(surface.title(), "Shop - Urban Gent");

    let html = surface.html();
    assert!(html.contains("Áo Sơ Mi Oxford"));
    assert!(!html.contains("Quần Jean Slim"));
    assert!(html.contains("1 / 3 sản phẩm"));

    // The fetch also refreshed the store's catalog
    let store = store.lock().unwrap();
    assert_eq!(store.products().len(), 3);
    assert_eq!(
        store.filters().categories,
        std::collections::BTreeSet::from(["tops".to_owned()])
    );
}

#[tokio::test]
async fn search_param_narrows_and_bare_shop_resets() {
    let base = mock_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let surface = BufferSurface::new();
    let persister: Arc<dyn Persister> = Arc::new(FilePersister::new(dir.path()).unwrap());
    let (mut router, store) = build_router(&base, persister, &surface);

    let params = Params::from([("search".to_owned(), "jean".to_owned())]);
    router.navigate("/shop", &params).await;
    let html = surface.html();
    assert!(html.contains("Quần Jean Slim"));
    assert!(!html.contains("Thắt Lưng Da"));

    // Navigating to the shop with no params clears filters and search
    router.navigate("/shop", &Params::new()).await;
    assert!(store.lock().unwrap().filters().is_empty());
    assert!(store.lock().unwrap().search().is_empty());
    assert!(surface.html().contains("3 / 3 sản phẩm"));
}

#[tokio::test]
async fn redundant_navigation_is_a_no_op() {
    let base = mock_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let surface = BufferSurface::new();
    let persister: Arc<dyn Persister> = Arc::new(FilePersister::new(dir.path()).unwrap());
    let (mut router, _store) = build_router(&base, persister, &surface);

    let params = Params::from([("category".to_owned(), "tops".to_owned())]);
    router.navigate("/shop", &params).await;
    let shows = surface.shows();
    router.navigate("/shop", &params).await;
    assert_eq!(surface.shows(), shows);
}

#[tokio::test]
async fn unknown_route_falls_back_to_home() {
    let base = mock_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let surface = BufferSurface::new();
    let persister: Arc<dyn Persister> = Arc::new(FilePersister::new(dir.path()).unwrap());
    let (mut router, _store) = build_router(&base, persister, &surface);

    router.handle_hash_change("#/warehouse").await;
    assert_eq!(router.current_view(), Some("home"));
    assert_eq!(surface.title(), "Urban Gent - Men's Fashion Store");
    assert!(surface.html().contains("Danh Mục Nổi Bật"));
}

#[tokio::test]
async fn cart_survives_a_restart() {
    let base = mock_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let surface = BufferSurface::new();
    let persister: Arc<dyn Persister> = Arc::new(FilePersister::new(dir.path()).unwrap());

    {
        let (mut router, store) = build_router(&base, Arc::clone(&persister), &surface);
        router.handle_hash_change("#/shop").await;

        let mut store = store.lock().unwrap();
        let product = store.products()[1].clone();
        store.add_to_cart(&product, 2);
        store.add_to_cart(&product, 1);
    }

    // A fresh store over the same directory sees the persisted cart
    let mut restored = Store::new(persister);
    restored.init();
    assert_eq!(restored.cart_item_count(), 3);
    assert_eq!(restored.cart().len(), 1);
    assert_eq!(restored.cart()[0].product.name, "Quần Jean Slim");
}

#[tokio::test]
async fn static_views_render_their_content() {
    let base = mock_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let surface = BufferSurface::new();
    let persister: Arc<dyn Persister> = Arc::new(FilePersister::new(dir.path()).unwrap());
    let (mut router, _store) = build_router(&base, persister, &surface);

    router.handle_hash_change("#/about").await;
    assert_eq!(surface.title(), "About - Urban Gent");
    assert!(surface.html().contains("Về Urban Gent"));

    router.handle_hash_change("#/contact").await;
    assert_eq!(surface.title(), "Contact - Urban Gent");
    assert!(surface.html().contains("Liên Hệ Với Chúng Tôi"));
}
