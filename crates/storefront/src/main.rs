//! Urban Gent storefront - interactive shop session.
//!
//! Runs the single-page shop against the mock REST backend: hash-style
//! navigation between home/shop/about/contact, a persistent cart, and
//! filter/search over the product catalog. Rendered views are printed to
//! the terminal; state survives restarts under the configured state
//! directory.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use urban_gent_storefront::api::ApiClient;
use urban_gent_storefront::config::StorefrontConfig;
use urban_gent_storefront::format::format_vnd;
use urban_gent_storefront::router::{Params, Router};
use urban_gent_storefront::store::{ContactLog, ContactMessage, FilePersister, Persister, Store};
use urban_gent_storefront::surface::Surface;
use urban_gent_storefront::views::{AboutView, ContactView, HomeView, ShopView, ViewContext};

use urban_gent_core::Price;

/// Urban Gent - men's fashion storefront.
#[derive(Debug, Parser)]
#[command(name = "urban-gent", version, about)]
struct Args {
    /// Base URL of the mock REST backend (overrides STOREFRONT_API_BASE).
    #[arg(long)]
    api_base: Option<Url>,

    /// Directory holding persisted state (overrides STOREFRONT_STATE_DIR).
    #[arg(long)]
    state_dir: Option<PathBuf>,

    /// Initial route, e.g. "#/shop?category=tops".
    #[arg(default_value = "#/")]
    route: String,
}

/// A surface that prints rendered views to the terminal.
struct PrintSurface;

impl Surface for PrintSurface {
    fn show_view(&mut self, name: &str, html: &str) {
        println!("--- [{name}] ---");
        println!("{html}");
    }

    fn set_title(&mut self, title: &str) {
        println!("=== {title} ===");
    }

    fn scroll_to_top(&mut self) {}
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "urban_gent_storefront=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = StorefrontConfig::from_env().expect("Failed to load configuration");
    let api_base = args.api_base.unwrap_or(config.api_base);
    let state_dir = args.state_dir.unwrap_or(config.state_dir);

    let persister: Arc<dyn Persister> =
        Arc::new(FilePersister::new(&state_dir).expect("Failed to open state directory"));

    let mut store = Store::new(Arc::clone(&persister));
    store.init();
    // Cart badge: recomputed and printed on every state change
    store.subscribe(Box::new(|state| {
        let count: u32 = state.cart.iter().map(|line| line.quantity).sum();
        let total: rust_decimal::Decimal =
            state.cart.iter().map(urban_gent_core::CartItem::line_total).sum();
        println!("[cart] {count} sản phẩm - {}", format_vnd(Price::new(total)));
    }));
    let store = Arc::new(Mutex::new(store));

    let api = ApiClient::new(&api_base);
    let ctx = ViewContext::new(api, Arc::clone(&store));

    let mut router = Router::new(ctx, Box::new(PrintSurface));
    router.register("home", Box::new(HomeView));
    router.register("shop", Box::new(ShopView));
    router.register("about", Box::new(AboutView));
    router.register(
        "contact",
        Box::new(ContactView::new(ContactLog::new(Arc::clone(&persister)))),
    );

    tracing::info!(%api_base, state_dir = %state_dir.display(), "storefront starting");
    router.init(&args.route).await;

    run_repl(&mut router, &store, &ContactLog::new(persister)).await;
}

/// Read commands from stdin until EOF or `quit`.
async fn run_repl(router: &mut Router, store: &Arc<Mutex<Store>>, contact: &ContactLog) {
    print_help();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "" => {}
            "open" => router.handle_hash_change(rest).await,
            "search" => {
                let params = Params::from([("search".to_owned(), rest.to_owned())]);
                router.navigate("/shop", &params).await;
            }
            "add" => add_to_cart(store, rest),
            "remove" => remove_from_cart(store, rest),
            "cart" => print_cart(store),
            "reset" => {
                let mut store = lock(store);
                store.reset_filters();
                store.update_search("");
            }
            "clear" => lock(store).clear_all(),
            "contact" => submit_contact(contact, rest),
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("unknown command: {other} (try `help`)"),
        }
    }
    tracing::info!("session ended");
}

fn lock<'a>(store: &'a Arc<Mutex<Store>>) -> std::sync::MutexGuard<'a, Store> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}

/// `add <product-id> [quantity]`
fn add_to_cart(store: &Arc<Mutex<Store>>, args: &str) {
    let (id, quantity) = args.split_once(' ').unwrap_or((args, "1"));
    let quantity: u32 = quantity.trim().parse().unwrap_or(1);

    let mut store = lock(store);
    let product = store
        .products()
        .into_iter()
        .find(|product| product.id.as_str() == id.trim());
    match product {
        Some(product) => store.add_to_cart(&product, quantity),
        None => println!("no product with id {id} in the current catalog (open the shop first)"),
    }
}

/// `remove <product-id>`
fn remove_from_cart(store: &Arc<Mutex<Store>>, args: &str) {
    let id = args.trim();
    let mut store = lock(store);
    let cart: Vec<_> = store
        .cart()
        .into_iter()
        .filter(|line| line.product.id.as_str() != id)
        .collect();
    store.update_cart(cart);
}

fn print_cart(store: &Arc<Mutex<Store>>) {
    let store = lock(store);
    let cart = store.cart();
    if cart.is_empty() {
        println!("giỏ hàng trống");
        return;
    }
    for line in &cart {
        println!(
            "{:>3} x {} - {} ({})",
            line.quantity,
            line.product.name,
            format_vnd(line.product.price),
            line.product.id,
        );
    }
    println!("tổng cộng: {}", format_vnd(Price::new(store.cart_total())));
}

/// `contact <name> <email> <message...>`
fn submit_contact(contact: &ContactLog, args: &str) {
    let mut parts = args.splitn(3, ' ');
    let (Some(name), Some(email), Some(message)) = (parts.next(), parts.next(), parts.next())
    else {
        println!("usage: contact <name> <email> <message>");
        return;
    };
    match contact.submit(ContactMessage::new(name, email, message)) {
        Ok(()) => println!("✓ Cảm ơn bạn! Tin nhắn của bạn đã được gửi thành công."),
        Err(error) => tracing::error!(%error, "failed to store contact message"),
    }
}

fn print_help() {
    println!(
        "commands:\n  \
         open <hash>               navigate, e.g. open #/shop?category=tops\n  \
         search <query>            search the shop\n  \
         add <id> [qty]            add a product to the cart\n  \
         remove <id>               remove a cart line\n  \
         cart                      show the cart\n  \
         reset                     clear filters and search\n  \
         clear                     wipe all persisted state\n  \
         contact <name> <email> <message>\n  \
         help                      this text\n  \
         quit                      exit"
    );
}
