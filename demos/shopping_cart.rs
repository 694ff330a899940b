//! Shopping Cart Example
//!
//! Adds a product to a cart the way an application service would: every
//! value object is validated on its own, the cart aggregate is assembled with
//! setters, and the outcome is inspected once at the boundary.
//!
//! Run with: cargo run --example shopping_cart

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use ddd_rail::prelude_async::*;

// =============================================================================
// Value objects
// =============================================================================

const MAX_AMOUNT: i64 = 1000;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Amount(i64);

impl Amount {
    fn create(value: i64) -> ValueObject<Amount> {
        if value < 0 {
            return Error::with_code("an amount cannot be negative", "amount").into_invalid();
        }
        if value > MAX_AMOUNT {
            return Error::with_code(format!("{value} EUR exceeds the {MAX_AMOUNT} EUR max value"), "amount")
                .into_invalid();
        }
        Amount(value).into_valid()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
struct Identifier(String);

impl Identifier {
    fn create(raw: &str) -> ValueObject<Identifier> {
        if raw.is_empty() {
            Error::with_code("an identifier cannot be empty", "identifier").into_invalid()
        } else {
            Identifier(raw.to_string()).into_valid()
        }
    }
}

// =============================================================================
// Entities
// =============================================================================

#[derive(Debug, Clone, Default)]
struct CartItem {
    product_id: Identifier,
    amount: Amount,
}

#[derive(Debug, Clone, Default)]
struct Cart {
    id: Identifier,
    items: BTreeMap<Identifier, CartItem>,
    total: Amount,
}

struct AddProduct<'a> {
    cart_id: &'a str,
    product_id: &'a str,
}

fn cart_item(request: &AddProduct<'_>) -> Entity<CartItem> {
    CartItem::default()
        .into_valid()
        .set_child(Some(Identifier::create(request.product_id)), |item, product_id| CartItem { product_id, ..item })
}

fn verify_product(item: CartItem, known_products: usize) -> Entity<CartItem> {
    if known_products == 0 {
        Error::with_code(format!("the product {} does not exist", item.product_id.0), "identifier").into_invalid()
    } else {
        item.into_valid()
    }
}

fn add_item(cart: Cart, item: CartItem) -> Entity<Cart> {
    let total = Amount::create(cart.total.0 + item.amount.0);
    cart.into_valid()
        .set_mut(Some(item), |cart, item| {
            cart.items.insert(item.product_id.clone(), item);
        })
        .set_child(Some(total), |cart, total| Cart { total, ..cart })
}

// =============================================================================
// Collaborators
// =============================================================================

#[derive(Default)]
struct Store {
    carts: Mutex<BTreeMap<String, Cart>>,
}

async fn count_products(product_id: &str) -> usize {
    usize::from(product_id.starts_with("sku"))
}

async fn product_price(product_id: &str) -> ValueObject<Amount> {
    match product_id {
        "sku-cheap" => Amount::create(40),
        _ => Amount::create(4000),
    }
}

async fn load_cart(store: &Store, cart_id: &str) -> Entity<Cart> {
    let existing = store.carts.lock().ok().and_then(|carts| carts.get(cart_id).cloned());
    let fresh = || Cart::default().into_valid().set_child(Some(Identifier::create(cart_id)), |c, id| Cart { id, ..c });
    existing.fold(fresh, |cart| cart.into_valid())
}

async fn save_cart(store: Arc<Store>, cart: Cart) -> Cart {
    if let Ok(mut carts) = store.carts.lock() {
        carts.insert(cart.id.0.clone(), cart.clone());
    }
    cart
}

async fn add_product(store: Arc<Store>, request: AddProduct<'_>) -> Entity<Cart> {
    let known = count_products(request.product_id).await;
    let price = product_price(request.product_id).await;
    let cart = load_cart(&store, request.cart_id).await;

    cart_item(&request)
        .and_then_with(Eager(known), verify_product)
        .and_then(|item| item.into_valid().set_child(Some(price), |item, amount| CartItem { amount, ..item }))
        .zip(cart)
        .and_then(|(item, cart)| add_item(cart, item))
        .persist(save_cart, store)
        .await
}

fn report(label: &str, cart: Entity<Cart>) {
    let line = cart.fold(
        |errors| errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "),
        |cart| format!("cart {} holds {} item(s), total {} EUR", cart.id.0, cart.items.len(), cart.total.0),
    );
    println!("{label}: {line}");
}

#[tokio::main]
async fn main() {
    let store = Arc::new(Store::default());

    let ok = add_product(store.clone(), AddProduct { cart_id: "c1", product_id: "sku-cheap" }).await;
    report("valid request", ok);

    let bad = add_product(store.clone(), AddProduct { cart_id: "", product_id: "" }).await;
    report("empty identifiers", bad);

    let expensive = add_product(store.clone(), AddProduct { cart_id: "c1", product_id: "sku-gold" }).await;
    report("price over the limit", expensive);

    let steps = [10, 20, 30].map(|extra| move |cart: Cart| async move { cart.total.0 + extra });
    let projections = load_cart(&store, "c1")
        .await
        .map_parallel(steps, |totals| totals)
        .await;
    println!("projected totals: {:?}", projections.into_value());
}
