//! Cart State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Views receive the
//! store through a `CartHandle` rather than reaching for a global.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use rust_decimal::Decimal;

use crate::logging;
use crate::models::Product;

/// Outcome of a cart mutation, shown to the user as a short notice
#[derive(Clone, Debug, PartialEq)]
pub enum CartNotice {
    Added,
    AlreadyInCart,
    Removed,
    NotInCart,
    Cleared,
}

impl CartNotice {
    pub fn message(&self) -> &'static str {
        match self {
            CartNotice::Added => "Item added to cart.",
            CartNotice::AlreadyInCart => "Item already in cart.",
            CartNotice::Removed => "Item removed from the cart.",
            CartNotice::NotInCart => "Item is no longer in the cart.",
            CartNotice::Cleared => "Cart cleared.",
        }
    }
}

/// Cart contents with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CartState {
    /// Products in the order they were added
    pub items: Vec<Product>,
    /// Result of the most recent mutation
    pub notice: Option<CartNotice>,
}

fn add_to(items: &mut Vec<Product>, product: Product) -> CartNotice {
    if items.iter().any(|item| item.id == product.id) {
        return CartNotice::AlreadyInCart;
    }
    items.push(product);
    CartNotice::Added
}

fn remove_from(items: &mut Vec<Product>, product_id: &str) -> CartNotice {
    let before = items.len();
    items.retain(|item| item.id != product_id);
    if items.len() == before {
        CartNotice::NotInCart
    } else {
        CartNotice::Removed
    }
}

/// Sum of item prices
pub fn subtotal(items: &[Product]) -> Decimal {
    items.iter().map(|item| item.price).sum()
}

/// Operations the cart views may signal to the store
pub trait CartStore {
    fn add_item(&self, product: Product);
    fn remove_item(&self, product_id: &str);
    fn remove_all(&self);
}

/// Type alias for the store
pub type CartStoreHandle = Store<CartState>;

impl CartStore for Store<CartState> {
    fn add_item(&self, product: Product) {
        let id = product.id.clone();
        let notice = add_to(&mut self.items().write(), product);
        logging::info("CART", &format!("Add {}: {:?}", id, notice));
        *self.notice().write() = Some(notice);
    }

    fn remove_item(&self, product_id: &str) {
        let notice = remove_from(&mut self.items().write(), product_id);
        logging::info("CART", &format!("Remove {}: {:?}", product_id, notice));
        *self.notice().write() = Some(notice);
    }

    fn remove_all(&self) {
        self.items().write().clear();
        logging::info("CART", "Cleared");
        *self.notice().write() = Some(CartNotice::Cleared);
    }
}

/// Cloneable, injectable reference to a cart store
#[derive(Clone)]
pub struct CartHandle(Arc<dyn CartStore + Send + Sync>);

impl CartHandle {
    pub fn new(store: impl CartStore + Send + Sync + 'static) -> Self {
        Self(Arc::new(store))
    }
}

impl CartStore for CartHandle {
    fn add_item(&self, product: Product) {
        self.0.add_item(product)
    }

    fn remove_item(&self, product_id: &str) {
        self.0.remove_item(product_id)
    }

    fn remove_all(&self) {
        self.0.remove_all()
    }
}

/// Get the cart store from context
pub fn use_cart_store() -> CartStoreHandle {
    expect_context::<CartStoreHandle>()
}
