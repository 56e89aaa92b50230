//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Whether the cart dialog is open - read
    pub cart_open: ReadSignal<bool>,
    /// Whether the cart dialog is open - write
    set_cart_open: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(cart_open: (ReadSignal<bool>, WriteSignal<bool>)) -> Self {
        Self {
            cart_open: cart_open.0,
            set_cart_open: cart_open.1,
        }
    }

    pub fn open_cart(&self) {
        self.set_cart_open.set(true);
    }

    pub fn close_cart(&self) {
        self.set_cart_open.set(false);
    }
}
