//! Storefront App
//!
//! Catalog grid plus the cart button and dialog.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog;
use crate::components::{CartDialog, Icon, IconSvg, ProductCard};
use crate::context::AppContext;
use crate::currency::SharedFormatter;
use crate::store::{CartHandle, CartState, CartStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(CartState::default());
    let (cart_open, set_cart_open) = signal(false);
    let products = catalog::load_catalog();

    // Provide context to all children
    provide_context(store);
    provide_context(SharedFormatter::default());
    let ctx = AppContext::new((cart_open, set_cart_open));
    provide_context(ctx);

    let cart = CartHandle::new(store);
    let item_count = move || store.items().read().len();

    view! {
        <div class="app-layout">
            <header class="navbar">
                <h1>"Store"</h1>
                <button class="cart-btn" on:click=move |_| ctx.open_cart()>
                    <IconSvg icon=Icon::ShoppingBag size=20 />
                    <span class="cart-count">{item_count}</span>
                </button>
            </header>

            <main class="product-grid">
                {products
                    .into_iter()
                    .map(|product| view! { <ProductCard product=product cart=cart.clone() /> })
                    .collect_view()}
            </main>

            <CartDialog />
        </div>
    }
}
