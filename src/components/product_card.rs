//! Product Card Component
//!
//! Catalog entry with an "Add to cart" button.

use leptos::prelude::*;

use crate::components::{ImageFit, ProductImage};
use crate::currency::Currency;
use crate::models::Product;
use crate::store::{CartHandle, CartStore};

#[component]
pub fn ProductCard(product: Product, cart: CartHandle) -> impl IntoView {
    let thumbnail = product.thumbnail();
    let name = product.name.clone();
    let price = product.price;

    view! {
        <div class="product-card">
            <ProductImage thumbnail=thumbnail fit=ImageFit::Contain alt=name.clone() />
            <p class="product-card-name">{name}</p>
            <Currency value=price />
            <button
                class="add-to-cart-btn"
                on:click=move |_| cart.add_item(product.clone())
            >
                "Add to cart"
            </button>
        </div>
    }
}
