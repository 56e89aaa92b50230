//! Cart Item Dialog Component
//!
//! One line item inside the cart dialog: thumbnail, name, color and size,
//! price, and a remove button.

use leptos::prelude::*;

use crate::components::{Icon, IconButton, ImageFit, ProductImage};
use crate::currency::{resolve_formatter, Currency, FormatCurrency, SharedFormatter};
use crate::models::{Product, Thumbnail};
use crate::store::{CartHandle, CartStore};

/// Icon size of the remove button
const REMOVE_ICON_SIZE: u32 = 15;

/// Everything a cart row displays, derived from a product
#[derive(Debug, Clone, PartialEq)]
pub struct CartItemRow {
    pub thumbnail: Thumbnail,
    pub name: String,
    pub color_label: String,
    pub size_label: String,
    pub price_label: String,
}

impl CartItemRow {
    pub fn new(product: &Product, formatter: &dyn FormatCurrency) -> Self {
        Self {
            thumbnail: product.thumbnail(),
            name: product.name.clone(),
            color_label: format!("Color: {}", product.color.name),
            size_label: format!("Size: {}", product.size.value),
            price_label: formatter.format(product.price),
        }
    }
}

/// Ask the store to drop this product from the cart
pub fn remove_from_cart(cart: &dyn CartStore, product: &Product) {
    cart.remove_item(&product.id);
}

/// Click handler for the row's remove button
pub fn remove_callback(cart: CartHandle, product: Product) -> Callback<()> {
    Callback::new(move |_: ()| remove_from_cart(&cart, &product))
}

/// A single product row in the cart
#[component]
pub fn CartItemDialog(
    product: Product,
    cart: CartHandle,
    #[prop(optional)] formatter: Option<SharedFormatter>,
) -> impl IntoView {
    let formatter = resolve_formatter(formatter);
    let row = CartItemRow::new(&product, &formatter);
    let price = product.price;

    let on_remove = remove_callback(cart, product);

    view! {
        <li class="cart-item">
            <div class="cart-item-thumb">
                <ProductImage thumbnail=row.thumbnail fit=ImageFit::Cover alt="" />
            </div>
            <div class="cart-item-body">
                <div class="cart-item-remove">
                    <IconButton icon=Icon::Trash on_click=on_remove size=REMOVE_ICON_SIZE />
                </div>
                <div class="cart-item-info">
                    <p class="cart-item-name">{row.name}</p>
                    <div class="cart-item-attrs">
                        <p class="cart-item-attr">{row.color_label}</p>
                        <p class="cart-item-attr divided">{row.size_label}</p>
                    </div>
                    <Currency value=price formatter=formatter />
                </div>
            </div>
        </li>
    }
}
