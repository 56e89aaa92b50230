//! UI Components
//!
//! Reusable Leptos components.

mod icon_button;
mod product_image;
mod cart_item_dialog;
mod cart_dialog;
mod product_card;

pub use icon_button::{Icon, IconButton, IconSvg};
pub use product_image::{ImageFit, ProductImage};
pub use cart_item_dialog::CartItemDialog;
pub use cart_dialog::CartDialog;
pub use product_card::ProductCard;
