//! Cart Dialog Component
//!
//! Modal listing every cart item with the subtotal.

use leptos::prelude::*;

use crate::components::{CartItemDialog, Icon, IconButton};
use crate::context::AppContext;
use crate::currency::Currency;
use crate::store::{subtotal, use_cart_store, CartHandle, CartStateStoreFields, CartStore};

/// Cart modal, shown while `AppContext::cart_open` is set
#[component]
pub fn CartDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_cart_store();

    let items = Memo::new(move |_| store.items().get());
    let total = Memo::new(move |_| subtotal(&items.get()));
    let notice = move || store.notice().get().map(|n| n.message());

    view! {
        <Show when=move || ctx.cart_open.get()>
            <div class="dialog-backdrop" on:click=move |_| ctx.close_cart()>
                <div class="dialog" on:click=|ev| ev.stop_propagation()>
                    <div class="dialog-header">
                        <h2>"Shopping Cart"</h2>
                        <IconButton icon=Icon::Close on_click=move |_: ()| ctx.close_cart() size=15 />
                    </div>

                    {move || notice().map(|msg| view! { <p class="cart-notice">{msg}</p> })}

                    <Show
                        when=move || !items.get().is_empty()
                        fallback=|| view! { <p class="cart-empty">"No items added to cart."</p> }
                    >
                        <ul class="cart-list">
                            <For
                                each=move || items.get()
                                key=|product| product.id.clone()
                                children=move |product| view! {
                                    <CartItemDialog product=product cart=CartHandle::new(store) />
                                }
                            />
                        </ul>
                    </Show>

                    <div class="cart-summary">
                        <span>"Order total"</span>
                        {move || view! { <Currency value=total.get() /> }}
                    </div>
                    <button
                        class="cart-clear-btn"
                        disabled=move || items.get().is_empty()
                        on:click=move |_| store.remove_all()
                    >
                        "Remove all"
                    </button>
                </div>
            </div>
        </Show>
    }
}
