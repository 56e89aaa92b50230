//! Icon Button Component
//!
//! Round button wrapping an inline SVG icon.

use leptos::prelude::*;

/// Icons used by the cart views (lucide outlines)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Icon {
    Trash,
    Close,
    ShoppingBag,
}

impl Icon {
    /// SVG path data, drawn on a 24x24 viewbox
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            Icon::Trash => &[
                "M3 6h18",
                "M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6",
                "M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2",
                "M10 11v6",
                "M14 11v6",
            ],
            Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
            Icon::ShoppingBag => &[
                "M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z",
                "M3 6h18",
                "M16 10a4 4 0 0 1-8 0",
            ],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Icon::Trash => "Remove",
            Icon::Close => "Close",
            Icon::ShoppingBag => "Cart",
        }
    }
}

/// Inline SVG for an icon
#[component]
pub fn IconSvg(icon: Icon, #[prop(default = 20)] size: u32) -> impl IntoView {
    view! {
        <svg
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            {icon.paths().iter().copied().map(|d| view! { <path d=d /> }).collect_view()}
        </svg>
    }
}

/// Button showing a single icon
///
/// # Arguments
/// * `icon` - Icon to draw
/// * `on_click` - Callback run once per click; the click does not bubble
/// * `size` - Icon size in pixels
#[component]
pub fn IconButton(
    icon: Icon,
    #[prop(into)] on_click: Callback<()>,
    #[prop(default = 20)] size: u32,
) -> impl IntoView {
    view! {
        <button
            class="icon-btn"
            title=icon.label()
            aria-label=icon.label()
            on:click=move |ev| {
                ev.stop_propagation();
                on_click.run(());
            }
        >
            <IconSvg icon=icon size=size />
        </button>
    }
}
