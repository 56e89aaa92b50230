//! Product Image Component

use leptos::prelude::*;

use crate::models::Thumbnail;

/// How an image fills its box
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ImageFit {
    #[default]
    Cover,
    Contain,
}

impl ImageFit {
    pub fn class(&self) -> &'static str {
        match self {
            ImageFit::Cover => "product-image fit-cover",
            ImageFit::Contain => "product-image fit-contain",
        }
    }
}

/// Product picture, or a blank tile when the product has no images
#[component]
pub fn ProductImage(
    thumbnail: Thumbnail,
    #[prop(optional)] fit: ImageFit,
    #[prop(into, optional)] alt: String,
) -> impl IntoView {
    match thumbnail {
        Thumbnail::Image(src) => view! {
            <img class=fit.class() src=src alt=alt />
        }.into_any(),
        Thumbnail::Placeholder => view! {
            <div class="product-image placeholder" role="img" aria-label=alt></div>
        }.into_any(),
    }
}
