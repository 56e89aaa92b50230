//! Currency Formatting
//!
//! Price display strings and the `Currency` view.

use std::sync::Arc;

use leptos::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a numeric amount for display
pub trait FormatCurrency {
    fn format(&self, amount: Decimal) -> String;
}

/// en-US dollar formatting: `$1,234.50`, `-$5.00`
#[derive(Debug, Clone, Copy, Default)]
pub struct UsdFormatter;

impl FormatCurrency for UsdFormatter {
    fn format(&self, amount: Decimal) -> String {
        let mut rounded = amount
            .abs()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        // Scale is now 2, so the mantissa counts cents
        let cents = rounded.mantissa().unsigned_abs();
        let whole = group_thousands(cents / 100);
        let sign = if amount.is_sign_negative() && cents > 0 { "-" } else { "" };

        format!("{}${}.{:02}", sign, whole, cents % 100)
    }
}

fn group_thousands(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Shared formatter handle, injected into views by prop or context
#[derive(Clone)]
pub struct SharedFormatter(Arc<dyn FormatCurrency + Send + Sync>);

impl SharedFormatter {
    pub fn new(formatter: impl FormatCurrency + Send + Sync + 'static) -> Self {
        Self(Arc::new(formatter))
    }
}

impl Default for SharedFormatter {
    fn default() -> Self {
        Self::new(UsdFormatter)
    }
}

impl FormatCurrency for SharedFormatter {
    fn format(&self, amount: Decimal) -> String {
        self.0.format(amount)
    }
}

/// Resolve a formatter: explicit prop, then context, then USD
pub fn resolve_formatter(explicit: Option<SharedFormatter>) -> SharedFormatter {
    explicit
        .or_else(use_context::<SharedFormatter>)
        .unwrap_or_default()
}

/// Formatted price display
#[component]
pub fn Currency(
    value: Decimal,
    #[prop(optional)] formatter: Option<SharedFormatter>,
) -> impl IntoView {
    let formatter = resolve_formatter(formatter);
    view! {
        <p class="price">{formatter.format(value)}</p>
    }
}
