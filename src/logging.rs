//! Console Logging
//!
//! Tagged log lines on the browser console; stderr on native targets (tests).

/// Log an informational line, e.g. `info("CART", "Removed p1")` -> `[CART] Removed p1`
pub fn info(tag: &str, message: &str) {
    let line = format_line(tag, message);
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&line.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{}", line);
}

/// Log an error line
pub fn error(tag: &str, message: &str) {
    let line = format_line(tag, message);
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&line.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{}", line);
}

fn format_line(tag: &str, message: &str) -> String {
    format!("[{}] {}", tag, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!(format_line("CART", "Removed p1"), "[CART] Removed p1");
    }
}
