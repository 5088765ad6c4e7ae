#![recursion_limit = "256"]

//! WebAssembly entry point of the landing site.
//!
//! The server renders the pages; this crate hydrates that markup so the
//! navigation bar can start tracking scroll and resize events and the contact
//! dialog becomes interactive.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates the server-rendered body.
///
/// Browser logging goes through `console_log`, so the `log` calls made by the
/// components (skipped anchors, captured contact requests, timer failures) end
/// up in the developer console. Panics are reported there too.
pub fn hydrate() {
    use app::component;
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::hydrate_body(component);
}

#[cfg(test)]
mod tests {
    #[test]
    /// `console_log` may already be installed by another test; only a panic
    /// would be a failure.
    fn test_console_log_initialization() {
        let _ = console_log::init_with_level(log::Level::Debug);
    }
}
