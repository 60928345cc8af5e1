//! UI components built with Leptos.
//!
//! - [`router`] - Path-based page selection (main entry point)
//! - [`splash`] - Intro overlay shown before the profile
//! - [`profile`] - Typewriter, sections and footer
//! - [`not_found`] - 404 page
//! - [`hooks`] - Owned timers shared by components
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod hooks;
pub mod icons;
pub mod not_found;
pub mod profile;
pub mod router;
pub mod splash;

pub use router::AppRouter;

/// Fresh `<div>` appended to `<body>` for mounting components in browser tests.
#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) fn test_root() -> web_sys::HtmlElement {
    use wasm_bindgen::JsCast;

    let document = leptos::prelude::document();
    let root = document.create_element("div").expect("create element");
    document
        .body()
        .expect("document has a body")
        .append_child(&root)
        .expect("append test root");
    root.unchecked_into()
}
