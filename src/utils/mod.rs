//! Utility modules for DOM access, links and content rendering.
//!
//! Provides:
//! - [`dom`] - Window, clipboard and external link helpers
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization
//! - [`validate_redirect_url`] - URL security validation

pub mod dom;
mod markdown;
mod url;

pub use markdown::markdown_to_html;
pub use url::validate_redirect_url;
