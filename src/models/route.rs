//! Path-based routing.
//!
//! The same bundle is served as `index.html` and `404.html`, so the page
//! decides what to render from `location.pathname`.

use crate::config::PROFILE_PATHS;

/// Top-level pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Splash screen followed by the profile page.
    Profile,
    /// Any unknown path.
    NotFound,
}

impl AppRoute {
    /// Parse a location path into a route.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        if PROFILE_PATHS.contains(&path) {
            Self::Profile
        } else {
            Self::NotFound
        }
    }

    /// Get current route from browser URL
    pub fn current() -> Self {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        Self::from_path(&path)
    }
}
