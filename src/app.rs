//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config::ABOUT_MARKDOWN;
use crate::core::error::ConfigError;
use crate::core::{ProfileState, Typewriter};
use crate::models::SiteConfig;
use crate::utils::markdown_to_html;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are arena handles, which are
/// cheap to copy.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Static site content.
    pub site: StoredValue<SiteConfig>,

    /// Sanitized HTML of the "about" text, rendered once.
    pub about_html: StoredValue<String>,

    /// Typewriter and section state of the profile page.
    pub profile: RwSignal<ProfileState>,
}

impl AppContext {
    /// Build the context from the configuration embedded in the binary.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_config(SiteConfig::embedded()?)
    }

    pub fn from_config(site: SiteConfig) -> Result<Self, ConfigError> {
        let typewriter = Typewriter::new(site.phrase_cycle()?, site.typing);
        Ok(Self {
            site: StoredValue::new(site),
            about_html: StoredValue::new(markdown_to_html(ABOUT_MARKDOWN)),
            profile: RwSignal::new(ProfileState::new(typewriter)),
        })
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Loads the site configuration and provides the AppContext
/// - Wraps the app in an ErrorBoundary; configuration errors land there
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let config_error = match AppContext::load() {
        Ok(ctx) => {
            provide_context(ctx);
            None
        }
        Err(e) => {
            web_sys::console::error_1(&e.to_string().into());
            Some(e)
        }
    };

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: black;
                    color: white;
                    font-family: 'Arial Black', Arial, sans-serif;
                ">
                    <div style="
                        max-width: 600px;
                        text-align: center;
                    ">
                        <h1 style="margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #a0a0a0; margin-bottom: 2rem;">
                            "The page could not be loaded. Please try reloading."
                        </p>
                        <ul style="
                            list-style: none;
                            margin: 0 0 2rem 0;
                            padding: 0;
                            color: #ff6b6b;
                            font-size: 0.9rem;
                        ">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: white;
                                color: black;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-family: inherit;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            {match config_error {
                None => Ok(view! { <AppRouter /> }),
                Some(e) => Err(e),
            }}
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Section;

    #[test]
    fn test_context_from_embedded_config() {
        let owner = Owner::new();
        owner.set();

        let ctx = AppContext::load().expect("embedded config loads");
        ctx.profile.with_untracked(|p| {
            assert_eq!(p.active(), Section::Home);
            assert_eq!(p.typed_text(), "");
            assert!(!p.is_transitioning());
        });
        assert!(ctx.about_html.get_value().starts_with("<p>"));
        assert_eq!(ctx.site.with_value(|s| s.phrases.len()), 4);
    }
}
