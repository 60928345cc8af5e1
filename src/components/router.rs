//! Application router component.
//!
//! Picks the page from `location.pathname`. The profile page composes the
//! splash screen and the profile view: the splash reports its removal to
//! this owner, which unmounts it and hands the flag to the profile view.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::not_found::NotFound;
use crate::components::profile::ProfileView;
use crate::components::splash::SplashScreen;
use crate::models::AppRoute;

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// - `/`, `/index.html` → splash screen, then profile
/// - anything else → not found
#[component]
pub fn AppRouter() -> impl IntoView {
    match AppRoute::current() {
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFound /> }.into_any(),
    }
}

// ============================================================================
// Profile Page
// ============================================================================

#[component]
fn ProfilePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let logo = ctx.site.with_value(|site| site.splash_logo.clone());

    // One-shot: flips once, never resets
    let splash_removed = RwSignal::new(false);
    let on_removed = Callback::new(move |_: ()| splash_removed.set(true));

    view! {
        <Show when=move || !splash_removed.get()>
            <SplashScreen logo=logo.clone() on_removed=on_removed />
        </Show>
        <ProfileView started=splash_removed />
    }
}
