//! Splash screen component.
//!
//! Full-screen logo shown before the profile page. Clicking the logo fades
//! the overlay out and, once the fade completes, notifies the owner through
//! `on_removed`. The owner is responsible for unmounting it.

use leptos::prelude::*;

use crate::components::hooks::TimerSlot;
use crate::config::SPLASH_FADE_MS;

stylance::import_crate_style!(css, "src/components/splash.module.css");

#[component]
pub fn SplashScreen(
    /// Logo image path.
    #[prop(into)]
    logo: String,
    /// Fired once, after the fade-out finished.
    on_removed: Callback<()>,
) -> impl IntoView {
    let fading = RwSignal::new(false);
    let removal = TimerSlot::new();

    let activate = move |_: leptos::ev::MouseEvent| {
        if fading.get_untracked() {
            return;
        }
        fading.set(true);
        removal.schedule(SPLASH_FADE_MS, move || on_removed.run(()));
    };

    view! {
        <div class=move || stylance::classes!(css::splash, fading.get().then_some(css::fadeOut))>
            <img class=css::logo src=logo alt="Splash Logo" on:click=activate />
        </div>
    }
}
