//! Profile page.
//!
//! Navigation, a section-dependent content area and a footer of social
//! links. All decisions live in [`ProfileState`]; this module only arms the
//! timers it asks for and renders the result.

mod content;
mod footer;
mod nav;

use leptos::prelude::*;

use self::content::{About, Contact, Skills, Typed};
use self::footer::Footer;
use self::nav::Nav;
use crate::app::AppContext;
use crate::components::hooks::TimerSlot;
use crate::core::{ProfileState, Schedule, TimerKind, TypingMode};
use crate::models::Section;

stylance::import_crate_style!(css, "src/components/profile/profile.module.css");

// ============================================================================
// Controller
// ============================================================================

/// Binds the profile state to its two timer slots.
///
/// Every operation mutates the state and arms whatever timer it returned.
/// Timer callbacks re-enter through the same path, which keeps the typing
/// loop self-rescheduling while holding at most one pending step.
#[derive(Clone, Copy)]
struct ProfileController {
    state: RwSignal<ProfileState>,
    typing: TimerSlot,
    transition: TimerSlot,
}

impl ProfileController {
    fn new(state: RwSignal<ProfileState>) -> Self {
        Self {
            state,
            typing: TimerSlot::new(),
            transition: TimerSlot::new(),
        }
    }

    fn arm(self, schedule: Option<Schedule>) {
        let Some(Schedule { kind, delay_ms }) = schedule else {
            return;
        };
        match kind {
            TimerKind::Typing => self.typing.schedule(delay_ms, move || {
                let next = self.state.try_update(ProfileState::tick).flatten();
                self.arm(next);
            }),
            TimerKind::Transition => self.transition.schedule(delay_ms, move || {
                let next = self
                    .state
                    .try_update(ProfileState::finish_transition)
                    .flatten();
                self.arm(next);
            }),
        }
    }

    fn start_typing(self) {
        let next = self.state.try_update(ProfileState::start_typing).flatten();
        self.arm(next);
    }

    fn change_section(self, target: Section) {
        let next = self
            .state
            .try_update(|s| s.change_section(target))
            .flatten();
        self.arm(next);
    }
}

// ============================================================================
// ProfileView Component
// ============================================================================

/// The profile page.
///
/// # Props
/// - `started`: becomes `true` once the splash screen is gone; starts the
///   typewriter (only the first time).
#[component]
pub fn ProfileView(#[prop(into)] started: Signal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let state = ctx.profile;
    let ctl = ProfileController::new(state);

    Effect::new(move || {
        if started.get() {
            ctl.start_typing();
        }
    });

    // Derived signals so each part re-renders only when its slice changes
    let active = Memo::new(move |_| state.with(|s| s.active()));
    let transitioning = Memo::new(move |_| state.with(|s| s.is_transitioning()));
    let text = Memo::new(move |_| state.with(|s| s.typed_text().to_string()));
    let idle = Memo::new(move |_| state.with(|s| s.typing_mode() == TypingMode::Idle));

    let on_select = Callback::new(move |section: Section| ctl.change_section(section));

    view! {
        <div class=css::page>
            <Nav on_select=on_select />

            <main class=move || {
                stylance::classes!(css::content, transitioning.get().then_some(css::transitioning))
            }>
                {move || match active.get() {
                    Section::Home => view! { <Typed text=text idle=idle /> }.into_any(),
                    Section::About => view! { <About /> }.into_any(),
                    Section::Skills => view! { <Skills /> }.into_any(),
                    Section::Contact => view! { <Contact /> }.into_any(),
                }}
            </main>

            <Footer />
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use gloo_timers::future::TimeoutFuture;
    use leptos::mount::mount_to;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    use super::*;
    use crate::components::test_root;
    use crate::config::SECTION_TRANSITION_MS;

    wasm_bindgen_test_configure!(run_in_browser);

    fn typed_len(ctx: AppContext) -> usize {
        ctx.profile.with_untracked(|p| p.typed_text().chars().count())
    }

    #[wasm_bindgen_test]
    async fn test_typing_waits_for_start_signal() {
        let owner = Owner::new();
        owner.set();
        let ctx = AppContext::load().expect("embedded config");
        let started = RwSignal::new(false);

        let _handle = mount_to(test_root(), move || {
            provide_context(ctx);
            view! { <ProfileView started=started /> }
        });

        TimeoutFuture::new(250).await;
        assert_eq!(typed_len(ctx), 0);

        started.set(true);
        TimeoutFuture::new(250).await;
        assert!(typed_len(ctx) > 1, "typing loop did not reschedule itself");
    }

    #[wasm_bindgen_test]
    async fn test_nav_click_suspends_typing() {
        let owner = Owner::new();
        owner.set();
        let ctx = AppContext::load().expect("embedded config");
        let started = RwSignal::new(true);

        let root = test_root();
        let _handle = mount_to(root.clone(), move || {
            provide_context(ctx);
            view! { <ProfileView started=started /> }
        });
        TimeoutFuture::new(150).await;

        root.query_selector("nav a:nth-of-type(2)")
            .expect("valid selector")
            .expect("about link rendered")
            .unchecked_into::<web_sys::HtmlElement>()
            .click();
        assert!(ctx.profile.with_untracked(|p| p.is_transitioning()));

        TimeoutFuture::new(SECTION_TRANSITION_MS + 100).await;
        ctx.profile.with_untracked(|p| {
            assert_eq!(p.active(), Section::About);
            assert!(!p.is_transitioning());
        });

        let frozen = typed_len(ctx);
        TimeoutFuture::new(400).await;
        assert_eq!(typed_len(ctx), frozen);
    }
}
