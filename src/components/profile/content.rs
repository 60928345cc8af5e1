//! Section bodies rendered inside the content area.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::hooks::TimerSlot;
use crate::components::icons as ic;
use crate::config::COPY_INDICATOR_MS;
use crate::models::{CopyStatus, SkillEntry};
use crate::utils::dom::{open_external, write_clipboard_text};

stylance::import_crate_style!(css, "src/components/profile/content.module.css");

// ============================================================================
// Home
// ============================================================================

/// Typewriter text followed by the cursor.
///
/// The cursor blinks while typing or erasing and is held solid while the
/// full phrase is on screen.
#[component]
pub fn Typed(text: Memo<String>, idle: Memo<bool>) -> impl IntoView {
    view! {
        {move || text.get()}
        <span class=move || {
            stylance::classes!(css::cursor, idle.get().then_some(css::cursorSolid))
        }></span>
    }
}

// ============================================================================
// About
// ============================================================================

#[component]
pub fn About() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let body = ctx.about_html.get_value();
    let link = ctx.site.with_value(|site| site.about.clone());

    view! {
        <div class=css::about>
            <div inner_html=body></div>
            <a
                href=link.link
                class=css::aboutLink
                target="_blank"
                rel="noopener noreferrer"
            >
                {link.label}
                <Icon icon=ic::EXTERNAL_LINK />
            </a>
        </div>
    }
}

// ============================================================================
// Skills
// ============================================================================

#[component]
pub fn Skills() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let skills = ctx.site.with_value(|site| site.skills.clone());

    view! {
        <div class=css::skillsGrid>
            {skills
                .into_iter()
                .map(|skill| view! { <SkillTile skill=skill /> })
                .collect_view()}
        </div>
    }
}

/// One skill: icon and name. Icons with a project link open it in a new tab.
#[component]
fn SkillTile(skill: SkillEntry) -> impl IntoView {
    let SkillEntry { name, logo, link } = skill;
    let alt = format!("{} logo", name);
    let icon_class = stylance::classes!(css::skillIcon, link.is_some().then_some(css::linked));

    let on_click = move |_: leptos::ev::MouseEvent| {
        if let Some(url) = link.as_deref() {
            open_external(url);
        }
    };

    view! {
        <div class=css::skillItem>
            <img class=icon_class src=logo alt=alt on:click=on_click />
            <span class=css::skillName>{name}</span>
        </div>
    }
}

// ============================================================================
// Contact
// ============================================================================

/// Show `next` on the copy indicator and hide it after [`COPY_INDICATOR_MS`].
///
/// A newer status restarts the hide timer.
fn show_status(status: RwSignal<CopyStatus>, hide: TimerSlot, next: CopyStatus) {
    // Unmounted while the write was in flight
    if status.try_set(next).is_some() {
        return;
    }
    hide.schedule(COPY_INDICATOR_MS, move || {
        status.try_set(CopyStatus::Hidden);
    });
}

/// Address block; clicking it copies the address to the clipboard.
#[component]
pub fn Contact() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let email = ctx.site.with_value(|site| site.contact.email.clone());

    let status = RwSignal::new(CopyStatus::Hidden);
    let hide = TimerSlot::new();
    let text_ref = NodeRef::<leptos::html::Div>::new();

    let fallback = email.clone();
    let copy = move |_: leptos::ev::MouseEvent| {
        let text = text_ref
            .get_untracked()
            .map(|el| el.inner_text())
            .unwrap_or_else(|| fallback.clone());

        wasm_bindgen_futures::spawn_local(async move {
            let next = match write_clipboard_text(&text).await {
                Ok(()) => CopyStatus::Copied,
                Err(e) => {
                    web_sys::console::warn_1(&format!("copy to clipboard failed: {}", e).into());
                    CopyStatus::Failed
                }
            };
            show_status(status, hide, next);
        });
    };

    view! {
        <div
            class=move || {
                stylance::classes!(css::contact, status.get().is_visible().then_some(css::active))
            }
            on:click=copy
        >
            <div node_ref=text_ref>{email}</div>
            <span class=css::copiedBubble>
                {move || match status.get() {
                    CopyStatus::Failed => view! { <Icon icon=ic::COPY_FAILED /> }.into_any(),
                    _ => view! { <Icon icon=ic::COPIED /> }.into_any(),
                }}
                {move || status.get().label()}
            </span>
        </div>
    }
}
