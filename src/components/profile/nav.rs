//! Section navigation bar.

use leptos::prelude::*;

use crate::models::Section;

stylance::import_crate_style!(css, "src/components/profile/nav.module.css");

#[component]
pub fn Nav(on_select: Callback<Section>) -> impl IntoView {
    view! {
        <header class=css::header>
            <nav class=css::nav>
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <a
                                href="#"
                                on:click=move |ev: leptos::ev::MouseEvent| {
                                    ev.prevent_default();
                                    on_select.run(section);
                                }
                            >
                                {section.as_str()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
