//! Not-found page, rendered for any path other than the site root.

use leptos::prelude::*;

use crate::config::APP_NAME;
use crate::utils::dom::set_document_title;

stylance::import_crate_style!(css, "src/components/not_found.module.css");

#[component]
pub fn NotFound() -> impl IntoView {
    set_document_title(&format!("404 · {}", APP_NAME));

    view! {
        <div class=css::page>
            <h1 class=css::code>"404"</h1>
            <p class=css::message>"nothing here."</p>
            <a class=css::home href="/">"back to " {APP_NAME}</a>
        </div>
    }
}
