//! Footer with social links.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::models::FooterLink;

stylance::import_crate_style!(css, "src/components/profile/footer.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let links = ctx.site.with_value(|site| site.footer.clone());

    view! {
        <footer class=css::footer>
            {links
                .into_iter()
                .map(|FooterLink { label, href, icon }| {
                    let title = label.clone();
                    view! {
                        <a
                            class=css::appIcon
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            title=title
                        >
                            <img src=icon alt=label width="20" height="20" />
                        </a>
                    }
                })
                .collect_view()}
        </footer>
    }
}
