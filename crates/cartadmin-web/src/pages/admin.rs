//! Admin page for whichever route the router landed on

use cartadmin_core::{trail_for_route, NavModel};
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use std::sync::Arc;

use crate::components::Breadcrumbs;

/// Shows where the current route sits in the menu
#[component]
pub fn AdminPage() -> impl IntoView {
    let model = expect_context::<Arc<NavModel>>();
    let pathname = use_location().pathname;

    let trail = Memo::new(move |_| pathname.with(|route| trail_for_route(&model, route)));
    let title = move || {
        trail
            .with(|trail| trail.last().cloned())
            .unwrap_or_else(|| "Not found".to_string())
    };

    view! {
        <div class="page admin-page">
            <Breadcrumbs trail=trail.into() />
            <h2>{title}</h2>
            <div class="page-content">
                <p>
                    <span class="hint">"Route "</span>
                    <code>{move || pathname.get()}</code>
                </p>
                <Show
                    when=move || trail.with(|trail| !trail.is_empty())
                    fallback=|| view! { <p class="hint">"No menu entry points at this route."</p> }
                >
                    <p>
                        <span class="hint">"Section "</span>
                        {move || trail.with(|trail| trail.join(" › "))}
                    </p>
                </Show>
            </div>
        </div>
    }
}
