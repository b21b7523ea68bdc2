//! Breadcrumb trail for the current route

use leptos::prelude::*;

/// Labels from the top-level entry down to the active one
#[component]
pub fn Breadcrumbs(trail: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <nav class="breadcrumbs" aria-label="Breadcrumb">
            <a class="breadcrumb-home" href="/">"⌂"</a>
            {move || {
                let trail = trail.get();
                if trail.is_empty() {
                    return view! { <span class="breadcrumb-missing">"(no menu entry)"</span> }
                        .into_any();
                }
                let last = trail.len() - 1;
                trail
                    .into_iter()
                    .enumerate()
                    .map(|(i, label)| {
                        view! {
                            <span class="breadcrumb-separator">" › "</span>
                            <span class="breadcrumb" class:breadcrumb--current={i == last}>
                                {label}
                            </span>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </nav>
    }
}
