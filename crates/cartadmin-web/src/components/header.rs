//! Header component

use leptos::prelude::*;

/// Header with logo, subtitle, and the hamburger toggle shown below the breakpoint
#[component]
pub fn Header(
    sidebar_open: ReadSignal<bool>,
    set_sidebar_open: WriteSignal<bool>,
    is_mobile: Signal<bool>,
) -> impl IntoView {
    view! {
        <header class="header">
            <Show when=move || is_mobile.get()>
                <button
                    class="hamburger"
                    data-sidebar-toggle=""
                    on:click=move |_| set_sidebar_open.set(!sidebar_open.get_untracked())
                    aria-label="Toggle sidebar"
                    aria-expanded=move || sidebar_open.get().to_string()
                >
                    <span class="hamburger-icon">
                        {move || if sidebar_open.get() { "✕" } else { "☰" }}
                    </span>
                </button>
            </Show>

            <div class="header-content">
                <h1 class="logo">"cartadmin"</h1>
                <p class="subtitle">"OpenCart administration"</p>
            </div>
        </header>
    }
}
