//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::api::{fetch_navigation, ServedMenu};
use crate::components::{Header, Sidebar};
use crate::hooks::use_is_mobile;
use crate::pages::AdminPage;

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    // Mobile sidebar state
    let (sidebar_open, set_sidebar_open) = signal(false);

    // use LocalResource for CSR with non-Send futures
    let navigation = LocalResource::new(fetch_navigation);
    let menu = Memo::new(move |_| {
        navigation.get().map(|result| match result.as_ref() {
            Ok(payload) => ServedMenu::from_response(Ok(payload.clone())),
            Err(e) => ServedMenu::from_response(Err(e.clone())),
        })
    });

    view! {
        <Router>
            {move || match menu.get() {
                Some(menu) => view! { <AdminLayout menu sidebar_open set_sidebar_open /> }.into_any(),
                None => view! { <div class="loading">"Loading menu..."</div> }.into_any(),
            }}
        </Router>
    }
}

#[component]
fn AdminLayout(
    menu: ServedMenu,
    sidebar_open: ReadSignal<bool>,
    set_sidebar_open: WriteSignal<bool>,
) -> impl IntoView {
    let is_mobile = use_is_mobile(Signal::stored(menu.breakpoint));
    provide_context(menu.model.clone());

    view! {
        <div class="app">
            <Header sidebar_open set_sidebar_open is_mobile />
            <div class="layout">
                <Sidebar model=menu.model sidebar_open set_sidebar_open is_mobile />
                <main class="content">
                    <Routes fallback=AdminPage>
                        <Route path=path!("/") view=AdminPage />
                        <Route path=path!("/*any") view=AdminPage />
                    </Routes>
                </main>
            </div>
        </div>
    }
}
