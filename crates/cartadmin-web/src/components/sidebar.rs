//! Sidebar navigation: recursive menu entries plus mobile overlay behaviour

use cartadmin_core::{
    is_active, ExpansionStore, IndentTier, Marker, NavModel, NavNode, NavPath, SidebarState,
};
use leptos::html;
use leptos::logging;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use std::sync::Arc;

use super::icons::NavIcon;
use crate::hooks::{closes_on_navigation, use_outside_click};

/// State shared by every entry of one mounted sidebar
#[derive(Clone, Copy)]
struct SidebarContext {
    expansion: RwSignal<ExpansionStore>,
    route: Memo<String>,
    state: Memo<SidebarState>,
    set_open: WriteSignal<bool>,
}

/// Sidebar with the navigation tree
#[component]
pub fn Sidebar(
    model: Arc<NavModel>,
    sidebar_open: ReadSignal<bool>,
    set_sidebar_open: WriteSignal<bool>,
    is_mobile: Signal<bool>,
) -> impl IntoView {
    let state = Memo::new(move |_| SidebarState::resolve(is_mobile.get(), sidebar_open.get()));

    provide_context(SidebarContext {
        expansion: RwSignal::new(ExpansionStore::new()),
        route: use_location().pathname,
        state,
        set_open: set_sidebar_open,
    });

    let aside_ref = NodeRef::<html::Aside>::new();
    use_outside_click(aside_ref, state, set_sidebar_open);

    let entries = model
        .roots()
        .iter()
        .enumerate()
        .map(|(i, node)| view! { <NavItem node=node.clone() path=NavPath::root(i) /> })
        .collect_view();

    view! {
        <>
            // Backdrop overlay for mobile; clicks on it land outside the aside
            <Show when=move || state.get().overlay_visible()>
                <div class="sidebar-backdrop"></div>
            </Show>

            <aside
                node_ref=aside_ref
                class="sidebar"
                class:sidebar-mobile=move || state.get().is_mobile()
                class:sidebar-open=move || state.get().on_screen()
                data-state=move || state.get().to_string()
            >
                <Show when=move || state.get().dismissible()>
                    <button
                        class="sidebar-close"
                        on:click=move |_| set_sidebar_open.set(false)
                        aria-label="Close sidebar"
                    >
                        "✕"
                    </button>
                </Show>

                <nav class="nav">
                    <ul class="nav-list">{entries}</ul>
                </nav>
            </aside>
        </>
    }
}

/// One menu entry and, when expanded, its children
#[component]
fn NavItem(node: NavNode, path: NavPath) -> impl IntoView {
    let ctx = expect_context::<SidebarContext>();
    let level = path.level();
    let link_class = format!("nav-link nav-link--tier-{}", IndentTier::for_level(level).index());
    let marker = Marker::for_node(&node, level);
    let name = node.name.clone();

    let entry = StoredValue::new(node);
    let active = Memo::new(move |_| {
        ctx.route
            .with(|route| entry.with_value(|node| is_active(node, route)))
    });

    if entry.with_value(NavNode::is_branch) {
        let expanded = {
            let path = path.clone();
            Memo::new(move |_| ctx.expansion.with(|store| store.is_expanded(&path)))
        };
        let here = StoredValue::new(path);

        return view! {
            <li class="nav-item" class:nav-item--active=move || active.get()>
                <button
                    class=link_class
                    aria-expanded=move || expanded.get().to_string()
                    on:click=move |_| {
                        ctx.expansion.update(|store| {
                            here.with_value(|path| store.toggle(path));
                        });
                    }
                >
                    <NavMarker marker />
                    <span class="nav-link-label">{name}</span>
                    <span class="nav-chevron" aria-hidden="true">
                        {move || if expanded.get() { "▾" } else { "▸" }}
                    </span>
                </button>

                <Show when=move || expanded.get()>
                    <ul class="nav-children">
                        {move || {
                            entry
                                .with_value(|node| node.children.clone())
                                .into_iter()
                                .enumerate()
                                .map(|(i, child)| {
                                    let path = here.with_value(|path| path.child(i));
                                    view! { <NavItem node=child path /> }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </li>
        }
        .into_any();
    }

    match entry.with_value(|node| node.href.clone()) {
        Some(href) => view! {
            <li class="nav-item" class:nav-item--active=move || active.get()>
                <A
                    href=href
                    attr:class=link_class
                    on:click=move |_| {
                        if closes_on_navigation(ctx.state.get_untracked()) {
                            ctx.set_open.set(false);
                        }
                    }
                >
                    <NavMarker marker />
                    <span class="nav-link-label">{name}</span>
                </A>
            </li>
        }
        .into_any(),
        None => view! {
            <li class="nav-item nav-item--inert">
                <span
                    class=link_class
                    aria-disabled="true"
                    on:click=move |_| {
                        entry.with_value(|node| {
                            logging::warn!("Menu entry '{}' has no target, ignoring click", node.name);
                        });
                    }
                >
                    <NavMarker marker />
                    <span class="nav-link-label">{name}</span>
                </span>
            </li>
        }
        .into_any(),
    }
}

#[component]
fn NavMarker(marker: Marker) -> impl IntoView {
    match marker {
        Marker::Icon(icon) => view! {
            <span class="nav-link-icon"><NavIcon icon /></span>
        }
        .into_any(),
        Marker::Bullet => view! { <span class="nav-bullet" aria-hidden="true">"•"</span> }.into_any(),
        Marker::Blank => view! { <span class="nav-link-icon nav-link-icon--blank"></span> }.into_any(),
    }
}
