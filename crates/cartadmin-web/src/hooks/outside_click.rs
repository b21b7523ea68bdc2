use cartadmin_core::{ListenerFactory, ListenerSlot, PointerListener, SidebarState};
use leptos::html;
use leptos::leptos_dom::helpers::{window_event_listener, WindowListenerHandle};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Marks controls that open and close the sidebar themselves (the hamburger)
pub const SIDEBAR_TOGGLE_SELECTOR: &str = "[data-sidebar-toggle]";

/// Where a pointer-down landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Inside the `<aside>`
    Sidebar,
    /// On a sidebar toggle; its own click handler decides
    Toggle,
    Outside,
}

impl PointerTarget {
    pub fn classify(inside_sidebar: bool, on_toggle: bool) -> Self {
        if inside_sidebar {
            PointerTarget::Sidebar
        } else if on_toggle {
            PointerTarget::Toggle
        } else {
            PointerTarget::Outside
        }
    }

    fn of_event(event: &web_sys::PointerEvent, aside: Option<&web_sys::HtmlElement>) -> Self {
        let Some(target) = event.target() else {
            return PointerTarget::Outside;
        };

        let inside_sidebar = target
            .dyn_ref::<web_sys::Node>()
            .zip(aside)
            .is_some_and(|(node, aside)| aside.contains(Some(node)));
        let on_toggle = target
            .dyn_ref::<web_sys::Element>()
            .and_then(|el| el.closest(SIDEBAR_TOGGLE_SELECTOR).ok().flatten())
            .is_some();

        Self::classify(inside_sidebar, on_toggle)
    }
}

/// Whether a pointer-down on `target` dismisses the sidebar in `state`
pub fn dismisses(state: SidebarState, target: PointerTarget) -> bool {
    state.dismissible() && target == PointerTarget::Outside
}

/// Whether following a leaf link also closes the sidebar
pub fn closes_on_navigation(state: SidebarState) -> bool {
    state.dismissible()
}

/// A `pointerdown` listener registered on `window`
struct WindowPointerListener(Option<WindowListenerHandle>);

impl PointerListener for WindowPointerListener {
    fn detach(&mut self) {
        if let Some(handle) = self.0.take() {
            handle.remove();
        }
    }
}

/// Close the sidebar on pointer-down outside `target` while it is open on mobile
///
/// The window listener exists only in [`SidebarState::MobileOpen`]; it is
/// removed when the state leaves it and when the owning component unmounts.
/// Pointer-downs on a [`SIDEBAR_TOGGLE_SELECTOR`] control are left to that control.
pub fn use_outside_click(
    target: NodeRef<html::Aside>,
    state: Memo<SidebarState>,
    set_open: WriteSignal<bool>,
) {
    let factory: ListenerFactory = Box::new(move || {
        let handle = window_event_listener(leptos::ev::pointerdown, move |event| {
            let aside = target.get_untracked();
            let landed = PointerTarget::of_event(&event, aside.as_ref());

            if dismisses(state.get_untracked(), landed) {
                set_open.set(false);
            }
        });
        Box::new(WindowPointerListener(Some(handle))) as Box<dyn PointerListener>
    });

    let slot = StoredValue::new_local(ListenerSlot::new(factory));

    Effect::new(move |_| {
        let current = state.get();
        slot.update_value(|slot| slot.reconcile(current));
    });

    // Dropping the slot detaches a live listener
    on_cleanup(move || slot.update_value(|slot| *slot = ListenerSlot::disabled()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_prefers_sidebar_then_toggle() {
        assert_eq!(PointerTarget::classify(true, false), PointerTarget::Sidebar);
        assert_eq!(PointerTarget::classify(true, true), PointerTarget::Sidebar);
        assert_eq!(PointerTarget::classify(false, true), PointerTarget::Toggle);
        assert_eq!(PointerTarget::classify(false, false), PointerTarget::Outside);
    }

    #[test]
    fn test_only_outside_pointer_down_dismisses_open_overlay() {
        let open = SidebarState::MobileOpen;
        assert!(dismisses(open, PointerTarget::Outside));
        assert!(!dismisses(open, PointerTarget::Sidebar));
        assert!(!dismisses(open, PointerTarget::Toggle));
    }

    #[test]
    fn test_hamburger_tap_leaves_state_to_click_handler() {
        // pointerdown on the toggle must not close, so the click's flip closes exactly once
        let mut open = true;
        let state = SidebarState::resolve(true, open);
        if dismisses(state, PointerTarget::classify(false, true)) {
            open = false;
        }
        open = !open;
        assert!(!open);
    }

    #[test]
    fn test_nothing_dismisses_outside_mobile_open() {
        for state in [SidebarState::Desktop, SidebarState::MobileClosed] {
            for target in [PointerTarget::Sidebar, PointerTarget::Toggle, PointerTarget::Outside] {
                assert!(!dismisses(state, target), "{state} / {target:?}");
            }
            assert!(!closes_on_navigation(state));
        }
        assert!(closes_on_navigation(SidebarState::MobileOpen));
    }
}
