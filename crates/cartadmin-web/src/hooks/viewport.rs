use cartadmin_core::Breakpoint;
use leptos::leptos_dom::helpers::window_event_listener;
use leptos::prelude::*;

/// Current `window.innerWidth` in CSS px
fn viewport_width() -> u32 {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .map(|width| width as u32)
        .unwrap_or(u32::MAX)
}

/// Whether the viewport is narrower than `breakpoint`, recomputed on every resize
pub fn use_is_mobile(breakpoint: Signal<Breakpoint>) -> Signal<bool> {
    let width = RwSignal::new(viewport_width());

    let handle = window_event_listener(leptos::ev::resize, move |_| {
        width.set(viewport_width());
    });
    on_cleanup(move || handle.remove());

    Signal::derive(move || breakpoint.get().is_mobile(width.get()))
}
