pub(crate) mod scroll_lock;

pub(crate) use scroll_lock::{lock_document_scroll, ScrollLockGuard};

use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;

/// Which of a set of mutually exclusive overlay panels is open, if any.
///
/// Unlike tree nodes, panels do not keep independent flags: opening one
/// replaces whichever was open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PanelGroup<P> {
    open: Option<P>,
}

impl<P> Default for PanelGroup<P> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<P: Copy + PartialEq> PanelGroup<P> {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn open_panel(&self) -> Option<P> {
        self.open
    }

    pub fn is_open(&self, panel: P) -> bool {
        self.open == Some(panel)
    }

    pub fn any_open(&self) -> bool {
        self.open.is_some()
    }

    /// Open `panel`, or close it if it is the one already open.
    pub fn toggle(&mut self, panel: P) {
        self.open = if self.is_open(panel) { None } else { Some(panel) };
    }

    pub fn close(&mut self) {
        self.open = None;
    }
}

/// Reactive handle to a page's panel group.
#[derive(Clone, Copy)]
pub(crate) struct PanelGroupHandle<P: Send + Sync + 'static> {
    state: RwSignal<PanelGroup<P>>,
}

impl<P: Copy + PartialEq + Send + Sync + 'static> PanelGroupHandle<P> {
    pub fn is_open(&self, panel: P) -> bool {
        self.state.with(|g| g.is_open(panel))
    }

    pub fn any_open(&self) -> bool {
        self.state.with(|g| g.any_open())
    }

    pub fn toggle(&self, panel: P) {
        self.state.update(|g| g.toggle(panel));
    }

    pub fn close(&self) {
        self.state.update(|g| g.close());
    }
}

/// Hold exactly one guard while any panel is open.
///
/// Switching from one open panel to another keeps the existing guard.
fn sync_lock<G>(any_open: bool, held: &mut Option<G>, acquire: impl FnOnce() -> G) {
    match (any_open, held.is_some()) {
        (true, false) => *held = Some(acquire()),
        (false, true) => {
            // Dropping the guard releases its hold.
            held.take();
        }
        _ => {}
    }
}

/// Panel group for the current view.
///
/// Document scrolling is locked while any panel is open and unlocked when the
/// group closes or the view is cleaned up. Escape closes the open panel.
pub(crate) fn use_panel_group<P>() -> PanelGroupHandle<P>
where
    P: Copy + PartialEq + Send + Sync + 'static,
{
    let handle = PanelGroupHandle {
        state: RwSignal::new(PanelGroup::new()),
    };
    let guard: StoredValue<Option<ScrollLockGuard>> = StoredValue::new(None);

    Effect::new(move |_| {
        let any_open = handle.any_open();
        guard.update_value(|g| sync_lock(any_open, g, lock_document_scroll));
    });

    let escape = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && handle.state.try_with_untracked(|g| g.any_open()) == Some(true)
        {
            handle.close();
        }
    });

    on_cleanup(move || {
        escape.remove();
        let _ = guard.try_update_value(|g| {
            if let Some(mut held) = g.take() {
                held.release();
            }
        });
    });

    handle
}
