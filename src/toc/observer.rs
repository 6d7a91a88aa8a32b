use super::{active_section_id, IntersectionMap};
use crate::config::ScrollSyncConfig;
use crate::models::Section;
use leptos::logging::{debug_warn, warn};
use leptos::prelude::*;
use std::cell::Cell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

type BatchCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// An `IntersectionObserver` subscription over the section headings.
///
/// Disconnects on drop. `disconnect` may be called any number of times.
pub(crate) struct SectionObserver {
    observer: web_sys::IntersectionObserver,
    // Must outlive the observer: the browser calls into it.
    _callback: BatchCallback,
    observed: usize,
    disconnected: Cell<bool>,
}

impl SectionObserver {
    /// Start observing every heading whose id is in `sections`.
    ///
    /// `on_active` receives the active section id once per observer batch.
    pub fn observe(
        sections: Vec<Section>,
        config: &ScrollSyncConfig,
        on_active: impl Fn(String) + 'static,
    ) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let ids: Vec<String> = sections.iter().map(|s| s.id.clone()).collect();

        let mut map = IntersectionMap::new();
        let callback: BatchCallback = Closure::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                let batch = entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                    .map(|e| (e.target().id(), e.is_intersecting()));
                map.apply_batch(&sections, batch);

                if let Some(id) = active_section_id(&sections, &map) {
                    on_active(id);
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_root_margin(&config.root_margin());
        options.set_threshold(&JsValue::from_f64(config.threshold));

        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;

        let mut observed = 0;
        for id in &ids {
            match document.get_element_by_id(id) {
                Some(el) => {
                    observer.observe(&el);
                    observed += 1;
                }
                None => debug_warn!("no heading element with id {id:?}"),
            }
        }

        Ok(Self {
            observer,
            _callback: callback,
            observed,
            disconnected: Cell::new(false),
        })
    }

    pub fn observed_count(&self) -> usize {
        self.observed
    }

    #[cfg(all(test, target_arch = "wasm32"))]
    pub fn is_connected(&self) -> bool {
        !self.disconnected.get()
    }

    pub fn disconnect(&self) {
        if !self.disconnected.replace(true) {
            self.observer.disconnect();
        }
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}

/// Track the active section of the current view.
///
/// The subscription is re-acquired whenever `sections` changes (the old one is
/// released first) and released when the owning view is cleaned up.
pub(crate) fn use_scroll_sync(
    sections: Signal<Vec<Section>>,
    config: ScrollSyncConfig,
) -> RwSignal<Option<String>> {
    let active: RwSignal<Option<String>> = RwSignal::new(
        sections
            .get_untracked()
            .first()
            .map(|s| s.id.clone()),
    );
    let handle = StoredValue::new_local(None::<SectionObserver>);

    let release = move || {
        let _ = handle.try_update_value(|h| {
            if let Some(observer) = h.take() {
                observer.disconnect();
            }
        });
    };

    Effect::new(move |_| {
        let list = sections.get();
        release();
        active.set(list.first().map(|s| s.id.clone()));

        if list.is_empty() {
            return;
        }

        match SectionObserver::observe(list, &config, move |id| {
            let _ = active.try_set(Some(id));
        }) {
            Ok(observer) => {
                if observer.observed_count() == 0 {
                    debug_warn!("section observer started with no headings in the document");
                }
                handle.set_value(Some(observer));
            }
            Err(e) => warn!("could not observe section headings: {e:?}"),
        }
    });

    on_cleanup(move || release());

    active
}
