use leptos::prelude::*;
use tw_merge::tw_merge;

use crate::models::Section;
use crate::routes::section_href;

/// Anchor links for each section; the active one gets `active_class`.
#[component]
pub fn TocList(
    sections: Vec<Section>,
    #[prop(into)] active: Signal<Option<String>>,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] link_class: String,
    #[prop(into, optional)] active_class: String,
    #[prop(into, optional)] inactive_class: String,
    #[prop(optional_no_strip)] on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    let links = sections
        .into_iter()
        .map(|section| {
            let id = StoredValue::new(section.id.clone());
            let is_active = move || active.with(|a| id.with_value(|id| a.as_deref() == Some(id.as_str())));

            let link_class = link_class.clone();
            let active_class = active_class.clone();
            let inactive_class = inactive_class.clone();
            let classes = move || {
                if is_active() {
                    tw_merge!(link_class.clone(), active_class.clone())
                } else {
                    tw_merge!(link_class.clone(), inactive_class.clone())
                }
            };

            view! {
                <a
                    href=section_href(&section.id)
                    class=classes
                    aria-current=move || is_active().then_some("location")
                    on:click=move |_| {
                        if let Some(cb) = on_navigate {
                            cb.run(());
                        }
                    }
                >
                    {section.title}
                </a>
            }
        })
        .collect_view();

    view! { <nav class=class>{links}</nav> }
}
