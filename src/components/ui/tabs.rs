use leptos::context::Provider;
use leptos::prelude::*;
use leptos_ui::clx;
use tw_merge::*;

use crate::components::hooks::use_random::use_random_id_for;

mod components {
    use super::*;
    clx! {TabsList, div, "bg-muted text-muted-foreground inline-flex h-9 w-fit items-center justify-center rounded-lg p-[3px]"}
}

pub use components::*;

#[derive(Clone, Copy)]
struct TabsContext {
    value: RwSignal<String>,
    base_id: StoredValue<String>,
}

impl TabsContext {
    fn trigger_id(&self, value: &str) -> String {
        format!("{}_trigger_{}", self.base_id.get_value(), urlencoding::encode(value))
    }

    fn content_id(&self, value: &str) -> String {
        format!("{}_content_{}", self.base_id.get_value(), urlencoding::encode(value))
    }
}

/// Only the selected tab's content is mounted.
#[component]
pub fn Tabs(
    #[prop(into)] default_value: String,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = TabsContext {
        value: RwSignal::new(default_value),
        base_id: StoredValue::new(use_random_id_for("tabs")),
    };
    let merged_class = tw_merge!("flex flex-col gap-2", class);

    view! {
        <Provider value=ctx>
            <div data-name="Tabs" class=merged_class>
                {children()}
            </div>
        </Provider>
    }
}

#[component]
pub fn TabsTrigger(#[prop(into)] value: String, children: Children) -> impl IntoView {
    let ctx = expect_context::<TabsContext>();
    let value = StoredValue::new(value);
    let is_active = move || ctx.value.get() == value.get_value();

    view! {
        <button
            data-name="TabsTrigger"
            type="button"
            role="tab"
            id=ctx.trigger_id(&value.get_value())
            aria-controls=ctx.content_id(&value.get_value())
            aria-selected=move || is_active().to_string()
            data-state=move || if is_active() { "active" } else { "inactive" }
            class="inline-flex h-[calc(100%-1px)] flex-1 items-center justify-center rounded-md px-2 py-1 text-sm font-medium whitespace-nowrap transition-[color,box-shadow] hover:cursor-pointer data-[state=active]:bg-background data-[state=active]:text-foreground data-[state=active]:shadow-sm"
            on:click=move |_| ctx.value.set(value.get_value())
        >
            {children()}
        </button>
    }
}

#[component]
pub fn TabsContent(#[prop(into)] value: String, children: ChildrenFn) -> impl IntoView {
    let ctx = expect_context::<TabsContext>();
    let value = StoredValue::new(value);

    // Store children so the view macro sees an `Fn` (not an `FnOnce`).
    let children = StoredValue::new(children);

    view! {
        <Show when=move || ctx.value.get() == value.get_value() fallback=|| ().into_view()>
            <div
                data-name="TabsContent"
                role="tabpanel"
                id=ctx.content_id(&value.get_value())
                aria-labelledby=ctx.trigger_id(&value.get_value())
                class="flex-1 outline-none"
            >
                {move || children.with_value(|c| c())}
            </div>
        </Show>
    }
}
