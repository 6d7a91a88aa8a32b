use icons::{ChevronRight, Dot};
use leptos::prelude::*;

use crate::components::ui::{Tabs, TabsContent, TabsList, TabsTrigger};
use crate::models::Category;
use crate::routes::{category_href, post_href};
use crate::tree::{children, is_toggle_key, ExpansionState, NodePath, TreeChild};

/// Recursive category tree.
///
/// The expansion map lives here, so it is dropped together with the tree
/// (e.g. when another tab is selected).
#[component]
pub fn PostTree(
    category: Category,
    #[prop(optional)] is_root: bool,
    /// Called after any link inside the tree is followed.
    #[prop(optional_no_strip)]
    on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    let state = RwSignal::new(ExpansionState::new());

    // A non-root top node still needs a toggleable path of its own.
    let path = if is_root {
        NodePath::root()
    } else {
        NodePath::root().child(0)
    };

    tree_node(category, path, state, on_navigate)
}

fn tree_node(
    category: Category,
    path: NodePath,
    state: RwSignal<ExpansionState>,
    on_navigate: Option<Callback<()>>,
) -> AnyView {
    let is_root = path.is_root();
    let name = category.name.clone();
    let key = path.dom_key();
    let path = StoredValue::new(path);
    let category = StoredValue::new(category);

    let expanded = move || state.with(|s| path.with_value(|p| s.is_expanded(p)));
    let children_visible = move || state.with(|s| path.with_value(|p| s.children_visible(p)));
    let toggle = move || {
        state.update(|s| {
            path.with_value(|p| s.toggle(p));
        })
    };
    let navigated = move || {
        if let Some(cb) = on_navigate {
            cb.run(());
        }
    };

    let header = (!is_root).then(|| {
        view! {
            <div class="flex py-1 items-center" data-node=key>
                <div
                    class="cursor-pointer p-1"
                    role="button"
                    tabindex="0"
                    aria-expanded=move || expanded().to_string()
                    aria-label=format!("Expand {} category", name)
                    on:click=move |_| toggle()
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if is_toggle_key(&ev.key()) {
                            // Space would otherwise scroll the page.
                            ev.prevent_default();
                            toggle();
                        }
                    }
                >
                    <span
                        aria-hidden="true"
                        class=move || {
                            if expanded() {
                                "inline-flex transition-transform rotate-90"
                            } else {
                                "inline-flex transition-transform"
                            }
                        }
                    >
                        <ChevronRight class="size-4" />
                    </span>
                </div>
                <a
                    href=category_href(&name)
                    class="ml-1 cursor-pointer flex-grow"
                    on:click=move |_| navigated()
                >
                    {name.clone()}
                </a>
            </div>
        }
    });

    let group_label = category.with_value(|c| format!("{} subcategories and posts", c.name));

    view! {
        <div>
            {header}
            <Show when=children_visible fallback=|| ().into_view()>
                <div
                    class=if is_root { "" } else { "ml-4" }
                    role="group"
                    aria-label=group_label.clone()
                >
                    {move || {
                        category
                            .with_value(|c| {
                                children(c)
                                    .map(|child| match child {
                                        TreeChild::Category(i, sub) => {
                                            let sub_path = path.with_value(|p| p.child(i));
                                            tree_node(sub.clone(), sub_path, state, on_navigate)
                                        }
                                        TreeChild::Post(post) => {
                                            view! {
                                                <a
                                                    href=post_href(&post.id)
                                                    class="flex py-1 text-muted-foreground hover:text-foreground items-center"
                                                    on:click=move |_| navigated()
                                                >
                                                    <Dot />
                                                    {post.title.clone()}
                                                </a>
                                            }
                                                .into_any()
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                    }}
                </div>
            </Show>
        </div>
    }
    .into_any()
}

/// One tab per root category, each rendering its tree.
#[component]
pub fn CategoryTabs(
    categories: Vec<Category>,
    #[prop(into, optional)] class: String,
    #[prop(optional_no_strip)] on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    let default_value = categories
        .first()
        .map(|c| c.name.clone())
        .unwrap_or_default();

    let names: Vec<String> = categories.iter().map(|c| c.name.clone()).collect();

    // Built inside `Tabs` so triggers and panels can reach its context.
    view! {
        <Tabs default_value=default_value class=class>
            <TabsList attr:role="tablist">
                {names
                    .into_iter()
                    .map(|name| {
                        let label = name.clone();
                        view! { <TabsTrigger value=name>{label}</TabsTrigger> }
                    })
                    .collect_view()}
            </TabsList>
            {categories
                .into_iter()
                .map(|c| {
                    let value = c.name.clone();
                    let c = StoredValue::new(c);
                    view! {
                        <TabsContent value=value>
                            {move || {
                                view! {
                                    <PostTree category=c.get_value() is_root=true on_navigate=on_navigate />
                                }
                            }}
                        </TabsContent>
                    }
                })
                .collect_view()}
        </Tabs>
    }
}
