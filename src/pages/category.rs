use leptos::prelude::*;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

use super::post_links;
use crate::components::layout::{SiteFooter, SiteHeader};
use crate::content::find_category;
use crate::routes::{category_href, decode_segment};
use crate::state::AppContext;

#[derive(Params, PartialEq, Clone, Debug)]
pub struct CategoryRouteParams {
    pub name: Option<String>,
}

#[component]
pub fn CategoryPage() -> impl IntoView {
    let content = expect_context::<AppContext>().0.content.clone();
    let params = use_params::<CategoryRouteParams>();

    let category = Memo::new(move |_| {
        params
            .get()
            .ok()
            .and_then(|p| p.name)
            .and_then(|raw| find_category(&content, &decode_segment(&raw)).cloned())
    });

    view! {
        <div class="flex flex-col min-h-screen">
            <SiteHeader />
            <main class="container mx-auto flex-1 px-4 py-8">
                {move || match category.get() {
                    Some(c) => {
                        let subcategories = c
                            .sub_categories
                            .iter()
                            .map(|sub| {
                                view! {
                                    <a href=category_href(&sub.name) class="hover:underline">{sub.name.clone()}</a>
                                }
                            })
                            .collect_view();
                        let empty = c.sub_categories.is_empty() && c.posts.is_empty();
                        view! {
                            <h1 class="text-3xl font-bold mb-6">{c.name.clone()}</h1>
                            <nav class="flex flex-col space-y-2 mb-6">{subcategories}</nav>
                            <nav class="flex flex-col space-y-2">
                                {post_links(&c.posts, "hover:underline", None)}
                            </nav>
                            <Show when=move || empty fallback=|| ().into_view()>
                                <p class="text-sm text-muted-foreground">"No posts in this category yet."</p>
                            </Show>
                        }
                            .into_any()
                    }
                    None => {
                        view! { <p class="text-xs text-muted-foreground">"Category not found"</p> }.into_any()
                    }
                }}
            </main>
            <SiteFooter />
        </div>
    }
}
