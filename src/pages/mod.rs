mod category;
mod post;
mod tag;

pub use category::CategoryPage;
pub use post::PostPage;
pub use tag::TagPage;

use crate::components::layout::{SiteFooter, SiteHeader};
use crate::models::Post;
use crate::routes::post_href;
use leptos::prelude::*;

/// Plain list of post links.
pub(crate) fn post_links(
    posts: &[Post],
    link_class: &'static str,
    on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    posts
        .iter()
        .map(|post| {
            view! {
                <a
                    href=post_href(&post.id)
                    class=link_class
                    on:click=move |_| {
                        if let Some(cb) = on_navigate {
                            cb.run(());
                        }
                    }
                >
                    {post.title.clone()}
                </a>
            }
        })
        .collect_view()
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex flex-col min-h-screen">
            <SiteHeader />
            <main class="container mx-auto flex-1 px-4 py-8 text-xs text-muted-foreground">"Not found"</main>
            <SiteFooter />
        </div>
    }
}
