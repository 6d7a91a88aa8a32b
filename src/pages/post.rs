use leptos::prelude::*;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;
use tw_merge::tw_merge;

use super::post_links;
use crate::components::layout::{CommentsSection, PanelHeader, SiteFooter, SiteHeader};
use crate::components::toc::TocList;
use crate::content::find_post;
use crate::panels::use_panel_group;
use crate::routes::decode_segment;
use crate::state::AppContext;
use crate::toc::{section_title, use_scroll_sync};

#[derive(Params, PartialEq, Clone, Debug)]
pub struct PostRouteParams {
    pub post_id: Option<String>,
}

/// Mobile overlay panels on the post page. The string form is the panel's DOM id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr)]
pub(crate) enum PostPanel {
    #[strum(serialize = "mobile-post-list")]
    PostList,
    #[strum(serialize = "mobile-toc")]
    Toc,
}

impl PostPanel {
    fn dom_id(self) -> &'static str {
        self.into()
    }
}

#[component]
pub fn PostPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let content = app_state.0.content.clone();
    let params = use_params::<PostRouteParams>();

    let sections = content.article.toc_sections();
    let active = use_scroll_sync(
        Signal::stored(sections.clone()),
        app_state.0.config.scroll_sync.clone(),
    );
    let panels = use_panel_group::<PostPanel>();

    let close_panels = Callback::new(move |_: ()| panels.close());

    // Known post ids show their own title over the sample article.
    let article_title = {
        let content = content.clone();
        move || {
            params
                .get()
                .ok()
                .and_then(|p| p.post_id)
                .and_then(|raw| find_post(&content, &decode_segment(&raw)).map(|p| p.title.clone()))
                .unwrap_or_else(|| content.article.title.clone())
        }
    };

    let toc_label = Signal::derive({
        let sections = sections.clone();
        move || {
            active.with(|a| {
                section_title(&sections, a.as_deref())
                    .unwrap_or_default()
                    .to_string()
            })
        }
    });

    let sticky_class = move || {
        tw_merge!(
            "lg:hidden sticky flex flex-col top-14 z-40 w-full bg-background/95 backdrop-blur supports-[backdrop-filter]:bg-background/60",
            if panels.any_open() { "h-[calc(100vh-3.5rem)]" } else { "" }
        )
    };

    let article_sections = content
        .article
        .sections
        .iter()
        .map(|s| {
            view! {
                <h2 id=s.id.clone() class="text-2xl font-semibold mt-6 mb-4">{s.title.clone()}</h2>
                <p>{s.body.clone()}</p>
            }
        })
        .collect_view();

    let mobile_posts = content.recent_posts.clone();
    let mobile_sections = sections.clone();

    view! {
        <div class="flex flex-col min-h-screen">
            <SiteHeader />

            // Mobile and tablet post list + TOC
            <div class=sticky_class>
                <div class="md:hidden border-b">
                    <div class="container mx-auto px-4">
                        <PanelHeader
                            label="Recent Posts".to_string()
                            expanded=Signal::derive(move || panels.is_open(PostPanel::PostList))
                            controls=PostPanel::PostList.dom_id()
                            on_toggle=Callback::new(move |_| panels.toggle(PostPanel::PostList))
                        />
                    </div>
                </div>
                <Show when=move || panels.is_open(PostPanel::PostList) fallback=|| ().into_view()>
                    <nav
                        id=PostPanel::PostList.dom_id()
                        class="md:hidden border-b flex-1 overflow-y-auto container mx-auto px-4 py-2 space-y-1"
                    >
                        {post_links(
                            &mobile_posts,
                            "block py-1 text-muted-foreground hover:text-foreground",
                            Some(close_panels),
                        )}
                    </nav>
                </Show>

                <div class="border-b">
                    <div class="container mx-auto px-4">
                        <PanelHeader
                            label=toc_label
                            expanded=Signal::derive(move || panels.is_open(PostPanel::Toc))
                            controls=PostPanel::Toc.dom_id()
                            on_toggle=Callback::new(move |_| panels.toggle(PostPanel::Toc))
                        />
                    </div>
                </div>
                <Show when=move || panels.is_open(PostPanel::Toc) fallback=|| ().into_view()>
                    <div id=PostPanel::Toc.dom_id() class="flex-1 overflow-y-auto container mx-auto px-4">
                        <TocList
                            sections=mobile_sections.clone()
                            active=active
                            class="py-2 space-y-1"
                            link_class="block py-1"
                            active_class="font-semibold"
                            inactive_class="text-muted-foreground"
                            on_navigate=Some(close_panels)
                        />
                    </div>
                </Show>
            </div>

            <div class="container mx-auto px-4 flex-1 items-start md:grid md:grid-cols-[220px_minmax(0,1fr)] md:gap-6 lg:grid-cols-[240px_minmax(0,1fr)_200px] lg:gap-10">
                <aside class="hidden md:block sticky top-14 z-30 h-[calc(100vh-3.5rem)] w-full shrink-0 overflow-y-auto border-r">
                    <div class="py-6 pr-6 lg:py-8">
                        <h2 class="mb-4 text-lg font-semibold">"Recent Posts"</h2>
                        <nav class="flex flex-col space-y-2">
                            {post_links(&content.recent_posts, "hover:underline", None)}
                        </nav>
                    </div>
                </aside>

                <main class="flex w-full flex-col overflow-hidden py-6">
                    <article class="prose dark:prose-invert max-w-none">
                        <h1 class="text-3xl font-bold mb-4">{article_title}</h1>
                        <p>{content.article.intro.clone()}</p>
                        {article_sections}
                    </article>
                    <CommentsSection comments=content.post_comments.clone() />
                </main>

                <aside class="hidden text-sm lg:block">
                    <div class="sticky top-16 -mt-10 max-h-[calc(100vh-4rem)] overflow-y-auto pt-10">
                        <div class="py-6 pl-6">
                            <h2 class="mb-4 text-lg font-semibold">"Table of Contents"</h2>
                            <TocList
                                sections=sections
                                active=active
                                class="space-y-2"
                                link_class="block hover:underline"
                                active_class="font-semibold"
                            />
                        </div>
                    </div>
                </aside>
            </div>

            <SiteFooter />
        </div>
    }
}
