use icons::{ChevronLeft, ChevronRight, Menu, Rss};
use leptos::prelude::*;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;
use tw_merge::tw_merge;

use crate::components::layout::{BannerStrip, CommentsSection, PanelHeader, SiteFooter, SiteHeader};
use crate::components::post_tree::CategoryTabs;
use crate::components::ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, CardFooter, CardHeader,
    CardTitle,
};
use crate::content::find_tag;
use crate::models::{Post, RelatedTag, TagData};
use crate::panels::use_panel_group;
use crate::routes::{decode_segment, post_href, tag_href, tag_rss_href};
use crate::state::AppContext;

#[derive(Params, PartialEq, Clone, Debug)]
pub struct TagRouteParams {
    pub tag: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr)]
pub(crate) enum TagPanel {
    #[strum(serialize = "mobile-post-list")]
    PostList,
    #[strum(serialize = "mobile-tag-information")]
    TagInformation,
}

impl TagPanel {
    fn dom_id(self) -> &'static str {
        self.into()
    }
}

/// `(href, label)` for each tag name.
fn tag_links<'a>(names: impl IntoIterator<Item = &'a String>) -> Vec<(String, String)> {
    names
        .into_iter()
        .map(|name| (tag_href(name), name.clone()))
        .collect()
}

/// Similarity as a whole percentage, e.g. `0.85` becomes `85%`.
fn similarity_label(r: &RelatedTag) -> String {
    format!("{:.0}%", r.similarity * 100.0)
}

/// Parent, children and related tags of one tag.
#[component]
fn TagInformation(
    tag: TagData,
    #[prop(optional_no_strip)] on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    let navigated = move |_: web_sys::MouseEvent| {
        if let Some(cb) = on_navigate {
            cb.run(());
        }
    };

    let child_tags = if tag.child_tags.is_empty() {
        view! { <p class="text-sm text-muted-foreground">"This tag has no child tags."</p> }.into_any()
    } else {
        let badges = tag_links(&tag.child_tags)
            .into_iter()
            .map(|(href, label)| {
                view! {
                    <a href=href on:click=navigated>
                        <Badge variant=BadgeVariant::Secondary>{label}</Badge>
                    </a>
                }
            })
            .collect_view();
        view! { <div class="flex flex-wrap gap-2">{badges}</div> }.into_any()
    };

    let related = tag
        .related_tags
        .iter()
        .map(|r| {
            let href = tag_href(&r.name);
            let name = r.name.clone();
            let similarity = similarity_label(r);
            view! {
                <li class="flex justify-between">
                    <a href=href class="hover:underline" on:click=navigated>{name}</a>
                    <span class="text-muted-foreground">{similarity}</span>
                </li>
            }
        })
        .collect_view();

    let parent = match tag_links(&tag.parent_tag).pop() {
        Some((href, label)) => {
            view! { <a href=href class="hover:underline" on:click=navigated>{label}</a> }.into_any()
        }
        None => view! { <p class="text-muted-foreground">"None"</p> }.into_any(),
    };
    let rss_href = tag_rss_href(&tag.name);

    view! {
        <div class="space-y-6 text-sm">
            <a href=rss_href class="inline-flex items-center gap-2 hover:underline" on:click=navigated>
                <Rss class="h-4 w-4" />
                "RSS feed"
            </a>
            <div>
                <h3 class="mb-2 font-semibold">"Parent tag"</h3>
                {parent}
            </div>
            <div>
                <h3 class="mb-2 font-semibold">"Child tags"</h3>
                {child_tags}
            </div>
            <div>
                <h3 class="mb-2 font-semibold">"Related tags"</h3>
                <ul class="space-y-1">{related}</ul>
            </div>
        </div>
    }
}

fn tag_posts(posts: Vec<Post>) -> impl IntoView {
    posts
        .into_iter()
        .map(|post| {
            let href = post_href(&post.id);
            let Post { title, excerpt, date, .. } = post;
            view! {
                <Card>
                    <CardHeader>
                        <CardTitle>
                            <a href=href class="hover:underline">{title}</a>
                        </CardTitle>
                    </CardHeader>
                    {excerpt.map(|e| view! { <CardContent>{e}</CardContent> })}
                    {date.map(|d| view! { <CardFooter class="text-xs text-muted-foreground">{d}</CardFooter> })}
                </Card>
            }
        })
        .collect_view()
}

#[component]
pub fn TagPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let content = app_state.0.content.clone();
    let params = use_params::<TagRouteParams>();

    // `/tags` shows the first tag.
    let tag = Memo::new({
        let content = content.clone();
        move |_| match params.get().ok().and_then(|p| p.tag) {
            Some(raw) => find_tag(&content, &decode_segment(&raw)).cloned(),
            None => content.tags.first().cloned(),
        }
    });

    let panels = use_panel_group::<TagPanel>();
    let close_panels = Callback::new(move |_: ()| panels.close());

    let left_expanded = RwSignal::new(true);
    let right_expanded = RwSignal::new(true);

    let categories = StoredValue::new(content.categories.clone());
    let comments = StoredValue::new(content.tag_comments.clone());

    let sticky_class = move || {
        tw_merge!(
            "lg:hidden sticky flex flex-col top-14 z-40 w-full bg-background/95 backdrop-blur supports-[backdrop-filter]:bg-background/60",
            if panels.any_open() { "h-[calc(100vh-3.5rem)]" } else { "" }
        )
    };

    let grid_class = move || {
        let cols = match (left_expanded.get(), right_expanded.get()) {
            (true, true) => "lg:grid-cols-[240px_minmax(0,1fr)_240px]",
            (true, false) => "lg:grid-cols-[240px_minmax(0,1fr)_40px]",
            (false, true) => "lg:grid-cols-[40px_minmax(0,1fr)_240px]",
            (false, false) => "lg:grid-cols-[40px_minmax(0,1fr)_40px]",
        };
        tw_merge!(
            "container mx-auto px-4 flex-1 items-start md:grid md:grid-cols-[220px_minmax(0,1fr)] md:gap-6 lg:gap-10",
            cols
        )
    };

    view! {
        <div class="flex flex-col min-h-screen">
            <SiteHeader />
            <BannerStrip banners=content.banners.clone() />

            <div class=sticky_class>
                <div class="border-b">
                    <div class="container mx-auto px-4">
                        <PanelHeader
                            label="Posts".to_string()
                            expanded=Signal::derive(move || panels.is_open(TagPanel::PostList))
                            controls=TagPanel::PostList.dom_id()
                            on_toggle=Callback::new(move |_| panels.toggle(TagPanel::PostList))
                        />
                    </div>
                </div>
                <Show when=move || panels.is_open(TagPanel::PostList) fallback=|| ().into_view()>
                    <div id=TagPanel::PostList.dom_id() class="flex-1 overflow-y-auto container mx-auto px-4 py-2">
                        <CategoryTabs categories=categories.get_value() on_navigate=Some(close_panels) />
                    </div>
                </Show>

                <div class="border-b">
                    <div class="container mx-auto px-4">
                        <PanelHeader
                            label="Tag Information".to_string()
                            expanded=Signal::derive(move || panels.is_open(TagPanel::TagInformation))
                            controls=TagPanel::TagInformation.dom_id()
                            on_toggle=Callback::new(move |_| panels.toggle(TagPanel::TagInformation))
                        />
                    </div>
                </div>
                <Show when=move || panels.is_open(TagPanel::TagInformation) fallback=|| ().into_view()>
                    <div id=TagPanel::TagInformation.dom_id() class="flex-1 overflow-y-auto container mx-auto px-4 py-2">
                        {move || tag.get().map(|t| view! { <TagInformation tag=t on_navigate=Some(close_panels) /> })}
                    </div>
                </Show>
            </div>

            <div class=grid_class>
                <aside class="hidden md:block sticky top-14 z-30 h-[calc(100vh-3.5rem)] w-full shrink-0 overflow-y-auto border-r">
                    <div class="py-6 pr-4 lg:py-8">
                        <div class="flex items-center justify-between mb-4">
                            <Show when=move || left_expanded.get() fallback=|| ().into_view()>
                                <h2 class="text-lg font-semibold">"Posts"</h2>
                            </Show>
                            <Button
                                variant=ButtonVariant::Ghost
                                size=ButtonSize::Icon
                                attr:aria-label=move || if left_expanded.get() { "Collapse post list" } else { "Expand post list" }
                                attr:aria-expanded=move || left_expanded.get().to_string()
                                on:click=move |_| left_expanded.update(|v| *v = !*v)
                            >
                                <Show when=move || left_expanded.get() fallback=|| view! { <Menu class="h-4 w-4" /> }>
                                    <ChevronLeft class="h-4 w-4" />
                                </Show>
                            </Button>
                        </div>
                        <Show when=move || left_expanded.get() fallback=|| ().into_view()>
                            <CategoryTabs categories=categories.get_value() />
                        </Show>
                    </div>
                </aside>

                <main class="flex w-full flex-col overflow-hidden py-6">
                    {move || match tag.get() {
                        Some(t) => {
                            let heading = format!("Posts tagged \"{}\"", t.name);
                            let TagData { name, posts, .. } = t;
                            view! {
                                <h1 class="text-3xl font-bold mb-6">{heading}</h1>
                                <div class="grid gap-4">{tag_posts(posts)}</div>
                                <CommentsSection comments=comments.get_value() tag=name />
                            }
                                .into_any()
                        }
                        None => view! { <p class="text-xs text-muted-foreground">"Tag not found"</p> }.into_any(),
                    }}
                </main>

                <aside class="hidden text-sm lg:block sticky top-14 h-[calc(100vh-3.5rem)] overflow-y-auto border-l">
                    <div class="py-6 pl-4">
                        <div class="flex items-center justify-between mb-4">
                            <Button
                                variant=ButtonVariant::Ghost
                                size=ButtonSize::Icon
                                attr:aria-label=move || if right_expanded.get() { "Collapse tag information" } else { "Expand tag information" }
                                attr:aria-expanded=move || right_expanded.get().to_string()
                                on:click=move |_| right_expanded.update(|v| *v = !*v)
                            >
                                <Show when=move || right_expanded.get() fallback=|| view! { <Menu class="h-4 w-4" /> }>
                                    <ChevronRight class="h-4 w-4" />
                                </Show>
                            </Button>
                            <Show when=move || right_expanded.get() fallback=|| ().into_view()>
                                <h2 class="text-lg font-semibold">"Tag Information"</h2>
                            </Show>
                        </div>
                        <Show when=move || right_expanded.get() fallback=|| ().into_view()>
                            {move || tag.get().map(|t| view! { <TagInformation tag=t on_navigate=None /> })}
                        </Show>
                    </div>
                </aside>
            </div>

            <SiteFooter />
        </div>
    }
}
