use icons::{ChevronDown, House, Moon, Sun, X};
use leptos::prelude::*;

use crate::components::ui::{Alert, AlertDescription, Button, ButtonSize, ButtonVariant, Input, Label};
use crate::models::{Banner, Comment};
use crate::state::{AppContext, Theme};
use crate::tree::is_toggle_key;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let site_name = app_state.0.content.site_name.clone();

    view! {
        <header class="sticky top-0 z-50 w-full border-b bg-background/95 backdrop-blur supports-[backdrop-filter]:bg-background/60">
            <div class="container mx-auto px-4 flex h-14 items-center justify-between">
                <a href="/" class="flex items-center space-x-2">
                    <House class="h-6 w-6" />
                    <span class="font-bold">{site_name}</span>
                </a>
                <nav class="flex items-center space-x-6 text-sm font-medium">
                    <a href="/about">"About"</a>
                    <a href="/posts">"Posts"</a>
                    <a href="/contact">"Contact"</a>
                    <ThemeSwitcher />
                </nav>
            </div>
        </header>
    }
}

#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let theme = expect_context::<AppContext>().0.theme;

    view! {
        <Button
            variant=ButtonVariant::Ghost
            size=ButtonSize::Icon
            attr:data-theme=move || theme.get().as_ref().to_string()
            attr:aria-label=move || format!("Switch to {} theme", theme.get().toggled())
            on:click=move |_| theme.update(|t| *t = t.toggled())
        >
            <Show when=move || theme.get() == Theme::Dark fallback=|| view! { <Moon class="size-4" /> }>
                <Sun class="size-4" />
            </Show>
        </Button>
    }
}

/// Clickable header row of a mobile overlay panel.
#[component]
pub fn PanelHeader(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] expanded: Signal<bool>,
    #[prop(into)] controls: String,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            class="py-2 flex items-center justify-between cursor-pointer"
            role="button"
            tabindex="0"
            aria-expanded=move || expanded.get().to_string()
            aria-controls=controls
            on:click=move |_| on_toggle.run(())
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if is_toggle_key(&ev.key()) {
                    ev.prevent_default();
                    on_toggle.run(());
                }
            }
        >
            <span class="font-medium">{move || label.get()}</span>
            <span
                aria-hidden="true"
                class=move || {
                    if expanded.get() {
                        "inline-flex transition-transform rotate-180"
                    } else {
                        "inline-flex transition-transform"
                    }
                }
            >
                <ChevronDown class="h-4 w-4" />
            </span>
        </div>
    }
}

/// Dismissible banners; a closed banner stays closed for the page's lifetime.
#[component]
pub fn BannerStrip(banners: Vec<Banner>) -> impl IntoView {
    let theme = expect_context::<AppContext>().0.theme;
    let visible: RwSignal<Vec<(usize, Banner)>> =
        RwSignal::new(banners.into_iter().enumerate().collect());

    view! {
        <For
            each=move || visible.get()
            key=|(i, _)| *i
            children=move |(i, banner)| {
                let dark = banner.background_color_on_dark_theme.clone();
                let light = banner.background_color_on_light_theme.clone();
                view! {
                    <div
                        class="w-full py-2"
                        style:background-color=move || {
                            if theme.get() == Theme::Dark { dark.clone() } else { light.clone() }
                        }
                    >
                        <div class="container mx-auto px-4 flex justify-between items-center">
                            <div class="text-white font-semibold">{banner.message}</div>
                            <Button
                                variant=ButtonVariant::Ghost
                                size=ButtonSize::Icon
                                attr:aria-label="Close banner"
                                on:click=move |_| visible.update(|v| v.retain(|(j, _)| *j != i))
                            >
                                <X class="h-4 w-4" />
                            </Button>
                        </div>
                    </div>
                }
            }
        />
    }
}

#[component]
pub fn CommentsSection(
    comments: Vec<Comment>,
    /// Substituted for `{tag}` in comment bodies.
    #[prop(optional, into)]
    tag: Option<String>,
    #[prop(optional, into)] heading_id: Option<String>,
) -> impl IntoView {
    let items = comments
        .into_iter()
        .map(|c| {
            let body = match &tag {
                Some(t) => c.body_for_tag(t),
                None => c.body.clone(),
            };
            view! {
                <div class="bg-muted p-4 rounded-lg mb-4">
                    <p class="font-semibold">{c.author}</p>
                    <p>{body}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="mt-8">
            <h2 id=heading_id class="text-2xl font-bold mb-4">"Comments"</h2>
            {items}
        </section>
    }
}

/// Local check only: something was typed and it has an `@`.
pub(crate) fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.contains('@')
}

/// Newsletter sign-up. There is no backend; submitting only confirms locally.
#[component]
pub fn NewsletterForm() -> impl IntoView {
    let email: RwSignal<String> = RwSignal::new(String::new());
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let subscribed: RwSignal<Option<String>> = RwSignal::new(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = email.get_untracked();
        if is_plausible_email(&value) {
            error.set(None);
            subscribed.set(Some(value.trim().to_string()));
            email.set(String::new());
        } else {
            error.set(Some("Please enter a valid email address.".to_string()));
        }
    };

    view! {
        <form class="flex flex-col gap-2 w-full max-w-xs" on:submit=on_submit>
            <Label html_for="newsletter-email" class="text-xs">"Newsletter"</Label>
            <div class="flex gap-2">
                <Input
                    id="newsletter-email"
                    r#type="email"
                    placeholder="you@example.com"
                    bind_value=email
                    class="h-8 text-sm"
                />
                <Button size=ButtonSize::Sm>"Subscribe"</Button>
            </div>
            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <Alert class="border-destructive/30">
                                <AlertDescription class="text-destructive text-xs">{e}</AlertDescription>
                            </Alert>
                        }
                    })
            }}
            {move || {
                subscribed
                    .get()
                    .map(|addr| {
                        view! {
                            <Alert>
                                <AlertDescription class="text-xs">
                                    {format!("Thanks! {addr} is on the list.")}
                                </AlertDescription>
                            </Alert>
                        }
                    })
            }}
        </form>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let copyright = expect_context::<AppContext>().0.content.copyright.clone();

    view! {
        <footer class="border-t py-6">
            <div class="container mx-auto px-4 flex flex-col items-center justify-between gap-4 md:flex-row">
                <p class="text-center text-sm leading-loose text-muted-foreground md:text-left">
                    {copyright}
                </p>
                <NewsletterForm />
                <nav class="flex items-center space-x-4 text-sm font-medium">
                    <a href="/terms">"Terms"</a>
                    <a href="/privacy">"Privacy"</a>
                </nav>
            </div>
        </footer>
    }
}
