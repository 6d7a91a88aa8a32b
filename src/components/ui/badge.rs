use leptos::prelude::*;
use tw_merge::*;

#[component]
pub fn Badge(
    #[prop(into, optional)] variant: Signal<BadgeVariant>,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let merged_class = move || {
        let badge = BadgeClass {
            variant: variant.get(),
        };
        badge.with_class(class.clone())
    };

    view! {
        <span data-name="Badge" class=merged_class>
            {children()}
        </span>
    }
}

/* ========================================================== */
/*                       🧬 STRUCT 🧬                         */
/* ========================================================== */

#[derive(TwClass, Default)]
#[tw(class = "inline-flex items-center rounded-md border px-2.5 py-0.5 text-xs font-semibold transition-colors")]
pub struct BadgeClass {
    variant: BadgeVariant,
}

#[derive(TwVariant)]
pub enum BadgeVariant {
    #[tw(default, class = "border-transparent bg-primary text-primary-foreground hover:bg-primary/80")]
    Default,
    #[tw(class = "border-transparent bg-secondary text-secondary-foreground hover:bg-secondary/80")]
    Secondary,
}
