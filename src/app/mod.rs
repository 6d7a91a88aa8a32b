use crate::components::ui::{Card, CardContent, CardHeader, CardTitle};
use crate::pages::{CategoryPage, NotFoundPage, PostPage, TagPage};
use crate::state::{AppContext, AppState};
use leptos::logging::error;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    let app_state = match AppState::load() {
        Ok(state) => state,
        Err(e) => {
            error!("failed to load site content: {e}");
            let headline = e.headline();
            let message = e.to_string();
            return view! {
                <div class="container mx-auto px-4 py-8">
                    <Card>
                        <CardHeader>
                            <CardTitle>{headline}</CardTitle>
                        </CardHeader>
                        <CardContent>
                            <p class="text-xs text-muted-foreground">{message}</p>
                        </CardContent>
                    </Card>
                </div>
            }
            .into_any();
        }
    };
    provide_context(AppContext(app_state));

    // Router hooks inside the pages require this <Router>.
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("") view=PostPage />
                <Route path=path!("posts/:post_id") view=PostPage />
                <Route path=path!("tags") view=TagPage />
                <Route path=path!("tags/:tag") view=TagPage />
                <Route path=path!("categories/:name") view=CategoryPage />
            </Routes>
        </Router>
    }
    .into_any()
}
