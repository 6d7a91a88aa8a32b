use crate::config::SiteConfig;
use crate::content::{load_site_content, ContentResult};
use crate::models::SiteContent;
use leptos::logging::warn;
use leptos::prelude::*;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

fn document_element() -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
}

/// Keep the `dark` class on `<html>` in sync with the theme.
fn apply_theme(theme: Theme) {
    let Some(root) = document_element() else {
        return;
    };
    if let Err(e) = root
        .class_list()
        .toggle_with_force("dark", theme == Theme::Dark)
    {
        warn!("could not apply theme: {e:?}");
    }
}

#[derive(Clone)]
pub(crate) struct AppState {
    /// Immutable for the lifetime of the page.
    pub content: Arc<SiteContent>,
    pub config: SiteConfig,
    pub theme: RwSignal<Theme>,
}

impl AppState {
    pub fn load() -> ContentResult<Self> {
        let content = load_site_content()?;

        // Respect a `dark` class the host page may already set.
        let initial = if document_element()
            .map(|el| el.class_list().contains("dark"))
            .unwrap_or(false)
        {
            Theme::Dark
        } else {
            Theme::Light
        };

        let theme = RwSignal::new(initial);
        Effect::new(move |_| apply_theme(theme.get()));

        Ok(Self {
            content: Arc::new(content),
            config: SiteConfig::new(),
            theme,
        })
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
