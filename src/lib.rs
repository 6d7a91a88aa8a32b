mod app;
mod components;
mod config;
mod content;
mod models;
mod pages;
mod panels;
mod routes;
mod state;
mod toc;
mod tree;

use crate::app::App;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;


// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

#[cfg(test)]
mod tests {
    use crate::content::{find_post, find_tag, load_site_content};
    use crate::routes::{decode_segment, post_href};
    use crate::toc::{active_section_id, section_title, IntersectionMap};
    use crate::tree::{children, TreeChild};

    #[test]
    fn test_bundled_article_drives_the_toc() {
        let content = load_site_content().expect("bundled content should load");
        let sections = content.article.toc_sections();
        assert_eq!(sections.len(), 3);

        // Reader has scrolled so that only the second heading is in the band.
        let mut map = IntersectionMap::new();
        map.apply_batch(
            &sections,
            sections
                .iter()
                .enumerate()
                .map(|(i, s)| (s.id.clone(), i == 1)),
        );
        let active = active_section_id(&sections, &map);
        assert_eq!(active.as_deref(), Some(sections[0].id.as_str()));
        assert_eq!(
            section_title(&sections, active.as_deref()),
            Some(sections[0].title.as_str())
        );
    }

    #[test]
    fn test_every_tree_post_link_resolves() {
        let content = load_site_content().expect("bundled content should load");

        fn walk(c: &crate::models::Category, out: &mut Vec<String>) {
            for child in children(c) {
                match child {
                    TreeChild::Category(_, sub) => walk(sub, out),
                    TreeChild::Post(p) => out.push(post_href(&p.id)),
                }
            }
        }

        let mut hrefs = Vec::new();
        for root in &content.categories {
            walk(root, &mut hrefs);
        }
        assert!(!hrefs.is_empty());

        for href in hrefs {
            let raw = href.trim_start_matches("/posts/");
            assert!(
                find_post(&content, &decode_segment(raw)).is_some(),
                "dangling link {href}"
            );
        }
    }

    #[test]
    fn test_bundled_tags_match_case_insensitively() {
        let content = load_site_content().expect("bundled content should load");
        let first = content.tags.first().expect("at least one tag");
        let upper = first.name.to_uppercase();
        assert_eq!(find_tag(&content, &upper).map(|t| &t.name), Some(&first.name));
    }
}
