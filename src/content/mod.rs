use crate::models::{Category, Post, SiteContent, TagData};
use leptos::logging::debug_warn;
use std::collections::HashSet;

const SITE_JSON: &str = include_str!("../../content/site.json");

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ContentErrorKind {
    Parse,
    Invalid,
}

#[derive(Clone, Debug)]
pub(crate) struct ContentError {
    pub kind: ContentErrorKind,
    pub message: String,
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ContentError {}

impl ContentError {
    fn parse(e: serde_json::Error) -> Self {
        Self {
            kind: ContentErrorKind::Parse,
            message: format!("site content is not valid JSON: {e}"),
        }
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self {
            kind: ContentErrorKind::Invalid,
            message: message.into(),
        }
    }

    /// Short heading for the startup error card.
    pub fn headline(&self) -> &'static str {
        match self.kind {
            ContentErrorKind::Parse => "Site content could not be read",
            ContentErrorKind::Invalid => "Site content is incomplete",
        }
    }
}

pub(crate) type ContentResult<T> = Result<T, ContentError>;

/// Load the mock content compiled into the binary.
pub(crate) fn load_site_content() -> ContentResult<SiteContent> {
    parse_site_content(SITE_JSON)
}

pub(crate) fn parse_site_content(json: &str) -> ContentResult<SiteContent> {
    let content: SiteContent = serde_json::from_str(json).map_err(ContentError::parse)?;
    validate(&content)?;

    // Sample data reuses post ids across tabs; that is tolerated.
    for id in duplicate_post_ids(&content) {
        debug_warn!("post id {id:?} appears more than once in site content");
    }

    Ok(content)
}

fn validate(content: &SiteContent) -> ContentResult<()> {
    if content.site_name.trim().is_empty() {
        return Err(ContentError::invalid("site name is empty"));
    }

    if content.categories.is_empty() {
        return Err(ContentError::invalid("at least one category tab is required"));
    }

    let mut tab_names = HashSet::new();
    for c in &content.categories {
        if !tab_names.insert(c.name.as_str()) {
            return Err(ContentError::invalid(format!(
                "duplicate category tab {:?}",
                c.name
            )));
        }
    }

    let mut section_ids = HashSet::new();
    for s in &content.article.sections {
        if s.id.trim().is_empty() {
            return Err(ContentError::invalid(format!(
                "article section {:?} has an empty id",
                s.title
            )));
        }
        if !section_ids.insert(s.id.as_str()) {
            return Err(ContentError::invalid(format!(
                "duplicate article section id {:?}",
                s.id
            )));
        }
    }

    Ok(())
}

fn collect_post_ids<'a>(category: &'a Category, out: &mut Vec<&'a str>) {
    for sub in &category.sub_categories {
        collect_post_ids(sub, out);
    }
    out.extend(category.posts.iter().map(|p| p.id.as_str()));
}

/// Post ids that occur more than once inside the category trees.
pub(crate) fn duplicate_post_ids(content: &SiteContent) -> Vec<String> {
    let mut ids = Vec::new();
    for c in &content.categories {
        collect_post_ids(c, &mut ids);
    }

    let mut seen = HashSet::new();
    let mut dups: Vec<String> = Vec::new();
    for id in ids {
        if !seen.insert(id) && !dups.iter().any(|d| d == id) {
            dups.push(id.to_string());
        }
    }
    dups
}

/// Case-insensitive tag lookup.
pub(crate) fn find_tag<'a>(content: &'a SiteContent, name: &str) -> Option<&'a TagData> {
    let needle = name.trim();
    content
        .tags
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(needle))
}

/// Depth-first search across every tab, roots included.
pub(crate) fn find_category<'a>(content: &'a SiteContent, name: &str) -> Option<&'a Category> {
    fn walk<'a>(c: &'a Category, name: &str) -> Option<&'a Category> {
        if c.name == name {
            return Some(c);
        }
        c.sub_categories.iter().find_map(|sub| walk(sub, name))
    }

    content.categories.iter().find_map(|c| walk(c, name))
}

/// First post with this id, looking at recent posts, then the category trees, then tags.
pub(crate) fn find_post<'a>(content: &'a SiteContent, id: &str) -> Option<&'a Post> {
    fn walk<'a>(c: &'a Category, id: &str) -> Option<&'a Post> {
        c.sub_categories
            .iter()
            .find_map(|sub| walk(sub, id))
            .or_else(|| c.posts.iter().find(|p| p.id == id))
    }

    content
        .recent_posts
        .iter()
        .find(|p| p.id == id)
        .or_else(|| content.categories.iter().find_map(|c| walk(c, id)))
        .or_else(|| {
            content
                .tags
                .iter()
                .find_map(|t| t.posts.iter().find(|p| p.id == id))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json(site_name: &str, sections: &str, categories: &str) -> String {
        format!(
            r#"{{
                "site_name": "{site_name}",
                "copyright": "c",
                "article": {{ "title": "t", "intro": "i", "sections": {sections} }},
                "recent_posts": [],
                "categories": {categories},
                "tags": []
            }}"#
        )
    }

    #[test]
    fn test_embedded_content_loads() {
        let content = load_site_content().expect("embedded site content should load");
        assert_eq!(content.site_name, "Blog");
        assert_eq!(content.article.sections.len(), 3);
        let tabs: Vec<&str> = content.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(tabs, vec!["Default", "Date", "Test"]);
        assert!(content.categories[2].posts.is_empty());
    }

    #[test]
    fn test_embedded_content_has_known_duplicate_ids() {
        let content = load_site_content().expect("embedded site content should load");
        let dups = duplicate_post_ids(&content);
        assert!(dups.contains(&"post-1".to_string()));
        assert!(dups.contains(&"deep-post-1".to_string()));
        // Each duplicate is reported once.
        assert_eq!(dups.iter().filter(|d| *d == "post-1").count(), 1);
    }

    #[test]
    fn test_parse_error_kind() {
        let err = parse_site_content("{ not json").expect_err("should fail");
        assert_eq!(err.kind, ContentErrorKind::Parse);
        assert_eq!(err.headline(), "Site content could not be read");
    }

    #[test]
    fn test_empty_site_name_is_invalid() {
        let json = minimal_json(" ", "[]", r#"[{"name": "Default"}]"#);
        let err = parse_site_content(&json).expect_err("should fail");
        assert_eq!(err.kind, ContentErrorKind::Invalid);
    }

    #[test]
    fn test_no_tabs_is_invalid() {
        let json = minimal_json("Blog", "[]", "[]");
        let err = parse_site_content(&json).expect_err("should fail");
        assert_eq!(err.kind, ContentErrorKind::Invalid);
        assert_eq!(err.headline(), "Site content is incomplete");
    }

    #[test]
    fn test_duplicate_tab_is_invalid() {
        let json = minimal_json("Blog", "[]", r#"[{"name": "A"}, {"name": "A"}]"#);
        let err = parse_site_content(&json).expect_err("should fail");
        assert!(err.message.contains("duplicate category tab"));
    }

    #[test]
    fn test_duplicate_section_id_is_invalid() {
        let sections = r#"[
            {"id": "s", "title": "One", "body": ""},
            {"id": "s", "title": "Two", "body": ""}
        ]"#;
        let json = minimal_json("Blog", sections, r#"[{"name": "A"}]"#);
        let err = parse_site_content(&json).expect_err("should fail");
        assert_eq!(err.kind, ContentErrorKind::Invalid);
        assert!(err.to_string().contains("\"s\""));
    }

    #[test]
    fn test_optional_fields_default() {
        let json = minimal_json(
            "Blog",
            "[]",
            r#"[{"name": "A", "posts": [{"id": "p", "title": "P"}]}]"#,
        );
        let content = parse_site_content(&json).expect("should parse");
        let post = &content.categories[0].posts[0];
        assert!(post.excerpt.is_none());
        assert!(post.date.is_none());
        assert!(content.categories[0].sub_categories.is_empty());
        assert!(content.banners.is_empty());
    }

    #[test]
    fn test_find_tag_is_case_insensitive() {
        let content = load_site_content().expect("embedded site content should load");
        assert_eq!(find_tag(&content, "react").map(|t| t.name.as_str()), Some("React"));
        assert!(find_tag(&content, "Elm").is_none());
    }

    #[test]
    fn test_find_category_searches_nested() {
        let content = load_site_content().expect("embedded site content should load");
        let deep = find_category(&content, "deeper one").expect("nested category");
        assert_eq!(deep.posts[0].id, "deep-post-1");
        assert!(find_category(&content, "Date").is_some());
        assert!(find_category(&content, "missing").is_none());
    }

    #[test]
    fn test_find_post_prefers_recent_posts() {
        let content = load_site_content().expect("embedded site content should load");
        assert_eq!(find_post(&content, "post-1").map(|p| p.title.as_str()), Some("Post 1"));
        assert_eq!(find_post(&content, "deep-post-1").map(|p| p.title.as_str()), Some("Deep"));
        assert_eq!(
            find_post(&content, "react-post-2").map(|p| p.title.as_str()),
            Some("Advanced React Patterns")
        );
        assert!(find_post(&content, "nope").is_none());
    }
}
