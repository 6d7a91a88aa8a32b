use serde::{Deserialize, Serialize};

/// A heading-anchored region of the article, listed in the table of contents.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Section {
    pub id: String,
    pub title: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Post {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Recursive post grouping used by the sidebar tree.
///
/// Each category tab is the synthetic root of one tree.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Category {
    pub name: String,
    #[serde(default, rename = "subCategories")]
    pub sub_categories: Vec<Category>,
    #[serde(default)]
    pub posts: Vec<Post>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct RelatedTag {
    pub name: String,
    /// 0.0 to 1.0
    pub similarity: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct TagData {
    pub name: String,
    #[serde(default, rename = "parentTag")]
    pub parent_tag: Option<String>,
    #[serde(default, rename = "childTags")]
    pub child_tags: Vec<String>,
    #[serde(default, rename = "relatedTags")]
    pub related_tags: Vec<RelatedTag>,
    #[serde(default)]
    pub posts: Vec<Post>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Banner {
    pub message: String,
    #[serde(rename = "backgroundColorOnDarkTheme")]
    pub background_color_on_dark_theme: String,
    #[serde(rename = "backgroundColorOnLightTheme")]
    pub background_color_on_light_theme: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Comment {
    pub author: String,
    pub body: String,
}

impl Comment {
    /// Comment bodies may mention the tag being viewed as `{tag}`.
    pub fn body_for_tag(&self, tag: &str) -> String {
        self.body.replace("{tag}", tag)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct ArticleSection {
    pub id: String,
    pub title: String,
    pub body: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Article {
    pub title: String,
    pub intro: String,
    pub sections: Vec<ArticleSection>,
}

impl Article {
    /// TOC entries in document order.
    pub fn toc_sections(&self) -> Vec<Section> {
        self.sections
            .iter()
            .map(|s| Section {
                id: s.id.clone(),
                title: s.title.clone(),
            })
            .collect()
    }
}

/// The whole mock dataset rendered by the site.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct SiteContent {
    pub site_name: String,
    pub copyright: String,
    pub article: Article,
    pub recent_posts: Vec<Post>,
    pub categories: Vec<Category>,
    pub tags: Vec<TagData>,
    #[serde(default)]
    pub banners: Vec<Banner>,
    #[serde(default)]
    pub post_comments: Vec<Comment>,
    #[serde(default)]
    pub tag_comments: Vec<Comment>,
}
