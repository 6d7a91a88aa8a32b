use crate::models::{Category, Post};
use std::collections::HashMap;

/// Position of a category inside one tree: the `sub_categories` index taken at
/// each level, starting from the root. The root itself is the empty path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub(crate) struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Stable DOM-safe key, e.g. `node-0-2`.
    pub fn dom_key(&self) -> String {
        let mut key = String::from("node");
        for i in &self.0 {
            key.push('-');
            key.push_str(&i.to_string());
        }
        key
    }
}

/// Per-node expanded flags for one mounted tree.
///
/// Nodes start collapsed. Each toggle touches exactly one entry, so siblings
/// and descendants keep their own state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ExpansionState {
    expanded: HashMap<NodePath, bool>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, path: &NodePath) -> bool {
        self.expanded.get(path).copied().unwrap_or(false)
    }

    /// Flip one node and return its new state.
    pub fn toggle(&mut self, path: &NodePath) -> bool {
        let next = !self.is_expanded(path);
        self.expanded.insert(path.clone(), next);
        next
    }

    /// The root always shows its children; everything else follows its flag.
    pub fn children_visible(&self, path: &NodePath) -> bool {
        path.is_root() || self.is_expanded(path)
    }
}

pub(crate) enum TreeChild<'a> {
    Category(usize, &'a Category),
    Post(&'a Post),
}

/// Render order for a node's children: every subcategory, then every post.
pub(crate) fn children(category: &Category) -> impl Iterator<Item = TreeChild<'_>> {
    category
        .sub_categories
        .iter()
        .enumerate()
        .map(|(i, c)| TreeChild::Category(i, c))
        .chain(category.posts.iter().map(TreeChild::Post))
}

/// Keys that toggle a disclosure control.
pub(crate) fn is_toggle_key(key: &str) -> bool {
    key == "Enter" || key == " "
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str) -> Post {
        Post {
            id: id.to_string(),
            title: id.to_string(),
            excerpt: None,
            date: None,
        }
    }

    fn cat(name: &str, subs: Vec<Category>, posts: &[&str]) -> Category {
        Category {
            name: name.to_string(),
            sub_categories: subs,
            posts: posts.iter().map(|p| post(p)).collect(),
        }
    }

    fn sample() -> Category {
        cat(
            "Default",
            vec![
                cat("programming", vec![], &["programming-post-1"]),
                cat(
                    "AI",
                    vec![cat("deeper one", vec![], &["deep-post-1"])],
                    &["ai-post-1"],
                ),
            ],
            &["post-1", "post-2"],
        )
    }

    /// What the tree view renders, one line per row.
    fn rendered(root: &Category, state: &ExpansionState) -> Vec<String> {
        fn walk(c: &Category, path: &NodePath, state: &ExpansionState, out: &mut Vec<String>) {
            if !path.is_root() {
                out.push(format!("{}{}", "  ".repeat(path.depth() - 1), c.name));
            }
            if !state.children_visible(path) {
                return;
            }
            for child in children(c) {
                match child {
                    TreeChild::Category(i, sub) => walk(sub, &path.child(i), state, out),
                    TreeChild::Post(p) => {
                        out.push(format!("{}* {}", "  ".repeat(path.depth()), p.id))
                    }
                }
            }
        }

        let mut out = Vec::new();
        walk(root, &NodePath::root(), state, &mut out);
        out
    }

    #[test]
    fn test_root_shows_children_and_nodes_start_collapsed() {
        let state = ExpansionState::new();
        assert_eq!(
            rendered(&sample(), &state),
            vec!["programming", "AI", "* post-1", "* post-2"]
        );
    }

    #[test]
    fn test_subcategories_render_before_posts_recursively() {
        let mut state = ExpansionState::new();
        let ai = NodePath::root().child(1);
        state.toggle(&ai);
        state.toggle(&ai.child(0));
        assert_eq!(
            rendered(&sample(), &state),
            vec![
                "programming",
                "AI",
                "  deeper one",
                "    * deep-post-1",
                "  * ai-post-1",
                "* post-1",
                "* post-2",
            ]
        );
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let mut state = ExpansionState::new();
        let p = NodePath::root().child(0);
        let before = rendered(&sample(), &state);
        assert!(state.toggle(&p));
        assert_ne!(rendered(&sample(), &state), before);
        assert!(!state.toggle(&p));
        assert_eq!(rendered(&sample(), &state), before);
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut state = ExpansionState::new();
        let programming = NodePath::root().child(0);
        let ai = NodePath::root().child(1);
        let deeper = ai.child(0);

        state.toggle(&deeper);
        state.toggle(&programming);
        assert!(state.is_expanded(&deeper));
        assert!(!state.is_expanded(&ai));

        // Collapsing the parent keeps the descendant's own flag.
        state.toggle(&ai);
        state.toggle(&ai);
        assert!(state.is_expanded(&deeper));
        assert!(state.is_expanded(&programming));
    }

    #[test]
    fn test_collapsed_parent_hides_expanded_descendant() {
        let mut state = ExpansionState::new();
        let ai = NodePath::root().child(1);
        state.toggle(&ai.child(0));
        let rows = rendered(&sample(), &state);
        assert!(!rows.iter().any(|r| r.contains("deep-post-1")));
    }

    #[test]
    fn test_root_ignores_toggle_history() {
        let mut state = ExpansionState::new();
        let root = NodePath::root();
        state.toggle(&root);
        assert!(state.children_visible(&root));
        state.toggle(&root);
        assert!(state.children_visible(&root));
    }

    #[test]
    fn test_empty_category_renders_nothing() {
        let empty = cat("Test", vec![], &[]);
        assert!(rendered(&empty, &ExpansionState::new()).is_empty());
    }

    #[test]
    fn test_node_path_keys() {
        assert_eq!(NodePath::root().dom_key(), "node");
        assert_eq!(NodePath::root().child(0).child(2).dom_key(), "node-0-2");
        assert_eq!(NodePath::root().child(3).depth(), 1);
    }

    #[test]
    fn test_toggle_keys() {
        assert!(is_toggle_key("Enter"));
        assert!(is_toggle_key(" "));
        assert!(!is_toggle_key("Tab"));
    }
}
