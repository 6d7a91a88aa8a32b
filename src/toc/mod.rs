pub(crate) mod observer;

pub(crate) use observer::use_scroll_sync;

use crate::models::Section;
use std::collections::HashMap;

/// Last reported intersection state per section id.
///
/// Observer batches only carry the entries whose state changed, so ids that are
/// absent from a batch keep whatever they had before.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct IntersectionMap {
    states: HashMap<String, bool>,
}

impl IntersectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one observer batch. Ids that are not in `sections` are ignored.
    pub fn apply_batch<I, S>(&mut self, sections: &[Section], batch: I)
    where
        I: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        for (id, intersecting) in batch {
            let id = id.as_ref();
            if sections.iter().any(|s| s.id == id) {
                self.states.insert(id.to_string(), intersecting);
            }
        }
    }

    pub fn is_intersecting(&self, id: &str) -> bool {
        self.states.get(id).copied().unwrap_or(false)
    }
}

/// Index of the section that represents the reading position.
///
/// The section just before the first intersecting heading stays active while
/// its body is on screen; with nothing intersecting the reader is past the
/// last heading. `None` only for an empty list.
pub(crate) fn active_section_index(sections: &[Section], map: &IntersectionMap) -> Option<usize> {
    if sections.is_empty() {
        return None;
    }

    match sections.iter().position(|s| map.is_intersecting(&s.id)) {
        Some(i) => Some(i.saturating_sub(1)),
        None => Some(sections.len() - 1),
    }
}

pub(crate) fn active_section_id(sections: &[Section], map: &IntersectionMap) -> Option<String> {
    active_section_index(sections, map).map(|i| sections[i].id.clone())
}

/// Title shown in the collapsed mobile TOC header.
pub(crate) fn section_title<'a>(sections: &'a [Section], id: Option<&str>) -> Option<&'a str> {
    let id = id?;
    sections
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.title.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(ids: &[&str]) -> Vec<Section> {
        ids.iter()
            .map(|id| Section {
                id: id.to_string(),
                title: id.to_uppercase(),
            })
            .collect()
    }

    fn map_with(sections: &[Section], batch: &[(&str, bool)]) -> IntersectionMap {
        let mut map = IntersectionMap::new();
        map.apply_batch(sections, batch.iter().copied());
        map
    }

    #[test]
    fn test_nothing_intersecting_pins_last() {
        let s = sections(&["s1", "s2", "s3"]);
        let map = IntersectionMap::new();
        assert_eq!(active_section_id(&s, &map).as_deref(), Some("s3"));
    }

    #[test]
    fn test_previous_of_first_intersecting() {
        let s = sections(&["s1", "s2", "s3"]);
        let map = map_with(&s, &[("s2", true)]);
        assert_eq!(active_section_id(&s, &map).as_deref(), Some("s1"));

        let map = map_with(&s, &[("s3", true)]);
        assert_eq!(active_section_index(&s, &map), Some(1));
    }

    #[test]
    fn test_first_intersecting_at_zero_clamps() {
        let s = sections(&["s1", "s2", "s3"]);
        let map = map_with(&s, &[("s1", true), ("s3", true)]);
        assert_eq!(active_section_id(&s, &map).as_deref(), Some("s1"));
    }

    #[test]
    fn test_document_order_not_batch_order() {
        let s = sections(&["s1", "s2", "s3", "s4"]);
        let map = map_with(&s, &[("s4", true), ("s3", true)]);
        // First intersecting in document order is s3.
        assert_eq!(active_section_id(&s, &map).as_deref(), Some("s2"));
    }

    #[test]
    fn test_partial_batches_keep_previous_state() {
        let s = sections(&["s1", "s2", "s3"]);
        let mut map = IntersectionMap::new();
        map.apply_batch(&s, [("s2", true), ("s3", true)]);
        // A later batch mentions only s2 leaving; s3 is still intersecting.
        map.apply_batch(&s, [("s2", false)]);
        assert!(!map.is_intersecting("s2"));
        assert!(map.is_intersecting("s3"));
        assert_eq!(active_section_id(&s, &map).as_deref(), Some("s2"));

        map.apply_batch(&s, [("s3", false)]);
        assert_eq!(active_section_id(&s, &map).as_deref(), Some("s3"));
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let s = sections(&["s1", "s2"]);
        let map = map_with(&s, &[("comments", true)]);
        assert_eq!(map, IntersectionMap::new());
        assert_eq!(active_section_id(&s, &map).as_deref(), Some("s2"));
    }

    #[test]
    fn test_empty_sections_have_no_active() {
        let map = IntersectionMap::new();
        assert_eq!(active_section_index(&[], &map), None);
    }

    #[test]
    fn test_single_section_is_always_active() {
        let s = sections(&["only"]);
        assert_eq!(active_section_index(&s, &IntersectionMap::new()), Some(0));
        assert_eq!(active_section_index(&s, &map_with(&s, &[("only", true)])), Some(0));
    }

    #[test]
    fn test_every_map_state_picks_a_known_section() {
        let s = sections(&["a", "b", "c"]);
        for mask in 0u8..8 {
            let batch: Vec<(&str, bool)> = ["a", "b", "c"]
                .iter()
                .enumerate()
                .map(|(i, id)| (*id, mask & (1 << i) != 0))
                .collect();
            let map = map_with(&s, &batch);
            let idx = active_section_index(&s, &map).expect("non-empty list");
            let expected = match (0..3usize).find(|i| mask & (1 << i) != 0) {
                Some(first) => first.saturating_sub(1),
                None => 2,
            };
            assert_eq!(idx, expected, "mask {mask:03b}");
        }
    }

    #[test]
    fn test_section_title_lookup() {
        let s = sections(&["s1", "s2"]);
        assert_eq!(section_title(&s, Some("s2")), Some("S2"));
        assert_eq!(section_title(&s, Some("zz")), None);
        assert_eq!(section_title(&s, None), None);
    }
}
