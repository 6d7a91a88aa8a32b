use urlencoding::{decode, encode};

pub(crate) fn post_href(post_id: &str) -> String {
    format!("/posts/{}", encode(post_id))
}

pub(crate) fn category_href(name: &str) -> String {
    format!("/categories/{}", encode(name))
}

pub(crate) fn tag_href(name: &str) -> String {
    format!("/tags/{}", encode(name))
}

pub(crate) fn tag_rss_href(name: &str) -> String {
    format!("/tags/{}/rss", encode(name))
}

/// In-page anchor for a heading.
pub(crate) fn section_href(section_id: &str) -> String {
    format!("#{section_id}")
}

/// Percent-decode a route segment, keeping the raw value if it is not valid UTF-8.
pub(crate) fn decode_segment(raw: &str) -> String {
    decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_are_encoded() {
        assert_eq!(post_href("post-1"), "/posts/post-1");
        assert_eq!(category_href("deeper one"), "/categories/deeper%20one");
        assert_eq!(tag_href("State Management"), "/tags/State%20Management");
        assert_eq!(tag_rss_href("C/C++"), "/tags/C%2FC%2B%2B/rss");
    }

    #[test]
    fn test_section_href() {
        assert_eq!(section_href("section-2"), "#section-2");
    }

    #[test]
    fn test_decode_segment() {
        assert_eq!(decode_segment("deeper%20one"), "deeper one");
        assert_eq!(decode_segment("React"), "React");
        // Invalid UTF-8 after decoding falls back to the raw segment.
        assert_eq!(decode_segment("%FF"), "%FF");
    }
}
