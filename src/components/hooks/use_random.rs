use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};

const PREFIX: &str = "blog_ui"; // Must NOT contain "/" or "-"

static COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Unique element id for ARIA wiring, e.g. `tabs_blog_ui_1234`.
pub fn use_random_id_for(element: &str) -> String {
    let mut hasher = DefaultHasher::new();
    COUNTER.fetch_add(1, Ordering::SeqCst).hash(&mut hasher);
    format!("{}_{PREFIX}_{}", element, hasher.finish())
}
