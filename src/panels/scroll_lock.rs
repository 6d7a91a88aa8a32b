use leptos::logging::warn;
use std::cell::RefCell;

/// Number of live holders of the document scroll lock.
#[derive(Debug, Default)]
pub(crate) struct LockCounter {
    held: usize,
}

impl LockCounter {
    /// Returns true when this acquisition locked the document.
    pub fn acquire(&mut self) -> bool {
        self.held += 1;
        self.held == 1
    }

    /// Returns true when this release unlocked the document.
    pub fn release(&mut self) -> bool {
        if self.held == 0 {
            return false;
        }
        self.held -= 1;
        self.held == 0
    }

    #[cfg(test)]
    pub fn held(&self) -> usize {
        self.held
    }

    pub fn is_locked(&self) -> bool {
        self.held > 0
    }
}

thread_local! {
    static DOCUMENT_SCROLL: RefCell<LockCounter> = RefCell::new(LockCounter::default());
}

fn set_body_overflow_hidden(hidden: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };

    let style = body.style();
    let res = if hidden {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(e) = res {
        warn!("could not update body overflow: {e:?}");
    }
}

/// One hold on the document scroll lock. Released once, on `release` or drop.
#[derive(Debug)]
pub(crate) struct ScrollLockGuard {
    released: bool,
}

impl ScrollLockGuard {
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if DOCUMENT_SCROLL.with(|c| c.borrow_mut().release()) {
            set_body_overflow_hidden(false);
        }
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.release();
    }
}

/// Suspend document scrolling until every returned guard is released.
pub(crate) fn lock_document_scroll() -> ScrollLockGuard {
    if DOCUMENT_SCROLL.with(|c| c.borrow_mut().acquire()) {
        set_body_overflow_hidden(true);
    }
    ScrollLockGuard { released: false }
}

/// Whether any guard is currently held.
#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) fn document_scroll_locked() -> bool {
    DOCUMENT_SCROLL.with(|c| c.borrow().is_locked())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locks_on_first_and_unlocks_on_last() {
        let mut c = LockCounter::default();
        assert!(c.acquire());
        assert!(!c.acquire());
        assert_eq!(c.held(), 2);
        assert!(!c.release());
        assert!(c.is_locked());
        assert!(c.release());
        assert!(!c.is_locked());
    }

    #[test]
    fn test_release_without_hold_is_noop() {
        let mut c = LockCounter::default();
        assert!(!c.release());
        assert_eq!(c.held(), 0);
        assert!(c.acquire());
    }
}
