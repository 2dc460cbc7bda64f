//! Document-level pointer listeners used by resize sessions.
//!
//! A resize keeps tracking the pointer after it leaves the handle, so the
//! host must route every pointer-move and pointer-up in the document to the
//! grid while a session is active. [`ListenerGuard`] ties that
//! registration to the session's lifetime: dropping the guard always
//! detaches the listeners and restores the cursor.

use std::fmt;
use std::rc::Rc;

use serde::Serialize;

/// Cursor the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorHint {
    #[default]
    Default,
    ColResize,
}

/// Handle for one attached listener pair (move + up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Host-side hooks for global pointer capture.
///
/// A browser binding would attach `mousemove`/`mouseup` on the document.
pub trait PointerHost {
    /// Start routing document pointer-move/up events to the grid.
    fn attach(&self) -> ListenerId;

    /// Stop routing events for `id`.
    fn detach(&self, id: ListenerId);

    /// Change the document cursor.
    fn set_cursor(&self, _cursor: CursorHint) {}
}

/// Host that does nothing, for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHost;

impl PointerHost for NoopHost {
    fn attach(&self) -> ListenerId {
        ListenerId(0)
    }

    fn detach(&self, _id: ListenerId) {}
}

/// Attached listeners, released on drop.
pub struct ListenerGuard {
    host: Rc<dyn PointerHost>,
    id: ListenerId,
}

impl ListenerGuard {
    /// Attach listeners and switch to the resize cursor.
    pub fn acquire(host: Rc<dyn PointerHost>) -> Self {
        let id = host.attach();
        host.set_cursor(CursorHint::ColResize);
        log::debug!("pointer listeners attached ({:?})", id);
        Self { host, id }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.host.detach(self.id);
        self.host.set_cursor(CursorHint::Default);
        log::debug!("pointer listeners detached ({:?})", self.id);
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    #[derive(Default)]
    struct CountingHost {
        next: Cell<u64>,
        active: RefCell<Vec<ListenerId>>,
        cursor: Cell<CursorHint>,
    }

    impl PointerHost for CountingHost {
        fn attach(&self) -> ListenerId {
            let id = ListenerId(self.next.get());
            self.next.set(self.next.get() + 1);
            self.active.borrow_mut().push(id);
            id
        }

        fn detach(&self, id: ListenerId) {
            self.active.borrow_mut().retain(|&active| active != id);
        }

        fn set_cursor(&self, cursor: CursorHint) {
            self.cursor.set(cursor);
        }
    }

    #[test]
    fn test_guard_releases_on_drop() {
        let host = Rc::new(CountingHost::default());
        let guard = ListenerGuard::acquire(host.clone());
        assert_eq!(host.active.borrow().len(), 1);
        assert_eq!(host.cursor.get(), CursorHint::ColResize);

        drop(guard);
        assert!(host.active.borrow().is_empty());
        assert_eq!(host.cursor.get(), CursorHint::Default);
    }
}
