//! Replaceable callback slot.
//!
//! The grid reads the slot at emit time, so whatever callback the caller
//! installed last is the one that runs. Clones share the slot, which lets
//! the caller keep a handle and swap callbacks without touching the grid.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type Handler<T> = Box<dyn FnMut(&T)>;

struct Slot<T: ?Sized> {
    handler: RefCell<Option<Handler<T>>>,
    /// Bumped by every `set`/`clear`.
    version: Cell<u64>,
    /// Version at the start of the running call, if a handler is running.
    running: Cell<Option<u64>>,
}

/// Shared slot holding the most recent callback.
///
/// The handler is taken out of the slot while it runs, so it may freely
/// replace, clear or query its own slot. A replacement installed during the
/// call wins over the handler that installed it.
pub struct LatestCallback<T: ?Sized> {
    slot: Rc<Slot<T>>,
}

impl<T: ?Sized> LatestCallback<T> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            slot: Rc::new(Slot {
                handler: RefCell::new(None),
                version: Cell::new(0),
                running: Cell::new(None),
            }),
        }
    }

    /// Install `handler`, replacing the previous one.
    pub fn set(&self, handler: impl FnMut(&T) + 'static) {
        *self.slot.handler.borrow_mut() = Some(Box::new(handler));
        self.bump();
    }

    /// Remove the current handler.
    pub fn clear(&self) {
        self.slot.handler.borrow_mut().take();
        self.bump();
    }

    pub fn is_set(&self) -> bool {
        self.slot.handler.borrow().is_some()
            || self.slot.running.get() == Some(self.slot.version.get())
    }

    fn bump(&self) {
        self.slot.version.set(self.slot.version.get().wrapping_add(1));
    }

    /// Call the current handler. Returns `false` if none ran.
    ///
    /// Emitting from inside the running handler is skipped.
    pub fn emit(&self, value: &T) -> bool {
        if self.slot.running.get().is_some() {
            log::warn!("callback re-entered while running; skipping emit");
            return false;
        }
        let Some(mut handler) = self.slot.handler.borrow_mut().take() else {
            return false;
        };

        let version = self.slot.version.get();
        self.slot.running.set(Some(version));
        handler(value);
        self.slot.running.set(None);

        // Put it back unless the call installed or cleared a handler.
        if self.slot.version.get() == version {
            *self.slot.handler.borrow_mut() = Some(handler);
        }
        true
    }
}

impl<T: ?Sized> Default for LatestCallback<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for LatestCallback<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T: ?Sized> fmt::Debug for LatestCallback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LatestCallback")
            .field("set", &self.is_set())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_emit_uses_latest_handler() {
        let cb: LatestCallback<[u32]> = LatestCallback::new();
        assert!(!cb.emit(&[1]));

        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let f = first.clone();
        cb.set(move |v: &[u32]| f.set(v.len()));
        let handle = cb.clone();
        let s = second.clone();
        handle.set(move |v: &[u32]| s.set(v.len()));

        assert!(cb.emit(&[1, 2, 3]));
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 3);
    }

    #[test]
    fn test_handler_replaces_itself() {
        let cb: LatestCallback<u32> = LatestCallback::new();
        let seen = Rc::new(Cell::new(0));

        let handle = cb.clone();
        let s = seen.clone();
        cb.set(move |_: &u32| {
            let s = s.clone();
            handle.set(move |v: &u32| s.set(*v * 10));
            assert!(handle.is_set());
        });

        assert!(cb.emit(&1));
        assert_eq!(seen.get(), 0);
        assert!(cb.emit(&2));
        assert_eq!(seen.get(), 20);
        assert!(cb.emit(&3));
        assert_eq!(seen.get(), 30);
    }

    #[test]
    fn test_handler_clears_itself() {
        let cb: LatestCallback<u32> = LatestCallback::new();
        let calls = Rc::new(Cell::new(0));

        let handle = cb.clone();
        let c = calls.clone();
        cb.set(move |_: &u32| {
            assert!(handle.is_set());
            c.set(c.get() + 1);
            handle.clear();
            assert!(!handle.is_set());
        });

        assert!(cb.emit(&1));
        assert!(!cb.is_set());
        assert!(!cb.emit(&2));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_reentrant_emit_is_skipped() {
        let cb: LatestCallback<u32> = LatestCallback::new();
        let inner = Rc::new(Cell::new(None));

        let handle = cb.clone();
        let i = inner.clone();
        cb.set(move |_: &u32| i.set(Some(handle.emit(&0))));

        assert!(cb.emit(&1));
        assert_eq!(inner.get(), Some(false));
        // the handler survives the skipped inner emit
        assert!(cb.is_set());
    }

    #[test]
    fn test_clear() {
        let cb: LatestCallback<str> = LatestCallback::new();
        cb.set(|_: &str| {});
        assert!(cb.is_set());
        cb.clear();
        assert!(!cb.emit("x"));
    }
}
