//! View-local colour state.
//!
//! [`ColourStore`] is the single mutable cell a view owns. Writing it replaces
//! the whole collection and then notifies every subscriber, which is how a
//! write schedules a re-projection through the renderer.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::model::ColourCollection;

type Subscriber = Box<dyn Fn(&ColourCollection)>;

struct StoreInner {
    colours: RefCell<ColourCollection>,
    subscribers: RefCell<Vec<Subscriber>>,
}

/// Shared handle to the view's colour collection.
///
/// Cloning the handle shares the same cell. Only the loader writes it.
#[derive(Clone)]
pub struct ColourStore {
    inner: Rc<StoreInner>,
}

impl ColourStore {
    /// Create a store holding an empty collection.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(StoreInner {
                colours: RefCell::new(ColourCollection::new()),
                subscribers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Snapshot of the held collection.
    pub fn get(&self) -> ColourCollection {
        self.inner.colours.borrow().clone()
    }

    /// Run `f` against the held collection without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&ColourCollection) -> R) -> R {
        f(&self.inner.colours.borrow())
    }

    /// Register a callback that runs after every write.
    pub fn subscribe(&self, f: impl Fn(&ColourCollection) + 'static) {
        self.inner.subscribers.borrow_mut().push(Box::new(f));
    }

    /// Replace the held collection wholesale and notify subscribers.
    pub fn replace(&self, colours: ColourCollection) {
        *self.inner.colours.borrow_mut() = colours;

        let colours = self.inner.colours.borrow();
        for subscriber in self.inner.subscribers.borrow().iter() {
            subscriber(&colours);
        }
    }

    /// Weak handle for work that must not keep the view alive.
    pub fn downgrade(&self) -> WeakColourStore {
        WeakColourStore {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl Default for ColourStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Weak counterpart of [`ColourStore`], held by in-flight loads.
#[derive(Clone)]
pub struct WeakColourStore {
    inner: Weak<StoreInner>,
}

impl WeakColourStore {
    /// `None` once the owning view has been torn down.
    pub fn upgrade(&self) -> Option<ColourStore> {
        self.inner.upgrade().map(|inner| ColourStore { inner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColourDescriptor;
    use std::cell::Cell;

    fn collection(css: &[&str]) -> ColourCollection {
        css.iter().map(|c| ColourDescriptor::new(*c)).collect()
    }

    #[test]
    fn test_starts_empty() {
        let store = ColourStore::new();
        assert!(store.get().is_empty());
    }

    #[test]
    fn test_replace_is_wholesale() {
        let store = ColourStore::new();
        store.replace(collection(&["red", "green", "blue"]));
        store.replace(collection(&["black"]));

        assert_eq!(store.get(), collection(&["black"]));
    }

    #[test]
    fn test_subscribers_see_new_state() {
        let store = ColourStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = Rc::clone(&seen);
        store.subscribe(move |colours| seen_clone.borrow_mut().push(colours.len()));

        store.replace(collection(&["a", "b"]));
        store.replace(collection(&[]));

        assert_eq!(*seen.borrow(), vec![2, 0]);
    }

    #[test]
    fn test_subscriber_may_read_store() {
        let store = ColourStore::new();
        let observed = Rc::new(Cell::new(0));

        let reader = store.clone();
        let observed_clone = Rc::clone(&observed);
        store.subscribe(move |_| observed_clone.set(reader.with(|c| c.len())));

        store.replace(collection(&["a", "b", "c"]));
        assert_eq!(observed.get(), 3);
    }

    #[test]
    fn test_weak_handle_dies_with_store() {
        let store = ColourStore::new();
        let weak = store.downgrade();
        assert!(weak.upgrade().is_some());

        drop(store);
        assert!(weak.upgrade().is_none());
    }
}
