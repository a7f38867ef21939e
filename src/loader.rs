//! Fetch-on-activate colour loading.
//!
//! A [`Loader`] lives for exactly one view activation. The first call to
//! [`Loader::activate`] moves it from `Unloaded` to `Loading` and hands back a
//! [`LoadTask`] for the caller to spawn; every later call returns `None`. When
//! the task completes successfully the store is replaced wholesale and the
//! loader is `Loaded`. A failed retrieval leaves it `Loading` with the empty
//! collection, and there is no error state.
//!
//! The task only holds weak references to the loader's state, so a response
//! that arrives after the view was torn down is dropped on the floor.

use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use crate::source::ColourSource;
use crate::store::ColourStore;

/// Loader lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing requested yet, store is empty
    #[default]
    Unloaded,
    /// Request issued, store still empty
    Loading,
    /// Store holds the retrieved collection (terminal)
    Loaded,
}

impl LoadState {
    /// Get the display name for this state.
    pub fn name(&self) -> &'static str {
        match self {
            LoadState::Unloaded => "Unloaded",
            LoadState::Loading => "Loading",
            LoadState::Loaded => "Loaded",
        }
    }
}

/// The single retrieval of one activation, ready to be spawned.
pub type LoadTask = Pin<Box<dyn Future<Output = ()>>>;

/// Owns the retrieval and the resulting colour state for one activation.
pub struct Loader<S> {
    source: Rc<S>,
    store: ColourStore,
    state: Rc<Cell<LoadState>>,
    activated: bool,
}

impl<S: ColourSource + 'static> Loader<S> {
    /// Create an unloaded loader with its own empty store.
    pub fn new(source: S) -> Self {
        Self::with_store(Rc::new(source), ColourStore::new())
    }

    /// Create an unloaded loader writing into `store`.
    pub fn with_store(source: Rc<S>, store: ColourStore) -> Self {
        Self {
            source,
            store,
            state: Rc::new(Cell::new(LoadState::Unloaded)),
            activated: false,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state.get()
    }

    pub fn store(&self) -> &ColourStore {
        &self.store
    }

    /// Whether the retrieval has already been triggered.
    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Trigger the retrieval if this activation has not done so yet.
    ///
    /// The returned task does not block anything; the caller spawns it on the
    /// local executor and keeps rendering the current (empty) state.
    pub fn activate(&mut self) -> Option<LoadTask> {
        if self.activated {
            log::trace!("Loader already activated, ignoring");
            return None;
        }
        self.activated = true;
        self.state.set(LoadState::Loading);
        log::debug!("Loader: Unloaded -> Loading");

        let source = Rc::clone(&self.source);
        let store = self.store.downgrade();
        let state = Rc::downgrade(&self.state);

        Some(Box::pin(async move {
            let result = source.fetch_colours().await;

            let (Some(store), Some(state)) = (store.upgrade(), state.upgrade()) else {
                log::debug!("View torn down before colours arrived, discarding response");
                return;
            };

            match result {
                Ok(colours) => {
                    log::info!("Loaded {} colours", colours.len());
                    state.set(LoadState::Loaded);
                    store.replace(colours);
                    log::debug!("Loader: Loading -> Loaded");
                }
                Err(e) => {
                    log::warn!("Colour retrieval failed: {}", e);
                }
            }
        }))
    }
}
