//! The colour list view.
//!
//! [`ColoursView`] wires the pieces together for one activation: the loader
//! owns the state, every store write re-projects it through the renderer, and
//! the resulting swatches go to a [`SwatchSink`] (the DOM in the browser, a
//! buffer for the native snapshot and tests).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::loader::{LoadState, LoadTask, Loader};
use crate::model::ColourCollection;
use crate::render::{self, Swatch};
use crate::source::ColourSource;
use crate::store::ColourStore;

/// Receives each projection of the colour list.
pub trait SwatchSink {
    /// Replace whatever is displayed with `swatches`.
    fn show(&self, swatches: &[Swatch]);
}

impl<T: SwatchSink + ?Sized> SwatchSink for Rc<T> {
    fn show(&self, swatches: &[Swatch]) {
        (**self).show(swatches)
    }
}

/// One activation of the colour list.
///
/// Dropping the view is teardown: a load still in flight will find the state
/// gone and discard its response. Reactivating means building a new view.
pub struct ColoursView<S> {
    loader: Loader<S>,
    sink: Rc<dyn SwatchSink>,
}

impl<S: ColourSource + 'static> ColoursView<S> {
    /// Build the view and draw its initial (empty) state.
    pub fn new(source: S, sink: impl SwatchSink + 'static) -> Self {
        let sink: Rc<dyn SwatchSink> = Rc::new(sink);
        let store = ColourStore::new();

        let subscriber = Rc::clone(&sink);
        store.subscribe(move |colours| redraw(subscriber.as_ref(), colours));

        let view = Self {
            loader: Loader::with_store(Rc::new(source), store),
            sink,
        };
        view.render();
        view
    }

    /// Lifecycle hook for when the view becomes live.
    ///
    /// Returns the load task on the first call only; spawn it on the local
    /// executor.
    pub fn activate(&mut self) -> Option<LoadTask> {
        self.loader.activate()
    }

    /// Re-project the current state. Never triggers a retrieval.
    pub fn render(&self) {
        self.loader
            .store()
            .with(|colours| redraw(self.sink.as_ref(), colours));
    }

    /// Current projection without touching the sink.
    pub fn swatches(&self) -> Vec<Swatch> {
        self.loader
            .store()
            .with(|colours| render::project(colours.as_slice()))
    }

    pub fn colours(&self) -> ColourCollection {
        self.loader.store().get()
    }

    pub fn state(&self) -> LoadState {
        self.loader.state()
    }
}

fn redraw(sink: &dyn SwatchSink, colours: &ColourCollection) {
    let swatches = render::project(colours.as_slice());
    log::trace!("Rendering {} swatches", swatches.len());
    sink.show(&swatches);
}

/// Sink that keeps the latest projection, for the native snapshot and tests.
#[derive(Default)]
pub struct BufferSink {
    last: RefCell<Vec<Swatch>>,
    draws: Cell<usize>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The swatches from the most recent draw.
    pub fn last(&self) -> Vec<Swatch> {
        self.last.borrow().clone()
    }

    /// How many times the view has drawn into this sink.
    pub fn draws(&self) -> usize {
        self.draws.get()
    }
}

impl SwatchSink for BufferSink {
    fn show(&self, swatches: &[Swatch]) {
        *self.last.borrow_mut() = swatches.to_vec();
        self.draws.set(self.draws.get() + 1);
    }
}
