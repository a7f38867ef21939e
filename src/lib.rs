//! Colours - a browser colour list client
//!
//! Fetches a collection of colours once when the view activates and renders
//! each one as a labelled swatch.

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod loader;
pub mod model;
pub mod render;
pub mod source;
pub mod store;

pub use app::{BufferSink, ColoursView, SwatchSink};
pub use error::RetrievalError;
pub use loader::{LoadState, LoadTask, Loader};
pub use model::{ColourCollection, ColourDescriptor, ColourKind};
pub use render::Swatch;
pub use source::{ColourSource, HttpSource};

// DOM output, browser only
#[cfg(target_arch = "wasm32")]
mod dom;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
