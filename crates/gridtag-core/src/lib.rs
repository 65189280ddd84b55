//! gridtag-core - UI-agnostic selection sync, tag scanning, and sheet model.

pub mod error;
pub mod provider;
pub mod sheet;
pub mod suggest;
pub mod sync;
pub mod tagger;

pub use error::{GridtagError, Result};
pub use provider::GridProvider;
pub use sheet::Sheet;

pub use gridtag_engine::selection::{Bounds, CellRef, Range, SelectionError};
