//! Grid provider capability interface.

use gridtag_engine::selection::{Bounds, Range};

/// Capability set a grid widget exposes to the selection engine.
///
/// The engine never reaches for an ambient widget handle; every operation
/// takes the provider it acts on. The provider owns the authoritative
/// selection state.
pub trait GridProvider {
    /// Current grid dimensions. `(0, 0)` means no data is loaded.
    fn bounds(&self) -> Bounds;

    /// Replace the current selection with the given rectangles.
    fn select_ranges(&mut self, ranges: &[Range]);

    /// The current selection, in multi-select order.
    fn selected_ranges(&self) -> Vec<Range>;

    /// Cell text at the given coordinate, if the cell holds anything.
    fn cell_value(&self, row: usize, col: usize) -> Option<String>;
}
