use recycler::CellNode;

/// The application-level data source.
///
/// Only the count is read, and only to drive `reload`; item content never
/// flows through the engine; it reaches cells exclusively via the fill
/// callback.
pub trait DataSource {
    fn count(&self) -> usize;
}

/// Instantiates one reusable visual node per pool slot.
///
/// Called `display_cell_count + 1` times per reload. Nodes are created from
/// whatever prototype/template the host holds; the engine positions and
/// labels them afterwards.
pub trait CellFactory {
    type Cell: CellNode;

    fn create(&mut self, slot: usize) -> Self::Cell;
}

/// The single normalized scroll-position signal driving a table view.
///
/// Position 0 is the list start; hosts may report negative values during
/// overscroll bounce (the controller clamps them).
pub trait ScrollPositionSource {
    /// Returns the latest position if it changed since the last poll.
    fn poll(&mut self) -> Option<i64>;
}
