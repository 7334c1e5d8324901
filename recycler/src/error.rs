/// Errors surfaced by the pool and controller.
///
/// `NotBound`/`AlreadyBound` signal that the binding-table invariant
/// (contiguous window coverage) was already broken before the failing call;
/// callers should treat them as programming errors rather than recover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The cell extent along the scroll axis must be positive.
    #[error("invalid geometry: cell extent along the scroll axis is zero")]
    InvalidGeometry,
    /// A geometry-dependent operation ran before `configure`.
    #[error("controller used before configure")]
    NotConfigured,
    /// No cell is currently bound to the requested index.
    #[error("no cell bound to index {index}")]
    NotBound { index: usize },
    /// A rebind targeted an index that already carries a cell.
    #[error("a cell is already bound to index {index}")]
    AlreadyBound { index: usize },
}
