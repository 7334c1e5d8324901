use alloc::sync::Arc;

use crate::pool::{CellId, CellNode, CellPool};
use crate::{CellSize, Error, Orientation};

/// A callback fired once per remap to (re)populate a cell's content.
///
/// It must be idempotent and must not assume previous content: it fully
/// overwrites whatever the handle rendered for its prior index. Hosts that
/// need to mutate the node through the shared reference use interior
/// mutability in their cell type.
pub type FillCallback<C> = Arc<dyn Fn(&C, usize) + Send + Sync>;

/// A callback fired when a cell is activated, carrying the logical index the
/// cell was bound to at activation time.
pub type ClickCallback = Arc<dyn Fn(usize) + Send + Sync>;

#[derive(Clone, Copy, Debug)]
struct Geometry {
    orientation: Orientation,
    cell_size: CellSize,
    viewport_extent: u32,
    /// Cell extent along the scroll axis. Always > 0.
    cell_extent: u32,
    /// Cells needed to cover the viewport: `ceil(viewport_extent / cell_extent)`.
    display_cell_count: usize,
}

/// A headless controller for one scrollable list of uniformly sized cells.
///
/// It owns the list geometry and the [`CellPool`], computes the visible index
/// window from scroll positions, and reconciles the pool to match, firing
/// the fill callback exactly once per cell remapped. The pool covers the
/// viewport-filling cell count plus one overscan cell on the leading edge.
///
/// The controller is UI-agnostic: hosts provide nodes through the factory
/// passed to [`reload`](Self::reload), deliver normalized scroll positions to
/// [`on_scroll`](Self::on_scroll), and route activation events to
/// [`on_cell_activated`](Self::on_cell_activated). All operations are
/// synchronous and must be serialized by the host; callbacks must not reenter
/// the controller that invoked them.
pub struct VirtualListController<C> {
    geometry: Option<Geometry>,
    total_count: usize,
    /// Window start of the previous scroll event; the signed delta against
    /// the next window start drives the unit-step reconciliation walk.
    min_index_memo: usize,
    content_extent: u64,
    pool: CellPool<C>,
    on_fill: Option<FillCallback<C>>,
    on_click: Option<ClickCallback>,
}

impl<C: CellNode> Default for VirtualListController<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CellNode> VirtualListController<C> {
    /// Creates an unconfigured controller. Geometry-dependent operations fail
    /// with [`Error::NotConfigured`] until [`configure`](Self::configure) runs.
    pub fn new() -> Self {
        Self {
            geometry: None,
            total_count: 0,
            min_index_memo: 0,
            content_extent: 0,
            pool: CellPool::new(),
            on_fill: None,
            on_click: None,
        }
    }

    /// Creates a controller with geometry already applied.
    pub fn configured(
        orientation: Orientation,
        cell_size: CellSize,
        viewport_extent: u32,
    ) -> Result<Self, Error> {
        let mut c = Self::new();
        c.configure(orientation, cell_size, viewport_extent)?;
        Ok(c)
    }

    /// Establishes (or replaces) the list geometry.
    ///
    /// Fails with [`Error::InvalidGeometry`] if the cell extent along the
    /// scroll axis is zero, before any layout math executes. Re-configuring
    /// does not touch the pool: windowing invariants are only reestablished
    /// by the next [`reload`](Self::reload).
    pub fn configure(
        &mut self,
        orientation: Orientation,
        cell_size: CellSize,
        viewport_extent: u32,
    ) -> Result<(), Error> {
        let cell_extent = cell_size.extent_along(orientation);
        if cell_extent == 0 {
            return Err(Error::InvalidGeometry);
        }
        let display_cell_count = viewport_extent.div_ceil(cell_extent) as usize;
        rdebug!(
            ?orientation,
            cell_extent,
            viewport_extent,
            display_cell_count,
            "VirtualListController::configure"
        );
        self.geometry = Some(Geometry {
            orientation,
            cell_size,
            viewport_extent,
            cell_extent,
            display_cell_count,
        });
        Ok(())
    }

    /// Registers the fill callback. `None` drops fill events silently.
    pub fn set_on_fill(&mut self, on_fill: Option<impl Fn(&C, usize) + Send + Sync + 'static>) {
        self.on_fill = on_fill.map(|f| Arc::new(f) as _);
    }

    /// Registers the click callback. `None` drops activation events silently.
    pub fn set_on_click(&mut self, on_click: Option<impl Fn(usize) + Send + Sync + 'static>) {
        self.on_click = on_click.map(|f| Arc::new(f) as _);
    }

    /// Rebuilds the list for `total_count` items.
    ///
    /// Discards all prior cells and creates `display_cell_count + 1` new ones
    /// via `factory(slot)`, placed at positions `0, extent, 2 * extent, ..`
    /// and bound to indices `0..=display_cell_count`. The fill callback fires
    /// once per initially bound in-range index, ascending; cells bound beyond
    /// `total_count - 1` stay instantiated but are never exposed to it.
    ///
    /// `total_count == 0` is valid and yields an empty, fully-unbound pool
    /// with no fired callbacks.
    pub fn reload(
        &mut self,
        total_count: usize,
        mut factory: impl FnMut(usize) -> C,
    ) -> Result<(), Error> {
        let geometry = self.geometry.ok_or(Error::NotConfigured)?;
        let extent = geometry.cell_extent as u64;

        self.total_count = total_count;
        self.min_index_memo = 0;
        self.content_extent = total_count as u64 * extent;

        let pool_size = if total_count == 0 {
            0
        } else {
            geometry.display_cell_count + 1
        };
        rdebug!(
            total_count,
            pool_size,
            content_extent = self.content_extent,
            "VirtualListController::reload"
        );
        self.pool.initialize(pool_size, |slot| {
            let mut cell = factory(slot);
            cell.set_axis_position(slot as u64 * extent);
            cell
        });

        let filled = pool_size.min(total_count);
        for index in 0..filled {
            let cell = self.pool.get(index)?;
            if let Some(cb) = &self.on_fill {
                cb(cell, index);
            }
        }
        Ok(())
    }

    /// Reconciles the pool against a new normalized scroll position.
    ///
    /// Negative positions (overscroll bounce) are treated as 0, and positions
    /// past the end clamp the window start to the last item. The signed
    /// index delta since the previous call is walked one unit at a time, each
    /// unit performing at most one rebind (and one fill), so a scroll event
    /// costs O(|delta|) with O(1) per step.
    pub fn on_scroll(&mut self, position: i64) -> Result<(), Error> {
        let geometry = self.geometry.ok_or(Error::NotConfigured)?;
        if self.total_count == 0 {
            self.min_index_memo = 0;
            return Ok(());
        }

        let clamped = position.max(0) as u64;
        let min_index =
            ((clamped / geometry.cell_extent as u64) as usize).min(self.total_count - 1);
        rtrace!(
            position,
            min_index,
            memo = self.min_index_memo,
            "VirtualListController::on_scroll"
        );

        if min_index > self.min_index_memo {
            for lo in self.min_index_memo + 1..=min_index {
                self.reconcile(lo, &geometry)?;
            }
        } else if min_index < self.min_index_memo {
            for lo in (min_index..self.min_index_memo).rev() {
                self.reconcile(lo, &geometry)?;
            }
        }
        self.min_index_memo = min_index;
        Ok(())
    }

    /// One reconciliation step at window `[lo, lo + display_cell_count]`.
    ///
    /// Correct only when invoked once per unit of window movement (which
    /// `on_scroll` guarantees): it inspects just the two window ends instead
    /// of re-deriving the whole window.
    fn reconcile(&mut self, lo: usize, geometry: &Geometry) -> Result<(), Error> {
        let hi = (lo + geometry.display_cell_count).min(self.total_count - 1);
        let extent = geometry.cell_extent as u64;

        if !self.pool.is_bound(hi) {
            // Scrolling forward: the trailing index needs content and the
            // cell that left the window at the top is the one to reuse.
            let Some(from) = lo.checked_sub(1) else {
                return Ok(());
            };
            let cell = self.pool.rebind(from, hi, |i| i as u64 * extent)?;
            if let Some(cb) = &self.on_fill {
                cb(cell, hi);
            }
        } else if !self.pool.is_bound(lo) {
            // Scrolling backward: reuse the cell past the trailing edge.
            let cell = self.pool.rebind(hi + 1, lo, |i| i as u64 * extent)?;
            if let Some(cb) = &self.on_fill {
                cb(cell, lo);
            }
        }
        // Both ends bound: the window collapsed against a list boundary and
        // this step needs no rebind.
        Ok(())
    }

    /// Resolves an activated cell to its currently bound index and fires the
    /// click callback.
    ///
    /// The index comes from the binding table at call time, never from a
    /// label the host captured earlier. Unknown or out-of-range ids are
    /// dropped silently: host event delivery may race with rebinding at list
    /// boundaries, and a stale activation must not crash.
    pub fn on_cell_activated(&self, id: CellId) {
        let Some(index) = self.pool.index_of(id) else {
            rwarn!(id = id.index(), "activation for unbound cell dropped");
            return;
        };
        if index >= self.total_count {
            return;
        }
        if let Some(cb) = &self.on_click {
            cb(index);
        }
    }

    pub fn is_configured(&self) -> bool {
        self.geometry.is_some()
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.geometry.map(|g| g.orientation)
    }

    pub fn cell_size(&self) -> Option<CellSize> {
        self.geometry.map(|g| g.cell_size)
    }

    /// Cell extent along the scroll axis; 0 while unconfigured.
    pub fn cell_extent(&self) -> u32 {
        self.geometry.map_or(0, |g| g.cell_extent)
    }

    pub fn viewport_extent(&self) -> u32 {
        self.geometry.map_or(0, |g| g.viewport_extent)
    }

    /// Cells needed to cover the viewport; the pool holds one more.
    pub fn display_cell_count(&self) -> usize {
        self.geometry.map_or(0, |g| g.display_cell_count)
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Scrollable content extent: `total_count * cell_extent`. Hosts size
    /// their scroll container from this after every reload.
    pub fn content_extent(&self) -> u64 {
        self.content_extent
    }

    /// The window start computed by the most recent scroll event.
    pub fn min_index(&self) -> usize {
        self.min_index_memo
    }

    /// The largest useful scroll position (content minus viewport).
    pub fn max_scroll_position(&self) -> u64 {
        let geometry = match self.geometry {
            Some(g) => g,
            None => return 0,
        };
        self.content_extent
            .saturating_sub(geometry.viewport_extent as u64)
    }

    /// Read access to the pool, e.g. to collect `CellId`s after a reload.
    pub fn pool(&self) -> &CellPool<C> {
        &self.pool
    }

    /// Visits the meaningful bindings (index < `total_count`) in unspecified
    /// order. Out-of-range placeholder bindings that exist when the list is
    /// shorter than the pool are skipped.
    pub fn for_each_bound(&self, mut visitor: impl FnMut(usize, CellId, &C)) {
        let total = self.total_count;
        self.pool.for_each(|index, id, cell| {
            if index < total {
                visitor(index, id, cell);
            }
        });
    }
}

impl<C> core::fmt::Debug for VirtualListController<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualListController")
            .field("geometry", &self.geometry)
            .field("total_count", &self.total_count)
            .field("min_index_memo", &self.min_index_memo)
            .field("content_extent", &self.content_extent)
            .finish_non_exhaustive()
    }
}
