use recycler::{CellId, CellSize, Error, Orientation, VirtualListController};

use crate::{CellFactory, DataSource, ScrollPositionSource};

/// A recycling table view wired to explicit host collaborators.
///
/// This type owns a [`VirtualListController`] together with the cell factory,
/// data source, and scroll-position source it is driven by. Dependencies are
/// injected at construction time, so wiring is visible and testable. The
/// host calls:
/// - [`reload`](Self::reload) after the data set changes
/// - [`pump`](Self::pump) whenever the scroll signal may have moved
/// - [`on_cell_activated`](Self::on_cell_activated) from its input dispatch
pub struct TableView<F: CellFactory, D, S> {
    controller: VirtualListController<F::Cell>,
    factory: F,
    data: D,
    scroll: S,
}

impl<F, D, S> TableView<F, D, S>
where
    F: CellFactory,
    D: DataSource,
    S: ScrollPositionSource,
{
    pub fn new(
        orientation: Orientation,
        cell_size: CellSize,
        viewport_extent: u32,
        factory: F,
        data: D,
        scroll: S,
    ) -> Result<Self, Error> {
        Ok(Self {
            controller: VirtualListController::configured(orientation, cell_size, viewport_extent)?,
            factory,
            data,
            scroll,
        })
    }

    pub fn controller(&self) -> &VirtualListController<F::Cell> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut VirtualListController<F::Cell> {
        &mut self.controller
    }

    pub fn into_controller(self) -> VirtualListController<F::Cell> {
        self.controller
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }

    pub fn set_on_fill(
        &mut self,
        on_fill: Option<impl Fn(&F::Cell, usize) + Send + Sync + 'static>,
    ) {
        self.controller.set_on_fill(on_fill);
    }

    pub fn set_on_click(&mut self, on_click: Option<impl Fn(usize) + Send + Sync + 'static>) {
        self.controller.set_on_click(on_click);
    }

    /// Rebuilds the list from the data source's current count.
    pub fn reload(&mut self) -> Result<(), Error> {
        let count = self.data.count();
        let factory = &mut self.factory;
        self.controller.reload(count, |slot| factory.create(slot))
    }

    /// Polls the scroll source and forwards a changed position to the
    /// controller. Returns whether a position was consumed.
    pub fn pump(&mut self) -> Result<bool, Error> {
        let Some(position) = self.scroll.poll() else {
            return Ok(false);
        };
        self.controller.on_scroll(position)?;
        Ok(true)
    }

    /// Drains the scroll source until it reports no further movement.
    pub fn pump_all(&mut self) -> Result<(), Error> {
        while self.pump()? {}
        Ok(())
    }

    pub fn on_cell_activated(&self, id: CellId) {
        self.controller.on_cell_activated(id);
    }
}

impl<F: CellFactory, D, S> core::fmt::Debug for TableView<F, D, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TableView")
            .field("controller", &self.controller)
            .finish_non_exhaustive()
    }
}
