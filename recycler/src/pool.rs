use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
type BindingMap = HashMap<usize, usize>;
#[cfg(not(feature = "std"))]
type BindingMap = BTreeMap<usize, usize>;

use crate::Error;

/// A reusable host visual node.
///
/// The engine never creates or renders nodes itself; it only repositions them
/// along the scroll axis and relabels which logical index each currently
/// represents. Positions are unsigned distances from the list start; the
/// host applies direction/sign for its own coordinate system.
pub trait CellNode {
    fn set_axis_position(&mut self, position: u64);
    fn set_identity_label(&mut self, index: usize);
}

/// A stable identifier for one pool slot.
///
/// Valid from one `initialize` until the next. Hosts route activation events
/// (clicks) back to the controller by `CellId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId(pub(crate) usize);

impl CellId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A bounded set of reusable cells plus the binding table mapping logical
/// indices to pool slots.
///
/// After `initialize`, no cell is ever created or destroyed; `rebind` is the
/// single mutating primitive and moves exactly one binding at a time. The
/// controller owns the windowing logic; the pool only executes the remaps
/// requested of it.
#[derive(Clone, Debug, Default)]
pub struct CellPool<C> {
    slots: Vec<C>,
    bindings: BindingMap,
}

impl<C: CellNode> CellPool<C> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            bindings: BindingMap::new(),
        }
    }

    /// Drops any existing cells, creates exactly `count` new ones via
    /// `factory(slot)`, and binds logical index `i` to slot `i`.
    ///
    /// Each created cell is labeled with its initial index. `count == 0`
    /// yields an empty, fully-unbound pool.
    pub fn initialize(&mut self, count: usize, mut factory: impl FnMut(usize) -> C) {
        rdebug!(count, "CellPool::initialize");
        self.slots.clear();
        self.bindings.clear();
        self.slots.reserve_exact(count);
        for i in 0..count {
            let mut cell = factory(i);
            cell.set_identity_label(i);
            self.slots.push(cell);
            self.bindings.insert(i, i);
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_bound(&self, index: usize) -> bool {
        self.bindings.contains_key(&index)
    }

    /// Returns the cell currently bound to `index`.
    pub fn get(&self, index: usize) -> Result<&C, Error> {
        let slot = *self.bindings.get(&index).ok_or(Error::NotBound { index })?;
        Ok(&self.slots[slot])
    }

    /// Returns the id of the slot currently bound to `index`.
    pub fn id_of(&self, index: usize) -> Result<CellId, Error> {
        let slot = *self.bindings.get(&index).ok_or(Error::NotBound { index })?;
        Ok(CellId(slot))
    }

    /// Resolves a slot id to its currently bound logical index.
    ///
    /// The lookup goes through the binding table (by identity), so it stays
    /// correct even when the caller holds an index that was rebound since.
    /// The table holds at most `display_cell_count + 1` entries, so a linear
    /// scan is fine.
    pub fn index_of(&self, id: CellId) -> Option<usize> {
        self.bindings
            .iter()
            .find(|&(_, &slot)| slot == id.0)
            .map(|(&index, _)| index)
    }

    /// Relabels the cell bound to `from` so it represents `to` instead.
    ///
    /// Fails with `NotBound` if `from` carries no cell and with
    /// `AlreadyBound` if `to` is still occupied (a rebind must target a free
    /// index). On success the cell is repositioned to `position_fn(to)`,
    /// relabeled, and returned so the caller can refill its content.
    pub fn rebind(
        &mut self,
        from: usize,
        to: usize,
        position_fn: impl FnOnce(usize) -> u64,
    ) -> Result<&C, Error> {
        let slot = *self.bindings.get(&from).ok_or(Error::NotBound { index: from })?;
        if self.bindings.contains_key(&to) {
            return Err(Error::AlreadyBound { index: to });
        }
        self.bindings.remove(&from);
        rtrace!(from, to, slot, "CellPool::rebind");

        let cell = &mut self.slots[slot];
        cell.set_axis_position(position_fn(to));
        cell.set_identity_label(to);
        self.bindings.insert(to, slot);
        Ok(&self.slots[slot])
    }

    /// Visits all current `(index, id, cell)` bindings in unspecified order.
    pub fn for_each(&self, mut visitor: impl FnMut(usize, CellId, &C)) {
        for (&index, &slot) in self.bindings.iter() {
            visitor(index, CellId(slot), &self.slots[slot]);
        }
    }
}
