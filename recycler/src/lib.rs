//! A headless cell-recycling engine for virtualized lists.
//!
//! For host-wiring utilities (factory/data-source/scroll-source traits and a
//! ready-made table view), see the `recycler-adapter` crate.
//!
//! Given a scroll position and a fixed cell size, the engine computes which
//! logical item indices are visible, maps a small bounded pool of reusable
//! cells onto those indices, and fires a fill callback once per remapped
//! cell. Item counts are unbounded; the pool only ever holds enough cells to
//! cover the viewport plus one overscan cell, and each scroll event costs one
//! O(1) rebind per unit of window movement.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - node creation (a factory invoked on reload)
//! - a single normalized scroll-position signal
//! - activation (click) events routed by [`CellId`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod error;
mod pool;
mod types;


pub use controller::{ClickCallback, FillCallback, VirtualListController};
pub use error::Error;
pub use pool::{CellId, CellNode, CellPool};
pub use types::{CellSize, Orientation};
