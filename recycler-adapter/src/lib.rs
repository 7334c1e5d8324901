//! Host-wiring utilities for the `recycler` crate.
//!
//! The `recycler` crate is UI-agnostic and focuses on the core windowing and
//! pool state. This crate provides the small seams a host framework plugs
//! into, with explicit construction instead of global lookup:
//!
//! - [`CellFactory`]: instantiates reusable visual nodes
//! - [`DataSource`]: supplies the logical item count
//! - [`ScrollPositionSource`]: the single normalized scroll signal
//! - [`TableView`]: a controller wired to concrete implementations of all three
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod host;
mod table;

#[cfg(test)]
mod tests;

pub use host::{CellFactory, DataSource, ScrollPositionSource};
pub use table::TableView;
