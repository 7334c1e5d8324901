/// The axis along which cell positions and the visible window vary.
///
/// Fixed for the lifetime of one controller configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// A 2D cell extent.
///
/// Only the component along the scroll axis drives windowing math; the cross
/// component exists so hosts can size nodes at creation time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

impl CellSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The extent along the scroll axis (height for vertical lists, width for
    /// horizontal lists).
    pub fn extent_along(&self, orientation: Orientation) -> u32 {
        match orientation {
            Orientation::Vertical => self.height,
            Orientation::Horizontal => self.width,
        }
    }

    /// The extent across the scroll axis.
    pub fn cross_extent(&self, orientation: Orientation) -> u32 {
        match orientation {
            Orientation::Vertical => self.width,
            Orientation::Horizontal => self.height,
        }
    }
}
