// Example: minimal usage. Reload, scroll, inspect the bound window.
use recycler::{CellNode, CellSize, Orientation, VirtualListController};

#[derive(Debug, Default)]
struct Cell {
    label: usize,
    position: u64,
}

impl CellNode for Cell {
    fn set_axis_position(&mut self, position: u64) {
        self.position = position;
    }

    fn set_identity_label(&mut self, index: usize) {
        self.label = index;
    }
}

fn main() -> Result<(), recycler::Error> {
    // 50px rows in a 120px viewport: 3 cells cover it, the pool holds 4.
    let mut list =
        VirtualListController::configured(Orientation::Vertical, CellSize::new(80, 50), 120)?;
    list.set_on_fill(Some(|cell: &Cell, index: usize| {
        println!("fill cell@{} with item {index}", cell.position);
    }));

    list.reload(1_000_000, |_| Cell::default())?;
    println!("content_extent={}", list.content_extent());

    list.on_scroll(123_456)?;
    println!("window starts at {}", list.min_index());
    list.for_each_bound(|index, id, cell| {
        println!("slot {} -> item {index} (label {})", id.index(), cell.label);
    });
    Ok(())
}
