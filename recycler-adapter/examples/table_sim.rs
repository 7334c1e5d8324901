// Example: a simulated host driving a vertical tab list through TableView.
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use recycler::{CellNode, CellSize, Orientation};
use recycler_adapter::{CellFactory, DataSource, ScrollPositionSource, TableView};

#[derive(Debug, Default)]
struct TabCell {
    label: usize,
    position: u64,
    text: Mutex<String>,
}

impl CellNode for TabCell {
    fn set_axis_position(&mut self, position: u64) {
        self.position = position;
    }

    fn set_identity_label(&mut self, index: usize) {
        self.label = index;
    }
}

struct TabFactory;

impl CellFactory for TabFactory {
    type Cell = TabCell;

    fn create(&mut self, slot: usize) -> TabCell {
        println!("create node for slot {slot}");
        TabCell::default()
    }
}

struct Tabs(Arc<Vec<String>>);

impl DataSource for Tabs {
    fn count(&self) -> usize {
        self.0.len()
    }
}

#[derive(Clone, Default)]
struct ScrollSim(Arc<Mutex<VecDeque<i64>>>);

impl ScrollPositionSource for ScrollSim {
    fn poll(&mut self) -> Option<i64> {
        self.0.lock().unwrap().pop_front()
    }
}

fn main() -> Result<(), recycler::Error> {
    let tabs: Arc<Vec<String>> = Arc::new(('a'..='z').map(String::from).collect());
    let scroll = ScrollSim::default();

    let mut view = TableView::new(
        Orientation::Vertical,
        CellSize::new(80, 50),
        120,
        TabFactory,
        Tabs(Arc::clone(&tabs)),
        scroll.clone(),
    )?;
    let data = Arc::clone(&tabs);
    view.set_on_fill(Some(move |cell: &TabCell, index: usize| {
        *cell.text.lock().unwrap() = data[index].clone();
        println!("fill item {index} ({})", data[index]);
    }));
    view.set_on_click(Some(|index| println!("clicked item {index}")));
    view.reload()?;

    // The user drags the list down past two rows, then flings back to the top.
    scroll.0.lock().unwrap().extend([60, 130, 0]);
    view.pump_all()?;

    let id = view.controller().pool().id_of(2)?;
    view.on_cell_activated(id);

    view.controller().for_each_bound(|index, _, cell| {
        println!(
            "item {index} (label {}): {:?} @ {}",
            cell.label,
            cell.text.lock().unwrap(),
            cell.position
        );
    });
    Ok(())
}
