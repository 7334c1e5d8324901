use crate::*;

use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use std::sync::Mutex;

use recycler::{CellNode, CellSize, Orientation};

const TABS: [&str; 26] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s",
    "t", "u", "v", "w", "x", "y", "z",
];
const CARDS: [&str; 6] = ["CARD 0", "CARD 1", "CARD 2", "CARD 3", "CARD 4", "CARD 5"];

#[derive(Debug, Default)]
struct LabelCell {
    label: usize,
    position: u64,
    text: Mutex<String>,
}

impl CellNode for LabelCell {
    fn set_axis_position(&mut self, position: u64) {
        self.position = position;
    }

    fn set_identity_label(&mut self, index: usize) {
        self.label = index;
    }
}

#[derive(Debug, Default)]
struct SimFactory;

impl CellFactory for SimFactory {
    type Cell = LabelCell;

    fn create(&mut self, _slot: usize) -> LabelCell {
        LabelCell::default()
    }
}

struct Labels(Arc<Vec<&'static str>>);

impl DataSource for Labels {
    fn count(&self) -> usize {
        self.0.len()
    }
}

struct SharedLabels(Arc<Mutex<Vec<&'static str>>>);

impl DataSource for SharedLabels {
    fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

#[derive(Clone, Debug, Default)]
struct SimScroll(Arc<Mutex<VecDeque<i64>>>);

impl SimScroll {
    fn push(&self, position: i64) {
        self.0.lock().unwrap().push_back(position);
    }
}

impl ScrollPositionSource for SimScroll {
    fn poll(&mut self) -> Option<i64> {
        self.0.lock().unwrap().pop_front()
    }
}

fn label_view(
    orientation: Orientation,
    cell_size: CellSize,
    viewport_extent: u32,
    labels: &[&'static str],
) -> (TableView<SimFactory, Labels, SimScroll>, SimScroll) {
    let labels: Arc<Vec<&'static str>> = Arc::new(labels.to_vec());
    let scroll = SimScroll::default();
    let mut view = TableView::new(
        orientation,
        cell_size,
        viewport_extent,
        SimFactory,
        Labels(Arc::clone(&labels)),
        scroll.clone(),
    )
    .unwrap();
    view.set_on_fill(Some(move |cell: &LabelCell, index: usize| {
        *cell.text.lock().unwrap() = labels[index].to_string();
    }));
    view.reload().unwrap();
    (view, scroll)
}

fn bound_texts<D: DataSource, S: ScrollPositionSource>(
    view: &TableView<SimFactory, D, S>,
) -> Vec<(usize, String)> {
    let mut out = Vec::new();
    view.controller()
        .for_each_bound(|index, _, cell| out.push((index, cell.text.lock().unwrap().clone())));
    out.sort_unstable();
    out
}

#[test]
fn reload_pulls_count_from_data_source() {
    let (view, _) = label_view(Orientation::Vertical, CellSize::new(80, 50), 120, &TABS);
    assert_eq!(view.controller().total_count(), 26);
    assert_eq!(view.controller().pool().len(), 4);
    view.controller().for_each_bound(|index, _, cell| {
        assert_eq!(cell.label, index);
        assert_eq!(cell.position, index as u64 * 50);
    });
    assert_eq!(
        bound_texts(&view),
        [
            (0, "a".to_string()),
            (1, "b".to_string()),
            (2, "c".to_string()),
            (3, "d".to_string()),
        ]
    );
}

#[test]
fn pump_forwards_scroll_positions() {
    let (mut view, scroll) = label_view(Orientation::Vertical, CellSize::new(80, 50), 120, &TABS);

    assert!(!view.pump().unwrap());

    scroll.push(130);
    assert!(view.pump().unwrap());
    assert_eq!(view.controller().min_index(), 2);
    assert_eq!(
        bound_texts(&view),
        [
            (2, "c".to_string()),
            (3, "d".to_string()),
            (4, "e".to_string()),
            (5, "f".to_string()),
        ]
    );
    assert!(!view.pump().unwrap());
}

#[test]
fn pump_all_drains_the_signal() {
    let (mut view, scroll) = label_view(Orientation::Vertical, CellSize::new(80, 50), 120, &TABS);
    scroll.push(130);
    scroll.push(400);
    scroll.push(0);
    view.pump_all().unwrap();
    assert_eq!(view.controller().min_index(), 0);
    assert_eq!(
        bound_texts(&view),
        [
            (0, "a".to_string()),
            (1, "b".to_string()),
            (2, "c".to_string()),
            (3, "d".to_string()),
        ]
    );
}

#[test]
fn activation_resolves_through_the_view() {
    let (mut view, scroll) = label_view(Orientation::Vertical, CellSize::new(80, 50), 120, &TABS);
    let clicks: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&clicks);
    view.set_on_click(Some(move |index| sink.lock().unwrap().push(index)));

    let id = view.controller().pool().id_of(1).unwrap();
    view.on_cell_activated(id);

    // After a rebind the same slot reports its new index.
    scroll.push(5 * 50);
    view.pump_all().unwrap();
    let index_now = view.controller().pool().index_of(id).unwrap();
    view.on_cell_activated(id);

    assert_eq!(*clicks.lock().unwrap(), [1, index_now]);
}

#[test]
fn horizontal_card_strip() {
    // The card strip from the reference app: 6 cards, scrolled sideways.
    let (mut view, scroll) =
        label_view(Orientation::Horizontal, CellSize::new(100, 80), 250, &CARDS);
    assert_eq!(view.controller().display_cell_count(), 3);
    assert_eq!(
        bound_texts(&view),
        [
            (0, "CARD 0".to_string()),
            (1, "CARD 1".to_string()),
            (2, "CARD 2".to_string()),
            (3, "CARD 3".to_string()),
        ]
    );

    scroll.push(210);
    view.pump_all().unwrap();
    assert_eq!(
        bound_texts(&view),
        [
            (2, "CARD 2".to_string()),
            (3, "CARD 3".to_string()),
            (4, "CARD 4".to_string()),
            (5, "CARD 5".to_string()),
        ]
    );
}

#[test]
fn reload_follows_data_source_growth() {
    let data = Arc::new(Mutex::new(TABS[..2].to_vec()));
    let mut view = TableView::new(
        Orientation::Vertical,
        CellSize::new(80, 50),
        120,
        SimFactory,
        SharedLabels(Arc::clone(&data)),
        SimScroll::default(),
    )
    .unwrap();
    let text_src = Arc::clone(&data);
    view.set_on_fill(Some(move |cell: &LabelCell, index: usize| {
        *cell.text.lock().unwrap() = text_src.lock().unwrap()[index].to_string();
    }));

    view.reload().unwrap();
    assert_eq!(view.controller().total_count(), 2);
    assert_eq!(view.controller().content_extent(), 100);
    assert_eq!(
        bound_texts(&view),
        [(0, "a".to_string()), (1, "b".to_string())]
    );

    *data.lock().unwrap() = TABS.to_vec();
    view.reload().unwrap();
    assert_eq!(view.controller().total_count(), 26);
    assert_eq!(view.controller().content_extent(), 1300);
}
