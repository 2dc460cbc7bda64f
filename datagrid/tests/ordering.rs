mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{grid, table};
use datagrid::prelude::*;

fn assert_permutation(order: &[usize], len: usize) {
    let mut sorted = order.to_vec();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..len).collect::<Vec<_>>());
}

// ============================================================================
// Reorder
// ============================================================================

#[test]
fn test_reorder_every_pair_is_a_permutation() {
    for from in 0..5 {
        for to in 0..5 {
            let mut grid = grid(3, GridConfig::new());
            grid.reorder(from, to);
            assert_permutation(grid.column_order(), 5);
        }
    }
}

#[test]
fn test_reorder_keeps_values_under_their_labels() {
    let mut grid = grid(4, GridConfig::new());
    let before = grid.snapshot();

    grid.reorder(1, 4);
    grid.reorder(0, 2);
    let after = grid.snapshot();

    assert_ne!(
        before.columns.iter().map(|c| &c.key).collect::<Vec<_>>(),
        after.columns.iter().map(|c| &c.key).collect::<Vec<_>>()
    );
    for row in 0..4 {
        for key in ["name", "email", "city", "notes"] {
            assert_eq!(before.cell(row, key), after.cell(row, key), "{key}");
        }
    }
    let label_of = |key: &str| after.column(key).map(|c| c.label.clone());
    assert_eq!(label_of("email").as_deref(), Some("Email"));
}

#[test]
fn test_reorder_notifies_observer_with_new_order() {
    let mut grid = grid(2, GridConfig::new());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    grid.on_column_reorder(move |order: &[usize]| sink.borrow_mut().push(order.to_vec()));

    assert!(grid.reorder(3, 1));
    assert!(!grid.reorder(2, 2));

    assert_eq!(*seen.borrow(), vec![vec![0, 3, 1, 2, 4]]);
}

#[test]
fn test_try_reorder_rejects_out_of_range() {
    let mut grid = grid(1, GridConfig::new());
    assert!(matches!(
        grid.try_reorder(0, 9),
        Err(GridError::ColumnOutOfRange { index: 9, count: 5 })
    ));
    assert_eq!(grid.column_order(), &[0, 1, 2, 3, 4]);
}

// ============================================================================
// Drag session
// ============================================================================

#[test]
fn test_drag_over_does_not_mutate_order() {
    let mut grid = grid(2, GridConfig::new());
    grid.drag_start(1);
    grid.drag_over(3);
    grid.drag_over(4);

    assert_eq!(grid.column_order(), &[0, 1, 2, 3, 4]);
    let snapshot = grid.snapshot();
    assert!(snapshot.columns[1].dragging);
    assert!(snapshot.columns[4].drop_target);
    assert!(!snapshot.columns[3].drop_target);
}

#[test]
fn test_drag_leave_only_clears_its_own_target() {
    let mut grid = grid(2, GridConfig::new());
    grid.drag_start(1);
    grid.drag_over(3);
    assert!(!grid.drag_leave(2));
    assert!(grid.snapshot().columns[3].drop_target);
    assert!(grid.drag_leave(3));
    assert!(grid.snapshot().columns.iter().all(|c| !c.drop_target));
}

#[test]
fn test_drop_commits_reorder() {
    let mut grid = grid(2, GridConfig::new());
    grid.handle(GridEvent::DragStart { column: 1 });
    grid.handle(GridEvent::DragOver { column: 3 });
    grid.handle(GridEvent::Drop { column: 3 });

    assert_eq!(grid.column_order(), &[0, 2, 3, 1, 4]);
    assert!(!grid.is_dragging());
    assert!(grid.snapshot().columns.iter().all(|c| !c.drop_target && !c.dragging));
}

#[test]
fn test_drag_end_without_drop_discards() {
    let mut grid = grid(2, GridConfig::new());
    let seen = Rc::new(RefCell::new(0));
    let sink = seen.clone();
    grid.on_column_reorder(move |_: &[usize]| *sink.borrow_mut() += 1);

    grid.handle(GridEvent::DragStart { column: 0 });
    grid.handle(GridEvent::DragOver { column: 2 });
    assert_eq!(grid.handle(GridEvent::DragEnd), EventResult::Consumed);

    assert_eq!(grid.column_order(), &[0, 1, 2, 3, 4]);
    assert_eq!(*seen.borrow(), 0);
}

#[test]
fn test_drop_on_source_is_noop() {
    let mut grid = grid(2, GridConfig::new());
    let seen = Rc::new(RefCell::new(0));
    let sink = seen.clone();
    grid.on_column_reorder(move |_: &[usize]| *sink.borrow_mut() += 1);

    grid.drag_start(2);
    assert!(grid.drop_on(2));
    assert_eq!(grid.column_order(), &[0, 1, 2, 3, 4]);
    assert_eq!(*seen.borrow(), 0);
}

#[test]
fn test_new_drag_replaces_captured_source() {
    let mut grid = grid(2, GridConfig::new());
    grid.drag_start(0);
    grid.drag_start(4);
    grid.drop_on(0);
    assert_eq!(grid.column_order(), &[4, 0, 1, 2, 3]);
}

#[test]
fn test_header_reload_resets_order() {
    let mut grid = grid(2, GridConfig::new());
    grid.reorder(0, 4);

    let mut data = table(2);
    data.headers.pop();
    grid.set_data(data);
    assert_eq!(grid.column_order(), &[0, 1, 2, 3]);
}
