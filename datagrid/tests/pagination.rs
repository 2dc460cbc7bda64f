mod common;

use common::{grid, table};
use datagrid::prelude::*;

fn strip(grid: &Grid) -> String {
    let snapshot = grid.snapshot();
    snapshot
        .pagination
        .map(|p| {
            p.buttons
                .iter()
                .map(|b| match b.number() {
                    Some(n) => n.to_string(),
                    None => "…".to_string(),
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
}

#[test]
fn test_clamps_to_last_page() {
    let mut grid = grid(15, GridConfig::new().page_size(5));
    assert_eq!(grid.total_pages(), 3);
    grid.set_page(4);
    assert_eq!(grid.page(), 3);

    let names: Vec<_> = grid
        .visible_rows()
        .iter()
        .map(|r| r.get("name").to_string())
        .collect();
    assert_eq!(
        names,
        vec!["User 11", "User 12", "User 13", "User 14", "User 15"]
    );
}

#[test]
fn test_window_strip_for_ten_pages() {
    let mut grid = grid(100, GridConfig::new());
    assert_eq!(strip(&grid), "1 2 3 … 10");
    grid.set_page(10);
    assert_eq!(strip(&grid), "1 … 8 9 10");
    grid.set_page(5);
    assert_eq!(strip(&grid), "1 … 4 5 6 … 10");
}

#[test]
fn test_pagination_view() {
    let mut grid = grid(23, GridConfig::new());
    grid.handle(GridEvent::SetPage { page: 3 });
    let view = grid.snapshot().pagination.unwrap();
    assert_eq!(view.page, 3);
    assert_eq!(view.total_pages, 3);
    assert!(view.can_prev);
    assert!(!view.can_next);
    assert_eq!(view.summary.to_string(), "Showing 21 - 23 of 23");
}

#[test]
fn test_empty_table_has_one_page() {
    let mut grid = grid(0, GridConfig::new());
    assert_eq!(grid.total_pages(), 1);
    assert!(!grid.next_page());
    assert!(grid.visible_rows().is_empty());
    let view = grid.snapshot().pagination.unwrap();
    assert_eq!(view.summary.to_string(), "Showing 0 - 0 of 0");
    assert_eq!(grid.header_check(), HeaderCheck::Unchecked);
}

#[test]
fn test_hidden_pagination() {
    let grid = grid(30, GridConfig::new().hide_pagination());
    assert!(grid.snapshot().pagination.is_none());
    assert_eq!(grid.visible_rows().len(), 10);
}

#[test]
fn test_page_size_change_resets_to_first_page() {
    let mut grid = grid(40, GridConfig::new());
    grid.set_page(3);
    grid.toggle_row(&RowId::Number(25));
    grid.reorder(1, 2);

    grid.set_page_size(20);
    assert_eq!(grid.page(), 1);
    assert_eq!(grid.total_pages(), 2);
    assert!(grid.selected_ids().is_empty());
    assert_eq!(grid.column_order(), &[0, 1, 2, 3, 4]);
}

#[test]
fn test_zero_page_size_warns() {
    let mut grid = grid(5, GridConfig::new());
    grid.set_page_size(0);
    assert_eq!(grid.page_size(), 1);
    assert_eq!(grid.take_warnings(), vec![GridWarning::ZeroPageSize]);
}

#[test]
fn test_row_count_change_returns_to_first_page() {
    let mut grid = grid(30, GridConfig::new());
    grid.set_page(3);
    grid.set_data(table(12));
    assert_eq!(grid.page(), 1);
    assert_eq!(grid.total_pages(), 2);
}

#[test]
fn test_rows_are_striped_per_page() {
    let grid = grid(3, GridConfig::new());
    let striped: Vec<_> = grid.snapshot().rows.iter().map(|r| r.striped).collect();
    assert_eq!(striped, vec![false, true, false]);
}
