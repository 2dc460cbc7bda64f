//! Render-ready view of a grid.
//!
//! A snapshot is everything a painter needs for one frame: ordered columns
//! with width and sticky placement, the current page's cells resolved by
//! header key, and the selection and pagination controls.

use serde::Serialize;

use crate::data::{Alignment, CellValue, ColumnKind, RowId};
use crate::pagination::{PageButton, RangeSummary};
use crate::pointer::CursorHint;
use crate::selection::HeaderCheck;

use super::state::Grid;

/// One column, in visual order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnView {
    pub visual_index: usize,
    pub original_index: usize,
    pub key: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ColumnKind>,
    pub align: Alignment,
    /// Resolved width in pixels.
    pub width: u32,
    pub sticky: bool,
    /// Left offset when sticky.
    pub offset: Option<u32>,
    pub resizable: bool,
    /// This column is the drag source.
    pub dragging: bool,
    /// A drag is hovering this column.
    pub drop_target: bool,
}

/// One cell of a visible row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellView {
    Value { value: CellValue },
    Checkbox { checked: bool },
}

/// One row on the current page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub id: RowId,
    /// Index into the caller's rows.
    pub index: usize,
    pub selected: bool,
    /// Odd position on the page, for alternating backgrounds.
    pub striped: bool,
    /// Cells in visual column order.
    pub cells: Vec<CellView>,
}

/// Pagination controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginationView {
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub buttons: Vec<PageButton>,
    pub summary: RangeSummary,
    pub can_prev: bool,
    pub can_next: bool,
}

/// Everything needed to paint the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridSnapshot {
    pub columns: Vec<ColumnView>,
    pub rows: Vec<RowView>,
    pub header_check: HeaderCheck,
    pub cursor: CursorHint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationView>,
}

impl GridSnapshot {
    /// Column with the given header key.
    pub fn column(&self, key: &str) -> Option<&ColumnView> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Value shown for `row` under header `key`, if that is a value cell.
    pub fn cell(&self, row: usize, key: &str) -> Option<&CellValue> {
        let visual = self.columns.iter().position(|c| c.key == key)?;
        match self.rows.get(row)?.cells.get(visual)? {
            CellView::Value { value } => Some(value),
            CellView::Checkbox { .. } => None,
        }
    }
}

impl Grid {
    /// Build the render-ready view for the current state.
    pub fn snapshot(&self) -> GridSnapshot {
        let drag_source = self.drag.source();
        let drop_target = self.drag.drop_target();

        let columns: Vec<ColumnView> = self
            .order
            .as_slice()
            .iter()
            .enumerate()
            .filter_map(|(visual, &original)| {
                let header = self.data.headers.get(original)?;
                let offset = self.sticky.offset(visual);
                Some(ColumnView {
                    visual_index: visual,
                    original_index: original,
                    key: header.key.clone(),
                    label: header.label.clone(),
                    kind: header.kind.clone(),
                    align: header.alignment(),
                    width: self.resolve_width(original).unwrap_or_default(),
                    sticky: offset.is_some(),
                    offset,
                    resizable: !header.is_checkbox(),
                    dragging: drag_source == Some(visual),
                    drop_target: drop_target == Some(visual),
                })
            })
            .collect();

        let range = self.pagination.visible_range(self.row_count());
        let rows = range
            .clone()
            .zip(&self.data.rows[range])
            .enumerate()
            .map(|(position, (index, row))| {
                let id = self.row_ids[index].clone();
                let selected = self.is_selected(&id);
                let cells = columns
                    .iter()
                    .map(|column| {
                        if matches!(column.kind, Some(ColumnKind::Checkbox)) {
                            CellView::Checkbox { checked: selected }
                        } else {
                            CellView::Value {
                                value: row.get(&column.key).clone(),
                            }
                        }
                    })
                    .collect();
                RowView {
                    id,
                    index,
                    selected,
                    striped: position % 2 == 1,
                    cells,
                }
            })
            .collect();

        let row_count = self.row_count();
        let pagination = self.config.show_pagination.then(|| PaginationView {
            page: self.pagination.page(),
            page_size: self.pagination.page_size(),
            total_pages: self.pagination.total_pages(row_count),
            buttons: self.pagination.buttons(row_count),
            summary: self.pagination.summary(row_count),
            can_prev: self.pagination.can_prev(),
            can_next: self.pagination.can_next(row_count),
        });

        let cursor = if self.resize.is_some() {
            CursorHint::ColResize
        } else {
            CursorHint::Default
        };

        GridSnapshot {
            columns,
            rows,
            header_check: self.header_check(),
            cursor,
            max_height: self.config.max_height.clone(),
            pagination,
        }
    }
}
