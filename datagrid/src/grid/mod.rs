//! Grid orchestrator - the one component a renderer talks to.
//!
//! The Grid provides:
//! - Drag-to-reorder columns (visual order over stable original indices)
//! - Pointer-driven column resizing with a 40px floor
//! - Sticky leading columns with running left offsets
//! - Row selection with a tri-state select-all for the current page
//! - Pagination with a windowed page-button strip
//!
//! # Example
//!
//! ```
//! use datagrid::prelude::*;
//!
//! let data = TableData::new(
//!     vec![Header::checkbox("sel"), Header::new("name", "Name"), Header::new("city", "City")],
//!     vec![
//!         Row::with_id(1).field("name", "Ada").field("city", "London"),
//!         Row::with_id(2).field("name", "Linus").field("city", "Helsinki"),
//!     ],
//! );
//! let mut grid = Grid::new(data, GridConfig::new().sticky_columns([0, 1]));
//!
//! grid.handle(GridEvent::DragStart { column: 2 });
//! grid.handle(GridEvent::Drop { column: 1 });
//!
//! let snapshot = grid.snapshot();
//! assert_eq!(snapshot.columns[1].key, "city");
//! assert_eq!(snapshot.cell(0, "name"), Some(&CellValue::from("Ada")));
//! ```

mod events;
mod snapshot;
mod state;

pub use events::{EventResult, GridEvent};
pub use snapshot::{CellView, ColumnView, GridSnapshot, PaginationView, RowView};
pub use state::{Grid, GridId};
