pub mod callback;
pub mod config;
pub mod data;
pub mod error;
pub mod grid;
pub mod order;
pub mod pagination;
pub mod pointer;
pub mod resize;
pub mod selection;
pub mod sticky;
pub mod width;

pub use callback::LatestCallback;
pub use config::GridConfig;
pub use data::{Alignment, CellValue, ColumnKind, Header, Row, RowId, TableData};
pub use error::{GridError, GridWarning};
pub use grid::{
    CellView, ColumnView, EventResult, Grid, GridEvent, GridId, GridSnapshot, PaginationView,
    RowView,
};
pub use pagination::{PageButton, RangeSummary};
pub use pointer::{CursorHint, ListenerId, NoopHost, PointerHost};
pub use selection::HeaderCheck;
pub use width::{WidthParseError, WidthValue};

pub mod prelude {
    pub use crate::config::GridConfig;
    pub use crate::data::{Alignment, CellValue, ColumnKind, Header, Row, RowId, TableData};
    pub use crate::error::{GridError, GridWarning};
    pub use crate::grid::{CellView, ColumnView, EventResult, Grid, GridEvent, GridSnapshot};
    pub use crate::pagination::PageButton;
    pub use crate::pointer::{CursorHint, PointerHost};
    pub use crate::selection::HeaderCheck;
}
