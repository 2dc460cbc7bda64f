//! Grid state.

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::callback::LatestCallback;
use crate::config::GridConfig;
use crate::data::{Header, Row, RowId, TableData};
use crate::error::{GridError, GridWarning};
use crate::order::{ColumnOrder, DragSession};
use crate::pagination::Pagination;
use crate::pointer::{NoopHost, PointerHost};
use crate::resize::{ColumnWidths, ResizeSession};
use crate::selection::{HeaderCheck, Selection};
use crate::sticky::{self, StickyLayout};
use crate::width::WidthValue;

/// Recorded warnings kept before the oldest are dropped.
const MAX_WARNINGS: usize = 32;

/// Unique identifier for a Grid instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridId(usize);

impl GridId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for GridId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__grid_{}", self.0)
    }
}

/// Interactive data grid over one [`TableData`].
///
/// `Grid` composes the column order, column widths, sticky layout,
/// selection and pagination models and keeps them consistent:
/// - Changing headers, the row count or the page size resets column order,
///   returns to page 1 and clears the selection
/// - Reordering and resizing never touch selection or pagination
/// - Sticky offsets are recomputed after anything that can change a sticky
///   column's width
///
/// The renderer reads [`Grid::snapshot`] and feeds user input back through
/// [`Grid::handle`] or the direct methods.
///
/// # Example
///
/// ```
/// use datagrid::{Grid, GridConfig, Header, Row, TableData};
///
/// let data = TableData::new(
///     vec![Header::checkbox("sel"), Header::new("name", "Name")],
///     (0..12).map(|i| Row::with_id(i as i64).field("name", format!("row {i}"))).collect(),
/// );
/// let mut grid = Grid::new(data, GridConfig::new().page_size(5));
/// grid.set_page(3);
/// assert_eq!(grid.visible_rows().len(), 2);
/// ```
pub struct Grid {
    /// Unique identifier.
    id: GridId,
    /// Caller data, never mutated.
    pub(super) data: TableData,
    pub(super) config: GridConfig,
    /// Row identities captured at load, parallel to `data.rows`.
    pub(super) row_ids: Vec<RowId>,
    /// Bumped on every data load.
    generation: u64,
    pub(super) order: ColumnOrder,
    pub(super) drag: DragSession,
    widths: ColumnWidths,
    pub(super) resize: Option<ResizeSession>,
    /// Number of leading visual columns requested sticky, after normalization.
    sticky_count: usize,
    pub(super) sticky: StickyLayout,
    /// Rendered widths reported by the host, by visual position.
    measured: Vec<Option<u32>>,
    selection: Selection,
    pub(super) pagination: Pagination,
    warnings: Vec<GridWarning>,
    on_reorder: LatestCallback<[usize]>,
    on_selection_change: LatestCallback<[RowId]>,
    host: Rc<dyn PointerHost>,
    /// Dirty flag for re-render.
    dirty: bool,
}

impl Grid {
    /// Create a grid over `data`.
    pub fn new(data: TableData, config: GridConfig) -> Self {
        let mut config = config;
        let mut warnings = Vec::new();
        if config.page_size == 0 {
            warnings.push(GridWarning::ZeroPageSize);
            config.page_size = 1;
        }

        let column_count = data.column_count();
        let mut grid = Self {
            id: GridId::new(),
            row_ids: capture_row_ids(&data.rows),
            generation: 0,
            order: ColumnOrder::identity(column_count),
            drag: DragSession::new(),
            widths: ColumnWidths::new(config.min_column_width, config.checkbox_width),
            resize: None,
            sticky_count: 0,
            sticky: StickyLayout::default(),
            measured: Vec::new(),
            selection: Selection::new(),
            pagination: Pagination::new(config.page_size),
            warnings: Vec::new(),
            on_reorder: LatestCallback::new(),
            on_selection_change: LatestCallback::new(),
            host: Rc::new(NoopHost),
            dirty: true,
            data,
            config,
        };
        for warning in warnings {
            grid.warn(warning);
        }
        grid.seed_widths();
        grid.normalize_sticky();
        grid.refresh_layout();
        grid
    }

    /// Route resize pointer capture through `host`.
    pub fn with_pointer_host(mut self, host: Rc<dyn PointerHost>) -> Self {
        self.set_pointer_host(host);
        self
    }

    /// Replace the pointer host. Ends any active resize on the old host.
    pub fn set_pointer_host(&mut self, host: Rc<dyn PointerHost>) {
        self.end_resize();
        self.host = host;
    }

    /// Get the unique ID.
    pub fn id(&self) -> GridId {
        self.id
    }

    pub fn data(&self) -> &TableData {
        &self.data
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Data load counter; row identities are stable within one generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Identity of every row, in data order.
    pub fn row_ids(&self) -> &[RowId] {
        &self.row_ids
    }

    pub fn column_count(&self) -> usize {
        self.data.column_count()
    }

    pub fn row_count(&self) -> usize {
        self.data.row_count()
    }

    // -------------------------------------------------------------------------
    // Dirty tracking and warnings
    // -------------------------------------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read and clear the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(super) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Configuration warnings raised so far.
    pub fn warnings(&self) -> &[GridWarning] {
        &self.warnings
    }

    /// Drain recorded warnings.
    pub fn take_warnings(&mut self) -> Vec<GridWarning> {
        std::mem::take(&mut self.warnings)
    }

    /// Log and record a warning. Repeats of a recorded warning are only logged.
    fn warn(&mut self, warning: GridWarning) {
        log::warn!("[{}] {}", self.id, warning);
        if self.warnings.contains(&warning) {
            return;
        }
        if self.warnings.len() == MAX_WARNINGS {
            self.warnings.remove(0);
        }
        self.warnings.push(warning);
    }

    // -------------------------------------------------------------------------
    // Data loading
    // -------------------------------------------------------------------------

    /// Replace the table data.
    ///
    /// Row identities are recaptured. A change of headers or row count is a
    /// structural reload: column order, page and selection reset, and a
    /// header change also reseeds widths. Otherwise the page is clamped and
    /// everything else is kept.
    pub fn set_data(&mut self, data: TableData) {
        let headers_changed = data.headers != self.data.headers;
        let count_changed = data.row_count() != self.data.row_count();

        self.data = data;
        self.row_ids = capture_row_ids(&self.data.rows);
        self.generation += 1;

        if headers_changed {
            self.end_resize();
            self.seed_widths();
            self.normalize_sticky();
        }

        if headers_changed || count_changed {
            log::debug!(
                "[{}] reload: headers_changed={} rows={}",
                self.id,
                headers_changed,
                self.row_count()
            );
            self.reset_view();
        } else {
            self.pagination.clamp(self.row_count());
            self.measured.clear();
            self.refresh_layout();
        }
        self.mark_dirty();
    }

    /// Change rows per page. Resets the view like a reload.
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = if page_size == 0 {
            self.warn(GridWarning::ZeroPageSize);
            1
        } else {
            page_size
        };
        if page_size == self.pagination.page_size() {
            return;
        }
        self.config.page_size = page_size;
        self.pagination.set_page_size(page_size);
        self.reset_view();
        self.mark_dirty();
    }

    /// Change the sticky column request.
    pub fn set_sticky_columns(&mut self, columns: impl IntoIterator<Item = usize>) {
        self.config.sticky_columns = columns.into_iter().collect();
        self.normalize_sticky();
        self.refresh_layout();
        self.mark_dirty();
    }

    /// Replace the starting widths by original column index.
    ///
    /// Widths are reseeded, so resize overrides and measured widths are
    /// dropped and sticky offsets follow the new widths.
    pub fn set_initial_column_widths(&mut self, widths: HashMap<usize, WidthValue>) {
        self.end_resize();
        self.config.initial_column_widths = widths;
        self.seed_widths();
        self.measured.clear();
        self.refresh_layout();
        self.mark_dirty();
    }

    /// Change the max height handed to the renderer.
    ///
    /// The body may gain or lose a scrollbar, so measured widths are dropped.
    pub fn set_max_height(&mut self, max_height: Option<String>) {
        if self.config.max_height == max_height {
            return;
        }
        self.config.max_height = max_height;
        self.measured.clear();
        self.refresh_layout();
        self.mark_dirty();
    }

    /// Reset order, page and selection after a structural change.
    fn reset_view(&mut self) {
        self.order = ColumnOrder::identity(self.column_count());
        self.drag.cancel();
        self.pagination.reset();
        self.measured.clear();
        self.selection.clear();
        self.emit_selection();
        self.refresh_layout();
    }

    fn seed_widths(&mut self) {
        let rejected = self
            .widths
            .seed(&self.data.headers, &self.config.initial_column_widths);
        for r in rejected {
            self.warn(GridWarning::UnparsableWidth {
                column: r.column,
                source: r.error,
            });
        }
    }

    /// Sticky request: the configured positions, or headers flagged sticky.
    fn normalize_sticky(&mut self) {
        let requested: Vec<usize> = if self.config.sticky_columns.is_empty() {
            self.data
                .headers
                .iter()
                .enumerate()
                .filter(|(_, h)| h.sticky)
                .map(|(i, _)| i)
                .collect()
        } else {
            self.config.sticky_columns.clone()
        };

        let normalized = sticky::normalize(&requested, self.column_count());
        if normalized.truncated {
            self.warn(GridWarning::NonContiguousSticky {
                requested,
                effective: normalized.count,
            });
        }
        self.sticky_count = normalized.count;
    }

    // -------------------------------------------------------------------------
    // Callbacks
    // -------------------------------------------------------------------------

    /// Set the reorder observer. It receives the new order of original indices.
    pub fn on_column_reorder(&mut self, handler: impl FnMut(&[usize]) + 'static) {
        self.on_reorder.set(handler);
    }

    /// Set the selection observer. It receives every selected row identity.
    pub fn on_selection_change(&mut self, handler: impl FnMut(&[RowId]) + 'static) {
        self.on_selection_change.set(handler);
    }

    /// Shared handle to the reorder callback slot.
    pub fn reorder_callback(&self) -> LatestCallback<[usize]> {
        self.on_reorder.clone()
    }

    /// Shared handle to the selection callback slot.
    pub fn selection_callback(&self) -> LatestCallback<[RowId]> {
        self.on_selection_change.clone()
    }

    fn emit_selection(&self) {
        let ids = self.selection.selected_ids(&self.row_ids);
        self.on_selection_change.emit(&ids);
    }

    // -------------------------------------------------------------------------
    // Column order
    // -------------------------------------------------------------------------

    /// Original header indices in visual order.
    pub fn column_order(&self) -> &[usize] {
        self.order.as_slice()
    }

    /// Header shown at visual position `visual`.
    pub fn header_at(&self, visual: usize) -> Option<&Header> {
        self.order
            .original_at(visual)
            .and_then(|original| self.data.headers.get(original))
    }

    /// Move the column at visual position `from` to `to`.
    ///
    /// Notifies the reorder observer when the order changes.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if !self.order.reorder(from, to) {
            return false;
        }
        log::debug!(
            "[{}] reorder {} -> {}: {:?}",
            self.id,
            from,
            to,
            self.order.as_slice()
        );
        self.measured.clear();
        self.refresh_layout();
        self.on_reorder.emit(self.order.as_slice());
        self.mark_dirty();
        true
    }

    /// Like [`Grid::reorder`] but rejects out-of-range positions.
    pub fn try_reorder(&mut self, from: usize, to: usize) -> Result<bool, GridError> {
        self.check_visual(from)?;
        self.check_visual(to)?;
        Ok(self.reorder(from, to))
    }

    fn check_visual(&self, index: usize) -> Result<(), GridError> {
        if index < self.column_count() {
            Ok(())
        } else {
            Err(GridError::ColumnOutOfRange {
                index,
                count: self.column_count(),
            })
        }
    }

    /// Begin dragging the header at `visual`.
    pub fn drag_start(&mut self, visual: usize) -> bool {
        if visual >= self.column_count() {
            return false;
        }
        log::debug!("[{}] drag start: {}", self.id, visual);
        self.drag.start(visual);
        self.mark_dirty();
        true
    }

    /// Pointer is over header `visual` during a drag.
    pub fn drag_over(&mut self, visual: usize) -> bool {
        if visual >= self.column_count() || !self.drag.over(visual) {
            return false;
        }
        self.mark_dirty();
        true
    }

    /// Pointer left header `visual` during a drag.
    pub fn drag_leave(&mut self, visual: usize) -> bool {
        if !self.drag.leave(visual) {
            return false;
        }
        self.mark_dirty();
        true
    }

    /// Drop on header `visual`, committing the reorder.
    ///
    /// Returns `true` if a drag session ended here.
    pub fn drop_on(&mut self, visual: usize) -> bool {
        if visual >= self.column_count() {
            return self.drag_end();
        }
        let Some(commit) = self.drag.drop_on(visual) else {
            return false;
        };
        log::debug!("[{}] drop: {} -> {}", self.id, commit.from, commit.to);
        self.reorder(commit.from, commit.to);
        self.mark_dirty();
        true
    }

    /// Drag ended without a drop. Nothing is committed.
    pub fn drag_end(&mut self) -> bool {
        if !self.drag.cancel() {
            return false;
        }
        log::debug!("[{}] drag cancelled", self.id);
        self.mark_dirty();
        true
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    // -------------------------------------------------------------------------
    // Column widths and resizing
    // -------------------------------------------------------------------------

    /// Resolved width of original column `column`.
    pub fn resolve_width(&self, column: usize) -> Option<u32> {
        let header = self.data.headers.get(column)?;
        Some(self.widths.resolve(column, header, &self.data.rows))
    }

    /// Resolved width of the column at visual position `visual`.
    pub fn visual_width(&self, visual: usize) -> Option<u32> {
        self.order
            .original_at(visual)
            .and_then(|original| self.resolve_width(original))
    }

    /// Whether the column at `visual` has a resize handle.
    pub fn is_resizable(&self, visual: usize) -> bool {
        self.header_at(visual).is_some_and(|h| !h.is_checkbox())
    }

    /// Start resizing the column at `visual` from pointer position `x`.
    ///
    /// Attaches document pointer listeners through the host until the
    /// session ends. Ignored for checkbox columns and unknown positions.
    pub fn begin_resize(&mut self, visual: usize, x: f64) -> bool {
        self.try_begin_resize(visual, x).is_ok()
    }

    /// Like [`Grid::begin_resize`] but reports why a resize was refused.
    pub fn try_begin_resize(&mut self, visual: usize, x: f64) -> Result<(), GridError> {
        self.check_visual(visual)?;
        if !self.is_resizable(visual) {
            return Err(GridError::NotResizable(visual));
        }
        let Some(original) = self.order.original_at(visual) else {
            return Err(GridError::ColumnOutOfRange {
                index: visual,
                count: self.column_count(),
            });
        };
        let start_width = self
            .resolve_width(original)
            .unwrap_or(self.widths.min_width());

        // Release the previous session's listeners before attaching new ones.
        self.end_resize();
        self.resize = Some(ResizeSession::begin(
            Rc::clone(&self.host),
            original,
            x,
            start_width,
            self.widths.min_width(),
        ));
        self.mark_dirty();
        Ok(())
    }

    /// Pointer moved anywhere in the document.
    ///
    /// During a resize the column width follows the pointer immediately.
    pub fn pointer_move(&mut self, x: f64) -> bool {
        let Some(session) = &self.resize else {
            return false;
        };
        let column = session.column();
        let width = session.width_at(x);
        if !self.widths.set_override(column, width) {
            return false;
        }
        self.measured.clear();
        self.refresh_layout();
        self.mark_dirty();
        true
    }

    /// Pointer released anywhere in the document. Ends any resize.
    pub fn pointer_up(&mut self) -> bool {
        self.end_resize()
    }

    /// End the resize session, releasing its listeners.
    fn end_resize(&mut self) -> bool {
        let Some(session) = self.resize.take() else {
            return false;
        };
        log::debug!(
            "[{}] resize end: column {} -> {:?}",
            self.id,
            session.column(),
            self.widths.override_for(session.column())
        );
        drop(session);
        self.mark_dirty();
        true
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_some()
    }

    /// Original index of the column being resized.
    pub fn resizing_column(&self) -> Option<usize> {
        self.resize.as_ref().map(ResizeSession::column)
    }

    /// End every interactive session. Called on drop.
    pub fn teardown(&mut self) {
        self.end_resize();
        self.drag.cancel();
    }

    // -------------------------------------------------------------------------
    // Sticky layout
    // -------------------------------------------------------------------------

    /// Number of leading visual columns pinned left.
    pub fn sticky_count(&self) -> usize {
        self.sticky.count()
    }

    /// Left offsets of the sticky columns, in visual order.
    pub fn sticky_offsets(&self) -> &[u32] {
        self.sticky.offsets()
    }

    /// Record rendered widths, in visual order, as measured by the host.
    ///
    /// Sticky offsets prefer these over resolved widths until the next
    /// reorder, resize, page-size change or reload.
    pub fn report_measured_widths(&mut self, widths: &[u32]) {
        self.measured = widths.iter().map(|&w| Some(w)).collect();
        self.refresh_layout();
        self.mark_dirty();
    }

    /// Recompute sticky offsets from the current order and widths.
    pub(super) fn refresh_layout(&mut self) {
        let count = self.sticky_count.min(self.column_count());
        let widths: Vec<u32> = (0..count)
            .map(|visual| {
                self.measured
                    .get(visual)
                    .copied()
                    .flatten()
                    .or_else(|| self.visual_width(visual))
                    .unwrap_or(0)
            })
            .collect();
        self.sticky.recompute(&widths);
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Flip the selection of one row and notify the observer.
    pub fn toggle_row(&mut self, id: &RowId) -> bool {
        let selected = self.selection.toggle(id);
        log::debug!("[{}] toggle row {}: {}", self.id, id, selected);
        self.emit_selection();
        self.mark_dirty();
        selected
    }

    /// Select every row on the current page, or deselect them all if they
    /// already are. Other pages are untouched.
    pub fn toggle_select_all_visible(&mut self) -> bool {
        let range = self.pagination.visible_range(self.row_count());
        if !self.selection.toggle_all(&self.row_ids[range]) {
            return false;
        }
        self.emit_selection();
        self.mark_dirty();
        true
    }

    pub fn is_selected(&self, id: &RowId) -> bool {
        self.selection.is_selected(id)
    }

    /// Selected identities in row order.
    pub fn selected_ids(&self) -> Vec<RowId> {
        self.selection.selected_ids(&self.row_ids)
    }

    /// Header checkbox state for the current page.
    pub fn header_check(&self) -> HeaderCheck {
        self.selection.header_check(self.visible_row_ids())
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    pub fn page(&self) -> usize {
        self.pagination.page()
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.row_count())
    }

    /// Go to `page`, clamped into `[1, total_pages]`.
    pub fn set_page(&mut self, page: usize) -> bool {
        let changed = self.pagination.set_page(page, self.row_count());
        if changed {
            self.mark_dirty();
        }
        changed
    }

    pub fn prev_page(&mut self) -> bool {
        let changed = self.pagination.prev(self.row_count());
        if changed {
            self.mark_dirty();
        }
        changed
    }

    pub fn next_page(&mut self) -> bool {
        let changed = self.pagination.next(self.row_count());
        if changed {
            self.mark_dirty();
        }
        changed
    }

    /// Rows on the current page.
    pub fn visible_rows(&self) -> &[Row] {
        &self.data.rows[self.pagination.visible_range(self.row_count())]
    }

    /// Identities of the rows on the current page.
    pub fn visible_row_ids(&self) -> &[RowId] {
        &self.row_ids[self.pagination.visible_range(self.row_count())]
    }
}

impl Drop for Grid {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("id", &self.id)
            .field("columns", &self.column_count())
            .field("rows", &self.row_count())
            .field("order", &self.order)
            .field("page", &self.pagination.page())
            .field("selected", &self.selection.len())
            .field("resizing", &self.resizing_column())
            .finish()
    }
}

/// Identity for each row: its own id, or its position at load time.
fn capture_row_ids(rows: &[Row]) -> Vec<RowId> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| row.id.clone().unwrap_or_else(|| RowId::from(idx)))
        .collect()
}
