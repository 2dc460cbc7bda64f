//! Event handling for the Grid.
//!
//! The renderer translates its native input (HTML5 drag events, mouse
//! events, checkbox changes, page buttons) into [`GridEvent`]s. Column
//! positions in events are always visual positions.

use serde::Deserialize;

use crate::data::RowId;

use super::state::Grid;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
    /// Event started a drag or resize gesture on this grid.
    StartDrag,
}

impl EventResult {
    /// Check if the event was handled (consumed or started drag).
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }

    fn consumed_if(handled: bool) -> Self {
        if handled {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

/// User input the grid reacts to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GridEvent {
    /// Header drag began.
    DragStart { column: usize },
    /// Drag is over a header.
    DragOver { column: usize },
    /// Drag left a header.
    DragLeave { column: usize },
    /// Dragged header dropped on a header.
    Drop { column: usize },
    /// Drag ended without a drop.
    DragEnd,
    /// Pointer pressed on a header's resize handle.
    ResizeStart { column: usize, x: f64 },
    /// Pointer moved anywhere in the document.
    PointerMove { x: f64 },
    /// Pointer released anywhere in the document.
    PointerUp,
    /// Row checkbox clicked.
    ToggleRow { id: RowId },
    /// Header checkbox clicked.
    ToggleAllVisible,
    /// Page button clicked.
    SetPage { page: usize },
    PrevPage,
    NextPage,
}

impl Grid {
    /// Apply one input event.
    pub fn handle(&mut self, event: GridEvent) -> EventResult {
        match event {
            GridEvent::DragStart { column } => {
                if self.drag_start(column) {
                    EventResult::StartDrag
                } else {
                    EventResult::Ignored
                }
            }
            GridEvent::DragOver { column } => {
                // Hovering a header mid-drag is ours even when the
                // indicator doesn't move, so the host allows the drop.
                if self.is_dragging() && column < self.column_count() {
                    self.drag_over(column);
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            GridEvent::DragLeave { column } => EventResult::consumed_if(self.drag_leave(column)),
            GridEvent::Drop { column } => EventResult::consumed_if(self.drop_on(column)),
            GridEvent::DragEnd => EventResult::consumed_if(self.drag_end()),
            GridEvent::ResizeStart { column, x } => {
                if self.begin_resize(column, x) {
                    EventResult::StartDrag
                } else {
                    EventResult::Ignored
                }
            }
            GridEvent::PointerMove { x } => {
                if self.is_resizing() {
                    self.pointer_move(x);
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            GridEvent::PointerUp => EventResult::consumed_if(self.pointer_up()),
            GridEvent::ToggleRow { id } => {
                self.toggle_row(&id);
                EventResult::Consumed
            }
            GridEvent::ToggleAllVisible => {
                EventResult::consumed_if(self.toggle_select_all_visible())
            }
            GridEvent::SetPage { page } => EventResult::consumed_if(self.set_page(page)),
            GridEvent::PrevPage => EventResult::consumed_if(self.prev_page()),
            GridEvent::NextPage => EventResult::consumed_if(self.next_page()),
        }
    }
}
