//! Column order and the drag-to-reorder session.

/// A permutation mapping visual positions to original header indices.
///
/// `order[visual] == original`. Always a permutation of `0..len`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnOrder {
    order: Vec<usize>,
}

impl ColumnOrder {
    /// Identity order for `len` columns.
    pub fn identity(len: usize) -> Self {
        Self {
            order: (0..len).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Original indices in visual order.
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Original index of the column shown at `visual`.
    pub fn original_at(&self, visual: usize) -> Option<usize> {
        self.order.get(visual).copied()
    }

    /// Visual position of the column with original index `original`.
    pub fn visual_of(&self, original: usize) -> Option<usize> {
        self.order.iter().position(|&idx| idx == original)
    }

    /// Move the column at visual position `from` to visual position `to`,
    /// shifting the columns in between.
    ///
    /// Returns `true` if the order changed. Equal or out-of-range positions
    /// leave the order untouched.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.order.len() || to >= self.order.len() {
            return false;
        }
        let moved = self.order.remove(from);
        self.order.insert(to, moved);
        true
    }
}

/// Drag session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Visual position the drag started from.
        source: usize,
        /// Column currently hovered, for the drop indicator only.
        over: Option<usize>,
    },
}

/// A pending reorder produced by a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropCommit {
    pub from: usize,
    pub to: usize,
}

/// Header drag session: `Idle -> Dragging -> Idle`.
///
/// Hovering never touches the column order. Only [`DragSession::drop_on`]
/// yields a [`DropCommit`] for the caller to apply.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Visual position being dragged, if any.
    pub fn source(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging { source, .. } => Some(source),
            DragState::Idle => None,
        }
    }

    /// Column under the pointer while dragging.
    pub fn drop_target(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging { over, .. } => over,
            DragState::Idle => None,
        }
    }

    /// Begin dragging the column at `source`. Replaces any active drag.
    pub fn start(&mut self, source: usize) {
        self.state = DragState::Dragging { source, over: None };
    }

    /// Pointer entered column `target`. Returns `true` if the indicator moved.
    pub fn over(&mut self, target: usize) -> bool {
        match &mut self.state {
            DragState::Dragging { over, .. } if *over != Some(target) => {
                *over = Some(target);
                true
            }
            _ => false,
        }
    }

    /// Pointer left column `target`. Clears the indicator only if it points there.
    pub fn leave(&mut self, target: usize) -> bool {
        match &mut self.state {
            DragState::Dragging { over, .. } if *over == Some(target) => {
                *over = None;
                true
            }
            _ => false,
        }
    }

    /// Drop on column `target`, ending the session.
    pub fn drop_on(&mut self, target: usize) -> Option<DropCommit> {
        let source = self.source()?;
        self.state = DragState::Idle;
        Some(DropCommit {
            from: source,
            to: target,
        })
    }

    /// Drag ended without a drop. Returns `true` if a session was discarded.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }
}
