//! Column widths and the pointer-driven resize session.

use std::collections::HashMap;
use std::rc::Rc;

use crate::data::{Header, Row};
use crate::pointer::{ListenerGuard, PointerHost};
use crate::width::{WidthParseError, WidthValue, heuristic_width};

/// A width source that could not be parsed while seeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedWidth {
    /// Original column index.
    pub column: usize,
    pub error: WidthParseError,
}

/// Resolved pixel widths keyed by original column index.
///
/// Resolution order: live resize override, configured initial width,
/// `Header::width`, then the content heuristic. Heuristic widths are
/// computed on demand and never cached.
#[derive(Debug, Clone)]
pub struct ColumnWidths {
    /// Widths written by resize sessions.
    overrides: HashMap<usize, u32>,
    /// Widths from configuration or headers.
    seeded: HashMap<usize, u32>,
    min_width: u32,
    checkbox_width: u32,
}

impl ColumnWidths {
    pub fn new(min_width: u32, checkbox_width: u32) -> Self {
        Self {
            overrides: HashMap::new(),
            seeded: HashMap::new(),
            min_width,
            checkbox_width,
        }
    }

    /// Seed widths from configured initial widths and header widths.
    ///
    /// Drops every resize override. Returns the values that could not be
    /// parsed; those columns fall back to the next source.
    pub fn seed(
        &mut self,
        headers: &[Header],
        initial: &HashMap<usize, WidthValue>,
    ) -> Vec<RejectedWidth> {
        self.overrides.clear();
        self.seeded.clear();

        let mut rejected = Vec::new();
        let mut parse = |column: usize, value: Option<&WidthValue>| -> Option<u32> {
            match value?.to_pixels() {
                Ok(px) => px,
                Err(error) => {
                    rejected.push(RejectedWidth { column, error });
                    None
                }
            }
        };

        for (column, header) in headers.iter().enumerate() {
            let from_config = parse(column, initial.get(&column));
            let width = from_config.or_else(|| parse(column, header.width.as_ref()));
            if let Some(width) = width {
                self.seeded.insert(column, width);
            }
        }
        rejected
    }

    pub fn min_width(&self) -> u32 {
        self.min_width
    }

    /// Width for original column `column`, never below the minimum.
    pub fn resolve(&self, column: usize, header: &Header, rows: &[Row]) -> u32 {
        let width = self
            .overrides
            .get(&column)
            .or_else(|| self.seeded.get(&column))
            .copied()
            .unwrap_or_else(|| heuristic_width(header, rows, self.checkbox_width));
        width.max(self.min_width)
    }

    /// Live override for `column`, if it has been resized.
    pub fn override_for(&self, column: usize) -> Option<u32> {
        self.overrides.get(&column).copied()
    }

    /// Write a resize result. Returns `true` if the width changed.
    pub fn set_override(&mut self, column: usize, width: u32) -> bool {
        let width = width.max(self.min_width);
        self.overrides.insert(column, width) != Some(width)
    }
}

/// An in-progress column resize.
///
/// Owns the document listener registration; dropping the session releases
/// it no matter how the gesture ended.
#[derive(Debug)]
pub struct ResizeSession {
    /// Original index of the column being resized.
    column: usize,
    start_x: f64,
    start_width: u32,
    min_width: u32,
    _listeners: ListenerGuard,
}

impl ResizeSession {
    /// Begin resizing `column` from pointer position `start_x`.
    pub fn begin(
        host: Rc<dyn PointerHost>,
        column: usize,
        start_x: f64,
        start_width: u32,
        min_width: u32,
    ) -> Self {
        log::debug!(
            "resize start: column {} at x={} width={}",
            column,
            start_x,
            start_width
        );
        Self {
            column,
            start_x,
            start_width,
            min_width,
            _listeners: ListenerGuard::acquire(host),
        }
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn start_width(&self) -> u32 {
        self.start_width
    }

    /// Width for the pointer at `x`: start width plus travel, floored at the minimum.
    pub fn width_at(&self, x: f64) -> u32 {
        let raw = (self.start_width as f64 + (x - self.start_x)).round();
        if !raw.is_finite() || raw <= self.min_width as f64 {
            return self.min_width;
        }
        raw.min(u32::MAX as f64) as u32
    }
}
