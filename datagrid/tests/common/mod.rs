#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use datagrid::prelude::*;
use datagrid::ListenerId;
use simplelog::{Config, LevelFilter, TestLogger};

pub fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

/// Pointer host that records attach/detach calls.
#[derive(Default)]
pub struct RecordingHost {
    next: Cell<u64>,
    active: RefCell<Vec<ListenerId>>,
    attached: Cell<usize>,
    cursor: Cell<CursorHint>,
}

impl RecordingHost {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Listener pairs currently attached.
    pub fn active(&self) -> usize {
        self.active.borrow().len()
    }

    /// Listener pairs ever attached.
    pub fn attached(&self) -> usize {
        self.attached.get()
    }

    pub fn cursor(&self) -> CursorHint {
        self.cursor.get()
    }
}

impl PointerHost for RecordingHost {
    fn attach(&self) -> ListenerId {
        let id = ListenerId(self.next.get());
        self.next.set(self.next.get() + 1);
        self.attached.set(self.attached.get() + 1);
        self.active.borrow_mut().push(id);
        id
    }

    fn detach(&self, id: ListenerId) {
        self.active.borrow_mut().retain(|&active| active != id);
    }

    fn set_cursor(&self, cursor: CursorHint) {
        self.cursor.set(cursor);
    }
}

/// Checkbox, name, email, city, notes.
pub fn headers() -> Vec<Header> {
    vec![
        Header::checkbox("select"),
        Header::new("name", "Name").width("150px"),
        Header::new("email", "Email").width(220),
        Header::new("city", "City"),
        Header::new("notes", "Notes"),
    ]
}

/// `count` rows with ids 1..=count.
pub fn rows(count: usize) -> Vec<Row> {
    (1..=count)
        .map(|i| {
            Row::with_id(i)
                .field("name", format!("User {i}"))
                .field("email", format!("user{i}@example.com"))
                .field("city", if i % 2 == 0 { "Ghent" } else { "Lisbon" })
                .field("notes", "")
        })
        .collect()
}

pub fn table(count: usize) -> TableData {
    TableData::new(headers(), rows(count))
}

pub fn grid(count: usize, config: GridConfig) -> Grid {
    init_logging();
    Grid::new(table(count), config)
}

/// Collects every selection emitted to the callback.
pub fn record_selection(grid: &mut Grid) -> Rc<RefCell<Vec<Vec<RowId>>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    grid.on_selection_change(move |ids: &[RowId]| sink.borrow_mut().push(ids.to_vec()));
    log
}

pub fn ids(values: &[i64]) -> Vec<RowId> {
    values.iter().map(|&v| RowId::Number(v)).collect()
}
