//! Plain-text painter for grid snapshots.
//!
//! One terminal column stands in for 8 pixels. Sticky columns are
//! separated from the scrolling part by `‖`.

use std::fmt::Write;

use datagrid::{Alignment, CellView, ColumnView, GridSnapshot, HeaderCheck, PageButton};

const PIXELS_PER_CHAR: u32 = 8;

fn cell_width(column: &ColumnView) -> usize {
    (column.width / PIXELS_PER_CHAR).max(3) as usize
}

fn fit(text: &str, width: usize, align: Alignment) -> String {
    let mut text: String = text.chars().take(width).collect();
    let len = text.chars().count();
    if len < width {
        let pad = width - len;
        text = match align {
            Alignment::Left => format!("{}{}", text, " ".repeat(pad)),
            Alignment::Right => format!("{}{}", " ".repeat(pad), text),
            Alignment::Center => {
                let left = pad / 2;
                format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
            }
        };
    }
    text
}

fn separator(column: &ColumnView, next: Option<&ColumnView>) -> &'static str {
    match next {
        Some(next) if column.sticky && !next.sticky => "‖",
        Some(_) => "│",
        None => "",
    }
}

/// Render a snapshot as a text table followed by the pagination bar.
pub fn render(snapshot: &GridSnapshot) -> String {
    let mut out = String::new();
    let columns = &snapshot.columns;

    for (i, column) in columns.iter().enumerate() {
        let width = cell_width(column);
        let text = match column.kind {
            Some(datagrid::ColumnKind::Checkbox) => match snapshot.header_check {
                HeaderCheck::Checked => "[x]".to_string(),
                HeaderCheck::Indeterminate => "[-]".to_string(),
                HeaderCheck::Unchecked => "[ ]".to_string(),
            },
            _ => {
                let mut label = column.label.clone();
                if column.dragging {
                    label.insert(0, '*');
                }
                if column.drop_target {
                    label.insert(0, '>');
                }
                label
            }
        };
        let _ = write!(
            out,
            "{}{}",
            fit(&text, width, column.align),
            separator(column, columns.get(i + 1))
        );
    }
    out.push('\n');

    for row in &snapshot.rows {
        for (i, (column, cell)) in columns.iter().zip(&row.cells).enumerate() {
            let text = match cell {
                CellView::Checkbox { checked: true } => "[x]".to_string(),
                CellView::Checkbox { checked: false } => "[ ]".to_string(),
                CellView::Value { value } => value.to_string(),
            };
            let _ = write!(
                out,
                "{}{}",
                fit(&text, cell_width(column), column.align),
                separator(column, columns.get(i + 1))
            );
        }
        out.push('\n');
    }

    if let Some(pagination) = &snapshot.pagination {
        let buttons: Vec<String> = pagination
            .buttons
            .iter()
            .map(|button| match button {
                PageButton::Page {
                    number,
                    current: true,
                } => format!("[{}]", number),
                PageButton::Page { number, .. } => number.to_string(),
                PageButton::Ellipsis => "…".to_string(),
            })
            .collect();
        let _ = writeln!(
            out,
            "{}   {} {} {}",
            pagination.summary,
            if pagination.can_prev { "<" } else { " " },
            buttons.join(" "),
            if pagination.can_next { ">" } else { " " },
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use datagrid::prelude::*;

    #[test]
    fn test_fit() {
        assert_eq!(fit("abc", 5, Alignment::Left), "abc  ");
        assert_eq!(fit("abc", 5, Alignment::Right), "  abc");
        assert_eq!(fit("abc", 6, Alignment::Center), " abc  ");
        assert_eq!(fit("abcdef", 3, Alignment::Left), "abc");
    }

    #[test]
    fn test_render_marks_sticky_boundary_and_page() {
        let data = TableData::new(
            vec![
                Header::checkbox("sel"),
                Header::new("name", "Name").width(80),
                Header::new("city", "City").width(80),
            ],
            (0..12)
                .map(|i| Row::with_id(i).field("name", format!("n{i}")).field("city", "x"))
                .collect(),
        );
        let grid = Grid::new(data, GridConfig::new().sticky_columns([0, 1]));
        let text = render(&grid.snapshot());

        let header = text.lines().next().unwrap();
        assert_eq!(header.matches('‖').count(), 1);
        assert!(header.starts_with("[ ]   │Name      ‖City"));
        assert!(text.contains("Showing 1 - 10 of 12"));
        assert!(text.contains("[1] 2"));
    }
}
