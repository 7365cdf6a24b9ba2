//! Grid rendering helpers
//!
//! Renders the lead grid as:
//! - Column letters and labels (A Company, B Address, ...)
//! - Row numbers, highlighted when any cell of the row is selected
//! - Cells with selection and edit markers
//! - Load state and the error banner

use std::fmt::Write;

use crate::model::{column_at, ColumnIcon, FieldType, GridModel, LoadState, COLUMNS};

/// Pixels per character when sizing text columns
const CHAR_PX: f64 = 8.0;
const ROW_NUMBER_WIDTH: usize = 5;

/// Convert column index to letter(s): 0->A, 1->B, ..., 25->Z, 26->AA, etc.
pub fn column_letter(col: usize) -> String {
    let mut result = String::new();
    let mut n = col;
    loop {
        result.insert(0, (b'A' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    result
}

/// Truncate text with ellipsis if too long
pub fn truncate_text(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 1 {
        s.chars().take(max_chars).collect()
    } else {
        let mut result: String = s.chars().take(max_chars - 1).collect();
        result.push('…');
        result
    }
}

/// Link target for a non-empty cell of a linkable column
pub fn cell_href(field_type: FieldType, value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    match field_type {
        FieldType::Text => None,
        FieldType::Url => Some(value.to_string()),
        FieldType::Email => Some(format!("mailto:{}", value)),
        FieldType::Phone => Some(format!("tel:{}", value)),
    }
}

/// Column header contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub letter: String,
    pub label: &'static str,
    pub icon: Option<ColumnIcon>,
}

pub fn header_view(col: usize) -> Option<HeaderView> {
    let column = column_at(col)?;
    Some(HeaderView {
        letter: column_letter(col),
        label: column.label,
        icon: column.icon,
    })
}

/// Everything a renderer needs to paint one cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView<'a> {
    pub text: &'a str,
    pub href: Option<String>,
    pub selected: bool,
    pub editing: bool,
}

pub fn cell_view(model: &GridModel, row: usize, col: usize) -> Option<CellView<'_>> {
    let column = column_at(col)?;
    let lead = model.leads.get(row)?;
    let text = lead.get(column.field);
    Some(CellView {
        text,
        href: cell_href(column.field_type, text),
        selected: model.selection.is_selected(row, col),
        editing: model.edit.is_editing_cell(row, col),
    })
}

fn column_chars(model: &GridModel, col: usize) -> usize {
    let width = model.geometry.column_width(col).unwrap_or(0.0);
    ((width / CHAR_PX).floor() as usize).max(3)
}

/// Plain-text rendering of the whole grid
pub fn render_text(model: &GridModel) -> String {
    let mut out = String::new();

    match &model.ui.load_state {
        LoadState::Loading => out.push_str("Loading leads…\n"),
        LoadState::Failed(message) => {
            let _ = writeln!(out, "Error loading leads: {}", message);
        }
        LoadState::Idle | LoadState::Ready => {}
    }
    if let Some(text) = model.ui.banner_text() {
        let _ = writeln!(out, "! {}", text);
    }

    // Header: corner, then letter and label per column
    let _ = write!(out, "{:>width$}", "", width = ROW_NUMBER_WIDTH);
    for col in 0..COLUMNS.len() {
        let chars = column_chars(model, col);
        let header = header_view(col)
            .map(|h| format!("{} {}", h.letter, h.label))
            .unwrap_or_default();
        let _ = write!(out, "|{:<width$}", truncate_text(&header, chars), width = chars);
    }
    out.push('\n');

    if model.leads.is_empty() && !model.ui.load_state.is_loading() {
        out.push_str("No leads\n");
    }

    for row in 0..model.leads.len() {
        let marker = if model.selection.row_has_selection(row) {
            '>'
        } else {
            ' '
        };
        let _ = write!(out, "{}{:>width$}", marker, row + 1, width = ROW_NUMBER_WIDTH - 1);
        for col in 0..COLUMNS.len() {
            let chars = column_chars(model, col);
            let Some(cell) = cell_view(model, row, col) else {
                continue;
            };
            let flag = if cell.editing {
                '~'
            } else if cell.selected {
                '*'
            } else {
                ' '
            };
            let text = truncate_text(cell.text, chars - 1);
            let _ = write!(out, "|{}{:<width$}", flag, text, width = chars - 1);
        }
        out.push('\n');
    }

    let selected = model.selected_lead_ids().len();
    let _ = write!(out, "{} leads", model.leads.len());
    if selected > 0 {
        let _ = write!(out, ", {} selected [Delete]", selected);
    }
    out.push('\n');
    out
}
