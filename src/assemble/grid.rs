//! Table grid reconstruction from row/column-indexed cell elements.

use super::index::{ElementIndex, IndexedElement};
use super::path::PathKind;

/// Cells at or beyond this column index are dropped.
pub const MAX_GRID_COLUMNS: u32 = 1024;

/// Rebuild the cell text grid of `table` from the cells below it.
///
/// Cells are sorted row-major by `(RowIndex, ColIndex)`. The grid width is
/// `max(ColIndex) + 1` over all cells of the table, so every row has the same
/// length and cells without text stay empty. A cell's text is the
/// space-joined text of the paragraphs inside it; a cell without paragraph
/// text falls back to its own text. Cells with a column index of
/// [`MAX_GRID_COLUMNS`] or more are dropped.
pub fn build_grid(table: &IndexedElement<'_>, index: &ElementIndex<'_>) -> Vec<Vec<String>> {
    let mut cells: Vec<&IndexedElement<'_>> = index
        .within(&table.path)
        .filter(|e| e.kind == PathKind::TableCell)
        .filter(|cell| {
            let col = cell.element.attributes.col_index();
            if col >= MAX_GRID_COLUMNS {
                log::warn!(
                    "Dropping cell {}: column {} exceeds the {} column limit",
                    cell.path.as_str(),
                    col,
                    MAX_GRID_COLUMNS
                );
                return false;
            }
            true
        })
        .collect();

    if cells.is_empty() {
        return Vec::new();
    }

    // Stable sort: duplicate positions keep input order, the last one wins.
    cells.sort_by_key(|c| {
        let attrs = &c.element.attributes;
        (attrs.row_index(), attrs.col_index())
    });

    let width = cells
        .iter()
        .map(|c| c.element.attributes.col_index() as usize)
        .max()
        .unwrap_or(0)
        + 1;

    let mut grid = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut current_row = None;

    for cell in &cells {
        let row_index = cell.element.attributes.row_index();
        if current_row != Some(row_index) {
            if !row.is_empty() {
                grid.push(std::mem::take(&mut row));
            }
            row = vec![String::new(); width];
            current_row = Some(row_index);
        }

        let col = cell.element.attributes.col_index() as usize;
        if col < width {
            row[col] = cell_text(cell, index);
        }
    }

    if !row.is_empty() {
        grid.push(row);
    }

    log::debug!(
        "Table {}: {} cells into {}x{} grid",
        table.path.as_str(),
        cells.len(),
        grid.len(),
        width
    );

    grid
}

fn cell_text(cell: &IndexedElement<'_>, index: &ElementIndex<'_>) -> String {
    let mut text = String::new();
    for paragraph in index.within(&cell.path) {
        if !paragraph.path.is_paragraph_leaf() {
            continue;
        }
        if let Some(t) = paragraph.element.non_empty_text() {
            text.push_str(t);
            text.push(' ');
        }
    }

    if text.is_empty() {
        if let Some(own) = cell.element.non_empty_text() {
            text.push_str(own);
        }
    }

    text.trim().to_string()
}
