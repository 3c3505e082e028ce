use crate::document::{Document, NodeId, NodeKind};

/// True when `cell` sits in a table body rather than the table header.
///
/// Looks exactly two links up (cell, row, row's parent). A detached row
/// answers false.
pub fn is_table_body_cell(doc: &Document, cell: NodeId) -> bool {
    doc.parent(cell)
        .and_then(|row| doc.parent(row))
        .and_then(|section| doc.kind(section))
        .is_some_and(|kind| *kind == NodeKind::TableBody)
}
