//! Column activation: clear-then-mark highlighting across tables.

use crate::element::{find_element_mut, Content, Element, Tag};

/// The one class token this module writes: marks a cell as belonging to the
/// currently selected column.
pub const ACTIVE_CLASS: &str = "on";

/// Error type for activation against a document root.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ActivateError {
    /// No element with the expected container id exists under the root.
    #[error("Container element '{id}' not found")]
    ContainerNotFound { id: String },
}

impl ActivateError {
    /// Creates a new missing container error.
    pub fn container_not_found(id: impl Into<String>) -> Self {
        Self::ContainerNotFound { id: id.into() }
    }
}

/// Highlight the column identified by `column` in every table under
/// `container`.
///
/// Each table is processed independently in two phases: first every cell
/// (header and data) has [`ACTIVE_CLASS`] removed, then every `th` and every
/// `td` whose classes contain `column` has it added. A table with no matching
/// cells ends fully cleared with nothing re-marked; that is the intended
/// result for an unknown column, not an error. The two-phase clear-then-mark
/// is what enforces the "at most one active column per table" invariant.
pub fn activate_column(container: &mut Element, column: &str) {
    let mut tables = Vec::new();
    collect_tables_mut(container, &mut tables);
    log::debug!("[activate] column={} tables={}", column, tables.len());

    for table in tables {
        let mut cleared = 0;
        for_each_cell_mut(table, &mut |cell| {
            if cell.classes.remove(ACTIVE_CLASS) {
                cleared += 1;
            }
        });

        let mut marked = 0;
        for tag in [Tag::Th, Tag::Td] {
            for_each_cell_mut(table, &mut |cell| {
                if cell.tag == tag && cell.classes.contains(column) {
                    cell.classes.insert(ACTIVE_CLASS);
                    marked += 1;
                }
            });
        }
        log::debug!(
            "[activate] table={} cleared={} marked={}",
            table.id,
            cleared,
            marked
        );
    }
}

/// Locate the container by id under `root`, then activate `column` in it.
/// Fails only when no element with `container_id` exists.
pub fn activate_column_in(
    root: &mut Element,
    container_id: &str,
    column: &str,
) -> Result<(), ActivateError> {
    let container = find_element_mut(root, container_id)
        .ok_or_else(|| ActivateError::container_not_found(container_id))?;
    activate_column(container, column);
    Ok(())
}

/// Collect all tables under `element` (inclusive). Does not descend into a
/// table looking for nested tables; the markup convention does not nest them.
fn collect_tables_mut<'a>(element: &'a mut Element, tables: &mut Vec<&'a mut Element>) {
    if element.tag == Tag::Table {
        tables.push(element);
        return;
    }
    if let Content::Children(children) = &mut element.content {
        for child in children {
            collect_tables_mut(child, tables);
        }
    }
}

/// Visit every `th` and `td` under `element`, in document order.
fn for_each_cell_mut(element: &mut Element, visit: &mut impl FnMut(&mut Element)) {
    if matches!(element.tag, Tag::Th | Tag::Td) {
        visit(element);
    }
    if let Content::Children(children) = &mut element.content {
        for child in children {
            for_each_cell_mut(child, visit);
        }
    }
}
