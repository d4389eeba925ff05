use tabledom::{
    activate_column, activate_column_in, elements_by_class, find_element, Element, Tag,
    ACTIVE_CLASS, FEATURES_TABLE_ID,
};

/// A three-column comparison table in the expected markup convention.
fn comparison_table(id: &str) -> Element {
    Element::table()
        .id(id)
        .child(
            Element::tr()
                .child(Element::th("Feature"))
                .child(Element::th("Basic").class("col1"))
                .child(Element::th("Pro").class("col2"))
                .child(Element::th("Max").class("col3")),
        )
        .child(
            Element::tr()
                .child(Element::td("Storage"))
                .child(Element::td("5 GB").class("col1"))
                .child(Element::td("1 TB").class("col2"))
                .child(Element::td("10 TB").class("col3")),
        )
        .child(
            Element::tr()
                .child(Element::td("Support"))
                .child(Element::td("Email").class("col1"))
                .child(Element::td("Chat").class("col2"))
                .child(Element::td("Phone").class("col3")),
        )
}

fn container(tables: impl IntoIterator<Item = Element>) -> Element {
    Element::div().id(FEATURES_TABLE_ID).children(tables)
}

/// Class tokens of every currently active cell under `root`, sorted.
fn active_columns(root: &Element) -> Vec<String> {
    let mut tokens: Vec<String> = elements_by_class(root, ACTIVE_CLASS, None)
        .iter()
        .flat_map(|el| el.classes.iter())
        .filter(|t| *t != ACTIVE_CLASS)
        .map(String::from)
        .collect();
    tokens.sort();
    tokens.dedup();
    tokens
}

// ============================================================================
// Exclusivity
// ============================================================================

#[test]
fn test_activation_marks_exactly_the_selected_column() {
    let mut root = container([comparison_table("t1")]);

    activate_column(&mut root, "col2");

    // header + two data cells
    let active = elements_by_class(&root, ACTIVE_CLASS, None);
    assert_eq!(active.len(), 3);
    assert!(active.iter().all(|el| el.has_class("col2")));
    assert_eq!(active_columns(&root), vec!["col2"]);
}

#[test]
fn test_activation_clears_previous_selection() {
    let mut root = container([comparison_table("t1")]);

    activate_column(&mut root, "col1");
    activate_column(&mut root, "col3");

    assert_eq!(active_columns(&root), vec!["col3"]);
    assert!(elements_by_class(&root, ACTIVE_CLASS, None)
        .iter()
        .all(|el| !el.has_class("col1")));
}

#[test]
fn test_activation_is_idempotent() {
    let mut root = container([comparison_table("t1")]);

    activate_column(&mut root, "col1");
    let once = root.clone();
    activate_column(&mut root, "col1");

    assert_eq!(root, once);
}

#[test]
fn test_activation_marks_headers_and_data_cells() {
    let mut root = container([comparison_table("t1")]);

    activate_column(&mut root, "col1");

    assert_eq!(elements_by_class(&root, ACTIVE_CLASS, Some(Tag::Th)).len(), 1);
    assert_eq!(elements_by_class(&root, ACTIVE_CLASS, Some(Tag::Td)).len(), 2);
}

// ============================================================================
// Multiple tables
// ============================================================================

#[test]
fn test_activation_covers_all_tables_independently() {
    let mut root = container([comparison_table("t1"), comparison_table("t2")]);

    activate_column(&mut root, "col1");

    for table_id in ["t1", "t2"] {
        let table = find_element(&root, table_id).unwrap();
        let active = elements_by_class(table, ACTIVE_CLASS, None);
        assert_eq!(active.len(), 3, "table {table_id} should highlight col1");
        assert!(active.iter().all(|el| el.has_class("col1")));
    }
}

#[test]
fn test_table_without_matching_cells_ends_fully_cleared() {
    // t2 only carries col1/col2; selecting col3 must clear it entirely
    let narrow = Element::table()
        .id("t2")
        .child(
            Element::tr()
                .child(Element::th("Basic").class("col1"))
                .child(Element::th("Pro").class("col2")),
        )
        .child(
            Element::tr()
                .child(Element::td("5 GB").class("col1"))
                .child(Element::td("1 TB").class("col2")),
        );
    let mut root = container([comparison_table("t1"), narrow]);

    activate_column(&mut root, "col3");

    let t1 = find_element(&root, "t1").unwrap();
    assert_eq!(elements_by_class(t1, ACTIVE_CLASS, None).len(), 3);

    let t2 = find_element(&root, "t2").unwrap();
    assert!(elements_by_class(t2, ACTIVE_CLASS, None).is_empty());
}

// ============================================================================
// Empty match
// ============================================================================

#[test]
fn test_unknown_column_clears_everything_and_marks_nothing() {
    let mut root = container([comparison_table("t1"), comparison_table("t2")]);

    activate_column(&mut root, "col2");
    activate_column(&mut root, "nonexistent");

    assert!(elements_by_class(&root, ACTIVE_CLASS, None).is_empty());
}

#[test]
fn test_activation_with_no_tables_is_a_noop() {
    let mut root = container([]);
    activate_column(&mut root, "col1");
    assert!(elements_by_class(&root, ACTIVE_CLASS, None).is_empty());
}

// ============================================================================
// Activation by container id
// ============================================================================

#[test]
fn test_activate_by_id_finds_nested_container() {
    let mut doc = Element::div()
        .id("page")
        .child(Element::div().id("nav"))
        .child(container([comparison_table("t1")]));

    activate_column_in(&mut doc, FEATURES_TABLE_ID, "col2").unwrap();

    assert_eq!(elements_by_class(&doc, ACTIVE_CLASS, None).len(), 3);
}

#[test]
fn test_activate_by_id_missing_container_is_an_error() {
    let mut doc = Element::div().id("page");

    let err = activate_column_in(&mut doc, FEATURES_TABLE_ID, "col2").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Container element 'features_table' not found"
    );
}
