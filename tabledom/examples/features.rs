use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tabledom::{
    activate_column_in, Content, Element, Tag, ACTIVE_CLASS, FEATURES_TABLE_ID,
};

fn main() {
    // Set up file logging
    let log_file = File::create("features.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let column = std::env::args().nth(1).unwrap_or_else(|| "col2".to_string());

    let mut page = Element::div()
        .id("page")
        .child(features_tables());

    match activate_column_in(&mut page, FEATURES_TABLE_ID, &column) {
        Ok(()) => print_tables(&page),
        Err(err) => eprintln!("{err}"),
    }
}

fn features_tables() -> Element {
    Element::div()
        .id(FEATURES_TABLE_ID)
        .child(plans_table())
        .child(limits_table())
}

fn plans_table() -> Element {
    Element::table()
        .id("plans")
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

fn limits_table() -> Element {
    Element::table()
        .id("limits")
        .child(
            Element::tr()
                .child(Element::th("Limit"))
                .child(Element::th("Basic").class("col1"))
                .child(Element::th("Pro").class("col2"))
                .child(Element::th("Max").class("col3")),
        )
        .child(
            Element::tr()
                .child(Element::td("Users"))
                .child(Element::td("1").class("col1"))
                .child(Element::td("10").class("col2"))
                .child(Element::td("Unlimited").class("col3")),
        )
}

/// Print each table row per line, wrapping the highlighted cells in brackets.
fn print_tables(root: &Element) {
    if let Content::Children(children) = &root.content {
        for child in children {
            if root.tag == Tag::Tr {
                print_cell(child);
            } else {
                print_tables(child);
            }
        }
        if root.tag == Tag::Tr {
            println!();
        }
        if root.tag == Tag::Table {
            println!();
        }
    }
}

fn print_cell(cell: &Element) {
    let text = match &cell.content {
        Content::Text(text) => text.as_str(),
        _ => "",
    };
    if cell.has_class(ACTIVE_CLASS) {
        print!("[{text:^11}]");
    } else {
        print!(" {text:^11} ");
    }
}
