#![allow(dead_code)]

use std::path::PathBuf;

use designer_lib::{
    core::types::DocumentKind,
    documents::{parse_document, Document},
    sections::{table::TableView, Section},
};

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("read fixture")
}

pub fn load(kind: DocumentKind, name: &str) -> Document {
    parse_document(kind, &fixture(name)).expect("fixture parses")
}

pub fn document(kind: DocumentKind, value: serde_json::Value) -> Document {
    Document::from_value(kind, value).expect("document parses")
}

pub fn ids(sections: &[Section]) -> Vec<&str> {
    sections.iter().map(|section| section.id.as_str()).collect()
}

pub fn section<'a>(sections: &'a [Section], id: &str) -> &'a Section {
    designer_lib::navigation::find_section(sections, id).expect("section present")
}

pub fn first_table<'a>(sections: &'a [Section], id: &str) -> &'a TableView {
    section(sections, id).tables().next().expect("section has a table")
}

pub fn column(table: &TableView, key: &str) -> Vec<String> {
    table
        .rows
        .iter()
        .map(|row| row.cell(key).expect("cell present").display.clone())
        .collect()
}
