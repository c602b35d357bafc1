use schemars::JsonSchema;
use serde::Serialize;

use super::{
    format::{date_cell, normalize, CellValue, DEFAULT_SEPARATOR},
    status::RowStatus,
};
use crate::{
    core::types::{RecordKey, SourceReference},
    documents::{FieldValue, Record},
    provenance::{build_indicator, Indicator},
};

/// Declarative projection of one record field into a table cell.
pub struct TableColumn<R> {
    pub key: &'static str,
    pub header: &'static str,
    pub accessor: fn(&R) -> Option<&FieldValue>,
    pub class_name: Option<&'static str>,
    pub separator: &'static str,
    pub datetime: bool,
}

impl<R> TableColumn<R> {
    pub fn new(
        key: &'static str,
        header: &'static str,
        accessor: fn(&R) -> Option<&FieldValue>,
    ) -> Self {
        Self {
            key,
            header,
            accessor,
            class_name: None,
            separator: DEFAULT_SEPARATOR,
            datetime: false,
        }
    }

    /// Renders the cell through [`date_cell`]: formatted timestamp, or
    /// `Not set` when absent.
    pub fn datetime(mut self) -> Self {
        self.datetime = true;
        self
    }

    pub fn joined(mut self, separator: &'static str) -> Self {
        self.separator = separator;
        self
    }

    pub fn class(mut self, class_name: &'static str) -> Self {
        self.class_name = Some(class_name);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnHeader {
    pub key: String,
    pub header: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub key: String,
    pub display: String,
    pub value: CellValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub record_key: RecordKey,
    pub index: usize,
    pub cells: Vec<Cell>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RowStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Indicator>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<SourceReference>,
}

impl TableRow {
    pub fn cell(&self, key: &str) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.key == key)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<TableRow>,
}

impl TableView {
    /// Attaches a status cell to every row.
    pub fn with_row_status<F>(mut self, status_for: F) -> Self
    where
        F: Fn(&RecordKey) -> RowStatus,
    {
        for row in &mut self.rows {
            row.status = Some(status_for(&row.record_key));
        }
        self
    }

    pub fn has_status(&self) -> bool {
        self.rows.iter().any(|row| row.status.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn project<R>(column: &TableColumn<R>, fields: &R) -> Cell {
    let raw = (column.accessor)(fields);
    let value = if column.datetime {
        date_cell(raw)
    } else {
        normalize(raw)
    };
    Cell {
        key: column.key.to_string(),
        display: value.display(column.separator),
        value,
    }
}

pub const CREATED_COLUMN: &str = "created_at";

pub struct TableBuilder<'a, R> {
    columns: &'a [TableColumn<R>],
    title: Option<String>,
    show_created: bool,
}

impl<'a, R> TableBuilder<'a, R> {
    pub fn new(columns: &'a [TableColumn<R>]) -> Self {
        Self {
            columns,
            title: None,
            show_created: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn show_created(mut self, show: bool) -> Self {
        self.show_created = show;
        self
    }

    /// Projects records in input order.
    pub fn build(&self, records: &[Record<R>]) -> TableView {
        let mut columns: Vec<ColumnHeader> = self
            .columns
            .iter()
            .map(|column| ColumnHeader {
                key: column.key.to_string(),
                header: column.header.to_string(),
                class_name: column.class_name.map(ToString::to_string),
            })
            .collect();
        if self.show_created {
            columns.push(ColumnHeader {
                key: CREATED_COLUMN.to_string(),
                header: "Created".to_string(),
                class_name: Some("table-header-date".to_string()),
            });
        }

        let rows = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let mut cells: Vec<Cell> = self
                    .columns
                    .iter()
                    .map(|column| project(column, &record.fields))
                    .collect();
                if self.show_created {
                    let created = date_cell(
                        record
                            .created_at
                            .as_ref()
                            .map(|raw| FieldValue::Text(raw.clone()))
                            .as_ref(),
                    );
                    cells.push(Cell {
                        key: CREATED_COLUMN.to_string(),
                        display: created.display(DEFAULT_SEPARATOR),
                        value: created,
                    });
                }
                TableRow {
                    record_key: record.key.clone(),
                    index,
                    cells,
                    status: None,
                    sources: build_indicator(&record.references),
                    references: record.references.clone(),
                }
            })
            .collect();

        TableView {
            title: self.title.clone(),
            columns,
            rows,
        }
    }
}
