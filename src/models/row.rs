use serde::{Deserialize, Serialize};

// The status flag lives in the sixth sheet column (0-based index 5).
pub const STATUS_COLUMN: usize = 5;
// The first grid row holds column headers and is never processed.
pub const HEADER_ROWS: usize = 1;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus {
    Empty,
    Processed,
    Error,
}

impl RowStatus {
    pub fn from_cell(cell: &str) -> Self {
        match cell {
            "PROCESSED" => RowStatus::Processed,
            "ERROR" => RowStatus::Error,
            _ => RowStatus::Empty,
        }
    }

    pub fn as_cell(&self) -> &'static str {
        match self {
            RowStatus::Empty => "",
            RowStatus::Processed => "PROCESSED",
            RowStatus::Error => "ERROR",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Row {
    pub index: usize,
    pub name: String,
    pub email: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub status: RowStatus,
}

impl Row {
    pub fn from_record(index: usize, record: &[String]) -> Self {
        let cell = |column: usize| record.get(column).cloned().unwrap_or_default();
        Row {
            index,
            name: cell(0),
            email: cell(1),
            title: cell(2),
            date: cell(3),
            time: cell(4),
            status: RowStatus::from_cell(&cell(STATUS_COLUMN)),
        }
    }
}

pub fn parse_rows(grid: &[Vec<String>]) -> Vec<Row> {
    grid.iter()
        .enumerate()
        .skip(HEADER_ROWS)
        .map(|(index, record)| Row::from_record(index, record))
        .collect()
}
