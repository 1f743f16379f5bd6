use std::path::PathBuf;

use async_trait::async_trait;

use crate::models::row::{RowStatus, STATUS_COLUMN};

#[async_trait]
pub trait SheetClient: Send + Sync {
    async fn fetch_grid(&self) -> Result<Vec<Vec<String>>, String>;
    async fn write_status(&self, row_index: usize, status: RowStatus) -> Result<(), String>;
}

// A local CSV file standing in for the hosted sheet. Cells are kept as
// display-formatted strings.
pub struct CsvSheetClient {
    path: PathBuf,
}

impl CsvSheetClient {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_records(&self) -> Result<Vec<Vec<String>>, String> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| format!("Failed to open sheet {}: {}", self.path.display(), e))?;
        let mut grid = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| format!("Failed to read sheet row: {}", e))?;
            grid.push(record.iter().map(|cell| cell.to_string()).collect());
        }
        Ok(grid)
    }

    fn write_records(&self, grid: &[Vec<String>]) -> Result<(), String> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| format!("Failed to open sheet {} for writing: {}", self.path.display(), e))?;
        for record in grid {
            writer
                .write_record(record)
                .map_err(|e| format!("Failed to write sheet row: {}", e))?;
        }
        writer
            .flush()
            .map_err(|e| format!("Failed to flush sheet: {}", e))
    }
}

#[async_trait]
impl SheetClient for CsvSheetClient {
    async fn fetch_grid(&self) -> Result<Vec<Vec<String>>, String> {
        self.read_records()
    }

    async fn write_status(&self, row_index: usize, status: RowStatus) -> Result<(), String> {
        let mut grid = self.read_records()?;
        let Some(record) = grid.get_mut(row_index) else {
            return Err(format!("Row {} is outside the sheet", row_index + 1));
        };
        while record.len() <= STATUS_COLUMN {
            record.push(String::new());
        }
        record[STATUS_COLUMN] = status.as_cell().to_string();
        self.write_records(&grid)
    }
}
