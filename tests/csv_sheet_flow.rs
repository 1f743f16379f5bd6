use std::env;
use std::fs;
use std::path::PathBuf;

use uuid::Uuid;

use sheetBot::clients::sheet_client::{CsvSheetClient, SheetClient};
use sheetBot::models::row::RowStatus;

fn temp_sheet(contents: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("sheetbot_test_{}.csv", Uuid::new_v4()));
    fs::write(&path, contents).unwrap();
    path
}

#[tokio::test]
async fn fetch_grid_returns_display_values() {
    let path = temp_sheet(
        "Name,Email,Title,Date,Time,Status\n\
         Ana,ana@x.com,Kickoff,2024-05-01,10:00,\n",
    );
    let sheet = CsvSheetClient::new(&path);

    let grid = sheet.fetch_grid().await.unwrap();
    assert_eq!(grid.len(), 2);
    assert_eq!(grid[1][0], "Ana");
    assert_eq!(grid[1][4], "10:00");
    assert_eq!(grid[1][5], "");
}

#[tokio::test]
async fn write_status_updates_the_status_column() {
    let path = temp_sheet(
        "Name,Email,Title,Date,Time,Status\n\
         Ana,ana@x.com,Kickoff,2024-05-01,10:00,\n\
         Bo,bo@x.com,Retro,2024-05-02,15:00,\n",
    );
    let sheet = CsvSheetClient::new(&path);

    sheet.write_status(1, RowStatus::Processed).await.unwrap();
    sheet.write_status(2, RowStatus::Error).await.unwrap();

    let grid = sheet.fetch_grid().await.unwrap();
    assert_eq!(grid[1][5], "PROCESSED");
    assert_eq!(grid[2][5], "ERROR");
    // Untouched cells keep their display values.
    assert_eq!(grid[1][0], "Ana");
    assert_eq!(grid[2][3], "2024-05-02");
}

#[tokio::test]
async fn write_status_pads_short_records() {
    let path = temp_sheet(
        "Name,Email,Title,Date,Time,Status\n\
         Ana,ana@x.com,Kickoff,2024-05-01,10:00\n",
    );
    let sheet = CsvSheetClient::new(&path);

    sheet.write_status(1, RowStatus::Processed).await.unwrap();

    let grid = sheet.fetch_grid().await.unwrap();
    assert_eq!(grid[1].len(), 6);
    assert_eq!(grid[1][5], "PROCESSED");
}

#[tokio::test]
async fn write_status_rejects_rows_outside_the_sheet() {
    let path = temp_sheet("Name,Email,Title,Date,Time,Status\n");
    let sheet = CsvSheetClient::new(&path);

    let err = sheet.write_status(5, RowStatus::Error).await.unwrap_err();
    assert!(err.contains("outside the sheet"));
}

#[tokio::test]
async fn fetch_grid_reports_a_missing_file() {
    let path = env::temp_dir().join(format!("sheetbot_missing_{}.csv", Uuid::new_v4()));
    let sheet = CsvSheetClient::new(&path);

    let err = sheet.fetch_grid().await.unwrap_err();
    assert!(err.contains("Failed to open sheet"));
}
