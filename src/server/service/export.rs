//! Spreadsheet rendering of trip listings.

use chrono::{DateTime, Utc};
use rust_xlsxwriter::Workbook;

use crate::server::{error::AppError, model::trip::TripView};

pub const CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub const SHEET_NAME: &str = "Sheet1";

const HEADERS: [&str; 12] = [
    "SlNo",
    "Vehicle No",
    "Status",
    "Product Type",
    "Product Weight",
    "Transporter Name",
    "Pickup Location Name",
    "Pickup Date",
    "Pickup By",
    "Drop Location Name",
    "Drop Date",
    "Verified By",
];

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Placeholder for drop columns of trips not yet delivered.
const EMPTY: &str = "-";

/// A single cell of the export sheet.
#[derive(Debug, Clone, PartialEq)]
enum Cell {
    Text(String),
    Number(f64),
}

/// Writes trips as an xlsx workbook with a header row, one row per trip in the given
/// order.
///
/// # Returns
/// - `Ok(Vec<u8>)` - The workbook file contents
/// - `Err(AppError)` - Writer failure
pub fn write_xlsx(trips: &[TripView]) -> Result<Vec<u8>, AppError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, header) in (0u16..).zip(HEADERS) {
        sheet.write_string(0, col, header)?;
    }

    for (row_num, view) in (1u32..).zip(trips) {
        for (col, cell) in (0u16..).zip(row(view)) {
            match cell {
                Cell::Text(text) => sheet.write_string(row_num, col, text)?,
                Cell::Number(number) => sheet.write_number(row_num, col, number)?,
            };
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Attachment name for an export produced at `at`.
pub fn file_name(at: DateTime<Utc>) -> String {
    format!("trips-{}.xlsx", at.format("%d-%m-%Y-%H-%M-%S"))
}

fn row(view: &TripView) -> [Cell; 12] {
    let trip = &view.trip;
    let text = |value: &str| Cell::Text(value.to_string());

    [
        text(&trip.slno),
        text(&trip.vehicle_no),
        text(trip.status.as_str()),
        text(&trip.product_type),
        Cell::Number(trip.product_weight),
        text(view.transporter_name.as_deref().unwrap_or_default()),
        text(view.pickup_location_name.as_deref().unwrap_or_default()),
        Cell::Text(trip.pickup_date.format(DATE_FORMAT).to_string()),
        text(&trip.pick_by),
        text(view.drop_location_name.as_deref().unwrap_or_default()),
        Cell::Text(
            trip.drop_date
                .map(|date| date.format(DATE_FORMAT).to_string())
                .unwrap_or_else(|| EMPTY.to_string()),
        ),
        text(
            trip.drop_by
                .as_deref()
                .filter(|actor| !actor.is_empty())
                .unwrap_or(EMPTY),
        ),
    ]
}

/// Reads the export sheet back as display strings, one `Vec` per row.
#[cfg(test)]
pub fn read_sheet(bytes: Vec<u8>) -> Vec<Vec<String>> {
    use calamine::{Reader, Xlsx};

    let mut workbook = Xlsx::new(std::io::Cursor::new(bytes)).unwrap();
    let range = workbook.worksheet_range(SHEET_NAME).unwrap();

    range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}
