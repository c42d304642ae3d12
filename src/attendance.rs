use std::io;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};

/// One line of the attendance CSV: home team abbreviation, date, and an
/// optional game number for doubleheader dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRow {
    pub home_team: String,
    pub date: String,
    pub game_number: Option<u32>,
}

pub fn read_rows(path: &Path) -> Result<Vec<AttendanceRow>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    read_rows_from(file)
}

fn read_rows_from<R: io::Read>(input: R) -> Result<Vec<AttendanceRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("bad csv record on line {}", idx + 1))?;
        let row = parse_record(&record).with_context(|| format!("line {}", idx + 1))?;
        rows.push(row);
    }
    Ok(rows)
}

fn parse_record(record: &StringRecord) -> Result<AttendanceRow> {
    let home_team = record
        .get(0)
        .filter(|field| !field.is_empty())
        .ok_or_else(|| anyhow!("missing home team column"))?;
    let date = record
        .get(1)
        .filter(|field| !field.is_empty())
        .ok_or_else(|| anyhow!("missing date column"))?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .with_context(|| format!("date {date:?} is not YYYY-MM-DD"))?;

    let game_number = match record.get(2).filter(|field| !field.is_empty()) {
        Some(raw) => Some(
            raw.parse::<u32>()
                .with_context(|| format!("game number {raw:?} is not an integer"))?,
        ),
        None => None,
    };

    Ok(AttendanceRow {
        home_team: home_team.to_string(),
        date: date.to_string(),
        game_number,
    })
}
