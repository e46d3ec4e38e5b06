use chrono::{Duration, NaiveDate};

/// An untyped spreadsheet cell, decoupled from the calamine/csv readers so
/// the normalizers below work on either source.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Date(NaiveDate),
}

pub const EMPTY_CELL: CellValue = CellValue::Empty;

impl CellValue {
    pub fn from_csv_field(field: &str) -> Self {
        if field.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(field.to_string())
        }
    }
}

impl From<&calamine::Data> for CellValue {
    fn from(data: &calamine::Data) -> Self {
        use calamine::Data;
        match data {
            Data::Empty | Data::Error(_) => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Float(f) => CellValue::Number(*f),
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Bool(b) => CellValue::Text(b.to_string()),
            // Excel stores dates as serials; keep the serial and let
            // parse_date apply the epoch arithmetic.
            Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        }
    }
}

/// Convert a cell to a calendar date. Total: anything unparseable is None.
///
/// Numeric cells are Excel serials counted from 1899-12-30 (the epoch that
/// absorbs the 1900 leap-year bug). Text cells are split on `/`, `-` or `.`
/// and read day-first; a 2-digit year means 2000+.
pub fn parse_date(cell: &CellValue) -> Option<NaiveDate> {
    match cell {
        CellValue::Date(d) => Some(*d),
        CellValue::Number(serial) => {
            let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
            let millis = (serial * 86_400_000.0) as i64;
            Some(epoch.checked_add_signed(Duration::milliseconds(millis))?.date())
        }
        CellValue::Text(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            let parts: Vec<&str> = s.split(['/', '-', '.']).collect();
            if parts.len() != 3 {
                return None;
            }
            let day: u32 = parts[0].trim().parse().ok()?;
            let month: u32 = parts[1].trim().parse().ok()?;
            let mut year: i32 = parts[2].trim().parse().ok()?;
            if year < 100 {
                year += 2000;
            }
            // from_ymd_opt rejects rollovers (day 32, month 13) outright.
            NaiveDate::from_ymd_opt(year, month, day)
        }
        CellValue::Empty => None,
    }
}

/// Convert a cell to a number, tolerating Brazilian currency text:
/// `R$ 1.234,56` -> 1234.56. Unparseable text is None, never an error.
pub fn parse_number(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Number(n) => Some(*n),
        CellValue::Text(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| !matches!(c, 'R' | '$' | '.') && !c.is_whitespace())
                .map(|c| if c == ',' { '.' } else { c })
                .collect();
            if cleaned.is_empty() {
                return None;
            }
            cleaned.parse().ok()
        }
        CellValue::Date(_) | CellValue::Empty => None,
    }
}

/// Stringify and trim a cell. Integral numbers drop the trailing `.0` so
/// tax IDs and phone digits survive a pass through a numeric cell.
pub fn parse_text(cell: &CellValue) -> Option<String> {
    match cell {
        CellValue::Empty => None,
        CellValue::Text(s) => Some(s.trim().to_string()),
        CellValue::Number(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                Some(format!("{}", *n as i64))
            } else {
                Some(n.to_string())
            }
        }
        CellValue::Date(d) => Some(d.format("%d/%m/%Y").to_string()),
    }
}
