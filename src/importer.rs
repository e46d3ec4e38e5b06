use std::path::Path;

use calamine::Reader;

use crate::builder::{build_clients, IdGen};
use crate::cell::CellValue;
use crate::error::{CarteiraError, Result};
use crate::models::Client;
use crate::schema::Profile;

// ---------------------------------------------------------------------------
// Format dispatch
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SheetFormat {
    Workbook,
    Csv,
}

impl SheetFormat {
    /// Decide how to decode from the file extension. Anything that is not a
    /// workbook or delimited-text file is rejected before any read happens.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "xlsx" | "xls" | "xlsm" | "xlsb" | "ods" => Ok(Self::Workbook),
            "csv" => Ok(Self::Csv),
            _ => Err(CarteiraError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }

    /// Decode the file into untyped rows of cells. Fails only when the
    /// container itself cannot be read; cell-level oddities are left to the
    /// normalizers.
    pub fn read_rows(&self, path: &Path) -> Result<Vec<Vec<CellValue>>> {
        match self {
            Self::Workbook => read_workbook_rows(path),
            Self::Csv => read_csv_rows(path),
        }
    }
}

fn read_workbook_rows(path: &Path) -> Result<Vec<Vec<CellValue>>> {
    let mut workbook = calamine::open_workbook_auto(path)
        .map_err(|e| CarteiraError::Decode(e.to_string()))?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| CarteiraError::Decode("workbook has no sheets".to_string()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| CarteiraError::Decode(e.to_string()))?;
    Ok(range
        .rows()
        .map(|row| row.iter().map(CellValue::from).collect())
        .collect())
}

fn read_csv_rows(path: &Path) -> Result<Vec<Vec<CellValue>>> {
    let file = std::fs::File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(std::io::BufReader::new(file));
    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(CellValue::from_csv_field).collect());
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// import_clients
// ---------------------------------------------------------------------------

/// Decode a file and build the client list. The column profile is detected
/// from the header width unless forced by the caller. Zero clients is a
/// valid outcome; only container-level failures are errors.
pub fn import_clients(path: &Path, profile: Option<Profile>) -> Result<Vec<Client>> {
    let format = SheetFormat::from_path(path)?;
    let rows = format.read_rows(path)?;
    let profile = profile.unwrap_or_else(|| Profile::detect(rows.first()));
    let mut ids = IdGen::new();
    Ok(build_clients(&rows, profile, &mut ids))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn write_csv(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_from_path_accepts_workbooks_and_csv() {
        assert_eq!(
            SheetFormat::from_path(Path::new("clientes.xlsx")).unwrap(),
            SheetFormat::Workbook
        );
        assert_eq!(
            SheetFormat::from_path(Path::new("clientes.XLS")).unwrap(),
            SheetFormat::Workbook
        );
        assert_eq!(
            SheetFormat::from_path(Path::new("clientes.csv")).unwrap(),
            SheetFormat::Csv
        );
    }

    #[test]
    fn test_from_path_rejects_other_types_before_decoding() {
        assert!(matches!(
            SheetFormat::from_path(Path::new("clientes.pdf")),
            Err(CarteiraError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            SheetFormat::from_path(Path::new("clientes")),
            Err(CarteiraError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_import_extended_csv() {
        let dir = tempfile::tempdir().unwrap();
        let mut content = String::new();
        content.push_str(&Profile::Extended.labels().join(","));
        content.push('\n');
        content.push_str(
            "Padaria Central,,,,,,,,,,15/01/2025,,,,,7,\"R$ 1.234,56\",,bom cliente\n",
        );
        content.push_str("Sem Data,,,,,,,,,,,,,,,,,,\n");
        let path = write_csv(dir.path(), "clientes.csv", &content);

        let clients = import_clients(&path, None).unwrap();
        assert_eq!(clients.len(), 1);
        let c = &clients[0];
        assert_eq!(c.name, "Padaria Central");
        assert_eq!(
            c.last_purchase_date,
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
        );
        assert_eq!(c.order_count, Some(7));
        assert_eq!(c.total, Some(1234.56));
        assert_eq!(c.comment.as_deref(), Some("bom cliente"));
    }

    #[test]
    fn test_import_minimal_csv_detected_from_header() {
        let dir = tempfile::tempdir().unwrap();
        let content = "Cliente,Dt. Última Compra\nPadaria Central,15/01/2025\n";
        let path = write_csv(dir.path(), "clientes.csv", content);

        let clients = import_clients(&path, None).unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].month, 1);
        assert_eq!(clients[0].year, 2025);
        assert_eq!(clients[0].total, None);
    }

    #[test]
    fn test_import_all_rows_invalid_yields_empty_ok() {
        let dir = tempfile::tempdir().unwrap();
        let content = "Cliente,Dt. Última Compra\n,15/01/2025\nPadaria,32/01/2025\n";
        let path = write_csv(dir.path(), "clientes.csv", content);

        let clients = import_clients(&path, None).unwrap();
        assert!(clients.is_empty());
    }

    #[test]
    fn test_import_missing_file_is_hard_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nao_existe.csv");
        assert!(import_clients(&path, None).is_err());
    }

    #[test]
    fn test_import_corrupt_workbook_is_hard_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrompido.xlsx");
        std::fs::write(&path, b"this is not a zip container").unwrap();
        assert!(matches!(
            import_clients(&path, None),
            Err(CarteiraError::Decode(_))
        ));
    }

    #[test]
    fn test_profile_override_wins_over_detection() {
        let dir = tempfile::tempdir().unwrap();
        // A two-column file forced through the extended layout has no cell
        // at the last-purchase position, so every row is rejected.
        let content = "Cliente,Dt. Última Compra\nPadaria Central,15/01/2025\n";
        let path = write_csv(dir.path(), "clientes.csv", content);
        let clients = import_clients(&path, Some(Profile::Extended)).unwrap();
        assert!(clients.is_empty());
        let clients = import_clients(&path, Some(Profile::Minimal)).unwrap();
        assert_eq!(clients.len(), 1);
    }
}
