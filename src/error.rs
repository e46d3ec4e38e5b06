use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarteiraError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX write error: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    #[error("Could not read workbook: {0}")]
    Decode(String),

    #[error("Unsupported file type: {0} (expected .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("No client with id: {0}")]
    UnknownClient(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CarteiraError>;
