pub mod board;
pub mod comment;
pub mod export;
pub mod import;
pub mod init;
pub mod status;
pub mod template;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::{CarteiraError, Result};
use crate::schema::Profile;
use crate::settings;

/// Turn a `--profile` flag (or the configured default) into a layout.
/// None means auto-detect from the header row.
pub(crate) fn resolve_profile(arg: Option<&str>) -> Result<Option<Profile>> {
    let key = match arg {
        Some(k) => k.to_string(),
        None => settings::load_settings().profile,
    };
    if key == "auto" {
        return Ok(None);
    }
    Profile::from_key(&key)
        .map(Some)
        .ok_or_else(|| CarteiraError::Other(format!("unknown profile: {key} (use extended, minimal or auto)")))
}

/// Output path for a written artifact: explicit flag, or the configured
/// export directory plus the fixed filename.
pub(crate) fn resolve_output(output: Option<&str>, default_name: &str) -> Result<PathBuf> {
    let path = match output {
        Some(o) => PathBuf::from(o),
        None => settings::get_export_dir().join(default_name),
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(path)
}

#[derive(Parser)]
#[command(
    name = "carteira",
    about = "Import a client spreadsheet and organize it into a month/year purchase board."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up carteira: choose where exported files are written.
    Init {
        /// Directory for exported files (default: ~/Documents/carteira)
        #[arg(long = "export-dir")]
        export_dir: Option<String>,
    },
    /// Import a spreadsheet and summarize clients per month.
    Import {
        /// Path to an XLSX or CSV file
        file: String,
        /// Column layout: extended, minimal or auto
        #[arg(long)]
        profile: Option<String>,
    },
    /// Show the full month/year board for a spreadsheet.
    Board {
        /// Path to an XLSX or CSV file
        file: String,
        /// Column layout: extended, minimal or auto
        #[arg(long)]
        profile: Option<String>,
    },
    /// Update one client's comment and re-export the spreadsheet.
    Comment {
        /// Path to an XLSX or CSV file
        file: String,
        /// Client id as shown by `carteira board` (e.g. client-3)
        #[arg(long)]
        id: String,
        /// New comment text (empty clears the comment)
        #[arg(long)]
        text: String,
        /// Output path (default: <export_dir>/clientes_exportados.xlsx)
        #[arg(long)]
        output: Option<String>,
        /// Column layout: extended, minimal or auto
        #[arg(long)]
        profile: Option<String>,
    },
    /// Re-export clients to a fresh workbook.
    Export {
        /// Path to an XLSX or CSV file
        file: String,
        /// Output path (default: <export_dir>/clientes_exportados.xlsx)
        #[arg(long)]
        output: Option<String>,
        /// Column layout: extended, minimal or auto
        #[arg(long)]
        profile: Option<String>,
    },
    /// Write an empty, correctly-shaped template workbook.
    Template {
        /// Output path (default: <export_dir>/template_clientes.xlsx)
        #[arg(long)]
        output: Option<String>,
    },
    /// Show current settings.
    Status,
}
