use std::path::PathBuf;

use colored::Colorize;

use crate::cli::{resolve_output, resolve_profile};
use crate::error::Result;
use crate::exporter::{project_rows, write_rows, EXPORT_FILENAME};
use crate::importer::import_clients;
use crate::store::Portfolio;

pub fn run(file: &str, output: Option<&str>, profile: Option<&str>) -> Result<()> {
    let path = PathBuf::from(file);
    let portfolio = Portfolio::from_clients(import_clients(&path, resolve_profile(profile)?)?);

    if portfolio.is_empty() {
        println!("{}", "No clients found in file.".yellow());
    }

    let out = resolve_output(output, EXPORT_FILENAME)?;
    write_rows(&out, &project_rows(portfolio.clients()))?;
    println!("{} clients exported", portfolio.len());
    println!("Wrote {}", out.display());
    Ok(())
}
