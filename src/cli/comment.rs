use std::path::PathBuf;

use crate::cli::{resolve_output, resolve_profile};
use crate::error::Result;
use crate::exporter::{project_rows, write_rows, EXPORT_FILENAME};
use crate::importer::import_clients;
use crate::store::Portfolio;

pub fn run(
    file: &str,
    id: &str,
    text: &str,
    output: Option<&str>,
    profile: Option<&str>,
) -> Result<()> {
    let path = PathBuf::from(file);
    let clients = import_clients(&path, resolve_profile(profile)?)?;

    let mut portfolio = Portfolio::from_clients(clients);
    portfolio.update_comment(id, text)?;

    let out = resolve_output(output, EXPORT_FILENAME)?;
    write_rows(&out, &project_rows(portfolio.clients()))?;
    println!("Updated comment for {id}");
    println!("Wrote {}", out.display());
    Ok(())
}
