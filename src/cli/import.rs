use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::board::group_by_period;
use crate::cli::resolve_profile;
use crate::error::Result;
use crate::fmt::money_brl;
use crate::importer::import_clients;
use crate::models::month_name;
use crate::store::Portfolio;

pub fn run(file: &str, profile: Option<&str>) -> Result<()> {
    let path = PathBuf::from(file);

    // Each import replaces the whole session collection.
    let mut portfolio = Portfolio::new();
    portfolio.replace(import_clients(&path, resolve_profile(profile)?)?);

    if portfolio.is_empty() {
        println!("{}", "No clients found in file.".yellow());
        return Ok(());
    }

    println!("{} clients imported from {}", portfolio.len(), path.display());
    println!();

    let mut table = Table::new();
    table.set_header(vec!["Year", "Month", "Clients", "Total"]);
    for year in group_by_period(portfolio.clients()) {
        for month in &year.months {
            table.add_row(vec![
                Cell::new(month.year),
                Cell::new(month_name(month.month)),
                Cell::new(month.clients.len()),
                Cell::new(money_brl(month.total)),
            ]);
        }
    }
    println!("{table}");
    Ok(())
}
