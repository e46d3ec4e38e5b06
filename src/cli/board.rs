use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::board::group_by_period;
use crate::cli::resolve_profile;
use crate::error::Result;
use crate::fmt::{date_br, money_brl};
use crate::importer::import_clients;
use crate::models::month_name;

pub fn run(file: &str, profile: Option<&str>) -> Result<()> {
    let path = PathBuf::from(file);
    let clients = import_clients(&path, resolve_profile(profile)?)?;

    if clients.is_empty() {
        println!("{}", "No clients found in file.".yellow());
        return Ok(());
    }

    for year in group_by_period(&clients) {
        for month in &year.months {
            let label = format!("{} {}", month_name(month.month), month.year);
            println!(
                "{}  {} clients  {}",
                label.bold(),
                month.clients.len(),
                money_brl(month.total).green()
            );

            let mut table = Table::new();
            table.set_header(vec!["ID", "Client", "Last Purchase", "Orders", "Total", "Comment"]);
            for client in &month.clients {
                table.add_row(vec![
                    Cell::new(&client.id),
                    Cell::new(&client.name),
                    Cell::new(date_br(Some(client.last_purchase_date))),
                    Cell::new(
                        client
                            .order_count
                            .map(|n| n.to_string())
                            .unwrap_or_default(),
                    ),
                    Cell::new(client.total.map(money_brl).unwrap_or_default()),
                    Cell::new(client.comment.clone().unwrap_or_default()),
                ]);
            }
            println!("{table}");
            println!();
        }
    }
    Ok(())
}
