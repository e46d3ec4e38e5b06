use std::path::Path;

use crate::error::Result;
use crate::fmt::{date_br, money_brl};
use crate::importer::SheetFormat;
use crate::models::Client;
use crate::schema::{Field, Profile};

pub const EXPORT_FILENAME: &str = "clientes_exportados.xlsx";
pub const TEMPLATE_FILENAME: &str = "template_clientes.xlsx";

const SHEET_NAME: &str = "Clientes";
const COLUMN_WIDTH: f64 = 20.0;

/// Project the client list back into the 19-column layout: a header row of
/// labels, then one row per client in collection order.
pub fn project_rows(clients: &[Client]) -> Vec<Vec<String>> {
    let profile = Profile::Extended;
    let mut rows = vec![header_row(profile)];
    for client in clients {
        rows.push(project_client(client, profile));
    }
    rows
}

/// Header plus one blank example row, for an empty starting file.
pub fn template_rows() -> Vec<Vec<String>> {
    let profile = Profile::Extended;
    let blank = vec![String::new(); profile.columns().len()];
    vec![header_row(profile), blank]
}

fn header_row(profile: Profile) -> Vec<String> {
    profile.labels().iter().map(|l| l.to_string()).collect()
}

fn project_client(c: &Client, profile: Profile) -> Vec<String> {
    profile
        .columns()
        .iter()
        .map(|column| match column.field {
            Field::Name => c.name.clone(),
            Field::BirthDate => date_br(c.birth_date),
            Field::RegistrationDate | Field::RegistrationCopy => date_br(c.registration_date),
            Field::Contact => c.contact.clone().unwrap_or_default(),
            Field::ContactBirthday => date_br(c.contact_birthday),
            Field::ContactPhone => c.contact_phone.clone().unwrap_or_default(),
            Field::ContactEmail => c.contact_email.clone().unwrap_or_default(),
            Field::TaxId => c.tax_id.clone().unwrap_or_default(),
            Field::Activity => c.activity.clone().unwrap_or_default(),
            Field::LastPurchaseDate => date_br(Some(c.last_purchase_date)),
            Field::Phone => c.phone.clone().unwrap_or_default(),
            Field::Cellphone => c.cellphone.clone().unwrap_or_default(),
            Field::Email => c.email.clone().unwrap_or_default(),
            Field::BudgetStatus => c.budget_status.clone().unwrap_or_default(),
            Field::OrderCount => c.order_count.map(|n| n.to_string()).unwrap_or_default(),
            Field::Total => c.total.map(money_brl).unwrap_or_default(),
            Field::AverageTicket => c.average_ticket.map(money_brl).unwrap_or_default(),
            Field::Comment => c.comment.clone().unwrap_or_default(),
        })
        .collect()
}

/// Encode display rows to an xlsx or csv file picked by extension.
pub fn write_rows(path: &Path, rows: &[Vec<String>]) -> Result<()> {
    match SheetFormat::from_path(path)? {
        SheetFormat::Workbook => write_xlsx(path, rows),
        SheetFormat::Csv => write_csv(path, rows),
    }
}

fn write_xlsx(path: &Path, rows: &[Vec<String>]) -> Result<()> {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            worksheet.write_string(r as u32, c as u16, value.as_str())?;
        }
    }
    if let Some(header) = rows.first() {
        for c in 0..header.len() {
            worksheet.set_column_width(c as u16, COLUMN_WIDTH)?;
        }
    }
    workbook.save(path)?;
    Ok(())
}

fn write_csv(path: &Path, rows: &[Vec<String>]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
