use crate::cell::{self, CellValue, EMPTY_CELL};
use crate::models::Client;
use crate::schema::{Field, FieldKind, Profile};

/// Monotonic id source injected into the builder. Ids are `client-N` in row
/// order, so reparsing the same file yields the same ids.
#[derive(Debug, Default)]
pub struct IdGen {
    next: u64,
}

impl IdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        self.next += 1;
        format!("client-{}", self.next)
    }
}

/// Map raw rows to Clients. Row 0 is the header and is always skipped.
/// Rows missing a name or a valid last-purchase date are dropped silently;
/// optional fields degrade to None on any conversion failure. An empty
/// result is a valid outcome, not an error.
pub fn build_clients(rows: &[Vec<CellValue>], profile: Profile, ids: &mut IdGen) -> Vec<Client> {
    let mut clients = Vec::new();
    for row in rows.iter().skip(1) {
        // Every data row consumes an id, so ids track source row positions
        // even when earlier rows are rejected.
        let id = ids.next_id();
        if row.len() < 2 {
            continue;
        }
        if let Some(client) = build_client(row, profile, id) {
            clients.push(client);
        }
    }
    clients
}

fn build_client(row: &[CellValue], profile: Profile, id: String) -> Option<Client> {
    let columns = profile.columns();
    let cell_at = |field: Field| -> &CellValue {
        columns
            .iter()
            .position(|c| c.field == field)
            .and_then(|i| row.get(i))
            .unwrap_or(&EMPTY_CELL)
    };

    let name = cell::parse_text(cell_at(Field::Name)).filter(|s| !s.is_empty())?;
    let last_purchase = cell::parse_date(cell_at(Field::LastPurchaseDate))?;

    let mut client = Client::new(id, name, last_purchase);
    for (i, column) in columns.iter().enumerate() {
        // Required fields are handled above; the mirror column is export-only.
        if matches!(
            column.field,
            Field::Name | Field::LastPurchaseDate | Field::RegistrationCopy
        ) {
            continue;
        }
        let raw = row.get(i).unwrap_or(&EMPTY_CELL);
        match column.kind {
            FieldKind::Date => {
                let value = cell::parse_date(raw);
                match column.field {
                    Field::BirthDate => client.birth_date = value,
                    Field::RegistrationDate => client.registration_date = value,
                    Field::ContactBirthday => client.contact_birthday = value,
                    _ => {}
                }
            }
            FieldKind::Number => {
                let value = cell::parse_number(raw);
                match column.field {
                    Field::OrderCount => {
                        client.order_count = value.filter(|n| *n >= 0.0).map(|n| n as u32)
                    }
                    Field::Total => client.total = value,
                    Field::AverageTicket => client.average_ticket = value,
                    _ => {}
                }
            }
            FieldKind::Text => {
                let value = cell::parse_text(raw).filter(|s| !s.is_empty());
                match column.field {
                    Field::Contact => client.contact = value,
                    Field::ContactPhone => client.contact_phone = value,
                    Field::ContactEmail => client.contact_email = value,
                    Field::TaxId => client.tax_id = value,
                    Field::Activity => client.activity = value,
                    Field::Phone => client.phone = value,
                    Field::Cellphone => client.cellphone = value,
                    Field::Email => client.email = value,
                    Field::BudgetStatus => client.budget_status = value,
                    Field::Comment => client.comment = value,
                    _ => {}
                }
            }
        }
    }
    Some(client)
}
