use crate::cell::CellValue;

/// Which Client field a column feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    BirthDate,
    RegistrationDate,
    Contact,
    ContactBirthday,
    ContactPhone,
    ContactEmail,
    TaxId,
    Activity,
    /// Legacy "Cadastro" column: mirrors the registration date on export,
    /// ignored on import.
    RegistrationCopy,
    LastPurchaseDate,
    Phone,
    Cellphone,
    Email,
    BudgetStatus,
    OrderCount,
    Total,
    AverageTicket,
    Comment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Date,
    Number,
    Text,
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub field: Field,
    pub kind: FieldKind,
    pub label: &'static str,
}

const fn col(field: Field, kind: FieldKind, label: &'static str) -> Column {
    Column { field, kind, label }
}

/// The full 19-column workbook layout, positions and labels as shipped by
/// the upstream CRM export.
const EXTENDED: &[Column] = &[
    col(Field::Name, FieldKind::Text, "Cliente"),
    col(Field::BirthDate, FieldKind::Date, "Dt. Nascimento"),
    col(Field::RegistrationDate, FieldKind::Date, "Dt. Cadastro"),
    col(Field::Contact, FieldKind::Text, "Contato"),
    col(Field::ContactBirthday, FieldKind::Date, "Dt. Aniversário Contato"),
    col(Field::ContactPhone, FieldKind::Text, "Tel. Contato"),
    col(Field::ContactEmail, FieldKind::Text, "Email Contato"),
    col(Field::TaxId, FieldKind::Text, "CNPJ/CPF"),
    col(Field::Activity, FieldKind::Text, "Atividade"),
    col(Field::RegistrationCopy, FieldKind::Date, "Cadastro"),
    col(Field::LastPurchaseDate, FieldKind::Date, "Dt. Última Compra"),
    col(Field::Phone, FieldKind::Text, "Telefone"),
    col(Field::Cellphone, FieldKind::Text, "Celular"),
    col(Field::Email, FieldKind::Text, "Email"),
    col(Field::BudgetStatus, FieldKind::Text, "Status Orc."),
    col(Field::OrderCount, FieldKind::Number, "Qtd. Pedidos"),
    col(Field::Total, FieldKind::Number, "TOTAL"),
    col(Field::AverageTicket, FieldKind::Number, "Ticket Médio"),
    col(Field::Comment, FieldKind::Text, "Comentário"),
];

/// Early two-column layout: just the client and the last purchase date.
const MINIMAL: &[Column] = &[
    col(Field::Name, FieldKind::Text, "Cliente"),
    col(Field::LastPurchaseDate, FieldKind::Date, "Dt. Última Compra"),
];

/// An ordered column layout. Both historical layouts are expressed as data
/// so the record builder never hard-codes positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Extended,
    Minimal,
}

impl Profile {
    pub fn columns(&self) -> &'static [Column] {
        match self {
            Profile::Extended => EXTENDED,
            Profile::Minimal => MINIMAL,
        }
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.columns().iter().map(|c| c.label).collect()
    }

    /// Pick a layout from the header row: anything narrower than three
    /// columns is the legacy name+date file.
    pub fn detect(header: Option<&Vec<CellValue>>) -> Self {
        match header {
            Some(row) if row.len() <= 2 => Profile::Minimal,
            _ => Profile::Extended,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "extended" => Some(Profile::Extended),
            "minimal" => Some(Profile::Minimal),
            _ => None,
        }
    }
}
