use chrono::{Datelike, NaiveDate};

/// One imported client record. Built only by the record builder; `month` and
/// `year` are caches of `last_purchase_date` (month is 1-based, January = 1)
/// and are never set independently.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub registration_date: Option<NaiveDate>,
    pub contact: Option<String>,
    pub contact_birthday: Option<NaiveDate>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub tax_id: Option<String>,
    pub activity: Option<String>,
    pub last_purchase_date: NaiveDate,
    pub phone: Option<String>,
    pub cellphone: Option<String>,
    pub email: Option<String>,
    pub budget_status: Option<String>,
    pub order_count: Option<u32>,
    pub total: Option<f64>,
    pub average_ticket: Option<f64>,
    pub comment: Option<String>,
    pub month: u32,
    pub year: i32,
}

impl Client {
    pub fn new(id: String, name: String, last_purchase_date: NaiveDate) -> Self {
        Self {
            id,
            name,
            birth_date: None,
            registration_date: None,
            contact: None,
            contact_birthday: None,
            contact_phone: None,
            contact_email: None,
            tax_id: None,
            activity: None,
            last_purchase_date,
            phone: None,
            cellphone: None,
            email: None,
            budget_status: None,
            order_count: None,
            total: None,
            average_ticket: None,
            comment: None,
            month: last_purchase_date.month(),
            year: last_purchase_date.year(),
        }
    }
}

/// All clients whose last purchase falls in one (year, month) bucket.
#[derive(Debug, Clone)]
pub struct MonthGroup {
    pub month: u32,
    pub year: i32,
    pub clients: Vec<Client>,
    pub total: f64,
}

#[derive(Debug, Clone)]
pub struct YearGroup {
    pub year: i32,
    pub months: Vec<MonthGroup>,
}

/// Portuguese month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Janeiro",
        2 => "Fevereiro",
        3 => "Março",
        4 => "Abril",
        5 => "Maio",
        6 => "Junho",
        7 => "Julho",
        8 => "Agosto",
        9 => "Setembro",
        10 => "Outubro",
        11 => "Novembro",
        12 => "Dezembro",
        _ => "",
    }
}
