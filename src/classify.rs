//! Cell classification for the users sheet.
//!
//! Every cell of the grid gets exactly one [`CellClass`]. Row 0 is the
//! header; a data row whose status reads "Error" is greyed out as a whole;
//! otherwise only the email and age columns are checked.

pub const COLUMN_COUNT: usize = 4;

pub const NAME: usize = 0;
pub const EMAIL: usize = 1;
pub const AGE: usize = 2;
pub const STATUS: usize = 3;

/// One line of the sheet: name, email, age, status.
pub type Row = [String; COLUMN_COUNT];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellClass {
    Header,
    ErrorRow,
    InvalidEmail,
    InvalidAge,
    Normal,
}

#[cfg(test)]
impl CellClass {
    pub(crate) const ALL: [CellClass; 5] = [
        CellClass::Header,
        CellClass::ErrorRow,
        CellClass::InvalidEmail,
        CellClass::InvalidAge,
        CellClass::Normal,
    ];
}

pub fn is_error_status(status: &str) -> bool {
    status.eq_ignore_ascii_case("Error")
}

pub fn has_valid_email(email: &str) -> bool {
    email.contains('@')
}

/// Plain i32 parse: an optional sign is fine, surrounding whitespace is not.
pub fn has_valid_age(age: &str) -> bool {
    matches!(age.parse::<i32>(), Ok(value) if value >= 0)
}

pub fn classify_cell(row_index: usize, column: usize, row: &Row) -> CellClass {
    if row_index == 0 {
        return CellClass::Header;
    }
    if is_error_status(&row[STATUS]) {
        return CellClass::ErrorRow;
    }

    match column {
        EMAIL if !has_valid_email(&row[EMAIL]) => CellClass::InvalidEmail,
        AGE if !has_valid_age(&row[AGE]) => CellClass::InvalidAge,
        _ => CellClass::Normal,
    }
}

pub fn classify_row(row_index: usize, row: &Row) -> [CellClass; COLUMN_COUNT] {
    std::array::from_fn(|column| classify_cell(row_index, column, row))
}

pub fn classify_rows(rows: &[Row]) -> Vec<[CellClass; COLUMN_COUNT]> {
    rows.iter()
        .enumerate()
        .map(|(row_index, row)| classify_row(row_index, row))
        .collect()
}
