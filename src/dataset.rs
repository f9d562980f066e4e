use crate::classify::Row;

pub const HEADER: [&str; 4] = ["Name", "Email", "Age", "Status"];

const USERS: [[&str; 4]; 5] = [
    ["Ivan", "ivan@example.com", "25", "OK"],
    ["Olga", "olga@example", "-1", "Error"],
    ["Alexey", "alexeyexample.com", "30", "OK"],
    ["Maria", "maria@example.com", "-5", "OK"],
    ["Sergey", "sergey@example.net", "40", "Error"],
];

/// Header row followed by the five sample users.
pub fn users() -> Vec<Row> {
    std::iter::once(HEADER)
        .chain(USERS)
        .map(|row| row.map(String::from))
        .collect()
}
