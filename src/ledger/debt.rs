use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Debt {
    pub id: u64,
    pub name: String,
    pub total: f64,
    pub paid: f64,
    pub remaining: f64,
    pub interest: f64,
    #[serde(rename = "dueDate")]
    pub due_date: String,
}

impl Debt {
    pub fn new(id: u64, name: impl Into<String>, total: f64, interest: f64, due_date: &str) -> Self {
        Self {
            id,
            name: name.into(),
            total,
            paid: 0.0,
            remaining: total,
            interest,
            due_date: due_date.to_string(),
        }
    }
}
