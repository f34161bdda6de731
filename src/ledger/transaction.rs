use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Direction of money for transactions and categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Some(EntryKind::Income),
            "expense" => Some(EntryKind::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who a transaction's amount is attributed to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Responsible {
    User1,
    User2,
    Both,
}

impl Responsible {
    pub fn as_str(self) -> &'static str {
        match self {
            Responsible::User1 => "user1",
            Responsible::User2 => "user2",
            Responsible::Both => "both",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user1" => Some(Responsible::User1),
            "user2" => Some(Responsible::User2),
            "both" => Some(Responsible::Both),
            _ => None,
        }
    }
}

impl fmt::Display for Responsible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[default]
    Completed,
    Pending,
}

/// A persisted income or expense entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub payment: String,
    pub responsible: Responsible,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub status: TransactionStatus,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == EntryKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == EntryKind::Expense
    }
}

/// A validated transaction that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub kind: EntryKind,
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub payment: String,
    pub responsible: Responsible,
    pub notes: String,
    pub status: TransactionStatus,
}

impl NewTransaction {
    pub fn new(kind: EntryKind, date: NaiveDate, amount: f64, responsible: Responsible) -> Self {
        Self {
            kind,
            date,
            description: String::new(),
            category: String::new(),
            amount,
            payment: String::new(),
            responsible,
            notes: String::new(),
            status: TransactionStatus::Completed,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_payment(mut self, payment: impl Into<String>) -> Self {
        self.payment = payment.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn into_transaction(self, id: i64) -> Transaction {
        Transaction {
            id,
            kind: self.kind,
            date: self.date,
            description: self.description,
            category: self.category,
            amount: self.amount,
            payment: self.payment,
            responsible: self.responsible,
            notes: self.notes,
            status: self.status,
        }
    }
}

/// Raw, untyped transaction input as typed into a form or command line.
#[derive(Debug, Clone, Default)]
pub struct TransactionDraft {
    pub kind: String,
    pub date: String,
    pub description: String,
    pub category: String,
    pub amount: String,
    pub payment: String,
    pub responsible: String,
    pub notes: String,
}

impl TransactionDraft {
    /// Checks required fields first, reporting every blank one at once, then
    /// parses each field into its typed form.
    pub fn validate(&self) -> Result<NewTransaction, ValidationError> {
        let required = [
            ("type", &self.kind),
            ("date", &self.date),
            ("description", &self.description),
            ("category", &self.category),
            ("amount", &self.amount),
            ("payment", &self.payment),
            ("responsible", &self.responsible),
        ];
        let missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| *field)
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        let kind = EntryKind::parse(&self.kind).ok_or_else(|| {
            ValidationError::invalid("type", format!("`{}` is not income or expense", self.kind))
        })?;
        let date = calendar_date::parse(&self.date).ok_or_else(|| {
            ValidationError::invalid("date", format!("`{}` is not a YYYY-MM-DD date", self.date))
        })?;
        let amount = parse_amount(&self.amount)?;
        let responsible = Responsible::parse(&self.responsible).ok_or_else(|| {
            ValidationError::invalid(
                "responsible",
                format!("`{}` is not user1, user2 or both", self.responsible),
            )
        })?;

        Ok(NewTransaction {
            kind,
            date,
            description: self.description.trim().to_string(),
            category: self.category.trim().to_string(),
            amount,
            payment: self.payment.trim().to_string(),
            responsible,
            notes: self.notes.trim().to_string(),
            status: TransactionStatus::Completed,
        })
    }
}

/// Parses a positive amount. A lone comma is accepted as the decimal separator.
pub fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    let normalized = if trimmed.contains(',') && !trimmed.contains('.') {
        trimmed.replacen(',', ".", 1)
    } else {
        trimmed.to_string()
    };
    let amount: f64 = normalized
        .parse()
        .map_err(|_| ValidationError::invalid("amount", format!("`{}` is not a number", raw)))?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ValidationError::invalid(
            "amount",
            "must be a positive number",
        ));
    }
    Ok(amount)
}

/// Serde adapter storing dates as `YYYY-MM-DD`. Full RFC 3339 timestamps are
/// accepted on read and reduced to their UTC calendar date.
pub(crate) mod calendar_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, FORMAT).ok().or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|stamp| stamp.naive_utc().date())
        })
    }

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid transaction date `{raw}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> TransactionDraft {
        TransactionDraft {
            kind: "expense".into(),
            date: "2025-03-14".into(),
            description: "Groceries".into(),
            category: "Alimentação".into(),
            amount: "152.40".into(),
            payment: "debit".into(),
            responsible: "both".into(),
            notes: String::new(),
        }
    }

    #[test]
    fn draft_reports_every_missing_field() {
        let draft = TransactionDraft {
            kind: "income".into(),
            ..TransactionDraft::default()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields(vec![
                "date",
                "description",
                "category",
                "amount",
                "payment",
                "responsible"
            ])
        );
    }

    #[test]
    fn draft_rejects_non_numeric_and_zero_amounts() {
        let mut draft = full_draft();
        draft.amount = "abc".into();
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::InvalidField { field: "amount", .. })
        ));

        draft.amount = "0".into();
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::InvalidField { field: "amount", .. })
        ));
    }

    #[test]
    fn draft_accepts_comma_decimal() {
        let mut draft = full_draft();
        draft.amount = "99,90".into();
        let parsed = draft.validate().expect("valid draft");
        assert!((parsed.amount - 99.9).abs() < f64::EPSILON);
        assert_eq!(parsed.responsible, Responsible::Both);
        assert_eq!(parsed.kind, EntryKind::Expense);
    }

    #[test]
    fn unknown_responsible_is_rejected() {
        let mut draft = full_draft();
        draft.responsible = "user3".into();
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::InvalidField {
                field: "responsible",
                ..
            })
        ));
    }

    #[test]
    fn dates_accept_iso_timestamps() {
        let json = r#"{
            "id": 1718000000000,
            "type": "income",
            "date": "2024-06-10T00:00:00.000Z",
            "description": "Salary",
            "category": "Salário",
            "amount": 5000,
            "payment": "transfer",
            "responsible": "user1",
            "notes": "",
            "status": "completed"
        }"#;
        let txn: Transaction = serde_json::from_str(json).expect("parse transaction");
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        let written = serde_json::to_value(&txn).unwrap();
        assert_eq!(written["date"], "2024-06-10");
        assert_eq!(written["type"], "income");
    }
}
