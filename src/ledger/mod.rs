//! Household finance domain types and their on-disk JSON layout.

pub mod category;
pub mod debt;
pub mod document;
pub mod goal;
pub mod transaction;
pub mod user;

pub use category::Category;
pub use debt::Debt;
pub use document::FinancialDocument;
pub use goal::Goal;
pub use transaction::{
    parse_amount, EntryKind, NewTransaction, Responsible, Transaction, TransactionDraft,
    TransactionStatus,
};
pub use user::{UserTotals, Users};
