//! Applies transactions to the document and keeps per-user totals in sync.

use tracing::debug;

use crate::core::services::ServiceResult;
use crate::errors::FinanceError;
use crate::ledger::{FinancialDocument, NewTransaction, Responsible, Transaction, Users};

pub struct TransactionService;

impl TransactionService {
    /// Appends `transaction` and attributes its amount to the responsible user.
    /// Shared (`both`) transactions add half the amount to each user, so the
    /// combined totals always equal the sum of transaction amounts.
    pub fn apply_transaction(document: &mut FinancialDocument, transaction: Transaction) {
        attribute(&mut document.users, &transaction);
        debug!(
            id = transaction.id,
            kind = %transaction.kind,
            responsible = %transaction.responsible,
            amount = transaction.amount,
            "applied transaction"
        );
        document.transactions.push(transaction);
    }

    /// Assigns the next id for `now_millis` and applies the transaction.
    pub fn add(document: &mut FinancialDocument, transaction: NewTransaction, now_millis: i64) -> i64 {
        let id = document.next_transaction_id(now_millis);
        Self::apply_transaction(document, transaction.into_transaction(id));
        id
    }

    /// Removes the transaction identified by `id` and re-derives the totals.
    pub fn remove_transaction(
        document: &mut FinancialDocument,
        id: i64,
    ) -> ServiceResult<Transaction> {
        let index = document
            .transactions
            .iter()
            .position(|txn| txn.id == id)
            .ok_or(FinanceError::TransactionNotFound(id))?;
        let removed = document.transactions.remove(index);
        Self::recompute_totals(document);
        debug!(id, "removed transaction");
        Ok(removed)
    }

    /// Rebuilds both users' income and expense totals from the transaction list.
    pub fn recompute_totals(document: &mut FinancialDocument) {
        document.users.user1.reset();
        document.users.user2.reset();
        for txn in &document.transactions {
            attribute(&mut document.users, txn);
        }
    }

    pub fn list(document: &FinancialDocument) -> Vec<&Transaction> {
        document.transactions.iter().collect()
    }
}

fn attribute(users: &mut Users, transaction: &Transaction) {
    let amount = transaction.amount;
    match transaction.responsible {
        Responsible::User1 => users.user1.add(transaction.kind, amount),
        Responsible::User2 => users.user2.add(transaction.kind, amount),
        Responsible::Both => {
            let half = amount / 2.0;
            users.user1.add(transaction.kind, half);
            users.user2.add(transaction.kind, half);
        }
    }
}
