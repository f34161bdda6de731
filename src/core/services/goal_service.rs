use tracing::debug;

use crate::core::services::ServiceResult;
use crate::errors::{FinanceError, ValidationError};
use crate::ledger::{FinancialDocument, Goal};

pub struct GoalService;

impl GoalService {
    /// Adds `amount` to the goal, clamping progress at its target. Any excess
    /// is discarded.
    pub fn contribute_to_goal(
        document: &mut FinancialDocument,
        goal_id: u64,
        amount: f64,
    ) -> ServiceResult<&Goal> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::invalid("amount", "must be a positive number").into());
        }
        let goal = document
            .goal_mut(goal_id)
            .ok_or(FinanceError::GoalNotFound(goal_id))?;

        let uncapped = goal.current + amount;
        goal.current = uncapped.min(goal.target);
        debug!(
            goal_id,
            current = goal.current,
            discarded = (uncapped - goal.current).max(0.0),
            "goal contribution applied"
        );
        Ok(goal)
    }

    pub fn list(document: &FinancialDocument) -> Vec<&Goal> {
        document.goals.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document_with_goal() -> FinancialDocument {
        let mut document = FinancialDocument::empty("A", "B");
        document.goals.push(Goal::new(7, "Trip", 1000.0, 900.0));
        document
    }

    #[test]
    fn contribution_is_clamped_at_target() {
        let mut document = document_with_goal();
        let goal = GoalService::contribute_to_goal(&mut document, 7, 250.0).unwrap();
        assert_eq!(goal.current, 1000.0);
    }

    #[test]
    fn partial_contribution_accumulates() {
        let mut document = document_with_goal();
        GoalService::contribute_to_goal(&mut document, 7, 40.0).unwrap();
        assert_eq!(document.goal(7).unwrap().current, 940.0);
    }

    #[test]
    fn unknown_goal_is_reported_and_document_unchanged() {
        let mut document = document_with_goal();
        let before = document.clone();
        let err = GoalService::contribute_to_goal(&mut document, 99, 10.0).unwrap_err();
        assert!(matches!(err, FinanceError::GoalNotFound(99)));
        assert_eq!(document, before);
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        let mut document = document_with_goal();
        for amount in [0.0, -5.0, f64::NAN] {
            let err = GoalService::contribute_to_goal(&mut document, 7, amount).unwrap_err();
            assert!(matches!(err, FinanceError::Validation(_)), "{amount}: {err:?}");
        }
        assert_eq!(document.goal(7).unwrap().current, 900.0);
    }
}
