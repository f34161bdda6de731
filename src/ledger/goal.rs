use serde::{Deserialize, Serialize};

/// Savings target whose progress never exceeds `target`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: u64,
    pub name: String,
    pub target: f64,
    pub current: f64,
    #[serde(
        rename = "monthlyContribution",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub monthly_contribution: Option<f64>,
}

impl Goal {
    pub fn new(id: u64, name: impl Into<String>, target: f64, current: f64) -> Self {
        Self {
            id,
            name: name.into(),
            target,
            current,
            monthly_contribution: None,
        }
    }

    pub fn with_monthly_contribution(mut self, amount: f64) -> Self {
        self.monthly_contribution = Some(amount);
        self
    }

    pub fn remaining(&self) -> f64 {
        self.target - self.current
    }

    /// Progress as a percentage of the target, `None` for a zero target.
    pub fn progress_percent(&self) -> Option<f64> {
        if self.target == 0.0 {
            None
        } else {
            Some(self.current / self.target * 100.0)
        }
    }
}
