pub mod goal_service;
pub mod lookup_service;
pub mod period_service;
pub mod summary_service;
pub mod transaction_service;

pub use goal_service::GoalService;
pub use lookup_service::{LookupService, DEFAULT_JOINT_LABEL};
pub use period_service::{Period, PeriodService, PeriodView};
pub use summary_service::{CategorySpending, DashboardSummary, GoalProgress, SummaryService};
pub use transaction_service::TransactionService;

use crate::errors::FinanceError;

pub type ServiceResult<T> = Result<T, FinanceError>;
