//! Service facades the tracker's views call into. Each service is stateless
//! and works over borrowed record slices, parsing period tokens at the edge
//! and delegating the arithmetic to [`crate::summary`] and
//! [`crate::period`].

pub mod budget_service;
pub mod expense_service;
pub mod goal_service;
pub mod income_service;
pub mod report_service;

pub use budget_service::BudgetService;
pub use expense_service::{CategoryShare, ExpenseService};
pub use goal_service::{GoalProgress, GoalService};
pub use income_service::IncomeService;
pub use report_service::{CashFlowReport, ReportService};

use crate::errors::TrackerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    #[error("{0}")]
    Invalid(String),
}
