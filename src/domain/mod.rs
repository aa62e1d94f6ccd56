//! Record types the tracker aggregates: expenses, incomes, budgets, and
//! savings goals.

pub mod budget;
pub mod expense;
pub mod goal;
pub mod income;
pub mod record;

pub use budget::Budget;
pub use expense::Expense;
pub use goal::SavingsGoal;
pub use income::Income;
pub use record::MonetaryRecord;
