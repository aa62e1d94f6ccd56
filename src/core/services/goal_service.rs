use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::SavingsGoal;
use crate::summary::{round2, share_percent};

use super::{ServiceError, ServiceResult};

/// Progress toward one savings goal as of a given day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_id: Uuid,
    pub name: String,
    pub target_amount: f64,
    pub saved_amount: f64,
    /// Can exceed 100 when the goal is overfunded.
    pub percent_complete: f64,
    pub remaining: f64,
    /// Whole months left until the target date, counting the current month;
    /// zero once the date has passed, absent for open-ended goals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub months_remaining: Option<u32>,
    /// What to put aside each remaining month to land on target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_needed: Option<f64>,
}

pub struct GoalService;

impl GoalService {
    pub fn progress(goal: &SavingsGoal, today: NaiveDate) -> GoalProgress {
        let remaining = (goal.target_amount - goal.saved_amount).max(0.0);
        let months_remaining = goal.target_date.map(|due| months_until(today, due));
        let monthly_needed = months_remaining
            .filter(|months| *months > 0)
            .map(|months| round2(remaining / months as f64));
        GoalProgress {
            goal_id: goal.id,
            name: goal.name.clone(),
            target_amount: round2(goal.target_amount),
            saved_amount: round2(goal.saved_amount),
            percent_complete: round2(share_percent(goal.saved_amount, goal.target_amount)),
            remaining: round2(remaining),
            months_remaining,
            monthly_needed,
        }
    }

    pub fn progress_all(goals: &[SavingsGoal], today: NaiveDate) -> Vec<GoalProgress> {
        goals.iter().map(|goal| Self::progress(goal, today)).collect()
    }

    pub fn progress_for(
        goals: &[SavingsGoal],
        id: Uuid,
        today: NaiveDate,
    ) -> ServiceResult<GoalProgress> {
        goals
            .iter()
            .find(|goal| goal.id == id)
            .map(|goal| Self::progress(goal, today))
            .ok_or_else(|| ServiceError::Invalid(format!("goal `{id}` not found")))
    }
}

/// Months left through `due`, counting the month `today` falls in. A due
/// date strictly before today yields zero.
fn months_until(today: NaiveDate, due: NaiveDate) -> u32 {
    if due < today {
        return 0;
    }
    let today_index = today.year() * 12 + today.month() as i32 - 1;
    let due_index = due.year() * 12 + due.month() as i32 - 1;
    (due_index - today_index).max(1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn progress_reports_the_saved_share_and_remainder() {
        let goal = SavingsGoal::new("Emergency fund", 3000.0).with_saved(1200.0);
        let progress = GoalService::progress(&goal, date(2025, 4, 15));
        assert_eq!(progress.percent_complete, 40.0);
        assert_eq!(progress.remaining, 1800.0);
        assert_eq!(progress.months_remaining, None);
        assert_eq!(progress.monthly_needed, None);
    }

    #[test]
    fn dated_goal_spreads_the_remainder_over_the_months_left() {
        let goal = SavingsGoal::new("Trip", 1200.0)
            .with_saved(300.0)
            .with_target_date(date(2025, 10, 1));
        let progress = GoalService::progress(&goal, date(2025, 4, 15));
        assert_eq!(progress.months_remaining, Some(6));
        assert_eq!(progress.monthly_needed, Some(150.0));
    }

    #[test]
    fn due_this_month_still_counts_one_month() {
        let goal = SavingsGoal::new("Gift", 100.0).with_target_date(date(2025, 4, 28));
        let progress = GoalService::progress(&goal, date(2025, 4, 15));
        assert_eq!(progress.months_remaining, Some(1));
        assert_eq!(progress.monthly_needed, Some(100.0));
    }

    #[test]
    fn past_due_goal_has_zero_months_and_no_monthly_figure() {
        let goal = SavingsGoal::new("Gift", 100.0).with_target_date(date(2025, 4, 1));
        let progress = GoalService::progress(&goal, date(2025, 4, 15));
        assert_eq!(progress.months_remaining, Some(0));
        assert_eq!(progress.monthly_needed, None);
    }

    #[test]
    fn overfunded_goal_exceeds_one_hundred_percent() {
        let goal = SavingsGoal::new("Bike", 500.0).with_saved(600.0);
        let progress = GoalService::progress(&goal, date(2025, 4, 15));
        assert_eq!(progress.percent_complete, 120.0);
        assert_eq!(progress.remaining, 0.0);
    }

    #[test]
    fn zero_target_reports_zero_percent() {
        let goal = SavingsGoal::new("Placeholder", 0.0).with_saved(50.0);
        let progress = GoalService::progress(&goal, date(2025, 4, 15));
        assert_eq!(progress.percent_complete, 0.0);
        assert_eq!(progress.remaining, 0.0);
    }

    #[test]
    fn progress_for_finds_goals_by_id() {
        let goals = vec![
            SavingsGoal::new("First", 100.0),
            SavingsGoal::new("Second", 200.0),
        ];
        let today = date(2025, 4, 15);
        let found = GoalService::progress_for(&goals, goals[1].id, today).unwrap();
        assert_eq!(found.name, "Second");

        let missing = GoalService::progress_for(&goals, Uuid::new_v4(), today);
        assert!(matches!(missing, Err(ServiceError::Invalid(_))));
    }

    #[test]
    fn progress_all_keeps_input_order() {
        let goals = vec![
            SavingsGoal::new("First", 100.0),
            SavingsGoal::new("Second", 200.0),
        ];
        let all = GoalService::progress_all(&goals, date(2025, 4, 15));
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "First");
        assert_eq!(all[1].name, "Second");
    }
}
