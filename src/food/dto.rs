use std::fmt;

use time::Date;

use crate::food::repo_types::FoodEntry;
use crate::goals::repo_types::Goal;

/// How a calorie total compares with the goal in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalStatus {
    Over,
    Within,
    NoGoalSet,
}

impl GoalStatus {
    /// `Over` only when the total strictly exceeds the target.
    pub fn compare(total: i64, target: Option<i64>) -> Self {
        match target {
            None => Self::NoGoalSet,
            Some(limit) if total > limit => Self::Over,
            Some(_) => Self::Within,
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Over => "over goal",
            Self::Within => "within goal",
            Self::NoGoalSet => "no goal set",
        })
    }
}

#[derive(Debug, Clone)]
pub struct DailySummary {
    pub date: Date,
    pub entries: Vec<FoodEntry>,
    pub total: i64,
    pub goal: Option<Goal>,
    pub status: GoalStatus,
}

#[derive(Debug, Clone)]
pub struct WeeklySummary {
    pub week_start: Date,
    /// Monday through Sunday.
    pub daily_totals: [(Date, i64); 7],
    pub total: i64,
    pub goal: Option<Goal>,
    pub status: GoalStatus,
}

/// Fields to change on an existing entry; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct FoodEntryPatch {
    pub food: Option<String>,
    pub calories: Option<i64>,
    pub date: Option<Date>,
}
