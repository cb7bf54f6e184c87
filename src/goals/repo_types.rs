use sqlx::FromRow;
use time::Date;

/// Calorie goal record. A user keeps every goal ever set; the latest one is in force.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Goal {
    pub id: i64,
    pub daily_calories: i64,
    pub weekly_calories: i64,
    pub set_date: Date,
    pub user_id: i64,
}
