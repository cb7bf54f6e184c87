use sqlx::FromRow;
use time::Date;

/// A planned meal for one user on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct MealPlan {
    pub id: i64,
    pub day: Date,
    pub meal: String,
    pub user_id: i64,
}
