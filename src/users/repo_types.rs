use sqlx::FromRow;
use time::OffsetDateTime;

/// User record in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,                    // generated row id
    pub name: String,               // unique display name
    pub created_at: OffsetDateTime, // creation timestamp
}

/// Rows removed by a cascading user delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemovedRows {
    pub food_entries: u64,
    pub goals: u64,
    pub meal_plans: u64,
}
