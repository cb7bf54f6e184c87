use sqlx::FromRow;
use time::{Date, OffsetDateTime};

/// One logged food item.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct FoodEntry {
    pub id: i64,
    pub food: String,
    pub calories: i64,
    pub date: Date,
    pub created_at: OffsetDateTime,
    pub user_id: i64,
}

/// A food entry joined with its owner's name, for listings.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct FoodEntryListing {
    pub id: i64,
    pub food: String,
    pub calories: i64,
    pub date: Date,
    pub user_name: String,
}
