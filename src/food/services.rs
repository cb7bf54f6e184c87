use time::Date;
use tracing::{info, instrument};

use crate::calendar::{ensure_monday, week_days, week_end};
use crate::error::{Result, TrackerError};
use crate::food::dto::{DailySummary, FoodEntryPatch, GoalStatus, WeeklySummary};
use crate::food::repo_types::{FoodEntry, FoodEntryListing};
use crate::goals::repo_types::Goal;
use crate::input::require_text;
use crate::state::AppState;
use crate::users::services::require_user;

#[instrument(skip(st))]
pub async fn add_food_entry(
    st: &AppState,
    user_name: &str,
    food: &str,
    calories: i64,
    date: Date,
) -> Result<FoodEntry> {
    let food = require_text("food", food)?;
    if calories < 0 {
        return Err(TrackerError::FormatError("calories must not be negative".into()));
    }

    let mut tx = st.db.begin().await?;
    let user = require_user(&mut tx, user_name).await?;
    let entry = FoodEntry::insert(&mut tx, user.id, &food, calories, date).await?;
    tx.commit().await?;

    info!(user_id = user.id, entry_id = entry.id, calories, "food entry added");
    Ok(entry)
}

/// Entries filtered by owner and/or day. With neither filter every entry in the
/// store is returned.
pub async fn food_entries_for(
    st: &AppState,
    user_name: Option<&str>,
    date: Option<Date>,
) -> Result<Vec<FoodEntryListing>> {
    let mut conn = st.db.acquire().await?;
    let user_id = match user_name {
        Some(name) => Some(require_user(&mut conn, name).await?.id),
        None => None,
    };
    Ok(FoodEntry::search(&mut conn, user_id, date).await?)
}

#[instrument(skip(st))]
pub async fn update_food_entry(
    st: &AppState,
    user_name: &str,
    entry_id: i64,
    patch: FoodEntryPatch,
) -> Result<FoodEntry> {
    if matches!(patch.calories, Some(c) if c < 0) {
        return Err(TrackerError::FormatError("calories must not be negative".into()));
    }

    let mut tx = st.db.begin().await?;
    let user = require_user(&mut tx, user_name).await?;
    let not_found = || TrackerError::NotFound(format!("food entry {entry_id} for '{user_name}'"));

    let mut entry = FoodEntry::find(&mut tx, user.id, entry_id)
        .await?
        .ok_or_else(not_found)?;
    if let Some(food) = patch.food {
        entry.food = require_text("food", &food)?;
    }
    if let Some(calories) = patch.calories {
        entry.calories = calories;
    }
    if let Some(date) = patch.date {
        entry.date = date;
    }
    let entry = FoodEntry::update(&mut tx, &entry).await?.ok_or_else(not_found)?;
    tx.commit().await?;

    info!(user_id = user.id, entry_id, "food entry updated");
    Ok(entry)
}

#[instrument(skip(st))]
pub async fn delete_food_entry(st: &AppState, user_name: &str, entry_id: i64) -> Result<()> {
    let mut tx = st.db.begin().await?;
    let user = require_user(&mut tx, user_name).await?;
    if !FoodEntry::delete(&mut tx, user.id, entry_id).await? {
        return Err(TrackerError::NotFound(format!(
            "food entry {entry_id} for '{user_name}'"
        )));
    }
    tx.commit().await?;

    info!(user_id = user.id, entry_id, "food entry deleted");
    Ok(())
}

pub async fn daily_total(st: &AppState, user_name: &str, date: Date) -> Result<i64> {
    let mut conn = st.db.acquire().await?;
    let user = require_user(&mut conn, user_name).await?;
    Ok(FoodEntry::total_calories(&mut conn, user.id, date, date).await?)
}

/// Calories over the seven days `[week_start, week_start + 6]`.
pub async fn weekly_total(st: &AppState, user_name: &str, week_start: Date) -> Result<i64> {
    let end = week_end(week_start)?;
    let mut conn = st.db.acquire().await?;
    let user = require_user(&mut conn, user_name).await?;
    Ok(FoodEntry::total_calories(&mut conn, user.id, week_start, end).await?)
}

#[instrument(skip(st))]
pub async fn daily_summary(st: &AppState, user_name: &str, date: Date) -> Result<DailySummary> {
    let mut conn = st.db.acquire().await?;
    let user = require_user(&mut conn, user_name).await?;

    let entries = FoodEntry::list_for_day(&mut conn, user.id, date).await?;
    let total = FoodEntry::total_calories(&mut conn, user.id, date, date).await?;
    let goal = Goal::latest_for_user(&mut conn, user.id).await?;
    let status = GoalStatus::compare(total, goal.as_ref().map(|g| g.daily_calories));

    Ok(DailySummary {
        date,
        entries,
        total,
        goal,
        status,
    })
}

/// Per-day and whole-week totals for the Monday-anchored week at `week_start`,
/// compared with the weekly target of the latest goal.
#[instrument(skip(st))]
pub async fn weekly_summary(
    st: &AppState,
    user_name: &str,
    week_start: Date,
) -> Result<WeeklySummary> {
    let week_start = ensure_monday(week_start)?;
    let days = week_days(week_start)?;
    let mut conn = st.db.acquire().await?;
    let user = require_user(&mut conn, user_name).await?;

    let mut daily_totals = [(week_start, 0); 7];
    for (slot, day) in daily_totals.iter_mut().zip(days) {
        *slot = (day, FoodEntry::total_calories(&mut conn, user.id, day, day).await?);
    }
    let total = FoodEntry::total_calories(&mut conn, user.id, week_start, days[6]).await?;
    let goal = Goal::latest_for_user(&mut conn, user.id).await?;
    let status = GoalStatus::compare(total, goal.as_ref().map(|g| g.weekly_calories));

    Ok(WeeklySummary {
        week_start,
        daily_totals,
        total,
        goal,
        status,
    })
}
