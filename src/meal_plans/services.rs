use time::Date;
use tracing::{info, instrument};

use crate::calendar::{ensure_monday, monday_of_iso_week, week_days};
use crate::error::{Result, TrackerError};
use crate::input::{optional_text, require_text};
use crate::meal_plans::dto::DaySlot;
use crate::meal_plans::repo_types::MealPlan;
use crate::state::AppState;
use crate::users::services::require_user;

/// Plan `meal` for `day`, replacing whatever was planned for that day.
#[instrument(skip(st))]
pub async fn set_meal_plan(st: &AppState, user_name: &str, day: Date, meal: &str) -> Result<MealPlan> {
    let meal = require_text("meal", meal)?;

    let mut tx = st.db.begin().await?;
    let user = require_user(&mut tx, user_name).await?;
    let replaced = MealPlan::delete_between(&mut tx, user.id, day, day).await?;
    let plan = MealPlan::insert(&mut tx, user.id, day, &meal).await?;
    tx.commit().await?;

    info!(user_id = user.id, plan_id = plan.id, replaced, "meal plan set");
    Ok(plan)
}

#[instrument(skip(st))]
pub async fn delete_meal_plan(st: &AppState, user_name: &str, day: Date) -> Result<()> {
    let mut tx = st.db.begin().await?;
    let user = require_user(&mut tx, user_name).await?;
    if MealPlan::delete_between(&mut tx, user.id, day, day).await? == 0 {
        return Err(TrackerError::NotFound(format!(
            "meal plan for '{}' on {day}",
            user.name
        )));
    }
    tx.commit().await?;

    info!(user_id = user.id, "meal plan deleted");
    Ok(())
}

pub async fn list_meal_plans(st: &AppState, user_name: &str) -> Result<Vec<MealPlan>> {
    let mut conn = st.db.acquire().await?;
    let user = require_user(&mut conn, user_name).await?;
    Ok(MealPlan::list_by_user(&mut conn, user.id).await?)
}

/// Exactly seven slots, Monday to Sunday, for the week starting at `week_start`.
/// Days without a plan are kept as empty slots.
pub async fn weekly_view(st: &AppState, user_name: &str, week_start: Date) -> Result<Vec<DaySlot>> {
    let week_start = ensure_monday(week_start)?;
    let days = week_days(week_start)?;
    let mut conn = st.db.acquire().await?;
    let user = require_user(&mut conn, user_name).await?;

    let plans = MealPlan::list_between(&mut conn, user.id, week_start, days[6]).await?;
    let slots = days
        .into_iter()
        .map(|day| DaySlot {
            day,
            weekday: day.weekday(),
            meal: plans.iter().find(|p| p.day == day).map(|p| p.meal.clone()),
        })
        .collect();
    Ok(slots)
}

/// Weekly view addressed by ISO year and week number.
pub async fn weekly_view_for_iso_week(
    st: &AppState,
    user_name: &str,
    year: i32,
    week: u8,
) -> Result<Vec<DaySlot>> {
    let monday = monday_of_iso_week(year, week)?;
    weekly_view(st, user_name, monday).await
}

/// Replace the whole week starting at `week_start` with `meals`, one per day from
/// Monday. Blank days end up with no plan.
///
/// A non-Monday anchor is rejected before anything is written.
#[instrument(skip(st, meals))]
pub async fn generate_weekly_meal_plan(
    st: &AppState,
    user_name: &str,
    week_start: Date,
    meals: [Option<String>; 7],
) -> Result<Vec<DaySlot>> {
    let week_start = ensure_monday(week_start)?;
    let days = week_days(week_start)?;

    let mut tx = st.db.begin().await?;
    let user = require_user(&mut tx, user_name).await?;
    let replaced = MealPlan::delete_between(&mut tx, user.id, week_start, days[6]).await?;

    let mut slots = Vec::with_capacity(7);
    for (day, meal) in days.into_iter().zip(meals) {
        let meal = meal.as_deref().and_then(optional_text);
        if let Some(meal) = &meal {
            MealPlan::insert(&mut tx, user.id, day, meal).await?;
        }
        slots.push(DaySlot {
            day,
            weekday: day.weekday(),
            meal,
        });
    }
    tx.commit().await?;

    info!(user_id = user.id, %week_start, replaced, "weekly meal plan generated");
    Ok(slots)
}
