use time::Date;
use tracing::{info, instrument};

use crate::error::{Result, TrackerError};
use crate::goals::repo_types::Goal;
use crate::state::AppState;
use crate::users::services::require_user;

fn check_targets(daily_calories: i64, weekly_calories: i64) -> Result<()> {
    if daily_calories < 0 || weekly_calories < 0 {
        return Err(TrackerError::FormatError("calorie goals must not be negative".into()));
    }
    Ok(())
}

#[instrument(skip(st))]
pub async fn set_goal(
    st: &AppState,
    user_name: &str,
    daily_calories: i64,
    weekly_calories: i64,
    set_date: Date,
) -> Result<Goal> {
    check_targets(daily_calories, weekly_calories)?;
    let mut tx = st.db.begin().await?;
    let user = require_user(&mut tx, user_name).await?;
    let goal = Goal::insert(&mut tx, user.id, daily_calories, weekly_calories, set_date).await?;
    tx.commit().await?;

    info!(user_id = user.id, goal_id = goal.id, "goal set");
    Ok(goal)
}

pub async fn list_goals(st: &AppState, user_name: &str) -> Result<Vec<Goal>> {
    let mut conn = st.db.acquire().await?;
    let user = require_user(&mut conn, user_name).await?;
    Ok(Goal::list_by_user(&mut conn, user.id).await?)
}

/// The goal currently in force for the user, if any was ever set.
pub async fn latest_goal(st: &AppState, user_name: &str) -> Result<Option<Goal>> {
    let mut conn = st.db.acquire().await?;
    let user = require_user(&mut conn, user_name).await?;
    Ok(Goal::latest_for_user(&mut conn, user.id).await?)
}

#[instrument(skip(st))]
pub async fn update_goal(
    st: &AppState,
    user_name: &str,
    goal_id: i64,
    daily_calories: i64,
    weekly_calories: i64,
) -> Result<Goal> {
    check_targets(daily_calories, weekly_calories)?;
    let mut tx = st.db.begin().await?;
    let user = require_user(&mut tx, user_name).await?;
    let goal = Goal::update_targets(&mut tx, user.id, goal_id, daily_calories, weekly_calories)
        .await?
        .ok_or_else(|| TrackerError::NotFound(format!("goal {goal_id} for '{}'", user.name)))?;
    tx.commit().await?;

    info!(user_id = user.id, goal_id, "goal updated");
    Ok(goal)
}

#[instrument(skip(st))]
pub async fn delete_goal(st: &AppState, user_name: &str, goal_id: i64) -> Result<()> {
    let mut tx = st.db.begin().await?;
    let user = require_user(&mut tx, user_name).await?;
    if !Goal::delete(&mut tx, user.id, goal_id).await? {
        return Err(TrackerError::NotFound(format!(
            "goal {goal_id} for '{}'",
            user.name
        )));
    }
    tx.commit().await?;

    info!(user_id = user.id, goal_id, "goal deleted");
    Ok(())
}

#[cfg(test)]
mod goal_tests {
    use super::*;
    use crate::users::services::create_user;
    use time::macros::date;

    async fn setup() -> AppState {
        let st = AppState::in_memory().await.unwrap();
        create_user(&st, "Charlie").await.unwrap();
        st
    }

    #[tokio::test]
    async fn latest_goal_follows_set_date() {
        let st = setup().await;
        assert_eq!(latest_goal(&st, "Charlie").await.unwrap(), None);

        set_goal(&st, "Charlie", 2000, 14000, date!(2024 - 01 - 11)).await.unwrap();
        set_goal(&st, "Charlie", 1800, 12600, date!(2024 - 01 - 05)).await.unwrap();

        let latest = latest_goal(&st, "Charlie").await.unwrap().unwrap();
        assert_eq!(latest.set_date, date!(2024 - 01 - 11));
        assert_eq!(latest.daily_calories, 2000);
    }

    #[tokio::test]
    async fn same_day_tie_goes_to_last_insert() {
        let st = setup().await;
        set_goal(&st, "Charlie", 2200, 15400, date!(2024 - 03 - 01)).await.unwrap();
        let second = set_goal(&st, "Charlie", 2100, 14700, date!(2024 - 03 - 01)).await.unwrap();

        let latest = latest_goal(&st, "Charlie").await.unwrap().unwrap();
        assert_eq!(latest.id, second.id);
    }

    #[tokio::test]
    async fn history_is_kept_oldest_first() {
        let st = setup().await;
        set_goal(&st, "Charlie", 2000, 14000, date!(2024 - 02 - 01)).await.unwrap();
        set_goal(&st, "Charlie", 2200, 15400, date!(2024 - 01 - 01)).await.unwrap();

        let goals = list_goals(&st, "Charlie").await.unwrap();
        assert_eq!(goals.len(), 2);
        assert_eq!(goals[0].set_date, date!(2024 - 01 - 01));
    }

    #[tokio::test]
    async fn update_and_delete() {
        let st = setup().await;
        let goal = set_goal(&st, "Charlie", 2200, 15400, date!(2024 - 01 - 01)).await.unwrap();

        let updated = update_goal(&st, "Charlie", goal.id, 2000, 14000).await.unwrap();
        assert_eq!(updated.daily_calories, 2000);
        assert_eq!(updated.set_date, goal.set_date);

        delete_goal(&st, "Charlie", goal.id).await.unwrap();
        assert!(list_goals(&st, "Charlie").await.unwrap().is_empty());
        assert!(matches!(
            delete_goal(&st, "Charlie", goal.id).await,
            Err(TrackerError::NotFound(_))
        ));
        assert!(matches!(
            update_goal(&st, "Charlie", goal.id, 1, 7).await,
            Err(TrackerError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn goals_of_other_users_are_out_of_reach() {
        let st = setup().await;
        create_user(&st, "Daisy").await.unwrap();
        let goal = set_goal(&st, "Daisy", 1900, 13300, date!(2024 - 01 - 01)).await.unwrap();

        assert!(matches!(
            delete_goal(&st, "Charlie", goal.id).await,
            Err(TrackerError::NotFound(_))
        ));
        assert_eq!(list_goals(&st, "Daisy").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_user_cannot_set_goals() {
        let st = setup().await;
        assert!(matches!(
            set_goal(&st, "Nobody", 2000, 14000, date!(2024 - 01 - 01)).await,
            Err(TrackerError::NotFound(_))
        ));
        assert!(matches!(
            set_goal(&st, "Charlie", -1, 14000, date!(2024 - 01 - 01)).await,
            Err(TrackerError::FormatError(_))
        ));
    }
}
