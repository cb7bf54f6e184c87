use sqlx::SqliteConnection;
use tracing::{info, instrument, warn};

use crate::error::{Result, TrackerError};
use crate::input::require_text;
use crate::state::AppState;
use crate::users::repo_types::{RemovedRows, User};

/// Resolve a user by name on an already open connection.
pub(crate) async fn require_user(conn: &mut SqliteConnection, name: &str) -> Result<User> {
    User::find_by_name(conn, name.trim())
        .await?
        .ok_or_else(|| TrackerError::NotFound(format!("user '{}'", name.trim())))
}

fn duplicate_or_storage(err: sqlx::Error, name: &str) -> TrackerError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            TrackerError::DuplicateName(name.to_string())
        }
        _ => TrackerError::Storage(err),
    }
}

#[instrument(skip(st))]
pub async fn lookup_user(st: &AppState, name: &str) -> Result<User> {
    let mut conn = st.db.acquire().await?;
    require_user(&mut conn, name).await
}

#[instrument(skip(st))]
pub async fn create_user(st: &AppState, name: &str) -> Result<User> {
    let name = require_text("name", name)?;

    let mut tx = st.db.begin().await?;
    if User::find_by_name(&mut tx, &name).await?.is_some() {
        warn!(%name, "user name already taken");
        return Err(TrackerError::DuplicateName(name));
    }
    let user = User::create(&mut tx, &name)
        .await
        .map_err(|e| duplicate_or_storage(e, &name))?;
    tx.commit().await?;

    info!(user_id = user.id, name = %user.name, "user created");
    Ok(user)
}

pub async fn list_users(st: &AppState) -> Result<Vec<User>> {
    let mut conn = st.db.acquire().await?;
    Ok(User::list(&mut conn).await?)
}

#[instrument(skip(st))]
pub async fn rename_user(st: &AppState, current: &str, new_name: &str) -> Result<User> {
    let new_name = require_text("new name", new_name)?;

    let mut tx = st.db.begin().await?;
    let user = require_user(&mut tx, current).await?;
    if user.name != new_name && User::find_by_name(&mut tx, &new_name).await?.is_some() {
        warn!(%new_name, "user name already taken");
        return Err(TrackerError::DuplicateName(new_name));
    }
    let renamed = User::rename(&mut tx, user.id, &new_name)
        .await
        .map_err(|e| duplicate_or_storage(e, &new_name))?
        .ok_or_else(|| TrackerError::NotFound(format!("user '{current}'")))?;
    tx.commit().await?;

    info!(user_id = renamed.id, from = %user.name, to = %renamed.name, "user renamed");
    Ok(renamed)
}

/// Remove a user together with all food entries, goals and meal plans it owns.
///
/// Either everything goes or nothing does: the transaction rolls back on drop if any
/// statement fails.
#[instrument(skip(st))]
pub async fn delete_user(st: &AppState, name: &str) -> Result<RemovedRows> {
    let mut tx = st.db.begin().await?;
    let user = require_user(&mut tx, name).await?;
    let removed = User::delete_with_dependents(&mut tx, user.id)
        .await?
        .ok_or_else(|| TrackerError::NotFound(format!("user '{}'", user.name)))?;
    tx.commit().await?;

    info!(
        user_id = user.id,
        food_entries = removed.food_entries,
        goals = removed.goals,
        meal_plans = removed.meal_plans,
        "user deleted"
    );
    Ok(removed)
}

#[cfg(test)]
mod user_tests {
    use super::*;

    #[tokio::test]
    async fn create_and_lookup() {
        let st = AppState::in_memory().await.unwrap();
        let created = create_user(&st, "  Alice ").await.unwrap();
        assert_eq!(created.name, "Alice");

        let found = lookup_user(&st, "Alice").await.unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn duplicate_name_is_rejected_and_store_unchanged() {
        let st = AppState::in_memory().await.unwrap();
        create_user(&st, "Alice").await.unwrap();

        let err = create_user(&st, "Alice").await.unwrap_err();
        assert!(matches!(err, TrackerError::DuplicateName(ref n) if n == "Alice"));

        let users = list_users(&st).await.unwrap();
        assert_eq!(users.iter().filter(|u| u.name == "Alice").count(), 1);
    }

    #[tokio::test]
    async fn blank_name_is_a_format_error() {
        let st = AppState::in_memory().await.unwrap();
        let err = create_user(&st, "   ").await.unwrap_err();
        assert!(matches!(err, TrackerError::FormatError(_)));
        assert!(list_users(&st).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let st = AppState::in_memory().await.unwrap();
        assert!(matches!(
            lookup_user(&st, "Nobody").await,
            Err(TrackerError::NotFound(_))
        ));
        assert!(matches!(
            delete_user(&st, "Nobody").await,
            Err(TrackerError::NotFound(_))
        ));
        assert!(matches!(
            rename_user(&st, "Nobody", "Somebody").await,
            Err(TrackerError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn rename_checks_collisions() {
        let st = AppState::in_memory().await.unwrap();
        create_user(&st, "Alice").await.unwrap();
        create_user(&st, "Bob").await.unwrap();

        let err = rename_user(&st, "Alice", "Bob").await.unwrap_err();
        assert!(matches!(err, TrackerError::DuplicateName(_)));

        let renamed = rename_user(&st, "Alice", "Alice Smith").await.unwrap();
        assert_eq!(renamed.name, "Alice Smith");
        assert!(lookup_user(&st, "Alice").await.is_err());
        assert!(lookup_user(&st, "Alice Smith").await.is_ok());
    }

    #[tokio::test]
    async fn delete_removes_exactly_the_users_rows() {
        use crate::food::services::{add_food_entry, food_entries_for};
        use crate::goals::services::{list_goals, set_goal};
        use crate::meal_plans::services::{list_meal_plans, set_meal_plan};
        use time::macros::date;

        let st = AppState::in_memory().await.unwrap();
        for name in ["Bob", "Eve"] {
            create_user(&st, name).await.unwrap();
            add_food_entry(&st, name, "Banana", 105, date!(2024 - 01 - 10)).await.unwrap();
            add_food_entry(&st, name, "Toast", 150, date!(2024 - 01 - 11)).await.unwrap();
            set_goal(&st, name, 2000, 14000, date!(2024 - 01 - 01)).await.unwrap();
            set_meal_plan(&st, name, date!(2024 - 01 - 10), "Salad").await.unwrap();
        }

        let removed = delete_user(&st, "Bob").await.unwrap();
        assert_eq!(
            removed,
            RemovedRows {
                food_entries: 2,
                goals: 1,
                meal_plans: 1
            }
        );

        assert!(lookup_user(&st, "Bob").await.is_err());
        let left = food_entries_for(&st, None, None).await.unwrap();
        assert_eq!(left.len(), 2);
        assert!(left.iter().all(|e| e.user_name == "Eve"));
        assert_eq!(list_goals(&st, "Eve").await.unwrap().len(), 1);
        assert_eq!(list_meal_plans(&st, "Eve").await.unwrap().len(), 1);

        let remaining: i64 = sqlx::query_scalar(
            "SELECT (SELECT COUNT(*) FROM goals) + (SELECT COUNT(*) FROM meal_plans) + (SELECT COUNT(*) FROM food_entries)",
        )
        .fetch_one(&st.db)
        .await
        .unwrap();
        assert_eq!(remaining, 4);
    }

    #[tokio::test]
    async fn users_are_listed_in_creation_order() {
        let st = AppState::in_memory().await.unwrap();
        for name in ["Carol", "Alice", "Bob"] {
            create_user(&st, name).await.unwrap();
        }
        let names: Vec<_> = list_users(&st)
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, ["Carol", "Alice", "Bob"]);
    }
}
