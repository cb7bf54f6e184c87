use crate::users::repo_types::{RemovedRows, User};
use sqlx::SqliteConnection;
use time::OffsetDateTime;

impl User {
    /// Find a user by exact name.
    pub async fn find_by_name(conn: &mut SqliteConnection, name: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, created_at
            FROM users
            WHERE name = ?
            "#,
        )
        .bind(name)
        .fetch_optional(&mut *conn)
        .await
    }

    /// Insert a new user.
    pub async fn create(conn: &mut SqliteConnection, name: &str) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, created_at)
            VALUES (?, ?)
            RETURNING id, name, created_at
            "#,
        )
        .bind(name)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(&mut *conn)
        .await
    }

    pub async fn list(conn: &mut SqliteConnection) -> sqlx::Result<Vec<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, created_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *conn)
        .await
    }

    /// Returns the renamed user, or `None` when no row had that id.
    pub async fn rename(
        conn: &mut SqliteConnection,
        id: i64,
        new_name: &str,
    ) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = ?
            WHERE id = ?
            RETURNING id, name, created_at
            "#,
        )
        .bind(new_name)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
    }

    /// Delete the user row and every row that references it.
    ///
    /// Must run inside a transaction so the dependents and the parent go together.
    pub async fn delete_with_dependents(
        conn: &mut SqliteConnection,
        id: i64,
    ) -> sqlx::Result<Option<RemovedRows>> {
        let food_entries = sqlx::query("DELETE FROM food_entries WHERE user_id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        let goals = sqlx::query("DELETE FROM goals WHERE user_id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        let meal_plans = sqlx::query("DELETE FROM meal_plans WHERE user_id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        let users = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?
            .rows_affected();

        if users == 0 {
            return Ok(None);
        }
        Ok(Some(RemovedRows {
            food_entries,
            goals,
            meal_plans,
        }))
    }
}
