use crate::meal_plans::repo_types::MealPlan;
use sqlx::SqliteConnection;
use time::Date;

impl MealPlan {
    pub async fn insert(
        conn: &mut SqliteConnection,
        user_id: i64,
        day: Date,
        meal: &str,
    ) -> sqlx::Result<MealPlan> {
        sqlx::query_as::<_, MealPlan>(
            r#"
            INSERT INTO meal_plans (day, meal, user_id)
            VALUES (?, ?, ?)
            RETURNING id, day, meal, user_id
            "#,
        )
        .bind(day)
        .bind(meal)
        .bind(user_id)
        .fetch_one(&mut *conn)
        .await
    }

    /// Slots of one user with `from <= day <= to`, earliest first.
    pub async fn list_between(
        conn: &mut SqliteConnection,
        user_id: i64,
        from: Date,
        to: Date,
    ) -> sqlx::Result<Vec<MealPlan>> {
        sqlx::query_as::<_, MealPlan>(
            r#"
            SELECT id, day, meal, user_id
            FROM meal_plans
            WHERE user_id = ? AND day BETWEEN ? AND ?
            ORDER BY day
            "#,
        )
        .bind(user_id)
        .bind(from)
        .bind(to)
        .fetch_all(&mut *conn)
        .await
    }

    pub async fn list_by_user(conn: &mut SqliteConnection, user_id: i64) -> sqlx::Result<Vec<MealPlan>> {
        sqlx::query_as::<_, MealPlan>(
            r#"
            SELECT id, day, meal, user_id
            FROM meal_plans
            WHERE user_id = ?
            ORDER BY day
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
    }

    /// Remove slots with `from <= day <= to`; returns how many went.
    pub async fn delete_between(
        conn: &mut SqliteConnection,
        user_id: i64,
        from: Date,
        to: Date,
    ) -> sqlx::Result<u64> {
        let res = sqlx::query("DELETE FROM meal_plans WHERE user_id = ? AND day BETWEEN ? AND ?")
            .bind(user_id)
            .bind(from)
            .bind(to)
            .execute(&mut *conn)
            .await?;
        Ok(res.rows_affected())
    }
}
