use crate::goals::repo_types::Goal;
use sqlx::SqliteConnection;
use time::Date;

impl Goal {
    pub async fn insert(
        conn: &mut SqliteConnection,
        user_id: i64,
        daily_calories: i64,
        weekly_calories: i64,
        set_date: Date,
    ) -> sqlx::Result<Goal> {
        sqlx::query_as::<_, Goal>(
            r#"
            INSERT INTO goals (daily_calories, weekly_calories, set_date, user_id)
            VALUES (?, ?, ?, ?)
            RETURNING id, daily_calories, weekly_calories, set_date, user_id
            "#,
        )
        .bind(daily_calories)
        .bind(weekly_calories)
        .bind(set_date)
        .bind(user_id)
        .fetch_one(&mut *conn)
        .await
    }

    /// Oldest first.
    pub async fn list_by_user(conn: &mut SqliteConnection, user_id: i64) -> sqlx::Result<Vec<Goal>> {
        sqlx::query_as::<_, Goal>(
            r#"
            SELECT id, daily_calories, weekly_calories, set_date, user_id
            FROM goals
            WHERE user_id = ?
            ORDER BY set_date, id
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
    }

    /// Goal with the greatest set_date; the later insert wins a tie.
    pub async fn latest_for_user(
        conn: &mut SqliteConnection,
        user_id: i64,
    ) -> sqlx::Result<Option<Goal>> {
        sqlx::query_as::<_, Goal>(
            r#"
            SELECT id, daily_calories, weekly_calories, set_date, user_id
            FROM goals
            WHERE user_id = ?
            ORDER BY set_date DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await
    }

    pub async fn update_targets(
        conn: &mut SqliteConnection,
        user_id: i64,
        id: i64,
        daily_calories: i64,
        weekly_calories: i64,
    ) -> sqlx::Result<Option<Goal>> {
        sqlx::query_as::<_, Goal>(
            r#"
            UPDATE goals
            SET daily_calories = ?, weekly_calories = ?
            WHERE id = ? AND user_id = ?
            RETURNING id, daily_calories, weekly_calories, set_date, user_id
            "#,
        )
        .bind(daily_calories)
        .bind(weekly_calories)
        .bind(id)
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await
    }

    pub async fn delete(conn: &mut SqliteConnection, user_id: i64, id: i64) -> sqlx::Result<bool> {
        let res = sqlx::query("DELETE FROM goals WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&mut *conn)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
