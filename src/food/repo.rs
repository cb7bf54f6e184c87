use crate::food::repo_types::{FoodEntry, FoodEntryListing};
use sqlx::SqliteConnection;
use time::{Date, OffsetDateTime};

impl FoodEntry {
    pub async fn insert(
        conn: &mut SqliteConnection,
        user_id: i64,
        food: &str,
        calories: i64,
        date: Date,
    ) -> sqlx::Result<FoodEntry> {
        sqlx::query_as::<_, FoodEntry>(
            r#"
            INSERT INTO food_entries (food, calories, date, created_at, user_id)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, food, calories, date, created_at, user_id
            "#,
        )
        .bind(food)
        .bind(calories)
        .bind(date)
        .bind(OffsetDateTime::now_utc())
        .bind(user_id)
        .fetch_one(&mut *conn)
        .await
    }

    pub async fn find(
        conn: &mut SqliteConnection,
        user_id: i64,
        id: i64,
    ) -> sqlx::Result<Option<FoodEntry>> {
        sqlx::query_as::<_, FoodEntry>(
            r#"
            SELECT id, food, calories, date, created_at, user_id
            FROM food_entries
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await
    }

    /// Entries of one user on one day, in insertion order.
    pub async fn list_for_day(
        conn: &mut SqliteConnection,
        user_id: i64,
        date: Date,
    ) -> sqlx::Result<Vec<FoodEntry>> {
        sqlx::query_as::<_, FoodEntry>(
            r#"
            SELECT id, food, calories, date, created_at, user_id
            FROM food_entries
            WHERE user_id = ? AND date = ?
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_all(&mut *conn)
        .await
    }

    /// Listing with optional owner and date filters; no filters means every entry.
    pub async fn search(
        conn: &mut SqliteConnection,
        user_id: Option<i64>,
        date: Option<Date>,
    ) -> sqlx::Result<Vec<FoodEntryListing>> {
        sqlx::query_as::<_, FoodEntryListing>(
            r#"
            SELECT f.id, f.food, f.calories, f.date, u.name AS user_name
            FROM food_entries f
            JOIN users u ON u.id = f.user_id
            WHERE (?1 IS NULL OR f.user_id = ?1)
              AND (?2 IS NULL OR f.date = ?2)
            ORDER BY f.date, f.id
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_all(&mut *conn)
        .await
    }

    /// Sum of calories for `user_id` with `from <= date <= to`; 0 when nothing matches.
    pub async fn total_calories(
        conn: &mut SqliteConnection,
        user_id: i64,
        from: Date,
        to: Date,
    ) -> sqlx::Result<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COALESCE(SUM(calories), 0)
            FROM food_entries
            WHERE user_id = ? AND date BETWEEN ? AND ?
            "#,
        )
        .bind(user_id)
        .bind(from)
        .bind(to)
        .fetch_one(&mut *conn)
        .await
    }

    pub async fn update(
        conn: &mut SqliteConnection,
        entry: &FoodEntry,
    ) -> sqlx::Result<Option<FoodEntry>> {
        sqlx::query_as::<_, FoodEntry>(
            r#"
            UPDATE food_entries
            SET food = ?, calories = ?, date = ?
            WHERE id = ? AND user_id = ?
            RETURNING id, food, calories, date, created_at, user_id
            "#,
        )
        .bind(&entry.food)
        .bind(entry.calories)
        .bind(entry.date)
        .bind(entry.id)
        .bind(entry.user_id)
        .fetch_optional(&mut *conn)
        .await
    }

    pub async fn delete(conn: &mut SqliteConnection, user_id: i64, id: i64) -> sqlx::Result<bool> {
        let res = sqlx::query("DELETE FROM food_entries WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&mut *conn)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
