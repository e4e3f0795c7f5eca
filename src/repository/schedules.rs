//! Schedules repository for database operations

use chrono::NaiveTime;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::schedule::{Schedule, ScheduleDay, ScheduleQuery},
};

#[derive(Clone)]
pub struct SchedulesRepository {
    pool: Pool<Postgres>,
}

impl SchedulesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List schedules, optionally restricted to one staff account
    pub async fn list(&self, query: &ScheduleQuery) -> AppResult<Vec<Schedule>> {
        let rows = match query.staff_id {
            Some(staff_id) => {
                sqlx::query_as::<_, Schedule>(
                    r#"
                    SELECT * FROM schedules
                    WHERE staff_id = $1
                    ORDER BY schedule_day, schedule_start_time
                    "#,
                )
                .bind(staff_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Schedule>(
                    "SELECT * FROM schedules ORDER BY staff_id, schedule_day, schedule_start_time",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows)
    }

    /// Get schedule by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Schedule> {
        sqlx::query_as::<_, Schedule>("SELECT * FROM schedules WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Schedule not found".to_string()))
    }

    /// Create a schedule entry
    pub async fn create(
        &self,
        staff_id: i32,
        day: ScheduleDay,
        start_time: NaiveTime,
        end_time: NaiveTime,
        note: Option<&str>,
    ) -> AppResult<Schedule> {
        let row = sqlx::query_as::<_, Schedule>(
            r#"
            INSERT INTO schedules
                (staff_id, schedule_day, schedule_start_time, schedule_end_time, schedule_note)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(staff_id)
        .bind(day)
        .bind(start_time)
        .bind(end_time)
        .bind(note)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Hard delete a schedule entry
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM schedules WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Schedule not found".to_string()));
        }
        Ok(())
    }
}
