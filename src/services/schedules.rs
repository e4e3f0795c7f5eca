//! Schedules service: weekly staff shifts

use chrono::NaiveTime;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::schedule::{CreateSchedule, Schedule, ScheduleDay, ScheduleQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct SchedulesService {
    repository: Repository,
}

impl SchedulesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &ScheduleQuery) -> AppResult<Vec<Schedule>> {
        let schedules = self.repository.schedules.list(query).await?;
        if schedules.is_empty() {
            return Err(AppError::NotFound("No schedules found".to_string()));
        }
        Ok(schedules)
    }

    pub async fn create(&self, data: &CreateSchedule) -> AppResult<Schedule> {
        let staff_id = data
            .staff_id
            .ok_or_else(|| AppError::Validation("Staff id is required".to_string()))?;
        let day_raw = data
            .schedule_day
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| AppError::Validation("Schedule day is required".to_string()))?;
        let start_raw = data
            .schedule_start_time
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| AppError::Validation("Schedule start time is required".to_string()))?;
        let end_raw = data
            .schedule_end_time
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| AppError::Validation("Schedule end time is required".to_string()))?;

        let day: ScheduleDay = day_raw
            .parse()
            .map_err(|_| AppError::Validation("Invalid schedule day".to_string()))?;

        // Staff must exist before the insert
        self.repository.staff.get_by_id(staff_id).await?;

        let (start, end) = parse_time_range(start_raw, end_raw)?;

        self.repository
            .schedules
            .create(staff_id, day, start, end, data.schedule_note.as_deref())
            .await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.schedules.get_by_id(id).await?;
        self.repository.schedules.delete(id).await
    }
}

/// Parse "HH:MM" shift bounds and require the start to precede the end
fn parse_time_range(start_raw: &str, end_raw: &str) -> AppResult<(NaiveTime, NaiveTime)> {
    let start = NaiveTime::parse_from_str(start_raw, "%H:%M").map_err(|_| {
        AppError::Validation("Schedule start time must be in HH:MM format".to_string())
    })?;
    let end = NaiveTime::parse_from_str(end_raw, "%H:%M").map_err(|_| {
        AppError::Validation("Schedule end time must be in HH:MM format".to_string())
    })?;

    if start >= end {
        return Err(AppError::Validation(
            "Schedule start time must be before end time".to_string(),
        ));
    }

    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordered_times() {
        let (start, end) = parse_time_range("08:00", "09:00").unwrap();
        assert!(start < end);
    }

    #[test]
    fn rejects_start_after_end() {
        let err = parse_time_range("09:00", "08:00").unwrap_err();
        assert!(err
            .to_string()
            .contains("start time must be before end time"));
    }

    #[test]
    fn rejects_equal_times() {
        assert!(parse_time_range("09:00", "09:00").is_err());
    }

    #[test]
    fn rejects_malformed_times() {
        assert!(parse_time_range("9 am", "10:00").is_err());
        assert!(parse_time_range("25:00", "26:00").is_err());
        assert!(parse_time_range("08:61", "09:00").is_err());
    }
}
