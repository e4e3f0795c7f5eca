//! Staff schedule model (weekly day + time range)

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Day of week for a schedule entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleDay {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl ScheduleDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleDay::Mon => "mon",
            ScheduleDay::Tue => "tue",
            ScheduleDay::Wed => "wed",
            ScheduleDay::Thu => "thu",
            ScheduleDay::Fri => "fri",
            ScheduleDay::Sat => "sat",
            ScheduleDay::Sun => "sun",
        }
    }
}

impl std::fmt::Display for ScheduleDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ScheduleDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mon" => Ok(ScheduleDay::Mon),
            "tue" => Ok(ScheduleDay::Tue),
            "wed" => Ok(ScheduleDay::Wed),
            "thu" => Ok(ScheduleDay::Thu),
            "fri" => Ok(ScheduleDay::Fri),
            "sat" => Ok(ScheduleDay::Sat),
            "sun" => Ok(ScheduleDay::Sun),
            _ => Err(format!("Invalid schedule day: {}", s)),
        }
    }
}

impl sqlx::Type<Postgres> for ScheduleDay {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for ScheduleDay {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for ScheduleDay {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

/// Schedule row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Schedule {
    pub id: Uuid,
    pub staff_id: i32,
    pub schedule_day: ScheduleDay,
    /// Shift start
    pub schedule_start_time: NaiveTime,
    /// Shift end, strictly after the start on the same day
    pub schedule_end_time: NaiveTime,
    pub schedule_note: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create schedule request; times as "HH:MM" strings
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSchedule {
    pub staff_id: Option<i32>,
    pub schedule_day: Option<String>,
    pub schedule_start_time: Option<String>,
    pub schedule_end_time: Option<String>,
    pub schedule_note: Option<String>,
}

/// Query parameters for listing schedules
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScheduleQuery {
    /// Restrict to one staff account
    pub staff_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_parses_short_names_only() {
        assert_eq!("mon".parse::<ScheduleDay>().unwrap(), ScheduleDay::Mon);
        assert_eq!("SUN".parse::<ScheduleDay>().unwrap(), ScheduleDay::Sun);
        assert!("monday".parse::<ScheduleDay>().is_err());
        assert!("".parse::<ScheduleDay>().is_err());
    }
}
