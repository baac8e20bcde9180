use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceStatus {
    /// e.g. "Present", "Leave", "Sick", "Unpaid Leave"
    #[schema(example = "Present")]
    #[serde(default)]
    pub status_type: String,

    /// e.g. "Half Day", "Early Leave"
    #[schema(example = "Half Day")]
    #[serde(default)]
    pub additional_info: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "date": "2024-08-05",
        "time_in": "08:00:00",
        "time_out": "17:00:00",
        "status": { "status_type": "Present", "additional_info": "" }
    })
)]
pub struct DailyAttendance {
    #[schema(example = "2024-08-05", format = "date", value_type = String)]
    pub date: NaiveDate,

    #[schema(example = "08:00:00", value_type = Option<String>, nullable = true)]
    #[serde(default)]
    pub time_in: Option<NaiveTime>,

    #[schema(example = "17:00:00", value_type = Option<String>, nullable = true)]
    #[serde(default)]
    pub time_out: Option<NaiveTime>,

    #[serde(default)]
    pub status: Option<AttendanceStatus>,
}

impl DailyAttendance {
    /// Blank record for a day nobody has filled in yet.
    pub fn placeholder(date: NaiveDate) -> Self {
        Self {
            date,
            time_in: None,
            time_out: None,
            status: None,
        }
    }
}
