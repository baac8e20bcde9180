use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::attendance::DailyAttendance;
use crate::model::employee::{Employee, EmployeeId};
use crate::service::week::WeekBucket;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct EmployeeListResponse {
    pub data: Vec<Employee>,
    #[schema(example = 3)]
    pub total: usize,
}

/// Simple (append-only) save payload.
#[derive(Deserialize, Serialize, ToSchema)]
pub struct SaveAttendance {
    #[serde(default)]
    pub weekly_attendance: Option<Vec<DailyAttendance>>,
}

/// Week replace payload. An empty list clears the week.
#[derive(Deserialize, Serialize, ToSchema)]
pub struct SaveWeeklyAttendance {
    #[serde(default)]
    pub weekly_attendance: Vec<DailyAttendance>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AttendanceForm {
    pub employee: Employee,
    #[schema(example = "2024-08-05", format = "date", value_type = String)]
    pub week_start_date: NaiveDate,
    pub weekly_attendance: Vec<DailyAttendance>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct WeeklyAttendanceForm {
    #[schema(example = 1, value_type = u64)]
    pub employee_id: EmployeeId,
    #[schema(example = "2024-08-05", format = "date", value_type = String)]
    pub week_start_date: NaiveDate,
    pub weekly_attendance: Vec<DailyAttendance>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GroupedAttendance {
    pub employee: Employee,
    pub weeks: Vec<WeekBucket>,
}
