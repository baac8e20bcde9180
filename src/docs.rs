use crate::model::attendance::{AttendanceStatus, DailyAttendance};
use crate::model::employee::Employee;
use crate::models::{
    AttendanceForm, EmployeeListResponse, GroupedAttendance, SaveAttendance, SaveWeeklyAttendance,
    WeeklyAttendanceForm,
};
use crate::service::week::{WeekBucket, WeekKey};
use utoipa::{OpenApi, openapi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance Register API",
        version = "1.0.0",
        description = r#"
## Employee Attendance Register

Lists employees and records their daily time-in, time-out and status.

### 🔹 Key Features
- **Employees**
  - List the roster and view an employee's attendance history
- **Attendance**
  - Enter attendance for the current week
  - View attendance grouped by ISO week
  - Edit, replace or delete a Monday-to-Friday week

### 📦 Response Format
- JSON responses
- Writes answer with `303 See Other` pointing at the view to reload

---
Built with **Rust**, **Actix Web** and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,

        crate::api::attendance::enter_attendance,
        crate::api::attendance::save_attendance,
        crate::api::attendance::grouped_attendance,
        crate::api::attendance::edit_week,
        crate::api::attendance::save_week,
        crate::api::attendance::delete_week
    ),
    components(
        schemas(
            AttendanceStatus,
            DailyAttendance,
            Employee,
            EmployeeListResponse,
            SaveAttendance,
            SaveWeeklyAttendance,
            AttendanceForm,
            WeeklyAttendanceForm,
            GroupedAttendance,
            WeekKey,
            WeekBucket
        )
    ),
    tags(
        (name = "Employee", description = "Employee roster APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
    )
)]
pub struct ApiDoc;

/// Handler paths are declared under `/api`; this moves them under the
/// prefix the routes are actually mounted on.
pub fn openapi_for(api_prefix: &str) -> openapi::OpenApi {
    let prefix = api_prefix.trim_end_matches('/');
    let mut doc = ApiDoc::openapi();
    doc.paths.paths = std::mem::take(&mut doc.paths.paths)
        .into_iter()
        .map(|(path, item)| match path.strip_prefix("/api") {
            Some(rest) => (format!("{prefix}{rest}"), item),
            None => (path, item),
        })
        .collect();
    doc
}
