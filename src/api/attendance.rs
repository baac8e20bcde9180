use actix_web::{HttpRequest, HttpResponse, Responder, http::header, web};
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::error::AttendanceError;
use crate::model::attendance::AttendanceStatus;
use crate::model::employee::EmployeeId;
use crate::models::{
    AttendanceForm, GroupedAttendance, SaveAttendance, SaveWeeklyAttendance, WeeklyAttendanceForm,
};
use crate::service::attendance_service::AttendanceService;
use crate::service::week::{is_monday, monday_of};

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn grouped_view_location(req: &HttpRequest, employee_id: EmployeeId) -> actix_web::Result<String> {
    let url = req
        .url_for("grouped_attendance", [employee_id.to_string()])
        .map_err(actix_web::error::ErrorInternalServerError)?;
    Ok(url.to_string())
}

fn warn_if_not_monday(employee_id: EmployeeId, week_start: NaiveDate) {
    if !is_monday(week_start) {
        warn!(employee_id, week_start = %week_start, "Week start is not a Monday");
    }
}

/// Current week's records, or five blank days with an empty status each.
fn attendance_form(
    service: &AttendanceService,
    employee_id: EmployeeId,
    today: NaiveDate,
) -> Result<AttendanceForm, AttendanceError> {
    let employee = service
        .get_employee(employee_id)
        .ok_or(AttendanceError::EmployeeNotFound(employee_id))?;

    let week_start = monday_of(today);
    let mut weekly_attendance = service.week_for_editing(employee_id, week_start)?;
    for day in &mut weekly_attendance {
        day.status.get_or_insert_with(AttendanceStatus::default);
    }

    Ok(AttendanceForm {
        employee,
        week_start_date: week_start,
        weekly_attendance,
    })
}

/// Enter attendance for the current week
#[utoipa::path(
    get,
    path = "/api/employee/{employee_id}/attendance/enter",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Attendance form for the current week", body = AttendanceForm),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Attendance"
)]
pub async fn enter_attendance(
    service: web::Data<AttendanceService>,
    path: web::Path<EmployeeId>,
) -> actix_web::Result<impl Responder> {
    let today = Local::now().date_naive();
    let form = attendance_form(&service, path.into_inner(), today)?;

    Ok(HttpResponse::Ok().json(form))
}

/// Save attendance (append only)
#[utoipa::path(
    post,
    path = "/api/employee/{employee_id}/attendance",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    request_body = SaveAttendance,
    responses(
        (status = 303, description = "Saved, redirects to the employee list"),
        (status = 400, description = "Invalid data", body = Object, example = json!({
            "message": "Invalid data."
        })),
        (status = 404, description = "Employee not found")
    ),
    tag = "Attendance"
)]
pub async fn save_attendance(
    req: HttpRequest,
    service: web::Data<AttendanceService>,
    path: web::Path<EmployeeId>,
    payload: Option<web::Json<SaveAttendance>>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();

    // validated before any lookup; a missing or unreadable body counts as no records
    let records = match payload.and_then(|p| p.into_inner().weekly_attendance) {
        Some(records) if employee_id != 0 && !records.is_empty() => records,
        _ => return Err(AttendanceError::InvalidData.into()),
    };

    service.append_attendance(employee_id, records)?;

    let location = req
        .url_for_static("employee_list")
        .map_err(actix_web::error::ErrorInternalServerError)?;
    Ok(see_other(location.as_str()))
}

/// View attendance grouped by week
#[utoipa::path(
    get,
    path = "/api/employee/{employee_id}/attendance/weeks",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Attendance history in week buckets", body = GroupedAttendance),
        (status = 404, description = "Employee not found")
    ),
    tag = "Attendance"
)]
pub async fn grouped_attendance(
    service: web::Data<AttendanceService>,
    path: web::Path<EmployeeId>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    let employee = service
        .get_employee(employee_id)
        .ok_or(AttendanceError::EmployeeNotFound(employee_id))?;

    let weeks = service.group_by_week(&employee.attendances);

    Ok(HttpResponse::Ok().json(GroupedAttendance { employee, weeks }))
}

/// Edit one week of attendance
#[utoipa::path(
    get,
    path = "/api/employee/{employee_id}/attendance/weeks/{week_start}",
    params(
        ("employee_id", Path, description = "Employee ID"),
        ("week_start", Path, description = "Monday of the week, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Stored week, or five placeholder days", body = WeeklyAttendanceForm),
        (status = 404, description = "Employee not found")
    ),
    tag = "Attendance"
)]
pub async fn edit_week(
    service: web::Data<AttendanceService>,
    path: web::Path<(EmployeeId, NaiveDate)>,
) -> actix_web::Result<impl Responder> {
    let (employee_id, week_start) = path.into_inner();
    warn_if_not_monday(employee_id, week_start);

    let weekly_attendance = service.week_for_editing(employee_id, week_start)?;

    Ok(HttpResponse::Ok().json(WeeklyAttendanceForm {
        employee_id,
        week_start_date: week_start,
        weekly_attendance,
    }))
}

/// Replace one week of attendance
#[utoipa::path(
    put,
    path = "/api/employee/{employee_id}/attendance/weeks/{week_start}",
    params(
        ("employee_id", Path, description = "Employee ID"),
        ("week_start", Path, description = "Monday of the week, YYYY-MM-DD")
    ),
    request_body = SaveWeeklyAttendance,
    responses(
        (status = 303, description = "Saved, redirects to the grouped view"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Attendance"
)]
pub async fn save_week(
    req: HttpRequest,
    service: web::Data<AttendanceService>,
    path: web::Path<(EmployeeId, NaiveDate)>,
    payload: web::Json<SaveWeeklyAttendance>,
) -> actix_web::Result<impl Responder> {
    let (employee_id, week_start) = path.into_inner();
    warn_if_not_monday(employee_id, week_start);

    let change =
        service.replace_week(employee_id, week_start, payload.into_inner().weekly_attendance)?;
    debug!(employee_id, removed = change.removed, inserted = change.inserted, "Week saved");

    Ok(see_other(&grouped_view_location(&req, employee_id)?))
}

/// Delete one week of attendance
#[utoipa::path(
    delete,
    path = "/api/employee/{employee_id}/attendance/weeks/{week_start}",
    params(
        ("employee_id", Path, description = "Employee ID"),
        ("week_start", Path, description = "Monday of the week, YYYY-MM-DD")
    ),
    responses(
        (status = 303, description = "Deleted, redirects to the grouped view"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Attendance"
)]
pub async fn delete_week(
    req: HttpRequest,
    service: web::Data<AttendanceService>,
    path: web::Path<(EmployeeId, NaiveDate)>,
) -> actix_web::Result<impl Responder> {
    let (employee_id, week_start) = path.into_inner();
    warn_if_not_monday(employee_id, week_start);

    service.delete_week(employee_id, week_start)?;

    Ok(see_other(&grouped_view_location(&req, employee_id)?))
}
