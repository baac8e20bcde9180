use actix_web::{HttpResponse, Responder, web};
use tracing::debug;

use crate::error::AttendanceError;
use crate::model::employee::{Employee, EmployeeId};
use crate::models::EmployeeListResponse;
use crate::service::attendance_service::AttendanceService;

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employee",
    responses(
        (status = 200, description = "All employees in roster order", body = EmployeeListResponse)
    ),
    tag = "Employee"
)]
pub async fn list_employees(service: web::Data<AttendanceService>) -> impl Responder {
    let employees = service.list_employees();
    debug!(total = employees.len(), "Listing employees");

    HttpResponse::Ok().json(EmployeeListResponse {
        total: employees.len(),
        data: employees,
    })
}

/// Get Employee
#[utoipa::path(
    get,
    path = "/api/employee/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee with attendance history", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    service: web::Data<AttendanceService>,
    path: web::Path<EmployeeId>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();

    let employee = service
        .get_employee(employee_id)
        .ok_or(AttendanceError::EmployeeNotFound(employee_id))?;

    Ok(HttpResponse::Ok().json(employee))
}
