use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;
use tracing::debug;

use crate::model::employee::EmployeeId;

#[derive(Debug, Display, PartialEq, Eq)]
pub enum AttendanceError {
    #[display(fmt = "Employee not found")]
    EmployeeNotFound(EmployeeId),

    #[display(fmt = "Invalid data.")]
    InvalidData,

    #[display(fmt = "Week start date is out of range")]
    DateOutOfRange,
}

impl std::error::Error for AttendanceError {}

impl ResponseError for AttendanceError {
    fn status_code(&self) -> StatusCode {
        match self {
            AttendanceError::EmployeeNotFound(_) => StatusCode::NOT_FOUND,
            AttendanceError::InvalidData | AttendanceError::DateOutOfRange => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AttendanceError::EmployeeNotFound(employee_id) = self {
            debug!(employee_id, "Employee not found");
        }
        HttpResponse::build(self.status_code()).json(json!({
            "message": self.to_string()
        }))
    }
}
