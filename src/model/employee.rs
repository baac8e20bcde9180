use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::attendance::DailyAttendance;

pub type EmployeeId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "Lindokuhle",
        "attendances": [
            {
                "date": "2024-08-05",
                "time_in": "08:00:00",
                "time_out": "17:00:00",
                "status": { "status_type": "Present", "additional_info": "" }
            }
        ]
    })
)]
pub struct Employee {
    #[schema(example = 1, value_type = u64)]
    pub id: EmployeeId,

    #[schema(example = "Lindokuhle")]
    pub name: String,

    #[serde(default)]
    pub attendances: Vec<DailyAttendance>,
}
