pub mod attendance_service;
pub mod week;
