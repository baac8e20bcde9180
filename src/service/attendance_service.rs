use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::AttendanceError;
use crate::model::attendance::DailyAttendance;
use crate::model::employee::{Employee, EmployeeId};
use crate::service::week::{self, WeekBucket, WeekWindow};
use crate::store::{EmployeeStore, MemoryStore};

/// Outcome of a week replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekChange {
    pub removed: usize,
    pub inserted: usize,
}

pub struct AttendanceService<S = MemoryStore> {
    store: S,
}

impl<S: EmployeeStore> AttendanceService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_employees(&self) -> Vec<Employee> {
        self.store.employees()
    }

    pub fn get_employee(&self, id: EmployeeId) -> Option<Employee> {
        self.store.employee(id)
    }

    /// Appends without touching existing records.
    pub fn append_attendance(
        &self,
        id: EmployeeId,
        records: Vec<DailyAttendance>,
    ) -> Result<usize, AttendanceError> {
        let count = records.len();
        self.store
            .modify_attendances(id, |attendances| attendances.extend(records))
            .ok_or(AttendanceError::EmployeeNotFound(id))?;

        info!(employee_id = id, count, "Attendance appended");
        Ok(count)
    }

    /// Drops every record dated inside `[week_start, week_start + 4]`, then
    /// appends `records` as given. The result is not re-sorted.
    pub fn replace_week(
        &self,
        id: EmployeeId,
        week_start: NaiveDate,
        records: Vec<DailyAttendance>,
    ) -> Result<WeekChange, AttendanceError> {
        let window = WeekWindow::starting(week_start)?;
        let inserted = records.len();

        let removed = self
            .store
            .modify_attendances(id, |attendances| {
                let removed = remove_window(attendances, &window);
                attendances.extend(records);
                removed
            })
            .ok_or(AttendanceError::EmployeeNotFound(id))?;

        info!(
            employee_id = id,
            week_start = %week_start,
            removed,
            inserted,
            "Week attendance replaced"
        );
        Ok(WeekChange { removed, inserted })
    }

    pub fn delete_week(
        &self,
        id: EmployeeId,
        week_start: NaiveDate,
    ) -> Result<usize, AttendanceError> {
        let window = WeekWindow::starting(week_start)?;

        let removed = self
            .store
            .modify_attendances(id, |attendances| remove_window(attendances, &window))
            .ok_or(AttendanceError::EmployeeNotFound(id))?;

        info!(employee_id = id, week_start = %week_start, removed, "Week attendance deleted");
        Ok(removed)
    }

    /// Stored records inside the week window, sorted by date.
    pub fn week_attendance(
        &self,
        id: EmployeeId,
        week_start: NaiveDate,
    ) -> Result<Vec<DailyAttendance>, AttendanceError> {
        let window = WeekWindow::starting(week_start)?;
        let employee = self
            .get_employee(id)
            .ok_or(AttendanceError::EmployeeNotFound(id))?;

        let mut records: Vec<_> = employee
            .attendances
            .into_iter()
            .filter(|record| window.contains(record.date))
            .collect();
        records.sort_by_key(|record| record.date);
        Ok(records)
    }

    /// Like `week_attendance`, but an empty week comes back as five
    /// placeholder days starting at `week_start`.
    pub fn week_for_editing(
        &self,
        id: EmployeeId,
        week_start: NaiveDate,
    ) -> Result<Vec<DailyAttendance>, AttendanceError> {
        let records = self.week_attendance(id, week_start)?;
        if !records.is_empty() {
            return Ok(records);
        }

        debug!(employee_id = id, week_start = %week_start, "No stored week, synthesizing placeholders");
        let window = WeekWindow::starting(week_start)?;
        Ok(window.days().map(DailyAttendance::placeholder).collect())
    }

    pub fn group_by_week(&self, records: &[DailyAttendance]) -> Vec<WeekBucket> {
        week::group_by_week(records)
    }
}

fn remove_window(attendances: &mut Vec<DailyAttendance>, window: &WeekWindow) -> usize {
    let before = attendances.len();
    attendances.retain(|record| !window.contains(record.date));
    before - attendances.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attendance::AttendanceStatus;
    use crate::store::{MemoryStore, RosterEntry};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn monday() -> NaiveDate {
        date(2024, 8, 5)
    }

    fn present(date: NaiveDate, note: &str) -> DailyAttendance {
        DailyAttendance {
            date,
            time_in: chrono::NaiveTime::from_hms_opt(8, 0, 0),
            time_out: chrono::NaiveTime::from_hms_opt(17, 0, 0),
            status: Some(AttendanceStatus {
                status_type: "Present".to_string(),
                additional_info: note.to_string(),
            }),
        }
    }

    fn service() -> AttendanceService {
        AttendanceService::new(MemoryStore::seeded())
    }

    fn dates(service: &AttendanceService, id: EmployeeId) -> Vec<NaiveDate> {
        service
            .get_employee(id)
            .unwrap()
            .attendances
            .iter()
            .map(|record| record.date)
            .collect()
    }

    #[test]
    fn seeded_employees_are_found_by_id() {
        let service = service();

        for employee in service.list_employees() {
            assert_eq!(service.get_employee(employee.id), Some(employee));
        }
        assert_eq!(service.get_employee(0), None);
        assert_eq!(service.get_employee(42), None);
    }

    #[test]
    fn list_preserves_seed_order() {
        let ids: Vec<_> = service().list_employees().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn empty_roster_lists_nothing() {
        let service = AttendanceService::new(MemoryStore::from_roster(Vec::new()).unwrap());
        assert!(service.list_employees().is_empty());
    }

    #[test]
    fn delete_week_removes_only_the_window() {
        let service = service();
        service
            .append_attendance(
                1,
                vec![
                    present(monday() + chrono::Days::new(1), ""),
                    present(monday() + chrono::Days::new(5), ""),
                ],
            )
            .unwrap();

        let removed = service.delete_week(1, monday()).unwrap();

        assert_eq!(removed, 1);
        assert_eq!(dates(&service, 1), vec![date(2024, 8, 10)]);
    }

    #[test]
    fn delete_week_is_idempotent() {
        let service = service();
        service
            .append_attendance(1, vec![present(monday(), ""), present(date(2024, 8, 12), "")])
            .unwrap();

        service.delete_week(1, monday()).unwrap();
        let once = service.get_employee(1).unwrap().attendances;
        assert_eq!(service.delete_week(1, monday()), Ok(0));
        let twice = service.get_employee(1).unwrap().attendances;

        assert_eq!(once, twice);
    }

    #[test]
    fn replace_week_discards_old_days_rather_than_merging() {
        let service = service();
        service
            .append_attendance(1, vec![present(monday(), "old"), present(date(2024, 8, 6), "old")])
            .unwrap();

        let change = service
            .replace_week(1, monday(), vec![present(monday(), "new")])
            .unwrap();

        assert_eq!(change, WeekChange { removed: 2, inserted: 1 });
        let attendances = service.get_employee(1).unwrap().attendances;
        assert_eq!(attendances, vec![present(monday(), "new")]);
    }

    #[test]
    fn replace_week_appends_in_given_order_without_sorting() {
        let service = service();
        service
            .append_attendance(2, vec![present(date(2024, 8, 14), "")])
            .unwrap();

        service
            .replace_week(
                2,
                monday(),
                vec![present(date(2024, 8, 7), ""), present(date(2024, 8, 5), "")],
            )
            .unwrap();

        assert_eq!(
            dates(&service, 2),
            vec![date(2024, 8, 14), date(2024, 8, 7), date(2024, 8, 5)]
        );
    }

    #[test]
    fn writes_to_unknown_employee_report_not_found() {
        let service = service();

        assert_eq!(
            service.replace_week(9, monday(), vec![present(monday(), "")]),
            Err(AttendanceError::EmployeeNotFound(9))
        );
        assert_eq!(
            service.delete_week(9, monday()),
            Err(AttendanceError::EmployeeNotFound(9))
        );
        assert_eq!(
            service.append_attendance(9, vec![present(monday(), "")]),
            Err(AttendanceError::EmployeeNotFound(9))
        );
    }

    #[test]
    fn writes_leave_other_employees_alone() {
        let service = service();
        service.append_attendance(3, vec![present(monday(), "")]).unwrap();

        service.delete_week(1, monday()).unwrap();

        assert_eq!(dates(&service, 3), vec![monday()]);
    }

    #[test]
    fn week_attendance_is_filtered_and_sorted() {
        let service = service();
        service
            .append_attendance(
                1,
                vec![
                    present(date(2024, 8, 9), ""),
                    present(date(2024, 8, 12), ""),
                    present(date(2024, 8, 5), ""),
                ],
            )
            .unwrap();

        let week: Vec<_> = service
            .week_attendance(1, monday())
            .unwrap()
            .into_iter()
            .map(|record| record.date)
            .collect();

        assert_eq!(week, vec![date(2024, 8, 5), date(2024, 8, 9)]);
    }

    #[test]
    fn editing_an_empty_week_synthesizes_five_days() {
        let service = service();

        let week = service.week_for_editing(1, monday()).unwrap();

        assert_eq!(
            week,
            (5..=9)
                .map(|d| DailyAttendance::placeholder(date(2024, 8, d)))
                .collect::<Vec<_>>()
        );
        assert!(service.get_employee(1).unwrap().attendances.is_empty());
    }

    #[test]
    fn editing_a_partial_week_returns_only_stored_days() {
        let service = service();
        service
            .append_attendance(1, vec![present(date(2024, 8, 7), "")])
            .unwrap();

        let week = service.week_for_editing(1, monday()).unwrap();

        assert_eq!(week, vec![present(date(2024, 8, 7), "")]);
    }

    #[test]
    fn group_by_week_reads_the_given_records_only() {
        let service = AttendanceService::new(
            MemoryStore::from_roster(vec![RosterEntry { id: 5, name: "Thandi".into() }]).unwrap(),
        );
        let records = vec![
            present(date(2024, 8, 6), ""),
            present(date(2024, 8, 13), ""),
            present(date(2024, 8, 5), ""),
            present(date(2024, 8, 12), ""),
        ];

        let buckets = service.group_by_week(&records);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].days[0].date, date(2024, 8, 5));
        assert_eq!(buckets[0].days[1].date, date(2024, 8, 6));
        assert_eq!(buckets[1].days[0].date, date(2024, 8, 12));
        assert!(service.get_employee(5).unwrap().attendances.is_empty());
    }

    #[test]
    fn concurrent_week_writes_keep_one_record_per_day() {
        let service = std::sync::Arc::new(service());
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let service = service.clone();
                std::thread::spawn(move || {
                    let week: Vec<_> = (0..5)
                        .map(|d| present(monday() + chrono::Days::new(d), &n.to_string()))
                        .collect();
                    service.replace_week(1, monday(), week).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(
            dates(&service, 1),
            (5..=9).map(|d| date(2024, 8, d)).collect::<Vec<_>>()
        );
    }
}
