use std::collections::HashSet;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::model::attendance::DailyAttendance;
use crate::model::employee::{Employee, EmployeeId};

/// Backing store for employees and their attendance history.
///
/// Reads hand out owned snapshots. The only way to change a stored
/// attendance sequence is `modify_attendances`.
pub trait EmployeeStore: Send + Sync {
    fn employees(&self) -> Vec<Employee>;

    fn employee(&self, id: EmployeeId) -> Option<Employee>;

    /// Runs `f` against the employee's attendance sequence while holding that
    /// employee's lock. Returns `None` when no employee has `id`.
    fn modify_attendances<R>(
        &self,
        id: EmployeeId,
        f: impl FnOnce(&mut Vec<DailyAttendance>) -> R,
    ) -> Option<R>;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RosterEntry {
    pub id: EmployeeId,
    pub name: String,
}

pub fn default_roster() -> Vec<RosterEntry> {
    [(1, "Lindokuhle"), (2, "Lihle"), (3, "Siphelo")]
        .into_iter()
        .map(|(id, name)| RosterEntry {
            id,
            name: name.to_string(),
        })
        .collect()
}

pub fn parse_roster(json: &str) -> Result<Vec<RosterEntry>> {
    serde_json::from_str(json).context("Roster must be a JSON array of {id, name}")
}

pub fn load_roster(path: &Path) -> Result<Vec<RosterEntry>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file {}", path.display()))?;
    parse_roster(&raw)
}

struct StoredEmployee {
    id: EmployeeId,
    name: String,
    attendances: Mutex<Vec<DailyAttendance>>,
}

impl StoredEmployee {
    fn lock(&self) -> MutexGuard<'_, Vec<DailyAttendance>> {
        // a panicked writer leaves a fully formed Vec behind
        self.attendances
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn snapshot(&self) -> Employee {
        Employee {
            id: self.id,
            name: self.name.clone(),
            attendances: self.lock().clone(),
        }
    }
}

/// In-process store. The roster is fixed at construction; each employee's
/// attendance sequence has its own lock.
pub struct MemoryStore {
    employees: Vec<StoredEmployee>,
}

impl MemoryStore {
    pub fn seeded() -> Self {
        Self::build(default_roster())
    }

    pub fn from_roster(roster: Vec<RosterEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &roster {
            if entry.id == 0 {
                bail!("Roster entry '{}' has id 0", entry.name);
            }
            if !seen.insert(entry.id) {
                bail!("Duplicate employee id {} in roster", entry.id);
            }
        }

        Ok(Self::build(roster))
    }

    fn build(roster: Vec<RosterEntry>) -> Self {
        let employees = roster
            .into_iter()
            .map(|entry| StoredEmployee {
                id: entry.id,
                name: entry.name,
                attendances: Mutex::new(Vec::new()),
            })
            .collect();

        Self { employees }
    }

    fn find(&self, id: EmployeeId) -> Option<&StoredEmployee> {
        self.employees.iter().find(|e| e.id == id)
    }
}

impl EmployeeStore for MemoryStore {
    fn employees(&self) -> Vec<Employee> {
        self.employees.iter().map(StoredEmployee::snapshot).collect()
    }

    fn employee(&self, id: EmployeeId) -> Option<Employee> {
        self.find(id).map(StoredEmployee::snapshot)
    }

    fn modify_attendances<R>(
        &self,
        id: EmployeeId,
        f: impl FnOnce(&mut Vec<DailyAttendance>) -> R,
    ) -> Option<R> {
        let stored = self.find(id)?;
        let mut attendances = stored.lock();
        Some(f(&mut *attendances))
    }
}
