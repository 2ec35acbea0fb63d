//! In-memory document store backend
//!
//! Backs tests and the `memory` store mode. Documents live in plain maps;
//! schedule ids are assigned on first save the way the JSON API would.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use shared::{AuditRecord, Department, Recipe, Schedule, Staff};

use super::{DocumentStore, StoreError, StoreResult};

/// In-memory document sets
#[derive(Default)]
pub struct MemoryStore {
    schedules: RwLock<HashMap<String, Schedule>>,
    audits: RwLock<HashMap<String, AuditRecord>>,
    recipes: RwLock<HashMap<Department, Vec<Recipe>>>,
    handlers: RwLock<HashMap<Department, Vec<Staff>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed recipe reference data for a department
    pub fn seed_recipes(&self, department: Department, recipes: Vec<Recipe>) {
        self.recipes
            .write()
            .expect("memory store lock poisoned")
            .insert(department, recipes);
    }

    /// Seed staff reference data for a department
    pub fn seed_handlers(&self, department: Department, handlers: Vec<Staff>) {
        self.handlers
            .write()
            .expect("memory store lock poisoned")
            .insert(department, handlers);
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn fetch_schedules(&self, department: Department) -> StoreResult<Vec<Schedule>> {
        let mut schedules: Vec<Schedule> = self
            .schedules
            .read()
            .expect("memory store lock poisoned")
            .values()
            .filter(|s| s.department == department)
            .cloned()
            .collect();
        schedules.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        Ok(schedules)
    }

    async fn save_schedule(
        &self,
        _department: Department,
        mut schedule: Schedule,
    ) -> StoreResult<Schedule> {
        if schedule.id.is_empty() {
            schedule.id = Uuid::new_v4().to_string();
        }
        self.schedules
            .write()
            .expect("memory store lock poisoned")
            .insert(schedule.id.clone(), schedule.clone());
        Ok(schedule)
    }

    async fn delete_schedule(&self, schedule_id: &str) -> StoreResult<()> {
        self.schedules
            .write()
            .expect("memory store lock poisoned")
            .remove(schedule_id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound("Schedule".to_string()))
    }

    async fn fetch_audits(&self, department: Department) -> StoreResult<Vec<AuditRecord>> {
        let mut audits: Vec<AuditRecord> = self
            .audits
            .read()
            .expect("memory store lock poisoned")
            .values()
            .filter(|a| a.department == department)
            .cloned()
            .collect();
        audits.sort_by(|a, b| a.uid.cmp(&b.uid));
        Ok(audits)
    }

    async fn save_audit(&self, audit: AuditRecord) -> StoreResult<AuditRecord> {
        self.audits
            .write()
            .expect("memory store lock poisoned")
            .insert(audit.uid.clone(), audit.clone());
        Ok(audit)
    }

    async fn delete_audit(&self, audit_uid: &str) -> StoreResult<()> {
        self.audits
            .write()
            .expect("memory store lock poisoned")
            .remove(audit_uid)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound("Audit record".to_string()))
    }

    async fn fetch_recipes(&self, department: Department) -> StoreResult<Vec<Recipe>> {
        Ok(self
            .recipes
            .read()
            .expect("memory store lock poisoned")
            .get(&department)
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_handlers(&self, department: Department) -> StoreResult<Vec<Staff>> {
        Ok(self
            .handlers
            .read()
            .expect("memory store lock poisoned")
            .get(&department)
            .cloned()
            .unwrap_or_default())
    }
}
