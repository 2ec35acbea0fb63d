//! Schedule item lifecycle service
//!
//! Owns every mutation of a production run: creation, edits, drag-and-drop
//! rescheduling and status transitions. All mutations work on copies of the
//! loaded schedule; the document-store write is the commit point, so a
//! failed write leaves authoritative state untouched. Reaching `completed`
//! derives the audit record, persists it, and moves the item out of the
//! schedule.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shared::{
    generate_item_id, validate_actor_name, validate_quality_score, validate_quantity,
    validate_recipe_code, validate_time_hhmm, AuditRecord, ChangeHistoryEntry, Department,
    FieldChange, ProductionStatus, Schedule, ScheduleItem,
};

use crate::error::{AppError, AppResult};
use crate::events::{DashboardEvent, EventBus};
use crate::services::audit_builder::AuditBuilder;
use crate::services::reference::ReferenceData;
use crate::services::supplier_catalog::SupplierCatalog;
use crate::store::DocumentStore;

/// Schedule service coordinating the production lifecycle
#[derive(Clone)]
pub struct ScheduleService {
    store: Arc<dyn DocumentStore>,
    reference: ReferenceData,
    catalog: SupplierCatalog,
    audit_builder: AuditBuilder,
    events: EventBus,
}

/// Input for scheduling a production run
#[derive(Debug, Deserialize)]
pub struct CreateItemInput {
    pub department: Department,
    pub recipe_code: String,
    pub planned_qty: Decimal,
    pub handler_name: String,
    #[serde(default)]
    pub manager_name: String,
    pub date: NaiveDate,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub actor: String,
}

/// Patch applied to an editable item; absent fields stay unchanged
#[derive(Debug, Default, Deserialize)]
pub struct EditItemInput {
    pub planned_qty: Option<Decimal>,
    pub actual_qty: Option<Decimal>,
    pub handler_name: Option<String>,
    pub manager_name: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub quality_score: Option<i32>,
    pub notes: Option<String>,
    pub deviations: Option<Vec<String>>,
    pub ingredient_suppliers: Option<Vec<Option<String>>>,
    pub batch_codes: Option<Vec<Option<String>>>,
    pub sell_by_dates: Option<Vec<Option<String>>>,
    pub receiving_dates: Option<Vec<Option<String>>>,
    pub actor: String,
}

/// Input for a status transition
#[derive(Debug, Deserialize)]
pub struct TransitionInput {
    pub status: ProductionStatus,
    pub actor: String,
}

/// Input for drag-and-drop rescheduling
#[derive(Debug, Deserialize)]
pub struct TimeUpdateInput {
    pub date: NaiveDate,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub actor: String,
}

/// Result of a successful transition
#[derive(Debug, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum TransitionOutcome {
    /// Item stays in the schedule with its new status
    Updated { item: ScheduleItem },
    /// Item completed: moved out of the schedule into the audit store
    Completed { audit: AuditRecord },
}

impl ScheduleService {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        reference: ReferenceData,
        catalog: SupplierCatalog,
        audit_builder: AuditBuilder,
        events: EventBus,
    ) -> Self {
        Self {
            store,
            reference,
            catalog,
            audit_builder,
            events,
        }
    }

    /// List a department's schedules
    pub async fn list_schedules(&self, department: Department) -> AppResult<Vec<Schedule>> {
        Ok(self.store.fetch_schedules(department).await?)
    }

    /// Schedule a new production run.
    ///
    /// New items always start in `scheduled` and carry a single `created`
    /// change-history entry.
    pub async fn create_item(&self, input: CreateItemInput) -> AppResult<ScheduleItem> {
        validate_recipe_code(&input.recipe_code)
            .map_err(|e| AppError::validation("recipe_code", e))?;
        validate_quantity(input.planned_qty).map_err(|e| AppError::validation("planned_qty", e))?;
        validate_actor_name(&input.handler_name)
            .map_err(|e| AppError::validation("handler_name", e))?;
        validate_actor_name(&input.actor).map_err(|e| AppError::validation("actor", e))?;
        validate_times(input.start_time.as_deref(), input.end_time.as_deref())?;

        let recipe = self
            .reference
            .recipe_by_code(input.department, &input.recipe_code)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Recipe {}", input.recipe_code)))?;

        let now = Utc::now();
        let item = ScheduleItem {
            id: generate_item_id(input.date, &input.recipe_code, now.timestamp_millis()),
            recipe_code: input.recipe_code,
            recipe_description: recipe.description,
            planned_qty: input.planned_qty,
            actual_qty: None,
            handler_name: input.handler_name,
            manager_name: input.manager_name,
            date: input.date,
            start_time: input.start_time,
            end_time: input.end_time,
            status: ProductionStatus::Scheduled,
            change_history: vec![ChangeHistoryEntry::created(&input.actor)],
            quality_score: None,
            notes: String::new(),
            deviations: vec!["none".to_string()],
            ingredient_suppliers: vec![],
            batch_codes: vec![],
            sell_by_dates: vec![],
            receiving_dates: vec![],
        };

        let mut schedule = self
            .find_schedule_for_date(input.department, input.date)
            .await?
            .unwrap_or_else(|| Schedule {
                id: String::new(),
                department: input.department,
                date: input.date,
                items: vec![],
                created_at: now,
                updated_at: now,
            });
        schedule.items.push(item.clone());
        schedule.updated_at = now;

        let saved = self.store.save_schedule(input.department, schedule).await?;
        self.publish_schedule_updated(&saved);
        Ok(item)
    }

    /// Apply a field patch to an editable item.
    ///
    /// All diffs of one edit batch into a single change-history entry with
    /// one timestamp. An edit that changes nothing appends nothing.
    pub async fn edit_item(
        &self,
        department: Department,
        schedule_id: &str,
        item_id: &str,
        input: EditItemInput,
    ) -> AppResult<ScheduleItem> {
        validate_actor_name(&input.actor).map_err(|e| AppError::validation("actor", e))?;
        validate_edit_values(&input)?;

        let mut schedule = self.load_schedule(department, schedule_id).await?;
        let item = schedule
            .item_mut(item_id)
            .ok_or_else(|| AppError::NotFound(format!("Schedule item {}", item_id)))?;

        if !item.status.can_edit() {
            return Err(AppError::validation(
                "status",
                format!(
                    "Items can only be edited while Scheduled or In Progress (current: {})",
                    item.status.label()
                ),
            ));
        }

        let changes = apply_patch(item, &input);
        if changes.is_empty() {
            return Ok(item.clone());
        }
        item.change_history
            .push(ChangeHistoryEntry::new(&input.actor, changes));
        let edited = item.clone();
        schedule.updated_at = Utc::now();

        let saved = self.store.save_schedule(department, schedule).await?;
        self.publish_schedule_updated(&saved);
        Ok(edited)
    }

    /// Transition an item to a new status.
    ///
    /// Invalid transitions are rejected before any mutation, naming both
    /// statuses. Completion derives and persists the audit record, then
    /// removes the item from the schedule (deleting the schedule document
    /// when it empties).
    pub async fn transition(
        &self,
        department: Department,
        schedule_id: &str,
        item_id: &str,
        input: TransitionInput,
    ) -> AppResult<TransitionOutcome> {
        validate_actor_name(&input.actor).map_err(|e| AppError::validation("actor", e))?;

        let mut schedule = self.load_schedule(department, schedule_id).await?;
        let item = schedule
            .item_mut(item_id)
            .ok_or_else(|| AppError::NotFound(format!("Schedule item {}", item_id)))?;

        let current = item.status;
        if !current.can_transition_to(input.status) {
            return Err(AppError::InvalidStatusTransition {
                from: current.label().to_string(),
                to: input.status.label().to_string(),
            });
        }

        item.change_history.push(ChangeHistoryEntry::new(
            &input.actor,
            vec![FieldChange::new(
                "status",
                serde_json::json!(current.as_str()),
                serde_json::json!(input.status.as_str()),
            )],
        ));
        item.status = input.status;
        let updated = item.clone();

        if input.status == ProductionStatus::Completed {
            return self.complete_item(department, schedule, updated).await;
        }

        schedule.updated_at = Utc::now();
        let saved = self.store.save_schedule(department, schedule).await?;
        self.publish_schedule_updated(&saved);
        Ok(TransitionOutcome::Updated { item: updated })
    }

    /// Drag-and-drop rescheduling: a non-status edit recording one combined
    /// `"{date} {start}-{end}"` old/new pair under the `time` field.
    pub async fn update_item_time(
        &self,
        department: Department,
        schedule_id: &str,
        item_id: &str,
        input: TimeUpdateInput,
    ) -> AppResult<ScheduleItem> {
        validate_actor_name(&input.actor).map_err(|e| AppError::validation("actor", e))?;
        validate_times(input.start_time.as_deref(), input.end_time.as_deref())?;

        let mut schedule = self.load_schedule(department, schedule_id).await?;
        let item = schedule
            .item_mut(item_id)
            .ok_or_else(|| AppError::NotFound(format!("Schedule item {}", item_id)))?;

        if !item.status.can_edit() {
            return Err(AppError::validation(
                "status",
                format!(
                    "Items can only be rescheduled while Scheduled or In Progress (current: {})",
                    item.status.label()
                ),
            ));
        }

        let old_slot = time_slot(item.date, item.start_time.as_deref(), item.end_time.as_deref());
        let new_slot = time_slot(
            input.date,
            input.start_time.as_deref(),
            input.end_time.as_deref(),
        );
        if old_slot != new_slot {
            item.change_history.push(ChangeHistoryEntry::new(
                &input.actor,
                vec![FieldChange::new(
                    "time",
                    serde_json::json!(old_slot),
                    serde_json::json!(new_slot),
                )],
            ));
        }
        item.date = input.date;
        item.start_time = input.start_time;
        item.end_time = input.end_time;
        let updated = item.clone();
        schedule.updated_at = Utc::now();

        let saved = self.store.save_schedule(department, schedule).await?;
        self.publish_schedule_updated(&saved);
        Ok(updated)
    }

    /// Administrative schedule deletion
    pub async fn delete_schedule(&self, department: Department, schedule_id: &str) -> AppResult<()> {
        self.store.delete_schedule(schedule_id).await?;
        self.events.publish(DashboardEvent::DataUpdated {
            department,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    async fn complete_item(
        &self,
        department: Department,
        mut schedule: Schedule,
        mut item: ScheduleItem,
    ) -> AppResult<TransitionOutcome> {
        // Completion never blocks on missing production data entry
        if item.actual_qty.is_none() {
            item.actual_qty = Some(item.planned_qty);
        }

        let recipe = self
            .reference
            .recipe_by_code(department, &item.recipe_code)
            .await?
            .ok_or_else(|| {
                AppError::ReferentialIntegrity(format!(
                    "Recipe {} not found for schedule item {}; audit record cannot be built",
                    item.recipe_code, item.id
                ))
            })?;

        let catalog_rows = self.catalog.all_rows()?;
        let audit =
            self.audit_builder
                .build(&item, &recipe, department, &catalog_rows, Utc::now());

        let audit = self.store.save_audit(audit).await?;

        // The item moves out of the schedule; past this point a failure
        // leaves the run in both stores until reconciled administratively.
        schedule.items.retain(|i| i.id != item.id);
        schedule.updated_at = Utc::now();

        let schedule_result = if schedule.items.is_empty() {
            self.store.delete_schedule(&schedule.id).await
        } else {
            self.store
                .save_schedule(department, schedule.clone())
                .await
                .map(|_| ())
        };
        if let Err(e) = schedule_result {
            tracing::warn!(
                audit_uid = %audit.uid,
                schedule_id = %schedule.id,
                error = %e,
                "audit record persisted but schedule update failed; run appears in both stores"
            );
            return Err(e.into());
        }

        let now = Utc::now();
        self.events.publish(DashboardEvent::NewAudit {
            audit_uid: audit.uid.clone(),
            department,
            timestamp: now,
        });
        self.events.publish(DashboardEvent::ProductionCompleted {
            item_id: item.id.clone(),
            audit_uid: audit.uid.clone(),
            department,
            timestamp: now,
        });
        self.events.publish(DashboardEvent::ScheduleUpdated {
            schedule_id: schedule.id.clone(),
            department,
            timestamp: now,
        });

        Ok(TransitionOutcome::Completed { audit })
    }

    async fn load_schedule(
        &self,
        department: Department,
        schedule_id: &str,
    ) -> AppResult<Schedule> {
        self.store
            .fetch_schedules(department)
            .await?
            .into_iter()
            .find(|s| s.id == schedule_id)
            .ok_or_else(|| AppError::NotFound(format!("Schedule {}", schedule_id)))
    }

    async fn find_schedule_for_date(
        &self,
        department: Department,
        date: NaiveDate,
    ) -> AppResult<Option<Schedule>> {
        Ok(self
            .store
            .fetch_schedules(department)
            .await?
            .into_iter()
            .find(|s| s.date == date))
    }

    fn publish_schedule_updated(&self, schedule: &Schedule) {
        self.events.publish(DashboardEvent::ScheduleUpdated {
            schedule_id: schedule.id.clone(),
            department: schedule.department,
            timestamp: Utc::now(),
        });
    }
}

/// Combined slot string recorded by time updates
fn time_slot(date: NaiveDate, start: Option<&str>, end: Option<&str>) -> String {
    format!(
        "{} {}-{}",
        date.format("%Y-%m-%d"),
        start.unwrap_or(""),
        end.unwrap_or("")
    )
}

fn validate_times(start: Option<&str>, end: Option<&str>) -> AppResult<()> {
    if let Some(start) = start {
        validate_time_hhmm(start).map_err(|e| AppError::validation("start_time", e))?;
    }
    if let Some(end) = end {
        validate_time_hhmm(end).map_err(|e| AppError::validation("end_time", e))?;
    }
    Ok(())
}

fn validate_edit_values(input: &EditItemInput) -> AppResult<()> {
    if let Some(qty) = input.planned_qty {
        validate_quantity(qty).map_err(|e| AppError::validation("planned_qty", e))?;
    }
    if let Some(qty) = input.actual_qty {
        validate_quantity(qty).map_err(|e| AppError::validation("actual_qty", e))?;
    }
    if let Some(score) = input.quality_score {
        validate_quality_score(score).map_err(|e| AppError::validation("quality_score", e))?;
    }
    validate_times(input.start_time.as_deref(), input.end_time.as_deref())
}

/// Apply the patch to the item, returning one diff per changed field
fn apply_patch(item: &mut ScheduleItem, input: &EditItemInput) -> Vec<FieldChange> {
    let mut changes = Vec::new();

    macro_rules! patch_field {
        ($name:literal, $target:expr, $value:expr) => {
            if let Some(value) = $value {
                if *$target != value {
                    changes.push(FieldChange::new(
                        $name,
                        serde_json::json!(&*$target),
                        serde_json::json!(&value),
                    ));
                    *$target = value;
                }
            }
        };
    }

    patch_field!("planned_qty", &mut item.planned_qty, input.planned_qty);
    patch_field!(
        "handler_name",
        &mut item.handler_name,
        input.handler_name.clone()
    );
    patch_field!(
        "manager_name",
        &mut item.manager_name,
        input.manager_name.clone()
    );
    patch_field!("notes", &mut item.notes, input.notes.clone());
    patch_field!("deviations", &mut item.deviations, input.deviations.clone());
    patch_field!(
        "ingredient_suppliers",
        &mut item.ingredient_suppliers,
        input.ingredient_suppliers.clone()
    );
    patch_field!("batch_codes", &mut item.batch_codes, input.batch_codes.clone());
    patch_field!(
        "sell_by_dates",
        &mut item.sell_by_dates,
        input.sell_by_dates.clone()
    );
    patch_field!(
        "receiving_dates",
        &mut item.receiving_dates,
        input.receiving_dates.clone()
    );

    // Option-valued fields diff against their inner value
    if let Some(qty) = input.actual_qty {
        if item.actual_qty != Some(qty) {
            changes.push(FieldChange::new(
                "actual_qty",
                serde_json::json!(item.actual_qty),
                serde_json::json!(qty),
            ));
            item.actual_qty = Some(qty);
        }
    }
    if let Some(score) = input.quality_score {
        if item.quality_score != Some(score) {
            changes.push(FieldChange::new(
                "quality_score",
                serde_json::json!(item.quality_score),
                serde_json::json!(score),
            ));
            item.quality_score = Some(score);
        }
    }
    if let Some(start) = input.start_time.clone() {
        if item.start_time.as_deref() != Some(start.as_str()) {
            changes.push(FieldChange::new(
                "start_time",
                serde_json::json!(item.start_time),
                serde_json::json!(start),
            ));
            item.start_time = Some(start);
        }
    }
    if let Some(end) = input.end_time.clone() {
        if item.end_time.as_deref() != Some(end.as_str()) {
            changes.push(FieldChange::new(
                "end_time",
                serde_json::json!(item.end_time),
                serde_json::json!(end),
            ));
            item.end_time = Some(end);
        }
    }

    changes
}
