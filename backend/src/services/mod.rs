//! Business logic services for the Food Production Management Platform

pub mod audit_builder;
pub mod audit_maintenance;
pub mod calendar;
pub mod reference;
pub mod schedule;
pub mod supplier_catalog;
pub mod supplier_match;

pub use audit_builder::AuditBuilder;
pub use audit_maintenance::AuditMaintenance;
pub use reference::ReferenceData;
pub use schedule::ScheduleService;
pub use supplier_catalog::SupplierCatalog;
