//! HTTP handlers for the Food Production Management Platform

mod audit;
mod calendar;
mod health;
mod reference;
mod schedule;

pub use audit::*;
pub use calendar::*;
pub use health::*;
pub use reference::*;
pub use schedule::*;

use serde::Deserialize;
use shared::Department;

/// Department query parameter shared by collection endpoints
#[derive(Debug, Deserialize)]
pub struct DepartmentQuery {
    pub department: String,
}

impl DepartmentQuery {
    pub fn department(&self) -> Department {
        Department::parse(&self.department)
    }
}
