//! Food handler reference data

use serde::{Deserialize, Serialize};

use crate::types::Department;

/// A food handler or manager registered to a department
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    pub name: String,
    #[serde(default)]
    pub role: StaffRole,
    pub department: Department,
}

/// Staff role within a department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    #[default]
    Handler,
    Manager,
}
