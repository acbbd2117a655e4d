//! Workflow items moving through the approval lifecycle.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_optional_text, require_text};
use crate::error::ValidationError;
use crate::store::{Draft, Patch, Record};

/// Position of a workflow item in its approval lifecycle.
///
/// The order is submitted → review → approved → complete. The enum is
/// closed: a stage string outside these four values is rejected when a
/// payload or fixture is deserialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    #[default]
    Submitted,
    Review,
    Approved,
    Complete,
}

impl Stage {
    pub const ORDER: [Stage; 4] = [
        Stage::Submitted,
        Stage::Review,
        Stage::Approved,
        Stage::Complete,
    ];

    /// The stage an approval moves to. `Complete` maps to itself.
    pub fn next(self) -> Stage {
        match self {
            Stage::Submitted => Stage::Review,
            Stage::Review => Stage::Approved,
            Stage::Approved => Stage::Complete,
            Stage::Complete => Stage::Complete,
        }
    }

    pub fn is_complete(self) -> bool {
        self == Stage::Complete
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Submitted => "submitted",
            Stage::Review => "review",
            Stage::Approved => "approved",
            Stage::Complete => "complete",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Normal,
    Urgent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub current_stage: Stage,
    pub priority: Priority,
    pub department: String,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for WorkflowItem {
    fn key(&self) -> &str {
        &self.id
    }

    fn list_order(a: &Self, b: &Self) -> Ordering {
        b.submitted_at.cmp(&a.submitted_at)
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorkflowDraft {
    pub title: String,
    pub description: String,
    pub department: String,
    #[serde(default)]
    pub current_stage: Option<Stage>,
    #[serde(default)]
    pub priority: Option<Priority>,
}

impl Draft for WorkflowDraft {
    type Record = WorkflowItem;

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        require_text("description", &self.description)?;
        require_text("department", &self.department)
    }

    fn into_record(self, id: String, now: DateTime<Utc>) -> WorkflowItem {
        WorkflowItem {
            id,
            title: self.title,
            description: self.description,
            current_stage: self.current_stage.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            department: self.department,
            submitted_at: now,
            updated_at: now,
        }
    }
}

/// The mutable subset of a workflow item.
///
/// Any stage may be written here; ordering is only suggested by
/// [`Stage::next`], never enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorkflowPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub current_stage: Option<Stage>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub department: Option<String>,
}

impl WorkflowPatch {
    pub fn stage(stage: Stage) -> Self {
        Self {
            current_stage: Some(stage),
            ..Default::default()
        }
    }
}

impl Patch<WorkflowItem> for WorkflowPatch {
    fn validate(&self) -> Result<(), ValidationError> {
        require_optional_text("title", self.title.as_deref())?;
        require_optional_text("description", self.description.as_deref())?;
        require_optional_text("department", self.department.as_deref())
    }

    fn apply(self, item: &mut WorkflowItem) {
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(stage) = self.current_stage {
            item.current_stage = stage;
        }
        if let Some(priority) = self.priority {
            item.priority = priority;
        }
        if let Some(department) = self.department {
            item.department = department;
        }
    }
}
