//! Approval actions over workflow items.
//!
//! Stage transitions come from [`Stage::next`]; the engine does not guard
//! against arbitrary stage writes made through [`WorkflowPatch`].

use tracing::info_span;

use crate::error::WorkflowError;
use crate::model::{Priority, Stage, WorkflowItem, WorkflowPatch};
use crate::store::RecordStore;

pub struct WorkflowEngine<'a> {
    store: &'a RecordStore,
}

impl<'a> WorkflowEngine<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Moves the item one stage forward. An item already at `complete`
    /// stays there (its `updatedAt` is still refreshed).
    pub fn approve(&self, id: &str) -> Result<WorkflowItem, WorkflowError> {
        let _span = info_span!("workflow.approve", id).entered();
        let item = self.apply(id, |item| WorkflowPatch::stage(item.current_stage.next()))?;
        log::info!("Approved workflow item {} -> {}", id, item.current_stage);
        Ok(item)
    }

    /// Sends the item back to `submitted`, whatever its current stage.
    pub fn reject(&self, id: &str) -> Result<WorkflowItem, WorkflowError> {
        let _span = info_span!("workflow.reject", id).entered();
        let item = self.apply(id, |_| WorkflowPatch::stage(Stage::Submitted))?;
        log::info!("Rejected workflow item {}", id);
        Ok(item)
    }

    /// Items not yet complete, in list order.
    pub fn pending_items(&self) -> Vec<WorkflowItem> {
        self.store
            .list_workflow_items()
            .into_iter()
            .filter(|item| !item.current_stage.is_complete())
            .collect()
    }

    /// Pending items flagged urgent, in list order.
    pub fn urgent_pending(&self) -> Vec<WorkflowItem> {
        self.pending_items()
            .into_iter()
            .filter(|item| item.priority == Priority::Urgent)
            .collect()
    }

    fn apply<F>(&self, id: &str, make_patch: F) -> Result<WorkflowItem, WorkflowError>
    where
        F: FnOnce(&WorkflowItem) -> WorkflowPatch,
    {
        self.store
            .workflow_items()
            .update_with(id, make_patch)?
            .ok_or_else(|| WorkflowError::NotFound(id.to_string()))
    }
}
