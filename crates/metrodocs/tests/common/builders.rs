//! Builders for record payloads, so tests only spell out the fields they
//! care about.

#![allow(dead_code)]

use metrodocs::{DocumentDraft, DocumentType, Priority, Stage, WorkflowDraft};

pub struct DocumentBuilder {
    draft: DocumentDraft,
}

impl DocumentBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            draft: DocumentDraft {
                title: title.to_string(),
                department: "Maintenance".to_string(),
                doc_type: DocumentType::Maintenance,
                summary: format!("Summary of {}", title),
                content: None,
                status: None,
            },
        }
    }

    pub fn doc_type(mut self, doc_type: DocumentType) -> Self {
        self.draft.doc_type = doc_type;
        self
    }

    pub fn department(mut self, department: &str) -> Self {
        self.draft.department = department.to_string();
        self
    }

    pub fn summary(mut self, summary: &str) -> Self {
        self.draft.summary = summary.to_string();
        self
    }

    pub fn build(self) -> DocumentDraft {
        self.draft
    }
}

pub struct WorkflowBuilder {
    draft: WorkflowDraft,
}

impl WorkflowBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            draft: WorkflowDraft {
                title: title.to_string(),
                description: format!("Description of {}", title),
                department: "Operations".to_string(),
                current_stage: None,
                priority: None,
            },
        }
    }

    pub fn stage(mut self, stage: Stage) -> Self {
        self.draft.current_stage = Some(stage);
        self
    }

    pub fn urgent(mut self) -> Self {
        self.draft.priority = Some(Priority::Urgent);
        self
    }

    pub fn build(self) -> WorkflowDraft {
        self.draft
    }
}
