//! Document classification for uploads.
//!
//! Classification is a capability behind the [`Classifier`] trait so the
//! intake flow never depends on how a category is chosen. Two
//! implementations ship here: keyword matching over the filename and the
//! start of the content, and a uniform random pick.

pub mod keyword;
pub mod random;

pub use keyword::KeywordClassifier;
pub use random::RandomClassifier;

use serde::{Deserialize, Serialize};

use crate::model::DocumentType;

/// Outcome of classifying one upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// Human label, e.g. "Maintenance Report".
    pub label: String,
    pub category: DocumentType,
    pub summary: String,
    /// Department the document is routed to.
    pub department: String,
}

pub trait Classifier: Send + Sync {
    fn classify(&self, filename: &str, content: &[u8]) -> Classification;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Which classifier the server should construct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierKind {
    #[default]
    Keyword,
    Random,
}

impl ClassifierKind {
    pub fn build(self) -> Box<dyn Classifier> {
        match self {
            ClassifierKind::Keyword => Box::new(KeywordClassifier::new()),
            ClassifierKind::Random => Box::new(RandomClassifier::new()),
        }
    }
}

/// One document category the classifiers know how to produce.
pub(crate) struct CategoryProfile {
    pub label: &'static str,
    pub category: DocumentType,
    pub department: &'static str,
    pub summary: &'static str,
    pub keywords: &'static [&'static str],
}

impl CategoryProfile {
    pub(crate) fn classification(&self, filename: &str) -> Classification {
        Classification {
            label: self.label.to_string(),
            category: self.category,
            summary: format!("{} - {}", filename, self.summary),
            department: self.department.to_string(),
        }
    }
}

/// Known categories, in tie-break order.
pub(crate) const PROFILES: &[CategoryProfile] = &[
    CategoryProfile {
        label: "Maintenance Report",
        category: DocumentType::Maintenance,
        department: "Maintenance Department",
        summary: "Weekly brake system inspection completed successfully for Train Car 205",
        keywords: &[
            "maintenance",
            "inspection",
            "repair",
            "brake",
            "signal",
            "rolling stock",
            "job card",
            "overhaul",
        ],
    },
    CategoryProfile {
        label: "Safety Circular",
        category: DocumentType::Safety,
        department: "Safety Department",
        summary: "Updated platform safety guidelines and emergency procedures",
        keywords: &[
            "safety",
            "circular",
            "hazard",
            "incident",
            "evacuation",
            "platform",
            "audit",
        ],
    },
    CategoryProfile {
        label: "Vendor Invoice",
        category: DocumentType::Finance,
        department: "Finance Department",
        summary: "Track supplies and materials procurement invoice for Q1 2025",
        keywords: &[
            "invoice",
            "budget",
            "procurement",
            "payment",
            "vendor",
            "purchase order",
            "expense",
        ],
    },
    CategoryProfile {
        label: "Training Manual",
        category: DocumentType::Hr,
        department: "HR Department",
        summary: "Staff training documentation for operational procedures",
        keywords: &[
            "training",
            "staff",
            "leave",
            "recruitment",
            "payroll",
            "employee",
            "roster",
        ],
    },
];
